use super::*;

#[test]
fn memory_store_get_missing_returns_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::default();
    store.set("token", "abc123");
    assert_eq!(store.get("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_store_set_replaces_previous_value() {
    let store = MemoryStore::default();
    store.set("token", "first");
    store.set("token", "second");
    assert_eq!(store.get("token"), Some("second".to_owned()));
}

#[test]
fn memory_store_remove_deletes_entry() {
    let store = MemoryStore::default();
    store.set("user", "{}");
    store.remove("user");
    assert_eq!(store.get("user"), None);
}

#[test]
fn memory_store_remove_missing_is_noop() {
    let store = MemoryStore::default();
    store.remove("user");
    assert_eq!(store.get("user"), None);
}

#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserStore;
    store.set("token", "abc123");
    assert_eq!(store.get("token"), None);
    store.remove("token");
    assert_eq!(store.get("token"), None);
}
