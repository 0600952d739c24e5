use super::*;

#[test]
fn posts_endpoint_without_filters() {
    assert_eq!(posts_endpoint(None, false), "/api/posts");
}

#[test]
fn posts_endpoint_with_limit_only() {
    assert_eq!(posts_endpoint(Some(6), false), "/api/posts?limit=6");
}

#[test]
fn posts_endpoint_with_featured_only() {
    assert_eq!(posts_endpoint(None, true), "/api/posts?featured=true");
}

#[test]
fn posts_endpoint_with_featured_and_limit() {
    assert_eq!(posts_endpoint(Some(3), true), "/api/posts?featured=true&limit=3");
}

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("p42"), "/api/posts/p42");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("posts", 500), "posts request failed: 500");
}

#[test]
fn auth_failure_message_prefers_service_message() {
    let payload = serde_json::json!({ "message": "Invalid credentials" });
    assert_eq!(
        auth_failure_message(Some(&payload), LOGIN_FAILED),
        "Invalid credentials"
    );
}

#[test]
fn auth_failure_message_falls_back_without_payload() {
    assert_eq!(auth_failure_message(None, LOGIN_FAILED), "Login failed");
}

#[test]
fn auth_failure_message_falls_back_on_non_string_message() {
    let payload = serde_json::json!({ "message": 42 });
    assert_eq!(
        auth_failure_message(Some(&payload), REGISTER_FAILED),
        "Registration failed"
    );
}

#[test]
fn auth_failure_message_falls_back_on_unrelated_payload() {
    let payload = serde_json::json!({ "error": "nope" });
    assert_eq!(auth_failure_message(Some(&payload), LOGIN_FAILED), "Login failed");
}
