use super::*;

use crate::net::types::Author;

fn post_by(author_id: &str) -> Post {
    Post {
        id: "p1".to_owned(),
        title: "Title".to_owned(),
        excerpt: "Excerpt".to_owned(),
        content: "Body".to_owned(),
        category: "Technology".to_owned(),
        tags: Vec::new(),
        cover_image: "https://img.example/p1.jpg".to_owned(),
        read_time: 5,
        featured: false,
        created_at: "2024-01-15T10:30:00.000Z".to_owned(),
        author: Author {
            id: author_id.to_owned(),
            name: "Alice".to_owned(),
        },
    }
}

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

#[test]
fn is_author_true_for_matching_ids() {
    let viewer = user("u1");
    assert!(is_author(Some(&viewer), &post_by("u1")));
}

#[test]
fn is_author_false_for_other_user() {
    let viewer = user("u2");
    assert!(!is_author(Some(&viewer), &post_by("u1")));
}

#[test]
fn is_author_false_when_signed_out() {
    assert!(!is_author(None, &post_by("u1")));
}

#[test]
fn related_excluding_drops_current_post() {
    let mut other = post_by("u1");
    other.id = "p2".to_owned();
    let related = related_excluding(vec![post_by("u1"), other], "p1");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, "p2");
}

#[test]
fn related_excluding_keeps_unrelated_lists_intact() {
    let mut a = post_by("u1");
    a.id = "p2".to_owned();
    let mut b = post_by("u1");
    b.id = "p3".to_owned();
    let related = related_excluding(vec![a, b], "p1");
    assert_eq!(related.len(), 2);
}

#[test]
fn related_sidebar_shows_at_most_three() {
    assert_eq!(RELATED_LIMIT, 3);
}
