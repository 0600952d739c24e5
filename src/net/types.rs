//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless: post documents use `_id` and camelCase field names, while the
//! auth endpoints return a plain `id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Post author as embedded in post documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A blog post as represented by the posts API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Post headline.
    pub title: String,
    /// Short summary shown on cards and in the detail hero.
    pub excerpt: String,
    /// Full post body, rendered as preformatted text.
    pub content: String,
    /// Single category label (e.g. `"Technology"`).
    pub category: String,
    /// Freeform tags; absent in older documents.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL.
    pub cover_image: String,
    /// Estimated reading time in minutes. The backend sometimes emits this
    /// as an integral float.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub read_time: i64,
    /// Whether the post is editorially featured.
    #[serde(default)]
    pub featured: bool,
    /// Creation timestamp as an ISO 8601 string.
    pub created_at: String,
    /// Author reference.
    pub author: Author,
}

/// Envelope returned by the posts index endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    /// Posts matching the query, most recent first.
    pub posts: Vec<Post>,
}

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent authenticated requests.
    pub token: String,
    /// Profile of the signed-in user.
    pub user: User,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
