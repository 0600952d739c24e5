//! REST API helpers for communicating with the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the shared
//! [`RequestContext`] supplying the `Authorization` header once a session
//! exists. Native builds (tests) compile stubs that fail with a fixed
//! message, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with human-readable messages so fetch
//! failures degrade page behavior without crashing the app. Auth failures
//! prefer the service's own `message` payload when one is present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::context::RequestContext;
use super::types::{AuthResponse, Post};
#[cfg(feature = "hydrate")]
use super::types::PostList;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Login failed";

#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FAILED: &str = "Registration failed";

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "hydrate"))]
fn posts_endpoint(limit: Option<u32>, featured_only: bool) -> String {
    let mut url = String::from("/api/posts");
    let mut sep = '?';
    if featured_only {
        url.push(sep);
        url.push_str("featured=true");
        sep = '&';
    }
    if let Some(limit) = limit {
        url.push(sep);
        url.push_str(&format!("limit={limit}"));
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failure_message(payload: Option<&serde_json::Value>, fallback: &str) -> String {
    payload
        .and_then(|value| value.get("message"))
        .and_then(|message| message.as_str())
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
fn with_context(
    ctx: &RequestContext,
    req: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    match ctx.authorization() {
        Some(value) => req.header("Authorization", &value),
        None => req,
    }
}

/// Fetch posts from `/api/posts`, optionally limited and/or restricted to
/// featured posts.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_posts(
    ctx: &RequestContext,
    limit: Option<u32>,
    featured_only: bool,
) -> Result<Vec<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = posts_endpoint(limit, featured_only);
        let resp = with_context(ctx, gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("posts", resp.status()));
        }
        let body: PostList = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.posts)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, limit, featured_only);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch a single post from `/api/posts/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the post does not
/// exist.
pub async fn fetch_post(ctx: &RequestContext, post_id: &str) -> Result<Post, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_endpoint(post_id);
        let resp = with_context(ctx, gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post", resp.status()));
        }
        resp.json::<Post>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, post_id);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Delete a post via `DELETE /api/posts/{id}`. Requires an authenticated
/// request context; the server rejects the call otherwise.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_post(ctx: &RequestContext, post_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_endpoint(post_id);
        let resp = with_context(ctx, gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, post_id);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the service's `message` payload when the server rejects the
/// credentials, or a generic message for transport and decoding failures.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        auth_request("/api/auth/login", &payload, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`login`], against the registration endpoint.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        auth_request("/api/auth/register", &payload, REGISTER_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn auth_request(
    endpoint: &str,
    payload: &serde_json::Value,
    fallback: &str,
) -> Result<AuthResponse, String> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    if !resp.ok() {
        let body = resp.json::<serde_json::Value>().await.ok();
        return Err(auth_failure_message(body.as_ref(), fallback));
    }
    resp.json::<AuthResponse>().await.map_err(|_| fallback.to_owned())
}
