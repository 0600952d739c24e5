//! Shared request context holding the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the only writer; `api` consults the context to
//! attach `Authorization` to outgoing requests. Clones share one underlying
//! slot, so a credential installed after login is visible to every caller
//! holding a clone.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::{Arc, Mutex};

/// Shared holder for the current bearer credential.
#[derive(Clone, Default)]
pub struct RequestContext {
    bearer: Arc<Mutex<Option<String>>>,
}

impl RequestContext {
    /// Install `token` as the credential for subsequent requests.
    pub fn set_bearer(&self, token: &str) {
        *self.bearer.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_owned());
    }

    /// Remove the credential; subsequent requests go out unauthenticated.
    pub fn clear_bearer(&self) {
        *self.bearer.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// The raw bearer token, if one is installed.
    pub fn bearer(&self) -> Option<String> {
        self.bearer.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The `Authorization` header value for the current credential, if any.
    pub fn authorization(&self) -> Option<String> {
        self.bearer().map(|token| format!("Bearer {token}"))
    }
}
