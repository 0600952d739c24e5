//! Session management for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionManager`] lives for the whole application; the root
//! component constructs it, hydrates it from persistent storage, and
//! provides it via context. Pages call its operations in response to user
//! actions; components read the session snapshot to decide what to render.
//! The manager is the only writer of the persisted credential keys and of
//! the shared request context.
//!
//! Login, registration, and hydration each involve a single in-flight
//! call. Overlapping login/register calls are not coordinated: whichever
//! network response is applied last wins.
//!
//! ERROR HANDLING
//! ==============
//! Hydration never surfaces an error: unreadable storage means "no
//! session", and a stored identity that fails to parse is purged on the
//! spot. Login and registration return [`SessionError`] with a message
//! suitable for direct display; the session is left untouched on failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api;
use crate::net::context::RequestContext;
use crate::net::types::User;
use crate::util::storage::SessionStore;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Snapshot of the current authenticated session.
///
/// `user` and `token` are always set and cleared together; `ready` flips to
/// true exactly once, when hydration completes, and never reverts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Profile of the signed-in user, when a session is active.
    pub user: Option<User>,
    /// Bearer credential for the active session.
    pub token: Option<String>,
    /// True once hydration from persistent storage has completed.
    pub ready: bool,
}

/// Failure result of a login or registration attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The service rejected the credentials, or the request never produced
    /// a usable response. The message is suitable for direct display.
    #[error("{0}")]
    AuthenticationFailed(String),
}

/// Outcome of reading the persisted session from storage.
enum StoredSession {
    Active { user: User, token: String },
    Absent,
    Corrupt,
}

/// Owns the authenticated-user identity and bearer credential for the
/// lifetime of the application.
#[derive(Clone)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
    store: Arc<dyn SessionStore>,
    http: RequestContext,
}

impl SessionManager {
    /// Create a manager over the given storage and request-context ports.
    /// The session is not usable until [`hydrate`](Self::hydrate) runs.
    pub fn new(store: Arc<dyn SessionStore>, http: RequestContext) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store,
            http,
        }
    }

    /// Restore a persisted session from storage, once.
    ///
    /// A stored identity that fails to parse clears both persisted entries;
    /// a missing entry (or unreadable storage) just means no session. Either
    /// way the session becomes ready and no error surfaces. Calls after the
    /// first completion are no-ops.
    pub fn hydrate(&self) {
        if self.state.with_untracked(|s| s.ready) {
            return;
        }
        match read_stored(self.store.as_ref()) {
            StoredSession::Active { user, token } => {
                self.http.set_bearer(&token);
                self.state.update(|s| {
                    s.user = Some(user);
                    s.token = Some(token);
                    s.ready = true;
                });
            }
            StoredSession::Corrupt => {
                log::warn!("stored session failed to parse; clearing saved credentials");
                self.store.remove(TOKEN_KEY);
                self.store.remove(USER_KEY);
                self.state.update(|s| s.ready = true);
            }
            StoredSession::Absent => {
                self.state.update(|s| s.ready = true);
            }
        }
    }

    /// Sign in against the remote auth service.
    ///
    /// On success the identity and credential are installed in memory, in
    /// storage, and in the shared request context.
    ///
    /// # Errors
    ///
    /// [`SessionError::AuthenticationFailed`] with a displayable message;
    /// the session is left exactly as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        match api::login(email, password).await {
            Ok(auth) => {
                self.install_session(auth.user, auth.token);
                Ok(())
            }
            Err(message) => Err(SessionError::AuthenticationFailed(message)),
        }
    }

    /// Create an account against the remote auth service.
    ///
    /// Same contract as [`login`](Self::login), against the registration
    /// endpoint.
    ///
    /// # Errors
    ///
    /// [`SessionError::AuthenticationFailed`] with a displayable message;
    /// the session is left exactly as it was.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        match api::register(name, email, password).await {
            Ok(auth) => {
                self.install_session(auth.user, auth.token);
                Ok(())
            }
            Err(message) => Err(SessionError::AuthenticationFailed(message)),
        }
    }

    /// End the session: clear the in-memory state, delete both persisted
    /// entries, and drop the credential from the request context. Calling
    /// this with no active session is a no-op with the same end state.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.http.clear_bearer();
        self.state.update(|s| {
            s.user = None;
            s.token = None;
            s.ready = true;
        });
    }

    /// The signed-in user, or `None` before hydration or with no session.
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Whether hydration has completed.
    pub fn is_ready(&self) -> bool {
        self.state.with(|s| s.ready)
    }

    /// Read-only reactive view of the session for components.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// A clone of the shared request context, for callers issuing their own
    /// API requests.
    pub fn request_context(&self) -> RequestContext {
        self.http.clone()
    }

    fn install_session(&self, user: User, token: String) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                self.store.set(TOKEN_KEY, &token);
                self.store.set(USER_KEY, &raw);
            }
            Err(err) => {
                // Storage keeps the pair invariant: nothing rather than a lone token.
                log::error!("failed to serialize user for storage: {err}");
                self.store.remove(TOKEN_KEY);
                self.store.remove(USER_KEY);
            }
        }
        self.http.set_bearer(&token);
        self.state.update(|s| {
            s.user = Some(user);
            s.token = Some(token);
            s.ready = true;
        });
    }
}

fn read_stored(store: &dyn SessionStore) -> StoredSession {
    match (store.get(TOKEN_KEY), store.get(USER_KEY)) {
        (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => StoredSession::Active { user, token },
            Err(_) => StoredSession::Corrupt,
        },
        _ => StoredSession::Absent,
    }
}
