//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. Route guards read it to
//! redirect, the header reads it for the user name, and the login/register
//! pages write it after persisting tokens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::ApiError;
use records::types::{AuthTokens, SessionUser};

/// Current session. `loading` is true until the stored token has been read
/// on the client.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    /// State restored from persisted storage.
    pub fn restored(token: Option<String>, user: Option<SessionUser>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), user, loading: false }
    }

    /// State right after a successful login or register.
    pub fn signed_in(tokens: &AuthTokens) -> Self {
        Self { token: Some(tokens.access_token.clone()), user: tokens.user.clone(), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { token: None, user: None, loading: false }
    }

    /// Signed-out state when `err` means the session is gone (401/403 or no
    /// token); `None` for every other failure.
    pub fn after_failure(err: &ApiError) -> Option<Self> {
        err.is_auth_failure().then(Self::signed_out)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name shown in the header.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Admin".to_owned(), |u| u.name.clone())
    }
}
