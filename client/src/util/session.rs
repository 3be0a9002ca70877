//! Auth token persistence in `localStorage` and cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and register return an access/refresh pair. Both are written to
//! `localStorage` (read by the fetch layer) and to cookies (visible to the
//! SSR host and other tabs). Logout clears both stores. Tokens are never
//! refreshed or checked for expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use records::escape;
use records::types::{AuthTokens, SessionUser};

pub const ACCESS_TOKEN_KEY: &str = "school_access_token";
pub const REFRESH_TOKEN_KEY: &str = "school_refresh_token";
const USER_KEY: &str = "school_session_user";

/// Cookie assignment string for `document.cookie`; `None` expires the cookie.
pub fn cookie_assignment(name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{name}={}; path=/; SameSite=Lax", escape::cookie_value(value)),
        None => format!("{name}=; path=/; max-age=0; SameSite=Lax"),
    }
}

/// Look up one cookie in a `document.cookie` string.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| escape::decode(value))
        .filter(|value| !value.is_empty())
}

/// Persist a fresh login/register response.
pub fn save_tokens(tokens: &AuthTokens) {
    write_both(ACCESS_TOKEN_KEY, Some(&tokens.access_token));
    write_both(REFRESH_TOKEN_KEY, tokens.refresh_token.as_deref());
    match &tokens.user {
        Some(user) => super::storage::save_json(USER_KEY, user),
        None => super::storage::remove(USER_KEY),
    }
}

/// Current access token: `localStorage` first, then the cookie.
pub fn load_access_token() -> Option<String> {
    super::storage::load_string(ACCESS_TOKEN_KEY)
        .filter(|token| !token.is_empty())
        .or_else(|| read_cookie(&document_cookies(), ACCESS_TOKEN_KEY))
}

/// User echoed by the last login, if any.
pub fn load_user() -> Option<SessionUser> {
    super::storage::load_json(USER_KEY)
}

/// Forget the session in both stores.
pub fn clear_tokens() {
    write_both(ACCESS_TOKEN_KEY, None);
    write_both(REFRESH_TOKEN_KEY, None);
    super::storage::remove(USER_KEY);
}

fn write_both(key: &str, value: Option<&str>) {
    match value {
        Some(value) => super::storage::save_string(key, value),
        None => super::storage::remove(key),
    }
    set_document_cookie(&cookie_assignment(key, value));
}

fn document_cookies() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn set_document_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(doc) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        {
            let _ = doc.set_cookie(assignment);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}
