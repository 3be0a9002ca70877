//! Backend base-URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server shell renders `<meta name="school-api-base-url">` from its own
//! environment so one WASM bundle can point at different backends. Builds
//! without a server (static hosting) fall back to the compile-time
//! `SCHOOL_API_BASE_URL`, then to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the meta tag carrying the backend base URL.
pub const API_BASE_META: &str = "school-api-base-url";

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Pick the first non-blank candidate and strip trailing slashes.
pub fn resolve_base_url(meta: Option<&str>, compiled: Option<&str>) -> String {
    [meta, compiled]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Base URL for REST calls in the current environment.
pub fn api_base_url() -> String {
    resolve_base_url(read_meta().as_deref(), option_env!("SCHOOL_API_BASE_URL"))
}

fn read_meta() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
