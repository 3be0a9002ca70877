//! Dark mode preference.
//!
//! The stored preference wins; without one the system color scheme decides.
//! The choice is applied as a `data-theme` attribute on `<html>`. SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

const STORAGE_KEY: &str = "school_admin_dark";

/// Parse a stored preference; anything but `"true"`/`"false"` is unset.
fn parse_stored(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Whether dark mode should be on at startup.
pub fn read_preference() -> bool {
    if let Some(stored) = parse_stored(super::storage::load_string(STORAGE_KEY).as_deref()) {
        return stored;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    super::storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
