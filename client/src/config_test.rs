use super::*;

#[test]
fn meta_tag_wins_over_compiled_value() {
    assert_eq!(
        resolve_base_url(Some("https://api.school.test/api/"), Some("http://other")),
        "https://api.school.test/api"
    );
}

#[test]
fn blank_meta_falls_through_to_compiled_value() {
    assert_eq!(resolve_base_url(Some("  "), Some("http://compiled/api")), "http://compiled/api");
}

#[test]
fn default_used_when_nothing_configured() {
    assert_eq!(resolve_base_url(None, None), DEFAULT_API_BASE_URL);
}

#[test]
fn api_base_url_outside_browser_uses_fallbacks() {
    let expected = resolve_base_url(None, option_env!("SCHOOL_API_BASE_URL"));
    assert_eq!(api_base_url(), expected);
}
