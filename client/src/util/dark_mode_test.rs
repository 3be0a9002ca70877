use super::*;

#[test]
fn parse_stored_accepts_only_booleans() {
    assert_eq!(parse_stored(Some("true")), Some(true));
    assert_eq!(parse_stored(Some("false")), Some(false));
    assert_eq!(parse_stored(Some("yes")), None);
    assert_eq!(parse_stored(None), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
