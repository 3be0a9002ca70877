//! Percent-encoding for URL path segments and cookie values.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Bytes that are not cookie octets, plus `%` so decoding round-trips.
const COOKIE_VALUE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b',').add(b';').add(b'\\').add(b'%');

/// Encode one path segment, e.g. an id in `/students/<id>`.
#[must_use]
pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Encode a value for `document.cookie`.
#[must_use]
pub fn cookie_value(raw: &str) -> String {
    utf8_percent_encode(raw, COOKIE_VALUE).to_string()
}

/// Decode `%XX` escapes; malformed escapes are kept as written.
#[must_use]
pub fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
