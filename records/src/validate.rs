//! Field-level validation rules and the error map forms render from.
//!
//! DESIGN
//! ======
//! Forms keep raw string inputs exactly as typed. `validate()` walks each
//! field through a rule from this module; [`FieldErrors::check`] records the
//! first failure per field and yields the parsed value on success, so one
//! pass both annotates every bad field and builds the payload.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?88)?01[3-9]\d{8}$").expect("phone pattern compiles"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("time pattern compiles"));

pub const REQUIRED: &str = "This field is required";

/// Validation failures keyed by field name; first failure per field wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless it already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_insert_with(|| message.into());
    }

    /// Record a rule outcome; returns the parsed value when it passed.
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors whose field name starts with `prefix` (e.g. `perClassPayments.`).
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.0
            .iter()
            .filter(move |(field, _)| field.starts_with(prefix))
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn merge(&mut self, other: Self) {
        for (field, message) in other.0 {
            self.add(&field, message);
        }
    }

    /// Keep only errors for the given fields (used for per-step checks).
    #[must_use]
    pub fn only(&self, fields: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(field, _)| {
                    fields
                        .iter()
                        .any(|f| field.as_str() == *f || field.starts_with(&format!("{f}.")))
                })
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// =============================================================================
// RULES
// =============================================================================

/// Required text with length bounds (counted in characters, after trim).
///
/// # Errors
///
/// Returns a field message when blank or out of bounds.
pub fn text(raw: &str, min: usize, max: usize) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    let len = value.chars().count();
    if len < min {
        return Err(format!("Must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("Must be at most {max} characters"));
    }
    Ok(value.to_owned())
}

/// Optional text: blank is `None`, otherwise bounded by `max`.
///
/// # Errors
///
/// Returns a field message when longer than `max`.
pub fn optional_text(raw: &str, max: usize) -> Result<Option<String>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max {
        return Err(format!("Must be at most {max} characters"));
    }
    Ok(Some(value.to_owned()))
}

/// Required number within `min..=max`.
///
/// # Errors
///
/// Returns a field message when blank, not numeric, or out of range.
pub fn number(raw: &str, min: f64, max: f64) -> Result<f64, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    let parsed = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| "Must be a number".to_owned())?;
    if parsed < min || parsed > max {
        return Err(format!("Must be between {} and {}", crate::grid::format_number(min), crate::grid::format_number(max)));
    }
    Ok(parsed)
}

/// Required strictly positive amount.
///
/// # Errors
///
/// Returns a field message when blank, not numeric, or not above zero.
pub fn amount(raw: &str) -> Result<f64, String> {
    let parsed = number(raw, f64::MIN, f64::MAX)?;
    if parsed <= 0.0 {
        return Err("Must be greater than 0".to_owned());
    }
    Ok(parsed)
}

/// Required whole number within `min..=max`.
///
/// # Errors
///
/// Returns a field message when blank, not an integer, or out of range.
pub fn integer(raw: &str, min: i64, max: i64) -> Result<i64, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    let parsed = value.parse::<i64>().map_err(|_| "Must be a whole number".to_owned())?;
    if parsed < min || parsed > max {
        return Err(format!("Must be between {min} and {max}"));
    }
    Ok(parsed)
}

/// Required four-digit year within `min..=max`.
///
/// # Errors
///
/// Returns a field message when blank, malformed, or out of range.
pub fn year(raw: &str, min: i32, max: i32) -> Result<i32, String> {
    let value = integer(raw, i64::from(min), i64::from(max))?;
    i32::try_from(value).map_err(|_| format!("Must be between {min} and {max}"))
}

/// Required mobile number: `01XXXXXXXXX` with optional `+88`/`88` prefix.
/// Spaces and dashes are ignored.
///
/// # Errors
///
/// Returns a field message when blank or not a valid mobile number.
pub fn phone(raw: &str) -> Result<String, String> {
    let compact = raw.chars().filter(|c| !c.is_whitespace() && *c != '-').collect::<String>();
    if compact.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    if !PHONE_RE.is_match(&compact) {
        return Err("Enter a valid mobile number (01XXXXXXXXX)".to_owned());
    }
    Ok(compact)
}

/// Optional email; blank is `None`.
///
/// # Errors
///
/// Returns a field message when present but malformed.
pub fn optional_email(raw: &str) -> Result<Option<String>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if !EMAIL_RE.is_match(value) {
        return Err("Enter a valid email address".to_owned());
    }
    Ok(Some(value.to_owned()))
}

/// Required email.
///
/// # Errors
///
/// Returns a field message when blank or malformed.
pub fn email(raw: &str) -> Result<String, String> {
    optional_email(raw)?.ok_or_else(|| REQUIRED.to_owned())
}

/// Required calendar date in `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns a field message when blank or not a real date.
pub fn date(raw: &str) -> Result<NaiveDate, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| "Enter a valid date (YYYY-MM-DD)".to_owned())
}

/// Required time of day in 24h `HH:MM`; returns minutes since midnight.
///
/// # Errors
///
/// Returns a field message when blank or malformed.
pub fn time_of_day(raw: &str) -> Result<u32, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    let caps = TIME_RE.captures(value).ok_or_else(|| "Enter a time as HH:MM".to_owned())?;
    let hours = caps[1].parse::<u32>().map_err(|_| "Enter a time as HH:MM".to_owned())?;
    let minutes = caps[2].parse::<u32>().map_err(|_| "Enter a time as HH:MM".to_owned())?;
    Ok(hours * 60 + minutes)
}

/// Required choice parsed by `parse`.
///
/// # Errors
///
/// Returns a field message when blank or not one of the allowed values.
pub fn choice<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, String> {
    if raw.trim().is_empty() {
        return Err(REQUIRED.to_owned());
    }
    parse(raw).ok_or_else(|| "Select one of the listed options".to_owned())
}
