use super::*;

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn first_error_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.add("name", "first");
    errors.add("name", "second");
    assert_eq!(errors.get("name"), Some("first"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn check_returns_value_and_records_failures() {
    let mut errors = FieldErrors::new();
    assert_eq!(errors.check("fee", number("1200", 0.0, 100_000.0)), Some(1200.0));
    assert_eq!(errors.check("phone", phone("123")), None);
    assert!(errors.contains("phone"));
    assert!(!errors.contains("fee"));
}

#[test]
fn only_keeps_named_fields_and_their_children() {
    let mut errors = FieldErrors::new();
    errors.add("name", REQUIRED);
    errors.add("perClassPayments.0.amount", REQUIRED);
    errors.add("cgpa", REQUIRED);
    let step = errors.only(&["name", "perClassPayments"]);
    assert_eq!(step.len(), 2);
    assert!(!step.contains("cgpa"));
}

#[test]
fn display_joins_fields() {
    let mut errors = FieldErrors::new();
    errors.add("b", "bad");
    errors.add("a", "also bad");
    assert_eq!(errors.to_string(), "a: also bad; b: bad");
}

// =============================================================
// Rules
// =============================================================

#[test]
fn text_enforces_required_and_bounds() {
    assert_eq!(text("  ", 2, 10), Err(REQUIRED.to_owned()));
    assert!(text("a", 2, 10).is_err());
    assert!(text("abcdefghijk", 2, 10).is_err());
    assert_eq!(text("  Rahim ", 2, 10), Ok("Rahim".to_owned()));
}

#[test]
fn number_rejects_non_numeric_and_out_of_range() {
    assert_eq!(number("abc", 0.0, 5.0), Err("Must be a number".to_owned()));
    assert_eq!(number("5.5", 0.0, 5.0), Err("Must be between 0 and 5".to_owned()));
    assert_eq!(number("NaN", 0.0, 5.0), Err("Must be a number".to_owned()));
    assert_eq!(number("3.75", 0.0, 5.0), Ok(3.75));
}

#[test]
fn amount_must_be_positive() {
    assert!(amount("0").is_err());
    assert!(amount("-10").is_err());
    assert_eq!(amount("250"), Ok(250.0));
}

#[test]
fn integer_rejects_fractions() {
    assert_eq!(integer("9.5", 3, 12), Err("Must be a whole number".to_owned()));
    assert_eq!(integer("13", 3, 12), Err("Must be between 3 and 12".to_owned()));
    assert_eq!(integer("9", 3, 12), Ok(9));
}

#[test]
fn phone_accepts_local_and_country_prefixed_numbers() {
    assert_eq!(phone("01712345678"), Ok("01712345678".to_owned()));
    assert_eq!(phone("+8801712345678"), Ok("+8801712345678".to_owned()));
    assert_eq!(phone("017-1234 5678"), Ok("01712345678".to_owned()));
}

#[test]
fn phone_rejects_bad_operator_codes_and_lengths() {
    assert!(phone("01212345678").is_err());
    assert!(phone("0171234567").is_err());
    assert!(phone("017123456789").is_err());
    assert_eq!(phone(""), Err(REQUIRED.to_owned()));
}

#[test]
fn email_rules() {
    assert_eq!(optional_email(""), Ok(None));
    assert!(optional_email("not-an-email").is_err());
    assert_eq!(email("a@b.co"), Ok("a@b.co".to_owned()));
    assert_eq!(email(" "), Err(REQUIRED.to_owned()));
}

#[test]
fn date_rejects_impossible_days() {
    assert!(date("2023-02-29").is_err());
    assert!(date("2024-02-29").is_ok());
    assert!(date("29/02/2024").is_err());
}

#[test]
fn time_of_day_returns_minutes() {
    assert_eq!(time_of_day("09:30"), Ok(570));
    assert_eq!(time_of_day("23:59"), Ok(1439));
    assert!(time_of_day("24:00").is_err());
    assert!(time_of_day("9:30").is_err());
}

#[test]
fn choice_distinguishes_blank_from_unknown() {
    let parse = |raw: &str| (raw == "yes").then_some(true);
    assert_eq!(choice(" ", parse), Err(REQUIRED.to_owned()));
    assert_eq!(choice("maybe", parse), Err("Select one of the listed options".to_owned()));
    assert_eq!(choice("yes", parse), Ok(true));
}
