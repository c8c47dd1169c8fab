//! Pure field validators.
//!
//! String in, value-or-error out; no side effects. The field wrappers in
//! `models::field` call these from their constructors and setters.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, FieldKind, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email regex is valid")
});

/// Birthday wire format, `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Strips every non-digit character and requires exactly 10 digits to
/// remain. Returns the normalized digit string.
pub fn validate_phone(raw: &str) -> Result<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(Error::Validation(FieldKind::Phone));
    }
    Ok(digits)
}

/// Requires a full match of `local@domain.tld` and returns the input
/// unchanged.
pub fn validate_email(raw: &str) -> Result<String> {
    if !EMAIL_RE.is_match(raw) {
        return Err(Error::Validation(FieldKind::Email));
    }
    Ok(raw.to_string())
}

/// Parses a `DD.MM.YYYY` date.
pub fn validate_birthday(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::Validation(FieldKind::Birthday))
}
