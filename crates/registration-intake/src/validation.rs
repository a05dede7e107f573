//! Whitelist validation of registration fields.
//!
//! Each required field must fully match a fixed pattern. The patterns are
//! compliance contracts: character classes and quantifiers are kept exact.

use regex::Regex;
use std::sync::LazyLock;

/// Names and surnames: ASCII letters, accented vowels, ñ/Ñ and spaces.
static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZñÑáéíóúÁÉÍÓÚ ]+$").expect("valid regex"));

/// Phone: exactly ten decimal digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// CURP: 4 letters, 6 digits, sex marker, 5 letters, 2 alphanumerics.
static CURP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{5}[A-Z0-9]{2}$").expect("valid regex")
});

/// Email: local part, `@`, domain, and a TLD of two or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// The five fields subject to validation.
///
/// The second surname is optional and free-form, so it is not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields<'a> {
    pub name: &'a str,
    pub surname1: &'a str,
    pub phone: &'a str,
    /// Must already be uppercased; the check is case-sensitive.
    pub identity_code: &'a str,
    pub email: &'a str,
}

/// Check every required field against its whitelist pattern.
///
/// Returns `true` only when all five fields match. Checks stop at the first
/// failure and never report which field it was.
#[must_use]
pub fn validate_fields(fields: &RequiredFields<'_>) -> bool {
    TEXT_PATTERN.is_match(fields.name)
        && TEXT_PATTERN.is_match(fields.surname1)
        && PHONE_PATTERN.is_match(fields.phone)
        && CURP_PATTERN.is_match(fields.identity_code)
        && EMAIL_PATTERN.is_match(fields.email)
}
