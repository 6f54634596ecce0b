//! Field validation rules.
//!
//! Each function takes a single raw input and either succeeds silently or fails
//! with a [`RegistryError::Validation`] carrying a human-readable reason. They
//! have no side effects and are deterministic given their input.

use crate::error::{RegistryError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][0-9]{3}$").expect("course code pattern"));

static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^S[0-9]{3}$").expect("student id pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.(com|edu)$").expect("email pattern"));

/// A course code is one letter followed by exactly three digits, e.g. `C101`.
pub fn validate_course_code(id: &str) -> Result<()> {
    if COURSE_CODE.is_match(id) {
        Ok(())
    } else {
        Err(RegistryError::Validation(
            "Course code error: must be a letter followed by exactly 3 digits.".to_string(),
        ))
    }
}

/// A student id is `S` followed by exactly three digits, e.g. `S001`.
pub fn validate_student_id(id: &str) -> Result<()> {
    if STUDENT_ID.is_match(id) {
        Ok(())
    } else {
        Err(RegistryError::Validation(
            "Student ID error: must be 'S' followed by exactly 3 digits.".to_string(),
        ))
    }
}

/// Payment amounts must be non-negative.
pub fn validate_payment_amount(amount: Decimal) -> Result<()> {
    if amount >= Decimal::ZERO {
        Ok(())
    } else {
        Err(RegistryError::Validation(
            "Payment error: amount must be a positive number.".to_string(),
        ))
    }
}

/// Course fees must be strictly positive.
pub fn validate_course_fee(fee: Decimal) -> Result<()> {
    if fee > Decimal::ZERO {
        Ok(())
    } else {
        Err(RegistryError::Validation(
            "Fee error: must be a positive numeric value.".to_string(),
        ))
    }
}

/// Emails must contain a single `@` and end with `.com` or `.edu`.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL.is_match(email) {
        Ok(())
    } else {
        Err(RegistryError::Validation(
            "Email error: must contain '@' and end with '.com' or '.edu'.".to_string(),
        ))
    }
}
