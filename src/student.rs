use crate::course::{Course, CourseId};
use crate::error::{RegistryError, Result};
use crate::validate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The minimum fraction of the current balance a payment must cover.
const MIN_PAYMENT_RATIO: Decimal = dec!(0.4);

/// A validated student id: `S` followed by exactly three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        validate::validate_student_id(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for StudentId {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated email address ending in `.com` or `.edu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        validate::validate_email(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Email {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative payment amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Payment(Decimal);

impl Payment {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Payment {
    type Error = RegistryError;

    fn try_from(value: Decimal) -> Result<Self> {
        validate::validate_payment_amount(value)?;
        Ok(Self(value))
    }
}

impl From<Payment> for Decimal {
    fn from(payment: Payment) -> Self {
        payment.0
    }
}

/// Outcome of an enrollment attempt. A repeat enrollment is not an error,
/// just a no-op the caller may want to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnrollOutcome {
    Enrolled { balance: Decimal },
    AlreadyEnrolled,
}

/// A registered individual who may enroll in courses and owes a balance.
///
/// The balance is derived state: it rises by a course's fee on first enrollment
/// in that course and falls by accepted payments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: Email,
    pub courses: Vec<CourseId>,
    pub balance: Decimal,
}

impl Student {
    pub fn new(id: StudentId, name: &str, email: Email) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation(
                "Student name cannot be empty.".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email,
            courses: Vec::new(),
            balance: Decimal::ZERO,
        })
    }

    /// Enrolls the student in `course` unless already enrolled.
    ///
    /// Enrollment order is preserved; a repeat attempt leaves both the course
    /// list and the balance untouched.
    pub fn enroll(&mut self, course: &Course) -> EnrollOutcome {
        if self.courses.contains(&course.id) {
            return EnrollOutcome::AlreadyEnrolled;
        }
        self.courses.push(course.id.clone());
        self.balance += course.fee.value();
        EnrollOutcome::Enrolled {
            balance: self.balance,
        }
    }

    /// Applies a payment against the outstanding balance and returns the new
    /// balance.
    ///
    /// The payment must cover at least 40% of the balance as it stands right
    /// now. The rule places no upper bound, so an overpayment drives the
    /// balance negative; the original system behaves the same way and callers
    /// rely on the error, not a clamp.
    pub fn record_payment(&mut self, amount: Payment) -> Result<Decimal> {
        let minimum = MIN_PAYMENT_RATIO * self.balance;
        if amount.value() < minimum {
            return Err(RegistryError::PaymentTooLow {
                amount: amount.value(),
                minimum,
            });
        }
        self.balance -= amount.value();
        Ok(self.balance)
    }
}
