use crate::error::{RegistryError, Result};
use crate::validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated course code: one letter followed by exactly three digits.
///
/// Construction goes through [`validate::validate_course_code`], so a value of
/// this type always holds a well-formed code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CourseId(String);

impl CourseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        validate::validate_course_code(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for CourseId {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A strictly positive course fee.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Fee(Decimal);

impl Fee {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Fee {
    type Error = RegistryError;

    fn try_from(value: Decimal) -> Result<Self> {
        validate::validate_course_fee(value)?;
        Ok(Self(value))
    }
}

impl From<Fee> for Decimal {
    fn from(fee: Fee) -> Self {
        fee.0
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A purchasable unit of instruction with a fixed fee.
///
/// Immutable once created; the catalog never updates or removes courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub fee: Fee,
}

impl Course {
    pub fn new(id: CourseId, name: &str, fee: Fee) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation(
                "Course name cannot be empty.".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_course_id_parse() {
        let id: CourseId = "C101".parse().unwrap();
        assert_eq!(id.as_str(), "C101");
        assert!("C10".parse::<CourseId>().is_err());
        assert!("X12345".parse::<CourseId>().is_err());
    }

    #[test]
    fn test_fee_validation() {
        assert!(Fee::try_from(dec!(500)).is_ok());
        assert!(matches!(
            Fee::try_from(Decimal::ZERO),
            Err(RegistryError::Validation(_))
        ));
        assert!(Fee::try_from(dec!(-1)).is_err());
    }

    #[test]
    fn test_course_rejects_blank_name() {
        let id: CourseId = "C101".parse().unwrap();
        let fee = Fee::try_from(dec!(500)).unwrap();
        assert!(matches!(
            Course::new(id, "   ", fee),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn test_course_id_deserialization_revalidates() {
        let id: CourseId = serde_json::from_str("\"C101\"").unwrap();
        assert_eq!(id.as_str(), "C101");
        assert!(serde_json::from_str::<CourseId>("\"bogus\"").is_err());
    }

    #[test]
    fn test_course_serialization() {
        let course = Course::new(
            "C101".parse().unwrap(),
            "Python Programming",
            Fee::try_from(dec!(500)).unwrap(),
        )
        .unwrap();
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["id"], "C101");
        assert_eq!(json["name"], "Python Programming");
    }
}
