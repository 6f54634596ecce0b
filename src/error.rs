use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("course {0} already exists")]
    DuplicateCourse(String),
    #[error("student {0} is already registered")]
    DuplicateStudent(String),
    #[error("course {0} not found")]
    CourseNotFound(String),
    #[error("student {0} not found")]
    StudentNotFound(String),
    #[error("payment of ${amount} is below the minimum of ${minimum} (40% of the balance)")]
    PaymentTooLow { amount: Decimal, minimum: Decimal },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
