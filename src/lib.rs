pub mod course;
pub mod error;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod student;
pub mod validate;
