//! The registry owns every course and student and mediates all access.
//!
//! Operations take already-validated, well-typed arguments; the shell (or any
//! other caller) is responsible for turning raw input into [`CourseId`],
//! [`StudentId`], [`Email`], [`Fee`] and [`Payment`] values first. Every
//! operation checks its preconditions before touching state, so a failed call
//! leaves the registry unchanged.

use crate::course::{Course, CourseId, Fee};
use crate::error::{RegistryError, Result};
use crate::student::{Email, EnrollOutcome, Payment, Student, StudentId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// The course catalog and student roster.
///
/// Explicitly constructed and passed by reference; there is no global
/// instance, so tests and callers can hold as many independent registries as
/// they like.
#[derive(Debug, Default)]
pub struct Registry {
    // Catalog order is insertion order; codes are unique by construction of
    // `add_course`.
    courses: Vec<Course>,
    students: BTreeMap<StudentId, Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the demo catalog and roster.
    pub fn seeded() -> Result<Self> {
        let mut registry = Self::new();
        registry.add_course("C101".parse()?, "Python Programming", dec!(500).try_into()?)?;
        registry.add_course("C102".parse()?, "Data Science", dec!(700).try_into()?)?;
        registry.register_student("S001".parse()?, "Alice", "alice@gmail.com".parse()?)?;
        registry.register_student("S002".parse()?, "Bob", "bob@gmail.com".parse()?)?;
        Ok(registry)
    }

    /// Adds a new course to the catalog.
    pub fn add_course(&mut self, id: CourseId, name: &str, fee: Fee) -> Result<&Course> {
        if self.course(&id).is_some() {
            return Err(RegistryError::DuplicateCourse(id.to_string()));
        }
        let course = Course::new(id, name, fee)?;
        tracing::debug!(id = %course.id, fee = %course.fee, "course added");
        self.courses.push(course);
        Ok(self.courses.last().expect("just pushed"))
    }

    /// Registers a new student with an empty enrollment list and zero balance.
    pub fn register_student(&mut self, id: StudentId, name: &str, email: Email) -> Result<&Student> {
        if self.students.contains_key(&id) {
            return Err(RegistryError::DuplicateStudent(id.to_string()));
        }
        let student = Student::new(id.clone(), name, email)?;
        tracing::debug!(id = %id, "student registered");
        Ok(self.students.entry(id).or_insert(student))
    }

    /// Enrolls a student in a course, adding the fee to their balance.
    ///
    /// A repeat enrollment is reported as [`EnrollOutcome::AlreadyEnrolled`]
    /// and mutates nothing.
    pub fn enroll(&mut self, student_id: &StudentId, course_id: &CourseId) -> Result<EnrollOutcome> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistryError::StudentNotFound(student_id.to_string()))?;
        let course = self
            .courses
            .iter()
            .find(|c| &c.id == course_id)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))?;
        let outcome = student.enroll(course);
        tracing::debug!(student = %student_id, course = %course_id, ?outcome, "enrollment");
        Ok(outcome)
    }

    /// Applies a payment to a student's balance and returns the new balance.
    pub fn record_payment(&mut self, student_id: &StudentId, amount: Payment) -> Result<Decimal> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistryError::StudentNotFound(student_id.to_string()))?;
        let balance = student.record_payment(amount)?;
        tracing::debug!(student = %student_id, amount = %amount.value(), %balance, "payment recorded");
        Ok(balance)
    }

    /// The catalog, in the order courses were added.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All registered students, in id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// The courses a student is enrolled in, in enrollment order. Empty for a
    /// student with no enrollments.
    pub fn enrollments(&self, student_id: &StudentId) -> Result<Vec<&Course>> {
        let student = self
            .student(student_id)
            .ok_or_else(|| RegistryError::StudentNotFound(student_id.to_string()))?;
        // Courses are never removed, so every enrolled id resolves.
        Ok(student
            .courses
            .iter()
            .filter_map(|id| self.course(id))
            .collect())
    }

    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }
}
