//! The line-oriented menu over a [`Registry`].
//!
//! All parsing of raw input happens here: fields are read, trimmed, and turned
//! into the typed values the registry operations take, re-prompting the whole
//! operation on any invalid field. The shell is generic over its reader and
//! writer so whole sessions can be scripted in tests.

use crate::course::{CourseId, Fee};
use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::student::{Email, EnrollOutcome, Payment, StudentId};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Course Registration and Payment System ---")?;
            writeln!(self.output, "1. Show all courses")?;
            writeln!(self.output, "2. Show all students")?;
            writeln!(self.output, "3. Add a new course")?;
            writeln!(self.output, "4. Register a new student")?;
            writeln!(self.output, "5. Enroll a student in a course")?;
            writeln!(self.output, "6. Process a payment")?;
            writeln!(self.output, "7. Show courses a student is enrolled in")?;
            writeln!(self.output, "8. Exit")?;

            let Some(choice) = self.prompt("Enter your choice (1-8): ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.show_courses()?,
                "2" => self.show_students()?,
                "3" => self.add_course()?,
                "4" => self.register_student()?,
                "5" => self.enroll()?,
                "6" => self.process_payment()?,
                "7" => self.show_student_courses()?,
                "8" => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice, please try again.")?,
            }
            if !self.pause()? {
                return Ok(());
            }
        }
    }

    /// Writes `message`, reads one line, and returns it trimmed. `None` means
    /// end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Waits for Enter before redrawing the menu. `false` means end of input.
    fn pause(&mut self) -> Result<bool> {
        Ok(self
            .prompt("\nPress Enter to return to the menu...")?
            .is_some())
    }

    fn show_courses(&mut self) -> Result<()> {
        writeln!(self.output, "\nAvailable Courses:")?;
        for course in self.registry.courses() {
            writeln!(
                self.output,
                "{}: {} (${})",
                course.id, course.name, course.fee
            )?;
        }
        Ok(())
    }

    fn show_students(&mut self) -> Result<()> {
        writeln!(self.output, "\nRegistered Students:")?;
        for student in self.registry.students() {
            writeln!(
                self.output,
                "{}: {} (Balance: ${})",
                student.id, student.name, student.balance
            )?;
        }
        Ok(())
    }

    fn add_course(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.prompt("Enter course ID (e.g., C101): ")? else {
                return Ok(());
            };
            let id: CourseId = match raw.parse() {
                Ok(id) => id,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            if self.registry.course(&id).is_some() {
                writeln!(self.output, "Course ID already exists. Try again.")?;
                continue;
            }

            let Some(name) = self.prompt("Enter course name: ")? else {
                return Ok(());
            };
            if name.is_empty() {
                writeln!(self.output, "Course name cannot be empty. Try again.")?;
                continue;
            }

            let Some(raw_fee) = self.prompt("Enter course fee: ")? else {
                return Ok(());
            };
            let fee = match parse_fee(&raw_fee) {
                Ok(fee) => fee,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.registry.add_course(id, &name, fee) {
                Ok(course) => {
                    let line = format!(
                        "Course '{}' with ID '{}' added successfully!",
                        course.name, course.id
                    );
                    writeln!(self.output, "{line}")?;
                    return Ok(());
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn register_student(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.prompt("Enter student ID (e.g., S001): ")? else {
                return Ok(());
            };
            let id: StudentId = match raw.parse() {
                Ok(id) => id,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            if self.registry.student(&id).is_some() {
                writeln!(self.output, "Student already registered. Try again.")?;
                continue;
            }

            let Some(name) = self.prompt("Enter student name: ")? else {
                return Ok(());
            };
            if name.is_empty() {
                writeln!(self.output, "Student name cannot be empty. Try again.")?;
                continue;
            }

            let Some(raw_email) = self.prompt("Enter student email: ")? else {
                return Ok(());
            };
            let email: Email = match raw_email.parse() {
                Ok(email) => email,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.registry.register_student(id, &name, email) {
                Ok(student) => {
                    let line = format!(
                        "Student '{}' with ID '{}' registered successfully!",
                        student.name, student.id
                    );
                    writeln!(self.output, "{line}")?;
                    return Ok(());
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn enroll(&mut self) -> Result<()> {
        loop {
            let Some(student_id) = self.prompt_student_id()? else {
                return Ok(());
            };
            let Some(student_id) = student_id else {
                continue;
            };

            let Some(raw) = self.prompt("Enter course ID (e.g., C101): ")? else {
                return Ok(());
            };
            let course_id: CourseId = match raw.parse() {
                Ok(id) => id,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.registry.enroll(&student_id, &course_id) {
                Ok(outcome) => {
                    let student_name = self.registry.student(&student_id).map(|s| s.name.clone());
                    let course_name = self.registry.course(&course_id).map(|c| c.name.clone());
                    let (Some(student_name), Some(course_name)) = (student_name, course_name)
                    else {
                        continue;
                    };
                    match outcome {
                        EnrollOutcome::Enrolled { .. } => writeln!(
                            self.output,
                            "{student_name} successfully enrolled in {course_name}."
                        )?,
                        EnrollOutcome::AlreadyEnrolled => {
                            writeln!(self.output, "Already enrolled in {course_name}.")?
                        }
                    }
                    return Ok(());
                }
                Err(RegistryError::CourseNotFound(_)) => {
                    writeln!(self.output, "Course not found. Try again.")?
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn process_payment(&mut self) -> Result<()> {
        loop {
            let Some(student_id) = self.prompt_student_id()? else {
                return Ok(());
            };
            let Some(student_id) = student_id else {
                continue;
            };

            let Some(raw) = self.prompt("Enter payment amount: ")? else {
                return Ok(());
            };
            let amount = match parse_payment(&raw) {
                Ok(amount) => amount,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.registry.record_payment(&student_id, amount) {
                Ok(balance) => {
                    writeln!(
                        self.output,
                        "Payment of ${} received. Remaining balance: ${balance}.",
                        amount.value()
                    )?;
                    return Ok(());
                }
                Err(RegistryError::PaymentTooLow { .. }) => writeln!(
                    self.output,
                    "Minimum payment is 40% of the balance. Try again."
                )?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn show_student_courses(&mut self) -> Result<()> {
        loop {
            let Some(student_id) = self.prompt_student_id()? else {
                return Ok(());
            };
            let Some(student_id) = student_id else {
                continue;
            };

            let Some(student) = self.registry.student(&student_id) else {
                continue;
            };
            let name = student.name.clone();
            let enrolled = self.registry.enrollments(&student_id)?;
            if enrolled.is_empty() {
                writeln!(self.output, "{name} is not enrolled in any courses.")?;
            } else {
                writeln!(self.output, "\nCourses for {name}:")?;
                let lines: Vec<String> = enrolled
                    .iter()
                    .map(|c| format!("{}: {} (${})", c.id, c.name, c.fee))
                    .collect();
                for line in lines {
                    writeln!(self.output, "{line}")?;
                }
            }
            return Ok(());
        }
    }

    /// Reads a student id and checks it exists. Outer `None` is end of input;
    /// inner `None` means the field was invalid or unknown and was reported.
    fn prompt_student_id(&mut self) -> Result<Option<Option<StudentId>>> {
        let Some(raw) = self.prompt("Enter student ID (e.g., S001): ")? else {
            return Ok(None);
        };
        let id: StudentId = match raw.parse() {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(Some(None));
            }
        };
        if self.registry.student(&id).is_none() {
            writeln!(self.output, "Student not found. Try again.")?;
            return Ok(Some(None));
        }
        Ok(Some(Some(id)))
    }
}

fn parse_fee(raw: &str) -> Result<Fee> {
    let value: Decimal = raw.parse().map_err(|_| {
        RegistryError::Validation("Fee error: must be a positive numeric value.".to_string())
    })?;
    Fee::try_from(value)
}

fn parse_payment(raw: &str) -> Result<Payment> {
    let value: Decimal = raw.parse().map_err(|_| {
        RegistryError::Validation("Payment error: amount must be a positive number.".to_string())
    })?;
    Payment::try_from(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn run_session(script: &str) -> (Registry, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            Registry::seeded().unwrap(),
            script.as_bytes(),
            &mut output,
        );
        shell.run().unwrap();
        let registry = shell.into_registry();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_show_courses_lists_seeded_catalog() {
        let (_, out) = run_session("1\n\n8\n");
        assert!(out.contains("Available Courses:"));
        assert!(out.contains("C101: Python Programming ($500)"));
        assert!(out.contains("C102: Data Science ($700)"));
        assert!(out.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn test_add_course_session() {
        let (registry, out) = run_session("3\nC103\nRust Programming\n450\n\n8\n");
        assert!(out.contains("Course 'Rust Programming' with ID 'C103' added successfully!"));
        assert_eq!(registry.courses().len(), 3);
    }

    #[test]
    fn test_add_course_reprompts_on_bad_id() {
        let (registry, out) = run_session("3\nbad-id\nC103\nRust Programming\n450\n\n8\n");
        assert!(out.contains("Course code error"));
        assert!(out.contains("added successfully!"));
        assert_eq!(registry.courses().len(), 3);
    }

    #[test]
    fn test_add_course_rejects_duplicate_id() {
        let (registry, out) = run_session("3\nC101\nC103\nRust Programming\n450\n\n8\n");
        assert!(out.contains("Course ID already exists. Try again."));
        assert_eq!(registry.courses().len(), 3);
    }

    #[test]
    fn test_register_student_session() {
        let (registry, out) = run_session("4\nS010\nEve\neve@test.edu\n\n8\n");
        assert!(out.contains("Student 'Eve' with ID 'S010' registered successfully!"));
        let eve = registry.student(&"S010".parse().unwrap()).unwrap();
        assert_eq!(eve.balance, Decimal::ZERO);
    }

    #[test]
    fn test_enroll_and_repeat_enroll() {
        let (registry, out) = run_session("5\nS001\nC101\n\n5\nS001\nC101\n\n8\n");
        assert!(out.contains("Alice successfully enrolled in Python Programming."));
        assert!(out.contains("Already enrolled in Python Programming."));
        let alice = registry.student(&"S001".parse().unwrap()).unwrap();
        assert_eq!(alice.balance, dec!(500));
        assert_eq!(alice.courses.len(), 1);
    }

    #[test]
    fn test_payment_below_minimum_then_accepted() {
        let (registry, out) =
            run_session("5\nS001\nC101\n\n6\nS001\n100\nS001\n200\n\n8\n");
        assert!(out.contains("Minimum payment is 40% of the balance. Try again."));
        assert!(out.contains("Payment of $200 received. Remaining balance: $300."));
        let alice = registry.student(&"S001".parse().unwrap()).unwrap();
        assert_eq!(alice.balance, dec!(300));
    }

    #[test]
    fn test_student_courses_empty_message() {
        let (_, out) = run_session("7\nS002\n\n8\n");
        assert!(out.contains("Bob is not enrolled in any courses."));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, out) = run_session("9\n\n8\n");
        assert!(out.contains("Invalid choice, please try again."));
    }

    #[test]
    fn test_eof_mid_operation_exits_cleanly() {
        let (registry, _) = run_session("3\nC103\nRust Programming\n");
        // Input ended before the fee, so nothing was added.
        assert_eq!(registry.courses().len(), 2);
    }
}
