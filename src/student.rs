//! The student record type.
//!
//! A [`Student`] can only be obtained through [`Student::new`], which applies
//! the rules in [`crate::validation`]. Fields are private and the type has no
//! setters, so a constructed record never changes.

use std::fmt;

use chrono::Datelike;

use crate::error::RecordError;
use crate::validation::{validate_matriculation_number, validate_name};

/// A single validated student record.
///
/// # Example
///
/// ```
/// use student_records::student::Student;
///
/// let student = Student::new(1001, "Alice", "Anderson", 2000).unwrap();
/// assert_eq!(student.first_name(), "Alice");
/// assert_eq!(student.to_string(), "#1001 Alice Anderson (born 2000)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    matriculation_number: u32,
    first_name: String,
    last_name: String,
    birth_year: i32,
}

impl Student {
    /// Validates the inputs and builds a record.
    ///
    /// Names are stored trimmed. The birth year is not range-checked.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidId`](crate::error::ErrorKind::InvalidId)
    /// error when the matriculation number is out of range, and an
    /// [`ErrorKind::InvalidName`](crate::error::ErrorKind::InvalidName) error
    /// when either name is empty or contains disallowed characters.
    pub fn new(
        matriculation_number: u32,
        first_name: &str,
        last_name: &str,
        birth_year: i32,
    ) -> Result<Self, RecordError> {
        validate_matriculation_number(matriculation_number)?;
        validate_name(first_name)?;
        validate_name(last_name)?;

        Ok(Self {
            matriculation_number,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            birth_year,
        })
    }

    /// Unique matriculation number.
    pub fn matriculation_number(&self) -> u32 {
        self.matriculation_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Age in the given calendar year, never negative.
    pub fn age_in(&self, year: i32) -> i32 {
        year.saturating_sub(self.birth_year).max(0)
    }

    /// Age in the current local calendar year.
    pub fn age(&self) -> i32 {
        self.age_in(chrono::Local::now().year())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} (born {})",
            self.matriculation_number, self.first_name, self.last_name, self.birth_year
        )
    }
}
