//! Input validation rules for student records.
//!
//! These checks run inside [`Student::new`](crate::student::Student::new), so
//! every decoded or hand-built record passes through the same rules.

use crate::error::RecordError;

/// Smallest legal matriculation number.
pub const MIN_MATRICULATION_NUMBER: u32 = 1001;

/// Largest legal matriculation number.
pub const MAX_MATRICULATION_NUMBER: u32 = 999_999;

/// Validates a first or last name.
///
/// The trimmed name must be non-empty and consist only of letters (any
/// script), spaces, and hyphens.
///
/// # Examples
///
/// ```
/// use student_records::validation::validate_name;
///
/// assert!(validate_name("Anne-Marie").is_ok());
/// assert!(validate_name("Jürgen").is_ok());
/// assert!(validate_name("   ").is_err());
/// assert!(validate_name("R2D2").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), RecordError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RecordError::invalid_name("Name cannot be empty"));
    }
    if !name.chars().all(is_name_char) {
        return Err(RecordError::invalid_name("Name contains invalid characters"));
    }
    Ok(())
}

/// Validates that a matriculation number lies in the legal range.
pub fn validate_matriculation_number(number: u32) -> Result<(), RecordError> {
    if !(MIN_MATRICULATION_NUMBER..=MAX_MATRICULATION_NUMBER).contains(&number) {
        return Err(RecordError::invalid_id(format!(
            "Matriculation number must be between {} and {}",
            MIN_MATRICULATION_NUMBER, MAX_MATRICULATION_NUMBER
        )));
    }
    Ok(())
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || c == '-'
}
