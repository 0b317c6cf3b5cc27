//! In-memory student registry with a fixed capacity.
//!
//! The registry owns the list of students that the binary saves and loads
//! through [`crate::store::RecordStore`]. Matriculation numbers are unique
//! within a registry.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::RecordError;
use crate::student::Student;

/// Ordered collection of students, bounded by `max_capacity`.
///
/// # Example
///
/// ```
/// use student_records::registry::StudentRegistry;
/// use student_records::student::Student;
///
/// let mut registry = StudentRegistry::new(2);
/// registry.add(Student::new(1001, "Alice", "Anderson", 2000).unwrap()).unwrap();
/// assert_eq!(registry.find(1001).unwrap().last_name(), "Anderson");
/// ```
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    max_capacity: usize,
    students: Vec<Student>,
    matriculation_numbers: HashSet<u32>,
}

impl StudentRegistry {
    /// Creates an empty registry holding at most `max_capacity` students.
    pub fn new(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            students: Vec::new(),
            matriculation_numbers: HashSet::new(),
        }
    }

    /// Adds a student.
    ///
    /// Returns `Ok(true)` when the student was inserted and `Ok(false)` when a
    /// student with the same matriculation number is already present (the
    /// new one is ignored).
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Full`](crate::error::ErrorKind::Full) error when
    /// the registry is at capacity.
    pub fn add(&mut self, student: Student) -> Result<bool, RecordError> {
        if self.students.len() >= self.max_capacity {
            warn!(capacity = self.max_capacity, "Registry full");
            return Err(RecordError::full(self.max_capacity));
        }

        if !self
            .matriculation_numbers
            .insert(student.matriculation_number())
        {
            warn!(
                matriculation_number = student.matriculation_number(),
                "Duplicate matriculation number, ignoring"
            );
            return Ok(false);
        }

        info!(%student, "Added student");
        self.students.push(student);
        Ok(true)
    }

    /// Looks up a student by matriculation number.
    pub fn find(&self, matriculation_number: u32) -> Result<&Student, RecordError> {
        self.students
            .iter()
            .find(|s| s.matriculation_number() == matriculation_number)
            .ok_or_else(|| {
                warn!(matriculation_number, "Student not found");
                RecordError::not_found(matriculation_number)
            })
    }

    /// Removes and returns the student with the given number.
    pub fn remove(&mut self, matriculation_number: u32) -> Result<Student, RecordError> {
        let index = self
            .students
            .iter()
            .position(|s| s.matriculation_number() == matriculation_number)
            .ok_or_else(|| RecordError::not_found(matriculation_number))?;

        let student = self.students.remove(index);
        self.matriculation_numbers.remove(&matriculation_number);
        info!(%student, "Removed student");
        Ok(student)
    }

    /// Students in insertion order.
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// Number of students currently registered.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True when no students are registered.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The configured maximum number of students.
    pub fn capacity(&self) -> usize {
        self.max_capacity
    }
}
