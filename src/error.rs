//! Error module
//!
//! Defines the single error type shared by every fallible operation in the
//! crate. Each error carries an [`ErrorKind`] tag, a human-readable message,
//! and optionally the underlying cause (an `io::Error`, a `csv::Error`, a
//! `serde_json::Error`, or another [`RecordError`]).

use std::fmt;

use thiserror::Error;

/// Boxed cause attached to a [`RecordError`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a [`RecordError`].
///
/// Callers match on the kind instead of on a hierarchy of error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No student with the requested matriculation number exists.
    NotFound,
    /// The registry has reached its configured capacity.
    Full,
    /// Matriculation number outside the legal range.
    InvalidId,
    /// Empty name or a name with disallowed characters.
    InvalidName,
    /// A CSV line or JSON document that could not be decoded.
    Malformed,
    /// Reading or writing the backing file failed.
    PersistenceFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Full => "registry full",
            ErrorKind::InvalidId => "invalid matriculation number",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::Malformed => "malformed data",
            ErrorKind::PersistenceFailure => "persistence failure",
        };
        f.write_str(name)
    }
}

/// The error type for student record operations.
///
/// # Example
///
/// ```
/// use student_records::error::{ErrorKind, RecordError};
///
/// let error = RecordError::not_found(1002);
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// assert_eq!(
///     error.to_string(),
///     "Student with matriculation number 1002 not found"
/// );
/// ```
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RecordError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl RecordError {
    /// Creates an error of the given kind with no attached cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Error for a matriculation number that is not in the registry.
    pub fn not_found(matriculation_number: u32) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!(
                "Student with matriculation number {} not found",
                matriculation_number
            ),
        )
    }

    /// Error for adding to a registry that is at capacity.
    pub fn full(max_capacity: usize) -> Self {
        Self::new(
            ErrorKind::Full,
            format!(
                "Student registry is full. Maximum capacity: {}",
                max_capacity
            ),
        )
    }

    /// Error for a matriculation number outside the legal range.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidId, message)
    }

    /// Error for an empty name or one with disallowed characters.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName, message)
    }

    /// Error for a CSV line or JSON document that cannot be decoded.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed, message)
    }

    /// Error for a failed file read or write.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PersistenceFailure, message)
    }

    /// Attaches the underlying cause, replacing any previous one.
    pub fn with_source(mut self, source: impl Into<BoxedCause>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message without the attached cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached cause as a [`RecordError`], if it is one.
    pub fn record_cause(&self) -> Option<&RecordError> {
        self.source.as_deref()?.downcast_ref::<RecordError>()
    }
}
