//! Decode results with the entries that were dropped.

use std::fmt;

use tracing::warn;

use super::options::MalformedPolicy;
use crate::error::RecordError;
use crate::student::Student;

/// Where a malformed entry was found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLocation {
    /// 1-indexed line of a CSV document (line 1 is the header).
    Line(u64),
    /// 1-indexed position of an object inside a JSON array.
    Object(usize),
}

impl fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLocation::Line(line) => write!(f, "line {}", line),
            EntryLocation::Object(index) => write!(f, "object {}", index),
        }
    }
}

/// An entry dropped under [`MalformedPolicy::Skip`].
#[derive(Debug)]
pub struct SkippedEntry {
    pub location: EntryLocation,
    pub error: RecordError,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

/// Output of a report-producing decode.
///
/// `students` holds the decoded records in input order; `skipped` lists every
/// entry that was dropped along the way.
#[derive(Debug, Default)]
pub struct DecodeReport {
    pub students: Vec<Student>,
    pub skipped: Vec<SkippedEntry>,
}

impl DecodeReport {
    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Applies `policy` to a malformed entry.
    ///
    /// Under `Skip` the entry is recorded and `Ok(())` returned. Under
    /// `Reject` a `Malformed` error wrapping `error` is returned.
    pub(crate) fn handle_malformed(
        &mut self,
        policy: MalformedPolicy,
        format_name: &str,
        location: EntryLocation,
        error: RecordError,
    ) -> Result<(), RecordError> {
        match policy {
            MalformedPolicy::Skip => {
                warn!(%location, error = %error, "Skipping malformed {} entry", format_name);
                self.skipped.push(SkippedEntry { location, error });
                Ok(())
            }
            MalformedPolicy::Reject => Err(RecordError::malformed(format!(
                "Malformed {} content at {}: {}",
                format_name, location, error
            ))
            .with_source(error)),
        }
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decode Report")?;
        writeln!(f, "=============")?;
        writeln!(
            f,
            "Status: {}",
            if self.is_clean() { "PASSED" } else { "FAILED" }
        )?;
        writeln!(f)?;
        writeln!(f, "  Decoded records:   {:>10}", self.students.len())?;
        writeln!(f, "  Skipped entries:   {:>10}", self.skipped.len())?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped:")?;
            for entry in &self.skipped {
                writeln!(f, "  {}", entry)?;
            }
        }

        Ok(())
    }
}
