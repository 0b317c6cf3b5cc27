//! CSV encoding and decoding of student records.
//!
//! # CSV Format
//!
//! ```text
//! id,firstName,lastName,birthYear
//! 1001,Alice,Anderson,2000
//! 1002,Bob,Brown,1999
//! ```
//!
//! Fields are written without quoting. Valid names cannot contain commas,
//! quotes, or line breaks, so unquoted output is unambiguous.

use csv::{Position, QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use tracing::debug;

use super::options::MalformedPolicy;
use super::report::{DecodeReport, EntryLocation};
use crate::error::RecordError;
use crate::student::Student;

/// Header row written before the records.
pub const CSV_HEADER: [&str; 4] = ["id", "firstName", "lastName", "birthYear"];

const FIELD_COUNT: usize = CSV_HEADER.len();

pub(crate) fn encode(students: &[Student]) -> Result<String, RecordError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(encode_error)?;

    for student in students {
        let number = student.matriculation_number().to_string();
        let birth_year = student.birth_year().to_string();
        writer
            .write_record([
                number.as_str(),
                student.first_name(),
                student.last_name(),
                birth_year.as_str(),
            ])
            .map_err(encode_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RecordError::persistence("Failed to encode CSV").with_source(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| RecordError::persistence("Failed to encode CSV").with_source(e))
}

pub(crate) fn decode(text: &str, policy: MalformedPolicy) -> Result<DecodeReport, RecordError> {
    // Flexible mode: the field count is checked per line instead of by the reader.
    // Quoting is off to match the writer, so a stray quote stays on its own line.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut report = DecodeReport::default();
    // Line 1 is the header row; used only when the reader reports no position.
    let mut fallback_line: u64 = 1;

    for result in reader.records() {
        fallback_line += 1;

        let (line, parsed) = match result {
            Ok(record) => (
                record.position().map_or(fallback_line, Position::line),
                parse_record(&record),
            ),
            Err(e) => (
                e.position().map_or(fallback_line, Position::line),
                Err(RecordError::malformed(format!("Unreadable CSV row: {}", e)).with_source(e)),
            ),
        };

        match parsed {
            Ok(student) => report.students.push(student),
            Err(error) => {
                report.handle_malformed(policy, "CSV", EntryLocation::Line(line), error)?
            }
        }
    }

    debug!(
        decoded = report.students.len(),
        skipped = report.skipped.len(),
        "Decoded CSV text"
    );
    Ok(report)
}

/// Turns one data row into a [`Student`].
fn parse_record(record: &StringRecord) -> Result<Student, RecordError> {
    if record.len() != FIELD_COUNT {
        return Err(RecordError::malformed(format!(
            "Expected {} fields but got {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let matriculation_number: u32 = record[0].parse().map_err(|e| {
        RecordError::malformed(format!("Invalid matriculation number '{}'", &record[0]))
            .with_source(e)
    })?;
    let birth_year: i32 = record[3].parse().map_err(|e| {
        RecordError::malformed(format!("Invalid birth year '{}'", &record[3])).with_source(e)
    })?;

    Student::new(matriculation_number, &record[1], &record[2], birth_year)
}

fn encode_error(e: csv::Error) -> RecordError {
    RecordError::persistence("Failed to encode CSV").with_source(e)
}
