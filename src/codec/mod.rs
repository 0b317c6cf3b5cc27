//! Record codec module
//!
//! Converts sequences of [`Student`] records to and from CSV and JSON text.
//! The codec works on text already in memory; opening and writing files is
//! left to [`crate::store`].

pub mod csv_codec;
pub mod json_codec;
pub mod options;
pub mod report;

pub use csv_codec::CSV_HEADER;
pub use options::{CodecOptions, MalformedPolicy};
pub use report::{DecodeReport, EntryLocation, SkippedEntry};

use crate::error::RecordError;
use crate::student::Student;

/// Encoder/decoder for student records.
///
/// The codec holds only its [`CodecOptions`]; every operation is a pure
/// function of its input.
///
/// # Example
///
/// ```
/// use student_records::codec::RecordCodec;
/// use student_records::student::Student;
///
/// let codec = RecordCodec::default();
/// let students = vec![Student::new(1001, "Alice", "Anderson", 2000).unwrap()];
///
/// let csv = codec.encode_csv(&students).unwrap();
/// assert_eq!(codec.decode_csv(&csv).unwrap(), students);
///
/// let json = codec.encode_json(&students).unwrap();
/// assert_eq!(codec.decode_json(&json).unwrap(), students);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordCodec {
    options: CodecOptions,
}

impl RecordCodec {
    /// Creates a codec with the given options.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// The options this codec was built with.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encodes `students` as a header line followed by one line per record.
    pub fn encode_csv(&self, students: &[Student]) -> Result<String, RecordError> {
        csv_codec::encode(students)
    }

    /// Decodes CSV text produced by [`encode_csv`](Self::encode_csv).
    ///
    /// Empty text or a header with no data lines yields an empty vector.
    /// Malformed lines are handled according to `csv_policy`; with the default
    /// `Skip` policy this never fails.
    pub fn decode_csv(&self, text: &str) -> Result<Vec<Student>, RecordError> {
        Ok(self.decode_csv_report(text)?.students)
    }

    /// Like [`decode_csv`](Self::decode_csv), also listing skipped lines.
    pub fn decode_csv_report(&self, text: &str) -> Result<DecodeReport, RecordError> {
        csv_codec::decode(text, self.options.csv_policy)
    }

    /// Encodes `students` as a JSON array of flat objects.
    pub fn encode_json(&self, students: &[Student]) -> Result<String, RecordError> {
        json_codec::encode(students, self.options.pretty_json)
    }

    /// Decodes JSON text produced by [`encode_json`](Self::encode_json).
    ///
    /// Text that does not begin with `[` yields an empty vector. With the
    /// default `Reject` policy any malformed object fails the whole decode
    /// and no records are returned.
    pub fn decode_json(&self, text: &str) -> Result<Vec<Student>, RecordError> {
        Ok(self.decode_json_report(text)?.students)
    }

    /// Like [`decode_json`](Self::decode_json), also listing skipped objects.
    pub fn decode_json_report(&self, text: &str) -> Result<DecodeReport, RecordError> {
        json_codec::decode(text, self.options.json_policy)
    }
}
