//! File persistence for student records.
//!
//! [`RecordStore`] reads and writes whole files and hands the text to a
//! [`RecordCodec`]. I/O failures come back as
//! [`ErrorKind::PersistenceFailure`](crate::error::ErrorKind::PersistenceFailure)
//! with the `io::Error` attached; decode failures keep the codec's kind.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::codec::{DecodeReport, RecordCodec};
use crate::error::RecordError;
use crate::student::Student;

/// On-disk format of a student file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Infers the format from the file extension (`.csv` or `.json`, any case).
    ///
    /// ```
    /// use std::path::Path;
    /// use student_records::store::Format;
    ///
    /// assert_eq!(Format::from_path(Path::new("students.CSV")), Some(Format::Csv));
    /// assert_eq!(Format::from_path(Path::new("students.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Format::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else {
            None
        }
    }

    fn label(self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
        }
    }
}

/// Saves and loads student files through a [`RecordCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore {
    codec: RecordCodec,
}

impl RecordStore {
    /// Creates a store that encodes and decodes through `codec`.
    pub fn new(codec: RecordCodec) -> Self {
        Self { codec }
    }

    /// The codec used for every save and load.
    pub fn codec(&self) -> &RecordCodec {
        &self.codec
    }

    /// Writes `students` to `path`, replacing any existing file.
    pub fn save(
        &self,
        path: &Path,
        students: &[Student],
        format: Format,
    ) -> Result<(), RecordError> {
        let text = match format {
            Format::Csv => self.codec.encode_csv(students)?,
            Format::Json => self.codec.encode_json(students)?,
        };

        fs::write(path, text).map_err(|e| {
            RecordError::persistence(format!("Failed to save {}", format.label())).with_source(e)
        })?;

        info!(
            path = %path.display(),
            count = students.len(),
            "Saved students as {}",
            format.label()
        );
        Ok(())
    }

    /// Reads the students stored in `path`.
    pub fn load(&self, path: &Path, format: Format) -> Result<Vec<Student>, RecordError> {
        Ok(self.load_report(path, format)?.students)
    }

    /// Reads `path` and returns the full decode report.
    pub fn load_report(&self, path: &Path, format: Format) -> Result<DecodeReport, RecordError> {
        let text = fs::read_to_string(path).map_err(|e| {
            RecordError::persistence(format!("Failed to load {}", format.label())).with_source(e)
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Read student file");

        match format {
            Format::Csv => self.codec.decode_csv_report(&text),
            Format::Json => self.codec.decode_json_report(&text),
        }
    }

    /// Writes `students` to `path` as CSV.
    pub fn save_csv(&self, path: &Path, students: &[Student]) -> Result<(), RecordError> {
        self.save(path, students, Format::Csv)
    }

    /// Reads the students stored as CSV in `path`.
    pub fn load_csv(&self, path: &Path) -> Result<Vec<Student>, RecordError> {
        self.load(path, Format::Csv)
    }

    /// Writes `students` to `path` as JSON.
    pub fn save_json(&self, path: &Path, students: &[Student]) -> Result<(), RecordError> {
        self.save(path, students, Format::Json)
    }

    /// Reads the students stored as JSON in `path`.
    pub fn load_json(&self, path: &Path) -> Result<Vec<Student>, RecordError> {
        self.load(path, Format::Json)
    }
}
