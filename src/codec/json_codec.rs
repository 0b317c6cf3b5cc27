//! JSON encoding and decoding of student records.
//!
//! # JSON Format
//!
//! A top-level array of flat objects with the keys `matriculationNumber`,
//! `firstName`, `lastName`, `birthYear`, in that order:
//!
//! ```text
//! [{"matriculationNumber":1001,"firstName":"Alice","lastName":"Anderson","birthYear":2000}]
//! ```
//!
//! On input the two numeric keys also accept a string holding an integer.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::options::MalformedPolicy;
use super::report::{DecodeReport, EntryLocation};
use crate::error::RecordError;
use crate::student::Student;

/// Wire shape of one student. Field order here is the key order on output.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonStudent<'a> {
    #[serde(deserialize_with = "integer_or_string")]
    matriculation_number: u32,
    first_name: Cow<'a, str>,
    last_name: Cow<'a, str>,
    #[serde(deserialize_with = "integer_or_string")]
    birth_year: i32,
}

/// Reads a JSON integer or a string holding one, such as `2000` or `"2000"`.
fn integer_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntegerOrString {
        Integer(i64),
        Text(String),
    }

    match IntegerOrString::deserialize(deserializer)? {
        IntegerOrString::Integer(n) => T::try_from(n)
            .map_err(|_| de::Error::custom(format!("integer {} out of range", n))),
        IntegerOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid integer {:?}: {}", s, e))),
    }
}

impl<'a> From<&'a Student> for JsonStudent<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            matriculation_number: student.matriculation_number(),
            first_name: Cow::Borrowed(student.first_name()),
            last_name: Cow::Borrowed(student.last_name()),
            birth_year: student.birth_year(),
        }
    }
}

impl TryFrom<JsonStudent<'_>> for Student {
    type Error = RecordError;

    fn try_from(row: JsonStudent<'_>) -> Result<Self, Self::Error> {
        Student::new(
            row.matriculation_number,
            &row.first_name,
            &row.last_name,
            row.birth_year,
        )
    }
}

pub(crate) fn encode(students: &[Student], pretty: bool) -> Result<String, RecordError> {
    let rows: Vec<JsonStudent<'_>> = students.iter().map(JsonStudent::from).collect();

    let text = if pretty {
        serde_json::to_string_pretty(&rows)
    } else {
        serde_json::to_string(&rows)
    };
    text.map_err(|e| RecordError::persistence("Failed to encode JSON").with_source(e))
}

pub(crate) fn decode(text: &str, policy: MalformedPolicy) -> Result<DecodeReport, RecordError> {
    let mut report = DecodeReport::default();

    let body = text.trim();
    if !body.starts_with('[') {
        debug!("JSON text does not start with an array, nothing to decode");
        return Ok(report);
    }
    // An opening bracket with nothing after it holds no objects.
    if body == "[" {
        debug!("JSON array has no content, nothing to decode");
        return Ok(report);
    }

    // A broken array leaves no object boundaries to recover from, so this
    // fails under either policy.
    let objects: Vec<Value> = serde_json::from_str(body).map_err(|e| {
        RecordError::malformed(format!("Malformed JSON content: {}", e)).with_source(e)
    })?;

    for (index, object) in objects.into_iter().enumerate() {
        match parse_object(object) {
            Ok(student) => report.students.push(student),
            Err(error) => report.handle_malformed(
                policy,
                "JSON",
                EntryLocation::Object(index + 1),
                error,
            )?,
        }
    }

    debug!(
        decoded = report.students.len(),
        skipped = report.skipped.len(),
        "Decoded JSON text"
    );
    Ok(report)
}

fn parse_object(object: Value) -> Result<Student, RecordError> {
    if !object.is_object() {
        return Err(RecordError::malformed(format!(
            "Expected a JSON object but got {}",
            object
        )));
    }

    let row: JsonStudent<'static> = serde_json::from_value(object).map_err(|e| {
        RecordError::malformed(format!("Invalid student object: {}", e)).with_source(e)
    })?;
    Student::try_from(row)
}
