//! Codec configuration.

use clap::ValueEnum;

/// What a decoder does with an entry it cannot turn into a [`Student`](crate::student::Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    /// Drop the entry, log it, and keep decoding.
    Skip,
    /// Fail the whole decode on the first malformed entry.
    Reject,
}

/// Options passed to [`RecordCodec::new`](super::RecordCodec::new).
///
/// The default keeps CSV decoding lenient and JSON decoding strict. Set both
/// policies to the same value to get one behavior for both formats.
///
/// # Example
///
/// ```
/// use student_records::codec::{CodecOptions, MalformedPolicy};
///
/// let strict = CodecOptions {
///     csv_policy: MalformedPolicy::Reject,
///     ..CodecOptions::default()
/// };
/// assert_eq!(strict.json_policy, MalformedPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Policy for malformed CSV lines.
    pub csv_policy: MalformedPolicy,
    /// Policy for malformed JSON objects.
    pub json_policy: MalformedPolicy,
    /// Emit indented, multi-line JSON instead of a single line.
    pub pretty_json: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            csv_policy: MalformedPolicy::Skip,
            json_policy: MalformedPolicy::Reject,
            pretty_json: false,
        }
    }
}
