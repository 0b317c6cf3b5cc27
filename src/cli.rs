//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros.
//! This module defines the [`Mode`] enum and the [`Args`] struct, along with
//! the checks that run after parsing.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::codec::{CodecOptions, MalformedPolicy};
use crate::store::Format;

/// What the binary does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Walk through registry, save, and load operations with sample students
    Demo,
    /// Load a student file and print its records
    Show,
    /// Report malformed entries in a student file
    Validate,
    /// Convert a student file between CSV and JSON
    Convert,
}

impl Mode {
    /// Lower-case name as accepted by `--mode`.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Demo => "demo",
            Mode::Show => "show",
            Mode::Validate => "validate",
            Mode::Convert => "convert",
        }
    }
}

/// A validated command, borrowing its paths from [`Args`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Demo {
        dir: &'a Path,
        capacity: usize,
    },
    Show {
        file: &'a Path,
        format: Format,
    },
    Validate {
        file: &'a Path,
        format: Format,
    },
    Convert {
        file: &'a Path,
        format: Format,
        output: &'a Path,
        output_format: Format,
    },
}

/// Command-line arguments for the student records tool.
///
/// Call [`Args::apply_defaults`] and then [`Args::validate`] after parsing.
#[derive(Parser, Debug)]
#[command(name = "student-records")]
#[command(about = "Manage student records stored as CSV or JSON")]
#[command(version)]
pub struct Args {
    /// Operation mode
    #[arg(long, value_enum, default_value = "demo")]
    pub mode: Mode,

    /// Student file to read (show, validate, convert)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Format of --file (inferred from the extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Output file for convert mode
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Format of --output (inferred from the extension when omitted)
    #[arg(long, value_enum)]
    pub output_format: Option<Format>,

    /// Directory for the files written by demo mode
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Registry capacity used by demo mode
    #[arg(long, default_value = "3")]
    pub capacity: usize,

    /// How malformed CSV lines are handled
    #[arg(long, value_enum, default_value = "skip")]
    pub csv_policy: MalformedPolicy,

    /// How malformed JSON objects are handled
    #[arg(long, value_enum, default_value = "reject")]
    pub json_policy: MalformedPolicy,

    /// Write indented JSON
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Args {
    /// Fills in formats that were not given explicitly from file extensions.
    pub fn apply_defaults(&mut self) {
        if self.format.is_none() {
            self.format = self.file.as_deref().and_then(Format::from_path);
        }
        if self.output_format.is_none() {
            self.output_format = self.output.as_deref().and_then(Format::from_path);
        }
    }

    /// Validate argument combinations.
    ///
    /// - `show`, `validate` and `convert` require `--file` with a known format
    /// - `convert` requires `--output` with a known format
    /// - demo mode requires a non-zero `--capacity`
    pub fn validate(&self) -> Result<(), String> {
        self.command().map(|_| ())
    }

    /// Resolves the arguments into the command to run.
    pub fn command(&self) -> Result<Command<'_>, String> {
        match self.mode {
            Mode::Demo => {
                if self.capacity == 0 {
                    return Err("--capacity must be at least 1".to_string());
                }
                Ok(Command::Demo {
                    dir: &self.dir,
                    capacity: self.capacity,
                })
            }
            Mode::Show => {
                let (file, format) = self.input()?;
                Ok(Command::Show { file, format })
            }
            Mode::Validate => {
                let (file, format) = self.input()?;
                Ok(Command::Validate { file, format })
            }
            Mode::Convert => {
                let (file, format) = self.input()?;
                let output = self
                    .output
                    .as_deref()
                    .ok_or_else(|| "--output is required for convert mode".to_string())?;
                let output_format = self
                    .output_format
                    .ok_or_else(|| unknown_format("--output-format", output))?;
                Ok(Command::Convert {
                    file,
                    format,
                    output,
                    output_format,
                })
            }
        }
    }

    /// Builds the codec options selected on the command line.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            csv_policy: self.csv_policy,
            json_policy: self.json_policy,
            pretty_json: self.pretty,
        }
    }

    fn input(&self) -> Result<(&Path, Format), String> {
        let file = self
            .file
            .as_deref()
            .ok_or_else(|| format!("--file is required for {} mode", self.mode.name()))?;
        let format = self
            .format
            .ok_or_else(|| unknown_format("--format", file))?;
        Ok((file, format))
    }
}

fn unknown_format(flag: &str, path: &Path) -> String {
    format!(
        "Cannot infer format of {}; pass {} csv|json",
        path.display(),
        flag
    )
}
