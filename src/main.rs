//! Student Records - manage student records stored as CSV or JSON
//!
//! This CLI tool provides four operational modes:
//! - **Demo**: Fill a small registry, save it in both formats, and load it back
//! - **Show**: Load a student file and print its records
//! - **Validate**: Report malformed lines or objects in a student file
//! - **Convert**: Read a student file in one format and write it in the other
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration/argument error |
//! | 3 | Persistence or validation failure |
//! | 4 | Runtime error |

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use student_records::cli::{Args, Command};
use student_records::codec::RecordCodec;
use student_records::error::{ErrorKind, RecordError};
use student_records::registry::StudentRegistry;
use student_records::store::{Format, RecordStore};
use student_records::student::Student;

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration/argument errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O and decode failures
const EXIT_PERSISTENCE_ERROR: u8 = 3;
/// Exit code for everything else
const EXIT_RUNTIME_ERROR: u8 = 4;

fn main() -> ExitCode {
    let mut args = Args::parse();
    args.apply_defaults();
    init_logging(args.verbose);

    let command = match args.command() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: Configuration error: {}", e);
            eprintln!("  Hint: Use --help for usage information");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let store = RecordStore::new(RecordCodec::new(args.codec_options()));
    match run(command, &store) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(cause) = std::error::Error::source(&e) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command<'_>, store: &RecordStore) -> Result<(), RecordError> {
    match command {
        Command::Demo { dir, capacity } => run_demo(dir, capacity, store),
        Command::Show { file, format } => run_show(file, format, store),
        Command::Validate { file, format } => run_validate(file, format, store),
        Command::Convert {
            file,
            format,
            output,
            output_format,
        } => run_convert(file, format, output, output_format, store),
    }
}

fn run_demo(dir: &Path, capacity: usize, store: &RecordStore) -> Result<(), RecordError> {
    println!("=== Student records demo ===");

    let mut registry = StudentRegistry::new(capacity);
    let samples = [
        Student::new(1001, "Alice", "Anderson", 2000)?,
        Student::new(1002, "Bob", "Brown", 1999)?,
        Student::new(1003, "Charlie", "Clark", 1998)?,
        Student::new(1004, "Diana", "Dawson", 2001)?,
    ];

    for student in samples {
        match registry.add(student) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Full => {
                warn!("Cannot add more students: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    let csv_path = dir.join("students.csv");
    let json_path = dir.join("students.json");
    store.save_csv(&csv_path, registry.list())?;
    store.save_json(&json_path, registry.list())?;
    println!(
        "Saved students to {} and {}",
        csv_path.display(),
        json_path.display()
    );

    let from_csv = store.load_csv(&csv_path)?;
    let from_json = store.load_json(&json_path)?;
    println!("Loaded from CSV: {} students", from_csv.len());
    println!("Loaded from JSON: {} students", from_json.len());

    match registry.find(1002) {
        Ok(found) => {
            println!("Found: {}", found);
            registry.remove(1002)?;
            println!("Removed matriculation number 1002 from registry");
        }
        Err(e) => warn!("{}", e),
    }

    info!(remaining = registry.len(), "Demo finished");
    Ok(())
}

fn run_show(file: &Path, format: Format, store: &RecordStore) -> Result<(), RecordError> {
    let students = store.load(file, format)?;
    for student in &students {
        println!("{}", student);
    }
    eprintln!("{} students in {}", students.len(), file.display());
    Ok(())
}

fn run_validate(file: &Path, format: Format, store: &RecordStore) -> Result<(), RecordError> {
    eprintln!("Validating file: {}", file.display());

    let report = store.load_report(file, format)?;
    println!("{}", report);

    if report.is_clean() {
        eprintln!(
            "Validation complete. All {} records are valid.",
            report.students.len()
        );
        Ok(())
    } else {
        Err(RecordError::malformed(format!(
            "{} malformed entries found",
            report.skipped.len()
        )))
    }
}

fn run_convert(
    file: &Path,
    format: Format,
    output: &Path,
    output_format: Format,
    store: &RecordStore,
) -> Result<(), RecordError> {
    let students = store.load(file, format)?;
    store.save(output, &students, output_format)?;
    eprintln!(
        "Converted {} students from {} to {}",
        students.len(),
        file.display(),
        output.display()
    );
    Ok(())
}

/// Maps an error to the process exit code.
fn error_to_exit_code(error: &RecordError) -> u8 {
    match error.kind() {
        ErrorKind::PersistenceFailure | ErrorKind::Malformed => EXIT_PERSISTENCE_ERROR,
        ErrorKind::NotFound | ErrorKind::Full | ErrorKind::InvalidId | ErrorKind::InvalidName => {
            EXIT_RUNTIME_ERROR
        }
    }
}
