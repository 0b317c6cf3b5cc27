//! Student Records Library
//!
//! Validated student records with CSV and JSON persistence. It includes
//! modules for the record type and its validation rules, the text codec,
//! an in-memory registry, file persistence, and CLI argument parsing.

pub mod cli;
pub mod codec;
pub mod error;
pub mod registry;
pub mod store;
pub mod student;
pub mod validation;
