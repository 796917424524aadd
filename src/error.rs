//! # Error Handling
//!
//! Centralized error handling for `imageprep`. A single `thiserror`-derived
//! [`Error`] enum covers every anticipated failure mode, and the [`Result`]
//! alias is used throughout the library.
//!
//! Two failure domains exist and must not be confused:
//!
//! - **Phase-construction errors** (this enum): the pipeline could not even
//!   produce a valid command sequence, e.g. a malformed configuration field.
//!   These propagate to the CLI and abort the run.
//! - **Shell-execution failures** of the emitted fragments: those happen at a
//!   later execution stage, outside this tool, and are handled per fragment
//!   through the `|| true` fail-open convention.

use thiserror::Error;

/// Main error type for imageprep operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing a machine configuration document.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The configuration parsed but failed semantic validation.
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// A phase could not produce a valid command sequence.
    #[error("Phase '{phase}' failed: {message}")]
    Phase { phase: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
