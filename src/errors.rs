//! Unified application error type.
//! Front-end modules (cli, config, export, ui) return AppError; the pure
//! board logic only ever surfaces `ValidationError` at the input boundary.

use std::io;
use thiserror::Error;

/// Rejection of raw user input by the label factory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} out of range: '{value}'")]
    OutOfRange { field: &'static str, value: String },

    #[error("Label text cannot be empty")]
    Empty,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid time slot: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
