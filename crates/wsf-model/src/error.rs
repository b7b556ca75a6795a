//! Error types shared by every stage of the flattening pipeline.

use std::fmt;

use thiserror::Error;

/// Declared type of an input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while flattening a worksheet.
#[derive(Debug, Error)]
pub enum WorksheetError {
    // === Input Shape Errors ===
    /// A declared column is absent from the header row.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },

    /// A data row does not carry a value for a declared column.
    #[error("row {row}: missing value for field '{field}'")]
    MissingValue { row: usize, field: &'static str },

    /// A cell could not be converted to its declared type.
    #[error("row {row}: invalid {expected} value '{value}' for field '{field}'")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
        expected: FieldKind,
    },

    // === Configuration Errors ===
    /// A size limit is below its minimum of 1.
    #[error("invalid {name}: {value} (must be at least 1)")]
    InvalidOption { name: &'static str, value: usize },

    // === Strict Mode ===
    /// Duplicated values disagree across rows that should share them.
    #[error("inconsistent input data ({count} finding(s)); first: {first}")]
    InconsistentData { count: usize, first: String },

    // === I/O ===
    /// Failure reported by the CSV reader or writer.
    #[error("csv error: {0}")]
    Csv(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for worksheet operations.
pub type Result<T> = std::result::Result<T, WorksheetError>;
