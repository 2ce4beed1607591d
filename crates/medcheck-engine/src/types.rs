//! Errors, configuration and file discovery types for the data files.

use std::path::PathBuf;

use medcheck_types::RiskLevel;
use thiserror::Error;

/// Errors that can occur while reading the interaction table or the catalog.
#[derive(Error, Debug)]
pub enum TableError {
    /// I/O error reading a data file.
    #[error("IO error reading data file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the data directory.
    #[error("Required data file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A required field was empty.
    #[error("Missing value for required column '{column}' on line {line}")]
    MissingField {
        /// Column name.
        column: String,
        /// Line number in the file (1-based, 0 if unknown).
        line: u64,
    },

    /// Unknown risk level name.
    #[error("Invalid risk level: {value} (expected severe, moderate, mild or none)")]
    InvalidRiskLevel {
        /// The invalid value.
        value: String,
    },

    /// Unknown medication type name.
    #[error("Invalid medication type: {value} (expected prescription, otc or supplement)")]
    InvalidMedicationKind {
        /// The invalid value.
        value: String,
    },
}

/// Result type for data file operations.
pub type TableResult<T> = Result<T, TableError>;

/// Configuration for data file parsing.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Interaction rows below this level are skipped.
    pub min_risk_level: RiskLevel,
}

impl Default for TableConfig {
    /// Skips `none` rows: a listed pair with no concern is not a finding.
    fn default() -> Self {
        Self {
            min_risk_level: RiskLevel::Mild,
        }
    }
}

impl TableConfig {
    /// Creates a config that keeps only rows at or above `level`.
    pub fn at_least(level: RiskLevel) -> Self {
        Self {
            min_risk_level: level,
        }
    }
}

/// Data files discovered in a data directory.
#[derive(Debug, Clone, Default)]
pub struct DataFiles {
    /// Interaction table files, in load order.
    pub interaction_files: Vec<PathBuf>,
    /// Medication catalog files, in load order.
    pub catalog_files: Vec<PathBuf>,
}

impl DataFiles {
    /// Creates a new empty DataFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one interaction table file is present.
    pub fn has_required_files(&self) -> bool {
        !self.interaction_files.is_empty()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.interaction_files.is_empty() {
            missing.push("Interactions");
        }
        missing
    }
}
