//! Error types for roster ingestion.

use std::path::PathBuf;

use roster_model::Gender;
use thiserror::Error;

/// What is wrong with a single source record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordProblem {
    /// A required field is absent or null.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The status is not one of active, cut, migrated, duplicate.
    #[error("unknown status '{0}'")]
    InvalidStatus(String),

    /// The birth date is not a valid `YYYY-MM-DD` date.
    #[error("invalid birth date '{0}'")]
    InvalidBirthDate(String),

    /// The record is not an object of the expected shape.
    #[error("unexpected record shape: {0}")]
    Shape(String),
}

/// Errors that can occur while loading a roster.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("roster source not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source file.
    #[error("failed to read roster source {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Document Errors ===
    /// The document is not valid JSON or not a JSON object.
    #[error("roster source is not a valid document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document cannot yield a usable roster.
    #[error("malformed roster source: {reason}")]
    MalformedSource { reason: String },

    // === Record Errors ===
    /// A record failed validation under the strict load policy.
    #[error("invalid {partition} record #{index}{}: {problem}", voter_hint(.voter_id))]
    InvalidRecord {
        partition: Gender,
        index: usize,
        voter_id: Option<String>,
        problem: RecordProblem,
    },
}

impl IngestError {
    /// True for every failure caused by the document's content rather than
    /// by the file system.
    pub fn is_malformed_source(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::MalformedSource { .. } | Self::InvalidRecord { .. }
        )
    }
}

fn voter_hint(voter_id: &Option<String>) -> String {
    voter_id
        .as_ref()
        .map(|id| format!(" (voter {id})"))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
