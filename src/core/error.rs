//! Error types for core module
//!
//! Covers reading and writing rule files and saved games.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A rules file was named explicitly but does not exist
    #[error("Rules file not found: {}", path.display())]
    RulesNotFound { path: PathBuf },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
