//! Domain-specific error types for dsa-log

use thiserror::Error;

/// Main error type for the dsa-log CLI
#[derive(Error, Debug)]
pub enum DsaLogError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for DsaLogError {
    fn from(err: anyhow::Error) -> Self {
        DsaLogError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for DsaLogError {
    fn from(err: rusqlite::Error) -> Self {
        DsaLogError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DsaLogError {
    fn from(err: serde_json::Error) -> Self {
        DsaLogError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for DsaLogError {
    fn from(err: chrono::ParseError) -> Self {
        DsaLogError::Validation {
            message: format!("Date parsing error: {}", err),
        }
    }
}

impl From<csv::Error> for DsaLogError {
    fn from(err: csv::Error) -> Self {
        DsaLogError::Report {
            message: err.to_string(),
        }
    }
}

/// Result type alias for dsa-log operations
pub type Result<T> = std::result::Result<T, DsaLogError>;
