//! # Error Types
//!
//! Structured error handling for the datatable core. Table reads never expose
//! these to their callers (they degrade to empty envelopes); mutations and
//! configuration loading do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatatableError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, DatatableError>;
