//! Error types for mqadmin
//!
//! This module defines all error types used throughout the mqadmin console,
//! providing descriptive error messages for validation, persistence, and
//! registry lookup operations.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for mqadmin operations
#[derive(Debug, Error)]
pub enum AdminError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence errors (registry file load/save)
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A named entry was referenced but is not in the registry
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised at the input boundary, before any registry mutation
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid value for {field}: {reason}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The reason for validation failure
    pub reason: String,
}

impl ValidationError {
    /// Creates a validation error for the given field
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors related to registry file operations
///
/// A load either produces a fully populated registry or one of these;
/// no partial-entry state is ever returned.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Registry file not found
    #[error("Registry file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the registry file
    #[error("Failed to read registry file: {0}")]
    Read(String),

    /// Failed to write the registry file
    #[error("Failed to write registry file: {0}")]
    Write(String),

    /// A property in the file is missing or malformed
    #[error("Malformed entry for {key}: {reason}")]
    Malformed {
        /// The property key at fault
        key: String,
        /// The reason the value is unusable
        reason: String,
    },

    /// The file carries a version this console cannot read
    #[error("Unsupported registry file version {found} (expected {expected})")]
    Version {
        /// Version string found in the file
        found: String,
        /// Version this console reads and writes
        expected: String,
    },
}

/// Result type alias for mqadmin operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// Result type alias for validation at the input boundary
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Result type alias for registry file operations
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
