/*!
 * Error types for the ocrdiff application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. The comparison core
 * itself is total over its inputs and defines no errors; everything here belongs
 * to the OCR provider boundary, the usage gate, and file handling.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when invoking an OCR provider
#[derive(Error, Debug)]
pub enum OcrError {
    /// Error when making an API request fails
    #[error("OCR request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse OCR response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("OCR API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("OCR authentication error: {0}")]
    AuthenticationError(String),

    /// Per-image error reported inside an otherwise successful response.
    /// The code is the backend's RPC status code, not an HTTP status.
    #[error("OCR backend could not process the image: {code} - {message}")]
    AnnotationError {
        /// RPC status code from the backend
        code: i32,
        /// Error message from the backend
        message: String,
    },

    /// The monthly OCR request quota is exhausted. This is an expected,
    /// recoverable-by-waiting condition and must stay distinguishable from
    /// the generic failure variants above.
    #[error("Monthly OCR quota exceeded: {used} of {limit} requests used this month; the counter resets at the start of the next month")]
    QuotaExceeded {
        /// Requests consumed in the current month
        used: u32,
        /// The monthly ceiling
        limit: u32,
    },
}

/// Errors that can occur while reading or writing the usage counter
#[derive(Error, Debug)]
pub enum UsageError {
    /// Error reading or writing the usage file
    #[error("Usage store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The usage file exists but does not parse
    #[error("Usage store is corrupt: {0}")]
    Corrupt(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from an OCR provider
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Error from the usage gate
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
