//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the client.
//! It centralizes error management, providing a consistent way to handle and represent
//! various error conditions that can occur, from transport failures to validation problems.
//!
//! `AppError` provides `From` trait implementations for common error types like
//! `reqwest::Error`, `validator::ValidationErrors`, and `std::io::Error`, allowing
//! for easy conversion using the `?` operator.

use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the client.
///
/// Each variant corresponds to a specific type of error, carrying a message
/// detailing the issue. Nothing here is fatal: every failure is recoverable by
/// retrying the user action or starting a fresh session.
#[derive(Debug)]
pub enum AppError {
    /// The backend could not be reached, or a success body could not be decoded.
    /// Wraps errors from the `reqwest` crate.
    Transport(String),
    /// The backend rejected the request. Carries the HTTP status code and the
    /// server-provided message, delivered to the caller unmodified.
    Api { status: u16, message: String },
    /// Client-side input validation failed before the request went out.
    /// Wraps errors from the `validator` crate.
    Validation(String),
    /// The cached session could not be written to or removed from disk.
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            AppError::Api { status, message } => write!(f, "API Error ({}): {}", status, message),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `reqwest::Error` into `AppError::Transport`.
///
/// Connection failures, timeouts, and JSON decode failures of a success body
/// all surface here; the adapter never interprets them further.
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> AppError {
        AppError::Transport(error.to_string())
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Converts `std::io::Error` into `AppError::Storage`.
///
/// This handles failures while persisting or clearing the session file.
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> AppError {
        AppError::Storage(error.to_string())
    }
}

impl AppError {
    /// The message a user should see for this error, without the variant prefix.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Transport(msg) => msg,
            AppError::Api { message, .. } => message,
            AppError::Validation(msg) => msg,
            AppError::Storage(msg) => msg,
        }
    }
}
