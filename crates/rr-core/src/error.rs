//! # AppError
//!
//! Centralized error handling for the Rusty-Reviews ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// Message returned when a submission is missing a field.
pub const MISSING_FIELDS: &str = "ReviewBody and Location are required";

/// Message returned when a submission names an unknown location.
pub const INVALID_LOCATION: &str = "Invalid Location";

/// The primary error type for all rr-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// User-caused input failure (missing field, unknown location, bad date).
    /// The message is surfaced to the client verbatim.
    #[error("{0}")]
    Validation(String),

    /// HTTP verb the dispatcher does not serve.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Infrastructure failure (e.g., poisoned store lock, serializer fault)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// A specialized Result type for Rusty-Reviews logic.
pub type Result<T> = std::result::Result<T, AppError>;
