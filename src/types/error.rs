//! Unified Error Type System
//!
//! Centralized error type for the whole crate.
//!
//! ## Error Kinds
//!
//! - **InvalidInput**: Missing or malformed repository URL (caller mistake, no retry)
//! - **Upstream**: Hosting provider answered with a non-success status
//! - **Http**: Transport failure talking to the hosting provider
//! - **Decode**: Provider payload could not be decoded (base64 / UTF-8)
//! - **Timeout**: Caller deadline elapsed
//!
//! A missing README is not an error, and link probe failures never surface here:
//! the prober folds them into its result value.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LensError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidInput(String),

    /// Hosting provider returned a non-success status
    #[error("Upstream API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    /// Operation timeout with context
    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    // -------------------------------------------------------------------------
    // Setup Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LensError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl LensError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an upstream error from a status and message
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Whether the caller caused this error (bad request rather than server failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// =============================================================================
// Tests
// =============================================================================
