//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input, tagged with a stable machine-readable code.
    #[error("Validation error: {message}")]
    Validation {
        /// Stable error code, e.g. `invalid_amount`.
        code: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => code,
            Self::Database(_) | Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Server-side failures are reduced to a generic message so storage
    /// details never reach the caller.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Database(_) | Self::Internal(_) => "An error occurred".to_string(),
        }
    }

    /// Returns true for failures caused by the request rather than the server.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
