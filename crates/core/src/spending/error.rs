//! Spending error types.

use rust_decimal::Decimal;
use tally_shared::AppError;
use tally_shared::types::MAX_AMOUNT;
use thiserror::Error;

/// Spending-related errors.
#[derive(Debug, Error)]
pub enum SpendingError {
    /// Amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount exceeds the per-entry ceiling.
    #[error("Amount must not exceed {max}, got {0}", max = MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    /// Amount is missing or not a number.
    #[error("Amount must be a number")]
    AmountNotNumeric,

    /// Category is not one of the fixed values.
    #[error("Invalid category '{0}': expected Beer or Gym")]
    InvalidCategory(String),

    /// Date could not be parsed.
    #[error("Invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    /// Description is present but not a string.
    #[error("Description must be a string or null")]
    InvalidDescription,

    /// A category or overall total does not fit in a decimal.
    #[error("Spending total overflowed")]
    TotalOverflow,

    /// The entry store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendingError {
    /// Returns true if the error was raised before any persistence attempt.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::TotalOverflow)
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) | Self::AmountTooLarge(_) | Self::AmountNotNumeric => {
                "invalid_amount"
            }
            Self::InvalidCategory(_) => "invalid_category",
            Self::InvalidDate(_) => "invalid_date",
            Self::InvalidDescription => "invalid_description",
            Self::TotalOverflow | Self::Storage(_) => "internal_error",
        }
    }
}

impl From<SpendingError> for AppError {
    fn from(err: SpendingError) -> Self {
        match err {
            SpendingError::Storage(msg) => Self::Database(msg),
            other @ SpendingError::TotalOverflow => Self::Internal(other.to_string()),
            other => Self::Validation {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}
