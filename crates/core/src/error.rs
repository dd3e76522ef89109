//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type MarketResult<T> = Result<T, MarketError>;

/// Domain-level error.
///
/// Every variant is an expected, recoverable business outcome that callers
/// match on and report. Programming errors (negative debit amounts, panics
/// inside a critical section) are not modeled here; they abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// The buyer's balance cannot cover the requested amount.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: i64, available: i64 },

    /// The selector does not resolve to a currently available item
    /// (already sold, or never listed).
    #[error("not found")]
    NotFound,

    /// Malformed construction or parse input, rejected before any entity
    /// is created.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MarketError {
    pub fn insufficient_funds(required: i64, available: i64) -> Self {
        Self::InsufficientFunds {
            required,
            available,
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
