//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Nothing in this enum is
/// retried: a failing operation leaves the aggregate exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A deposit or withdrawal amount was zero or negative.
    #[error("Amount must be positive. Received: {amount}")]
    InvalidAmount { amount: i64 },

    /// A withdrawal asked for more than the account holds.
    #[error("Insufficient funds. Requested: {requested}, Available: {available}")]
    InsufficientFunds { requested: i64, available: i64 },
}

impl DomainError {
    pub fn invalid_amount(amount: i64) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn insufficient_funds(requested: i64, available: i64) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }
}
