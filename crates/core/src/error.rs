//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, stock sufficiency). Storage and parsing concerns belong to the
/// store that owns the persisted table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record carries the requested identifier.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// The request collides with existing state (e.g. a duplicate id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: i64, available: i64 },

    /// A restock/sell amount was not a positive integer.
    #[error("invalid amount: {0} (must be a positive integer)")]
    InvalidAmount(i64),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(id: &RecordId) -> Self {
        Self::NotFound(id.clone())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }
}
