//! Store error model.

use thiserror::Error;

use freshmart_core::DomainError;

/// Result type returned by the store and its tables.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Wraps domain failures and adds the persistence failures that only exist
/// once a record set is read from or written to a table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted table holds a malformed row or lacks a required column.
    #[error("malformed inventory table at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// The domain failure behind this error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// Classify a csv reader error: IO stays IO, everything else is a
    /// malformed table.
    pub(crate) fn from_read(err: csv::Error) -> Self {
        if err.is_io_error() {
            return StoreError::Csv(err);
        }
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        StoreError::Parse {
            line,
            message: err.to_string(),
        }
    }
}
