//! Ledger, export and record error types.

use thiserror::Error;

/// Errors raised when mutating the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A sample's trajectory does not have the ledger's fixed length
    #[error("Sample has {found} trajectory points, ledger requires {expected}")]
    ShapeMismatch { expected: usize, found: usize },
}

/// Errors raised while appending the ledger to persistent storage.
///
/// A failed export leaves the in-memory ledger untouched, so the export can
/// simply be retried.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to open or append dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode dataset record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised when reading persisted records back.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected {expected} values, found {found}")]
    Dimension { expected: usize, found: usize },
}
