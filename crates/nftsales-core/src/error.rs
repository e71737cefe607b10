//! Error types for data operations.
//!
//! This module defines [`DataError`] which covers all error cases that can occur
//! when resolving, reading, or parsing NFT sales data.

use thiserror::Error;

/// Errors that can occur during data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Underlying file I/O failed for a reason other than the file being absent.
    ///
    /// A missing file is not an error for sparse datasets; adapters report it
    /// as an empty history instead.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line or field could not be parsed into a record.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The requested symbol was not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Data is not available for the requested symbol and date range.
    #[error("Data not available for {symbol} in range {start} to {end}")]
    DataNotAvailable {
        /// The symbol that was requested.
        symbol: String,
        /// Start of the requested date range.
        start: String,
        /// End of the requested date range.
        end: String,
    },

    /// The requested provider is not configured.
    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested feature is not supported.
    #[error("Feature not supported: {0}")]
    NotSupported(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;
