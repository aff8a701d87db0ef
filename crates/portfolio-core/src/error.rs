//! Error types for the portfolio presentation layer

use thiserror::Error;

/// Main error type for portfolio operations
///
/// Missing document nodes are never errors; controllers skip them silently.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Error during preference storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme name is neither "light" nor "dark"
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Experience filter value is not recognized
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// The submission transport rejected a contact message
    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
