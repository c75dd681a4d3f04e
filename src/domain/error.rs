//! Error types for the swipe deck.
//!
//! Two error types live here. [`CommitRejected`] is the narrow failure returned
//! by the job queue when a decision names the wrong job; callers treat it as a
//! no-op. [`DeckError`] consolidates everything else (configuration, catalog
//! loading, I/O, sink delivery) and comes with the [`Result`] alias used across
//! the crate.

use thiserror::Error;

/// A commit that the job queue refused to apply.
///
/// The queue is left untouched whenever one of these is returned, so the
/// at-most-one-decision-per-position invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitRejected {
    /// The decision named a job other than the one under the cursor.
    #[error("commit for job {got} rejected: current job is {expected}")]
    OutOfOrder {
        /// Identifier of the job currently under the cursor.
        expected: String,
        /// Identifier the caller tried to commit.
        got: String,
    },

    /// The queue has no current job left to decide on.
    #[error("commit for job {got} rejected: queue is exhausted")]
    Exhausted {
        /// Identifier the caller tried to commit.
        got: String,
    },
}

/// The main error type for deck operations.
///
/// # Examples
///
/// ```
/// use directapply::DeckError;
///
/// fn validate(threshold: f64) -> Result<(), DeckError> {
///     if threshold <= 0.0 {
///         return Err(DeckError::Config("swipe_threshold must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate(0.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DeckError {
    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A job catalog could not be read or decoded.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An external sink refused or failed to record a notification.
    #[error("Sink error: {0}")]
    Sink(String),

    /// A queue commit was rejected.
    #[error(transparent)]
    Commit(#[from] CommitRejected),
}

/// A specialized `Result` type for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
