//! Error types for media-sniffer.
//!
//! Scanning itself is infallible: malformed attribute values are treated as
//! "candidate absent" and unparsable URLs fall through the classifier rules,
//! so an empty or broken document simply yields an empty result. The error
//! type below only covers misuse of the scheduler seam.

/// Error type for scheduler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The scheduler task has stopped; signals can no longer be delivered.
    #[error("scheduler is no longer running")]
    SchedulerClosed,
}

/// Result type alias for scheduler operations.
pub type Result<T> = std::result::Result<T, Error>;
