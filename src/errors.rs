//! Error types for analytics operations

use thiserror::Error;

/// Errors that can occur in analytics operations
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Failure of a single sink while handling one event
///
/// Sink failures are local: a composite reports them and moves on to the
/// next member.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying transport failed
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The sink refused the event
    #[error("event rejected by sink '{sink}': {reason}")]
    Rejected { sink: String, reason: String },

    /// The sink panicked while handling the event
    #[error("sink '{sink}' panicked: {message}")]
    Panicked { sink: String, message: String },
}

/// Failure of a transport to send a name/metadata pair
#[derive(Debug, Error)]
pub enum TransportError {
    /// Writing to the underlying output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport cannot currently deliver
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}
