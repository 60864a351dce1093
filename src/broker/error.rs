//! Error types for broker calls.

use thiserror::Error;

/// Errors that can occur when querying the broker cluster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerError {
    /// Client could not be created or the cluster is unreachable.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Metadata request failed.
    #[error("Metadata request failed: {0}")]
    Metadata(String),

    /// Topic is not known to the cluster.
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Offset lookup for a topic-partition failed.
    #[error("Offset lookup failed for {topic}/{partition}: {reason}")]
    Offset {
        topic: String,
        partition: i32,
        reason: String,
    },
}
