//! Broker client abstraction.
//!
//! The dashboard only needs three questions answered by the cluster: which
//! topics exist, which partitions a topic has, and where a partition's
//! oldest and newest offsets sit. [`BrokerClient`] captures exactly that so
//! the row builder can be driven by Kafka in production and by
//! [`MemoryBroker`] in tests.

mod error;
#[cfg(feature = "kafka")]
mod kafka;
mod memory;

pub use error::BrokerError;
#[cfg(feature = "kafka")]
pub use kafka::{KafkaClient, KafkaClientBuilder};
pub use memory::MemoryBroker;

/// Position marker for an offset lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetMarker {
    /// Offset of the earliest retained record (low watermark).
    Oldest,
    /// Offset just past the last written record (high watermark).
    Newest,
}

/// Both offset markers of one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Watermarks {
    pub oldest: i64,
    pub newest: i64,
}

impl Watermarks {
    /// Records still retained by the partition.
    pub fn retained(&self) -> i64 {
        self.newest - self.oldest
    }
}

/// Read-only view of a broker cluster.
///
/// Every call may fail with a connectivity or protocol error. Calls are
/// blocking; the dashboard issues them serially from a single thread.
pub trait BrokerClient {
    /// List every topic known to the cluster.
    fn topics(&self) -> Result<Vec<String>, BrokerError>;

    /// List the partition ids of a topic.
    fn partitions(&self, topic: &str) -> Result<Vec<i32>, BrokerError>;

    /// Look up the offset at `marker` for a topic-partition.
    fn offset(&self, topic: &str, partition: i32, marker: OffsetMarker)
        -> Result<i64, BrokerError>;

    /// Look up both markers for a topic-partition.
    ///
    /// Implementations that can answer both in one round trip should
    /// override this.
    fn watermarks(&self, topic: &str, partition: i32) -> Result<Watermarks, BrokerError> {
        Ok(Watermarks {
            oldest: self.offset(topic, partition, OffsetMarker::Oldest)?,
            newest: self.offset(topic, partition, OffsetMarker::Newest)?,
        })
    }

    /// Returns a human-readable description of the cluster for the title bar.
    fn description(&self) -> &str;
}

impl<T: BrokerClient + ?Sized> BrokerClient for Box<T> {
    fn topics(&self) -> Result<Vec<String>, BrokerError> {
        (**self).topics()
    }

    fn partitions(&self, topic: &str) -> Result<Vec<i32>, BrokerError> {
        (**self).partitions(topic)
    }

    fn offset(
        &self,
        topic: &str,
        partition: i32,
        marker: OffsetMarker,
    ) -> Result<i64, BrokerError> {
        (**self).offset(topic, partition, marker)
    }

    fn watermarks(&self, topic: &str, partition: i32) -> Result<Watermarks, BrokerError> {
        (**self).watermarks(topic, partition)
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}
