//! In-memory broker cluster.
//!
//! Holds a fixed set of topics and watermarks that tests (and library
//! consumers without a live cluster) can mutate between ticks.

use std::collections::BTreeMap;

use super::{BrokerClient, BrokerError, OffsetMarker, Watermarks};

/// A broker client backed by an in-memory map.
///
/// # Example
///
/// ```
/// use kmg::broker::{BrokerClient, MemoryBroker};
///
/// let broker = MemoryBroker::new("memory")
///     .with_partition("orders", 0, 0, 120)
///     .with_partition("orders", 1, 10, 80);
///
/// assert_eq!(broker.partitions("orders").unwrap(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBroker {
    description: String,
    topics: BTreeMap<String, BTreeMap<i32, Watermarks>>,
    failing_topic: Option<String>,
}

impl MemoryBroker {
    /// Create an empty cluster.
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// Builder-style variant of [`MemoryBroker::set_partition`].
    pub fn with_partition(mut self, topic: &str, partition: i32, oldest: i64, newest: i64) -> Self {
        self.set_partition(topic, partition, oldest, newest);
        self
    }

    /// Create or overwrite the watermarks of a topic-partition.
    pub fn set_partition(&mut self, topic: &str, partition: i32, oldest: i64, newest: i64) {
        self.topics
            .entry(topic.to_string())
            .or_default()
            .insert(partition, Watermarks { oldest, newest });
    }

    /// Add a topic with no partitions.
    pub fn add_topic(&mut self, topic: &str) {
        self.topics.entry(topic.to_string()).or_default();
    }

    /// Remove a topic entirely.
    pub fn remove_topic(&mut self, topic: &str) {
        self.topics.remove(topic);
    }

    /// Make partition listing fail for `topic` (or stop failing with `None`).
    pub fn fail_partitions_for(&mut self, topic: Option<&str>) {
        self.failing_topic = topic.map(str::to_string);
    }

    fn topic(&self, topic: &str) -> Result<&BTreeMap<i32, Watermarks>, BrokerError> {
        self.topics
            .get(topic)
            .ok_or_else(|| BrokerError::UnknownTopic(topic.to_string()))
    }
}

impl BrokerClient for MemoryBroker {
    fn topics(&self) -> Result<Vec<String>, BrokerError> {
        Ok(self.topics.keys().cloned().collect())
    }

    fn partitions(&self, topic: &str) -> Result<Vec<i32>, BrokerError> {
        if self.failing_topic.as_deref() == Some(topic) {
            return Err(BrokerError::Metadata(format!(
                "partition listing failed for {}",
                topic
            )));
        }
        Ok(self.topic(topic)?.keys().copied().collect())
    }

    fn offset(
        &self,
        topic: &str,
        partition: i32,
        marker: OffsetMarker,
    ) -> Result<i64, BrokerError> {
        let watermarks = self.topic(topic)?.get(&partition).ok_or_else(|| BrokerError::Offset {
            topic: topic.to_string(),
            partition,
            reason: "unknown partition".to_string(),
        })?;

        Ok(match marker {
            OffsetMarker::Oldest => watermarks.oldest,
            OffsetMarker::Newest => watermarks.newest,
        })
    }

    fn description(&self) -> &str {
        &self.description
    }
}
