//! Kafka broker client.
//!
//! Answers topic, partition and watermark queries with a librdkafka
//! `BaseConsumer`. No group membership is ever joined; the consumer is only
//! used for metadata and watermark requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmg::broker::{BrokerClient, KafkaClient};
//!
//! let client = KafkaClient::builder()
//!     .brokers(["localhost:9092"])
//!     .connect()?;
//!
//! for topic in client.topics()? {
//!     println!("{}: {} partitions", topic, client.partitions(&topic)?.len());
//! }
//! # Ok::<(), kmg::broker::BrokerError>(())
//! ```

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::metadata::Metadata;
use rdkafka::util::Timeout;

use super::{BrokerClient, BrokerError, OffsetMarker, Watermarks};

/// Kafka-backed [`BrokerClient`].
pub struct KafkaClient {
    consumer: BaseConsumer,
    description: String,
    timeout: Timeout,
}

impl KafkaClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> KafkaClientBuilder {
        KafkaClientBuilder::default()
    }

    fn fetch_metadata(&self, topic: Option<&str>) -> Result<Metadata, BrokerError> {
        self.consumer
            .fetch_metadata(topic, self.timeout)
            .map_err(|e| BrokerError::Metadata(e.to_string()))
    }
}

impl BrokerClient for KafkaClient {
    fn topics(&self) -> Result<Vec<String>, BrokerError> {
        let metadata = self.fetch_metadata(None)?;
        Ok(metadata.topics().iter().map(|t| t.name().to_string()).collect())
    }

    fn partitions(&self, topic: &str) -> Result<Vec<i32>, BrokerError> {
        let metadata = self.fetch_metadata(Some(topic))?;
        let entry = metadata
            .topics()
            .iter()
            .find(|t| t.name() == topic)
            .ok_or_else(|| BrokerError::UnknownTopic(topic.to_string()))?;

        if let Some(err) = entry.error() {
            return Err(BrokerError::Metadata(format!("{}: {:?}", topic, err)));
        }

        Ok(entry.partitions().iter().map(|p| p.id()).collect())
    }

    fn offset(
        &self,
        topic: &str,
        partition: i32,
        marker: OffsetMarker,
    ) -> Result<i64, BrokerError> {
        let watermarks = self.watermarks(topic, partition)?;
        Ok(match marker {
            OffsetMarker::Oldest => watermarks.oldest,
            OffsetMarker::Newest => watermarks.newest,
        })
    }

    fn watermarks(&self, topic: &str, partition: i32) -> Result<Watermarks, BrokerError> {
        let (oldest, newest) = self
            .consumer
            .fetch_watermarks(topic, partition, self.timeout)
            .map_err(|e| BrokerError::Offset {
                topic: topic.to_string(),
                partition,
                reason: e.to_string(),
            })?;
        Ok(Watermarks { oldest, newest })
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for KafkaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaClient")
            .field("description", &self.description)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for KafkaClient.
#[derive(Debug, Default)]
pub struct KafkaClientBuilder {
    brokers: Vec<String>,
    client_id: Option<String>,
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl KafkaClientBuilder {
    /// Set the bootstrap broker addresses.
    pub fn brokers<I, S>(mut self, brokers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brokers = brokers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the client id reported to the brokers (default: `kmg`).
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Bound every per-tick request. Without one, requests wait indefinitely.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Bound the initial reachability check (default: 10 seconds).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the client and verify the cluster answers a metadata request.
    pub fn connect(self) -> Result<KafkaClient, BrokerError> {
        if self.brokers.is_empty() {
            return Err(BrokerError::Connection("no brokers configured".to_string()));
        }

        let bootstrap = self.brokers.join(",");
        let client_id = self.client_id.unwrap_or_else(|| "kmg".to_string());
        let connect_timeout = self.connect_timeout.unwrap_or(Duration::from_secs(10));

        let mut config = ClientConfig::new();
        config.set("bootstrap.servers", &bootstrap);
        config.set("client.id", &client_id);
        config.set("group.id", &client_id);
        config.set("enable.auto.commit", "false");

        let consumer: BaseConsumer = config
            .create()
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        consumer
            .fetch_metadata(None, connect_timeout)
            .map_err(|e| BrokerError::Connection(format!("{}: {}", bootstrap, e)))?;

        tracing::info!(brokers = %bootstrap, client_id = %client_id, "connected to kafka");

        Ok(KafkaClient {
            consumer,
            description: format!("kafka: {}", bootstrap),
            timeout: self.request_timeout.map(Timeout::After).unwrap_or(Timeout::Never),
        })
    }
}
