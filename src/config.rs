//! Layered configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional config
//! file, `KMG_*` environment variables, then command-line flags.
//!
//! ```toml
//! brokers = "kafka-1:9092,kafka-2:9092"
//! client_id = "kmg"
//! request_timeout_ms = 5000
//! log_file = "/tmp/kmg.log"
//! log_filter = "kmg=debug"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Broker list used when nothing else is configured.
pub const DEFAULT_BROKERS: &str = "127.0.0.1:9092,kafka:9092";

/// Values given on the command line; `None` leaves lower layers in effect.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub brokers: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Comma-separated bootstrap brokers.
    pub brokers: String,
    pub client_id: String,
    /// Bound on per-tick broker requests. Absent means wait indefinitely.
    pub request_timeout_ms: Option<u64>,
    pub connect_timeout_ms: u64,
    /// Log destination. Without one, logging is disabled.
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Settings {
    /// Load settings from defaults, `file`, the environment and `overrides`.
    pub fn load(file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("brokers", DEFAULT_BROKERS)?
            .set_default("client_id", "kmg")?
            .set_default("connect_timeout_ms", 10_000i64)?
            .set_default("log_filter", "info")?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("KMG"))
            .set_override_option("brokers", overrides.brokers)?
            .set_override_option(
                "log_file",
                overrides.log_file.map(|p| p.to_string_lossy().into_owned()),
            )?
            .build()?
            .try_deserialize()?;

        if settings.broker_list().is_empty() {
            return Err(ConfigError::Message("broker list is empty".to_string()));
        }

        Ok(settings)
    }

    /// Broker addresses, trimmed, empty entries dropped.
    pub fn broker_list(&self) -> Vec<String> {
        self.brokers
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
