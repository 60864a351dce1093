//! # kmg
//!
//! A live terminal dashboard of Kafka topic offsets and throughput.
//!
//! Once per second the dashboard lists every topic in the cluster, sums the
//! oldest and newest offsets of each topic's partitions, and estimates how
//! fast each topic grows from a rolling window of the last five offset
//! totals. The result is shown as a table sorted by topic name.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│ Terminal │  │
//! │  │(tick/q) │    │ (state)  │    │ (table) │    │          │  │
//! │  └─────────┘    └────┬─────┘    └─────────┘    └──────────┘  │
//! │                      │                                       │
//! │                      ▼                                       │
//! │  ┌─────────┐    ┌──────────┐                                 │
//! │  │ broker  │◀───│   data   │── HistoryStore (5-tick window)  │
//! │  │(cluster)│    │  (rows)  │                                 │
//! │  └─────────┘    └──────────┘                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`broker`]**: the [`BrokerClient`] trait, a Kafka implementation
//!   (feature `kafka`) and the in-memory [`MemoryBroker`]
//! - **[`data`]**: offset history, throughput estimation, row building and formatting
//! - **[`app`]**: the `Running`/`Stopped` state machine that owns the client and history
//! - **[`events`]**: merges key input and the one-second timer into one event stream
//! - **[`ui`]**: ratatui rendering of the table
//! - **[`config`]** and **[`logging`]**: settings and log setup for the binary
//!
//! ## Usage
//!
//! ```bash
//! kmg --kafka-brokers kafka-1:9092,kafka-2:9092
//! ```
//!
//! ### Estimating throughput without a terminal
//!
//! ```
//! use kmg::{HistoryStore, Throughput};
//!
//! let mut history = HistoryStore::new();
//! let rates: Vec<Throughput> = [100, 200, 300, 400, 500, 600]
//!     .iter()
//!     .map(|&total| history.observe("orders", total))
//!     .collect();
//!
//! assert_eq!(rates[3], Throughput::Unknown);
//! assert_eq!(rates[5], Throughput::PerSecond(80));
//! ```
//!
//! ### Building rows from an in-memory cluster
//!
//! ```
//! use kmg::broker::MemoryBroker;
//! use kmg::data::build_rows;
//! use kmg::HistoryStore;
//!
//! let broker = MemoryBroker::new("memory")
//!     .with_partition("payments", 0, 10, 50)
//!     .with_partition("orders", 0, 0, 120);
//!
//! let rows = build_rows(&broker, &mut HistoryStore::new()).unwrap();
//! assert_eq!(rows[0].name, "orders");
//! assert_eq!(rows[1].estimated_messages, 40);
//! ```

pub mod app;
pub mod broker;
pub mod config;
pub mod data;
pub mod events;
pub mod logging;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, State};
pub use broker::{BrokerClient, BrokerError, MemoryBroker, OffsetMarker};
pub use config::Settings;
pub use data::{HistoryStore, Throughput, TopicRow};
pub use events::{Event, EventPump};
