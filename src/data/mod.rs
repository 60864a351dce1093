//! Offset history, throughput estimation and row building.
//!
//! ## Submodules
//!
//! - [`history`]: per-topic rolling window of offset totals ([`HistoryStore`])
//! - [`rows`]: turns broker answers into [`TopicRow`]s, fail-fast on broker errors
//! - [`format`]: pure formatting of counts and rates for the table
//!
//! ## Data Flow
//!
//! ```text
//! BrokerClient (topics, partitions, watermarks)
//!        │
//!        ▼
//! rows::build_rows()
//!        │
//!        ├──▶ HistoryStore::observe() (throughput estimate)
//!        │
//!        └──▶ Vec<TopicRow> sorted by topic name
//! ```

pub mod format;
pub mod history;
pub mod rows;

pub use history::{HistoryStore, OffsetWindow, Throughput, WINDOW_SIZE};
pub use rows::{build_row, build_rows, TopicRow};
