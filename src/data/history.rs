//! Rolling offset history and throughput estimation.

use std::collections::HashMap;
use std::fmt;

/// Number of samples kept per topic.
pub const WINDOW_SIZE: usize = 5;

/// Estimated growth of a topic, in messages per tick (ticks are one second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throughput {
    /// Not enough history yet, or no traffic ever recorded four ticks back.
    Unknown,
    /// Average messages per second over the window. Negative when offsets
    /// went backwards (topic recreated, broker reset).
    PerSecond(i64),
}

impl Throughput {
    /// Returns the rate if one is known.
    pub fn rate(&self) -> Option<i64> {
        match self {
            Throughput::Unknown => None,
            Throughput::PerSecond(rate) => Some(*rate),
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Throughput::Unknown => f.write_str("?"),
            Throughput::PerSecond(rate) => write!(f, "{}", rate),
        }
    }
}

/// Fixed window of the last [`WINDOW_SIZE`] offset totals of one topic.
///
/// Slot 0 is the current sample, slot 4 the sample four ticks back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetWindow {
    samples: [i64; WINDOW_SIZE],
}

impl OffsetWindow {
    /// Evict the oldest sample, insert `current` at the front and estimate
    /// throughput against the sample that is now four ticks back.
    pub fn push(&mut self, current: i64) -> Throughput {
        self.samples.rotate_right(1);
        self.samples[0] = current;

        let oldest = self.samples[WINDOW_SIZE - 1];
        if oldest == 0 {
            return Throughput::Unknown;
        }

        Throughput::PerSecond(current.saturating_sub(oldest) / WINDOW_SIZE as i64)
    }

    /// Samples ordered newest first.
    pub fn samples(&self) -> &[i64; WINDOW_SIZE] {
        &self.samples
    }
}

/// Per-topic offset history, the only state that survives between ticks.
///
/// Entries are created lazily and never removed; a topic that disappears
/// from the cluster leaves its window behind.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    windows: HashMap<String, OffsetWindow>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current offset total of `topic` and return its throughput.
    pub fn observe(&mut self, topic: &str, current: i64) -> Throughput {
        // Only allocate a key for unseen topics.
        if let Some(window) = self.windows.get_mut(topic) {
            return window.push(current);
        }
        self.windows.entry(topic.to_string()).or_default().push(current)
    }

    /// Window of a topic, if it has been observed.
    pub fn window(&self, topic: &str) -> Option<&OffsetWindow> {
        self.windows.get(topic)
    }

    /// Number of topics observed so far.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
