//! Row building for the topic table.

use crate::broker::{BrokerClient, BrokerError};

use super::format::{format_count_column, format_throughput};
use super::history::{HistoryStore, Throughput};

/// Column titles of the topic table.
pub const HEADER: [&str; 5] = [
    "Topic",
    "Partitions",
    "Estimated Messages",
    "Total Offset",
    "Growth",
];

/// Cell text of the separator row below the header.
pub const SEPARATOR: &str = "─";

/// One topic's figures for the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRow {
    pub name: String,
    pub partitions: usize,
    /// Sum over partitions of newest minus oldest offset.
    pub estimated_messages: i64,
    /// Sum over partitions of the newest offset.
    pub total_offset: i64,
    pub throughput: Throughput,
}

impl TopicRow {
    /// Cell texts in [`HEADER`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.partitions.to_string(),
            format_count_column(self.estimated_messages),
            format_count_column(self.total_offset),
            format_throughput(self.throughput),
        ]
    }
}

/// Query one topic and record its offset total in `history`.
pub fn build_row(
    broker: &dyn BrokerClient,
    history: &mut HistoryStore,
    topic: &str,
) -> Result<TopicRow, BrokerError> {
    let partitions = broker.partitions(topic)?;

    let mut total_offset: i64 = 0;
    let mut estimated_messages: i64 = 0;
    for &partition in &partitions {
        let watermarks = broker.watermarks(topic, partition)?;
        total_offset += watermarks.newest;
        estimated_messages += watermarks.retained();
    }

    let throughput = history.observe(topic, total_offset);
    if let Throughput::PerSecond(rate) = throughput {
        if rate < 0 {
            tracing::warn!(topic, rate, total_offset, "offset total went backwards");
        }
    }

    Ok(TopicRow {
        name: topic.to_string(),
        partitions: partitions.len(),
        estimated_messages,
        total_offset,
        throughput,
    })
}

/// Build rows for every topic the cluster reports, sorted by name.
///
/// The first broker error aborts the pass and no rows are returned. Topics
/// already observed earlier in a failed pass keep their new sample.
pub fn build_rows(
    broker: &dyn BrokerClient,
    history: &mut HistoryStore,
) -> Result<Vec<TopicRow>, BrokerError> {
    let topics = broker.topics()?;

    let mut rows = topics
        .iter()
        .map(|topic| build_row(broker, history, topic))
        .collect::<Result<Vec<_>, _>>()?;

    sort_rows(&mut rows);
    Ok(rows)
}

/// Sort rows ascending by byte order of the topic name.
pub fn sort_rows(rows: &mut [TopicRow]) {
    rows.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Full table text: header, separator, then one line per row.
pub fn table_lines(rows: &[TopicRow]) -> Vec<[String; 5]> {
    let header = HEADER.map(str::to_string);
    let separator = [(); 5].map(|_| SEPARATOR.to_string());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header);
    lines.push(separator);
    lines.extend(rows.iter().map(TopicRow::cells));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::MemoryBroker;

    fn names(rows: &[TopicRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn row_sums_offsets_across_partitions() {
        let broker = MemoryBroker::new("m")
            .with_partition("orders", 0, 100, 1_000)
            .with_partition("orders", 1, 0, 500)
            .with_partition("orders", 2, 50, 50);
        let mut history = HistoryStore::new();

        let row = build_row(&broker, &mut history, "orders").unwrap();

        assert_eq!(row.name, "orders");
        assert_eq!(row.partitions, 3);
        assert_eq!(row.total_offset, 1_550);
        assert_eq!(row.estimated_messages, 1_400);
        assert_eq!(row.throughput, Throughput::Unknown);
        assert_eq!(history.window("orders").unwrap().samples()[0], 1_550);
    }

    #[test]
    fn topic_without_partitions_has_zero_totals() {
        let mut broker = MemoryBroker::new("m");
        broker.add_topic("empty");
        let mut history = HistoryStore::new();

        let row = build_row(&broker, &mut history, "empty").unwrap();
        assert_eq!(row.partitions, 0);
        assert_eq!(row.total_offset, 0);
        assert_eq!(row.estimated_messages, 0);
    }

    #[test]
    fn rows_are_sorted_by_byte_order() {
        let broker = MemoryBroker::new("m")
            .with_partition("zeta", 0, 0, 1)
            .with_partition("alpha", 0, 0, 1)
            .with_partition("Mid", 0, 0, 1);
        let mut history = HistoryStore::new();

        let rows = build_rows(&broker, &mut history).unwrap();
        assert_eq!(names(&rows), vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn sort_rows_is_case_sensitive() {
        let row = |name: &str| TopicRow {
            name: name.to_string(),
            partitions: 1,
            estimated_messages: 0,
            total_offset: 0,
            throughput: Throughput::Unknown,
        };
        let mut rows = vec![row("zeta"), row("alpha"), row("Mid")];
        sort_rows(&mut rows);
        assert_eq!(names(&rows), vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn any_partition_error_fails_the_whole_pass() {
        let mut broker = MemoryBroker::new("m")
            .with_partition("a", 0, 0, 10)
            .with_partition("b", 0, 0, 10)
            .with_partition("c", 0, 0, 10);
        broker.fail_partitions_for(Some("b"));
        let mut history = HistoryStore::new();

        let err = build_rows(&broker, &mut history).unwrap_err();
        assert!(matches!(err, BrokerError::Metadata(_)));
    }

    #[test]
    fn throughput_follows_successive_passes() {
        let mut broker = MemoryBroker::new("m");
        let mut history = HistoryStore::new();

        for tick in 1..=5 {
            broker.set_partition("t", 0, 0, tick * 100);
            build_rows(&broker, &mut history).unwrap();
        }
        broker.set_partition("t", 0, 0, 600);
        let rows = build_rows(&broker, &mut history).unwrap();
        assert_eq!(rows[0].throughput, Throughput::PerSecond(80));
    }

    #[test]
    fn table_lines_start_with_header_block() {
        let rows = vec![TopicRow {
            name: "orders".to_string(),
            partitions: 3,
            estimated_messages: 1_234,
            total_offset: 5_678,
            throughput: Throughput::PerSecond(12),
        }];

        let lines = table_lines(&rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0], "Topic");
        assert_eq!(lines[0][4], "Growth");
        assert!(lines[1].iter().all(|c| c == SEPARATOR));
        assert_eq!(lines[2][0], "orders");
        assert_eq!(lines[2][1], "3");
        assert_eq!(lines[2][2].trim(), "1,234");
        assert_eq!(lines[2][3].trim(), "5,678");
        assert_eq!(lines[2][4].trim(), "12 msg/s");
    }
}
