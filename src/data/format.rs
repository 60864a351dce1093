//! Formatting of counts and rates for the table.
//!
//! Every function here is pure: the same input always yields the same string.

use super::history::Throughput;

/// Width of the count columns.
pub const COUNT_WIDTH: usize = 18;

/// Width of the numeric part of the growth column.
pub const RATE_WIDTH: usize = 12;

/// Format an integer with comma thousands separators.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a count right-aligned to [`COUNT_WIDTH`].
pub fn format_count_column(n: i64) -> String {
    format!("{:>width$}", format_count(n), width = COUNT_WIDTH)
}

/// Format a throughput estimate as `"<rate> msg/s"`, right-aligned.
///
/// Unknown rates render as `?`.
pub fn format_throughput(throughput: Throughput) -> String {
    let value = match throughput {
        Throughput::Unknown => "?".to_string(),
        Throughput::PerSecond(rate) => format_count(rate),
    };
    format!("{:>width$} msg/s", value, width = RATE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_have_no_separator() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(123_456_789), "123,456,789");
    }

    #[test]
    fn negatives_keep_sign_outside_groups() {
        assert_eq!(format_count(-40), "-40");
        assert_eq!(format_count(-1_234), "-1,234");
        assert_eq!(format_count(-123_456), "-123,456");
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(format_count(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(format_count(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn count_column_is_right_aligned() {
        let s = format_count_column(1_234);
        assert_eq!(s.len(), COUNT_WIDTH);
        assert!(s.ends_with("1,234"));
        assert!(s.starts_with(' '));
    }

    #[test]
    fn throughput_formats() {
        assert_eq!(format_throughput(Throughput::PerSecond(80)), "          80 msg/s");
        assert_eq!(format_throughput(Throughput::PerSecond(-1_500)), "      -1,500 msg/s");
        assert_eq!(format_throughput(Throughput::Unknown), "           ? msg/s");
    }

    #[test]
    fn formatting_is_idempotent() {
        assert_eq!(format_count(9_876_543), format_count(9_876_543));
        assert_eq!(
            format_throughput(Throughput::PerSecond(42)),
            format_throughput(Throughput::PerSecond(42))
        );
    }
}
