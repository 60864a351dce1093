//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};

use crate::data::Throughput;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the title bar.
    pub highlight: Color,
    /// Color for topics whose offsets went backwards.
    pub regression: Color,
    /// Plain cell text.
    pub text: Style,
    /// Style for the column titles.
    pub header: Style,
    /// Style for the separator row below the header.
    pub separator: Style,
    /// Style for rates that are not known yet.
    pub unknown: Style,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            regression: Color::Red,
            text: Style::default().fg(Color::White),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),
            unknown: Style::default().fg(Color::DarkGray),
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            regression: Color::Red,
            text: Style::default().fg(Color::Black),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),
            unknown: Style::default().fg(Color::Gray),
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a growth cell
    pub fn throughput_style(&self, throughput: Throughput) -> Style {
        match throughput {
            Throughput::Unknown => self.unknown,
            Throughput::PerSecond(rate) if rate < 0 => {
                Style::default().fg(self.regression).add_modifier(Modifier::BOLD)
            }
            Throughput::PerSecond(_) => self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_rate_is_highlighted() {
        let theme = Theme::dark();
        let style = theme.throughput_style(Throughput::PerSecond(-40));
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unknown_and_positive_rates() {
        let theme = Theme::light();
        assert_eq!(theme.throughput_style(Throughput::Unknown), theme.unknown);
        assert_eq!(theme.throughput_style(Throughput::PerSecond(0)), theme.text);
    }
}
