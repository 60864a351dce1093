//! Terminal rendering.
//!
//! ```text
//! ┌ title bar ───────────────────────────────────┐
//! │ topic table (header, separator, topic rows)  │
//! └ status bar ──────────────────────────────────┘
//! ```

pub mod common;
pub mod table;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;

/// Render the whole screen for the current rows.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(3),    // Topic table
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    common::render_title(frame, app, chunks[0]);
    table::render(frame, app, chunks[1]);
    common::render_status_bar(frame, app, chunks[2]);
}
