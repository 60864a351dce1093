//! Title and status bars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the title bar: cluster, topic count, tick count.
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " KMG ",
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::raw(app.source_description().to_string()),
        Span::raw(" │ "),
        Span::styled(
            format!("{}", app.rows.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" topics │ tick "),
        Span::raw(format!("{}", app.ticks)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.last_refresh {
        Some(at) => format!(
            " Updated {:.1}s ago | q:quit",
            at.elapsed().as_secs_f64()
        ),
        None => " Loading... | q:quit".to_string(),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}
