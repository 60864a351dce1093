//! Topic table rendering.
//!
//! The widget receives the full ordered sequence of lines, header and
//! separator included, and styles them by position.

use ratatui::{
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::rows::{table_lines, SEPARATOR};

/// Column spacing between cells.
const COLUMN_SPACING: u16 = 2;

/// Widest cell of each column, in characters.
pub fn column_widths(lines: &[[String; 5]]) -> [u16; 5] {
    let mut widths = [0u16; 5];
    for line in lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            let len = u16::try_from(cell.chars().count()).unwrap_or(u16::MAX);
            *width = (*width).max(len);
        }
    }
    widths
}

/// Render the topic table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines = table_lines(&app.rows);
    let widths = column_widths(&lines);

    let rows: Vec<Row> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match i {
            0 => Row::new(line.iter().enumerate().map(|(col, text)| aligned(col, text.clone())))
                .style(app.theme.header),
            1 => Row::new(
                widths.iter().map(|w| Cell::from(SEPARATOR.repeat(usize::from(*w)))),
            )
            .style(app.theme.separator),
            _ => {
                let topic = &app.rows[i - 2];
                let growth_style = app.theme.throughput_style(topic.throughput);
                Row::new(line.iter().enumerate().map(|(col, text)| {
                    let cell = aligned(col, text.clone());
                    if col == 4 {
                        cell.style(growth_style)
                    } else {
                        cell
                    }
                }))
                .style(app.theme.text)
            }
        })
        .collect();

    let constraints = widths.map(Constraint::Length);
    let table = Table::new(rows, constraints).column_spacing(COLUMN_SPACING);

    frame.render_widget(table, area);
}

/// Topic names are left-aligned, figures right-aligned.
fn aligned(col: usize, text: String) -> Cell<'static> {
    if col == 0 {
        Cell::from(Line::from(text))
    } else {
        Cell::from(Line::from(text).right_aligned())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::broker::MemoryBroker;
    use crate::events::Event;
    use crate::ui::Theme;

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn rendered(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, app, frame.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn widths_follow_widest_cell() {
        let lines = vec![
            ["Topic".to_string(), "ab".into(), "c".into(), "d".into(), "e".into()],
            ["much-longer".to_string(), "a".into(), "cc".into(), "d".into(), "é".into()],
        ];
        assert_eq!(column_widths(&lines), [11, 2, 2, 1, 1]);
    }

    #[test]
    fn renders_header_then_sorted_topics() {
        let broker = MemoryBroker::new("m")
            .with_partition("zeta", 0, 0, 1_500)
            .with_partition("alpha", 0, 0, 20)
            .with_partition("Mid", 0, 0, 30);
        let mut app = App::new(Box::new(broker), Theme::dark());
        app.handle(Event::Tick).unwrap();

        let lines = rendered(&app);

        assert!(lines[0].starts_with("Topic"));
        assert!(lines[0].contains("Growth"));
        assert!(lines[1].starts_with('─'));
        assert!(lines[2].starts_with("Mid"));
        assert!(lines[3].starts_with("alpha"));
        assert!(lines[4].starts_with("zeta"));
        assert!(lines[4].contains("1,500"));
        assert!(lines[4].contains("? msg/s"));
    }

    #[test]
    fn empty_cluster_renders_header_only() {
        let mut app = App::new(Box::new(MemoryBroker::new("m")), Theme::dark());
        app.handle(Event::Tick).unwrap();

        let lines = rendered(&app);
        assert!(lines[0].starts_with("Topic"));
        assert!(lines[2].trim().is_empty());
    }
}
