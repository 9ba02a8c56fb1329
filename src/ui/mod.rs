//! TUI rendering for the applet browser.
//!
//! The screen is split into a header (search field and category selector), a
//! one-line stats bar, the grouped results list, and a key-hint footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod header;
mod results;

pub use results::{EMPTY_MESSAGE, Row, build_rows};

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; the list selection/offset is updated in place.
///
/// Details:
/// - Recomputes the filtered view once per frame and hands it to each pane.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    header::render_stats(f, app, chunks[1]);
    results::render_results(f, app, chunks[2]);
    render_footer(f, chunks[3]);
}

/// Key hints along the bottom edge.
fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let th = theme();
    let hint = |key: &'static str, what: &'static str| {
        [
            Span::styled(key, Style::default().fg(th.sapphire)),
            Span::styled(format!(" {what}  "), Style::default().fg(th.overlay1)),
        ]
    };
    let spans: Vec<Span> = [
        hint("Tab", "category"),
        hint("↑/↓", "move"),
        hint("Enter", "focus"),
        hint("Ctrl+U", "clear"),
        hint("Esc", "quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
