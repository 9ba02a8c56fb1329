use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Render the search field (left) and category selector (right).
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let search_border = if app.focus == Focus::Search {
        th.sapphire
    } else {
        th.overlay1
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.query.search_text.clone(), Style::default().fg(th.text)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                " Search applets ",
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(search_border)),
    );
    f.render_widget(input, cols[0]);

    let selector = Paragraph::new(Line::from(vec![
        Span::styled("◂ ", Style::default().fg(th.overlay1)),
        Span::styled(
            app.category_label().to_string(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▸", Style::default().fg(th.overlay1)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(" Category ", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1)),
    );
    f.render_widget(selector, cols[1]);

    if app.focus == Focus::Search {
        let typed = u16::try_from(UnicodeWidthStr::width(app.query.search_text.as_str()))
            .unwrap_or(u16::MAX);
        let x = cols[0]
            .x
            .saturating_add(3)
            .saturating_add(typed)
            .min(cols[0].right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, cols[0].y.saturating_add(1)));
    }
}

/// Render the filtered/total counts line.
pub fn render_stats(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} applets", app.result_len),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {} total", app.catalog.len()),
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
