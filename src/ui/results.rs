use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::query::FilteredResult;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::{max_width, pad_to_width, truncate_to_width};

/// Message shown when nothing matches the current query.
pub const EMPTY_MESSAGE: &str = "No applets found matching your search.";

/// One visual row of the grouped results list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row<'a> {
    /// Category heading with its match count.
    Heading {
        /// Category label.
        category: &'a str,
        /// Entries in the group.
        count: usize,
    },
    /// An applet line; `index` is its position in display order.
    Entry {
        /// Position within `FilteredResult::display_order()`.
        index: usize,
        /// Applet name.
        name: &'a str,
        /// Applet description.
        description: &'a str,
    },
}

/// What: Flatten a grouped result into display rows.
///
/// Inputs:
/// - `result`: Filtered result to lay out.
///
/// Output:
/// - Heading rows followed by their entries, in group order.
///
/// Details:
/// - Entry indices are positions in `result.entries`, so they count across
///   groups in the same order the groups are displayed.
pub fn build_rows<'a>(result: &FilteredResult<'a>) -> Vec<Row<'a>> {
    let mut rows = Vec::with_capacity(result.len() + result.groups.len());
    let mut index = 0usize;
    for g in &result.groups {
        rows.push(Row::Heading {
            category: g.category,
            count: g.entries.len(),
        });
        for &e in &g.entries {
            rows.push(Row::Entry {
                index,
                name: &e.name,
                description: &e.description,
            });
            index += 1;
        }
    }
    rows
}

/// What: Row position of the selected entry.
///
/// Inputs:
/// - `rows`: Display rows from [`build_rows`].
/// - `selected`: Display-order entry index.
///
/// Output:
/// - Index into `rows`, or `None` when no entry row carries `selected`.
fn row_for_selection(rows: &[Row<'_>], selected: usize) -> Option<usize> {
    rows.iter()
        .position(|r| matches!(r, Row::Entry { index, .. } if *index == selected))
}

/// Render the grouped results list, or the empty-state message.
///
/// Keeps the selection centered within the visible rows when possible.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(" Applets ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));

    let result = app.filtered();
    if result.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(th.yellow),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(msg, area);
        app.list_state = ListState::default();
        return;
    }

    let rows = build_rows(&result);
    let name_w = max_width(result.entries.iter().map(|e| e.name.as_str()));
    // borders, highlight symbol, indent, and the gap after the name
    let desc_w = (area.width as usize).saturating_sub(2 + 2 + 2 + name_w + 2);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|r| match r {
            Row::Heading { category, count } => ListItem::new(Line::from(vec![
                Span::styled(
                    (*category).to_string(),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({count})"), Style::default().fg(th.overlay1)),
            ])),
            Row::Entry {
                name, description, ..
            } => {
                let mut segs = vec![Span::styled(
                    format!("  {}", pad_to_width(name, name_w)),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )];
                if app.show_descriptions && !description.is_empty() && desc_w > 0 {
                    segs.push(Span::styled(
                        format!("  {}", truncate_to_width(description, desc_w)),
                        Style::default().fg(th.subtext0),
                    ));
                }
                ListItem::new(Line::from(segs))
            }
        })
        .collect();

    let selected_row = row_for_selection(&rows, app.selected);
    let viewport_rows = area.height.saturating_sub(2) as usize;
    let desired = match selected_row {
        Some(sel) if viewport_rows > 0 && rows.len() > viewport_rows => sel
            .saturating_sub(viewport_rows / 2)
            .min(rows.len().saturating_sub(viewport_rows)),
        _ => 0,
    };
    drop(result);
    if app.list_state.offset() != desired {
        app.list_state = ListState::default().with_offset(desired);
    }
    app.list_state.select(selected_row);

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.sapphire))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::query::{QueryState, filter};

    #[test]
    /// What: Rows interleave headings and entries with display-order indices
    fn rows_follow_groups() {
        let c = vec![
            CatalogEntry::new("a", "first", "B"),
            CatalogEntry::new("b", "second", "A"),
            CatalogEntry::new("c", "third", "B"),
        ];
        let r = filter(&c, &QueryState::default());
        let rows = build_rows(&r);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], Row::Heading { category: "B", count: 2 });
        assert!(matches!(rows[2], Row::Entry { index: 1, name: "c", .. }));
        assert_eq!(rows[3], Row::Heading { category: "A", count: 1 });
        assert!(matches!(rows[4], Row::Entry { index: 2, name: "b", .. }));
        assert_eq!(row_for_selection(&rows, 2), Some(4));
        assert_eq!(row_for_selection(&rows, 9), None);
    }
}
