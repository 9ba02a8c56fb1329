//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify what the browser draws for different query states
//! without requiring a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use appletdex::catalog::{Catalog, CatalogEntry};
use appletdex::state::AppState;
use appletdex::ui;

/// Render one frame and return the buffer as text lines.
fn render(app: &mut AppState, w: u16, h: u16) -> Vec<String> {
    let backend = TestBackend::new(w, h);
    let mut term = Terminal::new(backend).expect("terminal");
    term.draw(|f| ui::ui(f, app)).expect("draw");
    let buf = term.backend().buffer().clone();
    (0..h)
        .map(|y| (0..w).map(|x| buf[(x, y)].symbol().to_string()).collect())
        .collect()
}

fn sample_app() -> AppState {
    AppState::new(
        Catalog::new(vec![
            CatalogEntry::new("cat", "Concatenate files", "File Operations"),
            CatalogEntry::new("grep", "Search patterns", "Text Processing"),
            CatalogEntry::new("cp", "Copy files", "File Operations"),
        ]),
        "",
        true,
    )
}

#[test]
/// What: Grouped list shows category headings with counts and entries
fn renders_grouped_results() {
    let mut app = sample_app();
    let screen = render(&mut app, 80, 16).join("\n");
    assert!(screen.contains("File Operations (2)"));
    assert!(screen.contains("Text Processing (1)"));
    assert!(screen.contains("Concatenate files"));
    assert!(screen.contains("3 applets"));
    assert!(screen.contains("All Categories"));
}

#[test]
/// What: Empty result renders the empty-state message
fn renders_empty_state() {
    let mut app = sample_app();
    for ch in "xyz".chars() {
        app.push_char(ch);
    }
    let screen = render(&mut app, 80, 12).join("\n");
    assert!(screen.contains(ui::EMPTY_MESSAGE));
    assert!(screen.contains("0 applets"));
    assert_eq!(app.list_state.selected(), None);
}

#[test]
/// What: Selection maps onto the entry row, skipping headings
fn selection_highlights_entry_row() {
    let mut app = sample_app();
    app.move_selection(2);
    render(&mut app, 80, 16);
    // rows: [File Operations, cat, cp, Text Processing, grep]
    assert_eq!(app.list_state.selected(), Some(4));
}

#[test]
/// What: Category selection is reflected in the selector and the list
fn renders_selected_category() {
    let mut app = sample_app();
    app.next_category();
    let screen = render(&mut app, 80, 16).join("\n");
    assert!(screen.contains("File Operations (2)"));
    assert!(!screen.contains("Text Processing (1)"));
    assert!(screen.contains("2 applets"));
}

#[test]
/// What: Built-in catalog renders in a small terminal without panicking
fn builtin_catalog_small_terminal() {
    let mut app = AppState::new(Catalog::builtin(), "", false);
    app.move_selection(200);
    let lines = render(&mut app, 40, 10);
    assert_eq!(lines.len(), 10);
}
