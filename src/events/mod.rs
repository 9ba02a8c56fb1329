//! Event handling layer for the applet browser.
//!
//! Maps terminal key events onto [`AppState`] mutations. Every mutation that
//! touches the query state recomputes the filtered view before returning.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus};

/// Rows moved by PageUp/PageDown.
const PAGE: isize = 10;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event (press only).
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the key requests exit.
///
/// Details:
/// - Navigation keys work regardless of focus.
/// - Printable keys edit the search text in [`Focus::Search`] and act as
///   shortcuts (`q`, `j`, `k`, `/`) in [`Focus::Results`].
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('u') if ctrl => app.clear_search(),
        KeyCode::Esc => {
            if app.query.search_text.is_empty() {
                return true;
            }
            app.clear_search();
        }
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Enter => app.toggle_focus(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE),
        KeyCode::PageDown => app.move_selection(PAGE),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Backspace if app.focus == Focus::Search => app.backspace(),
        KeyCode::Char(ch) if !ctrl && !ke.modifiers.contains(KeyModifiers::ALT) => {
            return handle_char(ch, app);
        }
        _ => {}
    }
    false
}

/// Printable character handling, dependent on focus.
fn handle_char(ch: char, app: &mut AppState) -> bool {
    match app.focus {
        Focus::Search => app.push_char(ch),
        Focus::Results => match ch {
            'q' => return true,
            'j' => app.move_selection(1),
            'k' => app.move_selection(-1),
            '/' => app.focus = Focus::Search,
            _ => {}
        },
    }
    false
}
