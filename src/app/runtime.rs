use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use appletdex::events::handle_event;
use appletdex::state::AppState;
use appletdex::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What: Drive the draw/poll loop until the user quits.
///
/// Inputs:
/// - `app`: Application state to render and mutate.
///
/// Output:
/// - `Ok(())` on a clean exit; terminal I/O errors otherwise.
///
/// Details:
/// - Synchronous: each key event is applied (recomputing the filtered view)
///   before the next frame is drawn.
pub fn run_loop(app: &mut AppState) -> Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    loop {
        terminal.draw(|f| ui(f, app))?;
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let ev = event::read()?;
        if handle_event(&ev, app) {
            tracing::debug!("quit requested");
            break;
        }
    }
    terminal.show_cursor()?;
    Ok(())
}
