//! Interactive browser runtime: terminal lifecycle and the event loop.

mod runtime;
mod terminal;

use appletdex::catalog::Catalog;
use appletdex::state::AppState;
use appletdex::theme::Settings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the TUI over `catalog` until the user quits.
///
/// Inputs:
/// - `catalog`: Catalog to browse.
/// - `settings`: User settings (default category, description visibility).
///
/// Output:
/// - `Ok(())` on normal exit; the terminal is restored even when the loop fails.
pub fn run(catalog: Catalog, settings: &Settings) -> Result<()> {
    let mut app = AppState::new(catalog, &settings.default_category, settings.show_descriptions);
    tracing::info!(
        total = app.catalog.len(),
        categories = app.catalog.declared_categories().len(),
        default_category = %settings.default_category,
        "starting applet browser"
    );
    terminal::setup_terminal()?;
    let res = runtime::run_loop(&mut app);
    if let Err(e) = terminal::restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    res
}
