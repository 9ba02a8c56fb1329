//! Command-line argument definition and processing.

use std::io::Write;

use clap::Parser;

use crate::catalog::Catalog;

/// appletdex - browse and search the armybox applet catalog
#[derive(Parser, Debug, Default)]
#[command(name = "appletdex")]
#[command(version)]
#[command(about = "Browse and search the armybox applet catalog", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print applets whose name or description contains TEXT (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Print only applets in this exact category (e.g. "Text Processing")
    #[arg(short, long, value_name = "LABEL")]
    pub category: Option<String>,

    /// Print results as JSON instead of grouped text
    #[arg(long)]
    pub json: bool,

    /// Print only the number of matching applets
    #[arg(long, conflicts_with = "json")]
    pub count: bool,

    /// List the catalog's categories with applet counts
    #[arg(short = 'l', long)]
    pub list_categories: bool,

    /// Load the catalog from a JSON or TOML file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<std::path::PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Whether any flag requests non-interactive output instead of the TUI.
    pub const fn is_cli_mode(&self) -> bool {
        self.search.is_some()
            || self.category.is_some()
            || self.json
            || self.count
            || self.list_categories
    }
}

/// What: Run the non-interactive mode selected by `args`, if any.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `catalog`: Catalog to query.
/// - `out`: Destination for printed output.
///
/// Output:
/// - `Ok(true)` when a CLI mode ran (the caller should exit), `Ok(false)` when
///   the TUI should start; `Err` on write failures.
///
/// Details:
/// - `--list-categories` takes precedence over query output.
/// - `--count` and `--json` apply to the query given by `--search`/`--category`.
pub fn process_args(args: &Args, catalog: &Catalog, out: &mut dyn Write) -> std::io::Result<bool> {
    use crate::args::{list, search};

    if !args.is_cli_mode() {
        return Ok(false);
    }
    let color = crate::args::use_color(args);

    if args.list_categories {
        list::handle_list_categories(catalog, color, out)?;
        return Ok(true);
    }

    let query = crate::query::QueryState::from_parts(args.search.as_deref(), args.category.as_deref());
    tracing::info!(
        search = %query.search_text,
        category = %query.selected_category,
        json = args.json,
        count = args.count,
        "query requested from CLI"
    );
    if args.count {
        search::handle_count(catalog, &query, out)?;
    } else if args.json {
        search::handle_json(catalog, &query, out)?;
    } else {
        search::handle_search(catalog, &query, color, out)?;
    }
    Ok(true)
}
