//! Command-line query output: grouped text, JSON, and counts.

use std::io::Write;

use crossterm::style::Stylize;

use crate::catalog::Catalog;
use crate::query::{FilteredResult, QueryState, recompute};
use crate::ui::EMPTY_MESSAGE;
use crate::util::{max_width, pad_to_width};

/// JSON document printed by `--json`.
#[derive(serde::Serialize)]
struct Report<'r, 'a> {
    /// Number of matching applets.
    count: usize,
    /// Number of applets in the catalog.
    total: usize,
    /// Search text used.
    search: &'r str,
    /// Category selection used (empty = all).
    category: &'r str,
    /// Entries, categories, and groups.
    #[serde(flatten)]
    result: &'r FilteredResult<'a>,
}

/// What: Format a filtered result as grouped plain text.
///
/// Inputs:
/// - `result`: Filtered result.
/// - `color`: Whether to emit ANSI styling.
///
/// Output:
/// - Heading line per category (`Category (n)`) followed by aligned
///   `name  description` lines; the empty-state message when nothing matched.
pub fn format_grouped(result: &FilteredResult<'_>, color: bool) -> String {
    if result.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let name_w = max_width(result.entries.iter().map(|e| e.name.as_str()));
    let mut out = String::new();
    for (i, g) in result.groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let heading = format!("{} ({})", g.category, g.entries.len());
        if color {
            out.push_str(&format!("{}\n", heading.bold().magenta()));
        } else {
            out.push_str(&heading);
            out.push('\n');
        }
        for e in &g.entries {
            let name = pad_to_width(&e.name, name_w);
            let line = if e.description.is_empty() {
                format!("  {}", name.trim_end())
            } else if color {
                format!("  {}  {}", name.bold(), e.description.as_str().dark_grey())
            } else {
                format!("  {name}  {}", e.description)
            };
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Print the grouped text result for `query`.
pub fn handle_search(
    catalog: &Catalog,
    query: &QueryState,
    color: bool,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let result = recompute(catalog, query);
    write!(out, "{}", format_grouped(&result, color))?;
    tracing::info!(count = result.len(), "printed search results");
    Ok(())
}

/// Print the result for `query` as pretty JSON.
pub fn handle_json(catalog: &Catalog, query: &QueryState, out: &mut dyn Write) -> std::io::Result<()> {
    let result = recompute(catalog, query);
    let report = Report {
        count: result.len(),
        total: catalog.len(),
        search: &query.search_text,
        category: &query.selected_category,
        result: &result,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Print the number of applets matching `query`.
pub fn handle_count(catalog: &Catalog, query: &QueryState, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", recompute(catalog, query).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn two() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("cat", "Concatenate files", "File Operations"),
            CatalogEntry::new("grep", "Search patterns", "Text Processing"),
        ])
    }

    #[test]
    /// What: Plain grouped output aligns names and shows group counts
    fn grouped_plain() {
        let c = two();
        let r = recompute(&c, &QueryState::default());
        let text = format_grouped(&r, false);
        assert_eq!(
            text,
            "File Operations (1)\n  cat   Concatenate files\n\nText Processing (1)\n  grep  Search patterns\n"
        );
    }

    #[test]
    /// What: Empty result prints the empty-state message
    fn grouped_empty() {
        let c = two();
        let r = recompute(&c, &QueryState::from_parts(Some("xyz"), None));
        assert_eq!(format_grouped(&r, false), format!("{EMPTY_MESSAGE}\n"));
    }

    #[test]
    /// What: JSON report carries counts, categories, and groups
    fn json_report() {
        let c = two();
        let mut buf = Vec::new();
        handle_json(&c, &QueryState::from_parts(Some("GR"), None), &mut buf).expect("io");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(v["count"], 1);
        assert_eq!(v["total"], 2);
        assert_eq!(v["search"], "GR");
        assert_eq!(v["categories"], serde_json::json!(["Text Processing"]));
        assert_eq!(v["groups"][0]["category"], "Text Processing");
        assert_eq!(v["groups"][0]["entries"][0]["name"], "grep");
    }
}
