//! Command-line category listing.

use std::io::Write;

use crossterm::style::Stylize;

use crate::catalog::Catalog;
use crate::util::{max_width, pad_to_width};

/// What: Format the catalog's declared categories with applet counts.
///
/// Inputs:
/// - `catalog`: Catalog to summarize.
/// - `color`: Whether to emit ANSI styling.
///
/// Output:
/// - One `label  count` line per declared category, in selector order, then a
///   `total` line.
pub fn format_categories(catalog: &Catalog, color: bool) -> String {
    let labels = catalog.declared_categories();
    let w = max_width(labels.iter().map(String::as_str)).max("total".len());
    let mut out = String::new();
    for label in labels {
        let count = catalog.count_in(label);
        let padded = pad_to_width(label, w);
        if color {
            out.push_str(&format!("{}  {}\n", padded.magenta(), count.to_string().green()));
        } else {
            out.push_str(&format!("{padded}  {count}\n"));
        }
    }
    out.push_str(&format!("{}  {}\n", pad_to_width("total", w), catalog.len()));
    out
}

/// Print declared categories with counts.
pub fn handle_list_categories(
    catalog: &Catalog,
    color: bool,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    tracing::info!(categories = catalog.declared_categories().len(), "listing categories");
    write!(out, "{}", format_categories(catalog, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Built-in catalog lists every selector label and the total
    fn builtin_listing() {
        let text = format_categories(&Catalog::builtin(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("File Operations"));
        assert!(lines[0].ends_with(" 40"));
        assert!(lines[13].starts_with("total"));
        assert!(lines[13].ends_with(" 290"));
    }

    #[test]
    /// What: Uncategorized entries never print an unlabelled row
    fn blank_category_listing() {
        use crate::catalog::CatalogEntry;
        let c = Catalog::new(vec![
            CatalogEntry::new("sh", "Shell", ""),
            CatalogEntry::new("ls", "List", "File Operations"),
        ]);
        let text = format_categories(&c, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["File Operations  1", "total            2"]);
    }
}
