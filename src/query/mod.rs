//! Catalog query engine: text/category filtering and category grouping.
//!
//! Everything here is a pure function of a catalog slice and a [`QueryState`].
//! Callers recompute a [`FilteredResult`] explicitly whenever the query state
//! changes; the engine keeps no state of its own.

use crate::catalog::{Catalog, CatalogEntry};

/// User-controlled query: search text plus category selection.
///
/// Both fields use the empty string for "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Free-text needle matched against names and descriptions.
    pub search_text: String,
    /// Exact category label, or empty for all categories.
    pub selected_category: String,
}

impl QueryState {
    /// What: Build a query from possibly-absent inputs.
    ///
    /// Inputs:
    /// - `search_text`: Search needle, `None` when the caller has none.
    /// - `selected_category`: Category label, `None` for all categories.
    ///
    /// Output:
    /// - Query with absent inputs normalized to the empty string.
    pub fn from_parts(search_text: Option<&str>, selected_category: Option<&str>) -> Self {
        Self {
            search_text: search_text.unwrap_or_default().to_string(),
            selected_category: selected_category.unwrap_or_default().to_string(),
        }
    }

    /// Whether neither constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty() && self.selected_category.is_empty()
    }
}

/// Entries of one category within a filtered result.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Group<'a> {
    /// Category label shared by every entry of the group.
    pub category: &'a str,
    /// Matching entries in catalog order.
    pub entries: Vec<&'a CatalogEntry>,
}

/// Snapshot derived from a catalog and a query.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FilteredResult<'a> {
    /// Matching entries in catalog order.
    pub entries: Vec<&'a CatalogEntry>,
    /// Distinct categories of `entries`, in first-occurrence order.
    pub categories: Vec<&'a str>,
    /// One group per element of `categories`, in the same order.
    pub groups: Vec<Group<'a>>,
}

impl<'a> FilteredResult<'a> {
    /// Number of matching entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order: group by group, each group in catalog order.
    pub fn display_order(&self) -> impl Iterator<Item = &'a CatalogEntry> + '_ {
        self.groups.iter().flat_map(|g| g.entries.iter().copied())
    }

    /// Entries of `category`, or `None` when the category has no matches.
    pub fn group(&self, category: &str) -> Option<&[&'a CatalogEntry]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.entries.as_slice())
    }
}

/// What: Decide whether `entry` satisfies `query`.
///
/// Inputs:
/// - `entry`: Catalog entry under test.
/// - `needle`: Lowercased search text (empty matches everything).
/// - `category`: Selected category (empty matches everything).
///
/// Output:
/// - `true` when both the text and the category constraints hold.
fn matches(entry: &CatalogEntry, needle: &str, category: &str) -> bool {
    let text_ok = needle.is_empty()
        || entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle);
    let category_ok = category.is_empty() || entry.category == category;
    text_ok && category_ok
}

/// What: Select the entries of `catalog` that match `query`.
///
/// Inputs:
/// - `catalog`: Entries in canonical order (may be empty).
/// - `query`: Search text and category selection.
///
/// Output:
/// - Matching entries, in catalog order.
///
/// Details:
/// - Text match is a case-insensitive substring test on name or description.
/// - Category match is exact and case-sensitive.
/// - Unknown categories and empty catalogs yield an empty list.
pub fn filter_entries<'a>(catalog: &'a [CatalogEntry], query: &QueryState) -> Vec<&'a CatalogEntry> {
    if query.is_unconstrained() {
        return catalog.iter().collect();
    }
    let needle = query.search_text.to_lowercase();
    catalog
        .iter()
        .filter(|e| matches(e, &needle, &query.selected_category))
        .collect()
}

/// What: Distinct categories of `entries` in first-occurrence order.
///
/// Inputs:
/// - `entries`: Filtered entries in catalog order.
///
/// Output:
/// - Category labels without duplicates.
pub fn categories_of<'a>(entries: &[&'a CatalogEntry]) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::new();
    for e in entries {
        let c = e.category.as_str();
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// What: Partition `entries` into one group per category.
///
/// Inputs:
/// - `entries`: Filtered entries in catalog order.
/// - `categories`: Group keys, in the order groups should appear.
///
/// Output:
/// - One [`Group`] per key, each holding the order-preserving subsequence of
///   `entries` with that category. Keys with no entries produce empty groups.
pub fn group_by<'a>(entries: &[&'a CatalogEntry], categories: &[&'a str]) -> Vec<Group<'a>> {
    categories
        .iter()
        .map(|&category| Group {
            category,
            entries: entries
                .iter()
                .copied()
                .filter(|e| e.category == category)
                .collect(),
        })
        .collect()
}

/// What: Derive the full [`FilteredResult`] for `catalog` under `query`.
///
/// Inputs:
/// - `catalog`: Entries in canonical order.
/// - `query`: Current query state.
///
/// Output:
/// - Entries, categories, and groups for the query.
///
/// Details:
/// - Pure and deterministic; neither input is modified.
pub fn filter<'a>(catalog: &'a [CatalogEntry], query: &QueryState) -> FilteredResult<'a> {
    let entries = filter_entries(catalog, query);
    let categories = categories_of(&entries);
    let groups = group_by(&entries, &categories);
    FilteredResult {
        entries,
        categories,
        groups,
    }
}

/// Recompute the result after a query-state change.
///
/// This is the single entry point a presentation layer calls on every edit of
/// the search text or category selection.
pub fn recompute<'a>(catalog: &'a Catalog, query: &QueryState) -> FilteredResult<'a> {
    let result = filter(catalog.entries(), query);
    tracing::trace!(
        search = %query.search_text,
        category = %query.selected_category,
        matched = result.len(),
        total = catalog.len(),
        "recomputed catalog query"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("cat", "Concatenate files", "File Operations"),
            CatalogEntry::new("grep", "Search patterns", "Text Processing"),
        ]
    }

    fn q(text: &str, cat: &str) -> QueryState {
        QueryState::from_parts(Some(text), Some(cat))
    }

    #[test]
    /// What: Mixed-case needle matches by name
    ///
    /// - Input: search "GR"
    /// - Output: only `grep`, category "Text Processing"
    fn search_is_case_insensitive() {
        let c = sample();
        let r = filter(&c, &q("GR", ""));
        assert_eq!(r.len(), 1);
        assert_eq!(r.entries[0].name, "grep");
        assert_eq!(r.categories, vec!["Text Processing"]);
    }

    #[test]
    /// What: Category selection alone narrows to exact label
    fn category_only() {
        let c = sample();
        let r = filter(&c, &q("", "File Operations"));
        assert_eq!(r.entries.len(), 1);
        assert_eq!(r.entries[0].name, "cat");
        assert_eq!(r.categories, vec!["File Operations"]);
        assert!(filter(&c, &q("", "file operations")).is_empty());
    }

    #[test]
    /// What: No match yields an empty snapshot rather than an error
    fn no_match_is_empty_state() {
        let c = sample();
        let r = filter(&c, &q("xyz", ""));
        assert!(r.is_empty());
        assert!(r.categories.is_empty());
        assert!(r.groups.is_empty());
    }

    #[test]
    /// What: Text and category constraints combine with AND
    fn text_and_category_are_anded() {
        let c = sample();
        assert_eq!(filter(&c, &q("files", "")).len(), 1);
        assert!(filter(&c, &q("files", "Text Processing")).is_empty());
    }

    #[test]
    /// What: Description matches count as text matches
    fn description_match() {
        let c = sample();
        let r = filter(&c, &q("PATTERN", ""));
        assert_eq!(r.entries[0].name, "grep");
    }

    #[test]
    /// What: Absent parts normalize to empty strings
    fn from_parts_normalizes_none() {
        let qs = QueryState::from_parts(None, None);
        assert_eq!(qs, QueryState::default());
        assert!(qs.is_unconstrained());
        let c = sample();
        let all = filter_entries(&c, &qs);
        assert!(all.iter().zip(&c).all(|(a, b)| std::ptr::eq(*a, b)));
        assert_eq!(all.len(), c.len());
        assert!(!q("x", "").is_unconstrained());
        assert!(!q("", "Shell").is_unconstrained());
    }

    #[test]
    /// What: Category dedup keeps first-occurrence order
    fn categories_first_occurrence() {
        let c = vec![
            CatalogEntry::new("a", "", "B"),
            CatalogEntry::new("b", "", "A"),
            CatalogEntry::new("c", "", "B"),
            CatalogEntry::new("d", "", "C"),
        ];
        let refs: Vec<&CatalogEntry> = c.iter().collect();
        assert_eq!(categories_of(&refs), vec!["B", "A", "C"]);
    }

    #[test]
    /// What: Groups keep catalog order and cover every filtered entry once
    fn groups_partition_entries() {
        let c = vec![
            CatalogEntry::new("a", "", "B"),
            CatalogEntry::new("b", "", "A"),
            CatalogEntry::new("c", "", "B"),
        ];
        let r = filter(&c, &QueryState::default());
        let names: Vec<&str> = r
            .group("B")
            .unwrap_or_default()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        let total: usize = r.groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, r.len());
        assert!(r.group("Z").is_none());
    }

    #[test]
    /// What: Keys without entries produce empty groups
    fn group_by_unknown_key_is_empty() {
        let c = sample();
        let refs: Vec<&CatalogEntry> = c.iter().collect();
        let groups = group_by(&refs, &["Shell"]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].entries.is_empty());
    }
}
