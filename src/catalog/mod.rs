//! Applet catalog store.
//!
//! A [`Catalog`] owns the ordered list of [`CatalogEntry`] values for the
//! lifetime of a session. It is built once (from the built-in dataset or a
//! catalog file, see [`persist`]) and is read-only afterwards. The order of
//! entries is significant: every derived grouping in [`crate::query`] keeps it.

pub mod builtin;
pub mod persist;

pub use persist::{CatalogError, load_from_path};

/// One applet in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    /// Short applet name, e.g. `grep`.
    pub name: String,
    /// Human-readable one-line description.
    #[serde(default)]
    pub description: String,
    /// Category label, e.g. `Text Processing`.
    #[serde(default)]
    pub category: String,
}

impl CatalogEntry {
    /// Build an entry from borrowed parts.
    pub fn new(name: &str, description: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// Immutable, ordered applet catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Entries in canonical order.
    entries: Vec<CatalogEntry>,
    /// Labels offered by a category selector, in display order.
    declared: Vec<String>,
}

impl Catalog {
    /// What: Build a catalog whose selector labels are derived from the data.
    ///
    /// Inputs:
    /// - `entries`: Applets in canonical order.
    ///
    /// Output:
    /// - Catalog whose declared categories are the distinct, non-empty entry
    ///   categories in first-occurrence order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let declared = {
            let refs: Vec<&CatalogEntry> = entries.iter().collect();
            crate::query::categories_of(&refs)
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        };
        Self { entries, declared }
    }

    /// What: Build a catalog with an explicit selector label list.
    ///
    /// Inputs:
    /// - `entries`: Applets in canonical order.
    /// - `declared`: Category labels for the selector; may name categories that
    ///   have no entries, and need not cover every entry category.
    ///
    /// Output:
    /// - Catalog carrying both lists unchanged.
    ///
    /// Details:
    /// - Blank labels are dropped; the empty label already means "all categories".
    /// - An empty `declared` list falls back to the derived labels, as in [`Catalog::new`].
    pub fn with_categories(entries: Vec<CatalogEntry>, mut declared: Vec<String>) -> Self {
        declared.retain(|c| !c.trim().is_empty());
        if declared.is_empty() {
            return Self::new(entries);
        }
        Self { entries, declared }
    }

    /// The built-in armybox applet catalog.
    pub fn builtin() -> Self {
        let entries = builtin::APPLETS
            .iter()
            .map(|(name, description, category)| CatalogEntry::new(name, description, category))
            .collect();
        let declared = builtin::CATEGORIES.iter().map(|c| (*c).to_string()).collect();
        Self::with_categories(entries, declared)
    }

    /// Full catalog in canonical order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Total, unfiltered number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category labels offered by a selector, in display order.
    pub fn declared_categories(&self) -> &[String] {
        &self.declared
    }

    /// Number of entries (unfiltered) whose category is exactly `category`.
    pub fn count_in(&self, category: &str) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }
}
