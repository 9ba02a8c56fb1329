//! Application state owned by the TUI.

use ratatui::widgets::ListState;

use super::types::{ALL_CATEGORIES, Focus};
use crate::catalog::{Catalog, CatalogEntry};
use crate::query::{self, FilteredResult, QueryState};

/// Global application state shared by the event, rendering, and CLI paths.
#[derive(Debug, Default)]
pub struct AppState {
    /// Immutable catalog being browsed.
    pub catalog: Catalog,
    /// Current search text and category selection.
    pub query: QueryState,
    /// Selector position: 0 = all categories, `i` = declared category `i - 1`.
    pub category_cursor: usize,
    /// Which widget receives printable keys.
    pub focus: Focus,
    /// Index of the selected entry in display (grouped) order.
    pub selected: usize,
    /// Number of entries in the last recomputed result.
    pub result_len: usize,
    /// List widget state (row selection and scroll offset), managed by rendering.
    pub list_state: ListState,
    /// Whether descriptions are rendered next to names.
    pub show_descriptions: bool,
}

impl AppState {
    /// What: Create state for browsing `catalog`.
    ///
    /// Inputs:
    /// - `catalog`: Catalog to browse.
    /// - `default_category`: Category preselected at startup (empty = all).
    /// - `show_descriptions`: Whether to render descriptions.
    ///
    /// Output:
    /// - State with an up-to-date result count and the first entry selected.
    pub fn new(catalog: Catalog, default_category: &str, show_descriptions: bool) -> Self {
        let mut app = Self {
            catalog,
            show_descriptions,
            ..Self::default()
        };
        app.select_category(default_category);
        app
    }

    /// Recompute the filtered view for the current query.
    pub fn filtered(&self) -> FilteredResult<'_> {
        query::recompute(&self.catalog, &self.query)
    }

    /// Currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.filtered().display_order().nth(self.selected)
    }

    /// Label shown in the category selector.
    pub fn category_label(&self) -> &str {
        if self.query.selected_category.is_empty() {
            ALL_CATEGORIES
        } else {
            &self.query.selected_category
        }
    }

    /// What: Recompute after a query-state change and clamp the selection.
    ///
    /// Details:
    /// - Selection resets to the first entry; an empty result clears it.
    pub fn refresh(&mut self) {
        self.result_len = self.filtered().len();
        self.selected = 0;
        self.list_state.select(if self.result_len == 0 { None } else { Some(0) });
        tracing::debug!(
            search = %self.query.search_text,
            category = %self.query.selected_category,
            matched = self.result_len,
            "query state changed"
        );
    }

    /// Append a character to the search text.
    pub fn push_char(&mut self, ch: char) {
        self.query.search_text.push(ch);
        self.refresh();
    }

    /// Remove the last character of the search text; no-op when empty.
    pub fn backspace(&mut self) {
        if self.query.search_text.pop().is_some() {
            self.refresh();
        }
    }

    /// Clear the search text, keeping the category selection.
    pub fn clear_search(&mut self) {
        if !self.query.search_text.is_empty() {
            self.query.search_text.clear();
            self.refresh();
        }
    }

    /// What: Select a category by label.
    ///
    /// Inputs:
    /// - `label`: Category label, or empty for all categories.
    ///
    /// Output:
    /// - `true` when `label` is one of the catalog's declared categories or empty.
    ///
    /// Details:
    /// - Undeclared labels are still applied (they may simply match nothing);
    ///   the selector cursor then returns to "All Categories" for cycling.
    pub fn select_category(&mut self, label: &str) -> bool {
        if label.is_empty() {
            self.category_cursor = 0;
            self.query.selected_category.clear();
            self.refresh();
            return true;
        }
        let pos = self
            .catalog
            .declared_categories()
            .iter()
            .position(|c| c == label);
        self.category_cursor = pos.map_or(0, |i| i + 1);
        self.query.selected_category = label.to_string();
        self.refresh();
        label.is_empty() || pos.is_some()
    }

    /// Apply the selector cursor to the query state.
    fn apply_cursor(&mut self) {
        let label = if self.category_cursor == 0 {
            String::new()
        } else {
            self.catalog.declared_categories()[self.category_cursor - 1].clone()
        };
        self.query.selected_category = label;
        self.refresh();
    }

    /// Advance the category selector, wrapping back to "All Categories".
    pub fn next_category(&mut self) {
        let slots = self.catalog.declared_categories().len() + 1;
        self.category_cursor = (self.category_cursor + 1) % slots;
        self.apply_cursor();
    }

    /// Move the category selector backwards, wrapping to the last category.
    pub fn prev_category(&mut self) {
        let slots = self.catalog.declared_categories().len() + 1;
        self.category_cursor = (self.category_cursor + slots - 1) % slots;
        self.apply_cursor();
    }

    /// What: Move the selection by `delta` entries, clamped to the result.
    ///
    /// Inputs:
    /// - `delta`: Signed step (negative moves up).
    pub fn move_selection(&mut self, delta: isize) {
        if self.result_len == 0 {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let max = self.result_len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    /// Swap focus between the search field and the results list.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }
}
