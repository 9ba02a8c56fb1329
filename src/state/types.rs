//! Small state enums shared by events and rendering.

/// Which part of the browser currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search field: printable keys edit the search text.
    #[default]
    Search,
    /// Results list: printable keys are navigation shortcuts.
    Results,
}

impl Focus {
    /// The other focus target.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Results => Self::Search,
        }
    }
}

/// Label shown in the category selector when no category is selected.
pub const ALL_CATEGORIES: &str = "All Categories";
