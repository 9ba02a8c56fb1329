//! Theme colors, settings, and config paths for appletdex.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Path resolution for config directories.
mod paths;
/// Settings file parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use settings::{parse_settings, settings, settings_from_path};
pub use types::{Settings, Theme};

/// Return the active color palette.
///
/// The palette is fixed; `no_color` output paths bypass it entirely.
pub const fn theme() -> Theme {
    Theme::DEFAULT
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Serialize tests that mutate process-wide environment variables.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
