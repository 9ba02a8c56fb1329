use std::fs;
use std::path::{Path, PathBuf};

use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// What: Parse `settings.conf` content into [`Settings`].
///
/// Inputs:
/// - `content`: Full file text.
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored (logged at debug level).
/// - An empty `catalog_path` keeps the built-in catalog.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "catalog_path" | "catalog" => {
                out.catalog_path = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val))
                };
            }
            "default_category" => out.default_category = val,
            "show_descriptions" => match parse_bool(&val) {
                Some(b) => out.show_descriptions = b,
                None => tracing::debug!(value = %val, "ignoring invalid show_descriptions"),
            },
            "log_level" => {
                if !val.is_empty() {
                    out.log_level = val.to_ascii_lowercase();
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

/// Load settings from `path`, falling back to defaults when unreadable.
pub fn settings_from_path(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// Load user settings from the resolved `settings.conf`.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |p| settings_from_path(&p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys override defaults; comments and unknown keys are ignored
    ///
    /// - Input: Config with comments, an unknown key, and every supported key
    /// - Output: Settings reflect the supported keys
    fn parse_all_keys() {
        let s = parse_settings(
            "# appletdex settings\n\
             catalog_path = /srv/applets.toml # local copy\n\
             default-category = Networking\n\
             show_descriptions = off\n\
             log_level = DEBUG\n\
             theme = dark\n",
        );
        assert_eq!(s.catalog_path, Some(PathBuf::from("/srv/applets.toml")));
        assert_eq!(s.default_category, "Networking");
        assert!(!s.show_descriptions);
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    /// What: Invalid values keep defaults
    fn invalid_values_keep_defaults() {
        let s = parse_settings("show_descriptions = sometimes\ncatalog_path =\nlog_level =\n");
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Missing file yields defaults
    fn missing_file_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = settings_from_path(&dir.path().join("nope.conf"));
        assert_eq!(s, Settings::default());
    }
}
