//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing `key = value` configuration files
//! with comment skipping and inline comment stripping.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Normalizes the key to lowercase with `.`, `-` and spaces mapped to `_`
/// - Strips inline comments from the value and trims both sides
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// Remove a trailing ` // ...` or ` # ...` comment from a value.
///
/// A marker only starts a comment when whitespace precedes it, so paths such
/// as `/srv//applets.json` survive.
pub fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .filter(|&(_, ch)| ch.is_whitespace())
        .map(|(i, ch)| i + ch.len_utf8())
        .find(|&after| s[after..].starts_with("//") || s[after..].starts_with('#'))
        .unwrap_or(s.len());
    s[..cut].trim()
}

/// What: Interpret a config value as a boolean.
///
/// Inputs:
/// - `val`: Raw value (already trimmed)
///
/// Output:
/// - `Some(bool)` for `true/false`, `yes/no`, `on/off`, `1/0`; `None` otherwise
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped
    fn skips_comments() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   # note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("key = value"));
    }

    #[test]
    /// What: Keys are normalized and inline comments dropped
    ///
    /// - Input: `Catalog-Path = /tmp/c.json # local`
    /// - Output: (`catalog_path`, `/tmp/c.json`)
    fn key_value_normalization() {
        assert_eq!(
            parse_key_value("Catalog-Path = /tmp/c.json # local"),
            Some(("catalog_path".to_string(), "/tmp/c.json".to_string()))
        );
        assert_eq!(
            parse_key_value("default.category = Checksums & Encoding"),
            Some((
                "default_category".to_string(),
                "Checksums & Encoding".to_string()
            ))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = orphan"), None);
    }

    #[test]
    /// What: Doubled slashes inside a value are not comments
    ///
    /// - Input: `/srv//applets.json`, with and without a trailing comment
    /// - Output: The path is kept whole; only whitespace-led markers cut
    fn inline_comment_needs_leading_space() {
        assert_eq!(strip_inline_comment("/srv//applets.json"), "/srv//applets.json");
        assert_eq!(strip_inline_comment("/srv//applets.json // local"), "/srv//applets.json");
        assert_eq!(strip_inline_comment("/srv/a#b.json\t# note"), "/srv/a#b.json");
        assert_eq!(
            parse_key_value("catalog_path = /srv//applets.json"),
            Some(("catalog_path".to_string(), "/srv//applets.json".to_string()))
        );
    }

    #[test]
    /// What: Boolean spellings
    fn bool_values() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
