//! Small utility helpers for config parsing, text layout, and time formatting.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Right-pad `s` with spaces to a display width of `width` columns.
///
/// Inputs:
/// - `s`: Text to pad.
/// - `width`: Target width in terminal columns.
///
/// Output:
/// - Padded string; text already at or beyond `width` is returned unchanged.
///
/// Details:
/// - Uses Unicode display width so wide glyphs are counted as two columns.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - w));
    out
}

/// What: Truncate `s` so it fits in `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to truncate.
/// - `max`: Maximum display width.
///
/// Output:
/// - `s` unchanged when it fits, otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > max - 1 {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

/// Widest applet name among `names`, in terminal columns.
pub fn max_width<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - Timestamp as `YYYY-MM-DD-T HH:MM:SS`.
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
