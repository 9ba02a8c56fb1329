use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for descriptions.
    pub subtext0: Color,
    /// Accent color for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for category headings.
    pub mauve: Color,
    /// Success/positive state color, used for counts.
    pub green: Color,
    /// Warning/attention color, used for the empty state.
    pub yellow: Color,
}

impl Theme {
    /// Catppuccin Mocha-inspired default palette.
    pub const DEFAULT: Self = Self {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    };
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// External catalog file; `None` uses the built-in catalog.
    pub catalog_path: Option<std::path::PathBuf>,
    /// Category preselected when the TUI starts (empty = all categories).
    pub default_category: String,
    /// Whether the TUI shows descriptions next to names.
    pub show_descriptions: bool,
    /// Log level used when no CLI flag overrides it.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_category: String::new(),
            show_descriptions: true,
            log_level: "info".to_string(),
        }
    }
}
