//! Shared utilities for argument processing.

use std::io::IsTerminal;

/// What: Determine the log level based on command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings_level`: Level from `settings.conf`.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`, which overrides the settings file.
pub fn determine_log_level(args: &crate::args::Args, settings_level: &str) -> String {
    if args.verbose {
        "debug".to_string()
    } else if let Some(level) = args.log_level.as_deref() {
        level.to_ascii_lowercase()
    } else {
        settings_level.to_string()
    }
}

/// What: Decide whether CLI output should carry ANSI colors.
///
/// Output:
/// - `false` when `--no-color` is set, `NO_COLOR` is present, or stdout is not a terminal.
pub fn use_color(args: &crate::args::Args) -> bool {
    !args.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Precedence of verbose, flag, and settings levels
    fn log_level_precedence() {
        let mut a = Args::default();
        assert_eq!(determine_log_level(&a, "warn"), "warn");
        a.log_level = Some("TRACE".to_string());
        assert_eq!(determine_log_level(&a, "warn"), "trace");
        a.verbose = true;
        assert_eq!(determine_log_level(&a, "warn"), "debug");
    }

    #[test]
    /// What: --no-color always disables color
    fn no_color_flag() {
        let a = Args {
            no_color: true,
            ..Args::default()
        };
        assert!(!use_color(&a));
    }
}
