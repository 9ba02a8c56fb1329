use std::env;
use std::path::{Path, PathBuf};

/// Determine the configuration file path for appletdex SETTINGS.
///
/// Looks for `settings.conf` under `$XDG_CONFIG_HOME/appletdex` first, then
/// under `$HOME/.config/appletdex`. Returns the first existing file.
pub fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(xdg) = xdg_config.as_deref().filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join("appletdex").join("settings.conf"));
    }
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join("appletdex")
                .join("settings.conf"),
        );
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/appletdex`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("appletdex");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for appletdex (ensured to exist)
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("appletdex");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/appletdex/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    /// Restore an environment variable to its saved value.
    fn restore(key: &str, val: Option<std::ffi::OsString>) {
        unsafe {
            if let Some(v) = val {
                std::env::set_var(key, v);
            } else {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    /// What: Config and logs directories live under `$HOME/.config/appletdex`
    fn paths_config_logs_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with(".config/appletdex"));
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        restore("HOME", orig_home);
    }

    #[test]
    /// What: `settings.conf` under XDG takes priority over HOME
    fn settings_path_prefers_xdg() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let home = tempfile::tempdir().expect("tempdir");
        let xdg = tempfile::tempdir().expect("tempdir");
        let home_conf = home.path().join(".config").join("appletdex");
        let xdg_conf = xdg.path().join("appletdex");
        std::fs::create_dir_all(&home_conf).expect("mkdir");
        std::fs::create_dir_all(&xdg_conf).expect("mkdir");
        std::fs::write(home_conf.join("settings.conf"), "").expect("write");
        unsafe {
            std::env::set_var("HOME", home.path());
            std::env::set_var("XDG_CONFIG_HOME", xdg.path());
        }
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(home_conf.join("settings.conf"))
        );
        std::fs::write(xdg_conf.join("settings.conf"), "").expect("write");
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(xdg_conf.join("settings.conf"))
        );
        restore("HOME", orig_home);
        restore("XDG_CONFIG_HOME", orig_xdg);
    }
}
