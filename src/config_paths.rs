//! Centralized configuration paths for keydispatch
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/keydispatch/`
//! - Windows: `%APPDATA%\keydispatch\`
//!
//! `KEYDISPATCH_CONFIG_HOME` overrides the directory on every platform.
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "keydispatch";

/// Environment variable that replaces the whole config directory
pub const CONFIG_HOME_ENV: &str = "KEYDISPATCH_CONFIG_HOME";

/// File name of the user bindings file inside the config directory
pub const BINDINGS_FILE: &str = "bindings.json";

/// Base config directory for keydispatch
///
/// - If KEYDISPATCH_CONFIG_HOME is set: that directory, as is
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/keydispatch`
///   - Else: `~/.config/keydispatch`
///
/// Windows:
///   - `%APPDATA%\keydispatch`
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_HOME_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/keydispatch/bindings.json`
pub fn bindings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(BINDINGS_FILE))
}

/// `~/.config/keydispatch/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide; keep every env-dependent
    // assertion in this one test.
    #[test]
    fn test_config_home_override() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var(CONFIG_HOME_ENV, dir.path());

        assert_eq!(config_dir().as_deref(), Some(dir.path()));
        assert_eq!(bindings_file(), Some(dir.path().join("bindings.json")));
        assert_eq!(logs_dir(), Some(dir.path().join("logs")));

        let logs = ensure_logs_dir().unwrap();
        assert!(logs.is_dir());

        env::remove_var(CONFIG_HOME_ENV);
    }
}
