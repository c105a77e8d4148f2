use std::path::PathBuf;

/// Environment variable that relocates the config directory (used by tests and packagers)
pub const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path
///
/// Always `~/.config/portal` regardless of OS, unless `PORTAL_CONFIG_DIR` is set.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    get_home_dir().join(".config").join("portal")
}

/// Get the config file path (`<config dir>/config.toml`)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the session file path (`<config dir>/session.toml`)
pub fn get_session_path() -> PathBuf {
    get_config_dir().join("session.toml")
}

/// Get the directory log files are written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("portal")
}

/// Get the log file path (`<log dir>/portal.log`)
pub fn get_log_path() -> PathBuf {
    get_log_dir().join("portal.log")
}
