use std::path::PathBuf;

/// Application directory name under the config and cache roots
pub const APP_DIR: &str = "welcome-hello";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/welcome-hello, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join(APP_DIR)
}

/// Get the config file path (always ~/.config/welcome-hello/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the log directory: the platform cache dir, else the home directory
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}
