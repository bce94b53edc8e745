use crate::keymap::Keymap;
use crate::strings::Locale;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale tag for the string table (default: en)
    #[serde(default = "default_locale")]
    pub locale: String,
    /// UI theme: dark, light or nocolor (default: dark)
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it doesn't exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from file, or use defaults without touching disk
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            Ok(Self::default())
        }
    }

    fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        if config.locale.trim().is_empty() {
            config.locale = default_locale();
        }
        if config.theme.trim().is_empty() {
            config.theme = default_theme();
        }

        Ok(config)
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Resolved locale of the string table
    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }

    /// Resolved theme; unknown names fall back to dark
    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeyBinding, KeymapPreset};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.theme_type(), ThemeType::Dark);
        assert_eq!(config.keymap.preset, KeymapPreset::Standard);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.locale, "en");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&config_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_load_or_default_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load_or_default(&config_path).unwrap();
        assert!(!config_path.exists());
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.locale = "es".to_string();
        config.theme = "light".to_string();
        config.keymap.preset = KeymapPreset::Emacs;
        config
            .keymap
            .overrides
            .push(KeyBinding::new("ctrl+s", Action::Confirm));
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.locale(), Locale::Spanish);
        assert_eq!(loaded.theme_type(), ThemeType::Light);
        assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);
        assert_eq!(loaded.keymap.overrides.len(), 1);
        assert_eq!(loaded.keymap.overrides[0].action, Action::Confirm);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"nocolor\"\n").unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.locale, "en");
        assert_eq!(loaded.theme_type(), ThemeType::NoColor);
        assert!(loaded.keymap.overrides.is_empty());
    }

    #[test]
    fn test_empty_values_fall_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "locale = \"\"\ntheme = \" \"\n").unwrap();

        let loaded = Config::load_or_default(&config_path).unwrap();
        assert_eq!(loaded.locale, "en");
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "locale = [unclosed").unwrap();

        let err = Config::load_or_create(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
