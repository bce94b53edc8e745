//! Command-line interface.
//!
//! With no subcommand the greeting screen is launched. Global flags override
//! the config file for a single run without rewriting it.

mod completions;
mod preview;

use crate::config::Config;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Asks for your name and says hello
#[derive(Parser, Debug)]
#[command(name = "welcome-hello", version, about = "Asks for your name and says hello", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of ~/.config/welcome-hello/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Locale for labels, e.g. en or es-MX
    #[arg(long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    /// Color theme: dark, light or nocolor
    #[arg(long, global = true, value_name = "NAME")]
    pub theme: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the localized hello template for a sample name
    Preview {
        /// Name to greet
        #[arg(default_value = "Antonio")]
        name: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from the environment if omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file location, honoring `--config`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Load the config file (creating it with defaults if missing) and apply
    /// the command-line overrides.
    pub fn load_config(&self) -> Result<(Config, PathBuf)> {
        let config_path = self.config_path();
        let config = Config::load_or_create(&config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
        Ok((self.apply_overrides(config), config_path))
    }

    /// Like [`Cli::load_config`], but never writes to disk.
    pub fn peek_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let config = Config::load_or_default(&config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
        Ok(self.apply_overrides(config))
    }

    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if no_color_requested(self.no_colors, std::env::var_os("NO_COLOR")) {
            config.theme = ThemeType::NoColor.name().to_string();
        }
        config
    }

    /// Run a non-interactive subcommand.
    ///
    /// Returns `Ok(false)` when no subcommand was given and the TUI should
    /// start instead.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Preview { name }) => {
                let config = self.peek_config()?;
                preview::run(&config, name);
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// `--no-colors`, or `NO_COLOR` set to any non-empty value
fn no_color_requested(flag: bool, env: Option<OsString>) -> bool {
    flag || env.is_some_and(|v| !v.is_empty())
}
