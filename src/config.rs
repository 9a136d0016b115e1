//! Configuration file support for iconpick.
//!
//! Configuration is loaded from `~/.config/iconpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ICONPICK_ROWS`, `ICONPICK_COLUMNS`)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/iconpick/config.toml
//! rows_in_one_page = 3
//! columns_in_one_page = 8
//! icon_width = 7
//! icon_height = 3
//! picker_width = 80
//! ```
//!
//! All sizes are terminal cells. The popup is clamped to the terminal, so the
//! default picker size of 500x500 simply fills the available area.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_ROWS: u16 = 4;
pub const DEFAULT_COLUMNS: u16 = 6;
pub const DEFAULT_ICON_HEIGHT: u16 = 3;
pub const DEFAULT_ICON_WIDTH: u16 = 7;
pub const DEFAULT_PICKER_HEIGHT: u16 = 500;
pub const DEFAULT_PICKER_WIDTH: u16 = 500;

/// Layout inputs for one icon picker. Immutable once the picker is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub rows_in_one_page: u16,
    pub columns_in_one_page: u16,
    pub icon_height: u16,
    pub icon_width: u16,
    pub picker_height: u16,
    pub picker_width: u16,
}

impl PickerConfig {
    /// Create a config with the default popup size (500x500).
    pub fn new(rows_in_one_page: u16, columns_in_one_page: u16, icon_height: u16, icon_width: u16) -> Self {
        Self {
            rows_in_one_page,
            columns_in_one_page,
            icon_height,
            icon_width,
            picker_height: DEFAULT_PICKER_HEIGHT,
            picker_width: DEFAULT_PICKER_WIDTH,
        }
    }

    pub fn with_picker_size(mut self, height: u16, width: u16) -> Self {
        self.picker_height = height;
        self.picker_width = width;
        self
    }

    /// Number of icons shown on one page.
    pub fn page_size(&self) -> usize {
        self.rows_in_one_page as usize * self.columns_in_one_page as usize
    }

    /// Reject page sizes that would make pagination undefined.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size() == 0 {
            return Err(ConfigError::InvalidPageSize {
                rows: self.rows_in_one_page,
                columns: self.columns_in_one_page,
            });
        }
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_ICON_HEIGHT, DEFAULT_ICON_WIDTH)
    }
}

/// Main configuration structure, as read from the config file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rows_in_one_page: Option<u16>,
    pub columns_in_one_page: Option<u16>,
    pub icon_height: Option<u16>,
    pub icon_width: Option<u16>,
    pub picker_height: Option<u16>,
    pub picker_width: Option<u16>,
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub rows_in_one_page: Option<u16>,
    pub columns_in_one_page: Option<u16>,
    pub icon_height: Option<u16>,
    pub icon_width: Option<u16>,
    pub picker_height: Option<u16>,
    pub picker_width: Option<u16>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::read_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    fn read_from(path: &std::path::Path) -> ConfigResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("iconpick")
    }

    /// Apply `ICONPICK_ROWS` / `ICONPICK_COLUMNS` from the process environment.
    pub fn with_process_env(self) -> Self {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment values looked up through `env` over the file values.
    ///
    /// Unparsable values are ignored.
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str| env(key).and_then(|v| v.trim().parse::<u16>().ok());

        take(&mut self.rows_in_one_page, from_env("ICONPICK_ROWS"));
        take(&mut self.columns_in_one_page, from_env("ICONPICK_COLUMNS"));
        self
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over environment and config file values,
    /// so apply this last.
    pub fn with_overrides(mut self, cli: &CliOverrides) -> Self {
        take(&mut self.rows_in_one_page, cli.rows_in_one_page);
        take(&mut self.columns_in_one_page, cli.columns_in_one_page);
        take(&mut self.icon_height, cli.icon_height);
        take(&mut self.icon_width, cli.icon_width);
        take(&mut self.picker_height, cli.picker_height);
        take(&mut self.picker_width, cli.picker_width);
        self
    }

    /// Resolve the picker layout, filling anything still unset with defaults.
    pub fn picker_config(&self) -> PickerConfig {
        PickerConfig::new(
            self.rows_in_one_page.unwrap_or(DEFAULT_ROWS),
            self.columns_in_one_page.unwrap_or(DEFAULT_COLUMNS),
            self.icon_height.unwrap_or(DEFAULT_ICON_HEIGHT),
            self.icon_width.unwrap_or(DEFAULT_ICON_WIDTH),
        )
        .with_picker_size(
            self.picker_height.unwrap_or(DEFAULT_PICKER_HEIGHT),
            self.picker_width.unwrap_or(DEFAULT_PICKER_WIDTH),
        )
    }
}

/// Replace `slot` when a higher-precedence layer supplies a value.
fn take(slot: &mut Option<u16>, value: Option<u16>) {
    if value.is_some() {
        *slot = value;
    }
}
