//! Domain error types for iconpick
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for picker configuration loading and validation
//! - `IconPickError` as the top-level error type

use thiserror::Error;

/// Top-level error type for iconpick
#[derive(Debug, Error)]
pub enum IconPickError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to picker configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Invalid page size: {rows} rows x {columns} columns leaves no room for icons (both must be at least 1)"
    )]
    InvalidPageSize { rows: u16, columns: u16 },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Failed to read config file: {0}")]
    Read(String),
}

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
