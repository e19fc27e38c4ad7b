//! Theme error types

use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme interface looked up with no enclosing provider
    #[error("use_theme must be used within a ThemeProvider (no ThemeController scope is active)")]
    MissingProvider,

    /// Unrecognized light/dark/system name
    #[error("unknown theme preference: {0:?} (expected light, dark, or system)")]
    UnknownPreference(String),

    /// Unrecognized color variant name
    #[error("unknown theme variant: {0:?} (expected base, sepia, forest, or ocean)")]
    UnknownVariant(String),

    /// Name outside the closed set of theme variables
    #[error("unknown theme variable: {0:?}")]
    UnknownVariable(String),

    /// Malformed theme configuration
    #[error("invalid theme configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to read a configuration file
    #[error("failed to read theme configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
