//! Okha Theme Engine
//!
//! Resolves a theme preference and a color variant into CSS custom
//! properties, follows the operating system's light/dark setting, and
//! publishes the result to a style root that presentational components read
//! through plain CSS.
//!
//! # Overview
//!
//! - **Registry**: static `(scheme, variant) → VariableSet` tables
//! - **Controller**: preference/variant/override state, OS subscription,
//!   publishing
//! - **Scope**: `use_theme()` lookup for code running under a provider
//! - **CSS**: static stylesheet generation from the same tables
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use okha_theme::{
//!     ManualColorScheme, MemoryStyleRoot, ThemeController, ThemeOptions,
//!     ThemePreference, ThemeVariant,
//! };
//! use std::sync::Arc;
//!
//! let root = MemoryStyleRoot::shared();
//! let system = Arc::new(ManualColorScheme::default());
//! let controller = ThemeController::mount(
//!     ThemeOptions::new().theme(ThemePreference::System).variant(ThemeVariant::Forest),
//!     root.clone(),
//!     system.clone(),
//! );
//!
//! // OS switches to dark: variables are re-published without any call
//! system.set_dark(true);
//! assert_eq!(root.lock().unwrap().attribute("data-theme"), Some("dark"));
//! ```
//!
//! # Variables
//!
//! The published variable names form a closed set ([`ThemeVariable::ALL`]):
//! `--primary-color`, `--bg-secondary`, `--border-color`, `--success-bg`, and
//! so on. Every table defines every variable, so any component may reference
//! any of them whenever a controller is mounted.
//!
//! # Overrides
//!
//! ```rust,ignore
//! let theme = controller.handle();
//!
//! // Replace all overrides
//! theme.set_custom_variables(
//!     VariableOverrides::new().with(ThemeVariable::PrimaryColor, "#FF5500"),
//! );
//!
//! // Add to the existing ones
//! theme.merge_custom_variables(
//!     &VariableOverrides::new().with(ThemeVariable::BgColor, "#FFFDF8"),
//! );
//!
//! // Back to the plain palette
//! theme.clear_custom_variables();
//! ```

pub mod config;
pub mod controller;
pub mod css;
pub mod error;
pub mod listeners;
pub mod palette;
pub mod registry;
pub mod scope;
pub mod style_root;
pub mod system;
pub mod theme;
pub mod tokens;
pub mod watcher;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeHandle, ThemeOptions, ThemeSnapshot};
pub use error::{Result, ThemeError};
pub use listeners::Subscription;
pub use scope::{try_use_theme, use_theme, ScopeGuard};
pub use style_root::{MemoryStyleRoot, StyleRoot, THEME_ATTRIBUTE, VARIANT_ATTRIBUTE};
pub use system::{
    detect_system_color_scheme, FixedColorScheme, ManualColorScheme, SystemColorScheme,
};
pub use theme::{ColorScheme, ThemePreference, ThemeVariant};
pub use tokens::*;
pub use watcher::PollingColorScheme;
