//! Theme axes: requested preference, resolved color scheme, and color variant

use crate::error::ThemeError;
use crate::palette::{self, VariantPalette};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Concrete light/dark mode after `System` has been resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Value written to the `data-theme` attribute
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Map a `prefers-color-scheme: dark` query result to a scheme
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        const SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];
        &SCHEMES
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownPreference(other.to_string())),
        }
    }
}

/// Mode requested by the user or caller.
///
/// `System` follows the operating system's color-scheme preference and is
/// resolved to a [`ColorScheme`] every time it is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub fn all() -> &'static [ThemePreference] {
        const PREFERENCES: [ThemePreference; 3] = [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ];
        &PREFERENCES
    }

    /// Whether this preference tracks the operating system
    pub fn follows_system(self) -> bool {
        matches!(self, Self::System)
    }

    /// Resolve against the operating system's current scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system,
        }
    }

    /// Next preference in the switcher cycle: light → dark → system → light
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::UnknownPreference(other.to_string())),
        }
    }
}

/// Color family, orthogonal to the light/dark axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Warm ochre and terracotta (the original Okha palette)
    #[default]
    Base,
    /// Vintage brown and amber
    Sepia,
    /// Natural greens
    Forest,
    /// Cyan and blue
    Ocean,
}

impl ThemeVariant {
    /// Stable id, also the value written to `data-variant`
    pub fn id(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Sepia => "sepia",
            Self::Forest => "forest",
            Self::Ocean => "ocean",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Sepia => "Sepia",
            Self::Forest => "Forest",
            Self::Ocean => "Ocean",
        }
    }

    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 4] = [
            ThemeVariant::Base,
            ThemeVariant::Sepia,
            ThemeVariant::Forest,
            ThemeVariant::Ocean,
        ];
        &VARIANTS
    }

    /// Raw color ramps backing this variant
    pub fn palette(self) -> &'static VariantPalette {
        match self {
            Self::Base => &palette::BASE,
            Self::Sepia => &palette::SEPIA,
            Self::Forest => &palette::FOREST,
            Self::Ocean => &palette::OCEAN,
        }
    }

    /// Parse a variant id, falling back to [`ThemeVariant::Base`] for
    /// anything unrecognized.
    pub fn from_id_or_base(id: &str) -> Self {
        match id.parse() {
            Ok(variant) => variant,
            Err(_) => {
                tracing::warn!("unknown theme variant {:?}, falling back to base", id);
                Self::Base
            }
        }
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            // Former name of the base palette
            "okha" => Ok(Self::Base),
            "sepia" => Ok(Self::Sepia),
            "forest" => Ok(Self::Forest),
            "ocean" => Ok(Self::Ocean),
            other => Err(ThemeError::UnknownVariant(other.to_string())),
        }
    }
}
