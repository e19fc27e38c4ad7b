//! Theme variable tokens
//!
//! The variable set is closed: every palette defines every key, and every
//! published stylesheet carries every key as a `--<name>` custom property.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::VariableOverrides;

/// Theme variable keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ThemeVariable {
    // Brand colors
    PrimaryColor,
    PrimaryHover,
    PrimaryActive,
    SecondaryColor,
    SecondaryHover,
    SecondaryActive,

    // Text colors
    TextColor,
    TextMuted,
    TextDisabled,

    // Surface colors
    BgColor,
    BgSecondary,
    BgTertiary,
    ButtonBg,
    ReadTheDocsColor,

    // Borders and elevation
    BorderColor,
    BorderHover,
    ShadowColor,

    // Semantic colors
    SuccessColor,
    SuccessBg,
    WarningColor,
    WarningBg,
    ErrorColor,
    ErrorBg,
    InfoColor,
    InfoBg,
}

impl ThemeVariable {
    /// Number of keys in the closed set
    pub const COUNT: usize = 25;

    /// Every key, in publishing order
    pub const ALL: [ThemeVariable; Self::COUNT] = [
        Self::PrimaryColor,
        Self::PrimaryHover,
        Self::PrimaryActive,
        Self::SecondaryColor,
        Self::SecondaryHover,
        Self::SecondaryActive,
        Self::TextColor,
        Self::TextMuted,
        Self::TextDisabled,
        Self::BgColor,
        Self::BgSecondary,
        Self::BgTertiary,
        Self::ButtonBg,
        Self::ReadTheDocsColor,
        Self::BorderColor,
        Self::BorderHover,
        Self::ShadowColor,
        Self::SuccessColor,
        Self::SuccessBg,
        Self::WarningColor,
        Self::WarningBg,
        Self::ErrorColor,
        Self::ErrorBg,
        Self::InfoColor,
        Self::InfoBg,
    ];

    /// Variable name without the `--` prefix
    pub fn css_name(self) -> &'static str {
        match self {
            Self::PrimaryColor => "primary-color",
            Self::PrimaryHover => "primary-hover",
            Self::PrimaryActive => "primary-active",
            Self::SecondaryColor => "secondary-color",
            Self::SecondaryHover => "secondary-hover",
            Self::SecondaryActive => "secondary-active",
            Self::TextColor => "text-color",
            Self::TextMuted => "text-muted",
            Self::TextDisabled => "text-disabled",
            Self::BgColor => "bg-color",
            Self::BgSecondary => "bg-secondary",
            Self::BgTertiary => "bg-tertiary",
            Self::ButtonBg => "button-bg",
            Self::ReadTheDocsColor => "read-the-docs-color",
            Self::BorderColor => "border-color",
            Self::BorderHover => "border-hover",
            Self::ShadowColor => "shadow-color",
            Self::SuccessColor => "success-color",
            Self::SuccessBg => "success-bg",
            Self::WarningColor => "warning-color",
            Self::WarningBg => "warning-bg",
            Self::ErrorColor => "error-color",
            Self::ErrorBg => "error-bg",
            Self::InfoColor => "info-color",
            Self::InfoBg => "info-bg",
        }
    }

    /// Custom property name, e.g. `--primary-color`
    pub fn custom_property(self) -> String {
        format!("--{}", self.css_name())
    }
}

impl Display for ThemeVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for ThemeVariable {
    type Err = ThemeError;

    /// Accepts the bare name or the `--`-prefixed custom property name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("--").unwrap_or(name);
        Self::ALL
            .iter()
            .copied()
            .find(|var| var.css_name() == name)
            .ok_or_else(|| ThemeError::UnknownVariable(s.to_string()))
    }
}

/// Complete set of theme variables for one (scheme, variant) pair.
///
/// Values are opaque CSS color strings (hex codes or `rgba()` expressions).
/// Static tables borrow their literals; overrides are owned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariableSet {
    // Brand colors
    pub primary_color: Cow<'static, str>,
    pub primary_hover: Cow<'static, str>,
    pub primary_active: Cow<'static, str>,
    pub secondary_color: Cow<'static, str>,
    pub secondary_hover: Cow<'static, str>,
    pub secondary_active: Cow<'static, str>,

    // Text colors
    pub text_color: Cow<'static, str>,
    pub text_muted: Cow<'static, str>,
    pub text_disabled: Cow<'static, str>,

    // Surface colors
    pub bg_color: Cow<'static, str>,
    pub bg_secondary: Cow<'static, str>,
    pub bg_tertiary: Cow<'static, str>,
    pub button_bg: Cow<'static, str>,
    pub read_the_docs_color: Cow<'static, str>,

    // Borders and elevation
    pub border_color: Cow<'static, str>,
    pub border_hover: Cow<'static, str>,
    pub shadow_color: Cow<'static, str>,

    // Semantic colors
    pub success_color: Cow<'static, str>,
    pub success_bg: Cow<'static, str>,
    pub warning_color: Cow<'static, str>,
    pub warning_bg: Cow<'static, str>,
    pub error_color: Cow<'static, str>,
    pub error_bg: Cow<'static, str>,
    pub info_color: Cow<'static, str>,
    pub info_bg: Cow<'static, str>,
}

impl VariableSet {
    /// Get a variable value by key
    pub fn get(&self, var: ThemeVariable) -> &str {
        match var {
            ThemeVariable::PrimaryColor => &self.primary_color,
            ThemeVariable::PrimaryHover => &self.primary_hover,
            ThemeVariable::PrimaryActive => &self.primary_active,
            ThemeVariable::SecondaryColor => &self.secondary_color,
            ThemeVariable::SecondaryHover => &self.secondary_hover,
            ThemeVariable::SecondaryActive => &self.secondary_active,
            ThemeVariable::TextColor => &self.text_color,
            ThemeVariable::TextMuted => &self.text_muted,
            ThemeVariable::TextDisabled => &self.text_disabled,
            ThemeVariable::BgColor => &self.bg_color,
            ThemeVariable::BgSecondary => &self.bg_secondary,
            ThemeVariable::BgTertiary => &self.bg_tertiary,
            ThemeVariable::ButtonBg => &self.button_bg,
            ThemeVariable::ReadTheDocsColor => &self.read_the_docs_color,
            ThemeVariable::BorderColor => &self.border_color,
            ThemeVariable::BorderHover => &self.border_hover,
            ThemeVariable::ShadowColor => &self.shadow_color,
            ThemeVariable::SuccessColor => &self.success_color,
            ThemeVariable::SuccessBg => &self.success_bg,
            ThemeVariable::WarningColor => &self.warning_color,
            ThemeVariable::WarningBg => &self.warning_bg,
            ThemeVariable::ErrorColor => &self.error_color,
            ThemeVariable::ErrorBg => &self.error_bg,
            ThemeVariable::InfoColor => &self.info_color,
            ThemeVariable::InfoBg => &self.info_bg,
        }
    }

    fn slot_mut(&mut self, var: ThemeVariable) -> &mut Cow<'static, str> {
        match var {
            ThemeVariable::PrimaryColor => &mut self.primary_color,
            ThemeVariable::PrimaryHover => &mut self.primary_hover,
            ThemeVariable::PrimaryActive => &mut self.primary_active,
            ThemeVariable::SecondaryColor => &mut self.secondary_color,
            ThemeVariable::SecondaryHover => &mut self.secondary_hover,
            ThemeVariable::SecondaryActive => &mut self.secondary_active,
            ThemeVariable::TextColor => &mut self.text_color,
            ThemeVariable::TextMuted => &mut self.text_muted,
            ThemeVariable::TextDisabled => &mut self.text_disabled,
            ThemeVariable::BgColor => &mut self.bg_color,
            ThemeVariable::BgSecondary => &mut self.bg_secondary,
            ThemeVariable::BgTertiary => &mut self.bg_tertiary,
            ThemeVariable::ButtonBg => &mut self.button_bg,
            ThemeVariable::ReadTheDocsColor => &mut self.read_the_docs_color,
            ThemeVariable::BorderColor => &mut self.border_color,
            ThemeVariable::BorderHover => &mut self.border_hover,
            ThemeVariable::ShadowColor => &mut self.shadow_color,
            ThemeVariable::SuccessColor => &mut self.success_color,
            ThemeVariable::SuccessBg => &mut self.success_bg,
            ThemeVariable::WarningColor => &mut self.warning_color,
            ThemeVariable::WarningBg => &mut self.warning_bg,
            ThemeVariable::ErrorColor => &mut self.error_color,
            ThemeVariable::ErrorBg => &mut self.error_bg,
            ThemeVariable::InfoColor => &mut self.info_color,
            ThemeVariable::InfoBg => &mut self.info_bg,
        }
    }

    /// Replace a single value
    pub fn set(&mut self, var: ThemeVariable, value: impl Into<Cow<'static, str>>) {
        *self.slot_mut(var) = value.into();
    }

    /// Iterate all variables in publishing order
    pub fn iter(&self) -> impl Iterator<Item = (ThemeVariable, &str)> + '_ {
        ThemeVariable::ALL.iter().map(move |var| (*var, self.get(*var)))
    }

    /// Apply overrides in place; an override wins over the existing value
    pub fn apply(&mut self, overrides: &VariableOverrides) {
        for (var, value) in overrides.iter() {
            self.set(var, value.to_string());
        }
    }

    /// Copy of this set with overrides applied on top
    pub fn merged(&self, overrides: &VariableOverrides) -> Self {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use crate::theme::{ColorScheme, ThemeVariant};

    #[test]
    fn all_contains_every_key_once() {
        let mut names: Vec<&str> = ThemeVariable::ALL.iter().map(|v| v.css_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ThemeVariable::COUNT);
    }

    #[test]
    fn parses_bare_and_prefixed_names() {
        assert_eq!(
            "primary-color".parse::<ThemeVariable>().unwrap(),
            ThemeVariable::PrimaryColor
        );
        assert_eq!(
            "--read-the-docs-color".parse::<ThemeVariable>().unwrap(),
            ThemeVariable::ReadTheDocsColor
        );
        assert!("primary".parse::<ThemeVariable>().is_err());
    }

    #[test]
    fn serde_field_names_match_css_names() {
        let set = registry::resolve(ColorScheme::Light, ThemeVariant::Base);
        let value = serde_json::to_value(&set).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), ThemeVariable::COUNT);
        for var in ThemeVariable::ALL {
            assert_eq!(object[var.css_name()], set.get(var), "{var}");
        }
    }

    #[test]
    fn set_replaces_one_value() {
        let mut set = registry::resolve(ColorScheme::Dark, ThemeVariant::Forest);
        let before = set.clone();
        set.set(ThemeVariable::BorderHover, "#123456");
        assert_eq!(set.get(ThemeVariable::BorderHover), "#123456");
        for var in ThemeVariable::ALL {
            if var != ThemeVariable::BorderHover {
                assert_eq!(set.get(var), before.get(var));
            }
        }
    }
}
