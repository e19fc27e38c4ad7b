//! Theme configuration file handling (`okha.toml`)
//!
//! ```toml
//! [theme]
//! default = "system"
//! variant = "forest"
//!
//! [theme.custom-variables]
//! primary-color = "#FF5500"
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::controller::ThemeOptions;
use crate::error::Result;
use crate::theme::{ThemePreference, ThemeVariant};
use crate::tokens::VariableOverrides;

/// Default configuration file name
pub const CONFIG_FILE: &str = "okha.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub theme: ThemeSection,
}

/// `[theme]` table
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeSection {
    /// light | dark | system, case-insensitive
    #[serde(default, deserialize_with = "preference_from_str")]
    pub default: ThemePreference,
    /// Unrecognized names fall back to `base`
    #[serde(default, deserialize_with = "variant_or_base")]
    pub variant: ThemeVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_variables: Option<VariableOverrides>,
}

fn preference_from_str<'de, D>(deserializer: D) -> std::result::Result<ThemePreference, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    id.parse().map_err(D::Error::custom)
}

fn variant_or_base<'de, D>(deserializer: D) -> std::result::Result<ThemeVariant, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    Ok(ThemeVariant::from_id_or_base(&id))
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a file, or from `okha.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };
        tracing::debug!("loading theme config from {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        Self::from_toml_str(&content)
    }

    /// Mount options described by this configuration
    pub fn options(&self) -> ThemeOptions {
        self.clone().into()
    }
}

impl From<ThemeConfig> for ThemeOptions {
    fn from(config: ThemeConfig) -> Self {
        ThemeOptions {
            default_theme: config.theme.default,
            default_variant: config.theme.variant,
            custom_variables: config.theme.custom_variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::tokens::ThemeVariable;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config.options(), ThemeOptions::default());
        assert_eq!(config.theme.default, ThemePreference::System);
        assert_eq!(config.theme.variant, ThemeVariant::Base);
    }

    #[test]
    fn parses_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [theme]
            default = "dark"
            variant = "forest"

            [theme.custom-variables]
            primary-color = "#FF5500"
            "--bg-color" = "#000000"
            "##,
        )
        .unwrap();

        let expected = ThemeOptions::new()
            .theme(ThemePreference::Dark)
            .variant(ThemeVariant::Forest)
            .custom_variables(
                VariableOverrides::new()
                    .with(ThemeVariable::PrimaryColor, "#FF5500")
                    .with(ThemeVariable::BgColor, "#000000"),
            );
        assert_eq!(config.options(), expected);
        assert_eq!(ThemeOptions::from(config), expected);
    }

    #[test]
    fn unknown_variant_falls_back_to_base() {
        let config = ThemeConfig::from_toml_str("[theme]\nvariant = \"lavender\"\n").unwrap();
        assert_eq!(config.theme.variant, ThemeVariant::Base);
    }

    #[test]
    fn unknown_variable_is_rejected() {
        let err = ThemeConfig::from_toml_str(
            "[theme.custom-variables]\nprimary = \"#FF5500\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().contains("unknown theme variable"));
    }

    #[test]
    fn unknown_preference_is_rejected() {
        let err = ThemeConfig::from_toml_str("[theme]\ndefault = \"dim\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().contains("unknown theme preference"));
    }

    #[test]
    fn preference_is_case_insensitive_like_the_cli() {
        let config = ThemeConfig::from_toml_str("[theme]\ndefault = \"System\"\n").unwrap();
        assert_eq!(config.theme.default, ThemePreference::System);
        let config = ThemeConfig::from_toml_str("[theme]\ndefault = \"DARK\"\n").unwrap();
        assert_eq!(config.theme.default, ThemePreference::Dark);
    }

    #[test]
    fn load_reads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[theme]\ndefault = \"light\"\n").unwrap();

        let config = ThemeConfig::load(dir.path()).unwrap();
        assert_eq!(config.theme.default, ThemePreference::Light);
    }

    #[test]
    fn load_reads_a_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[theme]\nvariant = \"sepia\"\n").unwrap();

        let config = ThemeConfig::load(&path).unwrap();
        assert_eq!(config.theme.variant, ThemeVariant::Sepia);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ThemeConfig::load(Path::new("/nonexistent/okha.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
