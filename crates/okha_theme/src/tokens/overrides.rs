//! Partial variable overrides applied on top of a resolved palette

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ThemeVariable;

/// Caller-supplied partial variable set.
///
/// Keys come from the same closed set as [`super::VariableSet`]; entries
/// present here replace the resolved value key by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableOverrides {
    values: BTreeMap<ThemeVariable, String>,
}

impl VariableOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, var: ThemeVariable, value: impl Into<String>) -> Self {
        self.insert(var, value);
        self
    }

    pub fn insert(&mut self, var: ThemeVariable, value: impl Into<String>) -> Option<String> {
        self.values.insert(var, value.into())
    }

    pub fn remove(&mut self, var: ThemeVariable) -> Option<String> {
        self.values.remove(&var)
    }

    pub fn get(&self, var: ThemeVariable) -> Option<&str> {
        self.values.get(&var).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeVariable, &str)> + '_ {
        self.values.iter().map(|(var, value)| (*var, value.as_str()))
    }

    /// Fold `other` into this map; keys in `other` win
    pub fn extend_from(&mut self, other: &VariableOverrides) {
        for (var, value) in other.iter() {
            self.values.insert(var, value.to_string());
        }
    }
}

impl<S: Into<String>> FromIterator<(ThemeVariable, S)> for VariableOverrides {
    fn from_iter<I: IntoIterator<Item = (ThemeVariable, S)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(var, value)| (var, value.into()))
                .collect(),
        }
    }
}

impl Serialize for VariableOverrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (var, value) in &self.values {
            map.serialize_entry(var.css_name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariableOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut values = BTreeMap::new();
        for (name, value) in raw {
            let var = name.parse::<ThemeVariable>().map_err(D::Error::custom)?;
            values.insert(var, value);
        }
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_css_names() {
        let overrides: VariableOverrides =
            serde_json::from_str(r##"{"primary-color": "#FF5500", "--bg-color": "#000"}"##)
                .unwrap();
        assert_eq!(overrides.get(ThemeVariable::PrimaryColor), Some("#FF5500"));
        assert_eq!(overrides.get(ThemeVariable::BgColor), Some("#000"));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn rejects_names_outside_the_closed_set() {
        let err = serde_json::from_str::<VariableOverrides>(r##"{"primary": "#FF5500"}"##)
            .unwrap_err();
        assert!(err.to_string().contains("unknown theme variable"));
    }

    #[test]
    fn extend_from_lets_later_values_win() {
        let mut first = VariableOverrides::new()
            .with(ThemeVariable::PrimaryColor, "#111111")
            .with(ThemeVariable::InfoBg, "#222222");
        let second = VariableOverrides::new().with(ThemeVariable::PrimaryColor, "#333333");
        first.extend_from(&second);
        assert_eq!(first.get(ThemeVariable::PrimaryColor), Some("#333333"));
        assert_eq!(first.get(ThemeVariable::InfoBg), Some("#222222"));
    }

    #[test]
    fn serializes_with_css_names() {
        let overrides = VariableOverrides::new().with(ThemeVariable::ErrorBg, "#FFEBEE");
        assert_eq!(
            serde_json::to_string(&overrides).unwrap(),
            r##"{"error-bg":"#FFEBEE"}"##
        );
    }
}
