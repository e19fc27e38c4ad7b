use anyhow::{anyhow, Context, Result};
use okha_theme::{
    css, detect_system_color_scheme, FixedColorScheme, MemoryStyleRoot, ThemeConfig,
    ThemeController, ThemeOptions, ThemeVariable, VariableOverrides, VariableSet,
};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use crate::Selection;

/// Parse a `key=value` override; the key may carry a leading `--`
pub fn parse_assignment(arg: &str) -> Result<(ThemeVariable, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {arg:?}"))?;
    let var: ThemeVariable = key.trim().parse()?;
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("empty value for {}", var.custom_property());
    }
    Ok((var, value.to_string()))
}

/// Mount options from the config file (if any) with command line flags on top
fn options(selection: &Selection) -> Result<ThemeOptions> {
    let mut options = match &selection.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?
            .options(),
        None => ThemeOptions::default(),
    };
    if let Some(theme) = selection.theme {
        options.default_theme = theme;
    }
    if let Some(variant) = selection.variant {
        options.default_variant = variant;
    }
    Ok(options)
}

/// Mount a headless controller for `selection` and hand its root to `f`
fn with_mounted<T>(
    selection: &Selection,
    f: impl FnOnce(&ThemeController, &MemoryStyleRoot) -> T,
) -> Result<T> {
    let options = options(selection)?;
    let scheme = selection
        .system
        .unwrap_or_else(detect_system_color_scheme);
    tracing::debug!("assuming {} system color scheme", scheme);

    let root = MemoryStyleRoot::shared();
    let controller =
        ThemeController::mount(options, root.clone(), Arc::new(FixedColorScheme(scheme)));

    if !selection.overrides.is_empty() {
        let overrides: VariableOverrides = selection.overrides.iter().cloned().collect();
        controller.handle().merge_custom_variables(&overrides);
    }

    let root = root
        .lock()
        .map_err(|_| anyhow!("style root lock poisoned"))?;
    Ok(f(&controller, &root))
}

/// `okha css`
pub fn css(selection: &Selection) -> Result<String> {
    with_mounted(selection, |_, root| root.to_css())
}

/// `okha stylesheet`
pub fn stylesheet() -> String {
    css::stylesheet()
}

/// `okha variables`
pub fn variables(selection: &Selection, json: bool) -> Result<String> {
    let vars = with_mounted(selection, |controller, _| controller.handle().variables())?;
    if json {
        let mut out = serde_json::to_string_pretty(&vars)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(table(&vars))
    }
}

fn table(vars: &VariableSet) -> String {
    let width = ThemeVariable::ALL
        .iter()
        .map(|var| var.css_name().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (var, value) in vars.iter() {
        let _ = writeln!(out, "{:<width$}  {}", var.css_name(), value);
    }
    out
}

/// `okha check`
pub fn check(path: &Path) -> Result<String> {
    let config = ThemeConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let overrides = config
        .theme
        .custom_variables
        .as_ref()
        .map_or(0, VariableOverrides::len);
    Ok(format!(
        "ok: theme={} variant={} custom-variables={}",
        config.theme.default, config.theme.variant, overrides
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use okha_theme::{ColorScheme, ThemePreference, ThemeVariant};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn selection(theme: ThemePreference, variant: ThemeVariant) -> Selection {
        Selection {
            theme: Some(theme),
            variant: Some(variant),
            ..Selection::default()
        }
    }

    #[test]
    fn parses_assignments() {
        assert_eq!(
            parse_assignment("primary-color=#FF5500").unwrap(),
            (ThemeVariable::PrimaryColor, "#FF5500".to_string())
        );
        assert_eq!(
            parse_assignment("--bg-color = #000").unwrap(),
            (ThemeVariable::BgColor, "#000".to_string())
        );
        assert!(parse_assignment("primary-color").is_err());
        assert!(parse_assignment("primary=#FFF").is_err());
        assert!(parse_assignment("primary-color=").is_err());
    }

    #[test]
    fn css_for_explicit_selection() {
        let out = css(&selection(ThemePreference::Dark, ThemeVariant::Sepia)).unwrap();
        assert!(out.starts_with(":root[data-theme=\"dark\"][data-variant=\"sepia\"] {\n"));
        assert!(out.contains("  --primary-color: #A1887F;\n"));
    }

    #[test]
    fn system_flag_decides_mode() {
        let mut sel = selection(ThemePreference::System, ThemeVariant::Ocean);
        sel.system = Some(ColorScheme::Dark);
        let out = css(&sel).unwrap();
        assert!(out.contains("[data-theme=\"dark\"]"));
        assert!(out.contains("  --primary-color: #4DD0E1;\n"));
    }

    #[test]
    fn set_overrides_one_variable() {
        let mut sel = selection(ThemePreference::Light, ThemeVariant::Base);
        sel.overrides = vec![(ThemeVariable::PrimaryColor, "#123456".to_string())];
        let out = css(&sel).unwrap();
        assert!(out.contains("  --primary-color: #123456;\n"));
        assert!(out.contains("  --bg-color: #FFFFFF;\n"));
    }

    #[test]
    fn variables_as_json() {
        let out = variables(&selection(ThemePreference::Light, ThemeVariant::Forest), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["primary-color"], "#388E3C");
        assert_eq!(value.as_object().unwrap().len(), ThemeVariable::COUNT);
    }

    #[test]
    fn variables_as_table() {
        let out = variables(&selection(ThemePreference::Light, ThemeVariant::Base), false).unwrap();
        assert_eq!(out.lines().count(), ThemeVariable::COUNT);
        assert!(out.lines().next().unwrap().starts_with("primary-color "));
    }

    #[test]
    fn stylesheet_covers_every_pair() {
        assert_eq!(stylesheet().matches(" {\n").count(), 8);
    }

    #[test]
    fn config_file_feeds_selection_and_flags_win() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("okha.toml"),
            "[theme]\ndefault = \"dark\"\nvariant = \"forest\"\n\n[theme.custom-variables]\nborder-color = \"#ABCDEF\"\n",
        )
        .unwrap();

        let sel = Selection {
            variant: Some(ThemeVariant::Ocean),
            config: Some(dir.path().to_path_buf()),
            ..Selection::default()
        };
        let out = css(&sel).unwrap();
        assert!(out.contains("[data-theme=\"dark\"][data-variant=\"ocean\"]"));
        assert!(out.contains("  --border-color: #ABCDEF;\n"));

        assert_eq!(
            check(dir.path()).unwrap(),
            "ok: theme=dark variant=forest custom-variables=1"
        );
    }

    #[test]
    fn check_reports_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("okha.toml"), "[theme]\ndefault = \"dim\"\n").unwrap();

        let err = check(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid theme configuration"));
    }
}
