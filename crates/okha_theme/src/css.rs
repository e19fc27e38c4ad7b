//! CSS text generation
//!
//! For hosts that ship a static stylesheet instead of (or in addition to)
//! publishing through a live [`StyleRoot`](crate::StyleRoot). The scoped
//! blocks key on the same `data-theme` / `data-variant` attributes the
//! controller writes, so a static sheet and a live controller agree.

use std::fmt::Write as _;

use crate::registry;
use crate::style_root::{THEME_ATTRIBUTE, VARIANT_ATTRIBUTE};
use crate::theme::{ColorScheme, ThemeVariant};
use crate::tokens::VariableSet;

/// `--name: value;` lines, one per variable, indented by two spaces
pub fn declarations(vars: &VariableSet) -> String {
    let mut out = String::new();
    for (var, value) in vars.iter() {
        let _ = writeln!(out, "  --{}: {};", var.css_name(), value);
    }
    out
}

/// A rule for an arbitrary selector
pub fn rule(selector: &str, vars: &VariableSet) -> String {
    format!("{selector} {{\n{}}}\n", declarations(vars))
}

/// `:root { ... }`
pub fn root_block(vars: &VariableSet) -> String {
    rule(":root", vars)
}

/// Attribute selector matching a published (scheme, variant) pair
pub fn selector(scheme: ColorScheme, variant: ThemeVariant) -> String {
    format!(
        "[{THEME_ATTRIBUTE}=\"{}\"][{VARIANT_ATTRIBUTE}=\"{}\"]",
        scheme.id(),
        variant.id()
    )
}

/// Rule scoped to a (scheme, variant) pair
pub fn scoped_block(scheme: ColorScheme, variant: ThemeVariant, vars: &VariableSet) -> String {
    rule(&selector(scheme, variant), vars)
}

/// Every registry table as scoped rules, light schemes first
pub fn stylesheet() -> String {
    registry::all()
        .iter()
        .map(|(scheme, variant, vars)| scoped_block(*scheme, *variant, vars))
        .collect::<Vec<_>>()
        .join("\n")
}
