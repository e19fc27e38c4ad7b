//! Static (scheme, variant) → variable set tables
//!
//! The registry is a literal lookup, not a generator: no color math happens
//! here. Each table is a `const` so resolving is a plain copy of borrowed
//! string literals.

use crate::palette::{BASE, BASE_SEMANTIC as SEM, FOREST, OCEAN, SEPIA};
use crate::theme::{ColorScheme, ThemeVariant};
use crate::tokens::VariableSet;
use std::borrow::Cow;

const fn v(value: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(value)
}

// Foreground alphas shared by every dark table
const DARK_TEXT: &str = "rgba(255, 255, 255, 0.87)";
const DARK_TEXT_MUTED: &str = "rgba(255, 255, 255, 0.6)";
const DARK_TEXT_DISABLED: &str = "rgba(255, 255, 255, 0.38)";

/// Resolve the full variable set for a concrete scheme and variant
pub fn resolve(scheme: ColorScheme, variant: ThemeVariant) -> VariableSet {
    match (scheme, variant) {
        (ColorScheme::Light, ThemeVariant::Base) => BASE_LIGHT,
        (ColorScheme::Light, ThemeVariant::Sepia) => SEPIA_LIGHT,
        (ColorScheme::Light, ThemeVariant::Forest) => FOREST_LIGHT,
        (ColorScheme::Light, ThemeVariant::Ocean) => OCEAN_LIGHT,
        (ColorScheme::Dark, ThemeVariant::Base) => BASE_DARK,
        (ColorScheme::Dark, ThemeVariant::Sepia) => SEPIA_DARK,
        (ColorScheme::Dark, ThemeVariant::Forest) => FOREST_DARK,
        (ColorScheme::Dark, ThemeVariant::Ocean) => OCEAN_DARK,
    }
}

/// Resolve by variant id; unrecognized ids use the base variant
pub fn resolve_named(scheme: ColorScheme, variant: &str) -> VariableSet {
    resolve(scheme, ThemeVariant::from_id_or_base(variant))
}

/// Every (scheme, variant) table, light schemes first
pub fn all() -> Vec<(ColorScheme, ThemeVariant, VariableSet)> {
    ColorScheme::all()
        .iter()
        .flat_map(|scheme| {
            ThemeVariant::all()
                .iter()
                .map(move |variant| (*scheme, *variant, resolve(*scheme, *variant)))
        })
        .collect()
}

// ========== Light ==========

pub const BASE_LIGHT: VariableSet = VariableSet {
    primary_color: v(BASE.primary.s600),
    primary_hover: v(BASE.primary.s700),
    primary_active: v(BASE.primary.s800),
    secondary_color: v(BASE.secondary.s500),
    secondary_hover: v(BASE.secondary.s600),
    secondary_active: v(BASE.secondary.s700),
    text_color: v(BASE.neutral.s900),
    text_muted: v(BASE.neutral.s600),
    text_disabled: v(BASE.neutral.s400),
    bg_color: v("#FFFFFF"),
    bg_secondary: v(BASE.neutral.s50),
    bg_tertiary: v(BASE.neutral.s100),
    button_bg: v(BASE.neutral.s100),
    read_the_docs_color: v(BASE.neutral.s600),
    border_color: v(BASE.neutral.s300),
    border_hover: v(BASE.neutral.s400),
    shadow_color: v("rgba(33, 33, 33, 0.1)"),
    success_color: v(SEM.success),
    success_bg: v(SEM.success_bg),
    warning_color: v(SEM.warning),
    warning_bg: v(SEM.warning_bg),
    error_color: v(SEM.error),
    error_bg: v(SEM.error_bg),
    info_color: v(SEM.info),
    info_bg: v(SEM.info_bg),
};

pub const SEPIA_LIGHT: VariableSet = VariableSet {
    primary_color: v(SEPIA.primary.s600),
    primary_hover: v(SEPIA.primary.s700),
    primary_active: v(SEPIA.primary.s800),
    secondary_color: v(SEPIA.secondary.s600),
    secondary_hover: v(SEPIA.secondary.s700),
    secondary_active: v(SEPIA.secondary.s800),
    text_color: v(SEPIA.neutral.s900),
    text_muted: v(SEPIA.neutral.s600),
    text_disabled: v(SEPIA.neutral.s400),
    bg_color: v("#FFF9F5"),
    bg_secondary: v(SEPIA.neutral.s50),
    bg_tertiary: v(SEPIA.neutral.s100),
    button_bg: v(SEPIA.neutral.s100),
    read_the_docs_color: v(SEPIA.neutral.s600),
    border_color: v(SEPIA.neutral.s300),
    border_hover: v(SEPIA.neutral.s400),
    shadow_color: v("rgba(62, 39, 35, 0.1)"),
    success_color: v(SEM.success),
    success_bg: v(SEM.success_bg),
    // Sepia warns in its own amber
    warning_color: v(SEPIA.secondary.s700),
    warning_bg: v(SEPIA.secondary.s50),
    error_color: v(SEM.error),
    error_bg: v(SEM.error_bg),
    info_color: v(SEM.info),
    info_bg: v(SEM.info_bg),
};

pub const FOREST_LIGHT: VariableSet = VariableSet {
    primary_color: v(FOREST.primary.s700),
    primary_hover: v(FOREST.primary.s800),
    primary_active: v(FOREST.primary.s900),
    secondary_color: v(FOREST.secondary.s600),
    secondary_hover: v(FOREST.secondary.s700),
    secondary_active: v(FOREST.secondary.s800),
    text_color: v(FOREST.neutral.s900),
    text_muted: v(FOREST.neutral.s600),
    text_disabled: v(FOREST.neutral.s400),
    bg_color: v("#FAFFF9"),
    bg_secondary: v(FOREST.neutral.s50),
    bg_tertiary: v(FOREST.neutral.s100),
    button_bg: v(FOREST.neutral.s100),
    read_the_docs_color: v(FOREST.neutral.s600),
    border_color: v(FOREST.neutral.s300),
    border_hover: v(FOREST.neutral.s400),
    shadow_color: v("rgba(28, 25, 23, 0.1)"),
    success_color: v(FOREST.primary.s800),
    success_bg: v(FOREST.primary.s50),
    warning_color: v(SEM.warning),
    warning_bg: v(SEM.warning_bg),
    error_color: v(SEM.error),
    error_bg: v(SEM.error_bg),
    info_color: v(FOREST.secondary.s700),
    info_bg: v(FOREST.secondary.s50),
};

pub const OCEAN_LIGHT: VariableSet = VariableSet {
    primary_color: v(OCEAN.primary.s700),
    primary_hover: v(OCEAN.primary.s800),
    primary_active: v(OCEAN.primary.s900),
    secondary_color: v(OCEAN.secondary.s600),
    secondary_hover: v(OCEAN.secondary.s700),
    secondary_active: v(OCEAN.secondary.s800),
    text_color: v(OCEAN.neutral.s900),
    text_muted: v(OCEAN.neutral.s600),
    text_disabled: v(OCEAN.neutral.s400),
    bg_color: v("#F8FCFF"),
    bg_secondary: v(OCEAN.neutral.s50),
    bg_tertiary: v(OCEAN.neutral.s100),
    button_bg: v(OCEAN.neutral.s100),
    read_the_docs_color: v(OCEAN.neutral.s600),
    border_color: v(OCEAN.neutral.s300),
    border_hover: v(OCEAN.neutral.s400),
    shadow_color: v("rgba(24, 24, 27, 0.1)"),
    success_color: v(SEM.success),
    success_bg: v(SEM.success_bg),
    warning_color: v(SEM.warning),
    warning_bg: v(SEM.warning_bg),
    error_color: v(SEM.error),
    error_bg: v(SEM.error_bg),
    info_color: v(OCEAN.secondary.s700),
    info_bg: v(OCEAN.secondary.s50),
};

// ========== Dark ==========

pub const BASE_DARK: VariableSet = VariableSet {
    primary_color: v(BASE.primary.s400),
    primary_hover: v(BASE.primary.s300),
    primary_active: v(BASE.primary.s200),
    secondary_color: v(BASE.secondary.s400),
    secondary_hover: v(BASE.secondary.s300),
    secondary_active: v(BASE.secondary.s200),
    text_color: v(DARK_TEXT),
    text_muted: v(DARK_TEXT_MUTED),
    text_disabled: v(DARK_TEXT_DISABLED),
    bg_color: v("#1A1A1A"),
    bg_secondary: v("#242424"),
    bg_tertiary: v("#2E2E2E"),
    button_bg: v("#2E2E2E"),
    read_the_docs_color: v(DARK_TEXT_MUTED),
    border_color: v("#404040"),
    border_hover: v("#505050"),
    shadow_color: v("rgba(0, 0, 0, 0.3)"),
    success_color: v(SEM.success_light),
    success_bg: v(SEM.success_dark_bg),
    warning_color: v(SEM.warning_light),
    warning_bg: v(SEM.warning_dark_bg),
    error_color: v(SEM.error_light),
    error_bg: v(SEM.error_dark_bg),
    info_color: v(SEM.info_light),
    info_bg: v(SEM.info_dark_bg),
};

pub const SEPIA_DARK: VariableSet = VariableSet {
    primary_color: v(SEPIA.primary.s300),
    primary_hover: v(SEPIA.primary.s200),
    primary_active: v(SEPIA.primary.s100),
    secondary_color: v(SEPIA.secondary.s400),
    secondary_hover: v(SEPIA.secondary.s300),
    secondary_active: v(SEPIA.secondary.s200),
    text_color: v(DARK_TEXT),
    text_muted: v(DARK_TEXT_MUTED),
    text_disabled: v(DARK_TEXT_DISABLED),
    bg_color: v("#1C1410"),
    bg_secondary: v("#26201A"),
    bg_tertiary: v("#302824"),
    button_bg: v("#302824"),
    read_the_docs_color: v(DARK_TEXT_MUTED),
    border_color: v("#4A4239"),
    border_hover: v("#5A524A"),
    shadow_color: v("rgba(0, 0, 0, 0.4)"),
    success_color: v(SEM.success_light),
    success_bg: v(SEM.success_dark_bg),
    warning_color: v(SEPIA.secondary.s300),
    warning_bg: v(SEPIA.secondary.s900),
    error_color: v(SEM.error_light),
    error_bg: v(SEM.error_dark_bg),
    info_color: v(SEM.info_light),
    info_bg: v(SEM.info_dark_bg),
};

pub const FOREST_DARK: VariableSet = VariableSet {
    primary_color: v(FOREST.primary.s400),
    primary_hover: v(FOREST.primary.s300),
    primary_active: v(FOREST.primary.s200),
    secondary_color: v(FOREST.secondary.s400),
    secondary_hover: v(FOREST.secondary.s300),
    secondary_active: v(FOREST.secondary.s200),
    text_color: v(DARK_TEXT),
    text_muted: v(DARK_TEXT_MUTED),
    text_disabled: v(DARK_TEXT_DISABLED),
    bg_color: v("#131613"),
    bg_secondary: v("#1D221D"),
    bg_tertiary: v("#272E27"),
    button_bg: v("#272E27"),
    read_the_docs_color: v(DARK_TEXT_MUTED),
    border_color: v("#3D4A3D"),
    border_hover: v("#4D5A4D"),
    shadow_color: v("rgba(0, 0, 0, 0.4)"),
    success_color: v(FOREST.primary.s300),
    success_bg: v(FOREST.primary.s900),
    warning_color: v(SEM.warning_light),
    warning_bg: v(SEM.warning_dark_bg),
    error_color: v(SEM.error_light),
    error_bg: v(SEM.error_dark_bg),
    info_color: v(FOREST.secondary.s300),
    info_bg: v(FOREST.secondary.s900),
};

pub const OCEAN_DARK: VariableSet = VariableSet {
    primary_color: v(OCEAN.primary.s300),
    primary_hover: v(OCEAN.primary.s200),
    primary_active: v(OCEAN.primary.s100),
    secondary_color: v(OCEAN.secondary.s400),
    secondary_hover: v(OCEAN.secondary.s300),
    secondary_active: v(OCEAN.secondary.s200),
    text_color: v(DARK_TEXT),
    text_muted: v(DARK_TEXT_MUTED),
    text_disabled: v(DARK_TEXT_DISABLED),
    bg_color: v("#0D1117"),
    bg_secondary: v("#161B22"),
    bg_tertiary: v("#21262D"),
    button_bg: v("#21262D"),
    read_the_docs_color: v(DARK_TEXT_MUTED),
    border_color: v("#30363D"),
    border_hover: v("#484F58"),
    shadow_color: v("rgba(0, 0, 0, 0.4)"),
    success_color: v(SEM.success_light),
    success_bg: v(SEM.success_dark_bg),
    warning_color: v(SEM.warning_light),
    warning_bg: v(SEM.warning_dark_bg),
    error_color: v(SEM.error_light),
    error_bg: v(SEM.error_dark_bg),
    info_color: v(OCEAN.secondary.s300),
    info_bg: v(OCEAN.secondary.s900),
};
