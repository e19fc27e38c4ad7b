use okha_theme::palette::{BASE_SEMANTIC, FOREST, OCEAN, SEPIA};
use okha_theme::{registry, ColorScheme, ThemeVariable, ThemeVariant};
use pretty_assertions::assert_eq;

#[test]
fn every_pair_defines_every_variable() {
    for scheme in ColorScheme::all() {
        for variant in ThemeVariant::all() {
            let vars = registry::resolve(*scheme, *variant);
            let mut count = 0;
            for (var, value) in vars.iter() {
                assert!(
                    !value.trim().is_empty(),
                    "scheme={scheme} variant={variant} var={var} is empty"
                );
                count += 1;
            }
            assert_eq!(count, ThemeVariable::COUNT);
        }
    }
}

#[test]
fn resolve_is_deterministic() {
    for (scheme, variant, vars) in registry::all() {
        assert_eq!(registry::resolve(scheme, variant), vars);
        assert_eq!(registry::resolve(scheme, variant), registry::resolve(scheme, variant));
    }
}

#[test]
fn unrecognized_variant_resolves_to_base() {
    for scheme in ColorScheme::all() {
        assert_eq!(
            registry::resolve_named(*scheme, "lavender"),
            registry::resolve(*scheme, ThemeVariant::Base)
        );
        assert_eq!(
            registry::resolve_named(*scheme, ""),
            registry::resolve(*scheme, ThemeVariant::Base)
        );
        assert_eq!(
            registry::resolve_named(*scheme, "ocean"),
            registry::resolve(*scheme, ThemeVariant::Ocean)
        );
    }
}

#[test]
fn all_lists_eight_distinct_tables() {
    let tables = registry::all();
    assert_eq!(tables.len(), 8);
    for (i, (_, _, a)) in tables.iter().enumerate() {
        for (_, _, b) in tables.iter().skip(i + 1) {
            assert_ne!(a.primary_color, b.primary_color);
        }
    }
}

#[test]
fn light_and_dark_primary_differ_per_variant() {
    for variant in ThemeVariant::all() {
        let light = registry::resolve(ColorScheme::Light, *variant);
        let dark = registry::resolve(ColorScheme::Dark, *variant);
        assert_ne!(
            light.get(ThemeVariable::PrimaryColor),
            dark.get(ThemeVariable::PrimaryColor),
            "variant {variant:?} should have distinct light/dark primary colors"
        );
    }
}

#[test]
fn sepia_dark_uses_the_sepia_ramp() {
    let vars = registry::resolve(ColorScheme::Dark, ThemeVariant::Sepia);
    assert_eq!(vars.get(ThemeVariable::PrimaryColor), "#A1887F");
    assert_eq!(vars.get(ThemeVariable::PrimaryColor), SEPIA.primary.s300);
    assert_eq!(vars.get(ThemeVariable::BgColor), "#1C1410");
    assert_eq!(vars.get(ThemeVariable::TextColor), "rgba(255, 255, 255, 0.87)");
}

#[test]
fn semantic_colors_mix_variant_and_shared_palettes() {
    // Sepia: own warning, shared success/error/info
    let sepia = registry::resolve(ColorScheme::Light, ThemeVariant::Sepia);
    assert_eq!(sepia.get(ThemeVariable::WarningColor), SEPIA.secondary.s700);
    assert_eq!(sepia.get(ThemeVariable::SuccessColor), BASE_SEMANTIC.success);
    assert_eq!(sepia.get(ThemeVariable::InfoColor), BASE_SEMANTIC.info);

    // Forest: own success and info, shared warning/error
    let forest = registry::resolve(ColorScheme::Light, ThemeVariant::Forest);
    assert_eq!(forest.get(ThemeVariable::SuccessColor), FOREST.primary.s800);
    assert_eq!(forest.get(ThemeVariable::InfoBg), FOREST.secondary.s50);
    assert_eq!(forest.get(ThemeVariable::WarningColor), BASE_SEMANTIC.warning);

    // Ocean: own info only
    let ocean = registry::resolve(ColorScheme::Dark, ThemeVariant::Ocean);
    assert_eq!(ocean.get(ThemeVariable::InfoColor), OCEAN.secondary.s300);
    assert_eq!(ocean.get(ThemeVariable::SuccessColor), BASE_SEMANTIC.success_light);
    assert_eq!(ocean.get(ThemeVariable::ErrorBg), BASE_SEMANTIC.error_dark_bg);

    // Base dark: shared light foregrounds on dark backgrounds
    let base = registry::resolve(ColorScheme::Dark, ThemeVariant::Base);
    assert_eq!(base.get(ThemeVariable::WarningColor), BASE_SEMANTIC.warning_light);
    assert_eq!(base.get(ThemeVariable::WarningBg), BASE_SEMANTIC.warning_dark_bg);
}

#[test]
fn dark_tables_share_text_alphas() {
    for variant in ThemeVariant::all() {
        let vars = registry::resolve(ColorScheme::Dark, *variant);
        assert_eq!(vars.get(ThemeVariable::TextMuted), "rgba(255, 255, 255, 0.6)");
        assert_eq!(vars.get(ThemeVariable::TextDisabled), "rgba(255, 255, 255, 0.38)");
        assert_eq!(
            vars.get(ThemeVariable::ReadTheDocsColor),
            vars.get(ThemeVariable::TextMuted)
        );
        assert_eq!(
            vars.get(ThemeVariable::ButtonBg),
            vars.get(ThemeVariable::BgTertiary)
        );
    }
}
