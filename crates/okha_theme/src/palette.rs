//! Raw color ramps for each variant
//!
//! The base palette is the classic Okha (ochre) set: earthy, warm tones.
//! Sepia, forest and ocean supply their own primary/secondary/neutral ramps
//! and borrow semantic colors from [`BASE_SEMANTIC`] where they don't
//! define their own.

/// A 50..900 shade ramp for one hue family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRamp {
    pub s50: &'static str,
    pub s100: &'static str,
    pub s200: &'static str,
    pub s300: &'static str,
    pub s400: &'static str,
    pub s500: &'static str,
    pub s600: &'static str,
    pub s700: &'static str,
    pub s800: &'static str,
    pub s900: &'static str,
}

impl ColorRamp {
    /// Look up a shade by its numeric weight
    pub fn shade(&self, weight: u16) -> Option<&'static str> {
        match weight {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            _ => None,
        }
    }

    /// All shades, lightest first
    pub fn shades(&self) -> [(u16, &'static str); 10] {
        [
            (50, self.s50),
            (100, self.s100),
            (200, self.s200),
            (300, self.s300),
            (400, self.s400),
            (500, self.s500),
            (600, self.s600),
            (700, self.s700),
            (800, self.s800),
            (900, self.s900),
        ]
    }
}

/// Primary, secondary and neutral ramps for one variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantPalette {
    pub name: &'static str,
    pub primary: ColorRamp,
    pub secondary: ColorRamp,
    pub neutral: ColorRamp,
}

/// Shared success/warning/error/info colors.
///
/// `*_light` values are the foreground colors used on dark surfaces and
/// `*_dark_bg` the matching dark backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SemanticPalette {
    pub success: &'static str,
    pub success_bg: &'static str,
    pub success_light: &'static str,
    pub success_dark_bg: &'static str,

    pub warning: &'static str,
    pub warning_bg: &'static str,
    pub warning_light: &'static str,
    pub warning_dark_bg: &'static str,

    pub error: &'static str,
    pub error_bg: &'static str,
    pub error_light: &'static str,
    pub error_dark_bg: &'static str,

    pub info: &'static str,
    pub info_bg: &'static str,
    pub info_light: &'static str,
    pub info_dark_bg: &'static str,
}

/// Base (Okha) palette: ochre primary, terracotta secondary, warm grays
pub const BASE: VariantPalette = VariantPalette {
    name: "Base",
    // Warm ochre/amber
    primary: ColorRamp {
        s50: "#FFF8E1",
        s100: "#FFECB3",
        s200: "#FFE082",
        s300: "#FFD54F",
        s400: "#FFCA28",
        s500: "#FFC107",
        s600: "#FFB300",
        s700: "#FFA000",
        s800: "#FF8F00",
        s900: "#FF6F00",
    },
    // Terracotta / burnt sienna
    secondary: ColorRamp {
        s50: "#FBE9E7",
        s100: "#FFCCBC",
        s200: "#FFAB91",
        s300: "#FF8A65",
        s400: "#FF7043",
        s500: "#FF5722",
        s600: "#F4511E",
        s700: "#E64A19",
        s800: "#D84315",
        s900: "#BF360C",
    },
    neutral: ColorRamp {
        s50: "#FAFAFA",
        s100: "#F5F5F5",
        s200: "#EEEEEE",
        s300: "#E0E0E0",
        s400: "#BDBDBD",
        s500: "#9E9E9E",
        s600: "#757575",
        s700: "#616161",
        s800: "#424242",
        s900: "#212121",
    },
};

/// Semantic colors shared across variants
pub const BASE_SEMANTIC: SemanticPalette = SemanticPalette {
    success: "#2E7D32",
    success_bg: "#E8F5E9",
    success_light: "#66BB6A",
    success_dark_bg: "#1B5E20",

    warning: "#F57C00",
    warning_bg: "#FFF3E0",
    warning_light: "#FFA726",
    warning_dark_bg: "#E65100",

    error: "#C62828",
    error_bg: "#FFEBEE",
    error_light: "#EF5350",
    error_dark_bg: "#B71C1C",

    info: "#1565C0",
    info_bg: "#E3F2FD",
    info_light: "#42A5F5",
    info_dark_bg: "#0D47A1",
};

/// Sepia: vintage browns with a warm amber secondary
pub const SEPIA: VariantPalette = VariantPalette {
    name: "Sepia",
    primary: ColorRamp {
        s50: "#EFEBE9",
        s100: "#D7CCC8",
        s200: "#BCAAA4",
        s300: "#A1887F",
        s400: "#8D6E63",
        s500: "#795548",
        s600: "#6D4C41",
        s700: "#5D4037",
        s800: "#4E342E",
        s900: "#3E2723",
    },
    secondary: ColorRamp {
        s50: "#FFF3E0",
        s100: "#FFE0B2",
        s200: "#FFCC80",
        s300: "#FFB74D",
        s400: "#FFA726",
        s500: "#FF9800",
        s600: "#FB8C00",
        s700: "#F57C00",
        s800: "#EF6C00",
        s900: "#E65100",
    },
    neutral: ColorRamp {
        s50: "#F5F5F5",
        s100: "#EFEFEF",
        s200: "#E8E8E8",
        s300: "#D6D6D6",
        s400: "#B8B8B8",
        s500: "#9A9A9A",
        s600: "#707070",
        s700: "#5A5A5A",
        s800: "#3D3D3D",
        s900: "#1F1F1F",
    },
};

/// Forest: canopy greens with a light-green secondary and stone neutrals
pub const FOREST: VariantPalette = VariantPalette {
    name: "Forest",
    primary: ColorRamp {
        s50: "#E8F5E9",
        s100: "#C8E6C9",
        s200: "#A5D6A7",
        s300: "#81C784",
        s400: "#66BB6A",
        s500: "#4CAF50",
        s600: "#43A047",
        s700: "#388E3C",
        s800: "#2E7D32",
        s900: "#1B5E20",
    },
    secondary: ColorRamp {
        s50: "#F1F8E9",
        s100: "#DCEDC8",
        s200: "#C5E1A5",
        s300: "#AED581",
        s400: "#9CCC65",
        s500: "#8BC34A",
        s600: "#7CB342",
        s700: "#689F38",
        s800: "#558B2F",
        s900: "#33691E",
    },
    neutral: ColorRamp {
        s50: "#FAFAF9",
        s100: "#F5F5F4",
        s200: "#E7E5E4",
        s300: "#D6D3D1",
        s400: "#A8A29E",
        s500: "#78716C",
        s600: "#57534E",
        s700: "#44403C",
        s800: "#292524",
        s900: "#1C1917",
    },
};

/// Ocean: cyan primary, blue secondary, zinc neutrals
pub const OCEAN: VariantPalette = VariantPalette {
    name: "Ocean",
    primary: ColorRamp {
        s50: "#E0F7FA",
        s100: "#B2EBF2",
        s200: "#80DEEA",
        s300: "#4DD0E1",
        s400: "#26C6DA",
        s500: "#00BCD4",
        s600: "#00ACC1",
        s700: "#0097A7",
        s800: "#00838F",
        s900: "#006064",
    },
    secondary: ColorRamp {
        s50: "#E3F2FD",
        s100: "#BBDEFB",
        s200: "#90CAF9",
        s300: "#64B5F6",
        s400: "#42A5F5",
        s500: "#2196F3",
        s600: "#1E88E5",
        s700: "#1976D2",
        s800: "#1565C0",
        s900: "#0D47A1",
    },
    neutral: ColorRamp {
        s50: "#FAFAFA",
        s100: "#F4F4F5",
        s200: "#E4E4E7",
        s300: "#D4D4D8",
        s400: "#A1A1AA",
        s500: "#71717A",
        s600: "#52525B",
        s700: "#3F3F46",
        s800: "#27272A",
        s900: "#18181B",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_lookup_matches_fields() {
        assert_eq!(SEPIA.primary.shade(300), Some("#A1887F"));
        assert_eq!(OCEAN.secondary.shade(900), Some("#0D47A1"));
        assert_eq!(BASE.neutral.shade(250), None);
    }

    #[test]
    fn every_ramp_has_ten_hex_shades() {
        for palette in [BASE, SEPIA, FOREST, OCEAN] {
            for ramp in [palette.primary, palette.secondary, palette.neutral] {
                for (weight, hex) in ramp.shades() {
                    assert!(
                        hex.starts_with('#') && hex.len() == 7,
                        "{} {weight}: {hex}",
                        palette.name
                    );
                }
            }
        }
    }
}
