//! Fixed mappings from non-mode token paths to canonical keys.

/// A non-mode token path and the key it feeds in both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMapping {
    /// Dotted token path.
    pub path: String,
    /// Canonical theme key.
    pub key: String,
}

impl StaticMapping {
    fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

const SPACING_STEPS: [&str; 11] = [
    "None", "XXS", "XS", "SNudge", "S", "MNudge", "M", "L", "XL", "XXL", "XXXL",
];

const CORNER_RADII: [(&str, &str); 6] = [
    ("None", "None"),
    ("Small", "Small"),
    ("Medium", "Medium"),
    ("Large", "Large"),
    ("X-Large", "XLarge"),
    ("Circular", "Circular"),
];

const STROKE_WIDTHS: [(&str, &str); 4] = [
    ("10", "Thin"),
    ("20", "Thick"),
    ("30", "Thicker"),
    ("40", "Thickest"),
];

const FONT_WEIGHTS: [&str; 3] = ["Regular", "Semibold", "Bold"];

const BASE_RAMP: [u32; 6] = [100, 200, 300, 400, 500, 600];
const HERO_RAMP: [u32; 4] = [700, 800, 900, 1000];

/// The full static table, in a fixed order.
pub fn static_mappings() -> Vec<StaticMapping> {
    let mut mappings = Vec::new();
    for axis in ["Horizontal", "Vertical"] {
        for step in SPACING_STEPS {
            mappings.push(StaticMapping::new(
                format!("Spacing.{axis}.{step}"),
                format!("spacing{axis}{step}"),
            ));
        }
    }
    for (segment, suffix) in CORNER_RADII {
        mappings.push(StaticMapping::new(
            format!("Corner radius.{segment}"),
            format!("borderRadius{suffix}"),
        ));
    }
    for (segment, suffix) in STROKE_WIDTHS {
        mappings.push(StaticMapping::new(
            format!("Stroke width.{segment}"),
            format!("strokeWidth{suffix}"),
        ));
    }
    mappings.push(StaticMapping::new("Typography.Font family.Base", "fontFamilyBase"));
    for weight in FONT_WEIGHTS {
        mappings.push(StaticMapping::new(
            format!("Typography.Weight.{weight}"),
            format!("fontWeight{weight}"),
        ));
    }
    for (segment, prefix) in [("Font size", "fontSize"), ("Line height", "lineHeight")] {
        for (ramp, name) in [(&BASE_RAMP[..], "Base"), (&HERO_RAMP[..], "Hero")] {
            for step in ramp {
                mappings.push(StaticMapping::new(
                    format!("Typography.{segment}.{step}"),
                    format!("{prefix}{name}{step}"),
                ));
            }
        }
    }
    mappings
}
