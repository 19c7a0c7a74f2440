//! Canned color schemes and font pairings.
//!
//! Presets only list the keys they change; applying one goes through
//! [`CustomizationDocument::merge_category`] so everything else is kept.

use crate::customization::{Category, CategoryValues, CustomizationDocument, LeafValue};
use tracing::debug;

/// A named partial update of one category
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub category: Category,
    pub values: &'static [(&'static str, &'static str)],
}

impl Preset {
    pub fn to_values(&self) -> CategoryValues {
        self.values
            .iter()
            .map(|(key, value)| (key.to_string(), LeafValue::from(*value)))
            .collect()
    }

    pub fn apply(&self, doc: &CustomizationDocument) -> CustomizationDocument {
        doc.merge_category(self.category, &self.to_values())
    }
}

pub const COLOR_PRESETS: &[Preset] = &[
    Preset {
        name: "default",
        category: Category::Colors,
        values: &[
            ("primary", "#3b82f6"),
            ("secondary", "#64748b"),
            ("accent", "#f59e0b"),
        ],
    },
    Preset {
        name: "ocean",
        category: Category::Colors,
        values: &[
            ("primary", "#0ea5e9"),
            ("secondary", "#0369a1"),
            ("accent", "#22d3ee"),
        ],
    },
    Preset {
        name: "forest",
        category: Category::Colors,
        values: &[
            ("primary", "#16a34a"),
            ("secondary", "#166534"),
            ("accent", "#a3e635"),
        ],
    },
    Preset {
        name: "sunset",
        category: Category::Colors,
        values: &[
            ("primary", "#f97316"),
            ("secondary", "#be123c"),
            ("accent", "#facc15"),
        ],
    },
    Preset {
        name: "midnight",
        category: Category::Colors,
        values: &[
            ("primary", "#6366f1"),
            ("secondary", "#1e293b"),
            ("accent", "#a855f7"),
            ("background", "#0f172a"),
            ("foreground", "#f8fafc"),
        ],
    },
    Preset {
        name: "monochrome",
        category: Category::Colors,
        values: &[
            ("primary", "#171717"),
            ("secondary", "#525252"),
            ("accent", "#a3a3a3"),
        ],
    },
];

pub const FONT_PRESETS: &[Preset] = &[
    Preset {
        name: "modern",
        category: Category::Typography,
        values: &[
            ("fontFamily", "Inter, sans-serif"),
            ("headingFont", "Inter, sans-serif"),
        ],
    },
    Preset {
        name: "classic",
        category: Category::Typography,
        values: &[
            ("fontFamily", "Georgia, serif"),
            ("headingFont", "Playfair Display, serif"),
        ],
    },
    Preset {
        name: "friendly",
        category: Category::Typography,
        values: &[
            ("fontFamily", "Nunito, sans-serif"),
            ("headingFont", "Poppins, sans-serif"),
        ],
    },
    Preset {
        name: "technical",
        category: Category::Typography,
        values: &[
            ("fontFamily", "IBM Plex Sans, sans-serif"),
            ("headingFont", "IBM Plex Mono, monospace"),
        ],
    },
];

/// Find a preset by name across all preset tables
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    COLOR_PRESETS
        .iter()
        .chain(FONT_PRESETS.iter())
        .find(|preset| preset.name == name)
}

/// Apply a preset by name. Unknown names leave the document unchanged.
pub fn apply_preset(doc: &CustomizationDocument, name: &str) -> CustomizationDocument {
    match find_preset(name) {
        Some(preset) => preset.apply(doc),
        None => {
            debug!(preset = %name, "Ignoring unknown preset");
            doc.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocean_keeps_background() {
        let doc = CustomizationDocument::reset();
        let next = apply_preset(&doc, "ocean");

        assert_eq!(next.get("colors.primary").and_then(|v| v.as_str()), Some("#0ea5e9"));
        assert_eq!(next.get("colors.background"), doc.get("colors.background"));
        assert_eq!(next.get("colors.foreground"), doc.get("colors.foreground"));
    }

    #[test]
    fn test_midnight_overrides_background() {
        let next = apply_preset(&CustomizationDocument::reset(), "midnight");
        assert_eq!(next.get("colors.background").and_then(|v| v.as_str()), Some("#0f172a"));
    }

    #[test]
    fn test_font_preset_touches_typography_only() {
        let doc = CustomizationDocument::reset();
        let next = apply_preset(&doc, "classic");

        assert_eq!(next.get("typography.fontFamily").and_then(|v| v.as_str()), Some("Georgia, serif"));
        assert_eq!(next.category(Category::Colors), doc.category(Category::Colors));
    }

    #[test]
    fn test_unknown_preset_is_no_op() {
        let doc = CustomizationDocument::reset();
        assert_eq!(apply_preset(&doc, "neon"), doc);
    }

    #[test]
    fn test_preset_names_are_unique() {
        let mut names: Vec<_> = COLOR_PRESETS.iter().chain(FONT_PRESETS).map(|p| p.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
