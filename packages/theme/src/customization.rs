//! # Customization Store
//!
//! Theme customization document: a fixed set of categories, each holding a
//! flat map of scalar leaves addressed by dotted `category.key` paths.
//!
//! ## Defaults
//!
//! Every schema leaf has a default baked into [`defaults()`]. Reads never
//! fail for a schema path: a missing key resolves to its default. Writes
//! (`set`, `merge_category`) only ever add or replace keys, so a document
//! that starts from [`CustomizationDocument::reset`] keeps every key.
//!
//! ## Purity
//!
//! All editing operations take `&self` and return a new document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Top-level customization category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    BorderRadius,
    Shadows,
    Animation,
    Layout,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::BorderRadius,
        Category::Shadows,
        Category::Animation,
        Category::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::BorderRadius => "borderRadius",
            Category::Shadows => "shadows",
            Category::Animation => "animation",
            Category::Layout => "layout",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown customization category: {}", s))
    }
}

/// Scalar value stored at a leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeafValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl LeafValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LeafValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LeafValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LeafValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Parse a raw user-entered string, preferring bool, then number.
    /// `nan`, `inf` and overflowing literals stay text.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "true" => LeafValue::Bool(true),
            "false" => LeafValue::Bool(false),
            _ => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(LeafValue::Number)
                .unwrap_or_else(|| LeafValue::Text(raw.to_string())),
        }
    }

    /// Whether the value survives a JSON round trip. Non-finite numbers
    /// serialize as `null`, which no leaf can be read back from.
    pub fn is_storable(&self) -> bool {
        match self {
            LeafValue::Number(n) => n.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::Bool(b) => write!(f, "{}", b),
            LeafValue::Number(n) => write!(f, "{}", n),
            LeafValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for LeafValue {
    fn from(s: &str) -> Self {
        LeafValue::Text(s.to_string())
    }
}

impl From<String> for LeafValue {
    fn from(s: String) -> Self {
        LeafValue::Text(s)
    }
}

impl From<f64> for LeafValue {
    fn from(n: f64) -> Self {
        LeafValue::Number(n)
    }
}

impl From<i64> for LeafValue {
    fn from(n: i64) -> Self {
        LeafValue::Number(n as f64)
    }
}

impl From<bool> for LeafValue {
    fn from(b: bool) -> Self {
        LeafValue::Bool(b)
    }
}

/// Two-segment address of a single leaf (`colors.primary`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafPath {
    pub category: Category,
    pub key: String,
}

impl LeafPath {
    pub fn new(category: Category, key: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
        }
    }

    /// Parse a dotted path. Returns `None` unless the path has exactly two
    /// non-empty segments and the first names a known category.
    pub fn parse(path: &str) -> Option<Self> {
        let mut parts = path.split('.');
        let category = parts.next()?.parse::<Category>().ok()?;
        let key = parts.next()?;
        if key.is_empty() || parts.next().is_some() {
            return None;
        }
        Some(Self::new(category, key))
    }
}

impl fmt::Display for LeafPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

pub type CategoryValues = BTreeMap<String, LeafValue>;

enum Seed {
    Str(&'static str),
    Num(f64),
    Flag(bool),
}

const SCHEMA: &[(Category, &[(&str, Seed)])] = &[
    (
        Category::Colors,
        &[
            ("primary", Seed::Str("#3b82f6")),
            ("secondary", Seed::Str("#64748b")),
            ("accent", Seed::Str("#f59e0b")),
            ("background", Seed::Str("#ffffff")),
            ("foreground", Seed::Str("#0f172a")),
            ("muted", Seed::Str("#f1f5f9")),
            ("border", Seed::Str("#e2e8f0")),
            ("success", Seed::Str("#22c55e")),
            ("error", Seed::Str("#ef4444")),
        ],
    ),
    (
        Category::Typography,
        &[
            ("fontFamily", Seed::Str("Inter, sans-serif")),
            ("headingFont", Seed::Str("Inter, sans-serif")),
            ("baseFontSize", Seed::Str("16px")),
            ("headingScale", Seed::Num(1.25)),
            ("lineHeight", Seed::Num(1.5)),
            ("fontWeight", Seed::Num(400.0)),
            ("headingWeight", Seed::Num(700.0)),
            ("letterSpacing", Seed::Str("0px")),
        ],
    ),
    (
        Category::Spacing,
        &[
            ("containerPadding", Seed::Str("16px")),
            ("sectionPadding", Seed::Str("64px")),
            ("elementGap", Seed::Str("16px")),
            ("gridGap", Seed::Str("24px")),
        ],
    ),
    (
        Category::BorderRadius,
        &[
            ("small", Seed::Str("4px")),
            ("medium", Seed::Str("8px")),
            ("large", Seed::Str("16px")),
            ("button", Seed::Str("6px")),
            ("card", Seed::Str("12px")),
        ],
    ),
    (
        Category::Shadows,
        &[
            ("enabled", Seed::Flag(true)),
            ("small", Seed::Str("0 1px 2px rgba(0, 0, 0, 0.05)")),
            ("medium", Seed::Str("0 4px 6px rgba(0, 0, 0, 0.1)")),
            ("large", Seed::Str("0 10px 15px rgba(0, 0, 0, 0.1)")),
        ],
    ),
    (
        Category::Animation,
        &[
            ("enabled", Seed::Flag(true)),
            ("duration", Seed::Str("300ms")),
            ("easing", Seed::Str("ease-in-out")),
            ("hoverEffects", Seed::Flag(true)),
            ("pageTransitions", Seed::Flag(false)),
        ],
    ),
    (
        Category::Layout,
        &[
            ("maxWidth", Seed::Str("1200px")),
            ("headerStyle", Seed::Str("sticky")),
            ("footerStyle", Seed::Str("simple")),
            ("productGridColumns", Seed::Num(4.0)),
            ("showSidebar", Seed::Flag(false)),
        ],
    ),
];

impl Seed {
    fn to_value(&self) -> LeafValue {
        match self {
            Seed::Str(s) => LeafValue::Text((*s).to_string()),
            Seed::Num(n) => LeafValue::Number(*n),
            Seed::Flag(b) => LeafValue::Bool(*b),
        }
    }
}

/// The hard-coded default document
pub fn defaults() -> &'static CustomizationDocument {
    static DEFAULTS: OnceLock<CustomizationDocument> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let categories = SCHEMA
            .iter()
            .map(|(category, leaves)| {
                let values = leaves
                    .iter()
                    .map(|(key, seed)| (key.to_string(), seed.to_value()))
                    .collect();
                (*category, values)
            })
            .collect();
        CustomizationDocument { categories }
    })
}

/// Every leaf path declared by the default schema, in schema order
pub fn schema_paths() -> impl Iterator<Item = LeafPath> {
    SCHEMA.iter().flat_map(|(category, leaves)| {
        leaves.iter().map(move |(key, _)| LeafPath::new(*category, *key))
    })
}

/// Theme customization document
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationDocument {
    categories: BTreeMap<Category, CategoryValues>,
}

impl CustomizationDocument {
    /// Document with no leaves set. Reads fall back to defaults.
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// The default document ("Reset to Default")
    pub fn reset() -> Self {
        defaults().clone()
    }

    /// Look up a leaf by dotted path.
    ///
    /// Returns the stored value, falling back to the schema default.
    /// `None` only for paths outside the schema that were never set.
    pub fn get(&self, path: &str) -> Option<&LeafValue> {
        let path = LeafPath::parse(path)?;
        self.get_leaf(&path)
    }

    pub fn get_leaf(&self, path: &LeafPath) -> Option<&LeafValue> {
        self.categories
            .get(&path.category)
            .and_then(|values| values.get(&path.key))
            .or_else(|| {
                defaults()
                    .categories
                    .get(&path.category)
                    .and_then(|values| values.get(&path.key))
            })
    }

    /// Replace a single leaf, keeping its siblings.
    ///
    /// A malformed path leaves the document unchanged.
    pub fn set(&self, path: &str, value: impl Into<LeafValue>) -> Self {
        match LeafPath::parse(path) {
            Some(path) => self.set_leaf(&path, value),
            None => {
                debug!(path = %path, "Ignoring customization update with malformed path");
                self.clone()
            }
        }
    }

    /// Replace one leaf. A non-finite number leaves the document unchanged.
    pub fn set_leaf(&self, path: &LeafPath, value: impl Into<LeafValue>) -> Self {
        let value = value.into();
        if !value.is_storable() {
            debug!(path = %path, value = %value, "Ignoring non-finite customization value");
            return self.clone();
        }
        let mut next = self.clone();
        next.categories
            .entry(path.category)
            .or_default()
            .insert(path.key.clone(), value);
        next
    }

    /// Shallow-merge leaves into one category. Keys missing from `partial`
    /// keep their current values; non-finite numbers are skipped.
    pub fn merge_category(&self, category: Category, partial: &CategoryValues) -> Self {
        let mut next = self.clone();
        let values = next.categories.entry(category).or_default();
        for (key, value) in partial {
            if !value.is_storable() {
                debug!(category = %category, key = %key, "Skipping non-finite customization value");
                continue;
            }
            values.insert(key.clone(), value.clone());
        }
        next
    }

    /// Fill in every schema leaf the document is missing
    pub fn with_defaults(&self) -> Self {
        let mut next = self.clone();
        for (category, values) in &defaults().categories {
            let target = next.categories.entry(*category).or_default();
            for (key, value) in values {
                target.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        next
    }

    /// Stored values of one category (without defaults)
    pub fn category(&self, category: Category) -> Option<&CategoryValues> {
        self.categories.get(&category)
    }

    /// Iterate over every stored leaf in category order
    pub fn leaves(&self) -> impl Iterator<Item = (Category, &str, &LeafValue)> {
        self.categories.iter().flat_map(|(category, values)| {
            values
                .iter()
                .map(move |(key, value)| (*category, key.as_str(), value))
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.categories.values().map(|values| values.len()).sum()
    }
}

impl Default for CustomizationDocument {
    fn default() -> Self {
        Self::reset()
    }
}

impl Serialize for CustomizationDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.categories.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomizationDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, CategoryValues>::deserialize(deserializer)?;
        let mut categories = BTreeMap::new();
        for (name, values) in raw {
            match name.parse::<Category>() {
                Ok(category) => {
                    categories.insert(category, values);
                }
                Err(_) => debug!(category = %name, "Dropping unknown customization category"),
            }
        }
        Ok(Self { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_path_resolves_on_reset() {
        let doc = CustomizationDocument::reset();
        for path in schema_paths() {
            assert!(doc.get_leaf(&path).is_some(), "missing default for {}", path);
        }
    }

    #[test]
    fn test_empty_document_reads_defaults() {
        let doc = CustomizationDocument::empty();
        assert_eq!(doc.leaf_count(), 0);
        assert_eq!(
            doc.get("colors.primary"),
            Some(&LeafValue::Text("#3b82f6".to_string()))
        );
        assert_eq!(doc.get("layout.showSidebar"), Some(&LeafValue::Bool(false)));
    }

    #[test]
    fn test_set_keeps_siblings() {
        let doc = CustomizationDocument::reset();
        let next = doc.set("colors.primary", "#ff0000");

        assert_eq!(next.get("colors.primary").and_then(|v| v.as_str()), Some("#ff0000"));
        assert_eq!(next.get("colors.secondary"), doc.get("colors.secondary"));
        assert_eq!(next.leaf_count(), doc.leaf_count());
        // input untouched
        assert_eq!(doc.get("colors.primary").and_then(|v| v.as_str()), Some("#3b82f6"));
    }

    #[test]
    fn test_malformed_paths_are_no_ops() {
        let doc = CustomizationDocument::reset();
        for path in ["colors", "colors.primary.dark", "fonts.body", ".primary", "colors."] {
            assert_eq!(doc.set(path, "x"), doc, "path {} should be ignored", path);
            assert!(doc.get(path).is_none());
        }
    }

    #[test]
    fn test_unknown_key_in_known_category_is_stored() {
        let doc = CustomizationDocument::reset().set("colors.highlight", "#00ff00");
        assert_eq!(doc.get("colors.highlight").and_then(|v| v.as_str()), Some("#00ff00"));
    }

    #[test]
    fn test_merge_category_preserves_unlisted_keys() {
        let doc = CustomizationDocument::reset();
        let mut partial = CategoryValues::new();
        partial.insert("primary".to_string(), LeafValue::from("X"));

        let merged = doc.merge_category(Category::Colors, &partial);
        assert_eq!(merged.get("colors.primary").and_then(|v| v.as_str()), Some("X"));
        assert_eq!(merged.get("colors.secondary"), doc.get("colors.secondary"));
        assert_eq!(merged.get("colors.background"), doc.get("colors.background"));
    }

    #[test]
    fn test_with_defaults_keeps_existing_values() {
        let doc = CustomizationDocument::empty().set("typography.lineHeight", 2.0);
        let filled = doc.with_defaults();

        assert_eq!(filled.get("typography.lineHeight"), Some(&LeafValue::Number(2.0)));
        assert_eq!(filled.leaf_count(), defaults().leaf_count());
    }

    #[test]
    fn test_json_shape_uses_camel_case_categories() {
        let doc = CustomizationDocument::reset();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["colors"]["primary"], "#3b82f6");
        assert_eq!(json["borderRadius"]["button"], "6px");
        assert_eq!(json["shadows"]["enabled"], true);
        assert_eq!(json["typography"]["lineHeight"], 1.5);
    }

    #[test]
    fn test_deserialize_drops_unknown_categories() {
        let json = r##"{ "colors": { "primary": "#111111" }, "sparkles": { "level": 9 } }"##;
        let doc: CustomizationDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.get("colors.primary").and_then(|v| v.as_str()), Some("#111111"));
        assert_eq!(doc.leaf_count(), 1);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(LeafValue::parse_lenient("true"), LeafValue::Bool(true));
        assert_eq!(LeafValue::parse_lenient("3"), LeafValue::Number(3.0));
        assert_eq!(LeafValue::parse_lenient("#fff"), LeafValue::Text("#fff".to_string()));
    }

    #[test]
    fn test_parse_lenient_keeps_non_finite_as_text() {
        for raw in ["nan", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(LeafValue::parse_lenient(raw), LeafValue::Text(raw.to_string()), "{}", raw);
        }
    }

    #[test]
    fn test_non_finite_numbers_are_never_stored() {
        let doc = CustomizationDocument::reset();
        assert_eq!(doc.set("animation.duration", f64::INFINITY), doc);
        assert_eq!(doc.set("animation.duration", f64::NAN), doc);

        let mut partial = CategoryValues::new();
        partial.insert("primary".to_string(), LeafValue::from("#ff0000"));
        partial.insert("secondary".to_string(), LeafValue::Number(f64::NAN));
        let merged = doc.merge_category(Category::Colors, &partial);
        assert_eq!(merged.get("colors.primary").and_then(|v| v.as_str()), Some("#ff0000"));
        assert_eq!(merged.get("colors.secondary"), doc.get("colors.secondary"));

        let json = serde_json::to_string(&merged).unwrap();
        let reloaded: CustomizationDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, merged);
    }
}
