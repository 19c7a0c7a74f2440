//! # CSS Variable Rendering
//!
//! Renders a customization document as CSS custom properties for previews
//! and exports. Every leaf becomes `--<category>-<key>` in kebab-case,
//! e.g. `borderRadius.button` → `--border-radius-button`.
//!
//! Output is deterministic: categories and keys are emitted in sorted order.

use crate::customization::{CustomizationDocument, LeafPath, LeafValue};

/// Convert a camelCase identifier to kebab-case
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Custom property name for a leaf
pub fn variable_name(path: &LeafPath) -> String {
    format!(
        "--{}-{}",
        kebab_case(path.category.as_str()),
        kebab_case(&path.key)
    )
}

fn css_value(value: &LeafValue) -> String {
    match value {
        // a declaration value may not close the declaration or the block
        LeafValue::Text(s) => s
            .chars()
            .filter(|c| !matches!(*c, ';' | '{' | '}') && !c.is_control())
            .collect(),
        LeafValue::Number(n) => n.to_string(),
        // booleans are exposed as 0/1 so they can feed calc()
        LeafValue::Bool(true) => "1".to_string(),
        LeafValue::Bool(false) => "0".to_string(),
    }
}

/// Render the document (completed with defaults) as a `:root` block
pub fn to_css_variables(doc: &CustomizationDocument) -> String {
    let doc = doc.with_defaults();
    let mut css = String::from(":root {\n");
    for (category, key, value) in doc.leaves() {
        let name = variable_name(&LeafPath::new(category, key));
        css.push_str(&format!("  {}: {};\n", name, css_value(value)));
    }
    css.push_str("}\n");
    css
}

/// Variables followed by the seller's own stylesheet
pub fn to_stylesheet(doc: &CustomizationDocument, custom_css: &str) -> String {
    let mut css = to_css_variables(doc);
    let custom_css = custom_css.trim();
    if !custom_css.is_empty() {
        css.push('\n');
        css.push_str(custom_css);
        css.push('\n');
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::Category;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("primary"), "primary");
        assert_eq!(kebab_case("borderRadius"), "border-radius");
        assert_eq!(kebab_case("productGridColumns"), "product-grid-columns");
    }

    #[test]
    fn test_variable_name() {
        let path = LeafPath::new(Category::BorderRadius, "button");
        assert_eq!(variable_name(&path), "--border-radius-button");
    }

    #[test]
    fn test_root_block_contains_every_category() {
        let css = to_css_variables(&CustomizationDocument::reset());
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --colors-primary: #3b82f6;\n"));
        assert!(css.contains("  --typography-line-height: 1.5;\n"));
        assert!(css.contains("  --shadows-enabled: 1;\n"));
        assert!(css.contains("  --layout-product-grid-columns: 4;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_empty_document_renders_defaults() {
        assert_eq!(
            to_css_variables(&CustomizationDocument::empty()),
            to_css_variables(&CustomizationDocument::reset())
        );
    }

    #[test]
    fn test_stylesheet_appends_custom_css() {
        let css = to_stylesheet(&CustomizationDocument::reset(), "  .hero { color: red; }  ");
        assert!(css.ends_with("}\n\n.hero { color: red; }\n"));

        let plain = to_stylesheet(&CustomizationDocument::reset(), "   ");
        assert_eq!(plain, to_css_variables(&CustomizationDocument::reset()));
    }

    #[test]
    fn test_text_values_cannot_escape_the_declaration() {
        let doc = CustomizationDocument::reset()
            .set("colors.primary", "red; } body { display: none }\n.x {");
        let css = to_css_variables(&doc);

        assert!(css.contains("  --colors-primary: red  body  display: none .x ;\n"));
        assert_eq!(css.matches('{').count(), 1);
        assert_eq!(css.matches('}').count(), 1);
    }
}
