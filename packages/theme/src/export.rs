//! # Theme Export
//!
//! "Download as file": bundles the template reference, customizations and
//! the seller's custom CSS/JS into one pretty-printed JSON document.
//!
//! The bundle is write-only. Nothing parses it back into an editing session.

use crate::customization::CustomizationDocument;
use crate::error::ThemeResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Template the customizations were made against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub template: TemplateRef,
    pub customizations: CustomizationDocument,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
    #[serde(rename = "customJS")]
    pub custom_js: String,
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
}

impl ExportBundle {
    /// Build a bundle stamped with the current time
    pub fn new(
        template: TemplateRef,
        customizations: CustomizationDocument,
        custom_css: impl Into<String>,
        custom_js: impl Into<String>,
    ) -> Self {
        Self::at(template, customizations, custom_css, custom_js, Utc::now())
    }

    pub fn at(
        template: TemplateRef,
        customizations: CustomizationDocument,
        custom_css: impl Into<String>,
        custom_js: impl Into<String>,
        export_date: DateTime<Utc>,
    ) -> Self {
        Self {
            template,
            customizations,
            custom_css: custom_css.into(),
            custom_js: custom_js.into(),
            export_date,
        }
    }

    pub fn to_pretty_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested download name, e.g. `my-store-theme-2024-05-01.json`
    pub fn file_name(&self) -> String {
        let slug: String = self
            .template
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        let slug = if slug.is_empty() { "theme" } else { slug };
        format!("{}-theme-{}.json", slug, self.export_date.format("%Y-%m-%d"))
    }

    pub fn write_to(&self, path: &Path) -> ThemeResult<()> {
        std::fs::write(path, self.to_pretty_json()?)?;
        info!(path = %path.display(), template = %self.template.id, "Theme exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bundle() -> ExportBundle {
        ExportBundle::at(
            TemplateRef {
                id: "tpl-fashion".to_string(),
                name: "Fashion Boutique".to_string(),
                category: Some("fashion".to_string()),
            },
            CustomizationDocument::reset().set("colors.primary", "#ff0000"),
            ".hero { padding: 0; }",
            "console.log('hi');",
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_export_keys() {
        let json: serde_json::Value = serde_json::from_str(&bundle().to_pretty_json().unwrap()).unwrap();

        assert_eq!(json["template"]["id"], "tpl-fashion");
        assert_eq!(json["customizations"]["colors"]["primary"], "#ff0000");
        assert_eq!(json["customCSS"], ".hero { padding: 0; }");
        assert_eq!(json["customJS"], "console.log('hi');");
        assert_eq!(json["exportDate"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let text = bundle().to_pretty_json().unwrap();
        assert!(text.contains("\n  \"template\": {"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(bundle().file_name(), "fashion-boutique-theme-2024-05-01.json");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        bundle().write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"customCSS\""));
    }
}
