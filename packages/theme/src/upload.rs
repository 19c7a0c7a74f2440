//! # Theme Upload Validation
//!
//! Admins upload themes through a form whose structured fields arrive as
//! raw JSON text. Every field is parsed and checked before anything is
//! handed to a store, so a rejected upload never leaves partial state.

use crate::customization::CustomizationDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Raw form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeUploadForm {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Decimal price as typed; blank means free
    pub price: String,
    pub customizations_json: String,
    pub layout_json: String,
}

/// A validated theme ready to be stored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePackage {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub customizations: CustomizationDocument,
    pub layout: Option<serde_json::Value>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Theme name is required")]
    MissingName,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid JSON in {field}: {message}")]
    InvalidJson { field: &'static str, message: String },
}

impl ThemeUploadForm {
    /// Validate the submission.
    ///
    /// Customizations are completed with defaults so the stored theme
    /// satisfies the "every key exists" invariant.
    pub fn validate(&self) -> Result<ThemePackage, UploadError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UploadError::MissingName);
        }

        let price = parse_price(&self.price)?;

        let customizations = if self.customizations_json.trim().is_empty() {
            CustomizationDocument::reset()
        } else {
            serde_json::from_str::<CustomizationDocument>(&self.customizations_json)
                .map_err(|e| invalid_json("customizations", e))?
                .with_defaults()
        };

        let layout = if self.layout_json.trim().is_empty() {
            None
        } else {
            let value: serde_json::Value = serde_json::from_str(&self.layout_json)
                .map_err(|e| invalid_json("layout", e))?;
            if !value.is_object() {
                warn!("Rejecting theme upload with non-object layout");
                return Err(UploadError::InvalidJson {
                    field: "layout",
                    message: "expected a JSON object".to_string(),
                });
            }
            Some(value)
        };

        debug!(theme = %name, price, "Theme upload validated");

        Ok(ThemePackage {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            customizations,
            layout,
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, UploadError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(UploadError::InvalidPrice(raw.to_string())),
    }
}

fn invalid_json(field: &'static str, err: serde_json::Error) -> UploadError {
    warn!(field, error = %err, "Rejecting theme upload with malformed JSON");
    UploadError::InvalidJson {
        field,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ThemeUploadForm {
        ThemeUploadForm {
            name: "  Minimal Shop ".to_string(),
            description: "Clean and simple".to_string(),
            category: "general".to_string(),
            price: "19.99".to_string(),
            customizations_json: r##"{ "colors": { "primary": "#222222" } }"##.to_string(),
            layout_json: r#"{ "sections": [] }"#.to_string(),
        }
    }

    #[test]
    fn test_valid_upload() {
        let package = form().validate().unwrap();

        assert_eq!(package.name, "Minimal Shop");
        assert_eq!(package.price, 19.99);
        assert_eq!(
            package.customizations.get("colors.primary").and_then(|v| v.as_str()),
            Some("#222222")
        );
        // completed with defaults
        assert!(package.customizations.category(crate::Category::Layout).is_some());
        assert!(package.layout.is_some());
    }

    #[test]
    fn test_blank_fields_fall_back() {
        let package = ThemeUploadForm {
            name: "Blank".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(package.price, 0.0);
        assert_eq!(package.customizations, CustomizationDocument::reset());
        assert!(package.layout.is_none());
    }

    #[test]
    fn test_malformed_customizations_rejected() {
        let mut form = form();
        form.customizations_json = "{ colors: ".to_string();

        match form.validate() {
            Err(UploadError::InvalidJson { field, .. }) => assert_eq!(field, "customizations"),
            other => panic!("expected invalid JSON, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_layout_rejected() {
        let mut form = form();
        form.layout_json = "[1, 2".to_string();
        assert!(matches!(
            form.validate(),
            Err(UploadError::InvalidJson { field: "layout", .. })
        ));

        form.layout_json = "[1, 2]".to_string();
        assert!(matches!(
            form.validate(),
            Err(UploadError::InvalidJson { field: "layout", .. })
        ));
    }

    #[test]
    fn test_missing_name_and_bad_price() {
        let mut unnamed = form();
        unnamed.name = "   ".to_string();
        assert_eq!(unnamed.validate(), Err(UploadError::MissingName));

        let mut negative = form();
        negative.price = "-5".to_string();
        assert_eq!(negative.validate(), Err(UploadError::InvalidPrice("-5".to_string())));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = UploadError::InvalidJson {
            field: "customizations",
            message: "EOF".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid JSON in customizations: EOF");
    }
}
