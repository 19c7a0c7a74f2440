//! # Components
//!
//! A component's `type` tag selects both its payload shape and its default
//! content. The tag is not stored separately: it is derived from the
//! [`ComponentContent`] variant, so a component can never carry a payload of
//! the wrong shape.
//!
//! ## JSON shape
//!
//! ```json
//! { "id": "text-1", "type": "text",
//!   "content": { "content": "Edit this text", "fontSize": "16px", "color": "#000" },
//!   "styles": { "margin": "0 auto" } }
//! ```
//!
//! Unknown types round-trip untouched through [`ComponentContent::Other`].

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Generic CSS-like style payload, independent of component type
pub type Styles = BTreeMap<String, String>;

/// Component types with a built-in renderer and default content
pub const KNOWN_TYPES: &[&str] = &[
    "text",
    "heading",
    "image",
    "video",
    "button",
    "product-card",
    "form",
    "gallery",
    "carousel",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub content: String,
    pub font_size: String,
    pub color: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            content: "Edit this text".to_string(),
            font_size: "16px".to_string(),
            color: "#000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingContent {
    pub text: String,
    pub level: u8,
}

impl Default for HeadingContent {
    fn default() -> Self {
        Self {
            text: "Your Heading".to_string(),
            level: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            src: "/placeholder.svg".to_string(),
            alt: "Image".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoContent {
    pub url: String,
    pub autoplay: bool,
    pub controls: bool,
}

impl Default for VideoContent {
    fn default() -> Self {
        Self {
            url: String::new(),
            autoplay: false,
            controls: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonContent {
    pub text: String,
    pub link: String,
    pub variant: String,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: "Click me".to_string(),
            link: "#".to_string(),
            variant: "primary".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCardContent {
    pub product_id: Option<String>,
    pub show_price: bool,
    pub show_description: bool,
}

impl Default for ProductCardContent {
    fn default() -> Self {
        Self {
            product_id: None,
            show_price: true,
            show_description: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            field_type: "text".to_string(),
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormContent {
    pub fields: Vec<FormField>,
    pub submit_text: String,
}

impl Default for FormContent {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField {
                    name: "name".to_string(),
                    label: "Name".to_string(),
                    field_type: "text".to_string(),
                    required: true,
                },
                FormField {
                    name: "email".to_string(),
                    label: "Email".to_string(),
                    field_type: "email".to_string(),
                    required: true,
                },
            ],
            submit_text: "Submit".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryContent {
    pub images: Vec<String>,
    pub columns: u32,
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            columns: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselContent {
    pub slides: Vec<String>,
    pub autoplay: bool,
    /// Milliseconds between slides
    pub interval: u32,
}

impl Default for CarouselContent {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            autoplay: true,
            interval: 5000,
        }
    }
}

/// Type-specific payload, one variant per component type
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentContent {
    Text(TextContent),
    Heading(HeadingContent),
    Image(ImageContent),
    Video(VideoContent),
    Button(ButtonContent),
    ProductCard(ProductCardContent),
    Form(FormContent),
    Gallery(GalleryContent),
    Carousel(CarouselContent),
    /// A type without a built-in renderer; content is kept verbatim
    Other {
        kind: String,
        fields: serde_json::Map<String, serde_json::Value>,
    },
}

impl ComponentContent {
    /// Default-content factory keyed by component type.
    /// Unknown types get empty content.
    pub fn defaults(kind: &str) -> Self {
        match kind {
            "text" => ComponentContent::Text(TextContent::default()),
            "heading" => ComponentContent::Heading(HeadingContent::default()),
            "image" => ComponentContent::Image(ImageContent::default()),
            "video" => ComponentContent::Video(VideoContent::default()),
            "button" => ComponentContent::Button(ButtonContent::default()),
            "product-card" => ComponentContent::ProductCard(ProductCardContent::default()),
            "form" => ComponentContent::Form(FormContent::default()),
            "gallery" => ComponentContent::Gallery(GalleryContent::default()),
            "carousel" => ComponentContent::Carousel(CarouselContent::default()),
            other => ComponentContent::Other {
                kind: other.to_string(),
                fields: serde_json::Map::new(),
            },
        }
    }

    /// Parse a JSON payload for the given type. Missing fields take the
    /// type's defaults; `null` is treated as an empty payload.
    pub fn from_json(kind: &str, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
            value => value,
        };

        Ok(match kind {
            "text" => ComponentContent::Text(serde_json::from_value(value)?),
            "heading" => ComponentContent::Heading(serde_json::from_value(value)?),
            "image" => ComponentContent::Image(serde_json::from_value(value)?),
            "video" => ComponentContent::Video(serde_json::from_value(value)?),
            "button" => ComponentContent::Button(serde_json::from_value(value)?),
            "product-card" => ComponentContent::ProductCard(serde_json::from_value(value)?),
            "form" => ComponentContent::Form(serde_json::from_value(value)?),
            "gallery" => ComponentContent::Gallery(serde_json::from_value(value)?),
            "carousel" => ComponentContent::Carousel(serde_json::from_value(value)?),
            other => ComponentContent::Other {
                kind: other.to_string(),
                fields: serde_json::from_value(value)?,
            },
        })
    }

    /// The `type` tag of this payload
    pub fn kind(&self) -> &str {
        match self {
            ComponentContent::Text(_) => "text",
            ComponentContent::Heading(_) => "heading",
            ComponentContent::Image(_) => "image",
            ComponentContent::Video(_) => "video",
            ComponentContent::Button(_) => "button",
            ComponentContent::ProductCard(_) => "product-card",
            ComponentContent::Form(_) => "form",
            ComponentContent::Gallery(_) => "gallery",
            ComponentContent::Carousel(_) => "carousel",
            ComponentContent::Other { kind, .. } => kind,
        }
    }
}

impl Serialize for ComponentContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ComponentContent::Text(c) => c.serialize(serializer),
            ComponentContent::Heading(c) => c.serialize(serializer),
            ComponentContent::Image(c) => c.serialize(serializer),
            ComponentContent::Video(c) => c.serialize(serializer),
            ComponentContent::Button(c) => c.serialize(serializer),
            ComponentContent::ProductCard(c) => c.serialize(serializer),
            ComponentContent::Form(c) => c.serialize(serializer),
            ComponentContent::Gallery(c) => c.serialize(serializer),
            ComponentContent::Carousel(c) => c.serialize(serializer),
            ComponentContent::Other { fields, .. } => fields.serialize(serializer),
        }
    }
}

/// A placed component
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComponent")]
pub struct Component {
    pub id: String,
    pub content: ComponentContent,
    pub styles: Styles,
}

impl Component {
    /// Build a component of `kind` with that type's default content
    pub fn new(id: impl Into<String>, kind: &str) -> Self {
        Self {
            id: id.into(),
            content: ComponentContent::defaults(kind),
            styles: Styles::new(),
        }
    }

    pub fn kind(&self) -> &str {
        self.content.kind()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Component", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.kind())?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("styles", &self.styles)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawComponent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    styles: Option<Styles>,
}

impl TryFrom<RawComponent> for Component {
    type Error = String;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        let content = ComponentContent::from_json(&raw.kind, raw.content)
            .map_err(|e| format!("invalid content for {} component {}: {}", raw.kind, raw.id, e))?;
        Ok(Self {
            id: raw.id,
            content,
            styles: raw.styles.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_defaults() {
        let component = Component::new("text-1", "text");
        let json = serde_json::to_value(&component).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "text-1",
                "type": "text",
                "content": { "content": "Edit this text", "fontSize": "16px", "color": "#000" },
                "styles": {}
            })
        );
    }

    #[test]
    fn test_button_defaults() {
        let component = Component::new("btn-1", "button");
        assert_eq!(
            serde_json::to_value(&component.content).unwrap(),
            json!({ "text": "Click me", "link": "#", "variant": "primary" })
        );
    }

    #[test]
    fn test_every_known_type_has_typed_defaults() {
        for kind in KNOWN_TYPES {
            let content = ComponentContent::defaults(kind);
            assert_eq!(content.kind(), *kind);
            assert!(!matches!(content, ComponentContent::Other { .. }), "{} fell through", kind);
        }
    }

    #[test]
    fn test_unknown_type_gets_empty_content() {
        let component = Component::new("x-1", "countdown-timer");
        assert_eq!(component.kind(), "countdown-timer");
        assert_eq!(serde_json::to_value(&component.content).unwrap(), json!({}));
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let component: Component = serde_json::from_value(json!({
            "id": "text-9",
            "type": "text",
            "content": { "content": "Hello" }
        }))
        .unwrap();

        match &component.content {
            ComponentContent::Text(text) => {
                assert_eq!(text.content, "Hello");
                assert_eq!(text.font_size, "16px");
            }
            other => panic!("expected text, got {:?}", other),
        }
        assert!(component.styles.is_empty());
    }

    #[test]
    fn test_unknown_type_round_trips_fields() {
        let value = json!({
            "id": "w-1",
            "type": "map-widget",
            "content": { "lat": 1.5, "zoom": 12 },
            "styles": { "height": "300px" }
        });
        let component: Component = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&component).unwrap(), value);
    }

    #[test]
    fn test_mistyped_payload_is_rejected() {
        let result = serde_json::from_value::<Component>(json!({
            "id": "text-1",
            "type": "text",
            "content": { "fontSize": 16 }
        }));
        assert!(result.is_err());
    }
}
