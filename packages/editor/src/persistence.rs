//! # Persisted Documents
//!
//! Documents are saved whole, wrapped in a versioned envelope:
//!
//! ```json
//! { "schemaVersion": 1, "document": { "sections": [] } }
//! ```
//!
//! ## Versions
//!
//! - **0**: the historical bare shape, no envelope. Layouts may be a bare
//!   array of sections, sections may lack `name`, components may lack
//!   `styles`; customizations may lack any leaf.
//! - **1**: current. Layouts are complete; customizations carry every
//!   schema leaf.
//!
//! Loading runs forward migrations from the stored version. A version newer
//! than [`CURRENT_SCHEMA_VERSION`] is refused rather than guessed at.

use crate::document::LayoutDocument;
use crate::errors::StoreError;
use crate::store::DocumentStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use storefront_theme::CustomizationDocument;
use tracing::{debug, info};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument<D> {
    pub schema_version: u32,
    pub document: D,
}

/// A document shape that can be stored and migrated
pub trait Persisted: Serialize + DeserializeOwned {
    /// Rewrite a payload saved under `from_version` into the current shape
    fn upgrade(value: Value, from_version: u32) -> Value;

    /// Restore invariants serde cannot express, after every load
    fn repair(self) -> Self {
        self
    }
}

impl Persisted for LayoutDocument {
    fn upgrade(value: Value, from_version: u32) -> Value {
        if from_version >= 1 {
            return value;
        }

        let mut value = match value {
            Value::Array(sections) => json!({ "sections": sections }),
            Value::Null => json!({ "sections": [] }),
            other => other,
        };

        if let Some(sections) = value.get_mut("sections").and_then(Value::as_array_mut) {
            for (index, section) in sections.iter_mut().enumerate() {
                let Some(section) = section.as_object_mut() else {
                    continue;
                };
                section
                    .entry("name")
                    .or_insert_with(|| Value::String(format!("Section {}", index + 1)));
                let components = section
                    .entry("components")
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Some(components) = components.as_array_mut() {
                    for component in components.iter_mut().filter_map(Value::as_object_mut) {
                        let styles = component.entry("styles").or_insert(Value::Null);
                        if styles.is_null() {
                            *styles = json!({});
                        }
                    }
                }
            }
        }

        value
    }

    fn repair(self) -> Self {
        self.with_unique_ids()
    }
}

impl Persisted for CustomizationDocument {
    fn upgrade(value: Value, from_version: u32) -> Value {
        if from_version >= 1 {
            return value;
        }
        match serde_json::from_value::<CustomizationDocument>(value.clone()) {
            Ok(doc) => serde_json::to_value(doc.with_defaults()).unwrap_or(value),
            // leave it to the final decode to report the error
            Err(_) => value,
        }
    }
}

/// Wrap a document in the current envelope
pub fn encode<D: Persisted>(doc: &D) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(SavedDocument {
        schema_version: CURRENT_SCHEMA_VERSION,
        document: doc,
    })?)
}

/// Unwrap and migrate a stored payload
pub fn decode<D: Persisted>(value: Value) -> Result<D, StoreError> {
    let (version, payload) = split_envelope(value)?;

    if version > CURRENT_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    let payload = if version < CURRENT_SCHEMA_VERSION {
        debug!(from = version, to = CURRENT_SCHEMA_VERSION, "Migrating stored document");
        D::upgrade(payload, version)
    } else {
        payload
    };

    let doc: D = serde_json::from_value(payload)?;
    Ok(doc.repair())
}

fn split_envelope(value: Value) -> Result<(u32, Value), StoreError> {
    let is_envelope = value
        .as_object()
        .map(|map| map.contains_key("schemaVersion") && map.contains_key("document"))
        .unwrap_or(false);

    if is_envelope {
        let saved: SavedDocument<Value> = serde_json::from_value(value)?;
        Ok((saved.schema_version, saved.document))
    } else {
        Ok((0, value))
    }
}

/// Save a whole document under `key`
pub fn save_document<D: Persisted>(
    store: &mut dyn DocumentStore,
    key: &str,
    doc: &D,
) -> Result<(), StoreError> {
    let payload = encode(doc)?;
    store.save(key, &payload)
}

/// Load the document under `key`, or the default document if nothing is
/// stored there yet
pub fn load_document<D: Persisted + Default>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<D, StoreError> {
    match store.load(key)? {
        Some(value) => decode(value),
        None => {
            info!(key = %key, "No stored document, starting from default");
            Ok(D::default())
        }
    }
}
