//! # Editing Actions
//!
//! Serializable user intents for the two document shapes.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each action is one builder gesture
//! 2. **Total**: applying never fails; stale references are no-ops
//! 3. **Labelled**: every action names its own history entry
//!
//! Actions arrive from the UI as JSON (`{"type": "addComponent", ...}`),
//! which keeps the binding layer free of per-operation plumbing.

use crate::component::{ComponentContent, Styles};
use crate::document::LayoutDocument;
use crate::ids::IdGenerator;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use storefront_theme::{apply_preset, Category, CategoryValues, CustomizationDocument, LeafValue};
use tracing::debug;

/// Page composer actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutAction {
    AddSection,

    #[serde(rename_all = "camelCase")]
    AddComponent {
        section_id: String,
        component_type: String,
    },

    #[serde(rename_all = "camelCase")]
    DeleteComponent {
        section_id: String,
        component_id: String,
    },

    #[serde(rename_all = "camelCase")]
    DuplicateComponent {
        section_id: String,
        component_id: String,
    },

    /// Drag-and-drop result
    #[serde(rename_all = "camelCase")]
    MoveComponent {
        source_section_id: String,
        dest_section_id: String,
        source_index: usize,
        dest_index: usize,
    },

    #[serde(rename_all = "camelCase")]
    DeleteSection { section_id: String },

    #[serde(rename_all = "camelCase")]
    RenameSection { section_id: String, name: String },

    MoveSection { from: usize, to: usize },

    #[serde(rename_all = "camelCase")]
    UpdateStyles {
        section_id: String,
        component_id: String,
        styles: Styles,
    },

    /// Replace a component's payload; parsed against the component's own
    /// type when applied.
    #[serde(rename_all = "camelCase")]
    UpdateContent {
        section_id: String,
        component_id: String,
        content: serde_json::Value,
    },
}

impl Reducer for LayoutAction {
    type Document = LayoutDocument;

    fn reduce(&self, doc: &LayoutDocument, ids: &mut dyn IdGenerator) -> LayoutDocument {
        match self {
            LayoutAction::AddSection => doc.add_section(ids),

            LayoutAction::AddComponent { section_id, component_type } => {
                doc.add_component(section_id, component_type, ids)
            }

            LayoutAction::DeleteComponent { section_id, component_id } => {
                doc.delete_component(section_id, component_id)
            }

            LayoutAction::DuplicateComponent { section_id, component_id } => {
                doc.duplicate_component(section_id, component_id, ids)
            }

            LayoutAction::MoveComponent {
                source_section_id,
                dest_section_id,
                source_index,
                dest_index,
            } => doc.move_component(source_section_id, dest_section_id, *source_index, *dest_index),

            LayoutAction::DeleteSection { section_id } => doc.delete_section(section_id),

            LayoutAction::RenameSection { section_id, name } => doc.rename_section(section_id, name),

            LayoutAction::MoveSection { from, to } => doc.move_section(*from, *to),

            LayoutAction::UpdateStyles { section_id, component_id, styles } => {
                doc.update_component_styles(section_id, component_id, styles)
            }

            LayoutAction::UpdateContent { section_id, component_id, content } => {
                let Some((_, component)) = doc.find_component(component_id) else {
                    debug!(component_id = %component_id, "update_content: component not found");
                    return doc.clone();
                };
                match ComponentContent::from_json(component.kind(), content.clone()) {
                    Ok(parsed) => doc.update_component_content(section_id, component_id, parsed),
                    Err(e) => {
                        debug!(component_id = %component_id, error = %e, "update_content: payload does not fit component type");
                        doc.clone()
                    }
                }
            }
        }
    }

    fn label(&self) -> String {
        match self {
            LayoutAction::AddSection => "add_section".to_string(),
            LayoutAction::AddComponent { component_type, .. } => {
                format!("add_component_{}", component_type)
            }
            LayoutAction::DeleteComponent { .. } => "delete_component".to_string(),
            LayoutAction::DuplicateComponent { .. } => "duplicate_component".to_string(),
            LayoutAction::MoveComponent { .. } => "move_component".to_string(),
            LayoutAction::DeleteSection { .. } => "delete_section".to_string(),
            LayoutAction::RenameSection { .. } => "rename_section".to_string(),
            LayoutAction::MoveSection { .. } => "move_section".to_string(),
            LayoutAction::UpdateStyles { .. } => "update_styles".to_string(),
            LayoutAction::UpdateContent { .. } => "update_content".to_string(),
        }
    }
}

/// Theme customization panel actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CustomizationAction {
    /// Replace one leaf addressed by `category.key`
    Set { path: String, value: LeafValue },

    MergeCategory {
        category: Category,
        values: CategoryValues,
    },

    ApplyPreset { name: String },

    Reset,
}

impl Reducer for CustomizationAction {
    type Document = CustomizationDocument;

    fn reduce(&self, doc: &CustomizationDocument, _ids: &mut dyn IdGenerator) -> CustomizationDocument {
        match self {
            CustomizationAction::Set { path, value } => doc.set(path, value.clone()),
            CustomizationAction::MergeCategory { category, values } => doc.merge_category(*category, values),
            CustomizationAction::ApplyPreset { name } => apply_preset(doc, name),
            CustomizationAction::Reset => CustomizationDocument::reset(),
        }
    }

    fn label(&self) -> String {
        match self {
            CustomizationAction::Set { path, .. } => format!("update_{}", path.replace('.', "_")),
            CustomizationAction::MergeCategory { category, .. } => format!("merge_{}", category),
            CustomizationAction::ApplyPreset { name } => format!("apply_preset_{}", name),
            CustomizationAction::Reset => "reset_customization".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use serde_json::json;

    #[test]
    fn test_layout_action_json_shape() {
        let action: LayoutAction = serde_json::from_value(json!({
            "type": "moveComponent",
            "sourceSectionId": "section-1",
            "destSectionId": "section-2",
            "sourceIndex": 0,
            "destIndex": 3
        }))
        .unwrap();

        assert_eq!(
            action,
            LayoutAction::MoveComponent {
                source_section_id: "section-1".to_string(),
                dest_section_id: "section-2".to_string(),
                source_index: 0,
                dest_index: 3,
            }
        );

        let add = serde_json::to_value(LayoutAction::AddSection).unwrap();
        assert_eq!(add, json!({ "type": "addSection" }));
    }

    #[test]
    fn test_layout_labels() {
        let add = LayoutAction::AddComponent {
            section_id: "s".to_string(),
            component_type: "text".to_string(),
        };
        assert_eq!(add.label(), "add_component_text");
        assert_eq!(LayoutAction::AddSection.label(), "add_section");
    }

    #[test]
    fn test_customization_labels() {
        let set = CustomizationAction::Set {
            path: "colors.primary".to_string(),
            value: LeafValue::from("#ff0000"),
        };
        assert_eq!(set.label(), "update_colors_primary");
        assert_eq!(
            CustomizationAction::ApplyPreset { name: "ocean".to_string() }.label(),
            "apply_preset_ocean"
        );
        assert_eq!(CustomizationAction::Reset.label(), "reset_customization");
    }

    #[test]
    fn test_update_content_parses_against_component_type() {
        let mut ids = SequentialIds::new();
        let doc = LayoutDocument::new().add_section(&mut ids);
        let section_id = doc.sections[0].id.clone();
        let doc = doc.add_component(&section_id, "button", &mut ids);
        let component_id = doc.sections[0].components[0].id.clone();

        let action = LayoutAction::UpdateContent {
            section_id: section_id.clone(),
            component_id: component_id.clone(),
            content: json!({ "text": "Shop now", "link": "/products" }),
        };
        let next = action.reduce(&doc, &mut ids);
        let content = serde_json::to_value(&next.sections[0].components[0].content).unwrap();
        assert_eq!(content, json!({ "text": "Shop now", "link": "/products", "variant": "primary" }));

        let bad = LayoutAction::UpdateContent {
            section_id,
            component_id,
            content: json!({ "text": 42 }),
        };
        assert_eq!(bad.reduce(&doc, &mut ids), doc);
    }

    #[test]
    fn test_customization_set_and_reset() {
        let mut ids = SequentialIds::new();
        let doc = CustomizationDocument::reset();
        let set: CustomizationAction = serde_json::from_value(json!({
            "type": "set",
            "path": "layout.productGridColumns",
            "value": 3
        }))
        .unwrap();

        let next = set.reduce(&doc, &mut ids);
        assert_eq!(next.get("layout.productGridColumns"), Some(&LeafValue::Number(3.0)));
        assert_eq!(CustomizationAction::Reset.reduce(&next, &mut ids), doc);
    }
}
