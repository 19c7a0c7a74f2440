//! # Layout Document
//!
//! The page composer's document: an ordered list of sections, each holding
//! an ordered list of components (order is render order).
//!
//! ## Operation semantics
//!
//! Every operation takes `&self` and returns a new document; the input is
//! never touched. Operations that name a missing section/component or an
//! out-of-range index return an unchanged copy. There is no error path:
//! a stale reference from the UI (double-click delete, a drag that raced a
//! removal) must never abort an editing session.
//!
//! ## Identity
//!
//! Component ids are unique across the whole document so components can
//! move between sections freely. Fresh ids are drawn from an injected
//! [`IdGenerator`] and re-drawn on collision.

use crate::component::{Component, ComponentContent, Styles};
use crate::ids::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// Root of the layout tree. The empty document is the initial state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl LayoutDocument {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Find a component anywhere in the document
    pub fn find_component(&self, component_id: &str) -> Option<(&Section, &Component)> {
        self.sections.iter().find_map(|section| {
            section
                .components
                .iter()
                .find(|c| c.id == component_id)
                .map(|component| (section, component))
        })
    }

    /// All component ids in render order
    pub fn component_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.components.iter().map(|c| c.id.as_str()))
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.sections.iter().map(|s| s.components.len()).sum()
    }

    /// Whether `id` is used by any section or component
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.id == id || s.components.iter().any(|c| c.id == id))
    }

    fn fresh_id(&self, ids: &mut dyn IdGenerator, prefix: &str) -> String {
        loop {
            let id = ids.next_id(prefix);
            if !self.contains_id(&id) {
                return id;
            }
            debug!(id = %id, "Generated id already in use, drawing another");
        }
    }

    fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    fn locate(&self, section_id: &str, component_id: &str) -> Option<(usize, usize)> {
        let si = self.section_index(section_id)?;
        let ci = self.sections[si]
            .components
            .iter()
            .position(|c| c.id == component_id)?;
        Some((si, ci))
    }

    /// Rename repeated section/component ids (`c1` → `c1-2`) so every id in
    /// the document is unique. The first occurrence keeps its id.
    pub fn with_unique_ids(&self) -> Self {
        let mut taken: HashSet<String> = HashSet::new();
        for section in &self.sections {
            taken.insert(section.id.clone());
            taken.extend(section.components.iter().map(|c| c.id.clone()));
        }

        let mut next = self.clone();
        let mut seen: HashSet<String> = HashSet::new();
        let mut claim = |id: &mut String| {
            if seen.insert(id.clone()) {
                return;
            }
            let renamed = (2u64..)
                .map(|n| format!("{}-{}", id, n))
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or_default();
            warn!(id = %id, renamed = %renamed, "Duplicate id in document, renaming");
            taken.insert(renamed.clone());
            seen.insert(renamed.clone());
            *id = renamed;
        };

        for section in &mut next.sections {
            claim(&mut section.id);
            for component in &mut section.components {
                claim(&mut component.id);
            }
        }
        next
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Append an empty section named `Section N`
    pub fn add_section(&self, ids: &mut dyn IdGenerator) -> Self {
        let mut next = self.clone();
        let id = self.fresh_id(ids, "section");
        next.sections.push(Section {
            id,
            name: format!("Section {}", self.sections.len() + 1),
            components: Vec::new(),
        });
        next
    }

    /// Remove a section together with all of its components
    pub fn delete_section(&self, section_id: &str) -> Self {
        let mut next = self.clone();
        next.sections.retain(|s| s.id != section_id);
        if next.sections.len() == self.sections.len() {
            debug!(section_id = %section_id, "delete_section: section not found");
        }
        next
    }

    pub fn rename_section(&self, section_id: &str, name: &str) -> Self {
        let mut next = self.clone();
        match next.sections.iter_mut().find(|s| s.id == section_id) {
            Some(section) => section.name = name.to_string(),
            None => debug!(section_id = %section_id, "rename_section: section not found"),
        }
        next
    }

    /// Reorder sections; `to` is the final position of the moved section
    pub fn move_section(&self, from: usize, to: usize) -> Self {
        let len = self.sections.len();
        if from >= len || to >= len {
            debug!(from, to, len, "move_section: index out of bounds");
            return self.clone();
        }
        let mut next = self.clone();
        let section = next.sections.remove(from);
        next.sections.insert(to, section);
        next
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Append a component of `kind` with its default content
    pub fn add_component(&self, section_id: &str, kind: &str, ids: &mut dyn IdGenerator) -> Self {
        let Some(si) = self.section_index(section_id) else {
            debug!(section_id = %section_id, kind = %kind, "add_component: section not found");
            return self.clone();
        };
        let mut next = self.clone();
        let id = self.fresh_id(ids, kind);
        next.sections[si].components.push(Component::new(id, kind));
        next
    }

    pub fn delete_component(&self, section_id: &str, component_id: &str) -> Self {
        let Some((si, ci)) = self.locate(section_id, component_id) else {
            debug!(section_id = %section_id, component_id = %component_id, "delete_component: not found");
            return self.clone();
        };
        let mut next = self.clone();
        next.sections[si].components.remove(ci);
        next
    }

    /// Clone a component under a fresh id and append the copy to the end
    /// of the same section.
    pub fn duplicate_component(
        &self,
        section_id: &str,
        component_id: &str,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        let Some((si, ci)) = self.locate(section_id, component_id) else {
            debug!(section_id = %section_id, component_id = %component_id, "duplicate_component: not found");
            return self.clone();
        };
        let mut next = self.clone();
        let mut copy = self.sections[si].components[ci].clone();
        copy.id = self.fresh_id(ids, copy.kind());
        next.sections[si].components.push(copy);
        next
    }

    /// Move the component at `source_index` of one section to `dest_index`
    /// of another (or the same) section.
    ///
    /// `dest_index` is interpreted after removal from the source, so for a
    /// same-section reorder it ranges over `0..len`, and for a cross-section
    /// move over `0..=dest_len`.
    pub fn move_component(
        &self,
        source_section_id: &str,
        dest_section_id: &str,
        source_index: usize,
        dest_index: usize,
    ) -> Self {
        let (Some(src), Some(dst)) = (
            self.section_index(source_section_id),
            self.section_index(dest_section_id),
        ) else {
            debug!(
                source = %source_section_id,
                dest = %dest_section_id,
                "move_component: section not found"
            );
            return self.clone();
        };

        if source_index >= self.sections[src].components.len() {
            debug!(source_index, "move_component: source index out of bounds");
            return self.clone();
        }

        let dest_len = if src == dst {
            self.sections[dst].components.len() - 1
        } else {
            self.sections[dst].components.len()
        };
        if dest_index > dest_len {
            debug!(dest_index, dest_len, "move_component: destination index out of bounds");
            return self.clone();
        }

        let mut next = self.clone();
        let component = next.sections[src].components.remove(source_index);
        next.sections[dst].components.insert(dest_index, component);
        next
    }

    /// Shallow-merge style keys into a component
    pub fn update_component_styles(&self, section_id: &str, component_id: &str, styles: &Styles) -> Self {
        let Some((si, ci)) = self.locate(section_id, component_id) else {
            debug!(component_id = %component_id, "update_component_styles: not found");
            return self.clone();
        };
        let mut next = self.clone();
        let target = &mut next.sections[si].components[ci].styles;
        for (key, value) in styles {
            target.insert(key.clone(), value.clone());
        }
        next
    }

    /// Replace a component's payload. The component type is fixed at
    /// creation, so a payload of a different type is ignored.
    pub fn update_component_content(
        &self,
        section_id: &str,
        component_id: &str,
        content: ComponentContent,
    ) -> Self {
        let Some((si, ci)) = self.locate(section_id, component_id) else {
            debug!(component_id = %component_id, "update_component_content: not found");
            return self.clone();
        };
        let current = &self.sections[si].components[ci];
        if current.kind() != content.kind() {
            debug!(
                component_id = %component_id,
                expected = %current.kind(),
                got = %content.kind(),
                "update_component_content: type mismatch"
            );
            return self.clone();
        }
        let mut next = self.clone();
        next.sections[si].components[ci].content = content;
        next
    }
}
