use crate::ids::IdGenerator;

/// Trait for editing actions
///
/// Each action type implements this trait to provide:
/// - A pure reduce step (old document → new document)
/// - The label recorded in history for that step
pub trait Reducer {
    /// Document shape this action edits
    type Document: Clone + PartialEq;

    /// Produce the next document. Must not fail: actions that cannot apply
    /// return an unchanged copy.
    fn reduce(&self, doc: &Self::Document, ids: &mut dyn IdGenerator) -> Self::Document;

    /// History label, e.g. `add_component_text` or `update_colors_primary`
    fn label(&self) -> String;
}
