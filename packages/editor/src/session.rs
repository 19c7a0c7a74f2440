//! # Edit Session
//!
//! Binds one document, its history and an id generator. This is the only
//! place editing state is stored; actions themselves are pure.
//!
//! ```text
//! dispatch(action) → reduce → record(label, snapshot) → document
//! undo / redo      → move history cursor          → document
//! ```
//!
//! Saving is a boundary operation. Its outcome never touches the document
//! or the history: a failed save only leaves the session dirty.

use crate::actions::{CustomizationAction, LayoutAction};
use crate::errors::EditorError;
use crate::history::{History, DEFAULT_MAX_ENTRIES};
use crate::ids::IdGenerator;
use crate::persistence::{save_document, Persisted};
use crate::reducer::Reducer;
use crate::store::DocumentStore;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub type LayoutSession = EditSession<LayoutAction>;
pub type ThemeSession = EditSession<CustomizationAction>;

pub struct EditSession<R: Reducer> {
    document: R::Document,
    history: History<R::Document>,
    ids: Box<dyn IdGenerator>,

    /// Changed since the last successful save
    dirty: bool,
}

impl<R: Reducer> EditSession<R> {
    /// Start a session. The initial document is recorded as `initialize`,
    /// so undo is a no-op until the first edit.
    pub fn new(initial: R::Document, ids: Box<dyn IdGenerator>) -> Self {
        Self::with_history_limit(initial, ids, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_history_limit(initial: R::Document, ids: Box<dyn IdGenerator>, limit: usize) -> Self {
        let mut history = History::with_max_entries(limit);
        history.record("initialize", initial.clone());
        Self {
            document: initial,
            history,
            ids,
            dirty: false,
        }
    }

    /// Apply an action and record the result.
    ///
    /// Returns `false` when the action left the document unchanged (stale
    /// id, bad index, malformed path); nothing is recorded in that case.
    pub fn dispatch(&mut self, action: &R) -> bool {
        let next = action.reduce(&self.document, self.ids.as_mut());
        let label = action.label();

        if next == self.document {
            debug!(action = %label, "Action did not change the document");
            return false;
        }

        let cursor = self.history.record(label.clone(), next.clone());
        self.document = next;
        self.dirty = true;
        debug!(action = %label, cursor, "Action committed");
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.dirty = true;
                debug!(cursor = ?self.history.cursor(), "Undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.dirty = true;
                debug!(cursor = ?self.history.cursor(), "Redo");
                true
            }
            None => false,
        }
    }

    pub fn document(&self) -> &R::Document {
        &self.document
    }

    pub fn history(&self) -> &History<R::Document> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

impl<R> EditSession<R>
where
    R: Reducer + DeserializeOwned,
{
    /// Dispatch an action received as JSON from the UI layer
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool, EditorError> {
        let action: R = serde_json::from_str(json).map_err(EditorError::InvalidAction)?;
        Ok(self.dispatch(&action))
    }
}

impl<R> EditSession<R>
where
    R: Reducer,
    R::Document: Persisted,
{
    /// Save the whole document. On failure the document stays as it is and
    /// the session stays dirty; there is no retry.
    pub fn save_to(&mut self, store: &mut dyn DocumentStore, key: &str) -> Result<(), EditorError> {
        match save_document(store, key, &self.document) {
            Ok(()) => {
                self.dirty = false;
                info!(key = %key, "Document saved");
                Ok(())
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Save failed, keeping in-memory document");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LayoutDocument;
    use crate::errors::StoreError;
    use crate::ids::SequentialIds;
    use crate::store::MemoryStore;
    use serde_json::Value;
    use storefront_theme::CustomizationDocument;

    struct UnreachableStore;

    impl DocumentStore for UnreachableStore {
        fn save(&mut self, _key: &str, _value: &Value) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("network unreachable".to_string()))
        }

        fn load(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Unavailable("network unreachable".to_string()))
        }
    }

    fn layout_session() -> LayoutSession {
        EditSession::new(LayoutDocument::new(), Box::new(SequentialIds::new()))
    }

    #[test]
    fn test_new_session_records_initialize() {
        let session = layout_session();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().entries()[0].action, "initialize");
        assert!(!session.can_undo());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dispatch_undo_redo() {
        let mut session = layout_session();
        assert!(session.dispatch(&LayoutAction::AddSection));
        let after_add = session.document().clone();

        assert!(session.undo());
        assert_eq!(session.document(), &LayoutDocument::new());
        assert!(!session.undo());

        assert!(session.redo());
        assert_eq!(session.document(), &after_add);
        assert!(!session.redo());
    }

    #[test]
    fn test_no_op_actions_are_not_recorded() {
        let mut session = layout_session();
        let changed = session.dispatch(&LayoutAction::DeleteSection {
            section_id: "ghost".to_string(),
        });
        assert!(!changed);
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dispatch_json() {
        let mut session = layout_session();
        assert!(session.dispatch_json(r#"{ "type": "addSection" }"#).unwrap());
        assert_eq!(session.history().entries()[1].action, "add_section");

        let err = session.dispatch_json(r#"{ "type": "explode" }"#);
        assert!(matches!(err, Err(EditorError::InvalidAction(_))));
    }

    #[test]
    fn test_theme_session_labels() {
        let mut session: ThemeSession =
            EditSession::new(CustomizationDocument::reset(), Box::new(SequentialIds::new()));
        session.dispatch(&CustomizationAction::Set {
            path: "colors.primary".to_string(),
            value: "#ff0000".into(),
        });
        assert_eq!(session.history().undo_label(), Some("update_colors_primary"));
    }

    #[test]
    fn test_save_clears_dirty() {
        let mut session = layout_session();
        let mut store = MemoryStore::new();
        session.dispatch(&LayoutAction::AddSection);
        assert!(session.is_dirty());

        session.save_to(&mut store, "site").unwrap();
        assert!(!session.is_dirty());
        assert!(store.load("site").unwrap().is_some());
    }

    #[test]
    fn test_failed_save_keeps_document_and_dirty_flag() {
        let mut session = layout_session();
        session.dispatch(&LayoutAction::AddSection);
        let before = session.document().clone();
        let history_len = session.history().len();

        let result = session.save_to(&mut UnreachableStore, "site");
        assert!(matches!(result, Err(EditorError::Store(StoreError::Unavailable(_)))));
        assert_eq!(session.document(), &before);
        assert_eq!(session.history().len(), history_len);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_history_limit() {
        let mut session: LayoutSession =
            EditSession::with_history_limit(LayoutDocument::new(), Box::new(SequentialIds::new()), 3);
        for _ in 0..5 {
            session.dispatch(&LayoutAction::AddSection);
        }
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.document().sections.len(), 5);
    }
}
