//! # Storefront Editor
//!
//! Editing state core for the storefront page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: drag-and-drop composer, theme panel     │
//! └─────────────────────────────────────────────┘
//!                     ↓ actions (JSON or typed)
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - pure reducers over immutable documents   │
//! │  - snapshot history with undo/redo          │
//! │  - injected id generation                   │
//! └─────────────────────────────────────────────┘
//!                     ↓ whole-document upserts
//! ┌─────────────────────────────────────────────┐
//! │ store: versioned JSON envelopes             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every operation returns a new document
//! 2. **No error path in editing**: stale ids and bad indexes are no-ops
//! 3. **Single editor**: one actor, synchronous, last write wins on save
//! 4. **Boundary failures stay at the boundary**: a failed save never
//!    touches editing state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_editor::{EditSession, LayoutAction, LayoutDocument, TimestampIds};
//!
//! let mut session = EditSession::new(LayoutDocument::new(), Box::new(TimestampIds::new()));
//! session.dispatch(&LayoutAction::AddSection);
//!
//! let section_id = session.document().sections[0].id.clone();
//! session.dispatch(&LayoutAction::AddComponent {
//!     section_id,
//!     component_type: "text".to_string(),
//! });
//!
//! session.undo();
//! session.save_to(&mut store, "site")?;
//! ```

mod actions;
mod component;
mod document;
mod errors;
mod history;
mod ids;
mod persistence;
mod reducer;
mod session;
mod store;

pub use actions::{CustomizationAction, LayoutAction};
pub use component::{
    ButtonContent, CarouselContent, Component, ComponentContent, FormContent, FormField,
    GalleryContent, HeadingContent, ImageContent, ProductCardContent, Styles, TextContent,
    VideoContent, KNOWN_TYPES,
};
pub use document::{LayoutDocument, Section};
pub use errors::{EditorError, StoreError};
pub use history::{History, HistoryEntry, DEFAULT_MAX_ENTRIES};
pub use ids::{IdGenerator, SequentialIds, TimestampIds};
pub use persistence::{
    decode, encode, load_document, save_document, Persisted, SavedDocument,
    CURRENT_SCHEMA_VERSION,
};
pub use reducer::Reducer;
pub use session::{EditSession, LayoutSession, ThemeSession};
pub use store::{DocumentStore, FileStore, MemoryStore};

// Re-export theme types for convenience
pub use storefront_theme::{Category, CustomizationDocument, LeafValue};
