//! # Storefront Theme
//!
//! Theme customization for the storefront builder.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ customization: category.key → scalar leaves  │
//! │  - defaults for every schema leaf            │
//! │  - set / merge_category / reset (pure)       │
//! └──────────────────────────────────────────────┘
//!          ↓                 ↓               ↓
//!     presets            css vars         export bundle
//! ```
//!
//! Upload validation and suggestion chips sit at the boundary: they turn
//! untrusted text (admin forms, assistant replies) into typed values before
//! anything reaches an editing session.

pub mod css;
pub mod customization;
mod error;
pub mod export;
pub mod presets;
pub mod suggestions;
pub mod upload;

pub use customization::{
    defaults, schema_paths, Category, CategoryValues, CustomizationDocument, LeafPath, LeafValue,
};
pub use error::{ThemeError, ThemeResult};
pub use export::{ExportBundle, TemplateRef};
pub use presets::{apply_preset, find_preset, Preset};
pub use upload::{ThemePackage, ThemeUploadForm, UploadError};
