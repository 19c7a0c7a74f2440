pub mod export;
pub mod init;
pub mod layout;
pub mod script;
pub mod suggest;
pub mod theme;
pub mod upload;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use layout::{layout, LayoutArgs};
pub use suggest::{suggest, SuggestArgs};
pub use theme::{theme, ThemeArgs};
pub use upload::{validate_upload, ValidateUploadArgs};
