pub mod config;
pub mod error;
pub mod result;

pub use config::{ConfigProvider, DefaultsProvider, EditorConfig, EnvProvider, FileProvider};
pub use error::{BoardEditorError, Cardinality};
pub use result::BoardEditorResult;
