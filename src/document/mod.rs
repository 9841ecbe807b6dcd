pub mod attribute;
pub mod document;
pub mod loader;

pub use crate::types::identifiers::{DocumentId, DocumentVersion, Jurisdiction};
pub use attribute::{builtin_attributes, AttributeDefinition, AttributeError, AttributeSet};
pub use document::{Document, DocumentError, NamingConvention};
pub use loader::{load_text_documents, LoadError};
