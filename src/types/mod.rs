pub mod classification;
pub mod identifiers;

pub use classification::{
    Classification, ClassificationResult, DocumentRecord, ExtractedAttribute, Extraction, NOT_FOUND,
};
pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion, Jurisdiction};
