pub mod locator;

use std::collections::BTreeMap;

use crate::document::{AttributeSet, Document};
use crate::types::classification::{DocumentRecord, ExtractedAttribute};
pub use locator::{keyword_pattern, ClauseLocator, SentenceSegmenter, UnicodeSentenceSegmenter};

/// Run every attribute of `attributes` over one document.
///
/// `locator` must have been built from the same attribute set.
pub fn extract_document<G: SentenceSegmenter>(
    document: &Document,
    attributes: &AttributeSet,
    locator: &ClauseLocator<G>,
) -> DocumentRecord {
    let mut extracted = BTreeMap::new();

    for (name, extraction) in locator.locate_all(&document.text) {
        let Some(attr) = attributes.get(name) else {
            continue;
        };
        tracing::debug!(
            document = %document.id,
            attribute = name,
            found = extraction.is_found(),
            "clause located"
        );
        extracted.insert(
            name.to_string(),
            ExtractedAttribute::new(extraction, attr.standard_wording.clone()),
        );
    }

    DocumentRecord {
        jurisdiction: document.jurisdiction.clone(),
        is_template: document.is_template,
        version: document.version.clone(),
        attributes: extracted,
    }
}
