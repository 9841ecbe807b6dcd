use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion, Jurisdiction};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// How jurisdiction and template status are read off a document id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// The jurisdiction is the id's leading token before this delimiter.
    pub jurisdiction_delimiter: char,
    /// Ids containing this marker are template documents.
    pub template_marker: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            jurisdiction_delimiter: '_',
            template_marker: "Template".into(),
        }
    }
}

impl NamingConvention {
    pub fn jurisdiction_of(&self, id: &DocumentId) -> Jurisdiction {
        let key = id
            .as_str()
            .split(self.jurisdiction_delimiter)
            .next()
            .unwrap_or_default();
        Jurisdiction::new(key)
    }

    pub fn is_template(&self, id: &DocumentId) -> bool {
        id.as_str().contains(self.template_marker.as_str())
    }
}

/// A contract or template, text already acquired upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub jurisdiction: Jurisdiction,
    pub is_template: bool,
    pub version: DocumentVersion,
    pub text: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// Whitespace runs (including newlines left by text extraction) are
    /// collapsed to single spaces before the version is computed, so two
    /// extractions of the same document differing only in layout share a
    /// version.
    pub fn ingest(
        id: DocumentId,
        raw_content: Vec<u8>,
        naming: &NamingConvention,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;
        Ok(Self::from_text(id, &content, naming))
    }

    pub fn from_text(id: DocumentId, text: &str, naming: &NamingConvention) -> Self {
        let text = collapse_whitespace(text);
        let version = DocumentVersion::from_content(text.as_bytes());

        Document {
            jurisdiction: naming.jurisdiction_of(&id),
            is_template: naming.is_template(&id),
            id,
            version,
            text,
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
