use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentVersion, Jurisdiction};

/// Marker recorded when no sentence of a document matched an attribute.
pub const NOT_FOUND: &str = "NOT FOUND";

/// Outcome of locating one attribute's clause in a document.
///
/// Serializes as the matched sentence, or as the literal `"NOT FOUND"`.
/// `NotFound` is distinct from an empty match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Extraction {
    Found(String),
    NotFound,
}

impl Extraction {
    pub fn as_str(&self) -> &str {
        match self {
            Extraction::Found(text) => text,
            Extraction::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn found(&self) -> Option<&str> {
        match self {
            Extraction::Found(text) => Some(text),
            Extraction::NotFound => None,
        }
    }
}

impl From<String> for Extraction {
    fn from(text: String) -> Self {
        if text == NOT_FOUND {
            Extraction::NotFound
        } else {
            Extraction::Found(text)
        }
    }
}

impl From<Extraction> for String {
    fn from(extraction: Extraction) -> Self {
        match extraction {
            Extraction::Found(text) => text,
            Extraction::NotFound => NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Non-Standard")]
    NonStandard,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::NonStandard => "Non-Standard",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one contract clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classification: Classification,
    /// Cosine similarity in `[0.0, 1.0]`; `0.0` when the verdict never reached scoring.
    pub score: f64,
    pub reason: String,
}

impl ClassificationResult {
    pub fn non_standard(score: f64, reason: impl Into<String>) -> Self {
        Self {
            classification: Classification::NonStandard,
            score,
            reason: reason.into(),
        }
    }

    pub fn standard(score: f64, reason: impl Into<String>) -> Self {
        Self {
            classification: Classification::Standard,
            score,
            reason: reason.into(),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.classification == Classification::Standard
    }
}

/// One attribute of one document, as handed to the reporting layer.
///
/// The classification fields stay empty for template documents and for
/// contracts that were skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAttribute {
    pub extracted_text: Extraction,
    /// Fallback wording from the attribute definition until a jurisdiction
    /// template supplies the wording actually compared against.
    pub standard_wording: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ExtractedAttribute {
    pub fn new(extracted_text: Extraction, standard_wording: impl Into<String>) -> Self {
        Self {
            extracted_text,
            standard_wording: standard_wording.into(),
            classification: None,
            score: None,
            reason: None,
        }
    }

    pub fn apply(&mut self, result: ClassificationResult) {
        self.classification = Some(result.classification);
        self.score = Some(result.score);
        self.reason = Some(result.reason);
    }

    pub fn result(&self) -> Option<ClassificationResult> {
        Some(ClassificationResult {
            classification: self.classification?,
            score: self.score?,
            reason: self.reason.clone()?,
        })
    }
}

/// Per-document entry of the results dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub jurisdiction: Jurisdiction,
    pub is_template: bool,
    pub version: DocumentVersion,
    pub attributes: BTreeMap<String, ExtractedAttribute>,
}

impl DocumentRecord {
    pub fn has_non_standard(&self) -> bool {
        self.attributes
            .values()
            .any(|attr| attr.classification == Some(Classification::NonStandard))
    }
}
