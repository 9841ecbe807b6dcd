use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Path has no file stem: {0}")]
    MissingStem(String),
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
    #[error("Document id must not be empty")]
    Empty,
}

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(DocumentId(id))
    }

    /// Derive an id from a source file: the file name without its extension.
    ///
    /// `Contracts/TN_Contract3_Redacted.txt` becomes `TN_Contract3_Redacted`.
    /// Case is preserved because the jurisdiction and template markers live
    /// in the name.
    pub fn from_path(source: &Path) -> Result<Self, DocumentIdError> {
        let stem = source
            .file_stem()
            .ok_or_else(|| DocumentIdError::MissingStem(source.display().to_string()))?;
        let stem = stem.to_str().ok_or(DocumentIdError::InvalidUtf8)?;
        Self::new(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grouping key that selects which template supplies the standard wording.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jurisdiction(String);

impl Jurisdiction {
    pub fn new(key: impl Into<String>) -> Self {
        Jurisdiction(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
