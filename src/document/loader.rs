use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::document::{Document, DocumentError, NamingConvention};
use crate::types::identifiers::{DocumentId, DocumentIdError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document id: {0}")]
    Id(#[from] DocumentIdError),
    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

/// Read every `.txt` file directly under `dir`, in path order.
///
/// Other extensions are ignored; PDF and OCR extraction live upstream.
pub fn load_text_documents(dir: &Path, naming: &NamingConvention) -> Result<Vec<Document>, LoadError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read(&path).map_err(io_err(&path))?;
        let id = DocumentId::from_path(&path)?;
        let document = Document::ingest(id, raw, naming)
            .map_err(|source| LoadError::Document { path: path.clone(), source })?;
        tracing::info!(document = %document.id, path = %path.display(), "read text document");
        documents.push(document);
    }

    Ok(documents)
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> LoadError {
    let path = path.to_path_buf();
    move |source| LoadError::Io { path, source }
}
