use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::{ClassificationRun, SummaryMetrics};
use crate::types::classification::{Classification, DocumentRecord};
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output path has no file name: {0}")]
    InvalidPath(PathBuf),
}

/// Summary dump for the reporting side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>, // informational only
    #[serde(flatten)]
    pub metrics: SummaryMetrics,
}

impl SummaryReport {
    pub fn new(metrics: SummaryMetrics) -> Self {
        Self {
            generated_at: Utc::now(),
            metrics,
        }
    }
}

/// Per-document results keyed by document id, viewable without re-running.
pub fn write_results(run: &ClassificationRun, path: &Path) -> Result<(), ReportError> {
    write_json_atomic(&run.documents, path)
}

pub fn read_results(path: &Path) -> Result<BTreeMap<DocumentId, DocumentRecord>, ReportError> {
    let f = fs::File::open(path)?;
    Ok(serde_json::from_reader(f)?)
}

pub fn write_summary(summary: &SummaryReport, path: &Path) -> Result<(), ReportError> {
    write_json_atomic(summary, path)
}

/// Write to a sibling temp file, sync, then rename over the target.
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<(), ReportError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ReportError::InvalidPath(path.to_path_buf()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let f = fs::File::create(&temp_path)?;
    serde_json::to_writer_pretty(&f, value)?;
    f.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Plain-text rendering of the summary for the terminal.
pub fn render_summary(metrics: &SummaryMetrics) -> String {
    let mut out = String::new();
    let rule = "=".repeat(70);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "=== FINAL CONTRACT CLASSIFICATION REPORT ===");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  - Total Contracts Processed: {}", metrics.total_contracts_processed);
    let _ = writeln!(out, "  - Total Clauses Classified: {}", metrics.total_clauses_classified);
    let _ = writeln!(out, "  - Classification Totals:");
    for classification in [Classification::Standard, Classification::NonStandard] {
        let _ = writeln!(out, "    -> {classification}: {}", metrics.count(classification));
    }
    let _ = writeln!(
        out,
        "  - Contracts with at least one Non-Standard Clause: {}",
        metrics.non_standard_contract_count
    );
    for id in &metrics.non_standard_contracts {
        let _ = writeln!(out, "    -> {id}");
    }
    if !metrics.skipped_contracts.is_empty() {
        let _ = writeln!(
            out,
            "  - Skipped (no standard template): {}",
            metrics.skipped_contracts.len()
        );
        for skipped in &metrics.skipped_contracts {
            let _ = writeln!(out, "    -> {} ({})", skipped.id, skipped.jurisdiction);
        }
    }
    out
}
