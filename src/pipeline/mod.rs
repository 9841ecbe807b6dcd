pub mod standards;
pub mod summary;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classification::ClauseClassifier;
use crate::config::{ConfigError, EngineConfig};
use crate::document::{AttributeSet, Document};
use crate::extraction::{extract_document, ClauseLocator};
use crate::types::classification::{ClassificationResult, DocumentRecord};
use crate::types::identifiers::{DocumentId, Jurisdiction};
pub use standards::{StandardClause, StandardWordingTable, TemplateConflictPolicy};
pub use summary::SummaryMetrics;

pub const MISSING_TEMPLATE_REASON: &str = "Missing Standard Template Clause.";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
    #[error(
        "Templates {first} and {second} word attribute {attribute} differently for jurisdiction {jurisdiction}"
    )]
    TemplateConflict {
        jurisdiction: Jurisdiction,
        attribute: String,
        first: DocumentId,
        second: DocumentId,
    },
}

/// A contract left unclassified because its jurisdiction has no template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedContract {
    pub id: DocumentId,
    pub jurisdiction: Jurisdiction,
}

/// Every document with its annotated attributes, plus the skipped contracts.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRun {
    pub documents: BTreeMap<DocumentId, DocumentRecord>,
    pub skipped: Vec<SkippedContract>,
}

impl ClassificationRun {
    pub fn summary(&self) -> SummaryMetrics {
        SummaryMetrics::from_run(self)
    }

    pub fn is_skipped(&self, id: &DocumentId) -> bool {
        self.skipped.iter().any(|s| &s.id == id)
    }

    /// Contracts that went through classification.
    pub fn classified_contracts(&self) -> impl Iterator<Item = (&DocumentId, &DocumentRecord)> {
        self.documents
            .iter()
            .filter(move |(id, record)| !record.is_template && !self.is_skipped(id))
    }
}

/// Extraction, standard lookup and classification over a pre-loaded document set.
///
/// Single pass, single-threaded: the standard-wording table is complete before
/// the first contract is classified.
pub struct Pipeline {
    attributes: AttributeSet,
    template_conflict: TemplateConflictPolicy,
    locator: ClauseLocator,
    classifier: ClauseClassifier,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let locator = ClauseLocator::new(&config.attributes)?;

        Ok(Self {
            locator,
            classifier: ClauseClassifier::with_rules(config.rules),
            attributes: config.attributes,
            template_conflict: config.template_conflict,
        })
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn classifier(&self) -> &ClauseClassifier {
        &self.classifier
    }

    /// Locate every attribute in every document.
    pub fn extract(
        &self,
        documents: &[Document],
    ) -> Result<BTreeMap<DocumentId, DocumentRecord>, PipelineError> {
        let mut records = BTreeMap::new();
        for document in documents {
            let record = extract_document(document, &self.attributes, &self.locator);
            if records.insert(document.id.clone(), record).is_some() {
                return Err(PipelineError::DuplicateDocumentId(document.id.to_string()));
            }
        }
        Ok(records)
    }

    /// Classify every contract attribute against its jurisdiction's template.
    pub fn classify_all(
        &self,
        mut records: BTreeMap<DocumentId, DocumentRecord>,
    ) -> Result<ClassificationRun, PipelineError> {
        let table = StandardWordingTable::build(&records, self.template_conflict)?;
        let mut skipped = Vec::new();

        for (id, record) in records.iter_mut().filter(|(_, r)| !r.is_template) {
            if !table.has_templates(&record.jurisdiction) {
                tracing::warn!(
                    contract = %id,
                    jurisdiction = %record.jurisdiction,
                    "no standard template for jurisdiction, skipping contract"
                );
                skipped.push(SkippedContract {
                    id: id.clone(),
                    jurisdiction: record.jurisdiction.clone(),
                });
                continue;
            }

            tracing::info!(contract = %id, jurisdiction = %record.jurisdiction, "classifying contract");

            for (attribute, extracted) in record.attributes.iter_mut() {
                let result = match table.lookup(&record.jurisdiction, attribute) {
                    None => ClassificationResult::non_standard(0.0, MISSING_TEMPLATE_REASON),
                    Some(standard) => {
                        extracted.standard_wording = standard.wording.clone();
                        self.classifier
                            .compare(&extracted.extracted_text, &standard.wording, attribute)
                    }
                };
                extracted.apply(result);
            }
        }

        Ok(ClassificationRun {
            documents: records,
            skipped,
        })
    }

    pub fn run(&self, documents: &[Document]) -> Result<ClassificationRun, PipelineError> {
        let records = self.extract(documents)?;
        let run = self.classify_all(records)?;
        tracing::info!(
            documents = run.documents.len(),
            skipped = run.skipped.len(),
            "classification run complete"
        );
        Ok(run)
    }
}
