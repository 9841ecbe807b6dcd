use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::classification::DocumentRecord;
use crate::types::identifiers::{DocumentId, Jurisdiction};

use super::PipelineError;

/// What to do when two templates of one jurisdiction word an attribute differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateConflictPolicy {
    /// The template with the greater document id wins. Logged as a warning.
    #[default]
    LastWriteWins,
    /// Fail before any contract is classified.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardClause {
    pub wording: String,
    pub template: DocumentId,
}

/// Jurisdiction → attribute → template wording.
///
/// Built once from template documents and only read afterwards. Templates are
/// visited in document-id order, so "last" is deterministic.
#[derive(Debug, Clone, Default)]
pub struct StandardWordingTable {
    jurisdictions: BTreeSet<Jurisdiction>,
    wordings: BTreeMap<Jurisdiction, BTreeMap<String, StandardClause>>,
}

impl StandardWordingTable {
    pub fn build(
        records: &BTreeMap<DocumentId, DocumentRecord>,
        policy: TemplateConflictPolicy,
    ) -> Result<Self, PipelineError> {
        let mut table = StandardWordingTable::default();

        for (id, record) in records.iter().filter(|(_, r)| r.is_template) {
            table.jurisdictions.insert(record.jurisdiction.clone());
            let wordings = table
                .wordings
                .entry(record.jurisdiction.clone())
                .or_default();

            for (attribute, extracted) in &record.attributes {
                // A template missing the clause supplies nothing for it.
                let Some(wording) = extracted.extracted_text.found() else {
                    continue;
                };

                if let Some(existing) = wordings.get(attribute) {
                    if existing.wording != wording {
                        match policy {
                            TemplateConflictPolicy::Reject => {
                                return Err(PipelineError::TemplateConflict {
                                    jurisdiction: record.jurisdiction.clone(),
                                    attribute: attribute.clone(),
                                    first: existing.template.clone(),
                                    second: id.clone(),
                                })
                            }
                            TemplateConflictPolicy::LastWriteWins => {
                                tracing::warn!(
                                    jurisdiction = %record.jurisdiction,
                                    attribute = %attribute,
                                    replaced = %existing.template,
                                    template = %id,
                                    "template wording overwritten"
                                );
                            }
                        }
                    }
                }

                wordings.insert(
                    attribute.clone(),
                    StandardClause {
                        wording: wording.to_string(),
                        template: id.clone(),
                    },
                );
            }
        }

        Ok(table)
    }

    /// Whether any template document exists for the jurisdiction.
    pub fn has_templates(&self, jurisdiction: &Jurisdiction) -> bool {
        self.jurisdictions.contains(jurisdiction)
    }

    pub fn lookup(&self, jurisdiction: &Jurisdiction, attribute: &str) -> Option<&StandardClause> {
        self.wordings.get(jurisdiction)?.get(attribute)
    }

    pub fn jurisdictions(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.jurisdictions.iter()
    }
}
