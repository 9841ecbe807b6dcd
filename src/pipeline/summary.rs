use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::classification::Classification;
use crate::types::identifiers::DocumentId;

use super::{ClassificationRun, SkippedContract};

/// Aggregate counts over a finished run.
///
/// Skipped contracts are listed but contribute nothing to the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_contracts_processed: usize,
    pub total_clauses_classified: usize,
    pub classification_totals: BTreeMap<Classification, usize>,
    pub non_standard_contract_count: usize,
    pub non_standard_contracts: Vec<DocumentId>,
    pub skipped_contracts: Vec<SkippedContract>,
}

impl SummaryMetrics {
    pub fn from_run(run: &ClassificationRun) -> Self {
        let mut classification_totals = BTreeMap::from([
            (Classification::Standard, 0),
            (Classification::NonStandard, 0),
        ]);
        let mut total_contracts_processed = 0;
        let mut non_standard_contracts = Vec::new();

        for (id, record) in run.classified_contracts() {
            total_contracts_processed += 1;
            for classification in record.attributes.values().filter_map(|a| a.classification) {
                *classification_totals.entry(classification).or_insert(0) += 1;
            }
            if record.has_non_standard() {
                non_standard_contracts.push(id.clone());
            }
        }

        // BTreeMap iteration already yields ids in order.
        debug_assert!(non_standard_contracts.windows(2).all(|w| w[0] <= w[1]));

        SummaryMetrics {
            total_contracts_processed,
            total_clauses_classified: classification_totals.values().sum(),
            non_standard_contract_count: non_standard_contracts.len(),
            classification_totals,
            non_standard_contracts,
            skipped_contracts: run.skipped.clone(),
        }
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.classification_totals
            .get(&classification)
            .copied()
            .unwrap_or(0)
    }
}
