use crate::comparison::similarity::{Scorer, TfIdfCosineScorer};
use crate::types::classification::{ClassificationResult, Extraction};

use super::rules::{ClauseComparison, RuleChain, RuleConfig, Verdict};

pub struct ClauseClassifier<S = TfIdfCosineScorer> {
    scorer: S,
    chain: RuleChain,
}

impl Default for ClauseClassifier<TfIdfCosineScorer> {
    fn default() -> Self {
        Self {
            scorer: TfIdfCosineScorer,
            chain: RuleChain::default(),
        }
    }
}

impl ClauseClassifier<TfIdfCosineScorer> {
    pub fn with_rules(config: RuleConfig) -> Self {
        Self::new(TfIdfCosineScorer, config)
    }
}

impl<S: Scorer> ClauseClassifier<S> {
    pub fn new(scorer: S, config: RuleConfig) -> Self {
        Self {
            scorer,
            chain: RuleChain::new(config),
        }
    }

    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }

    /// Similarity between a located clause and its standard. `NotFound` scores 0.0.
    pub fn similarity(&self, contract: &Extraction, standard: &str) -> f64 {
        self.scorer.similarity(contract.as_str(), standard)
    }

    /// Apply the rule chain to an already scored pair.
    pub fn classify(
        &self,
        contract: &Extraction,
        standard: &str,
        score: f64,
        attribute_name: &str,
    ) -> ClassificationResult {
        self.verdict(contract, standard, score, attribute_name).result
    }

    pub fn verdict(
        &self,
        contract: &Extraction,
        standard: &str,
        score: f64,
        attribute_name: &str,
    ) -> Verdict {
        self.chain.evaluate(&ClauseComparison {
            contract,
            standard,
            score,
            attribute_name,
        })
    }

    /// Score then classify.
    pub fn compare(
        &self,
        contract: &Extraction,
        standard: &str,
        attribute_name: &str,
    ) -> ClassificationResult {
        let score = self.similarity(contract, standard);
        let verdict = self.verdict(contract, standard, score, attribute_name);
        tracing::debug!(
            attribute = attribute_name,
            score,
            classification = %verdict.result.classification,
            decided_by = ?verdict.decided_by,
            "clause classified"
        );
        verdict.result
    }
}
