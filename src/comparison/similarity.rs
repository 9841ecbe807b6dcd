use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use super::normalizer::normalize;

/// Terms are runs of two or more word characters.
static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"));

/// Number of documents in every fitted vocabulary: the contract and the standard.
const CORPUS_SIZE: f64 = 2.0;

/// Explanation for a similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityDetails {
    pub score: f64,
    pub vocabulary_size: usize,
    pub shared_terms: usize,
}

impl SimilarityDetails {
    fn degenerate() -> Self {
        Self {
            score: 0.0,
            vocabulary_size: 0,
            shared_terms: 0,
        }
    }
}

pub trait Scorer {
    fn score(&self, contract_clause: &str, standard_clause: &str) -> SimilarityDetails;

    fn similarity(&self, contract_clause: &str, standard_clause: &str) -> f64 {
        let score = self.score(contract_clause, standard_clause).score;
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}

/// TF-IDF cosine similarity over a vocabulary fit on just the two clauses.
///
/// Each pair gets its own vector space, so a score depends only on the two
/// strings compared. The classification thresholds are calibrated against
/// this, a corpus-wide vocabulary would shift every score.
///
/// Weights: raw term count times smoothed idf, `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfCosineScorer;

impl Scorer for TfIdfCosineScorer {
    fn score(&self, contract_clause: &str, standard_clause: &str) -> SimilarityDetails {
        let contract = normalize(contract_clause);
        let standard = normalize(standard_clause);
        if contract.is_empty() || standard.is_empty() {
            return SimilarityDetails::degenerate();
        }

        let contract_terms = term_counts(&contract);
        let standard_terms = term_counts(&standard);
        if contract_terms.is_empty() || standard_terms.is_empty() {
            return SimilarityDetails::degenerate();
        }

        let vocabulary: BTreeSet<&str> = contract_terms
            .keys()
            .chain(standard_terms.keys())
            .copied()
            .collect();
        let shared_terms = contract_terms
            .keys()
            .filter(|term| standard_terms.contains_key(*term))
            .count();

        if contract_terms == standard_terms {
            return SimilarityDetails {
                score: 1.0,
                vocabulary_size: vocabulary.len(),
                shared_terms,
            };
        }

        let mut dot = 0.0;
        let mut contract_norm = 0.0;
        let mut standard_norm = 0.0;
        for term in &vocabulary {
            let tf_contract = contract_terms.get(term).copied().unwrap_or(0) as f64;
            let tf_standard = standard_terms.get(term).copied().unwrap_or(0) as f64;
            let document_frequency = (tf_contract > 0.0) as u8 + (tf_standard > 0.0) as u8;
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + f64::from(document_frequency))).ln() + 1.0;

            let w_contract = tf_contract * idf;
            let w_standard = tf_standard * idf;
            dot += w_contract * w_standard;
            contract_norm += w_contract * w_contract;
            standard_norm += w_standard * w_standard;
        }

        let score = dot / (contract_norm.sqrt() * standard_norm.sqrt());

        SimilarityDetails {
            score: score.clamp(0.0, 1.0),
            vocabulary_size: vocabulary.len(),
            shared_terms,
        }
    }
}

fn term_counts(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for term in TERM_RE.find_iter(text) {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}
