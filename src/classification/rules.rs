//! Override rules layered on top of the similarity score.
//!
//! Rules run in the fixed order of [`Rule::ORDER`]. A rule either decides the
//! verdict, annotates the running reason, or passes. Anything still undecided
//! after the last rule is Non-Standard.

use serde::{Deserialize, Serialize};

use crate::types::classification::{ClassificationResult, Extraction};

pub const DEFAULT_REASON: &str = "Initial classification or low base similarity.";
pub const NOT_EXTRACTED_REASON: &str = "Clause was not successfully extracted from the document.";
pub const FILING_PERIOD_REASON: &str =
    "Structural Change: Filing period mismatch. High-risk value deviation (e.g., 365 vs. 120 days).";

/// Thresholds and phrase lists the rules read. Defaults are the calibrated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Scores at or above this are Standard outright.
    pub semantic_threshold: f64,
    /// Floor for promoting value-substitution attributes to Standard.
    pub substitution_floor: f64,
    pub filing_period: FilingPeriodRule,
    /// Phrases that signal an added condition or carve-out. Matched case-insensitively.
    pub conditional_phrases: Vec<String>,
    /// Attribute-name substrings for which a numeric substitution is tolerated.
    pub substitution_markers: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            semantic_threshold: 0.88,
            substitution_floor: 0.70,
            filing_period: FilingPeriodRule::default(),
            conditional_phrases: vec!["except for".into(), "notwithstanding".into()],
            substitution_markers: vec!["Fee Schedule".into(), "Timely Filing".into()],
        }
    }
}

/// Day-count check for filing-deadline attributes. Phrases match case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilingPeriodRule {
    /// Attribute-name substring the rule is scoped to.
    pub attribute_marker: String,
    /// Out-of-policy periods. A phrase the standard itself uses is not a deviation.
    pub deviant_phrases: Vec<String>,
    /// Presence of any of these clears the contract.
    pub compliant_phrases: Vec<String>,
}

impl Default for FilingPeriodRule {
    fn default() -> Self {
        Self {
            attribute_marker: "Timely Filing".into(),
            deviant_phrases: vec![
                "three hundred sixty-five (365) days".into(),
                "365 days".into(),
                "ninety (90) days".into(),
                "90 days".into(),
            ],
            compliant_phrases: vec!["one hundred twenty (120) days".into()],
        }
    }
}

/// Inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct ClauseComparison<'a> {
    pub contract: &'a Extraction,
    pub standard: &'a str,
    pub score: f64,
    pub attribute_name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MissingExtraction,
    FilingPeriodDeviation,
    SemanticThreshold,
    ConditionalLanguage,
    ValueSubstitution,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Decided(ClassificationResult),
    Annotated(String),
    Pass,
}

impl Rule {
    pub const ORDER: [Rule; 5] = [
        Rule::MissingExtraction,
        Rule::FilingPeriodDeviation,
        Rule::SemanticThreshold,
        Rule::ConditionalLanguage,
        Rule::ValueSubstitution,
    ];

    pub fn evaluate(&self, input: &ClauseComparison<'_>, config: &RuleConfig) -> RuleOutcome {
        match self {
            Rule::MissingExtraction => match input.contract {
                Extraction::NotFound => {
                    RuleOutcome::Decided(ClassificationResult::non_standard(0.0, NOT_EXTRACTED_REASON))
                }
                Extraction::Found(_) => RuleOutcome::Pass,
            },
            Rule::FilingPeriodDeviation => {
                let contract = input.contract.as_str();
                if config.filing_period.applies_to(input.attribute_name)
                    && config.filing_period.deviates(contract, input.standard)
                {
                    RuleOutcome::Decided(ClassificationResult::non_standard(
                        input.score,
                        FILING_PERIOD_REASON,
                    ))
                } else {
                    RuleOutcome::Pass
                }
            }
            Rule::SemanticThreshold => {
                if input.score >= config.semantic_threshold {
                    RuleOutcome::Decided(ClassificationResult::standard(
                        input.score,
                        format!(
                            "High structural and value alignment ({:.2}). Passed Semantic Check.",
                            input.score
                        ),
                    ))
                } else {
                    RuleOutcome::Pass
                }
            }
            Rule::ConditionalLanguage => {
                match added_conditional(input.contract.as_str(), input.standard, &config.conditional_phrases) {
                    Some(phrase) => RuleOutcome::Annotated(format!(
                        "Detected structural/conditional addition: '{phrase}' found in contract."
                    )),
                    None => RuleOutcome::Pass,
                }
            }
            Rule::ValueSubstitution => {
                if input.score >= config.substitution_floor
                    && tolerates_substitution(input.attribute_name, &config.substitution_markers)
                {
                    RuleOutcome::Decided(ClassificationResult::standard(
                        input.score,
                        format!(
                            "Passed Value Substitution (moderate similarity, core structure intact). Score: {:.2}.",
                            input.score
                        ),
                    ))
                } else {
                    RuleOutcome::Pass
                }
            }
        }
    }
}

impl FilingPeriodRule {
    pub fn applies_to(&self, attribute_name: &str) -> bool {
        attribute_name.contains(self.attribute_marker.as_str())
    }

    /// The contract states an out-of-policy period the standard does not,
    /// is not the standard verbatim, and carries no compliant period.
    pub fn deviates(&self, contract: &str, standard: &str) -> bool {
        let states_deviant_period = self
            .deviant_phrases
            .iter()
            .any(|p| contract.contains(p.as_str()) && !standard.contains(p.as_str()));
        if !states_deviant_period {
            return false;
        }

        let verbatim = contract.trim() == standard.trim();
        let compliant = self
            .compliant_phrases
            .iter()
            .any(|p| contract.contains(p.as_str()));
        !(verbatim || compliant)
    }
}

/// First conditional phrase present in the contract but absent from the
/// standard. All three sides are compared lowercased.
pub fn added_conditional<'p>(contract: &str, standard: &str, phrases: &'p [String]) -> Option<&'p str> {
    let contract = contract.to_lowercase();
    let standard = standard.to_lowercase();
    phrases.iter().map(String::as_str).find(|phrase| {
        let phrase = phrase.to_lowercase();
        contract.contains(&phrase) && !standard.contains(&phrase)
    })
}

pub fn tolerates_substitution(attribute_name: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| attribute_name.contains(m.as_str()))
}

/// Result of running the chain, with the rule that settled it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub result: ClassificationResult,
    /// `None` when no rule decided and the Non-Standard default applied.
    pub decided_by: Option<Rule>,
}

/// Ordered rules plus the configuration they read.
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<Rule>,
    config: RuleConfig,
}

impl RuleChain {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            rules: Rule::ORDER.to_vec(),
            config,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn evaluate(&self, input: &ClauseComparison<'_>) -> Verdict {
        let mut reason = DEFAULT_REASON.to_string();

        for rule in &self.rules {
            match rule.evaluate(input, &self.config) {
                RuleOutcome::Decided(result) => {
                    return Verdict {
                        result,
                        decided_by: Some(*rule),
                    }
                }
                RuleOutcome::Annotated(note) => reason = note,
                RuleOutcome::Pass => {}
            }
        }

        Verdict {
            result: ClassificationResult::non_standard(input.score, reason),
            decided_by: None,
        }
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}
