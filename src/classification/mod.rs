pub mod classifier;
pub mod rules;

pub use classifier::ClauseClassifier;
pub use rules::{
    ClauseComparison, FilingPeriodRule, Rule, RuleChain, RuleConfig, RuleOutcome, Verdict,
};
