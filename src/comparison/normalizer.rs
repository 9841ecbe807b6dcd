//! Comparison-ready text.
//!
//! Masking tokens and most punctuation are dropped; digits and `%` survive so
//! that a changed day count or percentage still moves the similarity score.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::classification::NOT_FOUND;

/// One masking rule applied before punctuation stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskRule {
    /// `[Provider Name]`, `[ ]`
    Placeholder,
    /// The literal `XX%` left in templates for an unnegotiated rate.
    PercentMask,
    /// Any standalone 5-character word.
    ///
    /// Redacted payer names are five characters long in the source corpus, so
    /// every such word is dropped. Ordinary words like "shall" go with them.
    /// Length is counted before lowercasing, so a word such as "İabc" that
    /// grows to five characters survives once and is masked on a second pass.
    FiveLetterWord,
    /// Runs of `█`.
    RedactionMask,
    /// `[AB]`, `[X]`
    BracketedCode,
}

impl MaskRule {
    /// Applied as one alternation, leftmost-first, in this order.
    pub const ALL: [MaskRule; 5] = [
        MaskRule::Placeholder,
        MaskRule::PercentMask,
        MaskRule::FiveLetterWord,
        MaskRule::RedactionMask,
        MaskRule::BracketedCode,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            MaskRule::Placeholder => r"\[.*?\]",
            MaskRule::PercentMask => r"XX%",
            MaskRule::FiveLetterWord => r"\b\w{5}\b",
            MaskRule::RedactionMask => r"█+",
            MaskRule::BracketedCode => r"\[\w{1,3}\]",
        }
    }

    /// Whether `token` in its entirety is removed by this rule.
    pub fn matches(&self, token: &str) -> bool {
        // Discriminants follow the order of `ALL`.
        ANCHORED_RULES[*self as usize].is_match(token)
    }
}

static MASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MaskRule::ALL
        .iter()
        .map(|rule| rule.pattern())
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("mask rule patterns are valid")
});

static ANCHORED_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MaskRule::ALL
        .iter()
        .map(|rule| {
            Regex::new(&format!("^(?:{})$", rule.pattern())).expect("mask rule patterns are valid")
        })
        .collect()
});

/// Everything except word characters, whitespace, `%`, `.` and `/`.
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s%./]").expect("punctuation pattern is valid"));

pub fn is_placeholder(token: &str) -> bool {
    MaskRule::Placeholder.matches(token)
}

pub fn is_percent_mask(token: &str) -> bool {
    MaskRule::PercentMask.matches(token)
}

pub fn is_five_letter_word(token: &str) -> bool {
    MaskRule::FiveLetterWord.matches(token)
}

pub fn is_redaction_mask(token: &str) -> bool {
    MaskRule::RedactionMask.matches(token)
}

pub fn is_bracketed_code(token: &str) -> bool {
    MaskRule::BracketedCode.matches(token)
}

/// Characters that survive the punctuation pass.
pub fn is_retained_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    !PUNCTUATION_RE.is_match(c.encode_utf8(&mut buf))
}

/// Normalize a clause for comparison.
///
/// The `NOT FOUND` marker normalizes to the empty string. Idempotent unless
/// lowercasing lengthens a word into the five-letter mask.
pub fn normalize(text: &str) -> String {
    if text == NOT_FOUND {
        return String::new();
    }

    let masked = MASK_RE.replace_all(text, " ");
    let stripped = PUNCTUATION_RE.replace_all(&masked, " ");

    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
