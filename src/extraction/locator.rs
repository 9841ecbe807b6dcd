use regex::{Regex, RegexBuilder};
use unicode_segmentation::UnicodeSegmentation;

use crate::document::attribute::{AttributeDefinition, AttributeSet};
use crate::types::classification::Extraction;

/// Splits document text into sentences, in document order.
pub trait SentenceSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Unicode (UAX #29) sentence boundaries, trimmed, empty sentences dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Case-insensitive alternation of the literal keywords, in configured order.
pub fn keyword_pattern(attribute: &AttributeDefinition) -> Result<Regex, regex::Error> {
    let alternation = attribute
        .keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&format!("({alternation})"))
        .case_insensitive(true)
        .build()
}

#[derive(Debug)]
struct CompiledAttribute {
    name: String,
    pattern: Regex,
}

/// Finds the first sentence mentioning any of an attribute's keywords.
///
/// Patterns are compiled once for the whole attribute set.
#[derive(Debug)]
pub struct ClauseLocator<G = UnicodeSentenceSegmenter> {
    segmenter: G,
    compiled: Vec<CompiledAttribute>,
}

impl ClauseLocator<UnicodeSentenceSegmenter> {
    pub fn new(attributes: &AttributeSet) -> Result<Self, regex::Error> {
        Self::with_segmenter(attributes, UnicodeSentenceSegmenter)
    }
}

impl<G: SentenceSegmenter> ClauseLocator<G> {
    pub fn with_segmenter(attributes: &AttributeSet, segmenter: G) -> Result<Self, regex::Error> {
        let compiled = attributes
            .iter()
            .map(|attr| {
                Ok(CompiledAttribute {
                    name: attr.name.clone(),
                    pattern: keyword_pattern(attr)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            segmenter,
            compiled,
        })
    }

    pub fn segment<'a>(&self, full_text: &'a str) -> Vec<&'a str> {
        self.segmenter.sentences(full_text)
    }

    /// Locate `attribute` in `full_text`.
    ///
    /// Attributes outside the set the locator was built for are compiled on
    /// the fly.
    pub fn locate(&self, full_text: &str, attribute: &AttributeDefinition) -> Extraction {
        let sentences = self.segment(full_text);
        match self.compiled.iter().find(|c| c.name == attribute.name) {
            Some(compiled) => first_match(&sentences, &compiled.pattern),
            None => match keyword_pattern(attribute) {
                Ok(pattern) => first_match(&sentences, &pattern),
                Err(err) => {
                    tracing::warn!(attribute = %attribute.name, error = %err, "keyword pattern failed to compile");
                    Extraction::NotFound
                }
            },
        }
    }

    /// Locate every compiled attribute against one segmentation of the text.
    pub fn locate_all(&self, full_text: &str) -> Vec<(&str, Extraction)> {
        let sentences = self.segment(full_text);
        self.compiled
            .iter()
            .map(|c| (c.name.as_str(), first_match(&sentences, &c.pattern)))
            .collect()
    }
}

fn first_match(sentences: &[&str], pattern: &Regex) -> Extraction {
    sentences
        .iter()
        .find(|sentence| pattern.is_match(sentence))
        .map(|sentence| Extraction::Found(sentence.to_string()))
        .unwrap_or(Extraction::NotFound)
}
