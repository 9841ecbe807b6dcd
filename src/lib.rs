//! Deterministic contract clause extraction and classification.
//!
//! `clause-core` locates a fixed set of named clauses in contract text,
//! compares each against the wording of its jurisdiction's template with a
//! per-pair TF-IDF cosine score, and settles Standard / Non-Standard through an
//! ordered chain of override rules. Identical inputs always produce identical
//! verdicts.
//!
//! Text acquisition (OCR, PDF) happens upstream; the crate starts from
//! document text.

pub mod classification;
pub mod comparison;
pub mod config;
pub mod document;
pub mod extraction;
pub mod pipeline;
pub mod report;
pub mod types;
