pub mod normalizer;
pub mod similarity;

pub use normalizer::{normalize, MaskRule};
pub use similarity::{Scorer, SimilarityDetails, TfIdfCosineScorer};
