//! Text normalization, scoring and analysis module

pub mod normalizer;
pub mod similarity;
pub mod keyword_matcher;
pub mod aggregator;
pub mod analyzer;

pub use aggregator::{aggregate, MatchResult};
pub use normalizer::{normalize, NormalizedText};
