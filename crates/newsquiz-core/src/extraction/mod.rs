//! Fact extraction from source text

pub mod facts;
pub mod scoring;

pub use facts::{FactExtractor, ScoredFact};
pub use scoring::SentenceScorer;
