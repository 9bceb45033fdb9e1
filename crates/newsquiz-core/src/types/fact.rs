//! Fact type

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A sentence selected from source text as quiz-worthy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// The sentence, trimmed, exactly as it appears in the source
    pub sentence: String,
    /// Lowercased content words (stopwords removed)
    pub keywords: BTreeSet<String>,
    /// Numeric tokens in order of appearance
    pub numeric_tokens: Vec<String>,
    /// Sentence index within the source text
    pub position: usize,
}
