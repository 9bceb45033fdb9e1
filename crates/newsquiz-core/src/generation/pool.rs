//! Document-wide candidate pool used for distractors and entity swaps

use std::collections::HashSet;

use crate::text::{extract_candidates, Candidate, CandidateKind, TextSegmenter};

/// Every candidate seen in a document, deduplicated, in document order
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Collect candidates from every sentence of `text`
    pub fn from_text(text: &str, segmenter: &dyn TextSegmenter) -> Self {
        let mut seen = HashSet::new();
        let candidates = segmenter
            .sentences(text)
            .into_iter()
            .flat_map(extract_candidates)
            .filter(|c| seen.insert(c.key()))
            .collect();
        Self { candidates }
    }

    /// Candidates of one kind
    pub fn of_kind(&self, kind: CandidateKind) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(move |c| c.kind == kind)
    }

    /// Number of pooled candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::UnicodeSegmenter;

    #[test]
    fn test_pool_spans_sentences() {
        let pool = CandidatePool::from_text(
            "Paris hosted the 1900 games. Later, London and Paris hosted them in 1908.",
            &UnicodeSegmenter,
        );
        let entities: Vec<&str> = pool.of_kind(CandidateKind::Entity).map(|c| c.text.as_str()).collect();
        let numbers: Vec<&str> = pool.of_kind(CandidateKind::Number).map(|c| c.text.as_str()).collect();
        assert_eq!(entities, vec!["London", "Paris"]);
        assert_eq!(numbers, vec!["1900", "1908"]);
    }
}
