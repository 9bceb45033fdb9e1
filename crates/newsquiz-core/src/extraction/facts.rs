//! Key-fact selection
//!
//! Splits text into sentences, drops fragments and run-ons, scores the rest with
//! [`SentenceScorer`] and keeps the best ones in document order.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::text::{is_stopword, numeric_tokens, TextSegmenter, UnicodeSegmenter};
use crate::types::Fact;

use super::scoring::SentenceScorer;

/// A qualifying sentence with its heuristic score
#[derive(Debug, Clone)]
pub struct ScoredFact {
    pub fact: Fact,
    pub score: f32,
}

/// Selects quiz-worthy sentences from plain text
#[derive(Clone)]
pub struct FactExtractor {
    segmenter: Arc<dyn TextSegmenter>,
    scorer: SentenceScorer,
    /// Sentences with fewer word tokens are fragments
    min_words: usize,
    /// Sentences with more word tokens are run-ons
    max_words: usize,
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new(Arc::new(UnicodeSegmenter))
    }
}

impl std::fmt::Debug for FactExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactExtractor")
            .field("scorer", &self.scorer)
            .field("min_words", &self.min_words)
            .field("max_words", &self.max_words)
            .finish()
    }
}

impl FactExtractor {
    /// Create an extractor with the given segmenter and default limits (4..=60 words)
    pub fn new(segmenter: Arc<dyn TextSegmenter>) -> Self {
        Self {
            segmenter,
            scorer: SentenceScorer::default(),
            min_words: 4,
            max_words: 60,
        }
    }

    /// Set the accepted sentence length range in word tokens
    pub fn with_word_limits(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words.max(min_words);
        self
    }

    /// Replace the sentence scorer
    pub fn with_scorer(mut self, scorer: SentenceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The segmenter used for sentences and words
    pub fn segmenter(&self) -> &dyn TextSegmenter {
        self.segmenter.as_ref()
    }

    /// Every qualifying sentence, best first (ties keep document order)
    pub fn rank(&self, text: &str) -> Vec<ScoredFact> {
        let sentences = self.segmenter.sentences(text);
        let total = sentences.len();

        let mut ranked: Vec<ScoredFact> = sentences
            .into_iter()
            .enumerate()
            .filter_map(|(position, sentence)| {
                let words = self.segmenter.words(sentence);
                if words.len() < self.min_words || words.len() > self.max_words {
                    return None;
                }
                let score = self.scorer.score(sentence, &words, position, total);
                Some(ScoredFact {
                    fact: build_fact(sentence, &words, position),
                    score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.fact.position.cmp(&b.fact.position))
        });
        ranked
    }

    /// Up to `k` best facts, returned in document order
    pub fn extract(&self, text: &str, k: usize) -> Vec<Fact> {
        let mut facts: Vec<Fact> = self
            .rank(text)
            .into_iter()
            .take(k)
            .map(|scored| scored.fact)
            .collect();
        facts.sort_by_key(|f| f.position);
        tracing::debug!("Extracted {} facts (requested {})", facts.len(), k);
        facts
    }
}

fn build_fact(sentence: &str, words: &[&str], position: usize) -> Fact {
    let keywords: BTreeSet<String> = words
        .iter()
        .filter(|w| w.chars().count() >= 3 && w.chars().all(char::is_alphanumeric) && !is_stopword(w))
        .map(|w| w.to_lowercase())
        .collect();

    Fact {
        sentence: sentence.to_string(),
        keywords,
        numeric_tokens: numeric_tokens(sentence),
        position,
    }
}
