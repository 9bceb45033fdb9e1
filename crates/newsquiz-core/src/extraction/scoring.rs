//! Heuristic sentence scoring

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::text::is_stopword;

/// Weighted pattern; a sentence earns the weight once if the pattern matches anywhere
struct Signal {
    pattern: Regex,
    weight: f32,
}

fn signal(pattern: &str, weight: f32, case_insensitive: bool) -> Signal {
    let pattern = RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .expect("valid scoring pattern");
    Signal { pattern, weight }
}

static SIGNALS: Lazy<Vec<Signal>> = Lazy::new(|| {
    vec![
        // Digits and years
        signal(r"\d", 3.0, false),
        signal(r"\b(?:percent|million|billion|thousand|hundred|trillion)s?\b", 2.0, true),
        signal(
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\b",
            2.0,
            false,
        ),
        signal(
            r"\b(?:according to|study shows|research indicates|findings suggest|we propose|we show|results show)\b",
            2.0,
            true,
        ),
        // Capitalised multi-word sequence (candidate entity)
        signal(r"\b[A-Z][\p{L}]+\s+[A-Z][\p{L}]+", 2.0, false),
        signal(
            r"\b(?:increased|decreased|improved|reduced|discovered|found|rose|fell|launched|announced)\b",
            1.0,
            true,
        ),
    ]
});

/// Content words above this count earn the substance bonus
const SUBSTANTIAL_CONTENT_WORDS: usize = 5;

/// Scores sentences by how quiz-worthy they look
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    /// Weight of the position bonus for the first sentence (decays linearly)
    pub position_weight: f32,
    /// Bonus for sentences with more than five content words
    pub substance_weight: f32,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self {
            position_weight: 1.0,
            substance_weight: 1.0,
        }
    }
}

impl SentenceScorer {
    /// Score a sentence at `index` out of `total` sentences, given its word tokens
    pub fn score(&self, sentence: &str, words: &[&str], index: usize, total: usize) -> f32 {
        let mut score: f32 = SIGNALS
            .iter()
            .filter(|s| s.pattern.is_match(sentence))
            .map(|s| s.weight)
            .sum();

        let content_words = words
            .iter()
            .filter(|w| !is_stopword(w) && w.chars().all(char::is_alphanumeric))
            .count();
        if content_words > SUBSTANTIAL_CONTENT_WORDS {
            score += self.substance_weight;
        }

        if total > 0 {
            score += self.position_weight * (total - index.min(total)) as f32 / total as f32;
        }

        score
    }
}
