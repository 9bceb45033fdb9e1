//! Maskable candidate tokens
//!
//! A candidate is a span of a sentence that can be blanked out to form a question:
//! a number, a capitalised (possibly multi-word) name, or a long content word.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::is_stopword;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*%?").expect("valid number pattern"));

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][\p{L}'’-]*(?:(?:\s+(?:of|the|de|for))?\s+[A-Z][\p{L}'’-]*)*")
        .expect("valid entity pattern")
});

/// Minimum length (in chars) of a plain word to count as a salient keyword
const MIN_KEYWORD_CHARS: usize = 6;

/// Kind of candidate. Declaration order is masking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Digits, decimals, percentages
    Number,
    /// Capitalised name or multi-word proper noun
    Entity,
    /// Long content word
    Keyword,
}

/// A maskable token within a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Token text exactly as it appears
    pub text: String,
    /// Token kind
    pub kind: CandidateKind,
    /// Byte offset in the sentence
    pub offset: usize,
}

impl Candidate {
    fn new(text: impl Into<String>, kind: CandidateKind, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            offset,
        }
    }

    /// Byte range covered in the source sentence
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// Case-insensitive comparison key
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Numeric tokens of a sentence in order of appearance
pub fn numeric_tokens(sentence: &str) -> Vec<String> {
    number_spans(sentence)
        .into_iter()
        .map(|(start, end)| sentence[start..end].to_string())
        .collect()
}

/// Extract the maskable candidates of a sentence
///
/// The result is ordered by position and has no two entries with the same text
/// (compared case-insensitively).
pub fn extract_candidates(sentence: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = number_spans(sentence)
        .into_iter()
        .map(|(start, end)| Candidate::new(&sentence[start..end], CandidateKind::Number, start))
        .collect();

    for m in ENTITY_RE.find_iter(sentence) {
        if let Some((offset, text)) = trim_entity(m.as_str(), m.start()) {
            candidates.push(Candidate::new(text, CandidateKind::Entity, offset));
        }
    }

    let covered: Vec<std::ops::Range<usize>> = candidates.iter().map(Candidate::span).collect();
    for (offset, word) in sentence.unicode_word_indices() {
        let end = offset + word.len();
        if covered.iter().any(|r| offset < r.end && end > r.start) {
            continue;
        }
        if word.chars().count() >= MIN_KEYWORD_CHARS
            && word.chars().all(char::is_alphabetic)
            && !is_stopword(word)
        {
            candidates.push(Candidate::new(word, CandidateKind::Keyword, offset));
        }
    }

    candidates.sort_by_key(|c| c.offset);
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.key()));
    candidates
}

fn number_spans(sentence: &str) -> Vec<(usize, usize)> {
    NUMBER_RE
        .find_iter(sentence)
        // "3D", "5G": digits glued to letters are not quantities
        .filter(|m| {
            !sentence[m.end()..]
                .chars()
                .next()
                .is_some_and(char::is_alphabetic)
        })
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Strip leading stopwords ("The Eiffel Tower") and possessives, and reject
/// capitalised words that are only capitalised because they start the sentence.
fn trim_entity(raw: &str, start: usize) -> Option<(usize, &str)> {
    let mut text = raw;
    while let Some((first, rest)) = text.split_once(char::is_whitespace) {
        if !is_stopword(first) {
            break;
        }
        text = rest.trim_start();
    }
    let offset = start + (raw.len() - text.len());

    let text = text
        .strip_suffix("'s")
        .or_else(|| text.strip_suffix("’s"))
        .unwrap_or(text)
        .trim_end_matches(['-', '\'', '’']);

    let single_word = !text.contains(char::is_whitespace);
    if single_word {
        let is_acronym = text.len() >= 2 && text.chars().all(|c| c.is_uppercase());
        if text.chars().count() <= 2 && !is_acronym {
            return None;
        }
        if is_stopword(text) {
            return None;
        }
        if offset == 0 && !is_acronym {
            return None;
        }
    }
    Some((offset, text))
}
