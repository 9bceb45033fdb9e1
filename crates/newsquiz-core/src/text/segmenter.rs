//! Sentence and word segmentation
//!
//! Segmentation sits behind [`TextSegmenter`] so the extractor can be driven by a
//! deterministic stub in tests instead of a data-backed tokenizer.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and sentences into word tokens
pub trait TextSegmenter: Send + Sync {
    /// Split text into trimmed, non-empty sentences in document order
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split a sentence into word tokens (punctuation dropped)
    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str>;
}

/// Segmenter based on Unicode (UAX #29) sentence and word boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl TextSegmenter for UnicodeSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }
}
