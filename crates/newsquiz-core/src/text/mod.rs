//! Text segmentation and candidate token extraction

pub mod candidates;
pub mod segmenter;
pub mod stopwords;

pub use candidates::{extract_candidates, numeric_tokens, Candidate, CandidateKind};
pub use segmenter::{TextSegmenter, UnicodeSegmenter};
pub use stopwords::is_stopword;
