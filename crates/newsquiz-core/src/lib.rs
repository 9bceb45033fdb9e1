//! newsquiz-core: rule-based quiz generation from news articles and paper abstracts
//!
//! This crate turns plain source text into quiz questions using deterministic sentence heuristics.
//! It has no network or runtime dependencies; the HTTP service lives in `newsquiz-server`.
//!
//! Pipeline: [`FactExtractor`] picks quiz-worthy sentences, [`QuestionGenerator`] turns each one
//! into a question, and [`score_quiz`] grades submitted answers.

pub mod error;
pub mod extraction;
pub mod generation;
pub mod scoring;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use extraction::{FactExtractor, ScoredFact};
pub use generation::{CandidatePool, GeneratorConfig, QuestionGenerator};
pub use scoring::score_quiz;
pub use text::{extract_candidates, Candidate, CandidateKind, TextSegmenter, UnicodeSegmenter};
pub use types::{
    document::{DocumentMetadata, SourceDocument, SourceKind},
    fact::Fact,
    question::{Question, QuestionType},
    result::{QuestionResult, QuizResult, QuizSubmission},
};
