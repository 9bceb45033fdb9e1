//! Error types for quiz generation and scoring

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core quiz errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The source text yielded no usable facts
    #[error("No questions could be generated from the provided text")]
    NoQuestionsGenerated,

    /// Answer count does not match question count
    #[error("Answers count mismatch: {answers} answers for {questions} questions")]
    MalformedSubmission { questions: usize, answers: usize },
}

impl Error {
    /// Create a malformed submission error
    pub fn malformed_submission(questions: usize, answers: usize) -> Self {
        Self::MalformedSubmission { questions, answers }
    }
}
