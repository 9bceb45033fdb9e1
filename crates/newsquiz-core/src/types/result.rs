//! Submission and result types

use serde::{Deserialize, Serialize};

use super::lenient;
use super::question::Question;

/// Questions as served plus the user's answers, index-aligned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmission {
    /// Questions exactly as they were served
    #[serde(default)]
    pub questions: Vec<Question>,
    /// One answer per question; unanswered slots are empty strings
    #[serde(default, deserialize_with = "lenient::strings")]
    pub answers: Vec<String>,
}

/// Outcome for a single question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    /// Index of the question in the submission
    pub question_index: usize,
    /// Prompt that was shown
    pub question: String,
    /// Answer as submitted
    pub your_answer: String,
    /// Whether the answer matched
    pub is_correct: bool,
    /// Expected answer
    pub correct_answer: String,
    /// Source sentence, copied verbatim from the question
    pub explanation: String,
}

/// Graded quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Percentage score, 0..=100
    pub score: u32,
    /// Number of correct answers
    pub correct: usize,
    /// Number of questions
    pub total: usize,
    /// Per-question outcomes
    pub results: Vec<QuestionResult>,
}
