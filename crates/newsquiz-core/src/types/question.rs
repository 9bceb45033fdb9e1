//! Question types

use serde::{Deserialize, Serialize};

use super::lenient;

/// Kind of quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Four options, one correct
    MultipleChoice,
    /// Statement that is either true or false
    TrueFalse,
    /// Sentence with a blank to fill in, no options
    FillBlank,
}

impl QuestionType {
    /// All question types, in fallback order
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::FillBlank,
    ];

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::FillBlank => "fill_blank",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated quiz question
///
/// Serialized with the text under both `prompt` and `question`; either key is accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "QuestionWire", try_from = "QuestionWire")]
pub struct Question {
    /// Question kind
    pub kind: QuestionType,
    /// Text shown to the user
    pub prompt: String,
    /// Answer options (multiple choice only)
    pub options: Option<Vec<String>>,
    /// The correct answer; `"true"`/`"false"` for true/false questions
    pub correct_answer: String,
    /// The unaltered source sentence
    pub explanation: String,
}

#[derive(Serialize, Deserialize)]
struct QuestionWire {
    #[serde(rename = "type")]
    kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::string")]
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

impl From<Question> for QuestionWire {
    fn from(q: Question) -> Self {
        Self {
            kind: q.kind,
            question: Some(q.prompt.clone()),
            prompt: Some(q.prompt),
            options: q.options,
            correct_answer: q.correct_answer,
            explanation: q.explanation,
        }
    }
}

impl TryFrom<QuestionWire> for Question {
    type Error = String;

    fn try_from(wire: QuestionWire) -> Result<Self, Self::Error> {
        let prompt = wire
            .prompt
            .or(wire.question)
            .ok_or_else(|| "missing field `prompt` (or `question`)".to_string())?;
        Ok(Self {
            kind: wire.kind,
            prompt,
            options: wire.options,
            correct_answer: wire.correct_answer,
            explanation: wire.explanation,
        })
    }
}

impl Question {
    /// Create a multiple-choice question
    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            kind: QuestionType::MultipleChoice,
            prompt: prompt.into(),
            options: Some(options),
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Create a true/false question
    pub fn true_false(prompt: impl Into<String>, answer: bool, explanation: impl Into<String>) -> Self {
        Self {
            kind: QuestionType::TrueFalse,
            prompt: prompt.into(),
            options: None,
            correct_answer: answer.to_string(),
            explanation: explanation.into(),
        }
    }

    /// Create a fill-in-the-blank question
    pub fn fill_blank(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            kind: QuestionType::FillBlank,
            prompt: prompt.into(),
            options: None,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Check the structural invariants of the question type
    ///
    /// - multiple choice: 4 distinct options (case-insensitive) containing the answer exactly once
    /// - true/false: answer is `"true"` or `"false"`
    /// - fill blank: non-empty answer and a blank in the prompt
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            QuestionType::MultipleChoice => {
                let Some(options) = &self.options else {
                    return false;
                };
                let mut seen = std::collections::HashSet::new();
                let distinct = options.iter().all(|o| seen.insert(o.trim().to_lowercase()));
                let hits = options.iter().filter(|o| *o == &self.correct_answer).count();
                options.len() == 4 && distinct && hits == 1
            }
            QuestionType::TrueFalse => {
                self.options.is_none()
                    && (self.correct_answer == "true" || self.correct_answer == "false")
            }
            QuestionType::FillBlank => {
                !self.correct_answer.trim().is_empty() && self.prompt.contains("_____")
            }
        }
    }
}
