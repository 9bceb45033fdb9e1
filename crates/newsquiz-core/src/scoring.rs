//! Quiz grading

use crate::error::{Error, Result};
use crate::types::{Question, QuestionResult, QuizResult};

/// Normalise an answer for comparison: trimmed and lowercased
fn normalise(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Grade `answers` against `questions` (index-aligned)
///
/// Answers match when equal after trimming and lowercasing. The score is the rounded
/// percentage of correct answers; an empty quiz scores 0.
pub fn score_quiz(questions: &[Question], answers: &[String]) -> Result<QuizResult> {
    if questions.len() != answers.len() {
        return Err(Error::malformed_submission(questions.len(), answers.len()));
    }

    let results: Vec<QuestionResult> = questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(index, (question, answer))| QuestionResult {
            question_index: index,
            question: question.prompt.clone(),
            your_answer: answer.clone(),
            is_correct: normalise(answer) == normalise(&question.correct_answer),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        })
        .collect();

    let correct = results.iter().filter(|r| r.is_correct).count();
    let total = results.len();
    let score = if total == 0 {
        0
    } else {
        (100.0 * correct as f64 / total as f64).round() as u32
    };

    Ok(QuizResult {
        score,
        correct,
        total,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn capital_question() -> Question {
        Question::fill_blank(
            "The capital of France is _____.",
            "Paris",
            "The capital of France is Paris.",
        )
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let questions = vec![capital_question()];
        let exact = score_quiz(&questions, &answers(&["Paris"])).unwrap();
        let sloppy = score_quiz(&questions, &answers(&["  paris "])).unwrap();
        assert_eq!(exact.score, 100);
        assert_eq!(exact.score, sloppy.score);
        assert!(sloppy.results[0].is_correct);
    }

    #[test]
    fn test_true_false_submission() {
        let questions = vec![Question::true_false("True or False: x", true, "x")];
        let result = score_quiz(&questions, &answers(&["true"])).unwrap();
        assert_eq!((result.score, result.correct, result.total), (100, 1, 1));
        assert_eq!(result.results[0].explanation, "x");
    }

    #[test]
    fn test_rounding_and_missing_answers() {
        let questions = vec![capital_question(), capital_question(), capital_question()];
        let result = score_quiz(&questions, &answers(&["Paris", "", "Lyon"])).unwrap();
        assert_eq!(result.correct, 1);
        assert_eq!(result.score, 33);

        let result = score_quiz(&questions, &answers(&["Paris", "paris", ""])).unwrap();
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let result = score_quiz(&[], &[]).unwrap();
        assert_eq!((result.score, result.correct, result.total), (0, 0, 0));
    }

    #[test]
    fn test_length_mismatch() {
        let err = score_quiz(&[capital_question()], &[]).unwrap_err();
        assert_eq!(err, Error::malformed_submission(1, 0));
    }
}
