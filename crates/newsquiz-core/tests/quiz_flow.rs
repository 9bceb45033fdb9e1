//! End-to-end: text in, questions out, answers graded

use newsquiz_core::{
    score_quiz, Error, QuestionGenerator, QuestionType, QuizSubmission,
};

const EIFFEL: &str = "The Eiffel Tower was built in 1889. It is located in Paris, France. \
                      Millions of tourists visit it every year.";

const SENTENCES: [&str; 3] = [
    "The Eiffel Tower was built in 1889.",
    "It is located in Paris, France.",
    "Millions of tourists visit it every year.",
];

#[test]
fn eiffel_text_yields_at_most_two_questions() {
    for seed in 0..20 {
        let questions = QuestionGenerator::default()
            .generate_seeded(EIFFEL, 2, None, Some(seed))
            .unwrap();
        assert!(!questions.is_empty() && questions.len() <= 2);
        for q in &questions {
            assert!(!q.prompt.is_empty());
            assert!(SENTENCES.contains(&q.explanation.as_str()));
        }
    }
}

#[test]
fn answering_with_correct_answers_scores_full_marks() {
    let questions = QuestionGenerator::default()
        .generate_seeded(EIFFEL, 3, None, Some(2024))
        .unwrap();
    let answers: Vec<String> = questions.iter().map(|q| q.correct_answer.to_uppercase()).collect();

    let result = score_quiz(&questions, &answers).unwrap();
    assert_eq!(result.score, 100);
    assert_eq!(result.correct, questions.len());
    for (q, r) in questions.iter().zip(&result.results) {
        assert_eq!(q.explanation, r.explanation);
    }
}

#[test]
fn browser_submission_round_trip() {
    let payload = r#"{
        "questions": [
            {"type": "true_false", "prompt": "True or False: Water boils at 100 C.",
             "correct_answer": "true", "explanation": "Water boils at 100 C."},
            {"type": "multiple_choice", "question": "The Eiffel Tower was built in _____.",
             "options": ["1889", "1890", "1888", "1899"], "correct_answer": "1889",
             "explanation": "The Eiffel Tower was built in 1889."}
        ],
        "answers": [true, null]
    }"#;
    let submission: QuizSubmission = serde_json::from_str(payload).unwrap();
    assert_eq!(submission.questions[1].kind, QuestionType::MultipleChoice);

    let result = score_quiz(&submission.questions, &submission.answers).unwrap();
    assert_eq!((result.score, result.correct, result.total), (50, 1, 2));
    assert_eq!(result.results[1].your_answer, "");
}

#[test]
fn mismatched_submission_is_rejected() {
    let submission: QuizSubmission = serde_json::from_str(
        r#"{"questions": [{"type": "true_false", "prompt": "p", "correct_answer": "true"}], "answers": []}"#,
    )
    .unwrap();
    assert_eq!(
        score_quiz(&submission.questions, &submission.answers),
        Err(Error::MalformedSubmission { questions: 1, answers: 0 })
    );
}
