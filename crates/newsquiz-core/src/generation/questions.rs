//! Builders for each question type
//!
//! Each builder returns `None` when the fact cannot support that type.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::text::{extract_candidates, Candidate};
use crate::types::{Fact, Question};

use super::distractors::pick_distractors;
use super::negation::falsify;
use super::pool::CandidatePool;

/// Placeholder that replaces the masked token
pub const BLANK: &str = "_____";

/// Number of options on a multiple-choice question
pub const OPTION_COUNT: usize = 4;

/// The token to blank out: numbers first, then names, then keywords; earliest wins
pub fn maskable_token(sentence: &str) -> Option<Candidate> {
    extract_candidates(sentence)
        .into_iter()
        .min_by_key(|c| (c.kind, c.offset))
}

fn mask(sentence: &str, token: &Candidate) -> String {
    let span = token.span();
    format!("{}{}{}", &sentence[..span.start], BLANK, &sentence[span.end..])
}

/// Blank out a token and offer it among three distractors
pub fn multiple_choice<R: Rng + ?Sized>(
    fact: &Fact,
    pool: &CandidatePool,
    rng: &mut R,
) -> Option<Question> {
    let answer = maskable_token(&fact.sentence)?;
    let distractors = pick_distractors(&answer, &fact.sentence, pool, rng, OPTION_COUNT - 1);
    if distractors.len() != OPTION_COUNT - 1 {
        return None;
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(answer.text.clone());
    options.extend(distractors);
    options.shuffle(rng);

    Some(Question::multiple_choice(
        mask(&fact.sentence, &answer),
        options,
        answer.text,
        fact.sentence.clone(),
    ))
}

/// Present the fact as-is (true) or falsified (false) with probability `false_probability`
///
/// When the coin says "false" but no falsification rule applies, the true statement is used.
pub fn true_false<R: Rng + ?Sized>(
    fact: &Fact,
    pool: &CandidatePool,
    rng: &mut R,
    false_probability: f64,
) -> Option<Question> {
    let statement = fact.sentence.trim();
    if statement.is_empty() {
        return None;
    }

    if rng.gen_bool(false_probability.clamp(0.0, 1.0)) {
        if let Some(altered) = falsify(statement, pool, rng) {
            return Some(Question::true_false(
                format!("True or False: {}", altered),
                false,
                fact.sentence.clone(),
            ));
        }
    }

    Some(Question::true_false(
        format!("True or False: {}", statement),
        true,
        fact.sentence.clone(),
    ))
}

/// Blank out a token; the user types the answer
pub fn fill_blank(fact: &Fact) -> Option<Question> {
    let answer = maskable_token(&fact.sentence)?;
    Some(Question::fill_blank(
        mask(&fact.sentence, &answer),
        answer.text,
        fact.sentence.clone(),
    ))
}
