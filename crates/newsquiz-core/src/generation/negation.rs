//! Turning a true statement into a false one
//!
//! Rules are tried in order and the first one that changes the sentence wins:
//!
//! 1. change the first number (see [`numeric_variants`])
//! 2. swap a directional verb or comparative for its opposite
//! 3. negate the first auxiliary verb, or drop an existing "not"/"never" after it
//! 4. replace the first named entity with another name from the same document
//!
//! This is a heuristic and can still produce awkward grammar ("The team has not won"
//! is fine, "They can not" reads oddly); it never produces the original sentence.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex, RegexBuilder};

use crate::text::{extract_candidates, CandidateKind};

use super::distractors::numeric_variants;
use super::pool::CandidatePool;

const OPPOSITES: &[(&str, &str)] = &[
    ("increased", "decreased"),
    ("decreased", "increased"),
    ("increases", "decreases"),
    ("decreases", "increases"),
    ("rose", "fell"),
    ("fell", "rose"),
    ("improved", "worsened"),
    ("worsened", "improved"),
    ("gained", "lost"),
    ("lost", "gained"),
    ("higher", "lower"),
    ("lower", "higher"),
    ("more", "fewer"),
    ("fewer", "more"),
    ("before", "after"),
    ("after", "before"),
];

static OPPOSITE_RE: Lazy<Regex> = Lazy::new(|| {
    let words: Vec<&str> = OPPOSITES.iter().map(|(from, _)| *from).collect();
    RegexBuilder::new(&format!(r"\b(?:{})\b", words.join("|")))
        .case_insensitive(true)
        .build()
        .expect("valid opposites pattern")
});

/// Irregular past participles that follow "has"/"have" in perfect tenses
const IRREGULAR_PARTICIPLES: &[&str] = &[
    "been", "won", "done", "gone", "made", "had", "seen", "taken", "given", "become", "begun",
    "built", "found", "left", "lost", "paid", "said", "sold", "told", "brought", "bought",
    "caught", "taught", "thought", "kept", "held", "run", "come", "met", "put", "set", "cut",
];

static AUXILIARY_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"\b(is|are|was|were|can|will|could|would|should|has|have)\b(\s+(?:not|never)\b)?(\s+\w+)?",
    )
    .case_insensitive(true)
    .build()
    .expect("valid auxiliary pattern")
});

/// Produce a false variant of `sentence`, or `None` when no rule applies
pub fn falsify<R: Rng + ?Sized>(sentence: &str, pool: &CandidatePool, rng: &mut R) -> Option<String> {
    alter_number(sentence, rng)
        .or_else(|| swap_opposite(sentence))
        .or_else(|| negate_auxiliary(sentence))
        .or_else(|| swap_entity(sentence, pool, rng))
        .filter(|altered| altered != sentence)
}

fn alter_number<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> Option<String> {
    let number = extract_candidates(sentence)
        .into_iter()
        .find(|c| c.kind == CandidateKind::Number)?;
    let variants = numeric_variants(&number.text);
    // Stay close to the true value so the statement remains plausible
    let replacement = variants[..variants.len().min(4)].choose(rng)?;
    Some(replace_span(sentence, number.span(), replacement))
}

fn swap_opposite(sentence: &str) -> Option<String> {
    let m = OPPOSITE_RE.find(sentence)?;
    let lower = m.as_str().to_lowercase();
    let (_, opposite) = OPPOSITES.iter().find(|(from, _)| *from == lower)?;
    Some(replace_span(sentence, m.range(), &match_case(m.as_str(), opposite)))
}

fn negate_auxiliary(sentence: &str) -> Option<String> {
    let caps = AUXILIARY_RE.captures(sentence)?;
    let whole = caps.get(0)?;
    let replacement = negated_auxiliary(&caps);
    Some(replace_span(sentence, whole.range(), &replacement))
}

fn negated_auxiliary(caps: &Captures<'_>) -> String {
    let aux = &caps[1];
    let next = caps.get(3).map_or("", |m| m.as_str());

    // "is not" -> "is"
    if caps.get(2).is_some() {
        return format!("{}{}", aux, next);
    }

    let lower = aux.to_lowercase();
    if lower == "has" || lower == "have" {
        let next_word = next.trim().to_lowercase();
        let participle = IRREGULAR_PARTICIPLES.contains(&next_word.as_str())
            || next_word.ends_with("ed")
            || next_word.ends_with("en");
        if !participle {
            let replacement = if lower == "has" { "does not have" } else { "do not have" };
            return format!("{}{}", match_case(aux, replacement), next);
        }
    }

    format!("{} not{}", aux, next)
}

fn swap_entity<R: Rng + ?Sized>(sentence: &str, pool: &CandidatePool, rng: &mut R) -> Option<String> {
    let entity = extract_candidates(sentence)
        .into_iter()
        .find(|c| c.kind == CandidateKind::Entity)?;
    let alternatives: Vec<&str> = pool
        .of_kind(CandidateKind::Entity)
        .map(|c| c.text.as_str())
        .filter(|t| !sentence.contains(t) && !t.eq_ignore_ascii_case(&entity.text))
        .collect();
    let replacement = alternatives.choose(rng)?;
    Some(replace_span(sentence, entity.span(), replacement))
}

fn replace_span(sentence: &str, span: std::ops::Range<usize>, replacement: &str) -> String {
    format!("{}{}{}", &sentence[..span.start], replacement, &sentence[span.end..])
}

/// Capitalise `replacement` if `original` starts with an uppercase letter
fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if starts_upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}
