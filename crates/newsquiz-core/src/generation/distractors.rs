//! Distractor selection for multiple-choice questions

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::text::{Candidate, CandidateKind};

use super::pool::CandidatePool;

/// Used when the document does not offer enough plausible alternatives
pub const FALLBACK_OPTIONS: [&str; 4] = [
    "Not mentioned in the text",
    "None of the above",
    "Cannot be determined from the text",
    "Something else",
];

/// Pick `count` distractors for `answer`
///
/// Sources, in order: same-kind candidates from elsewhere in the document, numeric
/// variants (numbers only), other text candidates (names and keywords only), and
/// [`FALLBACK_OPTIONS`]. Candidates already visible in `sentence` are skipped. No
/// distractor equals the answer or another distractor, case-insensitively.
pub fn pick_distractors<R: Rng + ?Sized>(
    answer: &Candidate,
    sentence: &str,
    pool: &CandidatePool,
    rng: &mut R,
    count: usize,
) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::from([answer.key()]);
    let mut picked = Vec::with_capacity(count);

    let mut offer = |option: &str, picked: &mut Vec<String>| {
        let option = option.trim();
        if picked.len() < count && !option.is_empty() && taken.insert(option.to_lowercase()) {
            picked.push(option.to_string());
        }
    };

    for text in document_texts(pool, answer.kind, sentence, rng) {
        offer(text, &mut picked);
    }

    match answer.kind {
        CandidateKind::Number => {
            for variant in numeric_variants(&answer.text) {
                offer(&variant, &mut picked);
            }
        }
        CandidateKind::Entity | CandidateKind::Keyword => {
            let other = if answer.kind == CandidateKind::Entity {
                CandidateKind::Keyword
            } else {
                CandidateKind::Entity
            };
            for text in document_texts(pool, other, sentence, rng) {
                offer(text, &mut picked);
            }
        }
    }

    for fallback in FALLBACK_OPTIONS {
        offer(fallback, &mut picked);
    }

    picked
}

/// Pooled candidates of `kind` not already visible in `sentence`, shuffled
fn document_texts<'p, R: Rng + ?Sized>(
    pool: &'p CandidatePool,
    kind: CandidateKind,
    sentence: &str,
    rng: &mut R,
) -> Vec<&'p str> {
    let mut texts: Vec<&'p str> = pool
        .of_kind(kind)
        .map(|c| c.text.as_str())
        .filter(|t| !sentence.contains(t))
        .collect();
    texts.shuffle(rng);
    texts
}

/// Plausible wrong values for a numeric token, nearest first
///
/// Years move by a few years; other quantities are scaled and then nudged.
/// The `%` suffix, thousands separators and decimal places of the input are kept.
pub fn numeric_variants(token: &str) -> Vec<String> {
    let percent = token.ends_with('%');
    let core = token.trim_end_matches('%');
    let grouped = core.contains(',');
    let plain = core.replace(',', "");
    let Ok(value) = plain.parse::<f64>() else {
        return Vec::new();
    };
    let decimals = plain.split_once('.').map_or(0, |(_, frac)| frac.len());

    let is_year = !percent && !grouped && decimals == 0 && plain.len() == 4 && (1000.0..=2100.0).contains(&value);

    let candidates: Vec<f64> = if is_year {
        [-1.0, 1.0, -2.0, 2.0, 5.0, -5.0, 10.0, -10.0]
            .iter()
            .map(|offset| value + offset)
            .collect()
    } else {
        [0.5, 1.5, 2.0, 0.8]
            .iter()
            .map(|factor| value * factor)
            .chain((1..=5).map(|step| value + step as f64))
            .collect()
    };

    let mut seen = HashSet::from([token.to_string()]);
    candidates
        .into_iter()
        .map(|v| format_number(v, decimals, grouped && !is_year, percent))
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

fn format_number(value: f64, decimals: usize, grouped: bool, percent: bool) -> String {
    let mut text = if decimals == 0 {
        let rounded = value.round() as i64;
        if grouped {
            group_thousands(rounded)
        } else {
            rounded.to_string()
        }
    } else {
        format!("{:.*}", decimals, value)
    };
    if percent {
        text.push('%');
    }
    text
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
