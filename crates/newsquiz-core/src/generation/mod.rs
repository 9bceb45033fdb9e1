//! Question generation from extracted facts

pub mod distractors;
pub mod negation;
pub mod pool;
pub mod questions;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extraction::FactExtractor;
use crate::types::{Fact, Question, QuestionType};

pub use pool::CandidatePool;

/// Question generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Types to draw from when no type is requested
    pub question_types: Vec<QuestionType>,
    /// Chance that a true/false question shows a falsified statement
    pub false_probability: f64,
    /// Facts considered per requested question, so skipped facts can be replaced
    pub oversample: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            question_types: QuestionType::ALL.to_vec(),
            false_probability: 0.5,
            oversample: 2,
        }
    }
}

/// Builds quiz questions from plain text
#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator {
    extractor: FactExtractor,
    config: GeneratorConfig,
}

impl QuestionGenerator {
    /// Create a generator
    pub fn new(extractor: FactExtractor, config: GeneratorConfig) -> Self {
        Self { extractor, config }
    }

    /// The fact extractor in use
    pub fn extractor(&self) -> &FactExtractor {
        &self.extractor
    }

    /// Generator settings
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build one question of type `hint` from `fact`
    ///
    /// If the fact cannot support `hint` the remaining types are tried in
    /// [`QuestionType::ALL`] order. `None` means no type could be formed.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        fact: &Fact,
        hint: QuestionType,
        pool: &CandidatePool,
        rng: &mut R,
    ) -> Option<Question> {
        std::iter::once(hint)
            .chain(QuestionType::ALL.into_iter().filter(|t| *t != hint))
            .find_map(|kind| match kind {
                QuestionType::MultipleChoice => questions::multiple_choice(fact, pool, rng),
                QuestionType::TrueFalse => {
                    questions::true_false(fact, pool, rng, self.config.false_probability)
                }
                QuestionType::FillBlank => questions::fill_blank(fact),
            })
    }

    /// Generate up to `count` questions from `text`, in document order
    ///
    /// Facts are tried best-first; a fact that yields no question is skipped and
    /// does not count. Types are drawn from the configured list unless `kind` is given.
    pub fn generate_questions<R: Rng + ?Sized>(
        &self,
        text: &str,
        count: usize,
        kind: Option<QuestionType>,
        rng: &mut R,
    ) -> Vec<Question> {
        if count == 0 {
            return Vec::new();
        }

        let pool = CandidatePool::from_text(text, self.extractor.segmenter());
        let ranked = self.extractor.rank(text);
        let budget = count.saturating_mul(self.config.oversample.max(1));

        let mut produced: Vec<(usize, Question)> = Vec::with_capacity(count);
        for scored in ranked.into_iter().take(budget) {
            if produced.len() >= count {
                break;
            }
            let hint = kind
                .or_else(|| self.config.question_types.choose(rng).copied())
                .unwrap_or(QuestionType::MultipleChoice);

            match self.generate(&scored.fact, hint, &pool, rng) {
                Some(question) => produced.push((scored.fact.position, question)),
                None => tracing::debug!(
                    "Skipping fact at sentence {}: no question type fits",
                    scored.fact.position
                ),
            }
        }

        produced.sort_by_key(|(position, _)| *position);
        produced.into_iter().map(|(_, q)| q).collect()
    }

    /// Generate questions with an explicit seed, or from entropy when `seed` is `None`
    ///
    /// Returns [`Error::NoQuestionsGenerated`] when questions were requested but none could be built.
    pub fn generate_seeded(
        &self,
        text: &str,
        count: usize,
        kind: Option<QuestionType>,
        seed: Option<u64>,
    ) -> Result<Vec<Question>> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let questions = self.generate_questions(text, count, kind, &mut rng);
        if count > 0 && questions.is_empty() {
            return Err(Error::NoQuestionsGenerated);
        }
        tracing::info!("Generated {} of {} requested questions", questions.len(), count);
        Ok(questions)
    }
}
