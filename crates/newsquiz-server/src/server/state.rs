//! Application state for the quiz server

use std::sync::Arc;

use newsquiz_core::QuestionGenerator;

use crate::config::QuizConfig;
use crate::error::Result;
use crate::sources::ContentFetcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QuizConfig,
    /// News and paper sources
    fetcher: ContentFetcher,
    /// Question generator built from `config.quiz`
    generator: QuestionGenerator,
}

impl AppState {
    /// Create application state with the live HTTP sources
    pub fn new(config: QuizConfig) -> Result<Self> {
        let fetcher = ContentFetcher::from_config(&config)?;
        tracing::info!("Content sources initialized: {:?}", fetcher);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create application state around an existing fetcher
    pub fn with_fetcher(config: QuizConfig, fetcher: ContentFetcher) -> Self {
        let generator = config.quiz.build_generator();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                fetcher,
                generator,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &QuizConfig {
        &self.inner.config
    }

    /// Get the content fetcher
    pub fn fetcher(&self) -> &ContentFetcher {
        &self.inner.fetcher
    }

    /// Get the question generator
    pub fn generator(&self) -> &QuestionGenerator {
        &self.inner.generator
    }
}
