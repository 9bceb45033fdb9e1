//! Configuration for the quiz service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use newsquiz_core::{
    FactExtractor, GeneratorConfig, QuestionGenerator, QuestionType, UnicodeSegmenter,
};

use crate::error::{Error, Result};

/// Placeholder shipped in sample `.env` files; treated as "no key"
const PLACEHOLDER_API_KEY: &str = "YOUR_NEWS_API_KEY";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// News sources (NewsAPI + RSS fallback)
    #[serde(default)]
    pub news: NewsConfig,
    /// arXiv configuration
    #[serde(default)]
    pub arxiv: ArxivConfig,
    /// Quiz generation configuration
    #[serde(default)]
    pub quiz: QuizSettings,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS (the browser front-end is served from another origin)
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// News source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// NewsAPI key; without one only RSS feeds are used
    pub api_key: Option<String>,
    /// NewsAPI top-headlines endpoint
    pub api_url: String,
    /// Country filter for NewsAPI
    pub country: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Articles fetched when generating a quiz from `article_id`
    pub batch_size: usize,
    /// Category used when the request names none
    pub default_category: String,
    /// RSS feed per category
    pub feeds: BTreeMap<String, String>,
    /// Feed category used for unknown categories
    pub fallback_feed: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        let feeds = [
            ("technology", "https://feeds.feedburner.com/oreilly/radar"),
            ("science", "https://rss.cnn.com/rss/edition.rss"),
            ("general", "https://feeds.bbci.co.uk/news/rss.xml"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            api_key: None,
            api_url: "https://newsapi.org/v2/top-headlines".to_string(),
            country: "us".to_string(),
            timeout_secs: 10,
            batch_size: 10,
            default_category: "technology".to_string(),
            feeds,
            fallback_feed: "general".to_string(),
        }
    }
}

impl NewsConfig {
    /// The usable API key, ignoring blanks and the sample placeholder
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    /// Feed URL for a category, falling back to the general feed
    pub fn feed_for(&self, category: &str) -> Option<&str> {
        self.feeds
            .get(&category.to_lowercase())
            .or_else(|| self.feeds.get(&self.fallback_feed))
            .map(String::as_str)
    }
}

/// arXiv configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// arXiv query API endpoint
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Papers fetched when generating a quiz from `paper_index`
    pub batch_size: usize,
    /// Search query used when the request names none
    pub default_query: String,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            api_url: "http://export.arxiv.org/api/query".to_string(),
            timeout_secs: 15,
            batch_size: 10,
            default_query: "machine learning".to_string(),
        }
    }
}

/// Quiz generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Questions generated when the request names no count
    pub default_questions: usize,
    /// Upper bound on questions per request
    pub max_questions: usize,
    /// Listing size when `limit` is omitted
    pub default_list_limit: usize,
    /// Upper bound on `limit` for the listing endpoints
    pub max_fetch_limit: usize,
    /// Shortest sentence (in words) considered a fact
    pub min_words: usize,
    /// Longest sentence (in words) considered a fact
    pub max_words: usize,
    /// Chance a true/false question is falsified
    pub false_probability: f64,
    /// Question types drawn from when none is requested
    pub question_types: Vec<QuestionType>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_questions: 5,
            max_questions: 20,
            default_list_limit: 5,
            max_fetch_limit: 50,
            min_words: 4,
            max_words: 60,
            false_probability: 0.5,
            question_types: QuestionType::ALL.to_vec(),
        }
    }
}

impl QuizSettings {
    /// Build the question generator described by these settings
    pub fn build_generator(&self) -> QuestionGenerator {
        let extractor = FactExtractor::new(Arc::new(UnicodeSegmenter))
            .with_word_limits(self.min_words, self.max_words);
        let config = GeneratorConfig {
            question_types: self.question_types.clone(),
            false_probability: self.false_probability,
            ..GeneratorConfig::default()
        };
        QuestionGenerator::new(extractor, config)
    }

    /// Clamp a requested question count into `1..=max_questions`
    pub fn question_count(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_questions)
            .clamp(1, self.max_questions.max(1))
    }

    /// Clamp a requested listing size into `1..=max_fetch_limit`
    pub fn fetch_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_list_limit)
            .clamp(1, self.max_fetch_limit.max(1))
    }
}

impl QuizConfig {
    /// Load configuration from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `NEWS_API_KEY`, `NEWSQUIZ_HOST` and `NEWSQUIZ_PORT` overrides
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("NEWS_API_KEY") {
            self.news.api_key = Some(key);
        }
        if let Some(host) = lookup("NEWSQUIZ_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("NEWSQUIZ_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid NEWSQUIZ_PORT: {}", port),
            }
        }
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.quiz.false_probability) {
            return Err(Error::Config(format!(
                "quiz.false_probability must be within 0..=1, got {}",
                self.quiz.false_probability
            )));
        }
        if self.quiz.min_words > self.quiz.max_words {
            return Err(Error::Config(
                "quiz.min_words must not exceed quiz.max_words".to_string(),
            ));
        }
        if self.news.feeds.is_empty() {
            return Err(Error::Config("news.feeds must list at least one feed".to_string()));
        }
        Ok(())
    }
}
