//! newsquiz-server: quiz generation service for news articles and research abstracts
//!
//! Fetches content from NewsAPI (falling back to RSS feeds) or arXiv, runs it through
//! the `newsquiz-core` heuristics and serves quizzes over a small JSON API.

pub mod config;
pub mod error;
pub mod server;
pub mod sources;
pub mod types;

pub use config::QuizConfig;
pub use error::{Error, Result};
pub use server::QuizServer;

/// Re-export newsquiz-core for convenience
pub use newsquiz_core;
