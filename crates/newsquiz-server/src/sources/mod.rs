//! Content sources: NewsAPI, RSS/Atom feeds and arXiv
//!
//! Each upstream is a small client behind [`NewsSource`] or [`PaperSource`].
//! [`ContentFetcher`] combines them and applies the NewsAPI → RSS fallback.

pub mod arxiv;
pub mod clean;
pub mod feed;
pub mod fetcher;
pub mod newsapi;
pub mod rss;

use async_trait::async_trait;
use newsquiz_core::SourceDocument;

use crate::error::Result;

pub use arxiv::ArxivClient;
pub use fetcher::ContentFetcher;
pub use newsapi::NewsApiClient;
pub use rss::RssClient;

/// A source of news articles
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to `limit` articles for `category`
    async fn fetch_news(&self, category: &str, limit: usize) -> Result<Vec<SourceDocument>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// A source of research paper abstracts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch up to `limit` papers matching `query`, newest first
    async fn fetch_papers(&self, query: &str, limit: usize) -> Result<Vec<SourceDocument>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// HTTP client shared by the source implementations
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(concat!("newsquiz/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(5)
        .build()?)
}
