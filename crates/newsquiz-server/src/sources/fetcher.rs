//! Source selection and fallback

use std::sync::Arc;

use newsquiz_core::SourceDocument;
use tracing::{info, warn};

use super::{ArxivClient, NewsApiClient, NewsSource, PaperSource, RssClient};
use crate::config::QuizConfig;
use crate::error::{Error, Result};

/// Fetches news and papers, falling back from NewsAPI to RSS
#[derive(Clone)]
pub struct ContentFetcher {
    primary: Option<Arc<dyn NewsSource>>,
    fallback: Arc<dyn NewsSource>,
    papers: Arc<dyn PaperSource>,
}

impl std::fmt::Debug for ContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFetcher")
            .field("primary", &self.primary.as_ref().map(|p| p.name()))
            .field("fallback", &self.fallback.name())
            .field("papers", &self.papers.name())
            .finish()
    }
}

impl ContentFetcher {
    /// Combine explicit sources
    pub fn new(
        primary: Option<Arc<dyn NewsSource>>,
        fallback: Arc<dyn NewsSource>,
        papers: Arc<dyn PaperSource>,
    ) -> Self {
        Self {
            primary,
            fallback,
            papers,
        }
    }

    /// Build the live HTTP sources; NewsAPI is used only when a key is configured
    pub fn from_config(config: &QuizConfig) -> Result<Self> {
        let primary = match config.news.api_key() {
            Some(key) => Some(Arc::new(NewsApiClient::new(&config.news, key)?) as Arc<dyn NewsSource>),
            None => {
                info!("No NewsAPI key configured, using RSS feeds for news");
                None
            }
        };
        Ok(Self::new(
            primary,
            Arc::new(RssClient::new(&config.news)?),
            Arc::new(ArxivClient::new(&config.arxiv)?),
        ))
    }

    /// Fetch up to `limit` well-formed articles for `category`
    pub async fn fetch_news(&self, category: &str, limit: usize) -> Result<Vec<SourceDocument>> {
        if let Some(primary) = &self.primary {
            match primary.fetch_news(category, limit).await {
                Ok(documents) => {
                    let documents = well_formed(documents, primary.name(), limit);
                    if !documents.is_empty() {
                        return Ok(documents);
                    }
                    warn!(
                        "{} returned no usable articles for '{}', falling back to {}",
                        primary.name(),
                        category,
                        self.fallback.name()
                    );
                }
                Err(e) => warn!(
                    "{} failed for '{}': {}; falling back to {}",
                    primary.name(),
                    category,
                    e,
                    self.fallback.name()
                ),
            }
        }

        let documents = self
            .fallback
            .fetch_news(category, limit)
            .await
            .map_err(|e| Error::fetch(format!("{}: {}", self.fallback.name(), e)))?;
        Ok(well_formed(documents, self.fallback.name(), limit))
    }

    /// Fetch up to `limit` well-formed papers for `query`, newest first
    pub async fn fetch_papers(&self, query: &str, limit: usize) -> Result<Vec<SourceDocument>> {
        let documents = self
            .papers
            .fetch_papers(query, limit)
            .await
            .map_err(|e| Error::fetch(format!("{}: {}", self.papers.name(), e)))?;
        Ok(well_formed(documents, self.papers.name(), limit))
    }
}

fn well_formed(documents: Vec<SourceDocument>, source: &str, limit: usize) -> Vec<SourceDocument> {
    let fetched = documents.len();
    let mut kept: Vec<_> = documents
        .into_iter()
        .filter(SourceDocument::is_well_formed)
        .collect();
    if kept.len() < fetched {
        warn!(
            "Dropped {} malformed documents from {}",
            fetched - kept.len(),
            source
        );
    }
    kept.truncate(limit);
    kept
}
