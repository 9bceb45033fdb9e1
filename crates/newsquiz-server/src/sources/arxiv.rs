//! arXiv query API client

use async_trait::async_trait;
use newsquiz_core::{DocumentMetadata, SourceDocument};
use reqwest::Client;
use tracing::{debug, warn};

use super::clean::{arxiv_id, collapse_whitespace, normalize_date, strip_html};
use super::feed::{parse_feed, Feed};
use super::{http_client, PaperSource};
use crate::config::ArxivConfig;
use crate::error::{Error, Result};

/// arXiv search client
pub struct ArxivClient {
    client: Client,
    api_url: String,
}

impl ArxivClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &ArxivConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            api_url: config.api_url.clone(),
        })
    }
}

/// Convert an arXiv Atom feed into paper documents
pub(crate) fn feed_papers(feed: Feed) -> Vec<SourceDocument> {
    feed.entries
        .into_iter()
        .filter_map(|entry| {
            // Malformed queries come back as a single entry pointing at the error docs
            if entry.id.contains("/api/errors") {
                warn!("arXiv reported a query error: {}", collapse_whitespace(&entry.summary));
                return None;
            }
            let id = arxiv_id(&entry.id);
            let url = if entry.link.is_empty() {
                entry.id.clone()
            } else {
                entry.link.clone()
            };
            let metadata = DocumentMetadata::paper(url, entry.authors)
                .with_published(entry.published.as_deref().and_then(normalize_date))
                .with_categories(entry.categories);
            Some(SourceDocument::new(id, entry.title, strip_html(&entry.summary), metadata))
        })
        .collect()
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn fetch_papers(&self, query: &str, limit: usize) -> Result<Vec<SourceDocument>> {
        let search = format!("all:{}", query.trim());
        let max_results = limit.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("search_query", search.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(format!("arXiv returned HTTP {}", status)));
        }
        let body = response.text().await?;

        let mut papers = feed_papers(parse_feed(&body)?);
        papers.truncate(limit);
        debug!("arXiv returned {} papers for '{}'", papers.len(), query);
        Ok(papers)
    }

    fn name(&self) -> &'static str {
        "arXiv"
    }
}
