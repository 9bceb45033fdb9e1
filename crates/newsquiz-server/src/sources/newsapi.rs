//! NewsAPI top-headlines client

use async_trait::async_trait;
use newsquiz_core::{DocumentMetadata, SourceDocument};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::clean::{collapse_whitespace, document_id, normalize_date, strip_html, strip_truncation_marker};
use super::{http_client, NewsSource};
use crate::config::NewsConfig;
use crate::error::{Error, Result};

/// Placeholder NewsAPI uses for articles pulled after publication
const REMOVED: &str = "[Removed]";

/// NewsAPI client
pub struct NewsApiClient {
    client: Client,
    api_url: String,
    api_key: String,
    country: String,
}

#[derive(Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    #[serde(default)]
    source: Option<NewsApiSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct NewsApiSource {
    #[serde(default)]
    name: Option<String>,
}

impl NewsApiArticle {
    fn into_document(self) -> Option<SourceDocument> {
        let title = collapse_whitespace(self.title.as_deref().unwrap_or_default());
        if title.is_empty() || title == REMOVED {
            return None;
        }

        let content = self
            .content
            .as_deref()
            .map(|c| strip_truncation_marker(&strip_html(c)))
            .filter(|c| !c.trim().is_empty());
        let body = content.unwrap_or_else(|| strip_html(self.description.as_deref().unwrap_or_default()));

        let url = self.url.unwrap_or_default();
        let id = document_id(if url.trim().is_empty() { &title } else { &url });
        let source = self
            .source
            .and_then(|s| s.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "NewsAPI".to_string());

        let mut metadata = DocumentMetadata::news(source, url)
            .with_published(self.published_at.as_deref().and_then(normalize_date));
        metadata.authors = self
            .author
            .map(|a| collapse_whitespace(&a))
            .filter(|a| !a.is_empty())
            .into_iter()
            .collect();

        Some(SourceDocument::new(id, title, body, metadata))
    }
}

/// Turn a NewsAPI response body into documents
pub(crate) fn parse_response(body: &str) -> Result<Vec<SourceDocument>> {
    let response: NewsApiResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        return Err(Error::fetch(format!(
            "NewsAPI error {}: {}",
            response.code.unwrap_or_else(|| "unknown".to_string()),
            response.message.unwrap_or_default()
        )));
    }
    Ok(response
        .articles
        .into_iter()
        .filter_map(NewsApiArticle::into_document)
        .collect())
}

impl NewsApiClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &NewsConfig, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            api_url: config.api_url.clone(),
            api_key: api_key.into(),
            country: config.country.clone(),
        })
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_news(&self, category: &str, limit: usize) -> Result<Vec<SourceDocument>> {
        let page_size = limit.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("category", category),
                ("country", self.country.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // Error bodies carry a message worth surfacing
            return match parse_response(&body) {
                Err(e @ Error::Fetch(_)) => Err(e),
                _ => Err(Error::fetch(format!("NewsAPI returned HTTP {}", status))),
            };
        }

        let mut documents = parse_response(&body)?;
        documents.truncate(limit);
        debug!("NewsAPI returned {} articles for '{}'", documents.len(), category);
        Ok(documents)
    }

    fn name(&self) -> &'static str {
        "NewsAPI"
    }
}
