//! RSS/Atom news feeds

use async_trait::async_trait;
use newsquiz_core::{DocumentMetadata, SourceDocument};
use reqwest::Client;
use tracing::debug;

use super::clean::{document_id, normalize_date, strip_html};
use super::feed::{parse_feed, Feed};
use super::{http_client, NewsSource};
use crate::config::NewsConfig;
use crate::error::{Error, Result};

/// News from the configured category feeds
pub struct RssClient {
    client: Client,
    config: NewsConfig,
}

impl RssClient {
    /// Create a client over the configured feeds
    pub fn new(config: &NewsConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            config: config.clone(),
        })
    }
}

/// Convert a parsed feed into news documents
pub(crate) fn feed_documents(feed: Feed, limit: usize) -> Vec<SourceDocument> {
    let source = feed
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "RSS Feed".to_string());

    feed.entries
        .into_iter()
        .take(limit)
        .map(|entry| {
            let body = strip_html(entry.body());
            let seed = if entry.link.trim().is_empty() {
                &entry.title
            } else {
                &entry.link
            };
            let id = document_id(seed);
            let mut metadata = DocumentMetadata::news(source.clone(), entry.link.clone())
                .with_published(entry.published.as_deref().and_then(normalize_date))
                .with_categories(entry.categories);
            metadata.authors = entry.authors;
            SourceDocument::new(id, entry.title, body, metadata)
        })
        .collect()
}

#[async_trait]
impl NewsSource for RssClient {
    async fn fetch_news(&self, category: &str, limit: usize) -> Result<Vec<SourceDocument>> {
        let url = self
            .config
            .feed_for(category)
            .ok_or_else(|| Error::Config(format!("no feed configured for '{}'", category)))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(format!("feed {} returned HTTP {}", url, status)));
        }
        let body = response.text().await?;

        let documents = feed_documents(parse_feed(&body)?, limit);
        debug!("Feed {} returned {} articles", url, documents.len());
        Ok(documents)
    }

    fn name(&self) -> &'static str {
        "RSS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsquiz_core::SourceKind;

    #[test]
    fn test_feed_documents() {
        let xml = r#"<rss version="2.0"><channel><title>Radar</title>
            <item>
              <title>Edge inference grows</title>
              <link>https://example.com/edge</link>
              <description>&lt;p&gt;Shipments rose 40% in 2024.&lt;/p&gt;</description>
              <pubDate>Tue, 10 Jun 2025 14:30:00 +0000</pubDate>
              <category>AI</category>
            </item>
            <item><title>Second</title><description>Body two.</description></item>
            <item><title>Third</title><description>Body three.</description></item>
            </channel></rss>"#;

        let docs = feed_documents(parse_feed(xml).unwrap(), 2);
        assert_eq!(docs.len(), 2);

        let first = &docs[0];
        assert_eq!(first.body_text, "Shipments rose 40% in 2024.");
        assert_eq!(first.metadata.kind, SourceKind::News);
        assert_eq!(first.metadata.source, "Radar");
        assert_eq!(first.metadata.url, "https://example.com/edge");
        assert_eq!(first.metadata.published_date.as_deref(), Some("2025-06-10T14:30:00Z"));
        assert_eq!(first.metadata.categories, vec!["AI"]);
        assert_eq!(first.id, document_id("https://example.com/edge"));

        assert_eq!(docs[1].id, document_id("Second"));
        assert!(docs.iter().all(SourceDocument::is_well_formed));
    }
}
