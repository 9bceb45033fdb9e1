//! Source document types

use serde::{Deserialize, Serialize};

/// Where a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// News article (NewsAPI or RSS feed)
    News,
    /// Research paper abstract (arXiv)
    Paper,
}

/// Provenance metadata for a fetched document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Kind of source
    pub kind: SourceKind,
    /// Publisher or feed name
    pub source: String,
    /// Author names (may be empty)
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication date, RFC 3339 when it could be normalised
    #[serde(default)]
    pub published_date: Option<String>,
    /// Canonical URL
    #[serde(default)]
    pub url: String,
    /// Subject categories (arXiv tags, feed categories)
    #[serde(default)]
    pub categories: Vec<String>,
}

impl DocumentMetadata {
    /// Metadata for a news article
    pub fn news(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::News,
            source: source.into(),
            authors: Vec::new(),
            published_date: None,
            url: url.into(),
            categories: Vec::new(),
        }
    }

    /// Metadata for a paper abstract
    pub fn paper(url: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            kind: SourceKind::Paper,
            source: "arXiv".to_string(),
            authors,
            published_date: None,
            url: url.into(),
            categories: Vec::new(),
        }
    }

    /// Set the publication date
    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published_date = published;
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}

/// A fetched article or abstract. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Stable identifier (arXiv id, or a hash for news)
    pub id: String,
    /// Headline or paper title
    pub title: String,
    /// Plain-text body (article content or abstract)
    pub body_text: String,
    /// Provenance
    pub metadata: DocumentMetadata,
}

impl SourceDocument {
    /// Create a new document
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
        metadata: DocumentMetadata,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body_text: body_text.into(),
            metadata,
        }
    }

    /// A document is well formed when it has an id, a title and some body text
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.title.trim().is_empty()
            && !self.body_text.trim().is_empty()
    }

    /// Text used for quiz generation: the title as a lead sentence followed by the body
    pub fn quiz_text(&self) -> String {
        let title = self.title.trim().trim_end_matches(['.', '!', '?']);
        if title.is_empty() {
            return self.body_text.trim().to_string();
        }
        format!("{}. {}", title, self.body_text.trim())
    }
}
