//! API request types

use newsquiz_core::QuestionType;
use serde::{Deserialize, Serialize};

/// Query string for `GET /api/news`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsQuery {
    /// News category (technology, science, general, ...)
    pub category: Option<String>,
    /// Number of articles
    pub limit: Option<usize>,
}

/// Query string for `GET /api/papers`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PapersQuery {
    /// arXiv search terms
    pub query: Option<String>,
    /// Number of papers
    pub limit: Option<usize>,
}

/// Body of `POST /api/generate-from-news`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateFromNewsRequest {
    /// Index into the freshly fetched batch (default: 0)
    #[serde(default)]
    pub article_id: Option<usize>,
    /// Category to fetch
    #[serde(default)]
    pub category: Option<String>,
    /// Number of questions
    #[serde(default)]
    pub num_questions: Option<usize>,
    /// Force a single question type
    #[serde(default)]
    pub question_type: Option<QuestionType>,
    /// Seed for deterministic output
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Body of `POST /api/generate-from-paper`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateFromPaperRequest {
    /// arXiv search terms
    #[serde(default)]
    pub query: Option<String>,
    /// Index into the freshly fetched batch (default: 0)
    #[serde(default)]
    pub paper_index: Option<usize>,
    /// Number of questions
    #[serde(default)]
    pub num_questions: Option<usize>,
    /// Force a single question type
    #[serde(default)]
    pub question_type: Option<QuestionType>,
    /// Seed for deterministic output
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Body of `POST /api/generate-quiz`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    /// Text to generate from
    #[serde(default)]
    pub content: String,
    /// Number of questions
    #[serde(default)]
    pub num_questions: Option<usize>,
    /// Caller's label for the content ("news" or "paper"); echoed back
    #[serde(default, rename = "type")]
    pub source_type: Option<String>,
    /// Caller's identifier for the content; echoed back
    #[serde(default)]
    pub source_id: Option<serde_json::Value>,
    /// Force a single question type
    #[serde(default)]
    pub question_type: Option<QuestionType>,
    /// Seed for deterministic output
    #[serde(default)]
    pub seed: Option<u64>,
}
