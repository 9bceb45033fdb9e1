//! API response types

use newsquiz_core::{Question, QuizResult, SourceDocument};
use serde::{Deserialize, Serialize};

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    /// Healthy service
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Quiz Generation API is running".to_string(),
        }
    }
}

/// `GET /api/news`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub success: bool,
    pub articles: Vec<SourceDocument>,
    pub count: usize,
}

impl ArticlesResponse {
    pub fn new(articles: Vec<SourceDocument>) -> Self {
        Self {
            success: true,
            count: articles.len(),
            articles,
        }
    }
}

/// `GET /api/papers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PapersResponse {
    pub success: bool,
    pub papers: Vec<SourceDocument>,
    pub count: usize,
}

impl PapersResponse {
    pub fn new(papers: Vec<SourceDocument>) -> Self {
        Self {
            success: true,
            count: papers.len(),
            papers,
        }
    }
}

/// `POST /api/generate-from-news`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsQuizResponse {
    pub success: bool,
    /// The article the quiz was built from
    pub article: SourceDocument,
    pub questions: Vec<Question>,
    pub count: usize,
}

/// `POST /api/generate-from-paper`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperQuizResponse {
    pub success: bool,
    /// The paper the quiz was built from
    pub paper: SourceDocument,
    pub questions: Vec<Question>,
    pub count: usize,
}

/// `POST /api/generate-quiz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentQuizResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub count: usize,
    pub source_type: String,
    pub source_id: Option<serde_json::Value>,
}

/// `POST /api/submit-quiz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: QuizResult,
}
