//! Health and content listing endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{ArticlesResponse, HealthResponse, NewsQuery, PapersQuery, PapersResponse};

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /api/news - Latest articles for a category
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<ArticlesResponse>> {
    let config = state.config();
    let category = non_blank(query.category.as_deref()).unwrap_or(&config.news.default_category);
    let limit = config.quiz.fetch_limit(query.limit);

    tracing::info!("News: category='{}' limit={}", category, limit);
    let articles = state.fetcher().fetch_news(category, limit).await?;

    Ok(Json(ArticlesResponse::new(articles)))
}

/// GET /api/papers - Newest arXiv papers matching a query
pub async fn list_papers(
    State(state): State<AppState>,
    Query(query): Query<PapersQuery>,
) -> Result<Json<PapersResponse>> {
    let config = state.config();
    let search = non_blank(query.query.as_deref()).unwrap_or(&config.arxiv.default_query);
    let limit = config.quiz.fetch_limit(query.limit);

    tracing::info!("Papers: query='{}' limit={}", search, limit);
    let papers = state.fetcher().fetch_papers(search, limit).await?;

    Ok(Json(PapersResponse::new(papers)))
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
