//! Quiz generation and scoring endpoints

use axum::{extract::State, Json};
use newsquiz_core::{score_quiz, QuizSubmission, SourceDocument};

use super::content::non_blank;
use crate::error::{Error, Result};
use crate::server::extract::ApiJson;
use crate::server::state::AppState;
use crate::types::{
    ContentQuizResponse, GenerateFromNewsRequest, GenerateFromPaperRequest, GenerateQuizRequest,
    NewsQuizResponse, PaperQuizResponse, SubmitResponse,
};

/// Pick item `index` from a freshly fetched batch
fn select(mut documents: Vec<SourceDocument>, index: usize) -> Result<SourceDocument> {
    if index >= documents.len() {
        return Err(Error::IndexOutOfRange {
            index,
            available: documents.len(),
        });
    }
    Ok(documents.swap_remove(index))
}

/// POST /api/generate-quiz - Quiz from caller-supplied text
pub async fn generate_quiz(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateQuizRequest>,
) -> Result<Json<ContentQuizResponse>> {
    if request.content.trim().is_empty() {
        return Err(Error::invalid_request("No content provided"));
    }

    let count = state.config().quiz.question_count(request.num_questions);
    let questions = state.generator().generate_seeded(
        &request.content,
        count,
        request.question_type,
        request.seed,
    )?;

    Ok(Json(ContentQuizResponse {
        success: true,
        count: questions.len(),
        questions,
        source_type: request.source_type.unwrap_or_else(|| "news".to_string()),
        source_id: request.source_id,
    }))
}

/// POST /api/generate-from-news - Quiz from the n-th current article
pub async fn generate_from_news(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateFromNewsRequest>,
) -> Result<Json<NewsQuizResponse>> {
    let config = state.config();
    let category = non_blank(request.category.as_deref()).unwrap_or(&config.news.default_category);
    let index = request.article_id.unwrap_or(0);

    let articles = state
        .fetcher()
        .fetch_news(category, config.news.batch_size)
        .await?;
    let article = select(articles, index)?;
    tracing::info!("Generating quiz from article {} ({})", article.id, article.title);

    let count = config.quiz.question_count(request.num_questions);
    let questions = state.generator().generate_seeded(
        &article.quiz_text(),
        count,
        request.question_type,
        request.seed,
    )?;

    Ok(Json(NewsQuizResponse {
        success: true,
        article,
        count: questions.len(),
        questions,
    }))
}

/// POST /api/generate-from-paper - Quiz from the n-th matching paper
pub async fn generate_from_paper(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateFromPaperRequest>,
) -> Result<Json<PaperQuizResponse>> {
    let config = state.config();
    let search = non_blank(request.query.as_deref()).unwrap_or(&config.arxiv.default_query);
    let index = request.paper_index.unwrap_or(0);

    let papers = state
        .fetcher()
        .fetch_papers(search, config.arxiv.batch_size)
        .await?;
    let paper = select(papers, index)?;
    tracing::info!("Generating quiz from paper {} ({})", paper.id, paper.title);

    let count = config.quiz.question_count(request.num_questions);
    let questions = state.generator().generate_seeded(
        &paper.quiz_text(),
        count,
        request.question_type,
        request.seed,
    )?;

    Ok(Json(PaperQuizResponse {
        success: true,
        paper,
        count: questions.len(),
        questions,
    }))
}

/// POST /api/submit-quiz - Score answers
pub async fn submit_quiz(ApiJson(submission): ApiJson<QuizSubmission>) -> Result<Json<SubmitResponse>> {
    let result = score_quiz(&submission.questions, &submission.answers)?;
    tracing::info!(
        "Quiz scored: {}/{} correct ({}%)",
        result.correct,
        result.total,
        result.score
    );
    Ok(Json(SubmitResponse {
        success: true,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsquiz_core::DocumentMetadata;

    #[test]
    fn test_select() {
        let docs = |n: usize| {
            (0..n)
                .map(|i| {
                    SourceDocument::new(i.to_string(), "T", "B", DocumentMetadata::news("S", ""))
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(select(docs(3), 2).unwrap().id, "2");
        assert_eq!(select(docs(3), 0).unwrap().id, "0");
        assert!(matches!(
            select(docs(2), 2),
            Err(Error::IndexOutOfRange { index: 2, available: 2 })
        ));
        assert!(matches!(
            select(Vec::new(), 0),
            Err(Error::IndexOutOfRange { index: 0, available: 0 })
        ));
    }
}
