//! API routes for the quiz server

pub mod content;
pub mod quiz;

use axum::{
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(content::health))
        // Content listings
        .route("/news", get(content::list_news))
        .route("/papers", get(content::list_papers))
        // Quiz generation
        .route("/generate-quiz", post(quiz::generate_quiz))
        .route("/generate-from-news", post(quiz::generate_from_news))
        .route("/generate-from-paper", post(quiz::generate_from_paper))
        // Scoring
        .route("/submit-quiz", post(quiz::submit_quiz))
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "newsquiz",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Quiz generation from news articles and arXiv abstracts",
        "endpoints": {
            "GET /api/health": "Service health",
            "GET /api/news": "Fetch news articles (category, limit)",
            "GET /api/papers": "Search arXiv papers (query, limit)",
            "POST /api/generate-quiz": "Generate a quiz from supplied text",
            "POST /api/generate-from-news": "Generate a quiz from a fetched article",
            "POST /api/generate-from-paper": "Generate a quiz from a fetched paper",
            "POST /api/submit-quiz": "Score submitted answers"
        },
        "question_types": ["multiple_choice", "true_false", "fill_blank"]
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use newsquiz_core::{DocumentMetadata, SourceDocument};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::QuizConfig;
    use crate::error::Error;
    use crate::server::{state::AppState, QuizServer};
    use crate::sources::{ContentFetcher, MockNewsSource, MockPaperSource};

    const BODY: &str = "The Eiffel Tower was built in 1889 for the World's Fair. \
                        It is located in Paris, France. Millions of tourists visit it every year. \
                        The tower is 330 metres tall and was the tallest structure until 1930.";

    fn news_doc(id: &str) -> SourceDocument {
        SourceDocument::new(
            id,
            "Paris landmark turns 136",
            BODY,
            DocumentMetadata::news("Test Wire", format!("https://example.com/{}", id)),
        )
    }

    fn paper_doc() -> SourceDocument {
        SourceDocument::new(
            "2401.01234v1",
            "Sparse Graph Transformers",
            "We propose a sparse attention method for graphs. Our results show accuracy increased by 12% on five benchmarks. \
             The method was evaluated at Stanford University in 2023.",
            DocumentMetadata::paper("http://arxiv.org/abs/2401.01234v1", vec!["Ada Lovelace".to_string()]),
        )
    }

    fn app(news: Vec<SourceDocument>, papers: Option<Vec<SourceDocument>>) -> axum::Router {
        let mut rss = MockNewsSource::new();
        rss.expect_name().return_const("RSS");
        rss.expect_fetch_news()
            .returning(move |_, limit| Ok(news.iter().take(limit).cloned().collect()));

        let mut arxiv = MockPaperSource::new();
        arxiv.expect_name().return_const("arXiv");
        arxiv.expect_fetch_papers().returning(move |_, limit| match &papers {
            Some(papers) => Ok(papers.iter().take(limit).cloned().collect()),
            None => Err(Error::fetch("connection refused")),
        });

        let fetcher = ContentFetcher::new(None, Arc::new(rss), Arc::new(arxiv));
        QuizServer::with_state(AppState::with_fetcher(QuizConfig::default(), fetcher)).build_router()
    }

    async fn call(router: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_and_info() {
        let (status, body) = call(app(vec![], None), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = call(app(vec![], None), "GET", "/api/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["endpoints"]["POST /api/submit-quiz"].is_string());
    }

    #[tokio::test]
    async fn test_list_news_clamps_limit() {
        let news = (0..5).map(|i| news_doc(&format!("n{}", i))).collect();
        let (status, body) = call(app(news, None), "GET", "/api/news?category=science&limit=3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        assert_eq!(body["articles"][0]["id"], "n0");
        assert_eq!(body["articles"][0]["metadata"]["source"], "Test Wire");

        let news = (0..2).map(|i| news_doc(&format!("n{}", i))).collect();
        let (_, body) = call(app(news, None), "GET", "/api/news?limit=0", None).await;
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_list_news_default_limit() {
        let news = (0..8).map(|i| news_doc(&format!("n{}", i))).collect();
        let (status, body) = call(app(news, None), "GET", "/api/news", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);

        let papers = (0..8).map(|_| paper_doc()).collect();
        let (_, body) = call(app(vec![], Some(papers)), "GET", "/api/papers", None).await;
        assert_eq!(body["count"], 5);
    }

    #[tokio::test]
    async fn test_papers_fetch_failure_is_bad_gateway() {
        let (status, body) = call(app(vec![], None), "GET", "/api/papers?query=graphs", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["type"], "fetch_error");
    }

    #[tokio::test]
    async fn test_generate_from_news() {
        let request = json!({"article_id": 1, "num_questions": 3, "seed": 7});
        let news = vec![news_doc("a"), news_doc("b")];
        let (status, body) = call(app(news, None), "POST", "/api/generate-from-news", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["article"]["id"], "b");
        let count = body["count"].as_u64().unwrap();
        assert!(count >= 1 && count <= 3);
        assert_eq!(body["questions"].as_array().unwrap().len() as u64, count);
    }

    #[tokio::test]
    async fn test_generate_is_deterministic_with_seed() {
        let request = json!({"num_questions": 3, "seed": 42});
        let (_, first) = call(app(vec![news_doc("a")], None), "POST", "/api/generate-from-news", Some(request.clone())).await;
        let (_, second) = call(app(vec![news_doc("a")], None), "POST", "/api/generate-from-news", Some(request)).await;
        assert_eq!(first["questions"], second["questions"]);
    }

    #[tokio::test]
    async fn test_index_out_of_range() {
        let request = json!({"article_id": 5});
        let (status, body) = call(app(vec![news_doc("a")], None), "POST", "/api/generate-from-news", Some(request)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "index_out_of_range");
    }

    #[tokio::test]
    async fn test_generate_from_paper_with_forced_type() {
        let request = json!({"query": "graphs", "num_questions": 2, "question_type": "true_false", "seed": 3});
        let (status, body) = call(app(vec![], Some(vec![paper_doc()])), "POST", "/api/generate-from-paper", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["paper"]["id"], "2401.01234v1");
        for question in body["questions"].as_array().unwrap() {
            assert_eq!(question["type"], "true_false");
            let answer = question["correct_answer"].as_str().unwrap();
            assert!(answer == "true" || answer == "false");
        }
    }

    #[tokio::test]
    async fn test_generate_quiz_from_content() {
        let request = json!({"content": BODY, "type": "paper", "source_id": 9, "num_questions": 2});
        let (status, body) = call(app(vec![], None), "POST", "/api/generate-quiz", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source_type"], "paper");
        assert_eq!(body["source_id"], 9);
        assert!(body["count"].as_u64().unwrap() >= 1);

        let (status, body) = call(app(vec![], None), "POST", "/api/generate-quiz", Some(json!({"content": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request");
    }

    #[tokio::test]
    async fn test_unusable_content_yields_no_questions() {
        let request = json!({"content": "Hi. Ok."});
        let (status, body) = call(app(vec![], None), "POST", "/api/generate-quiz", Some(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["type"], "no_questions_generated");
    }

    #[tokio::test]
    async fn test_submit_quiz() {
        let request = json!({
            "questions": [
                {"type": "fill_blank", "question": "It is located in _____, France.", "correct_answer": "Paris", "explanation": "It is located in Paris, France."},
                {"type": "true_false", "question": "True or False: The tower is 330 metres tall.", "correct_answer": "true", "explanation": "The tower is 330 metres tall."},
                {"type": "true_false", "question": "True or False: It opened in 1900.", "correct_answer": "false", "explanation": "It opened in 1889."}
            ],
            "answers": ["  paris ", true, "true"]
        });
        let (status, body) = call(app(vec![], None), "POST", "/api/submit-quiz", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["correct"], 2);
        assert_eq!(body["total"], 3);
        assert_eq!(body["score"], 67);
        assert_eq!(body["results"][2]["is_correct"], false);
        assert_eq!(body["results"][2]["question_index"], 2);
    }

    #[tokio::test]
    async fn test_served_questions_can_be_submitted() {
        let request = json!({"content": BODY, "num_questions": 3, "seed": 11});
        let (_, quiz) = call(app(vec![], None), "POST", "/api/generate-quiz", Some(request)).await;
        let questions = quiz["questions"].as_array().unwrap().clone();
        for question in &questions {
            assert_eq!(question["question"], question["prompt"]);
        }

        let answers: Vec<Value> = questions.iter().map(|q| q["correct_answer"].clone()).collect();
        let submission = json!({"questions": questions, "answers": answers});
        let (status, body) = call(app(vec![], None), "POST", "/api/submit-quiz", Some(submission)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
    }

    #[tokio::test]
    async fn test_submit_mismatch_is_rejected() {
        let request = json!({
            "questions": [{"type": "fill_blank", "question": "_____ is big.", "correct_answer": "Paris"}],
            "answers": []
        });
        let (status, body) = call(app(vec![], None), "POST", "/api/submit-quiz", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "malformed_submission");
    }

    #[tokio::test]
    async fn test_undecodable_submission_is_structured_error() {
        let request = json!({
            "questions": [{"type": "true_false", "question": "True or False: x"}],
            "answers": ["true"]
        });
        let (status, body) = call(app(vec![], None), "POST", "/api/submit-quiz", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request");
        assert!(body["error"]["message"].as_str().unwrap().contains("correct_answer"));
    }

    #[tokio::test]
    async fn test_wrong_field_types_are_structured_errors() {
        let cases = [
            ("/api/generate-from-news", json!({"article_id": "abc"})),
            ("/api/generate-from-paper", json!({"num_questions": "three"})),
            ("/api/generate-quiz", json!({"content": 42})),
        ];
        for (uri, request) in cases {
            let (status, body) = call(app(vec![news_doc("a")], Some(vec![paper_doc()])), "POST", uri, Some(request)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"]["type"], "invalid_request", "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_structured_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/submit-quiz")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"questions\": ["))
            .unwrap();
        let response = app(vec![], None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "invalid_request");
    }
}
