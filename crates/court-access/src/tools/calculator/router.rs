use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AnswerSet, ChecklistOptions};
use super::engine::{MatchedRecommendation, RecommendationEngine};
use super::letter::{compose, letter_mime, LetterFields, PlaceholderLabels, LETTER_FILENAME};

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub answers: AnswerSet,
    pub count: usize,
    pub recommendations: Vec<MatchedRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub placeholders: Option<PlaceholderLabels>,
}

/// Router builder exposing the calculator checklist, evaluation, and letter endpoints.
pub fn calculator_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/calculator/options", get(options_handler))
        .route(
            "/api/v1/calculator/recommendations",
            post(recommendations_handler),
        )
        .route("/api/v1/calculator/letter", post(letter_handler))
        .with_state(engine)
}

pub(crate) async fn options_handler() -> Json<ChecklistOptions> {
    Json(ChecklistOptions::standard())
}

pub(crate) async fn recommendations_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(answers): Json<AnswerSet>,
) -> Response {
    if let Err(incomplete) = answers.ensure_complete() {
        let payload = json!({ "error": incomplete.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let result = engine.evaluate(&answers);
    let body = RecommendationResponse {
        count: result.len(),
        recommendations: result.recommendations,
        answers,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn letter_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<LetterRequest>,
) -> Response {
    let LetterRequest {
        answers,
        date,
        placeholders,
    } = request;

    if let Err(incomplete) = answers.ensure_complete() {
        let payload = json!({ "error": incomplete.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let fields = LetterFields {
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        placeholders: placeholders.unwrap_or_default(),
    };
    let result = engine.evaluate(&answers);
    let letter = compose(&result, &answers, &fields);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, letter_mime().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{LETTER_FILENAME}\""),
            ),
        ],
        letter,
    )
        .into_response()
}
