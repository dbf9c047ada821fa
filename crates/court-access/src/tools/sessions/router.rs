use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{SessionServiceError, ToolSessionService};
use crate::tools::navigator::NavigatorError;

/// Body of the navigator `advance` and quiz `select` calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptionChoice {
    pub option: usize,
}

/// Router builder exposing navigator and quiz session endpoints.
pub fn session_router<R>(service: Arc<ToolSessionService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/navigator/sessions", post(start_navigator_handler::<R>))
        .route(
            "/api/v1/navigator/sessions/:session_id",
            get(navigator_handler::<R>),
        )
        .route(
            "/api/v1/navigator/sessions/:session_id/advance",
            post(navigator_advance_handler::<R>),
        )
        .route(
            "/api/v1/navigator/sessions/:session_id/back",
            post(navigator_back_handler::<R>),
        )
        .route(
            "/api/v1/navigator/sessions/:session_id/reset",
            post(navigator_reset_handler::<R>),
        )
        .route("/api/v1/quiz/sessions", post(start_quiz_handler::<R>))
        .route("/api/v1/quiz/sessions/:session_id", get(quiz_handler::<R>))
        .route(
            "/api/v1/quiz/sessions/:session_id/select",
            post(quiz_select_handler::<R>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/submit",
            post(quiz_submit_handler::<R>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/advance",
            post(quiz_advance_handler::<R>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/restart",
            post(quiz_restart_handler::<R>),
        )
        .with_state(service)
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, SessionServiceError>) -> Response {
    match result {
        Ok(view) => (status, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

/// HTTP status for a session failure; shared with `AppError`.
pub fn session_error_status(error: &SessionServiceError) -> StatusCode {
    match error {
        SessionServiceError::NotFound(_)
        | SessionServiceError::WrongKind { .. }
        | SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Navigator(NavigatorError::OptionOutOfRange { .. }) => {
            StatusCode::BAD_REQUEST
        }
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Navigator(_) | SessionServiceError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn error_response(error: SessionServiceError) -> Response {
    let status = session_error_status(&error);
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn start_navigator_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::CREATED, service.start_navigator())
}

pub(crate) async fn navigator_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.navigator(&SessionId(session_id)))
}

pub(crate) async fn navigator_advance_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
    Json(choice): Json<OptionChoice>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(
        StatusCode::OK,
        service.navigator_advance(&SessionId(session_id), choice.option),
    )
}

pub(crate) async fn navigator_back_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.navigator_back(&SessionId(session_id)))
}

pub(crate) async fn navigator_reset_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.navigator_reset(&SessionId(session_id)))
}

pub(crate) async fn start_quiz_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::CREATED, service.start_quiz())
}

pub(crate) async fn quiz_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.quiz(&SessionId(session_id)))
}

pub(crate) async fn quiz_select_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
    Json(choice): Json<OptionChoice>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(
        StatusCode::OK,
        service.quiz_select(&SessionId(session_id), choice.option),
    )
}

pub(crate) async fn quiz_submit_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.quiz_submit(&SessionId(session_id)))
}

pub(crate) async fn quiz_advance_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.quiz_advance(&SessionId(session_id)))
}

pub(crate) async fn quiz_restart_handler<R>(
    State(service): State<Arc<ToolSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(StatusCode::OK, service.quiz_restart(&SessionId(session_id)))
}
