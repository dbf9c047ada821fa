use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::tools::calculator::{IncompleteAnswers, UnknownKey};
use crate::tools::navigator::NavigatorError;
use crate::tools::sessions::{session_error_status, SessionServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Serialization(serde_json::Error),
    Answers(IncompleteAnswers),
    Vocabulary(UnknownKey),
    Navigator(NavigatorError),
    Session(SessionServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
            AppError::Answers(err) => write!(f, "incomplete answers: {}", err),
            AppError::Vocabulary(err) => write!(f, "invalid selection: {}", err),
            AppError::Navigator(err) => write!(f, "navigator error: {}", err),
            AppError::Session(err) => write!(f, "session error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Serialization(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::Vocabulary(err) => Some(err),
            AppError::Navigator(err) => Some(err),
            AppError::Session(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Answers(_) | AppError::Vocabulary(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Navigator(NavigatorError::OptionOutOfRange { .. }) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Session(err) => session_error_status(err),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Serialization(_)
            | AppError::Navigator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<IncompleteAnswers> for AppError {
    fn from(value: IncompleteAnswers) -> Self {
        Self::Answers(value)
    }
}

impl From<UnknownKey> for AppError {
    fn from(value: UnknownKey) -> Self {
        Self::Vocabulary(value)
    }
}

impl From<NavigatorError> for AppError {
    fn from(value: NavigatorError) -> Self {
        Self::Navigator(value)
    }
}

impl From<SessionServiceError> for AppError {
    fn from(value: SessionServiceError) -> Self {
        Self::Session(value)
    }
}
