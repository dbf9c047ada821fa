use std::sync::{Arc, Barrier};

use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::tools::sessions::{
    session_router, InMemorySessionRepository, RepositoryError, SessionId, SessionRecord,
    SessionRepository, ToolSessionService,
};

pub(super) fn service() -> ToolSessionService<InMemorySessionRepository> {
    ToolSessionService::standard(Arc::new(InMemorySessionRepository::default()))
}

pub(super) fn router() -> axum::Router {
    session_router(Arc::new(service()))
}

pub(super) struct UnavailableRepository;

/// Holds every `modify` call at `gate` so concurrent transitions reach the
/// store together.
pub(super) struct RendezvousRepository {
    pub(super) inner: Arc<InMemorySessionRepository>,
    pub(super) gate: Barrier,
}

impl SessionRepository for RendezvousRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        self.gate.wait();
        self.inner.modify(id, change)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        self.inner.fetch(id)
    }
}

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn modify<T, F>(&self, _id: &SessionId, _change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn post(uri: &str) -> Request<axum::body::Body> {
    Request::post(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) fn post_option(uri: &str, option: usize) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::json!({ "option": option }).to_string(),
        ))
        .expect("request builds")
}

pub(super) fn get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
