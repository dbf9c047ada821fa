use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use court_access::tools::calculator::{calculator_router, RecommendationEngine};
use court_access::tools::sessions::{session_router, SessionRepository, ToolSessionService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_tool_routes<R>(
    engine: Arc<RecommendationEngine>,
    sessions: Arc<ToolSessionService<R>>,
) -> axum::Router
where
    R: SessionRepository + 'static,
{
    calculator_router(engine)
        .merge(session_router(sessions))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use court_access::tools::sessions::InMemorySessionRepository;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
        };
        let sessions = Arc::new(ToolSessionService::standard(Arc::new(
            InMemorySessionRepository::with_capacity(8),
        )));
        with_tool_routes(Arc::new(RecommendationEngine::standard()), sessions)
            .layer(Extension(state))
    }

    async fn status_of(app: axum::Router, request: Request<Body>) -> StatusCode {
        app.oneshot(request).await.expect("router responds").status()
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let request = Request::get("/health").body(Body::empty()).expect("request builds");
        assert_eq!(status_of(app(false), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let request = Request::get("/ready").body(Body::empty()).expect("request builds");
        assert_eq!(
            status_of(app(false), request).await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        let request = Request::get("/ready").body(Body::empty()).expect("request builds");
        assert_eq!(status_of(app(true), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn tool_routers_are_mounted() {
        let request = Request::get("/api/v1/calculator/options")
            .body(Body::empty())
            .expect("request builds");
        assert_eq!(status_of(app(true), request).await, StatusCode::OK);

        let request = Request::post("/api/v1/quiz/sessions")
            .body(Body::empty())
            .expect("request builds");
        assert_eq!(status_of(app(true), request).await, StatusCode::CREATED);

        let request = Request::get("/api/v1/navigator/sessions/nav-000000")
            .body(Body::empty())
            .expect("request builds");
        assert_eq!(status_of(app(true), request).await, StatusCode::NOT_FOUND);
    }
}
