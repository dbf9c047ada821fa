use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_tool_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use court_access::config::AppConfig;
use court_access::error::AppError;
use court_access::telemetry;
use court_access::tools::calculator::RecommendationEngine;
use court_access::tools::navigator::DecisionGraph;
use court_access::tools::quiz::QuestionBank;
use court_access::tools::sessions::{InMemorySessionRepository, ToolSessionService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let graph = DecisionGraph::standard();
    let audit = graph.audit();
    for defect in &audit.defects {
        warn!(defect = %defect.summary(), "decision tree defect");
    }

    let repository = Arc::new(InMemorySessionRepository::with_capacity(
        config.tools.max_sessions,
    ));
    let sessions = Arc::new(ToolSessionService::new(
        repository,
        Arc::new(graph),
        Arc::new(QuestionBank::standard()),
        config.tools.navigator_progress_steps,
    ));
    let engine = Arc::new(RecommendationEngine::standard());

    let app = with_tool_routes(engine, sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_sessions = config.tools.max_sessions,
        "court access toolkit ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
