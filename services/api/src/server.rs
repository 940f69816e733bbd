use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAnswerStore};
use crate::routes::with_compatibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use kindred::compatibility::{CompatibilityEngine, CompatibilityService, QuestionCatalog};
use kindred::config::AppConfig;
use kindred::error::AppError;
use kindred::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(QuestionCatalog::load(config.engine.catalog_path.as_deref())?);
    info!(
        version = catalog.version(),
        questions = catalog.len(),
        suggestion_limit = config.engine.suggestion_limit,
        parallel_threshold = config.engine.parallel_threshold,
        "compatibility engine configured"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(CompatibilityEngine::from_config(catalog, &config.engine));
    let store = Arc::new(InMemoryAnswerStore::default());
    let service = Arc::new(CompatibilityService::from_config(
        engine,
        store.clone(),
        store,
        &config.engine,
    ));

    let app = with_compatibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "compatibility engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
