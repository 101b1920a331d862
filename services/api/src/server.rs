use crate::cli::ServeArgs;
use crate::infra::{plausibility_service, AppState};
use crate::routes::with_validation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use propertax::config::AppConfig;
use propertax::error::AppError;
use propertax::telemetry;
use propertax::workflows::anlage_v::{BuildingCatalog, TokenAuthenticator};
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

    let catalog = match &config.catalog.buildings_csv {
        Some(path) => BuildingCatalog::from_path(path)?,
        None => BuildingCatalog::default(),
    };
    info!(buildings = catalog.len(), "building catalog loaded");

    let authenticator = TokenAuthenticator::from_config(&config.auth);
    if authenticator.is_empty() {
        warn!("APP_API_TOKENS is empty; every validation request will be rejected");
    }

    let service = Arc::new(plausibility_service(catalog));
    let app = with_validation_routes(service, Arc::new(authenticator))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "anlage v plausibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
