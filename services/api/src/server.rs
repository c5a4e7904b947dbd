use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryDirectory, InMemoryLeadRepository, InMemoryNotifier, InMemoryQuoteRepository,
};
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use devis_travaux::config::AppConfig;
use devis_travaux::error::AppError;
use devis_travaux::telemetry;
use devis_travaux::workflows::directory::DirectoryService;
use devis_travaux::workflows::estimator::{Estimator, FormulaTable};
use devis_travaux::workflows::leads::LeadService;
use devis_travaux::workflows::quotes::QuoteRequestService;
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

    let catalog = config.estimator.catalog()?;
    info!(
        categories = catalog.categories().len(),
        source = ?config.estimator.catalog_path,
        "estimator catalog loaded"
    );
    let estimator = Arc::new(Estimator::new(Arc::new(catalog), FormulaTable::standard()));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let lead_service = Arc::new(LeadService::with_notify_address(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(InMemoryNotifier::default()),
        config.leads.notify_address.clone(),
    ));
    let quote_service = Arc::new(QuoteRequestService::new(Arc::new(
        InMemoryQuoteRepository::default(),
    )));
    let directory_service = Arc::new(DirectoryService::new(Arc::new(
        InMemoryDirectory::seeded(),
    )));

    let app = with_application_routes(estimator, lead_service, quote_service, directory_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "renovation estimate service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
