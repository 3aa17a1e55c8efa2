use crate::cli::ServeArgs;
use crate::infra::{
    seed_register, seed_users, AppState, InMemoryFeedbackRepository,
    InMemoryOrganisationRepository, InMemoryProfessionRepository, InMemoryUserRepository,
};
use crate::routes::with_register_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use regulated_professions::config::AppConfig;
use regulated_professions::error::AppError;
use regulated_professions::register::feedback::FeedbackService;
use regulated_professions::register::RegisterService;
use regulated_professions::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let professions = Arc::new(InMemoryProfessionRepository::default());
    let organisations = Arc::new(InMemoryOrganisationRepository::default());
    let feedback = Arc::new(InMemoryFeedbackRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());

    if config.register.seed_demo_data {
        seed_register(professions.as_ref(), organisations.as_ref())?;
        seed_users(users.as_ref())?;
        info!("seeded demo register data");
    }

    let register_service = Arc::new(RegisterService::new(professions, organisations));
    let feedback_service = Arc::new(FeedbackService::new(feedback));

    let app = with_register_routes(register_service, feedback_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "register of regulated professions ready");

    axum::serve(listener, app).await?;
    Ok(())
}
