use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicantRepository};
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use can_onboarding::config::AppConfig;
use can_onboarding::error::AppError;
use can_onboarding::pipeline::{sample_applicants, OnboardingService};
use can_onboarding::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = if config.dashboard.seed_sample_applicants {
        InMemoryApplicantRepository::seeded(sample_applicants())
    } else {
        InMemoryApplicantRepository::default()
    };
    let onboarding_service = Arc::new(
        OnboardingService::new(Arc::new(repository))
            .with_submission_delay(config.dashboard.submission_delay),
    );

    let app = with_onboarding_routes(onboarding_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.dashboard.seed_sample_applicants,
        submission_delay_ms = config.dashboard.submission_delay.as_millis() as u64,
        "onboarding dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
