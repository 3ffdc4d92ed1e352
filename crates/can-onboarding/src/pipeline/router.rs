use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::dashboard::DashboardTab;
use super::domain::ApplicantId;
use super::intake::{ApplicationForm, IntakeError};
use super::repository::{ApplicantRepository, RepositoryError};
use super::service::{OnboardingService, OnboardingServiceError};
use super::timing::parse_timestamp;
use super::views::ApplicantCardView;

pub(crate) const SUBMISSION_FAILED: &str = "Failed to submit application. Please try again.";

/// Optional overrides for the evaluation clock and the selected tab.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ViewQuery {
    #[serde(default)]
    pub(crate) now: Option<String>,
    #[serde(default)]
    pub(crate) tab: Option<String>,
}

impl ViewQuery {
    fn now(&self) -> Result<DateTime<Utc>, Response> {
        match self.now.as_deref() {
            None => Ok(Utc::now()),
            Some(raw) => parse_timestamp(raw).map_err(bad_request),
        }
    }

    fn tab(&self) -> Result<DashboardTab, Response> {
        match self.tab.as_deref() {
            None => Ok(DashboardTab::default()),
            Some(raw) => raw.parse::<DashboardTab>().map_err(bad_request),
        }
    }
}

fn bad_request(err: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

fn internal_error(err: OnboardingServiceError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

/// Router builder exposing intake and dashboard endpoints.
pub fn onboarding_router<R>(service: Arc<OnboardingService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route("/api/v1/applicants", post(submit_handler::<R>))
        .route(
            "/api/v1/applicants/:applicant_id",
            get(applicant_handler::<R>),
        )
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/pipeline", get(pipeline_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    axum::Json(form): axum::Json<ApplicationForm>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let delay = service.submission_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let now = Utc::now();
    match service.submit(form, now) {
        Ok(applicant) => {
            let view = ApplicantCardView::build(&applicant, now);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(OnboardingServiceError::Intake(error)) => {
            let step = error.step();
            let status = match &error {
                IntakeError::IncompleteStep { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                IntakeError::NotOnFinalStep { .. } => StatusCode::BAD_REQUEST,
            };
            let payload = json!({
                "error": error.to_string(),
                "step": step,
                "step_number": step.number(),
                "step_title": step.title(),
            });
            (status, axum::Json(payload)).into_response()
        }
        Err(OnboardingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "applicant already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(OnboardingServiceError::Repository(_)) => {
            let payload = json!({
                "error": SUBMISSION_FAILED,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn applicant_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(applicant_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let now = match query.now() {
        Ok(now) => now,
        Err(response) => return response,
    };

    let id = ApplicantId(applicant_id);
    match service.card(&id, now) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "applicant not found",
                "applicant_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Query(query): Query<ViewQuery>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let (now, tab) = match (query.now(), query.tab()) {
        (Ok(now), Ok(tab)) => (now, tab),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    match service.dashboard(tab, now) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn pipeline_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Query(query): Query<ViewQuery>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let now = match query.now() {
        Ok(now) => now,
        Err(response) => return response,
    };

    match service.board(now) {
        Ok(columns) => (StatusCode::OK, axum::Json(json!({ "columns": columns }))).into_response(),
        Err(other) => internal_error(other),
    }
}
