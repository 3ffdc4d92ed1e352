use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::board::group_by_stage;
use super::dashboard::{DashboardSnapshot, DashboardState, DashboardTab};
use super::domain::{Applicant, ApplicantId};
use super::intake::{first_incomplete_step, ApplicationForm, IntakeError, SubmittedApplication};
use super::repository::{ApplicantRepository, RepositoryError};
use super::views::{board_columns, ApplicantCardView, BoardColumnView};

/// Service composing intake validation, the applicant repository, and dashboard derivations.
pub struct OnboardingService<R> {
    repository: Arc<R>,
    submission_delay: Duration,
}

static APPLICANT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_applicant_id() -> ApplicantId {
    let id = APPLICANT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicantId(format!("can-{id:06}"))
}

impl<R> OnboardingService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            submission_delay: Duration::ZERO,
        }
    }

    /// Artificial latency awaited by the HTTP layer before each submission.
    pub fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submission_delay = delay;
        self
    }

    pub fn submission_delay(&self) -> Duration {
        self.submission_delay
    }

    /// Validate every wizard step, derive the initial status, and persist the new applicant.
    pub fn submit(
        &self,
        form: ApplicationForm,
        now: DateTime<Utc>,
    ) -> Result<Applicant, OnboardingServiceError> {
        if let Some(step) = first_incomplete_step(&form) {
            warn!(
                step = step.title(),
                "application rejected: required fields missing"
            );
            return Err(IntakeError::IncompleteStep { step }.into());
        }

        let submission = SubmittedApplication::new(form, now);
        let applicant = submission.into_applicant(next_applicant_id());
        let stored = self.repository.insert(applicant).map_err(|err| {
            warn!(error = %err, "application submission failed");
            err
        })?;

        info!(
            applicant_id = %stored.id,
            status = %stored.status,
            "application submitted"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &ApplicantId) -> Result<Applicant, OnboardingServiceError> {
        match self.repository.fetch(id)? {
            Some(applicant) => Ok(applicant),
            None => Err(RepositoryError::NotFound.into()),
        }
    }

    pub fn list(&self) -> Result<Vec<Applicant>, OnboardingServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn card(
        &self,
        id: &ApplicantId,
        now: DateTime<Utc>,
    ) -> Result<ApplicantCardView, OnboardingServiceError> {
        let applicant = self.get(id)?;
        Ok(ApplicantCardView::build(&applicant, now))
    }

    pub fn board(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<BoardColumnView>, OnboardingServiceError> {
        let applicants = self.list()?;
        Ok(board_columns(&group_by_stage(&applicants), now))
    }

    pub fn dashboard(
        &self,
        tab: DashboardTab,
        now: DateTime<Utc>,
    ) -> Result<DashboardSnapshot, OnboardingServiceError> {
        let mut state = DashboardState::new(self.list()?);
        state.set_active_tab(tab);
        Ok(state.snapshot(now))
    }
}

/// Error raised by the onboarding service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
