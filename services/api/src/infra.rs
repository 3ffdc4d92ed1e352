use can_onboarding::pipeline::{
    Applicant, ApplicantId, ApplicantRepository, DashboardTab, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local applicant store. Insertion order is the dashboard's listing order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicantRepository {
    applicants: Arc<Mutex<Vec<Applicant>>>,
}

impl InMemoryApplicantRepository {
    pub(crate) fn seeded(applicants: Vec<Applicant>) -> Self {
        Self {
            applicants: Arc::new(Mutex::new(applicants)),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Applicant>>, RepositoryError> {
        self.applicants
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.iter().any(|existing| existing.id == applicant.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(applicant.clone());
        Ok(applicant)
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().find(|applicant| &applicant.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.guard()?.clone())
    }
}

pub(crate) fn parse_tab(raw: &str) -> Result<DashboardTab, String> {
    raw.parse::<DashboardTab>().map_err(|err| err.to_string())
}
