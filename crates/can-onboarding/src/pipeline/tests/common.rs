use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::pipeline::domain::{Applicant, ApplicantId, ApplicantStatus};
use crate::pipeline::intake::ApplicationForm;
use crate::pipeline::repository::{ApplicantRepository, RepositoryError};
use crate::pipeline::sample::sample_applicants;
use crate::pipeline::{onboarding_router, OnboardingService};

pub(super) fn at(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 timestamp")
}

/// Clock after both sample due dates.
pub(super) fn late_january() -> DateTime<Utc> {
    at("2025-01-24T00:00:00Z")
}

pub(super) fn applicant(id: &str, status: &str) -> Applicant {
    Applicant {
        id: ApplicantId(id.to_string()),
        first_name: "Test".to_string(),
        last_name: format!("Applicant {id}"),
        email: format!("applicant-{id}@example.com"),
        phone: "(555) 000-0000".to_string(),
        status: ApplicantStatus::from(status),
        has_pa_license: false,
        has_bond: false,
        license_number: None,
        license_state: None,
        license_expiry: None,
        bond_number: None,
        bond_amount: None,
        bond_expiry: None,
        next_action_due: None,
        created_at: at("2025-01-15T12:00:00Z"),
        specialties: Vec::new(),
        deployment_region: None,
    }
}

pub(super) fn mixed_roster() -> Vec<Applicant> {
    vec![
        applicant("a", "application_submitted"),
        applicant("b", "ops_interview_scheduled"),
        applicant("c", "hired_inactive"),
        applicant("d", "compliance_verification"),
        applicant("e", "claims_interview_scheduled"),
        applicant("f", "rejected"),
        applicant("g", "deployed"),
        applicant("h", "final_interview_pending"),
        applicant("i", "active_not_deployed"),
        applicant("j", "application_submitted"),
        applicant("k", "other_roles_review"),
        applicant("l", "contract_sent"),
    ]
}

pub(super) fn complete_form() -> ApplicationForm {
    ApplicationForm {
        first_name: "Dana".to_string(),
        last_name: "Reyes".to_string(),
        email: "dana.reyes@example.com".to_string(),
        phone: "(555) 222-3344".to_string(),
        address: "41 Harbor Way".to_string(),
        city: "Tampa".to_string(),
        state: "FL".to_string(),
        zip: "33602".to_string(),
        has_pa_license: true,
        license_number: "PA-99812".to_string(),
        license_state: "FL".to_string(),
        license_expiry: "2026-06-30".to_string(),
        has_bond: true,
        bond_number: "SB-4410".to_string(),
        bond_amount: "50000".to_string(),
        bond_expiry: "2026-01-31".to_string(),
        specialties: vec!["Wind Damage".to_string(), "Flood Damage".to_string()],
        source: "Referral".to_string(),
        notes: String::new(),
    }
}

pub(super) fn unlicensed_form() -> ApplicationForm {
    ApplicationForm {
        has_pa_license: false,
        license_number: String::new(),
        license_state: String::new(),
        license_expiry: String::new(),
        ..complete_form()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) applicants: Arc<Mutex<Vec<Applicant>>>,
}

impl MemoryRepository {
    pub(super) fn seeded(applicants: Vec<Applicant>) -> Self {
        Self {
            applicants: Arc::new(Mutex::new(applicants)),
        }
    }
}

impl ApplicantRepository for MemoryRepository {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        let mut guard = self.applicants.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == applicant.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(applicant.clone());
        Ok(applicant)
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = self.applicants.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|applicant| &applicant.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self
            .applicants
            .lock()
            .expect("repository mutex poisoned")
            .clone())
    }
}

pub(super) struct ConflictRepository;

impl ApplicantRepository for ConflictRepository {
    fn insert(&self, _applicant: Applicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn insert(&self, _applicant: Applicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (OnboardingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::seeded(sample_applicants()));
    let service = OnboardingService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: OnboardingService<MemoryRepository>) -> axum::Router {
    onboarding_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
