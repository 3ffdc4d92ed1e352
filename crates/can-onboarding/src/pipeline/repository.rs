use super::domain::{Applicant, ApplicantId};

/// Storage abstraction so the service can run against the in-memory roster or a real backend.
pub trait ApplicantRepository: Send + Sync {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError>;
    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    /// All applicants in insertion order.
    fn list(&self) -> Result<Vec<Applicant>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("applicant already exists")]
    Conflict,
    #[error("applicant not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
