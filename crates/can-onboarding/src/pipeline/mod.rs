//! Applicant pipeline: status model, intake wizard, dashboard views and their HTTP surface.

pub mod alerts;
pub mod board;
pub mod dashboard;
pub mod domain;
pub mod intake;
pub mod repository;
pub mod roster;
pub mod router;
pub mod sample;
pub mod service;
pub mod status;
pub mod timing;
pub mod views;

#[cfg(test)]
mod tests;

pub use alerts::{classify_overdue_severity, AlertBanner, OverdueSeverity};
pub use board::{
    compute_overview_stats, group_by_stage, is_interview_status, OverviewStats, PipelineStage,
    StageBuckets, StatEntry,
};
pub use dashboard::{DashboardSnapshot, DashboardState, DashboardTab, TabContent, UnknownTab};
pub use domain::{Applicant, ApplicantId, ApplicantStatus, IconKind, StyleCategory};
pub use intake::{
    first_incomplete_step, initial_status, validate_step, ApplicationForm, ApplicationWizard,
    IntakeError, SubmittedApplication, WizardStep, LEAD_SOURCES, SPECIALTIES, US_STATES,
};
pub use repository::{ApplicantRepository, RepositoryError};
pub use roster::{ApplicantRoster, RosterImportError};
pub use router::onboarding_router;
pub use sample::sample_applicants;
pub use service::{OnboardingService, OnboardingServiceError};
pub use status::{classify_status, describe, humanize_status, StatusDescriptor};
pub use timing::{days_since, is_overdue, overdue_count, parse_timestamp, InvalidTimestamp};
pub use views::{
    board_columns, ApplicantCardView, BoardColumnView, PipelineCardView, SpecialtyPreview,
};
