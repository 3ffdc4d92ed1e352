use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::pipeline::dashboard::{DashboardTab, TabContent};
use crate::pipeline::domain::{ApplicantId, ApplicantStatus};
use crate::pipeline::intake::{IntakeError, WizardStep};
use crate::pipeline::repository::RepositoryError;
use crate::pipeline::{OnboardingService, OnboardingServiceError};

#[test]
fn submit_licensed_and_bonded_routes_to_compliance() {
    let (service, repository) = build_service();

    let stored = service
        .submit(complete_form(), late_january())
        .expect("submission succeeds");

    assert_eq!(stored.status, ApplicantStatus::ComplianceVerification);
    assert!(stored.id.0.starts_with("can-"));
    assert_eq!(stored.created_at, late_january());
    assert_eq!(repository.applicants.lock().expect("lock").len(), 4);
}

#[test]
fn submit_without_license_routes_to_other_roles() {
    let (service, _) = build_service();

    let stored = service
        .submit(unlicensed_form(), late_january())
        .expect("submission succeeds");

    assert_eq!(stored.status, ApplicantStatus::OtherRolesReview);
    assert!(stored.license_state.is_none());
}

#[test]
fn submitted_ids_are_unique() {
    let (service, _) = build_service();
    let first = service
        .submit(complete_form(), late_january())
        .expect("first");
    let second = service
        .submit(complete_form(), late_january())
        .expect("second");
    assert_ne!(first.id, second.id);
}

#[test]
fn incomplete_form_is_rejected_before_storage() {
    let (service, repository) = build_service();
    let mut form = complete_form();
    form.license_expiry.clear();

    let err = service
        .submit(form, late_january())
        .expect_err("missing expiry");
    assert!(matches!(
        err,
        OnboardingServiceError::Intake(IntakeError::IncompleteStep {
            step: WizardStep::PaLicense
        })
    ));
    assert_eq!(repository.applicants.lock().expect("lock").len(), 3);
}

#[test]
fn repository_failures_surface_unchanged() {
    let service = OnboardingService::new(Arc::new(ConflictRepository));
    let err = service
        .submit(complete_form(), late_january())
        .expect_err("conflict");
    assert!(matches!(
        err,
        OnboardingServiceError::Repository(RepositoryError::Conflict)
    ));

    let service = OnboardingService::new(Arc::new(UnavailableRepository));
    let err = service.list().expect_err("store offline");
    assert!(matches!(
        err,
        OnboardingServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn get_missing_applicant_reports_not_found() {
    let (service, _) = build_service();
    let err = service
        .get(&ApplicantId("missing".to_string()))
        .expect_err("unknown id");
    assert!(matches!(
        err,
        OnboardingServiceError::Repository(RepositoryError::NotFound)
    ));
    assert_eq!(
        service
            .get(&ApplicantId("2".to_string()))
            .expect("sample present")
            .first_name,
        "Sarah"
    );
}

#[test]
fn dashboard_reflects_new_submission() {
    let (service, _) = build_service();
    service
        .submit(complete_form(), late_january())
        .expect("submission succeeds");

    let snapshot = service
        .dashboard(DashboardTab::Compliance, late_january())
        .expect("dashboard renders");

    assert_eq!(snapshot.total_applicants, 4);
    assert_eq!(snapshot.stats.in_compliance, 2);
    assert_eq!(snapshot.alert.overdue_count, 2);
    match snapshot.content {
        TabContent::Cards { applicants } => {
            assert_eq!(applicants.len(), 2);
            assert!(applicants
                .iter()
                .any(|card| card.full_name == "Dana Reyes" && !card.overdue));
        }
        other => panic!("expected cards, got {other:?}"),
    }
}

#[test]
fn board_groups_repository_contents() {
    let repository = Arc::new(MemoryRepository::seeded(mixed_roster()));
    let service = OnboardingService::new(repository);

    let columns = service.board(late_january()).expect("board renders");
    let counts: Vec<usize> = columns.iter().map(|column| column.count).collect();
    assert_eq!(counts, vec![2, 1, 1, 4, 1, 1]);
}

#[test]
fn submission_delay_defaults_to_zero() {
    let (service, _) = build_service();
    assert_eq!(service.submission_delay(), Duration::ZERO);
    let service = service.with_submission_delay(Duration::from_millis(1500));
    assert_eq!(service.submission_delay(), Duration::from_millis(1500));
}
