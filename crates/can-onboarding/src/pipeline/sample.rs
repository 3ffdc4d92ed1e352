use chrono::{DateTime, Utc};

use super::domain::{Applicant, ApplicantId, ApplicantStatus};

fn utc(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("seed timestamps are valid RFC 3339")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Seed roster used when no real data source is configured.
pub fn sample_applicants() -> Vec<Applicant> {
    vec![
        Applicant {
            id: ApplicantId("1".to_string()),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            status: ApplicantStatus::ApplicationSubmitted,
            has_pa_license: true,
            has_bond: true,
            license_number: None,
            license_state: Some("FL".to_string()),
            license_expiry: None,
            bond_number: None,
            bond_amount: None,
            bond_expiry: None,
            next_action_due: Some(utc("2025-01-23T10:00:00Z")),
            created_at: utc("2025-01-21T08:30:00Z"),
            specialties: tags(&["Wind", "Flood"]),
            deployment_region: Some(tags(&["South Florida"])),
        },
        Applicant {
            id: ApplicantId("2".to_string()),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            status: ApplicantStatus::ComplianceVerification,
            has_pa_license: true,
            has_bond: true,
            license_number: None,
            license_state: Some("TX".to_string()),
            license_expiry: None,
            bond_number: None,
            bond_amount: None,
            bond_expiry: None,
            next_action_due: Some(utc("2025-01-22T14:00:00Z")),
            created_at: utc("2025-01-20T11:15:00Z"),
            specialties: tags(&["Commercial", "Residential"]),
            deployment_region: None,
        },
        Applicant {
            id: ApplicantId("3".to_string()),
            first_name: "Mike".to_string(),
            last_name: "Williams".to_string(),
            email: "mike.williams@example.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            status: ApplicantStatus::ContractSent,
            has_pa_license: true,
            has_bond: true,
            license_number: None,
            license_state: Some("GA".to_string()),
            license_expiry: None,
            bond_number: None,
            bond_amount: None,
            bond_expiry: None,
            next_action_due: None,
            created_at: utc("2025-01-19T16:45:00Z"),
            specialties: tags(&["Wind", "Hail"]),
            deployment_region: None,
        },
    ]
}
