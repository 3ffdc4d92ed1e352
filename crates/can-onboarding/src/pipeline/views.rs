use chrono::{DateTime, Utc};
use serde::Serialize;

use super::board::{PipelineStage, StageBuckets};
use super::domain::{Applicant, ApplicantId};
use super::status::{describe, StatusDescriptor};

const CARD_SPECIALTY_LIMIT: usize = 3;
const PIPELINE_SPECIALTY_LIMIT: usize = 2;

/// Leading specialties plus an overflow badge for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyPreview {
    pub shown: Vec<String>,
    pub hidden: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_label: Option<String>,
}

impl SpecialtyPreview {
    fn build(specialties: &[String], limit: usize, overflow_suffix: &str) -> Self {
        let shown: Vec<String> = specialties.iter().take(limit).cloned().collect();
        let hidden = specialties.len().saturating_sub(limit);
        let overflow_label = (hidden > 0).then(|| format!("+{hidden}{overflow_suffix}"));
        Self {
            shown,
            hidden,
            overflow_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// Detail card rendered on the tab listings.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantCardView {
    pub id: ApplicantId,
    pub full_name: String,
    pub status: StatusDescriptor,
    pub overdue: bool,
    pub days_since_applied: i64,
    pub applied_label: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_line: Option<String>,
    pub credential_badges: Vec<&'static str>,
    pub specialties: SpecialtyPreview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_due_label: Option<String>,
}

impl ApplicantCardView {
    pub fn build(applicant: &Applicant, now: DateTime<Utc>) -> Self {
        let overdue = applicant.is_overdue(now);
        let days_since_applied = applicant.days_since_applied(now);

        let mut credential_badges = Vec::new();
        if applicant.has_pa_license {
            credential_badges.push("Licensed PA");
        }
        if applicant.has_bond {
            credential_badges.push("Bonded");
        }

        let action_due_label = applicant.next_action_due.map(|due| {
            let mut label = format!("Action due: {}", due.format("%Y-%m-%d"));
            if overdue {
                label.push_str(" (Overdue)");
            }
            label
        });

        Self {
            id: applicant.id.clone(),
            full_name: applicant.full_name(),
            status: describe(&applicant.status),
            overdue,
            days_since_applied,
            applied_label: format!("Applied {days_since_applied} days ago"),
            email: applicant.email.clone(),
            phone: applicant.phone.clone(),
            license_line: applicant
                .license_state
                .as_ref()
                .map(|state| format!("Licensed in {state}")),
            credential_badges,
            specialties: SpecialtyPreview::build(
                &applicant.specialties,
                CARD_SPECIALTY_LIMIT,
                " more",
            ),
            next_action_due: applicant.next_action_due,
            action_due_label,
        }
    }
}

/// Compact card rendered inside a board column.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineCardView {
    pub id: ApplicantId,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_state: Option<String>,
    pub email: String,
    pub licensed: bool,
    pub bonded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_due: Option<DateTime<Utc>>,
    pub overdue: bool,
    pub specialties: SpecialtyPreview,
}

impl PipelineCardView {
    pub fn build(applicant: &Applicant, now: DateTime<Utc>) -> Self {
        Self {
            id: applicant.id.clone(),
            full_name: applicant.full_name(),
            license_state: applicant.license_state.clone(),
            email: applicant.email.clone(),
            licensed: applicant.has_pa_license,
            bonded: applicant.has_bond,
            next_action_due: applicant.next_action_due,
            overdue: applicant.is_overdue(now),
            specialties: SpecialtyPreview::build(
                &applicant.specialties,
                PIPELINE_SPECIALTY_LIMIT,
                "",
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumnView {
    pub stage: PipelineStage,
    pub stage_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge_class: &'static str,
    pub count: usize,
    pub applicants: Vec<PipelineCardView>,
}

pub fn board_columns(buckets: &StageBuckets<'_>, now: DateTime<Utc>) -> Vec<BoardColumnView> {
    buckets
        .iter()
        .map(|(stage, applicants)| BoardColumnView {
            stage,
            stage_id: stage.id(),
            title: stage.title(),
            description: stage.description(),
            badge_class: stage.badge_class(),
            count: applicants.len(),
            applicants: applicants
                .iter()
                .map(|applicant| PipelineCardView::build(applicant, now))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn card_preview_truncates_to_three_with_more_label() {
        let specialties = tags(&["Wind", "Flood", "Fire", "Hail", "Auto"]);
        let preview = SpecialtyPreview::build(&specialties, 3, " more");
        assert_eq!(preview.shown, tags(&["Wind", "Flood", "Fire"]));
        assert_eq!(preview.hidden, 2);
        assert_eq!(preview.overflow_label.as_deref(), Some("+2 more"));
    }

    #[test]
    fn pipeline_preview_uses_bare_overflow_count() {
        let preview = SpecialtyPreview::build(&tags(&["Wind", "Flood", "Fire"]), 2, "");
        assert_eq!(preview.shown, tags(&["Wind", "Flood"]));
        assert_eq!(preview.overflow_label.as_deref(), Some("+1"));
    }

    #[test]
    fn preview_without_overflow_has_no_label() {
        let preview = SpecialtyPreview::build(&tags(&["Wind", "Flood"]), 3, " more");
        assert_eq!(preview.hidden, 0);
        assert!(preview.overflow_label.is_none());
        assert!(SpecialtyPreview::build(&[], 2, "").is_empty());
    }
}
