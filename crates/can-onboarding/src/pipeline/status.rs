use serde::Serialize;

use super::domain::{ApplicantStatus, IconKind, StyleCategory};

/// Display metadata for a status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub status: ApplicantStatus,
    pub label: String,
    pub style: StyleCategory,
    pub style_class: &'static str,
    pub icon: IconKind,
}

impl ApplicantStatus {
    /// Fixed label, style, and icon for the known statuses; `None` for unknown identifiers.
    pub fn presentation(&self) -> Option<(&'static str, StyleCategory, IconKind)> {
        let entry = match self {
            Self::ApplicationSubmitted => (
                "Application Submitted",
                StyleCategory::Submitted,
                IconKind::FileText,
            ),
            Self::OtherRolesReview => ("Other Roles Review", StyleCategory::Review, IconKind::User),
            Self::ComplianceVerification => (
                "Compliance Verification",
                StyleCategory::Review,
                IconKind::Shield,
            ),
            Self::HrContractPending => (
                "HR Contract Pending",
                StyleCategory::Contract,
                IconKind::FileText,
            ),
            Self::ContractSent => ("Contract Sent", StyleCategory::Contract, IconKind::FileText),
            Self::HiredInactive => (
                "Hired (Inactive)",
                StyleCategory::Verified,
                IconKind::CheckCircle,
            ),
            Self::OpsInterviewScheduled => (
                "Ops Interview Scheduled",
                StyleCategory::Interview,
                IconKind::Calendar,
            ),
            Self::ClaimsInterviewScheduled => (
                "Claims Interview Scheduled",
                StyleCategory::Interview,
                IconKind::Calendar,
            ),
            Self::ActiveNotDeployed => (
                "Active - Not Deployed",
                StyleCategory::Active,
                IconKind::CheckCircle,
            ),
            Self::Deployed => ("Deployed", StyleCategory::Deployed, IconKind::CheckCircle),
            Self::Rejected => ("Rejected", StyleCategory::Rejected, IconKind::AlertTriangle),
            Self::Other(_) => return None,
        };
        Some(entry)
    }
}

/// Resolve badge metadata for a raw status identifier. Never fails.
pub fn classify_status(status: &str) -> StatusDescriptor {
    describe(&ApplicantStatus::parse(status))
}

pub fn describe(status: &ApplicantStatus) -> StatusDescriptor {
    let (label, style, icon) = match status.presentation() {
        Some((label, style, icon)) => (label.to_string(), style, icon),
        None => (
            humanize_status(status.as_str()),
            StyleCategory::Generic,
            IconKind::User,
        ),
    };

    StatusDescriptor {
        status: status.clone(),
        label,
        style,
        style_class: style.css_class(),
        icon,
    }
}

/// `some_new_status` -> `Some New Status`. Only the first letter of each word changes case.
pub fn humanize_status(raw: &str) -> String {
    let mut label = String::with_capacity(raw.len());
    let mut in_word = false;

    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && !in_word {
            label.push(ch.to_ascii_uppercase());
        } else {
            label.push(ch);
        }
        in_word = is_word;
    }

    label
}
