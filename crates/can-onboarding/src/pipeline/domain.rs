use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for applicants tracked on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pipeline stage an applicant currently sits in.
///
/// Statuses travel as their snake_case identifiers. Identifiers outside the known set are
/// preserved verbatim in [`ApplicantStatus::Other`] so a newer backend never breaks the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicantStatus {
    ApplicationSubmitted,
    OtherRolesReview,
    ComplianceVerification,
    HrContractPending,
    ContractSent,
    HiredInactive,
    OpsInterviewScheduled,
    ClaimsInterviewScheduled,
    ActiveNotDeployed,
    Deployed,
    Rejected,
    Other(String),
}

impl ApplicantStatus {
    pub fn known() -> [Self; 11] {
        [
            Self::ApplicationSubmitted,
            Self::OtherRolesReview,
            Self::ComplianceVerification,
            Self::HrContractPending,
            Self::ContractSent,
            Self::HiredInactive,
            Self::OpsInterviewScheduled,
            Self::ClaimsInterviewScheduled,
            Self::ActiveNotDeployed,
            Self::Deployed,
            Self::Rejected,
        ]
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "application_submitted" => Self::ApplicationSubmitted,
            "other_roles_review" => Self::OtherRolesReview,
            "compliance_verification" => Self::ComplianceVerification,
            "hr_contract_pending" => Self::HrContractPending,
            "contract_sent" => Self::ContractSent,
            "hired_inactive" => Self::HiredInactive,
            "ops_interview_scheduled" => Self::OpsInterviewScheduled,
            "claims_interview_scheduled" => Self::ClaimsInterviewScheduled,
            "active_not_deployed" => Self::ActiveNotDeployed,
            "deployed" => Self::Deployed,
            "rejected" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ApplicationSubmitted => "application_submitted",
            Self::OtherRolesReview => "other_roles_review",
            Self::ComplianceVerification => "compliance_verification",
            Self::HrContractPending => "hr_contract_pending",
            Self::ContractSent => "contract_sent",
            Self::HiredInactive => "hired_inactive",
            Self::OpsInterviewScheduled => "ops_interview_scheduled",
            Self::ClaimsInterviewScheduled => "claims_interview_scheduled",
            Self::ActiveNotDeployed => "active_not_deployed",
            Self::Deployed => "deployed",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ApplicantStatus {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<&str> for ApplicantStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ApplicantStatus> for String {
    fn from(value: ApplicantStatus) -> Self {
        match value {
            ApplicantStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ApplicantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual category used to color status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    Submitted,
    Review,
    Contract,
    Verified,
    Interview,
    Active,
    Deployed,
    Rejected,
    Generic,
}

impl StyleCategory {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Submitted => "status-submitted",
            Self::Review => "status-review",
            Self::Contract => "status-contract",
            Self::Verified => "status-verified",
            Self::Interview => "status-interview",
            Self::Active => "status-active",
            Self::Deployed => "status-deployed",
            Self::Rejected => "status-rejected",
            Self::Generic => "bg-gray-100 text-gray-800",
        }
    }
}

/// Icon family rendered next to badges and banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    FileText,
    User,
    Shield,
    CheckCircle,
    Calendar,
    AlertTriangle,
    AlertCircle,
    Clock,
    MapPin,
}

/// Applicant record as held by the dashboard and exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: ApplicantStatus,
    pub has_pa_license: bool,
    pub has_bond: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action_due: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_region: Option<Vec<String>>,
}

impl Applicant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
