use serde::Serialize;

use super::domain::{Applicant, ApplicantStatus, StyleCategory};

/// Column on the pipeline board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    ApplicationSubmitted,
    ComplianceVerification,
    ContractSent,
    InterviewPipeline,
    ActiveNotDeployed,
    Deployed,
}

impl PipelineStage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ApplicationSubmitted,
            Self::ComplianceVerification,
            Self::ContractSent,
            Self::InterviewPipeline,
            Self::ActiveNotDeployed,
            Self::Deployed,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "application_submitted",
            Self::ComplianceVerification => "compliance_verification",
            Self::ContractSent => "contract_sent",
            Self::InterviewPipeline => "interview_pipeline",
            Self::ActiveNotDeployed => "active_not_deployed",
            Self::Deployed => "deployed",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "New Applications",
            Self::ComplianceVerification => "Compliance Review",
            Self::ContractSent => "Contracts Pending",
            Self::InterviewPipeline => "Interview Pipeline",
            Self::ActiveNotDeployed => "Ready to Deploy",
            Self::Deployed => "Deployed",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "Recently submitted applications",
            Self::ComplianceVerification => "Verifying licenses and bonds",
            Self::ContractSent => "Waiting for contract signatures",
            Self::InterviewPipeline => "Operations and claims interviews",
            Self::ActiveNotDeployed => "Qualified and ready for deployment",
            Self::Deployed => "Active in the field",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "bg-blue-100 text-blue-800 border-blue-200",
            Self::ComplianceVerification => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Self::ContractSent => "bg-teal-100 text-teal-800 border-teal-200",
            Self::InterviewPipeline => "bg-purple-100 text-purple-800 border-purple-200",
            Self::ActiveNotDeployed => "bg-emerald-100 text-emerald-800 border-emerald-200",
            Self::Deployed => "bg-blue-900 text-blue-100 border-blue-800",
        }
    }

    pub fn contains(self, status: &ApplicantStatus) -> bool {
        match self {
            Self::ApplicationSubmitted => *status == ApplicantStatus::ApplicationSubmitted,
            Self::ComplianceVerification => *status == ApplicantStatus::ComplianceVerification,
            Self::ContractSent => *status == ApplicantStatus::ContractSent,
            Self::InterviewPipeline => {
                is_interview_status(status) || *status == ApplicantStatus::HiredInactive
            }
            Self::ActiveNotDeployed => *status == ApplicantStatus::ActiveNotDeployed,
            Self::Deployed => *status == ApplicantStatus::Deployed,
        }
    }
}

/// Literal substring rule: any identifier mentioning "interview" counts, known or not.
pub fn is_interview_status(status: &ApplicantStatus) -> bool {
    status.as_str().contains("interview")
}

/// Applicants bucketed per board column, each bucket in input order.
#[derive(Debug, Clone)]
pub struct StageBuckets<'a> {
    entries: Vec<(PipelineStage, Vec<&'a Applicant>)>,
}

impl<'a> StageBuckets<'a> {
    pub fn get(&self, stage: PipelineStage) -> &[&'a Applicant] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == stage)
            .map(|(_, applicants)| applicants.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PipelineStage, &[&'a Applicant])> + '_ {
        self.entries
            .iter()
            .map(|(stage, applicants)| (*stage, applicants.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, applicants)| applicants.len())
            .sum()
    }
}

pub fn group_by_stage(applicants: &[Applicant]) -> StageBuckets<'_> {
    let entries = PipelineStage::ordered()
        .into_iter()
        .map(|stage| {
            let members = applicants
                .iter()
                .filter(|applicant| stage.contains(&applicant.status))
                .collect();
            (stage, members)
        })
        .collect();

    StageBuckets { entries }
}

/// Headline counts shown above the tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub new_applications: usize,
    pub in_compliance: usize,
    pub contracts_pending: usize,
    pub in_interviews: usize,
    pub ready_to_deploy: usize,
    pub deployed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub style: StyleCategory,
    pub style_class: &'static str,
}

const STAT_CARDS: [(&str, &str, StyleCategory); 6] = [
    ("new_applications", "New Apps", StyleCategory::Submitted),
    ("in_compliance", "Compliance", StyleCategory::Review),
    ("contracts_pending", "Contracts", StyleCategory::Contract),
    ("in_interviews", "Interviews", StyleCategory::Interview),
    ("ready_to_deploy", "Ready", StyleCategory::Active),
    ("deployed", "Deployed", StyleCategory::Deployed),
];

impl OverviewStats {
    pub fn entries(&self) -> Vec<StatEntry> {
        let counts = [
            self.new_applications,
            self.in_compliance,
            self.contracts_pending,
            self.in_interviews,
            self.ready_to_deploy,
            self.deployed,
        ];
        STAT_CARDS
            .into_iter()
            .zip(counts)
            .map(|((key, label, style), count)| StatEntry {
                key,
                label,
                count,
                style,
                style_class: style.css_class(),
            })
            .collect()
    }
}

pub fn compute_overview_stats(applicants: &[Applicant]) -> OverviewStats {
    applicants
        .iter()
        .fold(OverviewStats::default(), |mut stats, applicant| {
            let status = &applicant.status;
            match status {
                ApplicantStatus::ApplicationSubmitted => stats.new_applications += 1,
                ApplicantStatus::ComplianceVerification => stats.in_compliance += 1,
                ApplicantStatus::ContractSent => stats.contracts_pending += 1,
                ApplicantStatus::ActiveNotDeployed => stats.ready_to_deploy += 1,
                ApplicantStatus::Deployed => stats.deployed += 1,
                _ => {}
            }
            if is_interview_status(status) {
                stats.in_interviews += 1;
            }
            stats
        })
}
