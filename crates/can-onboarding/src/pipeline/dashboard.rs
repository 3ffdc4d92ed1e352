use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::alerts::AlertBanner;
use super::board::{
    compute_overview_stats, group_by_stage, is_interview_status, OverviewStats, StatEntry,
};
use super::domain::{Applicant, ApplicantStatus};
use super::timing::overdue_count;
use super::views::{board_columns, ApplicantCardView, BoardColumnView};

/// Tabs across the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Applications,
    Compliance,
    Contracts,
    Interviews,
    Ready,
    Deployed,
    All,
}

impl DashboardTab {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Overview,
            Self::Applications,
            Self::Compliance,
            Self::Contracts,
            Self::Interviews,
            Self::Ready,
            Self::Deployed,
            Self::All,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Applications => "applications",
            Self::Compliance => "compliance",
            Self::Contracts => "contracts",
            Self::Interviews => "interviews",
            Self::Ready => "ready",
            Self::Deployed => "deployed",
            Self::All => "all",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Applications => "New Apps",
            Self::Compliance => "Compliance",
            Self::Contracts => "Contracts",
            Self::Interviews => "Interviews",
            Self::Ready => "Ready",
            Self::Deployed => "Deployed",
            Self::All => "All",
        }
    }

    /// Whether an applicant appears in this tab's card listing. The overview shows the board
    /// instead.
    pub fn includes(self, applicant: &Applicant) -> bool {
        let status = &applicant.status;
        match self {
            Self::Overview | Self::All => true,
            Self::Applications => *status == ApplicantStatus::ApplicationSubmitted,
            Self::Compliance => *status == ApplicantStatus::ComplianceVerification,
            Self::Contracts => *status == ApplicantStatus::ContractSent,
            Self::Interviews => is_interview_status(status),
            Self::Ready => *status == ApplicantStatus::ActiveNotDeployed,
            Self::Deployed => *status == ApplicantStatus::Deployed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dashboard tab '{0}'")]
pub struct UnknownTab(pub String);

impl FromStr for DashboardTab {
    type Err = UnknownTab;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| UnknownTab(raw.to_string()))
    }
}

/// Everything the dashboard renders for one `now`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_applicants: usize,
    pub stats: OverviewStats,
    pub stat_cards: Vec<StatEntry>,
    pub alert: AlertBanner,
    pub active_tab: DashboardTab,
    pub active_tab_label: &'static str,
    pub show_application_form: bool,
    pub content: TabContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabContent {
    Board { columns: Vec<BoardColumnView> },
    Cards { applicants: Vec<ApplicantCardView> },
}

impl TabContent {
    pub fn len(&self) -> usize {
        match self {
            TabContent::Board { columns } => columns.iter().map(|column| column.count).sum(),
            TabContent::Cards { applicants } => applicants.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Top-level dashboard state. Mutated only through the named transitions below.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    applicants: Vec<Applicant>,
    active_tab: DashboardTab,
    show_application_form: bool,
}

impl DashboardState {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self {
            applicants,
            ..Self::default()
        }
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn is_application_form_open(&self) -> bool {
        self.show_application_form
    }

    pub fn add_applicant(&mut self, applicant: Applicant) {
        self.applicants.push(applicant);
    }

    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn open_application_form(&mut self) {
        self.show_application_form = true;
    }

    pub fn close_application_form(&mut self) {
        self.show_application_form = false;
    }

    pub fn stats(&self) -> OverviewStats {
        compute_overview_stats(&self.applicants)
    }

    pub fn overdue_count(&self, now: DateTime<Utc>) -> usize {
        overdue_count(&self.applicants, now)
    }

    pub fn alert(&self, now: DateTime<Utc>) -> AlertBanner {
        AlertBanner::for_count(self.overdue_count(now))
    }

    pub fn tab_content(&self, tab: DashboardTab, now: DateTime<Utc>) -> TabContent {
        match tab {
            DashboardTab::Overview => TabContent::Board {
                columns: board_columns(&group_by_stage(&self.applicants), now),
            },
            listing => TabContent::Cards {
                applicants: self
                    .applicants
                    .iter()
                    .filter(|applicant| listing.includes(applicant))
                    .map(|applicant| ApplicantCardView::build(applicant, now))
                    .collect(),
            },
        }
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let stats = self.stats();
        DashboardSnapshot {
            generated_at: now,
            total_applicants: self.applicants.len(),
            stats,
            stat_cards: stats.entries(),
            alert: self.alert(now),
            active_tab: self.active_tab,
            active_tab_label: self.active_tab.label(),
            show_application_form: self.show_application_form,
            content: self.tab_content(self.active_tab, now),
        }
    }
}
