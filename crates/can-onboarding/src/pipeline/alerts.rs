use serde::Serialize;

use super::domain::IconKind;

const CRITICAL_THRESHOLD: usize = 5;
const URGENT_THRESHOLD: usize = 3;

/// Tier of the overdue banner shown above the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverdueSeverity {
    None,
    Warning,
    Urgent,
    Critical,
}

impl OverdueSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "All Clear",
            Self::Warning => "Warning",
            Self::Urgent => "Urgent",
            Self::Critical => "Critical",
        }
    }

    pub const fn style_class(self) -> &'static str {
        match self {
            Self::None => "alert-clear",
            Self::Warning => "alert-warning",
            Self::Urgent => "alert-urgent",
            Self::Critical => "alert-critical",
        }
    }

    pub const fn icon(self) -> IconKind {
        match self {
            Self::None => IconKind::CheckCircle,
            Self::Warning => IconKind::Clock,
            Self::Urgent => IconKind::AlertTriangle,
            Self::Critical => IconKind::AlertCircle,
        }
    }
}

pub const fn classify_overdue_severity(overdue_count: usize) -> OverdueSeverity {
    if overdue_count == 0 {
        OverdueSeverity::None
    } else if overdue_count >= CRITICAL_THRESHOLD {
        OverdueSeverity::Critical
    } else if overdue_count >= URGENT_THRESHOLD {
        OverdueSeverity::Urgent
    } else {
        OverdueSeverity::Warning
    }
}

/// Banner content derived from the overdue count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBanner {
    pub severity: OverdueSeverity,
    pub severity_label: &'static str,
    pub style_class: &'static str,
    pub icon: IconKind,
    pub overdue_count: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<&'static str>,
}

impl AlertBanner {
    pub fn for_count(overdue_count: usize) -> Self {
        let severity = classify_overdue_severity(overdue_count);
        let (message, action_label) = match severity {
            OverdueSeverity::None => (
                "All applications are on track! No overdue actions at this time.".to_string(),
                None,
            ),
            _ => (
                format!(
                    "{overdue_count} applications need immediate attention - actions are overdue and require follow-up."
                ),
                Some("View Overdue"),
            ),
        };

        Self {
            severity,
            severity_label: severity.label(),
            style_class: severity.style_class(),
            icon: severity.icon(),
            overdue_count,
            message,
            action_label,
        }
    }

    pub fn is_all_clear(&self) -> bool {
        self.severity == OverdueSeverity::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_thresholds_check_highest_first() {
        assert_eq!(classify_overdue_severity(0), OverdueSeverity::None);
        assert_eq!(classify_overdue_severity(1), OverdueSeverity::Warning);
        assert_eq!(classify_overdue_severity(2), OverdueSeverity::Warning);
        assert_eq!(classify_overdue_severity(3), OverdueSeverity::Urgent);
        assert_eq!(classify_overdue_severity(4), OverdueSeverity::Urgent);
        assert_eq!(classify_overdue_severity(5), OverdueSeverity::Critical);
        assert_eq!(classify_overdue_severity(100), OverdueSeverity::Critical);
    }

    #[test]
    fn severity_styles_and_icons() {
        assert_eq!(OverdueSeverity::Warning.style_class(), "alert-warning");
        assert_eq!(OverdueSeverity::Urgent.style_class(), "alert-urgent");
        assert_eq!(OverdueSeverity::Critical.style_class(), "alert-critical");
        assert_eq!(OverdueSeverity::Warning.icon(), IconKind::Clock);
        assert_eq!(OverdueSeverity::Urgent.icon(), IconKind::AlertTriangle);
        assert_eq!(OverdueSeverity::Critical.icon(), IconKind::AlertCircle);
    }

    #[test]
    fn zero_count_renders_all_clear_banner() {
        let banner = AlertBanner::for_count(0);
        assert!(banner.is_all_clear());
        assert_eq!(banner.icon, IconKind::CheckCircle);
        assert!(banner.message.starts_with("All applications are on track!"));
        assert!(banner.action_label.is_none());
    }

    #[test]
    fn overdue_banner_reports_count() {
        let banner = AlertBanner::for_count(3);
        assert_eq!(banner.severity, OverdueSeverity::Urgent);
        assert_eq!(
            banner.message,
            "3 applications need immediate attention - actions are overdue and require follow-up."
        );
        assert_eq!(banner.action_label, Some("View Overdue"));
    }
}
