use crate::infra::InMemoryApplicantRepository;
use can_onboarding::error::AppError;
use can_onboarding::pipeline::{
    parse_timestamp, sample_applicants, ApplicantCardView, ApplicantRoster, ApplicationForm,
    ApplicationWizard, BoardColumnView, DashboardSnapshot, DashboardState, DashboardTab,
    OnboardingService, OnboardingServiceError, TabContent, LEAD_SOURCES, SPECIALTIES,
};
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Tab to render: overview, applications, compliance, contracts, interviews, ready, deployed
    /// or all
    #[arg(long, value_parser = crate::infra::parse_tab)]
    pub(crate) tab: Option<DashboardTab>,
    /// CSV roster export to load instead of the sample applicants
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Tab to render after the submission. Defaults to all.
    #[arg(long, value_parser = crate::infra::parse_tab)]
    pub(crate) tab: Option<DashboardTab>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs { now, tab, roster } = args;
    let now = now.unwrap_or_else(Utc::now);

    let (applicants, source) = match roster {
        Some(path) => {
            let applicants = ApplicantRoster::from_path(&path)?;
            (applicants, format!("roster {}", path.display()))
        }
        None => (sample_applicants(), "sample applicants".to_string()),
    };

    let mut state = DashboardState::new(applicants);
    state.set_active_tab(tab.unwrap_or_default());
    println!("CAN onboarding dashboard ({source})");
    render_dashboard(&state.snapshot(now));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { now, tab } = args;
    let now = now.unwrap_or_else(Utc::now);

    println!("Application wizard demo");
    let mut wizard = ApplicationWizard::new();
    if let Err(err) = wizard.next() {
        println!(
            "  Step {} ({}) blocked on an empty form: {}",
            err.step().number(),
            err.step().title(),
            err
        );
    }

    *wizard.form_mut() = demo_form();
    wizard.toggle_specialty(SPECIALTIES[0]);
    wizard.toggle_specialty(SPECIALTIES[1]);
    wizard.toggle_specialty(SPECIALTIES[4]);

    loop {
        let step = wizard.current_step();
        println!("  Step {}/5: {}", step.number(), step.title());
        if step.is_last() {
            break;
        }
        wizard.next().map_err(OnboardingServiceError::from)?;
    }

    let submission = wizard.submit(now).map_err(OnboardingServiceError::from)?;
    println!(
        "  Submitted {} {} with initial status {}",
        submission.form.first_name, submission.form.last_name, submission.status
    );

    let repository = Arc::new(InMemoryApplicantRepository::seeded(sample_applicants()));
    let service = OnboardingService::new(repository);
    let stored = service.submit(submission.form, now)?;
    println!("  Stored as applicant {}", stored.id);

    let snapshot = service.dashboard(tab.unwrap_or(DashboardTab::All), now)?;
    println!();
    render_dashboard(&snapshot);
    Ok(())
}

fn demo_form() -> ApplicationForm {
    ApplicationForm {
        first_name: "Jordan".to_string(),
        last_name: "Blake".to_string(),
        email: "jordan.blake@example.com".to_string(),
        phone: "(555) 310-8842".to_string(),
        address: "1200 Bayshore Blvd".to_string(),
        city: "Tampa".to_string(),
        state: "FL".to_string(),
        zip: "33606".to_string(),
        has_pa_license: true,
        license_number: "PA-20417".to_string(),
        license_state: "FL".to_string(),
        license_expiry: "2026-09-30".to_string(),
        has_bond: true,
        bond_number: "SB-77310".to_string(),
        bond_amount: "50000".to_string(),
        bond_expiry: "2026-03-31".to_string(),
        specialties: Vec::new(),
        source: LEAD_SOURCES[1].to_string(),
        notes: "Worked Hurricane Ian claims in Lee County.".to_string(),
    }
}

fn render_dashboard(snapshot: &DashboardSnapshot) {
    println!(
        "Generated {} | {} applicants",
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC"),
        snapshot.total_applicants
    );

    let banner = &snapshot.alert;
    match banner.action_label {
        Some(action) => println!(
            "[{}] {} ({})",
            banner.severity_label, banner.message, action
        ),
        None => println!("[{}] {}", banner.severity_label, banner.message),
    }

    println!("\nPipeline stats");
    for entry in &snapshot.stat_cards {
        println!("- {:<18} {}", entry.label, entry.count);
    }

    println!("\nTab: {}", snapshot.active_tab_label);
    match &snapshot.content {
        TabContent::Board { columns } => columns.iter().for_each(render_column),
        TabContent::Cards { applicants } if applicants.is_empty() => {
            println!("  No applicants in this stage");
        }
        TabContent::Cards { applicants } => applicants.iter().for_each(render_card),
    }
}

fn render_column(column: &BoardColumnView) {
    println!(
        "\n{} ({}) - {}",
        column.title, column.count, column.description
    );
    if column.applicants.is_empty() {
        println!("  No applicants in this stage");
    }
    for card in &column.applicants {
        let state = card.license_state.as_deref().unwrap_or("-");
        let overdue = if card.overdue { " [overdue]" } else { "" };
        println!("  {} ({}) {}{}", card.full_name, state, card.email, overdue);
    }
}

fn render_card(card: &ApplicantCardView) {
    println!("\n  {} [{}]", card.full_name, card.status.label);
    println!(
        "    {} | {} | {}",
        card.applied_label, card.email, card.phone
    );
    if let Some(line) = &card.license_line {
        println!("    {line}");
    }
    if !card.credential_badges.is_empty() {
        println!("    {}", card.credential_badges.join(", "));
    }
    if !card.specialties.is_empty() {
        let mut specialties = card.specialties.shown.join(", ");
        if let Some(overflow) = &card.specialties.overflow_label {
            specialties.push_str(&format!(" {overflow}"));
        }
        println!("    Specialties: {specialties}");
    }
    if let Some(label) = &card.action_due_label {
        println!("    {label}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::parse_tab;
    use can_onboarding::pipeline::{first_incomplete_step, ApplicantStatus, SubmittedApplication};

    #[test]
    fn demo_form_passes_every_step() {
        let form = demo_form();
        assert_eq!(first_incomplete_step(&form), None);
        let submission = SubmittedApplication::new(form, Utc::now());
        assert_eq!(submission.status, ApplicantStatus::ComplianceVerification);
    }

    #[test]
    fn demo_runs_against_sample_roster() {
        let args = DemoArgs {
            now: parse_timestamp("2025-01-24").ok(),
            tab: parse_tab("all").ok(),
        };
        run_demo(args).expect("demo completes");
    }

    #[test]
    fn dashboard_rejects_missing_roster() {
        let args = DashboardArgs {
            roster: Some(PathBuf::from("does-not-exist.csv")),
            ..DashboardArgs::default()
        };
        assert!(matches!(run_dashboard(args), Err(AppError::Roster(_))));
    }
}
