//! Five-step application wizard and the payload it hands to persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicantId, ApplicantStatus, IconKind};

pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

pub const SPECIALTIES: [&str; 10] = [
    "Wind Damage",
    "Flood Damage",
    "Fire Damage",
    "Hail Damage",
    "Commercial Property",
    "Residential Property",
    "Contents Claims",
    "Business Interruption",
    "Liability Claims",
    "Auto Claims",
];

pub const LEAD_SOURCES: [&str; 7] = [
    "Website",
    "Referral",
    "LinkedIn",
    "Indeed",
    "Industry Event",
    "Direct Contact",
    "Other",
];

/// Raw wizard payload. Every text field is free-form; only presence is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub has_pa_license: bool,
    pub license_number: String,
    pub license_state: String,
    pub license_expiry: String,
    pub has_bond: bool,
    pub bond_number: String,
    pub bond_amount: String,
    pub bond_expiry: String,
    pub specialties: Vec<String>,
    pub source: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    Address,
    PaLicense,
    BondInfo,
    Specialties,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PersonalInfo,
            Self::Address,
            Self::PaLicense,
            Self::BondInfo,
            Self::Specialties,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::Address => 2,
            Self::PaLicense => 3,
            Self::BondInfo => 4,
            Self::Specialties => 5,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Address => "Address",
            Self::PaLicense => "PA License",
            Self::BondInfo => "Bond Info",
            Self::Specialties => "Specialties",
        }
    }

    pub const fn icon(self) -> IconKind {
        match self {
            Self::PersonalInfo | Self::Specialties => IconKind::User,
            Self::Address => IconKind::MapPin,
            Self::PaLicense => IconKind::Shield,
            Self::BondInfo => IconKind::FileText,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::Address),
            Self::Address => Some(Self::PaLicense),
            Self::PaLicense => Some(Self::BondInfo),
            Self::BondInfo => Some(Self::Specialties),
            Self::Specialties => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::Address => Some(Self::PersonalInfo),
            Self::PaLicense => Some(Self::Address),
            Self::BondInfo => Some(Self::PaLicense),
            Self::Specialties => Some(Self::BondInfo),
        }
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::Specialties)
    }
}

fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.is_empty())
}

/// Required-field gate for a single wizard step.
pub fn validate_step(form: &ApplicationForm, step: WizardStep) -> bool {
    match step {
        WizardStep::PersonalInfo => {
            all_present(&[
                form.first_name.as_str(),
                form.last_name.as_str(),
                form.email.as_str(),
                form.phone.as_str(),
            ])
        }
        WizardStep::Address => all_present(&[
            form.address.as_str(),
            form.city.as_str(),
            form.state.as_str(),
            form.zip.as_str(),
        ]),
        WizardStep::PaLicense => {
            !form.has_pa_license
                || all_present(&[
                    form.license_number.as_str(),
                    form.license_state.as_str(),
                    form.license_expiry.as_str(),
                ])
        }
        WizardStep::BondInfo => {
            !form.has_bond
                || all_present(&[
                    form.bond_number.as_str(),
                    form.bond_amount.as_str(),
                    form.bond_expiry.as_str(),
                ])
        }
        WizardStep::Specialties => true,
    }
}

/// First step whose gate fails, if any.
pub fn first_incomplete_step(form: &ApplicationForm) -> Option<WizardStep> {
    WizardStep::ordered()
        .into_iter()
        .find(|step| !validate_step(form, *step))
}

/// Licensed and bonded applicants go straight to compliance. Everyone else is reviewed for other
/// roles.
pub fn initial_status(form: &ApplicationForm) -> ApplicantStatus {
    if form.has_pa_license && form.has_bond {
        ApplicantStatus::ComplianceVerification
    } else {
        ApplicantStatus::OtherRolesReview
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please fill in all required fields")]
    IncompleteStep { step: WizardStep },
    #[error("submissions are only accepted from the final step (on {})", .step.title())]
    NotOnFinalStep { step: WizardStep },
}

impl IntakeError {
    pub fn step(&self) -> WizardStep {
        match self {
            IntakeError::IncompleteStep { step } | IntakeError::NotOnFinalStep { step } => *step,
        }
    }
}

/// Completed form plus the fields derived at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedApplication {
    #[serde(flatten)]
    pub form: ApplicationForm,
    pub status: ApplicantStatus,
    pub created_at: DateTime<Utc>,
}

impl SubmittedApplication {
    pub fn new(form: ApplicationForm, now: DateTime<Utc>) -> Self {
        let status = initial_status(&form);
        Self {
            form,
            status,
            created_at: now,
        }
    }

    /// Project the payload onto the dashboard record. Credential details are kept only when their
    /// flag is set.
    pub fn into_applicant(self, id: ApplicantId) -> Applicant {
        let form = self.form;
        let (license_number, license_state, license_expiry) = if form.has_pa_license {
            (
                Some(form.license_number),
                Some(form.license_state),
                Some(form.license_expiry),
            )
        } else {
            (None, None, None)
        };
        let (bond_number, bond_amount, bond_expiry) = if form.has_bond {
            (
                Some(form.bond_number),
                Some(form.bond_amount),
                Some(form.bond_expiry),
            )
        } else {
            (None, None, None)
        };

        Applicant {
            id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
            status: self.status,
            has_pa_license: form.has_pa_license,
            has_bond: form.has_bond,
            license_number,
            license_state,
            license_expiry,
            bond_number,
            bond_amount,
            bond_expiry,
            next_action_due: None,
            created_at: self.created_at,
            specialties: form.specialties,
            deployment_region: None,
        }
    }
}

/// Wizard session state: the form being filled and the step on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWizard {
    form: ApplicationForm,
    step: WizardStep,
}

impl Default for ApplicationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationWizard {
    pub fn new() -> Self {
        Self::with_form(ApplicationForm::default())
    }

    pub fn with_form(form: ApplicationForm) -> Self {
        Self {
            form,
            step: WizardStep::PersonalInfo,
        }
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn can_advance(&self) -> bool {
        !self.step.is_last() && validate_step(&self.form, self.step)
    }

    pub fn next(&mut self) -> Result<WizardStep, IntakeError> {
        if !validate_step(&self.form, self.step) {
            return Err(IntakeError::IncompleteStep { step: self.step });
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn toggle_specialty(&mut self, specialty: &str) {
        let specialties = &mut self.form.specialties;
        if let Some(position) = specialties.iter().position(|value| value == specialty) {
            specialties.remove(position);
        } else {
            specialties.push(specialty.to_string());
        }
    }

    pub fn submit(&self, now: DateTime<Utc>) -> Result<SubmittedApplication, IntakeError> {
        if !self.step.is_last() {
            return Err(IntakeError::NotOnFinalStep { step: self.step });
        }
        if let Some(step) = first_incomplete_step(&self.form) {
            return Err(IntakeError::IncompleteStep { step });
        }
        Ok(SubmittedApplication::new(self.form.clone(), now))
    }
}
