//! CSV roster import for feeding the dashboard from an exported applicant list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{Applicant, ApplicantId, ApplicantStatus};
use super::timing::parse_timestamp;

const LIST_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read applicant roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {field} '{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
    InvalidTimestamp {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: {field} '{value}' is not a yes/no flag")]
    InvalidFlag {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub struct ApplicantRoster;

impl ApplicantRoster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Applicant>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut applicants = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            applicants.push(row.into_applicant(index + 1)?);
        }

        Ok(applicants)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    status: String,
    has_pa_license: String,
    has_bond: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    license_state: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    next_action_due: Option<String>,
    created_at: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    specialties: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    deployment_region: Option<String>,
}

impl RosterRow {
    fn into_applicant(self, row: usize) -> Result<Applicant, RosterImportError> {
        let has_pa_license = parse_flag(row, "has_pa_license", &self.has_pa_license)?;
        let has_bond = parse_flag(row, "has_bond", &self.has_bond)?;
        let created_at = row_timestamp(row, "created_at", &self.created_at)?;
        let next_action_due = self
            .next_action_due
            .as_deref()
            .map(|raw| row_timestamp(row, "next_action_due", raw))
            .transpose()?;

        Ok(Applicant {
            id: ApplicantId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            status: ApplicantStatus::from(self.status),
            has_pa_license,
            has_bond,
            license_number: None,
            license_state: self.license_state.filter(|_| has_pa_license),
            license_expiry: None,
            bond_number: None,
            bond_amount: None,
            bond_expiry: None,
            next_action_due,
            created_at,
            specialties: self
                .specialties
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            deployment_region: self.deployment_region.as_deref().map(split_list),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(row: usize, field: &'static str, raw: &str) -> Result<bool, RosterImportError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        _ => Err(RosterImportError::InvalidFlag {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}

fn row_timestamp(
    row: usize,
    field: &'static str,
    raw: &str,
) -> Result<DateTime<Utc>, RosterImportError> {
    parse_timestamp(raw).map_err(|_| RosterImportError::InvalidTimestamp {
        row,
        field,
        value: raw.to_string(),
    })
}
