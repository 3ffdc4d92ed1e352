use crate::config::ConfigError;
use crate::pipeline::roster::RosterImportError;
use crate::pipeline::service::OnboardingServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Roster(RosterImportError),
    Onboarding(OnboardingServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Roster(err) => write!(f, "roster error: {}", err),
            AppError::Onboarding(err) => write!(f, "onboarding error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Onboarding(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::Roster(value)
    }
}

impl From<OnboardingServiceError> for AppError {
    fn from(value: OnboardingServiceError) -> Self {
        Self::Onboarding(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::intake::{IntakeError, WizardStep};
    use std::error::Error;

    #[test]
    fn onboarding_errors_keep_their_message_and_source() {
        let intake = IntakeError::IncompleteStep {
            step: WizardStep::Address,
        };
        let err = AppError::from(OnboardingServiceError::from(intake));

        assert_eq!(
            err.to_string(),
            "onboarding error: Please fill in all required fields"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn config_errors_surface_through_app_error() {
        let err: AppError = ConfigError::InvalidPort.into();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidPort)));
        assert_eq!(
            err.to_string(),
            "configuration error: APP_PORT must be a valid u16"
        );
    }
}
