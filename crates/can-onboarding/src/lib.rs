//! Applicant status model, intake wizard, and dashboard views for the CAN onboarding pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
