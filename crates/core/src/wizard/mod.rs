//! Wizard module - the three-step award flow and submission readiness.

mod submission;
mod wizard_model;

pub use submission::{submission_check, SubmissionCheck};
pub use wizard_model::{AwardStep, AwardWizard, StepStatus, WizardStep};
