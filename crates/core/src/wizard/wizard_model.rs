use std::fmt;

use serde::{Deserialize, Serialize};

/// Steps of the award flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    Allocate,
    AwardDetails,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Allocate,
        WizardStep::AwardDetails,
        WizardStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Allocate => "ALLOCATE",
            WizardStep::AwardDetails => "AWARD_DETAILS",
            WizardStep::Review => "REVIEW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Allocate => "Allocate",
            WizardStep::AwardDetails => "Award Details",
            WizardStep::Review => "Review",
        }
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::Allocate => 0,
            WizardStep::AwardDetails => 1,
            WizardStep::Review => 2,
        }
    }

    fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// A step as rendered in the progress header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardStep {
    pub id: WizardStep,
    pub label: String,
    pub status: StepStatus,
}

/// Position within the award flow.
///
/// `furthest` only moves forward, so stepping back keeps later steps
/// reachable through [`AwardWizard::go_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardWizard {
    current: WizardStep,
    furthest: WizardStep,
}

impl Default for AwardWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AwardWizard {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Allocate,
            furthest: WizardStep::Allocate,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn furthest(&self) -> WizardStep {
        self.furthest
    }

    pub fn is_first(&self) -> bool {
        self.current.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.current.next().is_none()
    }

    pub fn steps(&self) -> Vec<AwardStep> {
        WizardStep::ALL
            .iter()
            .map(|step| AwardStep {
                id: *step,
                label: step.label().to_string(),
                status: match step.cmp(&self.current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                },
            })
            .collect()
    }

    /// Moves forward one step; stays on the last step.
    pub fn next(&mut self) -> WizardStep {
        if let Some(step) = self.current.next() {
            self.current = step;
            self.furthest = self.furthest.max(step);
        }
        self.current
    }

    /// Moves back one step; stays on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(step) = self.current.previous() {
            self.current = step;
        }
        self.current
    }

    /// Jumps to `step` if it has been reached before. Returns whether the
    /// current step changed.
    pub fn go_to(&mut self, step: WizardStep) -> bool {
        if step > self.furthest || step == self.current {
            return false;
        }
        self.current = step;
        true
    }
}
