//! Allocation settings model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COVERAGE_TARGET_PERCENT, DEFAULT_VENDORS_PER_PAGE};
use crate::errors::{Error, Result};

/// How raw award quantities that are not non-negative integers are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityPolicy {
    /// Non-numeric or negative input becomes 0 (grid behaviour).
    #[default]
    Coerce,
    /// Non-numeric or negative input fails with `InvalidQuantity`.
    Reject,
}

impl QuantityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityPolicy::Coerce => "COERCE",
            QuantityPolicy::Reject => "REJECT",
        }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuantityPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COERCE" => Ok(QuantityPolicy::Coerce),
            "REJECT" => Ok(QuantityPolicy::Reject),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown quantity policy '{}'",
                other
            ))),
        }
    }
}

/// Settings for one allocation session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationSettings {
    pub quantity_policy: QuantityPolicy,
    pub vendors_per_page: usize,
    pub coverage_target_percent: u32,
    /// When set, under-allocated items block submission instead of warning.
    pub require_full_allocation: bool,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            quantity_policy: QuantityPolicy::Coerce,
            vendors_per_page: DEFAULT_VENDORS_PER_PAGE,
            coverage_target_percent: DEFAULT_COVERAGE_TARGET_PERCENT,
            require_full_allocation: false,
        }
    }
}

impl AllocationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.vendors_per_page == 0 {
            return Err(Error::InvalidConfigValue(
                "vendorsPerPage must be at least 1".to_string(),
            ));
        }
        if self.coverage_target_percent > 100 {
            return Err(Error::InvalidConfigValue(format!(
                "coverageTargetPercent must be within 0-100, got {}",
                self.coverage_target_percent
            )));
        }
        Ok(())
    }
}
