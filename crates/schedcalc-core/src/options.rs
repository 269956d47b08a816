//! Engine options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SINGLE_SCHEDULE_COUNT;
use crate::error::CalcError;

/// Which count feeds the third argument of the utilization formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UtilizationPolicy {
    /// Use the schedule formula result as the piece count.
    #[default]
    ScheduleResult,
    /// Use a fixed schedule count of one.
    SingleSchedule,
    /// Never compute a utilization rate.
    Disabled,
}

impl UtilizationPolicy {
    /// Piece count passed to the utilization formula, if any.
    #[must_use]
    pub fn count(self, schedule_result: f64) -> Option<f64> {
        match self {
            Self::ScheduleResult => Some(schedule_result),
            Self::SingleSchedule => Some(SINGLE_SCHEDULE_COUNT),
            Self::Disabled => None,
        }
    }
}

impl FromStr for UtilizationPolicy {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schedule" | "schedule-result" | "result" => Ok(Self::ScheduleResult),
            "single" | "single-schedule" | "one" => Ok(Self::SingleSchedule),
            "off" | "none" | "disabled" => Ok(Self::Disabled),
            other => Err(CalcError::Config(format!(
                "unknown utilization policy '{other}' (expected schedule, single, or off)"
            ))),
        }
    }
}

impl fmt::Display for UtilizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ScheduleResult => "schedule",
            Self::SingleSchedule => "single",
            Self::Disabled => "off",
        })
    }
}

/// Options for a calculator engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Utilization policy applied on every successful multiply evaluation.
    pub utilization: UtilizationPolicy,
}

impl EngineOptions {
    /// Options with the given utilization policy.
    #[must_use]
    pub fn with_utilization(utilization: UtilizationPolicy) -> Self {
        Self { utilization }
    }
}
