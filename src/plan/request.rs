//! Training plan requests.
//!
//! A request carries what the runner enters: a race, a target finish time and
//! how many sessions they can run each week. It is validated before the target
//! pace is derived and a plan is generated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pace::{FinishTime, PaceError};

use super::generator::generate_training_plan;
use super::profiles::{MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK};
use super::types::{TrainingGoal, TrainingPlan};

/// Sessions per week preselected for a new request.
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 5;

/// Runner input for a training plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Race to prepare for
    pub goal: TrainingGoal,
    /// Target finish time for the race
    #[serde(flatten)]
    pub target_time: FinishTime,
    /// Weekly sessions (4-6)
    pub sessions_per_week: u32,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            goal: TrainingGoal::FiveK,
            target_time: FinishTime::default(),
            sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
        }
    }
}

impl PlanRequest {
    pub fn new(goal: TrainingGoal, target_time: FinishTime, sessions_per_week: u32) -> Self {
        Self {
            goal,
            target_time,
            sessions_per_week,
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanRequestError> {
        self.target_time.validate()?;
        if self.target_time.is_zero() {
            return Err(PaceError::ZeroTime.into());
        }
        if !(MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK).contains(&self.sessions_per_week) {
            return Err(PlanRequestError::SessionsOutOfRange {
                value: self.sessions_per_week,
                min: MIN_SESSIONS_PER_WEEK,
                max: MAX_SESSIONS_PER_WEEK,
            });
        }
        Ok(())
    }

    /// Target finish time in whole seconds.
    pub fn total_seconds(&self) -> u32 {
        self.target_time.total_seconds()
    }

    /// Race pace needed for the target time, in minutes per kilometer.
    pub fn target_pace_per_km(&self) -> f64 {
        (f64::from(self.total_seconds()) / 60.0) / self.goal.race_distance_km()
    }

    /// Validate the request and generate its plan.
    pub fn generate(&self) -> Result<TrainingPlan, PlanRequestError> {
        self.validate()?;
        Ok(generate_training_plan(
            self.goal,
            self.target_pace_per_km(),
            Some(self.sessions_per_week),
        ))
    }
}

/// Errors in a plan request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestError {
    #[error(transparent)]
    Time(#[from] PaceError),

    #[error("Sessions per week must be between {min} and {max}, got {value}")]
    SessionsOutOfRange { value: u32, min: u32, max: u32 },
}
