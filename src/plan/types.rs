//! Training plan type definitions.
//!
//! Plans are produced in kilometers and minutes per kilometer. Conversion to the
//! reader's preferred unit happens at display time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Race distance a plan prepares for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingGoal {
    /// 5 kilometer race
    #[default]
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometer race
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon (21.1 km)
    #[serde(rename = "half")]
    HalfMarathon,
    /// Marathon (42.2 km)
    #[serde(rename = "marathon")]
    Marathon,
}

impl TrainingGoal {
    /// Stable identifier, also used for translation keys.
    pub fn id(&self) -> &'static str {
        match self {
            TrainingGoal::FiveK => "5k",
            TrainingGoal::TenK => "10k",
            TrainingGoal::HalfMarathon => "half",
            TrainingGoal::Marathon => "marathon",
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingGoal::FiveK => "5K",
            TrainingGoal::TenK => "10K",
            TrainingGoal::HalfMarathon => "Half Marathon",
            TrainingGoal::Marathon => "Marathon",
        }
    }

    /// All supported goals, shortest race first.
    pub fn all() -> &'static [TrainingGoal] {
        &[
            TrainingGoal::FiveK,
            TrainingGoal::TenK,
            TrainingGoal::HalfMarathon,
            TrainingGoal::Marathon,
        ]
    }
}

impl std::fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for TrainingGoal {
    type Err = ParseGoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Ok(TrainingGoal::FiveK),
            "10k" => Ok(TrainingGoal::TenK),
            "half" | "half-marathon" | "21k" => Ok(TrainingGoal::HalfMarathon),
            "marathon" | "42k" => Ok(TrainingGoal::Marathon),
            _ => Err(ParseGoalError(s.to_string())),
        }
    }
}

/// Error returned when a goal identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown training goal '{0}' (expected 5k, 10k, half or marathon)")]
pub struct ParseGoalError(pub String);

/// Phase of a periodized plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStage {
    /// Aerobic base building
    Base,
    /// Volume and specific work increase
    Build,
    /// Highest load before the race
    Peak,
    /// Volume reduction into race day
    Taper,
}

impl TrainingStage {
    /// Stable identifier, also used for translation keys.
    pub fn id(&self) -> &'static str {
        match self {
            TrainingStage::Base => "base",
            TrainingStage::Build => "build",
            TrainingStage::Peak => "peak",
            TrainingStage::Taper => "taper",
        }
    }
}

impl std::fmt::Display for TrainingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Session kind that carries a week's quality emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPlacement {
    Easy,
    Steady,
    Long,
}

impl QualityPlacement {
    /// Stable identifier, also used for translation keys.
    pub fn id(&self) -> &'static str {
        match self {
            QualityPlacement::Easy => "easy",
            QualityPlacement::Steady => "steady",
            QualityPlacement::Long => "long",
        }
    }
}

impl std::fmt::Display for QualityPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A single prescribed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRunBlock {
    /// Distance in kilometers (>= 2, one decimal)
    pub distance_km: f64,
    /// Pace in minutes per kilometer
    pub pace_per_km: f64,
}

/// The easy runs of a week, all of the same distance and pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasyRuns {
    /// Number of easy runs in the week
    pub count: u32,
    /// Distance of each run in kilometers
    pub distance_km: f64,
    /// Pace in minutes per kilometer
    pub pace_per_km: f64,
}

/// One week of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeek {
    /// 1-based week number
    pub week: u32,
    /// Plan phase for this week
    pub stage: TrainingStage,
    /// Easy runs
    pub easy_runs: EasyRuns,
    /// Steady run, present in every week or none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steady_run: Option<PlanRunBlock>,
    /// Long run
    pub long_run: PlanRunBlock,
    /// Key used to pick the quality session description (same as `stage`)
    pub quality_key: TrainingStage,
    /// Session that carries the quality emphasis
    pub quality_placement: QualityPlacement,
}

/// A complete generated training plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Race the plan prepares for
    pub goal: TrainingGoal,
    /// Target race pace in minutes per kilometer
    pub pace_per_km: f64,
    /// Race distance in kilometers
    pub race_distance_km: f64,
    /// Sessions per week after clamping
    pub sessions_per_week: u32,
    /// Weekly schedule, in order
    pub weeks: Vec<PlanWeek>,
}

impl TrainingPlan {
    /// Number of weeks in the plan.
    pub fn total_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Get a week by its 1-based number.
    pub fn week(&self, number: u32) -> Option<&PlanWeek> {
        number
            .checked_sub(1)
            .and_then(|index| self.weeks.get(index as usize))
    }

    /// Whether the plan prescribes steady runs.
    pub fn has_steady_runs(&self) -> bool {
        self.weeks.first().is_some_and(|w| w.steady_run.is_some())
    }

    /// Longest long run of the plan in kilometers.
    pub fn peak_long_run_km(&self) -> f64 {
        self.weeks
            .iter()
            .map(|w| w.long_run.distance_km)
            .fold(0.0, f64::max)
    }
}
