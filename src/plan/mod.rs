//! Training plan module.
//!
//! Generates periodized multi-week running plans:
//! - Per-goal profiles for 5K, 10K, half marathon and marathon
//! - Base, build, peak and taper stages with recovery weeks
//! - Validated plan requests built from a target finish time

pub mod generator;
pub mod profiles;
pub mod request;
pub mod types;

// Re-exports for convenience
pub use generator::{clamp_sessions, compute_stage, generate_training_plan};
pub use profiles::{goal_profile, GoalProfile, MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK};
pub use request::{PlanRequest, PlanRequestError, DEFAULT_SESSIONS_PER_WEEK};
pub use types::{
    EasyRuns, ParseGoalError, PlanRunBlock, PlanWeek, QualityPlacement, TrainingGoal, TrainingPlan,
    TrainingStage,
};
