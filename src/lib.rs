//! RunPlan - Running Log and Training Plan Generator
//!
//! Logs runs, computes paces and generates periodized multi-week training
//! plans for 5K, 10K, half marathon and marathon goals. Output is available
//! in English and French, in kilometers or miles.

pub mod activities;
pub mod i18n;
pub mod pace;
pub mod plan;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use activities::{ActivityLog, ActivitySummary};
pub use i18n::{Language, TranslationService};
pub use pace::{calculate_pace, DistanceUnit, FinishTime};
pub use plan::{generate_training_plan, PlanRequest, TrainingGoal, TrainingPlan};
pub use report::PlanReport;
pub use storage::config::AppConfig;
