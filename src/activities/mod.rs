//! Activity log and dashboard statistics.
//!
//! Runs are kept in a local JSON file with distances stored in kilometers.

pub mod log;
pub mod summary;
pub mod types;

pub use log::ActivityLog;
pub use summary::{
    aggregate_volume, pace_trend, ActivitySummary, AggregationMode, PacePoint, VolumePoint,
    EMPTY_VALUE,
};
pub use types::{earliest_activity_date, Activity, ActivityError};
