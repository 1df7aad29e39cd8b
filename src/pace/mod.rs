//! Pace, distance unit and display formatting helpers.
//!
//! This module provides:
//! - Kilometer/mile conversion of distances and paces
//! - The pace calculator (distance + finish time -> pace)
//! - Formatting of paces, durations and localized distances

pub mod calculator;
pub mod format;
pub mod units;

// Re-exports for convenience
pub use calculator::{calculate_pace, FinishTime, PaceError, PaceInput};
pub use format::{
    format_distance, format_distance_from_km, format_distance_value, format_distance_value_from_km,
    format_duration, format_duration_hm, format_pace, format_pace_from_seconds, format_pace_minutes,
};
pub use units::{convert_distance, convert_pace_per_km, to_kilometers, DistanceUnit, KM_IN_MILE};
