//! Logged run records.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::pace::{format_pace_from_seconds, DistanceUnit, FinishTime, PaceError};

/// Oldest date accepted for a logged run.
pub fn earliest_activity_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A completed run. Distances are always stored in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier
    pub id: Uuid,
    /// Day of the run
    pub date: NaiveDate,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Time taken
    #[serde(flatten)]
    pub time: FinishTime,
}

impl Activity {
    /// Create a validated activity dated relative to today.
    pub fn new(date: NaiveDate, distance_km: f64, time: FinishTime) -> Result<Self, ActivityError> {
        Self::new_as_of(date, distance_km, time, Local::now().date_naive())
    }

    /// Create a validated activity, checking the date window against `today`.
    pub fn new_as_of(
        date: NaiveDate,
        distance_km: f64,
        time: FinishTime,
        today: NaiveDate,
    ) -> Result<Self, ActivityError> {
        let activity = Self {
            id: Uuid::new_v4(),
            date,
            distance_km,
            time,
        };
        activity.validate(today)?;
        Ok(activity)
    }

    /// Create an activity from a distance entered in `unit`.
    pub fn from_input(
        date: NaiveDate,
        distance: f64,
        unit: DistanceUnit,
        time: FinishTime,
    ) -> Result<Self, ActivityError> {
        Self::new(date, unit.to_km(distance), time)
    }

    /// Check distance, time fields and the date window.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ActivityError> {
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(ActivityError::InvalidDistance(self.distance_km));
        }
        self.time.validate()?;

        if self.date < earliest_activity_date() {
            return Err(ActivityError::DateTooOld(self.date));
        }
        if self.date > today + Duration::days(1) {
            return Err(ActivityError::DateInFuture(self.date));
        }
        Ok(())
    }

    pub fn total_seconds(&self) -> u32 {
        self.time.total_seconds()
    }

    /// Distance in the given unit.
    pub fn distance_in(&self, unit: DistanceUnit) -> f64 {
        unit.from_km(self.distance_km)
    }

    /// Seconds per kilometer, if the run has both distance and time.
    pub fn pace_seconds_per_km(&self) -> Option<f64> {
        self.pace_seconds(DistanceUnit::Kilometers)
    }

    /// Seconds per distance unit, if the run has both distance and time.
    pub fn pace_seconds(&self, unit: DistanceUnit) -> Option<f64> {
        let distance = self.distance_in(unit);
        let seconds = self.total_seconds();
        if distance <= 0.0 || seconds == 0 {
            return None;
        }
        Some(f64::from(seconds) / distance)
    }

    /// Pace per distance unit as `m:ss`.
    pub fn pace_display(&self, unit: DistanceUnit) -> String {
        format_pace_from_seconds(f64::from(self.total_seconds()), self.distance_in(unit))
    }
}

/// Activity validation and storage errors.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported activity log version {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Time(#[from] PaceError),

    #[error("Distance must be a positive number, got {0}")]
    InvalidDistance(f64),

    #[error("Date {0} is before 1990-01-01")]
    DateTooOld(NaiveDate),

    #[error("Date {0} is in the future")]
    DateInFuture(NaiveDate),
}
