//! Pace calculator.
//!
//! Turns a distance and a finish time into a pace per distance unit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::format_pace_minutes;

/// Longest duration accepted for a finish time or a logged run.
pub const MAX_HOURS: u32 = 999;

/// A duration entered as hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinishTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl FinishTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check that minutes and seconds are below 60 and hours at most `MAX_HOURS`.
    pub fn validate(&self) -> Result<(), PaceError> {
        if self.hours > MAX_HOURS {
            return Err(PaceError::TimeTooLong(self.hours));
        }
        if self.minutes > 59 {
            return Err(PaceError::MinutesOutOfRange(self.minutes));
        }
        if self.seconds > 59 {
            return Err(PaceError::SecondsOutOfRange(self.seconds));
        }
        Ok(())
    }

    /// Total duration in seconds, saturating for unvalidated values.
    pub fn total_seconds(&self) -> u32 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    pub fn total_minutes(&self) -> f64 {
        f64::from(self.hours) * 60.0 + f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl std::fmt::Display for FinishTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl std::str::FromStr for FinishTime {
    type Err = PaceError;

    /// Parse `H:MM:SS`, `MM:SS` or a bare number of minutes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim()
            .split(':')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PaceError::InvalidTime(s.to_string()))?;

        let time = match parts.as_slice() {
            [hours, minutes, seconds] => FinishTime::new(*hours, *minutes, *seconds),
            [minutes, seconds] => FinishTime::new(0, *minutes, *seconds),
            [minutes] => FinishTime::new(minutes / 60, minutes % 60, 0),
            _ => return Err(PaceError::InvalidTime(s.to_string())),
        };

        time.validate()?;
        Ok(time)
    }
}

/// Values from the pace calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceInput {
    /// Distance in the runner's unit
    pub distance: f64,
    /// Time taken to cover the distance
    #[serde(flatten)]
    pub time: FinishTime,
}

impl PaceInput {
    pub fn new(distance: f64, time: FinishTime) -> Self {
        Self { distance, time }
    }

    pub fn validate(&self) -> Result<(), PaceError> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(PaceError::InvalidDistance(self.distance));
        }
        self.time.validate()
    }

    /// Pace in minutes per distance unit.
    pub fn pace_minutes(&self) -> f64 {
        self.time.total_minutes() / self.distance
    }
}

/// Calculate a pace and render it as `m:ss` per distance unit.
pub fn calculate_pace(input: &PaceInput) -> Result<String, PaceError> {
    input.validate()?;
    let pace = input.pace_minutes();
    tracing::debug!(distance = input.distance, time = %input.time, pace, "Calculated pace");
    Ok(format_pace_minutes(pace))
}

/// Pace and time input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaceError {
    #[error("Invalid time '{0}' (expected H:MM:SS, MM:SS or minutes)")]
    InvalidTime(String),

    #[error("Minutes must be between 0 and 59, got {0}")]
    MinutesOutOfRange(u32),

    #[error("Seconds must be between 0 and 59, got {0}")]
    SecondsOutOfRange(u32),

    #[error("Distance must be a positive number, got {0}")]
    InvalidDistance(f64),

    #[error("Target time must be greater than zero")]
    ZeroTime,

    #[error("Time must be at most {max} hours, got {0}", max = MAX_HOURS)]
    TimeTooLong(u32),
}
