//! Dashboard statistics over logged activities.
//!
//! - Totals and average pace across all runs
//! - Distance volume per week (Monday start) or calendar month over the trailing year
//! - Chronological pace trend, optionally downsampled

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::pace::{format_duration_hm, format_pace_from_seconds, DistanceUnit};

use super::types::Activity;

/// Placeholder shown for empty statistics.
pub const EMPTY_VALUE: &str = "--";

/// Totals across a set of activities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Number of activities
    pub count: usize,
    /// Total distance in `unit`
    pub total_distance: f64,
    /// Total time in seconds
    pub total_seconds: u64,
    /// Unit of `total_distance`
    pub unit: DistanceUnit,
}

impl ActivitySummary {
    pub fn from_activities(activities: &[Activity], unit: DistanceUnit) -> Self {
        Self {
            count: activities.len(),
            total_distance: activities
                .iter()
                .fold(0.0, |total, a| total + a.distance_in(unit)),
            total_seconds: activities.iter().map(|a| u64::from(a.total_seconds())).sum(),
            unit,
        }
    }

    /// Average seconds per unit, or `None` without any distance.
    pub fn average_pace_seconds(&self) -> Option<f64> {
        (self.total_distance > 0.0).then(|| self.total_seconds as f64 / self.total_distance)
    }

    /// Total distance with one decimal and the unit label.
    pub fn display_total_distance(&self, language: Language) -> String {
        let value = format!("{:.1}", self.total_distance);
        let value = match language.decimal_separator() {
            '.' => value,
            separator => value.replace('.', &separator.to_string()),
        };
        format!("{} {}", value, self.unit.label())
    }

    pub fn display_total_time(&self) -> String {
        if self.total_seconds == 0 {
            return EMPTY_VALUE.to_string();
        }
        format_duration_hm(self.total_seconds)
    }

    pub fn display_average_pace(&self) -> String {
        if self.total_distance <= 0.0 {
            return EMPTY_VALUE.to_string();
        }
        format_pace_from_seconds(self.total_seconds as f64, self.total_distance)
    }
}

/// Grouping for the volume chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Week,
    Month,
}

impl AggregationMode {
    /// First day of the period containing `date`.
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            AggregationMode::Week => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            AggregationMode::Month => date.with_day(1).unwrap_or(date),
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Week => write!(f, "week"),
            AggregationMode::Month => write!(f, "month"),
        }
    }
}

impl std::str::FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" | "w" => Ok(AggregationMode::Week),
            "month" | "monthly" | "m" => Ok(AggregationMode::Month),
            other => Err(format!("Unknown aggregation '{}' (expected week or month)", other)),
        }
    }
}

/// Distance covered in one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePoint {
    pub period_start: NaiveDate,
    pub distance: f64,
}

/// Pace of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacePoint {
    pub date: NaiveDate,
    /// Seconds per distance unit
    pub pace_seconds: f64,
}

/// Sum distance per period over the year ending at `today`, oldest period first.
pub fn aggregate_volume(
    activities: &[Activity],
    mode: AggregationMode,
    unit: DistanceUnit,
    today: NaiveDate,
) -> Vec<VolumePoint> {
    let one_year_ago = today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);

    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for activity in activities.iter().filter(|a| a.date >= one_year_ago) {
        *totals.entry(mode.period_start(activity.date)).or_insert(0.0) += activity.distance_in(unit);
    }

    totals
        .into_iter()
        .map(|(period_start, distance)| VolumePoint {
            period_start,
            distance: (distance * 100.0).round() / 100.0,
        })
        .collect()
}

/// Chronological pace points, skipping runs without distance or time.
///
/// With `max_points`, keeps every n-th point so at most about that many remain,
/// always including the latest run.
pub fn pace_trend(
    activities: &[Activity],
    unit: DistanceUnit,
    max_points: Option<usize>,
) -> Vec<PacePoint> {
    let mut points: Vec<PacePoint> = activities
        .iter()
        .filter_map(|activity| {
            activity.pace_seconds(unit).map(|pace_seconds| PacePoint {
                date: activity.date,
                pace_seconds,
            })
        })
        .collect();
    points.sort_by_key(|point| point.date);

    let max_points = match max_points {
        Some(max) if max > 0 && points.len() > max => max,
        _ => return points,
    };

    let step = points.len().div_ceil(max_points);
    let last = points[points.len() - 1];
    let mut sampled: Vec<PacePoint> = points.into_iter().step_by(step).collect();
    if sampled.last().map(|point| point.date) != Some(last.date) {
        sampled.push(last);
    }

    tracing::debug!(step, points = sampled.len(), "Downsampled pace trend");
    sampled
}
