//! Display formatting for paces, durations and distances.

use crate::i18n::Language;

use super::units::{convert_distance, convert_pace_per_km, DistanceUnit};

/// Distances below this are treated as this when computing a pace.
const MIN_PACE_DISTANCE: f64 = 0.0001;

/// Render minutes per unit as `m:ss`, rounded to the second.
pub fn format_pace_minutes(pace_minutes: f64) -> String {
    let total_seconds = (pace_minutes * 60.0).round().max(0.0) as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render a pace stored per kilometer as `m:ss` per `unit`.
pub fn format_pace(pace_per_km: f64, unit: DistanceUnit) -> String {
    format_pace_minutes(convert_pace_per_km(pace_per_km, unit))
}

/// Render `h:mm:ss`, or `m:ss` under an hour.
pub fn format_duration(total_seconds: f64) -> String {
    let seconds = total_seconds.round().max(0.0) as u64;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, remaining)
    } else {
        format!("{}:{:02}", minutes, remaining)
    }
}

/// Render a coarse duration as `Xh YYm`.
pub fn format_duration_hm(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{}h {:02}m", hours, minutes)
}

/// Pace per unit for a run, as `m:ss`.
pub fn format_pace_from_seconds(total_seconds: f64, distance: f64) -> String {
    let seconds_per_unit = total_seconds / distance.max(MIN_PACE_DISTANCE);
    format_pace_minutes(seconds_per_unit / 60.0)
}

/// Render a distance with at most one decimal, dropping a trailing `.0`,
/// using the language's decimal separator.
pub fn format_distance_value(distance: f64, language: Language) -> String {
    let rounded = (distance * 10.0).round() / 10.0;
    let text = if (rounded - rounded.round()).abs() < f64::EPSILON {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    };

    match language.decimal_separator() {
        '.' => text,
        separator => text.replace('.', &separator.to_string()),
    }
}

/// Render a distance with its unit label.
pub fn format_distance(distance: f64, unit: DistanceUnit, language: Language) -> String {
    format!("{} {}", format_distance_value(distance, language), unit.label())
}

/// Convert a distance from kilometers and render it without a unit label.
pub fn format_distance_value_from_km(distance_km: f64, unit: DistanceUnit, language: Language) -> String {
    format_distance_value(convert_distance(distance_km, unit), language)
}

/// Convert a distance from kilometers and render it with its unit label.
pub fn format_distance_from_km(distance_km: f64, unit: DistanceUnit, language: Language) -> String {
    format_distance(convert_distance(distance_km, unit), unit, language)
}
