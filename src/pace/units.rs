//! Distance units and conversions.
//!
//! Everything is stored in kilometers; conversion happens only for display and
//! for values entered by the runner.

use serde::{Deserialize, Serialize};

/// Kilometers in one statute mile.
pub const KM_IN_MILE: f64 = 1.609344;

/// Distance unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    /// Statute miles
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// Short label shown next to values.
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Convert a distance in kilometers to this unit.
    pub fn from_km(&self, distance_km: f64) -> f64 {
        convert_distance(distance_km, *self)
    }

    /// Convert a distance in this unit to kilometers.
    pub fn to_km(&self, distance: f64) -> f64 {
        to_kilometers(distance, *self)
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" | "metric" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" | "imperial" => Ok(DistanceUnit::Miles),
            other => Err(format!("Unknown distance unit '{}' (expected km or mi)", other)),
        }
    }
}

/// Convert kilometers to the given unit.
pub fn convert_distance(distance_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => distance_km,
        DistanceUnit::Miles => distance_km / KM_IN_MILE,
    }
}

/// Convert a distance in the given unit to kilometers.
pub fn to_kilometers(distance: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => distance,
        DistanceUnit::Miles => distance * KM_IN_MILE,
    }
}

/// Convert a pace in minutes per kilometer to minutes per unit.
pub fn convert_pace_per_km(pace_per_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => pace_per_km,
        DistanceUnit::Miles => pace_per_km * KM_IN_MILE,
    }
}
