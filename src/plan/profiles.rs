//! Per-goal plan configuration.
//!
//! Each supported race has a static profile describing plan length, stage
//! lengths, distance progressions, taper attenuation and training paces.

use super::types::{QualityPlacement, TrainingGoal, TrainingStage};

/// Lowest number of weekly sessions a plan will schedule.
pub const MIN_SESSIONS_PER_WEEK: u32 = 4;
/// Highest number of weekly sessions a plan will schedule.
pub const MAX_SESSIONS_PER_WEEK: u32 = 6;
/// No prescribed run is shorter than this (km).
pub const MIN_DISTANCE_KM: f64 = 2.0;
/// Every Nth ramp week is a recovery week.
pub const DOWN_WEEK_INTERVAL: u32 = 4;
/// Distance multiplier applied in recovery weeks.
pub const DOWN_WEEK_FACTOR: f64 = 0.85;

/// Linear distance progression from the first ramp week to the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    /// Distance in the first week (km)
    pub start: f64,
    /// Distance at the end of the ramp (km)
    pub peak: f64,
}

impl DistanceRange {
    pub const fn new(start: f64, peak: f64) -> Self {
        Self { start, peak }
    }

    /// Interpolate between start and peak; `progress` is clamped to [0, 1].
    pub fn at(&self, progress: f64) -> f64 {
        if progress.is_nan() {
            return self.start;
        }
        self.start + (self.peak - self.start) * progress.clamp(0.0, 1.0)
    }
}

/// Week counts of the ramp stages. Taper length comes from `GoalProfile::taper_weeks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageWeeks {
    pub base: u32,
    pub build: u32,
    pub peak: u32,
}

/// Multipliers applied to peak distances, one per taper week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperFactors {
    pub long: &'static [f64],
    pub easy: &'static [f64],
    pub steady: Option<&'static [f64]>,
}

/// Which session carries the quality emphasis in each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPlacements {
    pub base: Option<QualityPlacement>,
    pub build: Option<QualityPlacement>,
    pub peak: Option<QualityPlacement>,
    pub taper: Option<QualityPlacement>,
}

impl QualityPlacements {
    /// Same placement for every stage.
    pub const fn uniform(placement: QualityPlacement) -> Self {
        Self {
            base: Some(placement),
            build: Some(placement),
            peak: Some(placement),
            taper: Some(placement),
        }
    }

    pub fn for_stage(&self, stage: TrainingStage) -> Option<QualityPlacement> {
        match stage {
            TrainingStage::Base => self.base,
            TrainingStage::Build => self.build,
            TrainingStage::Peak => self.peak,
            TrainingStage::Taper => self.taper,
        }
    }
}

/// Multipliers applied to race pace (> 1.0 is slower than race pace).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceMultipliers {
    pub easy: f64,
    pub long: f64,
    pub steady: Option<f64>,
}

impl PaceMultipliers {
    /// Steady multiplier, falling back to the long-run multiplier.
    pub fn steady_or_long(&self) -> f64 {
        self.steady.unwrap_or(self.long)
    }
}

/// Static plan configuration for one race distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProfile {
    /// Plan length in weeks
    pub total_weeks: u32,
    /// Race distance in kilometers
    pub race_distance_km: f64,
    pub long_run: DistanceRange,
    pub easy_run: DistanceRange,
    /// Steady run progression; goals without one schedule no steady runs
    pub steady_run: Option<DistanceRange>,
    /// Default number of easy runs per week
    pub easy_runs_per_week: u32,
    /// Number of final weeks spent tapering
    pub taper_weeks: u32,
    pub stages: StageWeeks,
    pub taper_factors: TaperFactors,
    pub quality_placement: QualityPlacements,
    pub pace_multipliers: PaceMultipliers,
}

impl GoalProfile {
    /// Weeks before the taper, during which distances ramp up.
    pub fn ramp_weeks(&self) -> u32 {
        self.total_weeks.saturating_sub(self.taper_weeks)
    }

    /// Whether the profile defines a steady run.
    pub fn has_steady_run(&self) -> bool {
        self.steady_run.is_some()
    }

    /// Long run plus the steady run when defined.
    pub fn quality_sessions(&self) -> u32 {
        1 + u32::from(self.has_steady_run())
    }

    /// Sessions per week when the runner does not choose.
    pub fn default_sessions(&self) -> u32 {
        self.easy_runs_per_week + self.quality_sessions()
    }
}

const FIVE_K: GoalProfile = GoalProfile {
    total_weeks: 8,
    race_distance_km: 5.0,
    long_run: DistanceRange::new(6.0, 12.0),
    easy_run: DistanceRange::new(4.0, 7.0),
    steady_run: None,
    easy_runs_per_week: 3,
    taper_weeks: 2,
    stages: StageWeeks {
        base: 3,
        build: 2,
        peak: 1,
    },
    taper_factors: TaperFactors {
        long: &[0.75, 0.55],
        easy: &[0.85, 0.65],
        steady: None,
    },
    quality_placement: QualityPlacements::uniform(QualityPlacement::Easy),
    pace_multipliers: PaceMultipliers {
        easy: 1.16,
        long: 1.1,
        steady: Some(1.05),
    },
};

const TEN_K: GoalProfile = GoalProfile {
    total_weeks: 10,
    race_distance_km: 10.0,
    long_run: DistanceRange::new(9.0, 18.0),
    easy_run: DistanceRange::new(5.5, 8.0),
    steady_run: Some(DistanceRange::new(7.0, 12.0)),
    easy_runs_per_week: 3,
    taper_weeks: 2,
    stages: StageWeeks {
        base: 3,
        build: 3,
        peak: 2,
    },
    taper_factors: TaperFactors {
        long: &[0.75, 0.55],
        easy: &[0.85, 0.65],
        steady: Some(&[0.75, 0.55]),
    },
    quality_placement: QualityPlacements::uniform(QualityPlacement::Steady),
    pace_multipliers: PaceMultipliers {
        easy: 1.18,
        long: 1.12,
        steady: Some(1.05),
    },
};

const HALF_MARATHON: GoalProfile = GoalProfile {
    total_weeks: 12,
    race_distance_km: 21.1,
    long_run: DistanceRange::new(14.0, 26.0),
    easy_run: DistanceRange::new(6.5, 8.5),
    steady_run: Some(DistanceRange::new(9.0, 14.0)),
    easy_runs_per_week: 3,
    taper_weeks: 2,
    stages: StageWeeks {
        base: 4,
        build: 3,
        peak: 3,
    },
    taper_factors: TaperFactors {
        long: &[0.75, 0.55],
        easy: &[0.85, 0.65],
        steady: Some(&[0.8, 0.6]),
    },
    quality_placement: QualityPlacements {
        base: Some(QualityPlacement::Easy),
        build: Some(QualityPlacement::Easy),
        peak: Some(QualityPlacement::Steady),
        taper: Some(QualityPlacement::Easy),
    },
    pace_multipliers: PaceMultipliers {
        easy: 1.2,
        long: 1.15,
        steady: Some(1.08),
    },
};

const MARATHON: GoalProfile = GoalProfile {
    total_weeks: 16,
    race_distance_km: 42.2,
    long_run: DistanceRange::new(20.0, 35.0),
    easy_run: DistanceRange::new(7.0, 8.5),
    steady_run: Some(DistanceRange::new(12.0, 20.0)),
    easy_runs_per_week: 4,
    taper_weeks: 3,
    stages: StageWeeks {
        base: 5,
        build: 4,
        peak: 4,
    },
    taper_factors: TaperFactors {
        long: &[0.8, 0.6, 0.4],
        easy: &[0.85, 0.7, 0.55],
        steady: Some(&[0.8, 0.6, 0.45]),
    },
    quality_placement: QualityPlacements {
        base: Some(QualityPlacement::Steady),
        build: Some(QualityPlacement::Steady),
        peak: Some(QualityPlacement::Long),
        taper: Some(QualityPlacement::Steady),
    },
    pace_multipliers: PaceMultipliers {
        easy: 1.18,
        long: 1.14,
        steady: Some(1.07),
    },
};

/// Look up the static profile for a goal.
pub fn goal_profile(goal: TrainingGoal) -> &'static GoalProfile {
    match goal {
        TrainingGoal::FiveK => &FIVE_K,
        TrainingGoal::TenK => &TEN_K,
        TrainingGoal::HalfMarathon => &HALF_MARATHON,
        TrainingGoal::Marathon => &MARATHON,
    }
}

impl TrainingGoal {
    /// Static plan profile for this goal.
    pub fn profile(&self) -> &'static GoalProfile {
        goal_profile(*self)
    }

    /// Race distance in kilometers.
    pub fn race_distance_km(&self) -> f64 {
        self.profile().race_distance_km
    }
}
