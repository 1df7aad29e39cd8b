//! Periodized training plan generation.
//!
//! A plan ramps easy, steady and long run distances linearly from their start
//! to their peak values, inserts a recovery week every fourth ramp week and
//! then tapers off the peak distances into race day. The generator is a pure
//! function of its inputs.

use super::profiles::{
    goal_profile, GoalProfile, DOWN_WEEK_FACTOR, DOWN_WEEK_INTERVAL, MAX_SESSIONS_PER_WEEK,
    MIN_DISTANCE_KM, MIN_SESSIONS_PER_WEEK,
};
use super::types::{
    EasyRuns, PlanRunBlock, PlanWeek, QualityPlacement, TrainingGoal, TrainingPlan, TrainingStage,
};

// Used only when a taper factor list is empty.
const FALLBACK_LONG_TAPER: f64 = 0.6;
const FALLBACK_EASY_TAPER: f64 = 0.7;
const FALLBACK_STEADY_TAPER: f64 = 0.6;

/// Determine the stage of a 0-based week index.
///
/// Taper takes precedence over peak once the taper period has started, even if
/// the configured peak stage has not finished.
pub fn compute_stage(week_index: u32, profile: &GoalProfile) -> TrainingStage {
    let base_end = profile.stages.base;
    let build_end = base_end + profile.stages.build;
    let peak_end = build_end + profile.stages.peak;
    let taper_start = profile.ramp_weeks();

    if week_index < base_end {
        TrainingStage::Base
    } else if week_index < build_end {
        TrainingStage::Build
    } else if week_index < peak_end && week_index < taper_start {
        TrainingStage::Peak
    } else {
        TrainingStage::Taper
    }
}

/// Clamp a requested weekly session count into the supported range.
pub fn clamp_sessions(requested: u32) -> u32 {
    requested.clamp(MIN_SESSIONS_PER_WEEK, MAX_SESSIONS_PER_WEEK)
}

/// Fraction of the ramp completed at a week, in [0, 1].
fn ramp_progress(week_index: u32, ramp_weeks: u32) -> f64 {
    if ramp_weeks <= 1 {
        return 1.0;
    }
    let ramp_index = week_index.min(ramp_weeks - 1);
    f64::from(ramp_index) / f64::from(ramp_weeks - 1)
}

/// Round to one decimal and floor at the minimum run distance.
fn clamp_distance(distance_km: f64) -> f64 {
    MIN_DISTANCE_KM.max((distance_km * 10.0).round() / 10.0)
}

/// Taper factor for a position in the taper; the last factor repeats.
fn taper_factor(factors: &[f64], taper_index: Option<u32>, fallback: f64) -> f64 {
    taper_index
        .and_then(|index| factors.get(index as usize))
        .or_else(|| factors.last())
        .copied()
        .unwrap_or(fallback)
}

/// Quality placement for a stage, defaulting to the steady run when the
/// profile has one and to the easy runs otherwise.
fn resolve_quality_placement(profile: &GoalProfile, stage: TrainingStage) -> QualityPlacement {
    profile
        .quality_placement
        .for_stage(stage)
        .unwrap_or(if profile.has_steady_run() {
            QualityPlacement::Steady
        } else {
            QualityPlacement::Easy
        })
}

/// Generate a training plan for a goal.
///
/// `pace_per_km` is the target race pace in minutes per kilometer.
/// `sessions_per_week` defaults to the profile's easy runs plus its quality
/// sessions and is always clamped to [`MIN_SESSIONS_PER_WEEK`, `MAX_SESSIONS_PER_WEEK`].
///
/// Inputs are assumed validated: a non-positive pace yields a plan with
/// meaningless paces rather than an error.
pub fn generate_training_plan(
    goal: TrainingGoal,
    pace_per_km: f64,
    sessions_per_week: Option<u32>,
) -> TrainingPlan {
    let profile = goal_profile(goal);
    let ramp_weeks = profile.ramp_weeks();
    let quality_sessions = profile.quality_sessions();
    let sessions = clamp_sessions(sessions_per_week.unwrap_or_else(|| profile.default_sessions()));
    let easy_runs_count = sessions.saturating_sub(quality_sessions).max(1);

    tracing::debug!(
        goal = goal.id(),
        pace_per_km,
        requested_sessions = ?sessions_per_week,
        sessions,
        "Generating training plan"
    );

    let paces = profile.pace_multipliers;
    let easy_pace = pace_per_km * paces.easy;
    let long_pace = pace_per_km * paces.long;
    let steady_pace = pace_per_km * paces.steady_or_long();

    let weeks = (0..profile.total_weeks)
        .map(|index| {
            let stage = compute_stage(index, profile);
            let progress = ramp_progress(index, ramp_weeks);

            let mut easy_km = profile.easy_run.at(progress);
            let mut long_km = profile.long_run.at(progress);
            let mut steady_km = profile.steady_run.map(|range| range.at(progress));

            if stage == TrainingStage::Taper {
                let taper_index = index.checked_sub(ramp_weeks);
                let factors = profile.taper_factors;

                long_km = profile.long_run.peak
                    * taper_factor(factors.long, taper_index, FALLBACK_LONG_TAPER);
                easy_km = profile.easy_run.peak
                    * taper_factor(factors.easy, taper_index, FALLBACK_EASY_TAPER);

                if let (Some(range), Some(steady_factors)) = (profile.steady_run, factors.steady) {
                    steady_km = Some(
                        range.peak
                            * taper_factor(steady_factors, taper_index, FALLBACK_STEADY_TAPER),
                    );
                }
            } else if (index + 1) % DOWN_WEEK_INTERVAL == 0 {
                easy_km *= DOWN_WEEK_FACTOR;
                long_km *= DOWN_WEEK_FACTOR;
                steady_km = steady_km.map(|km| km * DOWN_WEEK_FACTOR);
            }

            PlanWeek {
                week: index + 1,
                stage,
                easy_runs: EasyRuns {
                    count: easy_runs_count,
                    distance_km: clamp_distance(easy_km),
                    pace_per_km: easy_pace,
                },
                steady_run: steady_km.map(|km| PlanRunBlock {
                    distance_km: clamp_distance(km),
                    pace_per_km: steady_pace,
                }),
                long_run: PlanRunBlock {
                    distance_km: clamp_distance(long_km),
                    pace_per_km: long_pace,
                },
                quality_key: stage,
                quality_placement: resolve_quality_placement(profile, stage),
            }
        })
        .collect();

    TrainingPlan {
        goal,
        pace_per_km,
        race_distance_km: profile.race_distance_km,
        sessions_per_week: sessions,
        weeks,
    }
}
