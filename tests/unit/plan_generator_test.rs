//! Unit tests for training plan generation.
//!
//! Checks the properties every generated plan must hold for all goals.

use runplan::plan::{
    generate_training_plan, goal_profile, TrainingGoal, TrainingStage, MAX_SESSIONS_PER_WEEK,
    MIN_SESSIONS_PER_WEEK,
};

const PACES: [f64; 4] = [3.5, 4.75, 6.0, 8.25];

fn all_plans() -> Vec<(TrainingGoal, runplan::TrainingPlan)> {
    let mut plans = Vec::new();
    for goal in TrainingGoal::all() {
        for pace in PACES {
            for sessions in [None, Some(1), Some(4), Some(5), Some(6), Some(9)] {
                plans.push((*goal, generate_training_plan(*goal, pace, sessions)));
            }
        }
    }
    plans
}

fn has_one_decimal(value: f64) -> bool {
    ((value * 10.0).round() - value * 10.0).abs() < 1e-9
}

#[test]
fn test_week_count_and_numbering() {
    for (goal, plan) in all_plans() {
        let profile = goal_profile(goal);
        assert_eq!(plan.weeks.len(), profile.total_weeks as usize);
        for (i, week) in plan.weeks.iter().enumerate() {
            assert_eq!(week.week, i as u32 + 1);
        }
    }
}

#[test]
fn test_distances_floor_and_precision() {
    for (goal, plan) in all_plans() {
        for week in &plan.weeks {
            let mut distances = vec![week.easy_runs.distance_km, week.long_run.distance_km];
            if let Some(steady) = &week.steady_run {
                distances.push(steady.distance_km);
            }
            for distance in distances {
                assert!(distance >= 2.0, "{goal} week {}: {distance}", week.week);
                assert!(has_one_decimal(distance), "{goal} week {}: {distance}", week.week);
            }
        }
    }
}

#[test]
fn test_stages_monotonic_and_taper_last() {
    for (goal, plan) in all_plans() {
        let profile = goal_profile(goal);
        let stages: Vec<TrainingStage> = plan.weeks.iter().map(|w| w.stage).collect();
        assert!(stages.windows(2).all(|pair| pair[0] <= pair[1]), "{goal}: {stages:?}");

        let taper_start = (profile.total_weeks - profile.taper_weeks) as usize;
        assert!(stages[taper_start..].iter().all(|s| *s == TrainingStage::Taper));
        assert!(stages[..taper_start].iter().all(|s| *s != TrainingStage::Taper));
    }
}

#[test]
fn test_quality_key_echoes_stage() {
    for (_, plan) in all_plans() {
        assert!(plan.weeks.iter().all(|w| w.quality_key == w.stage));
    }
}

#[test]
fn test_steady_runs_all_or_none() {
    for (goal, plan) in all_plans() {
        let with_steady = plan.weeks.iter().filter(|w| w.steady_run.is_some()).count();
        if goal_profile(goal).has_steady_run() {
            assert_eq!(with_steady, plan.weeks.len(), "{goal}");
        } else {
            assert_eq!(with_steady, 0, "{goal}");
        }
    }
}

#[test]
fn test_sessions_clamped_and_easy_count_constant() {
    for (goal, plan) in all_plans() {
        assert!((MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK).contains(&plan.sessions_per_week));

        let quality = goal_profile(goal).quality_sessions();
        let expected = plan.sessions_per_week.saturating_sub(quality).max(1);
        assert!(plan.weeks.iter().all(|w| w.easy_runs.count == expected), "{goal}");
    }
}

#[test]
fn test_down_weeks_below_interpolation() {
    for goal in TrainingGoal::all() {
        let profile = goal_profile(*goal);
        let plan = generate_training_plan(*goal, 5.0, None);
        let ramp_weeks = profile.ramp_weeks();

        for week in plan.weeks.iter().filter(|w| w.week % 4 == 0 && w.stage != TrainingStage::Taper) {
            let progress = f64::from(week.week - 1) / f64::from(ramp_weeks - 1);
            let unadjusted_long = profile.long_run.at(progress);
            let unadjusted_easy = profile.easy_run.at(progress);
            assert!(week.long_run.distance_km < unadjusted_long, "{goal} week {}", week.week);
            assert!(week.easy_runs.distance_km < unadjusted_easy, "{goal} week {}", week.week);
        }
    }
}

#[test]
fn test_taper_scales_peak_distance() {
    let profile = goal_profile(TrainingGoal::Marathon);
    let plan = generate_training_plan(TrainingGoal::Marathon, 5.5, None);

    let taper: Vec<f64> = plan.weeks[13..].iter().map(|w| w.long_run.distance_km).collect();
    assert_eq!(taper, vec![28.0, 21.0, 14.0]);
    assert_eq!(profile.long_run.peak, 35.0);
}

#[test]
fn test_generation_is_idempotent() {
    for goal in TrainingGoal::all() {
        let first = generate_training_plan(*goal, 5.25, Some(5));
        let second = generate_training_plan(*goal, 5.25, Some(5));
        assert_eq!(first, second);
    }
}

#[test]
fn test_five_k_scenario() {
    let plan = generate_training_plan(TrainingGoal::FiveK, 6.0, None);
    assert_eq!(plan.total_weeks(), 8);

    let first = &plan.weeks[0];
    assert_eq!(first.stage, TrainingStage::Base);
    assert_eq!(first.long_run.distance_km, 6.0);
    assert_eq!(first.easy_runs.distance_km, 4.0);

    let last = &plan.weeks[7];
    assert_eq!(last.stage, TrainingStage::Taper);
    assert_eq!(last.long_run.distance_km, 6.6);
}

#[test]
fn test_marathon_sessions_capped() {
    let plan = generate_training_plan(TrainingGoal::Marathon, 5.5, Some(7));
    assert_eq!(plan.sessions_per_week, 6);
    assert!(plan.weeks.iter().all(|w| w.easy_runs.count == 4));
}

#[test]
fn test_ten_k_four_sessions() {
    let plan = generate_training_plan(TrainingGoal::TenK, 5.0, Some(4));
    assert_eq!(plan.sessions_per_week, 4);
    assert!(plan.weeks.iter().all(|w| w.easy_runs.count == 2));
}
