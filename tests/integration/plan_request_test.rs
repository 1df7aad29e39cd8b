//! Integration tests for the plan form flow.
//!
//! Request validation, plan generation and report rendering together.

use runplan::i18n::{Language, TranslationService};
use runplan::pace::{DistanceUnit, FinishTime, PaceError};
use runplan::plan::{PlanRequest, PlanRequestError, QualityPlacement, TrainingGoal, TrainingStage};
use runplan::report::PlanReport;

#[test]
fn test_goal_aliases() {
    assert_eq!("HALF".parse::<TrainingGoal>(), Ok(TrainingGoal::HalfMarathon));
    assert_eq!("half-marathon".parse::<TrainingGoal>(), Ok(TrainingGoal::HalfMarathon));
    assert_eq!("42k".parse::<TrainingGoal>(), Ok(TrainingGoal::Marathon));
    assert!("ultra".parse::<TrainingGoal>().is_err());
}

#[test]
fn test_marathon_request_end_to_end() {
    let request = PlanRequest::new(TrainingGoal::Marathon, "3:30:00".parse().unwrap(), 6);
    let plan = request.generate().unwrap();

    assert_eq!(plan.total_weeks(), 16);
    assert_eq!(plan.sessions_per_week, 6);
    assert!((plan.race_distance_km - 42.2).abs() < 1e-9);
    // 210 minutes over 42.2 km
    assert!((plan.pace_per_km - 210.0 / 42.2).abs() < 1e-9);
    assert!(plan.has_steady_runs());

    let peak_week = plan.week(12).unwrap();
    assert_eq!(peak_week.stage, TrainingStage::Peak);
    assert_eq!(peak_week.quality_placement, QualityPlacement::Long);
    assert_eq!(plan.week(16).unwrap().stage, TrainingStage::Taper);
}

#[test]
fn test_invalid_requests() {
    let zero = PlanRequest::new(TrainingGoal::TenK, FinishTime::default(), 5);
    assert_eq!(zero.generate(), Err(PlanRequestError::Time(PaceError::ZeroTime)));

    let too_few = PlanRequest::new(TrainingGoal::TenK, FinishTime::new(0, 45, 0), 3);
    assert!(matches!(
        too_few.generate(),
        Err(PlanRequestError::SessionsOutOfRange { value: 3, min: 4, max: 6 })
    ));
}

#[test]
fn test_plan_json_uses_camel_case() {
    let request = PlanRequest::new(TrainingGoal::TenK, FinishTime::new(0, 50, 0), 5);
    let plan = request.generate().unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["goal"], "10k");
    assert_eq!(json["sessionsPerWeek"], 5);
    let week = &json["weeks"][0];
    assert_eq!(week["stage"], "base");
    assert_eq!(week["qualityKey"], "base");
    assert_eq!(week["qualityPlacement"], "steady");
    assert_eq!(week["easyRuns"]["count"], 3);
    assert!(week["steadyRun"]["distanceKm"].is_number());
}

#[test]
fn test_five_k_json_omits_steady_run() {
    let request = PlanRequest::new(TrainingGoal::FiveK, FinishTime::new(0, 25, 0), 5);
    let plan = request.generate().unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert!(json["weeks"][0].get("steadyRun").is_none());
}

#[test]
fn test_report_in_miles() {
    let request = PlanRequest::new(TrainingGoal::HalfMarathon, FinishTime::new(1, 45, 0), 5);
    let plan = request.generate().unwrap();
    let translations = TranslationService::new();
    let text = PlanReport::new(&plan, DistanceUnit::Miles, &translations)
        .with_target_time(request.total_seconds())
        .render();

    assert!(text.contains("Your 12-week plan"));
    assert!(text.contains("Race distance: 13.1 mi"));
    assert!(text.contains("Target finish time: 1:45:00"));
    assert!(text.contains("Steady pace"));
    assert!(text.contains("/mi"));
    assert!(!text.contains(" km "));
    assert_eq!(text.matches("[Quality]").count(), 12);
}

#[test]
fn test_quality_sessions_have_no_fixed_distances() {
    let translations = TranslationService::new();
    for goal in TrainingGoal::all() {
        let request = PlanRequest::new(*goal, FinishTime::new(4, 0, 0), 5);
        let plan = request.generate().unwrap();
        let text = PlanReport::new(&plan, DistanceUnit::Miles, &translations).render();

        for line in text.lines().filter(|line| line.contains("Quality focus")) {
            assert!(!line.contains(" km"), "{goal}: {line}");
            assert!(!line.contains(" m "), "{goal}: {line}");
        }
    }
}

#[test]
fn test_overlong_finish_time_is_rejected() {
    let time = "1200000:00:00".parse::<FinishTime>();
    assert_eq!(time, Err(PaceError::TimeTooLong(1_200_000)));
}

#[test]
fn test_report_in_french() {
    let request = PlanRequest::new(TrainingGoal::TenK, FinishTime::new(0, 50, 0), 4);
    let plan = request.generate().unwrap();
    let translations = TranslationService::with_language(Language::French);
    let text = PlanReport::new(&plan, DistanceUnit::Kilometers, &translations).render();

    assert!(text.contains("4 séances par semaine"));
    assert!(text.contains("2 footings de"));
    assert!(text.contains("Séance de qualité"));
    assert!(text.contains("[Qualité]"));
}
