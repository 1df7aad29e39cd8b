//! Unit tests for dashboard statistics.

use chrono::{Duration, NaiveDate};
use runplan::activities::{aggregate_volume, pace_trend, Activity, ActivitySummary, AggregationMode};
use runplan::i18n::Language;
use runplan::pace::{DistanceUnit, FinishTime};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn run(date: NaiveDate, km: f64, time: FinishTime) -> Activity {
    Activity::new_as_of(date, km, time, date).unwrap()
}

#[test]
fn test_summary_in_miles() {
    let activities = vec![
        run(day(2024, 5, 1), 16.09344, FinishTime::new(1, 20, 0)),
        run(day(2024, 5, 3), 8.04672, FinishTime::new(0, 40, 0)),
    ];
    let summary = ActivitySummary::from_activities(&activities, DistanceUnit::Miles);

    assert_eq!(summary.count, 2);
    assert!((summary.total_distance - 15.0).abs() < 1e-9);
    assert_eq!(summary.display_total_distance(Language::English), "15.0 mi");
    assert_eq!(summary.display_total_time(), "2h 00m");
    assert_eq!(summary.display_average_pace(), "8:00");
}

#[test]
fn test_monthly_volume_spans_year_boundary() {
    let today = day(2024, 2, 15);
    let activities = vec![
        run(day(2023, 12, 30), 10.0, FinishTime::new(0, 55, 0)),
        run(day(2024, 1, 2), 5.0, FinishTime::new(0, 27, 0)),
        run(day(2024, 1, 20), 12.5, FinishTime::new(1, 5, 0)),
        run(day(2024, 2, 10), 7.25, FinishTime::new(0, 38, 0)),
    ];

    let monthly = aggregate_volume(&activities, AggregationMode::Month, DistanceUnit::Kilometers, today);
    let periods: Vec<(NaiveDate, f64)> = monthly.iter().map(|p| (p.period_start, p.distance)).collect();
    assert_eq!(
        periods,
        vec![
            (day(2023, 12, 1), 10.0),
            (day(2024, 1, 1), 17.5),
            (day(2024, 2, 1), 7.25),
        ]
    );
}

#[test]
fn test_weekly_volume_groups_by_monday() {
    let today = day(2024, 1, 10);
    // 2023-12-31 is a Sunday, 2024-01-01 a Monday
    let activities = vec![
        run(day(2023, 12, 31), 6.0, FinishTime::new(0, 33, 0)),
        run(day(2024, 1, 1), 4.0, FinishTime::new(0, 22, 0)),
        run(day(2024, 1, 7), 3.0, FinishTime::new(0, 17, 0)),
    ];

    let weekly = aggregate_volume(&activities, AggregationMode::Week, DistanceUnit::Kilometers, today);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].period_start, day(2023, 12, 25));
    assert_eq!(weekly[0].distance, 6.0);
    assert_eq!(weekly[1].period_start, day(2024, 1, 1));
    assert_eq!(weekly[1].distance, 7.0);
}

#[test]
fn test_pace_trend_in_miles() {
    let activities = vec![run(day(2024, 3, 1), 16.09344, FinishTime::new(1, 20, 0))];
    let trend = pace_trend(&activities, DistanceUnit::Miles, Some(30));
    assert_eq!(trend.len(), 1);
    assert!((trend[0].pace_seconds - 480.0).abs() < 1e-9);
}

#[test]
fn test_pace_trend_downsamples_long_history() {
    let start = day(2024, 1, 1);
    let activities: Vec<Activity> = (0..45)
        .map(|i| run(start + Duration::days(i), 5.0, FinishTime::new(0, 25, 0)))
        .collect();

    let trend = pace_trend(&activities, DistanceUnit::Kilometers, Some(30));
    // step 2 keeps 23 points, the last of which is already the latest run
    assert_eq!(trend.len(), 23);
    assert_eq!(trend.last().map(|p| p.date), Some(start + Duration::days(44)));
}

#[test]
fn test_aggregation_mode_parsing() {
    assert_eq!("month".parse::<AggregationMode>(), Ok(AggregationMode::Month));
    assert_eq!("Weekly".parse::<AggregationMode>(), Ok(AggregationMode::Week));
    assert!("daily".parse::<AggregationMode>().is_err());
}
