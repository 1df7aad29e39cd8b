//! Integration tests for the activity log file.

use chrono::NaiveDate;
use runplan::activities::{Activity, ActivityError, ActivityLog, ActivitySummary};
use runplan::pace::{DistanceUnit, FinishTime};
use tempfile::TempDir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn run(date: NaiveDate, km: f64, minutes: u32) -> Activity {
    Activity::new_as_of(date, km, FinishTime::new(0, minutes, 0), date).unwrap()
}

#[test]
fn test_missing_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let log = ActivityLog::open(dir.path().join("activities.json")).unwrap();
    assert!(log.is_empty());
    assert!(!log.path().exists());
}

#[test]
fn test_save_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("activities.json");

    let mut log = ActivityLog::open(&path).unwrap();
    let first = log.add(run(day(2024, 4, 2), 10.0, 52));
    log.add(run(day(2024, 3, 28), 6.0, 33));
    log.save().unwrap();

    let reopened = ActivityLog::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get(first).map(|a| a.distance_km), Some(10.0));
    assert_eq!(reopened.list()[0].date, day(2024, 3, 28));
    assert_eq!(reopened.activities(), log.activities());
}

#[test]
fn test_delete_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("activities.json");

    let mut log = ActivityLog::open(&path).unwrap();
    let keep = log.add(run(day(2024, 4, 2), 10.0, 52));
    let removed = log.add(run(day(2024, 4, 4), 5.0, 26));
    log.save().unwrap();

    assert!(log.delete(removed));
    log.save().unwrap();

    let reopened = ActivityLog::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get(keep).is_some());
    assert!(reopened.get(removed).is_none());
}

#[test]
fn test_find_by_prefix() {
    let dir = TempDir::new().unwrap();
    let mut log = ActivityLog::open(dir.path().join("activities.json")).unwrap();
    let id = log.add(run(day(2024, 4, 2), 10.0, 52));

    let full = id.to_string();
    assert_eq!(log.find_by_prefix(&full[..8]).map(|a| a.id), Some(id));
    assert_eq!(log.find_by_prefix(&full.to_uppercase()).map(|a| a.id), Some(id));
    assert!(log.find_by_prefix("zzzz").is_none());
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("activities.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(
        ActivityLog::open(&path),
        Err(ActivityError::Serialization(_))
    ));
}

#[test]
fn test_summary_from_saved_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("activities.json");

    let mut log = ActivityLog::open(&path).unwrap();
    log.add(run(day(2024, 4, 2), 10.0, 50));
    log.add(run(day(2024, 4, 4), 5.0, 25));
    log.save().unwrap();

    let reopened = ActivityLog::open(&path).unwrap();
    let summary = ActivitySummary::from_activities(reopened.activities(), DistanceUnit::Kilometers);
    assert_eq!(summary.display_total_time(), "1h 15m");
    assert_eq!(summary.display_average_pace(), "5:00");
}
