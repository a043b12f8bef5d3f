//! Integration tests for the exercise tracker stores

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use exercise_tracker::{ExerciseTracker, LogFilter, NewExercise, TrackerError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One user with entries on the first of January, February and March 2023
fn setup_quarter() -> (ExerciseTracker, String) {
    let tracker = ExerciseTracker::new();
    let user = tracker.create_user(Some("runner")).unwrap();

    for (description, day) in [
        ("january", "2023-01-01"),
        ("february", "2023-02-01"),
        ("march", "2023-03-01"),
    ] {
        tracker
            .log_exercise(&user.id, NewExercise::new(description, "30", Some(day)))
            .unwrap();
    }

    (tracker, user.id)
}

fn descriptions(tracker: &ExerciseTracker, id: &str, filter: LogFilter) -> Vec<String> {
    tracker
        .query_log(id, &filter)
        .unwrap()
        .logs
        .into_iter()
        .map(|item| item.description)
        .collect()
}

#[test]
fn test_create_and_find_user() {
    let tracker = ExerciseTracker::new();

    let created = tracker.create_user(Some("alice")).unwrap();
    assert_eq!(created.username, "alice");
    assert!(!created.id.is_empty());

    let found = tracker.find_user(&created.id).unwrap();
    assert_eq!(found, created);
}

#[test]
fn test_create_user_validation_does_not_mutate() {
    let tracker = ExerciseTracker::new();
    tracker.create_user(Some("alice")).unwrap();

    let err = tracker.create_user(Some("")).unwrap_err();
    assert!(matches!(err, TrackerError::Validation(_)));

    let err = tracker.create_user(None).unwrap_err();
    assert!(matches!(err, TrackerError::Validation(_)));

    assert_eq!(tracker.list_users().len(), 1);
}

#[test]
fn test_list_users_in_creation_order() {
    let tracker = ExerciseTracker::new();
    let names = ["ann", "ben", "cat", "dan", "eve"];

    let created: Vec<_> = names
        .iter()
        .map(|name| tracker.create_user(Some(name)).unwrap())
        .collect();

    let listed = tracker.list_users();
    assert_eq!(listed.len(), names.len());
    assert_eq!(listed, created);
}

#[test]
fn test_log_exercise_unknown_user() {
    let tracker = ExerciseTracker::new();
    tracker.create_user(Some("alice")).unwrap();

    let err = tracker
        .log_exercise("missing", NewExercise::new("run", "30", None))
        .unwrap_err();

    assert_eq!(err, TrackerError::user_not_found());
    assert_eq!(tracker.exercise_count(), 0);
}

#[test]
fn test_log_exercise_rejects_bad_duration() {
    let tracker = ExerciseTracker::new();
    let user = tracker.create_user(Some("alice")).unwrap();

    for duration in ["0", "-10", "ten", "-0.5"] {
        let err = tracker
            .log_exercise(&user.id, NewExercise::new("run", duration, None))
            .unwrap_err();
        assert_eq!(
            err,
            TrackerError::validation("Duration must be a number and positive"),
            "duration {:?}",
            duration
        );
    }

    assert_eq!(tracker.exercise_count(), 0);
}

#[test]
fn test_log_exercise_date_handling() {
    let tracker = ExerciseTracker::new();
    let user = tracker.create_user(Some("alice")).unwrap();

    let dated = tracker
        .log_exercise(
            &user.id,
            NewExercise::new("run", "30", Some("2023-04-10T18:45:00Z")),
        )
        .unwrap();
    assert_eq!(dated.date, date(2023, 4, 10));

    let before = chrono::Local::now().date_naive();
    let undated = tracker
        .log_exercise(&user.id, NewExercise::new("run", "30", Some("whenever")))
        .unwrap();
    let after = chrono::Local::now().date_naive();
    assert!(undated.date == before || undated.date == after);
}

#[test]
fn test_query_log_date_range_and_limit() {
    let (tracker, id) = setup_quarter();

    assert_eq!(
        descriptions(&tracker, &id, LogFilter::default()),
        vec!["january", "february", "march"]
    );

    let filter = LogFilter::default().with_from("2023-01-15");
    assert_eq!(
        descriptions(&tracker, &id, filter.clone()),
        vec!["february", "march"]
    );

    let filter = filter.with_to("2023-02-15");
    assert_eq!(descriptions(&tracker, &id, filter.clone()), vec!["february"]);

    let filter = filter.with_limit("1");
    assert_eq!(descriptions(&tracker, &id, filter), vec!["february"]);
}

#[test]
fn test_query_log_limit_keeps_first_entries() {
    let (tracker, id) = setup_quarter();

    let log = tracker
        .query_log(&id, &LogFilter::default().with_limit("2"))
        .unwrap();

    assert_eq!(log.count, 2);
    assert_eq!(log.logs[0].date, date(2023, 1, 1));
    assert_eq!(log.logs[1].date, date(2023, 2, 1));
}

#[test]
fn test_query_log_bounds_are_inclusive() {
    let (tracker, id) = setup_quarter();

    let filter = LogFilter::default()
        .with_from("2023-02-01")
        .with_to("2023-03-01");
    assert_eq!(descriptions(&tracker, &id, filter), vec!["february", "march"]);
}

#[test]
fn test_query_log_only_includes_owner_entries() {
    let (tracker, id) = setup_quarter();
    let other = tracker.create_user(Some("walker")).unwrap();
    tracker
        .log_exercise(&other.id, NewExercise::new("walk", "15", Some("2023-02-02")))
        .unwrap();

    let log = tracker.query_log(&other.id, &LogFilter::default()).unwrap();
    assert_eq!(log.username, "walker");
    assert_eq!(log.id, other.id);
    assert_eq!(log.count, 1);
    assert_eq!(log.logs[0].description, "walk");

    assert_eq!(tracker.query_log(&id, &LogFilter::default()).unwrap().count, 3);
}

#[test]
fn test_query_log_unknown_user_ignores_filters() {
    let (tracker, _) = setup_quarter();

    let filters = [
        LogFilter::default(),
        LogFilter::default().with_from("garbage"),
        LogFilter::default().with_limit("-3"),
        LogFilter::default().with_from("2023-01-01").with_to("2023-12-31"),
    ];

    for filter in filters {
        assert_eq!(
            tracker.query_log("missing", &filter).unwrap_err(),
            TrackerError::user_not_found()
        );
    }
}

#[test]
fn test_query_log_invalid_filters() {
    let (tracker, id) = setup_quarter();

    let err = tracker
        .query_log(&id, &LogFilter::default().with_to("31/31/2023"))
        .unwrap_err();
    assert_eq!(err, TrackerError::validation("Invalid date format"));

    let err = tracker
        .query_log(&id, &LogFilter::default().with_limit("0"))
        .unwrap_err();
    assert_eq!(err, TrackerError::validation("Invalid limit"));
}

#[test]
fn test_concurrent_logging() {
    let tracker = Arc::new(ExerciseTracker::new());
    let user = tracker.create_user(Some("shared")).unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let tracker = Arc::clone(&tracker);
        let id = user.id.clone();
        handles.push(thread::spawn(move || {
            tracker.create_user(Some(&format!("agent{}", i))).unwrap();
            tracker
                .log_exercise(&id, NewExercise::new("lap", "5", Some("2023-06-01")))
                .unwrap();
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(tracker.user_count(), 11);
    assert_eq!(tracker.query_log(&user.id, &LogFilter::default()).unwrap().count, 10);
}
