use attendance_tracker::errors::StoreError;
use attendance_tracker::projection::{Projection, Status, project};
use attendance_tracker::{JsonFileGateway, MemoryGateway, RecordStore};
use std::sync::Arc;
use tempfile::TempDir;

fn shared_store() -> (RecordStore, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::new());
    (RecordStore::open(Arc::clone(&gateway)), gateway)
}

fn assert_counts_valid(store: &RecordStore) {
    for subject in store.subjects() {
        assert!(
            subject.attended <= subject.total,
            "{} has {} of {}",
            subject.name,
            subject.attended,
            subject.total
        );
    }
}

#[test]
fn counters_stay_consistent_across_operations() {
    let (mut store, _) = shared_store();
    store.add_subject("Math").unwrap();
    store.add_subject("Physics").unwrap();

    // Deterministic mix of every counter operation, including bad indices.
    for step in 0..60usize {
        let index = step % 3;
        let _ = match step % 5 {
            0 | 3 => store.mark_attended(index),
            1 | 4 => store.mark_missed(index),
            _ if step % 20 == 2 => store.reset_subject(index),
            _ => store.mark_missed(index),
        };
        assert_counts_valid(&store);
    }
}

#[test]
fn removing_subject_cascades_to_schedule() {
    let (mut store, gateway) = shared_store();
    store.add_subject("Math").unwrap();
    store.add_subject("Physics").unwrap();
    store.add_schedule_entry("Physics", "Monday", "10:00").unwrap();
    store.add_schedule_entry("Math", "Monday", "09:00").unwrap();
    store.add_schedule_entry("Physics", "Thursday", "13:30").unwrap();

    let preview = store.preview_remove_subject(1).unwrap();
    assert_eq!(preview.subject.name, "Physics");
    assert_eq!(preview.schedule_entries, 2);
    assert_eq!(store.schedule().len(), 3);

    let removed = store.remove_subject(1).unwrap();
    assert_eq!(removed.schedule_entries_removed, 2);
    assert!(store.schedule().iter().all(|e| e.subject != "Physics"));
    assert_eq!(store.schedule().len(), 1);

    let saved = gateway.saved().unwrap();
    assert_eq!(saved.subjects.len(), 1);
    assert!(saved.schedule.iter().all(|e| e.subject != "Physics"));
}

#[test]
fn every_mutation_is_saved() {
    let (mut store, gateway) = shared_store();
    assert!(gateway.saved().is_none());

    store.add_subject("Math").unwrap();
    assert_eq!(gateway.saved().unwrap().subjects.len(), 1);

    store.mark_attended(0).unwrap();
    assert_eq!(gateway.saved().unwrap().subjects[0].attended, 1);

    store.set_goal(60.0).unwrap();
    assert_eq!(gateway.saved().unwrap().goal, 60.0);

    store.add_schedule_entry("Math", "Friday", "08:15").unwrap();
    store.remove_schedule_entry(0).unwrap();
    assert!(gateway.saved().unwrap().schedule.is_empty());
}

#[test]
fn failed_save_leaves_store_unchanged() {
    let (mut store, gateway) = shared_store();
    store.add_subject("Math").unwrap();
    let before = store.snapshot().clone();

    gateway.set_fail_saves(true);
    assert!(matches!(store.mark_attended(0), Err(StoreError::Storage(_))));
    assert!(matches!(store.add_subject("Art"), Err(StoreError::Storage(_))));
    assert!(matches!(store.set_goal(90.0), Err(StoreError::Storage(_))));
    assert_eq!(store.snapshot(), &before);

    gateway.set_fail_saves(false);
    assert_eq!(store.mark_attended(0).unwrap().attended, 1);
}

#[test]
fn duplicate_rejection_does_not_save() {
    let (mut store, gateway) = shared_store();
    store.add_subject("Math").unwrap();
    let saved = gateway.saved();

    assert!(matches!(store.add_subject("MATH"), Err(StoreError::DuplicateName(_))));
    assert_eq!(gateway.saved(), saved);
}

#[test]
fn projections_follow_store_counts() {
    let (mut store, _) = shared_store();
    store.add_subject("Math").unwrap();
    for _ in 0..8 {
        store.mark_attended(0).unwrap();
    }
    store.mark_missed(0).unwrap();
    store.mark_missed(0).unwrap();

    let subject = &store.subjects()[0];
    let projection = project(subject.attended, subject.total, store.goal());
    assert_eq!(projection, Projection::OnTrack { can_miss: 0 });

    store.set_goal(90.0).unwrap();
    let subject = &store.subjects()[0];
    let projection = project(subject.attended, subject.total, store.goal());
    assert_eq!(projection.status(), Status::AtRisk);
    assert_eq!(projection, Projection::AtRisk { need_to_attend: 10 });
}

#[test]
fn json_file_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.json");

    {
        let mut store = RecordStore::open(JsonFileGateway::new(&path));
        store.add_subject("Chemistry").unwrap();
        store.mark_attended(0).unwrap();
        store.mark_missed(0).unwrap();
        store.add_schedule_entry("Chemistry", "Tuesday", "11:00").unwrap();
        store.set_goal(80.0).unwrap();
    }

    let store = RecordStore::open(JsonFileGateway::new(&path));
    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0].attended, 1);
    assert_eq!(store.subjects()[0].total, 2);
    assert_eq!(store.schedule()[0].day, "Tuesday");
    assert_eq!(store.goal(), 80.0);
}

#[test]
fn unsorted_file_is_sorted_on_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.json");
    std::fs::write(
        &path,
        r#"{
            "subjects": [{"name": "Math", "attended": 0, "total": 0}],
            "schedule": [
                {"subject": "Math", "day": "Wednesday", "time": "09:00"},
                {"subject": "Math", "day": "Monday", "time": "14:00"},
                {"subject": "Math", "day": "Monday", "time": "08:00"}
            ],
            "attendanceGoal": 75
        }"#,
    )
    .unwrap();

    let store = RecordStore::open(JsonFileGateway::new(&path));
    let slots: Vec<(&str, &str)> = store
        .schedule()
        .iter()
        .map(|e| (e.day.as_str(), e.time.as_str()))
        .collect();
    assert_eq!(
        slots,
        vec![("Monday", "08:00"), ("Monday", "14:00"), ("Wednesday", "09:00")]
    );
}

#[test]
fn hand_edited_file_is_repaired_on_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.json");
    std::fs::write(
        &path,
        r#"{
            "subjects": [
                {"name": "Math", "attended": 3, "total": 4},
                {"name": "math", "attended": 0, "total": 9}
            ],
            "schedule": [
                {"subject": "Math", "day": "Monday", "time": "09:00"},
                {"subject": "Chemistry", "day": "Tuesday", "time": "10:00"}
            ],
            "attendanceGoal": 75
        }"#,
    )
    .unwrap();

    let mut store = RecordStore::open(JsonFileGateway::new(&path));
    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0].name, "Math");
    assert_eq!(store.subjects()[0].total, 4);
    assert_eq!(store.schedule().len(), 1);
    assert_eq!(store.schedule()[0].subject, "Math");

    // Index 0 now unambiguously means the surviving "Math".
    store.mark_attended(0).unwrap();
    assert_eq!(store.subjects()[0].attended, 4);
    assert!(matches!(
        store.add_subject("MATH"),
        Err(StoreError::DuplicateName(_))
    ));
}
