use crate::models::{OverviewResponse, ScheduleRow, Snapshot, Subject, SubjectReport};
use crate::projection::{Status, project};
use crate::schedule::day_name;
use chrono::{Datelike, Local, Weekday};

pub fn build_overview(data: &Snapshot) -> OverviewResponse {
    build_overview_at(Local::now().date_naive().weekday(), data)
}

pub fn build_overview_at(today: Weekday, data: &Snapshot) -> OverviewResponse {
    let subjects: Vec<SubjectReport> = data
        .subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| subject_report(index, subject, data.goal))
        .collect();

    let total_attended = data
        .subjects
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.attended));
    let total_held = data
        .subjects
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.total));
    let overall_percentage =
        (total_held > 0).then(|| total_attended as f64 / total_held as f64 * 100.0);

    let on_track = subjects
        .iter()
        .filter(|r| r.status == Status::OnTrack)
        .count();
    let at_risk = subjects
        .iter()
        .filter(|r| r.status == Status::AtRisk)
        .count();

    let today = day_name(today);
    let classes_today = schedule_rows(data)
        .into_iter()
        .filter(|row| row.day == today)
        .collect();

    OverviewResponse {
        goal: data.goal,
        subjects,
        total_attended,
        total_held,
        overall_percentage,
        on_track,
        at_risk,
        today: today.to_string(),
        classes_today,
    }
}

pub fn subject_report(index: usize, subject: &Subject, goal: f64) -> SubjectReport {
    let projection = project(subject.attended, subject.total, goal);
    SubjectReport {
        index,
        name: subject.name.clone(),
        attended: subject.attended,
        total: subject.total,
        percentage: subject.percentage(),
        status: projection.status(),
        classes: projection.classes(),
        message: projection.message(),
    }
}

/// Schedule entries tagged with the position used to remove them.
pub fn schedule_rows(data: &Snapshot) -> Vec<ScheduleRow> {
    data.schedule
        .iter()
        .enumerate()
        .map(|(index, entry)| ScheduleRow {
            index,
            subject: entry.subject.clone(),
            day: entry.day.clone(),
            time: entry.time.clone(),
        })
        .collect()
}
