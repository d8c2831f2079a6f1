use crate::projection::Status;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GOAL: f64 = 75.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub attended: u64,
    #[serde(default)]
    pub total: u64,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attended: 0,
            total: 0,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.attended as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub day: String,
    pub time: String,
}

/// Everything the persistence gateway reads and writes, in the flat
/// `subjects` / `schedule` / `attendanceGoal` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(rename = "attendanceGoal", default = "default_goal")]
    pub goal: f64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            schedule: Vec::new(),
            goal: DEFAULT_GOAL,
        }
    }
}

fn default_goal() -> f64 {
    DEFAULT_GOAL
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationIntent {
    pub subject: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSubjectRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddScheduleRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalResponse {
    pub goal: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectReport {
    pub index: usize,
    pub name: String,
    pub attended: u64,
    pub total: u64,
    pub percentage: f64,
    pub status: Status,
    pub classes: Option<u64>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemovalPreview {
    pub subject: Subject,
    pub schedule_entries: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemovedSubject {
    pub subject: Subject,
    pub schedule_entries_removed: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub index: usize,
    pub subject: String,
    pub day: String,
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub goal: f64,
    pub subjects: Vec<SubjectReport>,
    pub total_attended: u64,
    pub total_held: u64,
    pub overall_percentage: Option<f64>,
    pub on_track: usize,
    pub at_risk: usize,
    pub today: String,
    pub classes_today: Vec<ScheduleRow>,
}
