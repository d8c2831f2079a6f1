//! Goal-based attendance projections.
//!
//! Surplus capacity is floored and deficits are ceiled: a class cannot be
//! partially missed or partially attended.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NoData,
    OnTrack,
    AtRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// No classes held yet.
    NoData,
    /// Goal met; `can_miss` consecutive absences keep it met.
    OnTrack { can_miss: u64 },
    /// Goal of 0%, nothing can drop below it.
    NoLimit,
    /// Goal not met; `need_to_attend` consecutive attended classes reach it.
    AtRisk { need_to_attend: u64 },
    /// Goal of 100% after at least one miss.
    Unreachable,
}

impl Projection {
    pub fn status(self) -> Status {
        match self {
            Projection::NoData => Status::NoData,
            Projection::OnTrack { .. } | Projection::NoLimit => Status::OnTrack,
            Projection::AtRisk { .. } | Projection::Unreachable => Status::AtRisk,
        }
    }

    /// The integer projection, when there is one.
    pub fn classes(self) -> Option<u64> {
        match self {
            Projection::OnTrack { can_miss } => Some(can_miss),
            Projection::AtRisk { need_to_attend } => Some(need_to_attend),
            _ => None,
        }
    }

    pub fn message(self) -> String {
        match self {
            Projection::NoData => "No classes held yet. Start tracking!".to_string(),
            Projection::OnTrack { can_miss } if can_miss > 0 => {
                format!("You can miss the next {can_miss} class(es).")
            }
            Projection::OnTrack { .. } => "On track. Do not miss the next class.".to_string(),
            Projection::NoLimit => "Any attendance meets a 0% goal.".to_string(),
            Projection::AtRisk { need_to_attend } => {
                format!("You need to attend the next {need_to_attend} class(es) to reach your goal.")
            }
            Projection::Unreachable => {
                "A 100% goal can no longer be reached after a missed class.".to_string()
            }
        }
    }
}

pub fn project(attended: u64, total: u64, goal: f64) -> Projection {
    if total == 0 {
        return Projection::NoData;
    }

    let attended = attended as f64;
    let total = total as f64;
    let percentage = attended / total * 100.0;

    if percentage >= goal {
        if goal <= 0.0 {
            return Projection::NoLimit;
        }
        let can_miss = (attended * 100.0 / goal - total).floor();
        debug_assert!(can_miss >= 0.0, "goal met with negative margin");
        Projection::OnTrack {
            can_miss: if can_miss > 0.0 { can_miss as u64 } else { 0 },
        }
    } else if goal >= 100.0 {
        Projection::Unreachable
    } else {
        let need_to_attend = ((goal * total - 100.0 * attended) / (100.0 - goal)).ceil();
        Projection::AtRisk {
            need_to_attend: need_to_attend.max(0.0) as u64,
        }
    }
}
