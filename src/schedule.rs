use crate::models::ScheduleEntry;
use chrono::{NaiveTime, Weekday};
use std::cmp::Ordering;

pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_ORDER[weekday.num_days_from_monday() as usize]
}

/// Position of `day` in the Monday-first week, `None` for anything that is
/// not a full English weekday name.
pub fn day_index(day: &str) -> Option<usize> {
    DAY_ORDER.iter().position(|name| *name == day)
}

/// Parses a zero-padded 24-hour `HH:MM` string.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    if time.len() != 5 || time.as_bytes()[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

/// Weekday first, then start time. Unknown day names sort ahead of Monday.
pub fn compare_entries(a: &ScheduleEntry, b: &ScheduleEntry) -> Ordering {
    day_index(&a.day)
        .cmp(&day_index(&b.day))
        .then_with(|| a.time.cmp(&b.time))
}

pub fn sort_entries(entries: &mut [ScheduleEntry]) {
    entries.sort_by(compare_entries);
}
