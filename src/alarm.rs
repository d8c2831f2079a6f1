//! Class reminders.
//!
//! Each tick compares the wall clock against every entry scheduled for the
//! current weekday, at minute granularity. A reminder fires only on the tick
//! whose hour and minute equal the entry's start minus the lead time; a
//! skipped tick is not caught up.

use crate::models::{NotificationIntent, ScheduleEntry};
use crate::notify::NotificationSink;
use crate::schedule::{day_name, parse_time};
use crate::store::RecordStore;
use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};
use std::sync::Arc;
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

pub const DEFAULT_LEAD_MINUTES: u32 = 5;

pub fn is_due(entry: &ScheduleEntry, now: NaiveDateTime, lead: Duration) -> bool {
    if entry.day != day_name(now.weekday()) {
        return false;
    }
    let Some(start) = parse_time(&entry.time) else {
        return false;
    };
    let alarm_at = now.date().and_time(start) - lead;
    alarm_at.hour() == now.hour() && alarm_at.minute() == now.minute()
}

pub fn scan(entries: &[ScheduleEntry], now: NaiveDateTime, lead: Duration) -> Vec<NotificationIntent> {
    entries
        .iter()
        .filter(|entry| is_due(entry, now, lead))
        .map(|entry| NotificationIntent {
            subject: entry.subject.clone(),
            time: entry.time.clone(),
        })
        .collect()
}

/// One alarm tick: scans the schedule and hands due reminders to `sink`.
pub fn run_tick(
    entries: &[ScheduleEntry],
    now: NaiveDateTime,
    lead: Duration,
    sink: &dyn NotificationSink,
) -> usize {
    let due = scan(entries, now, lead);
    let count = due.len();
    for intent in due {
        sink.deliver(intent);
    }
    count
}

/// Runs `run_tick` against the live store every `period` for the lifetime
/// of the process.
pub fn spawn_alarm_task(
    store: Arc<Mutex<RecordStore>>,
    sink: impl NotificationSink + 'static,
    period: std::time::Duration,
    lead: Duration,
) -> JoinHandle<()> {
    spawn_alarm_task_with_clock(store, sink, period, lead, || Local::now().naive_local())
}

/// Same as `spawn_alarm_task`, reading local wall-clock time from `clock`.
pub fn spawn_alarm_task_with_clock(
    store: Arc<Mutex<RecordStore>>,
    sink: impl NotificationSink + 'static,
    period: std::time::Duration,
    lead: Duration,
    clock: impl Fn() -> NaiveDateTime + Send + 'static,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(
            period_secs = period.as_secs(),
            lead_minutes = lead.num_minutes(),
            "alarm scanner started"
        );

        loop {
            interval.tick().await;
            let now = clock();
            let store = store.lock().await;
            let fired = run_tick(store.schedule(), now, lead, &sink);
            if fired > 0 {
                debug!(fired, "alarm tick");
            }
        }
    })
}

/// Lead time from a minute count, falling back to the default when it does
/// not fit in a day.
pub fn lead_time(minutes: u32) -> Duration {
    if minutes >= 24 * 60 {
        warn!(minutes, "alarm lead time too long, using default");
        return Duration::minutes(i64::from(DEFAULT_LEAD_MINUTES));
    }
    Duration::minutes(i64::from(minutes))
}
