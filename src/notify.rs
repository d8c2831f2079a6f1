use crate::alarm::DEFAULT_LEAD_MINUTES;
use crate::models::NotificationIntent;
use chrono::{DateTime, Duration, Utc};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, error, info, warn};

const FEED_CAPACITY: usize = 32;

/// Receives class reminders from the alarm scanner. Display and permission
/// handling belong to the sink.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, intent: NotificationIntent);
}

#[derive(Debug)]
struct Queued {
    delivered_at: DateTime<Utc>,
    intent: NotificationIntent,
}

/// Logs each reminder and holds it until the page polls for it. Reminders
/// older than `max_age` are dropped unseen: once the class has started they
/// are no longer worth showing.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    pending: Arc<Mutex<VecDeque<Queued>>>,
    max_age: Duration,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new(Duration::minutes(i64::from(DEFAULT_LEAD_MINUTES)))
    }
}

impl NotificationFeed {
    pub fn new(max_age: Duration) -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::new())),
            max_age,
        }
    }

    /// Hands over every queued reminder that is still fresh, oldest first.
    pub fn drain(&self) -> Vec<NotificationIntent> {
        self.drain_at(Utc::now())
    }

    pub fn drain_at(&self, now: DateTime<Utc>) -> Vec<NotificationIntent> {
        let mut pending = self.pending();
        self.expire(&mut pending, now);
        pending.drain(..).map(|queued| queued.intent).collect()
    }

    pub fn deliver_at(&self, intent: NotificationIntent, now: DateTime<Utc>) {
        info!(
            subject = %intent.subject,
            time = %intent.time,
            "Upcoming class: {} class is starting at {}.",
            intent.subject,
            intent.time
        );
        let mut pending = self.pending();
        self.expire(&mut pending, now);
        if pending.len() == FEED_CAPACITY {
            if let Some(dropped) = pending.pop_front() {
                warn!(subject = %dropped.intent.subject, "notification feed full, dropping oldest");
            }
        }
        pending.push_back(Queued {
            delivered_at: now,
            intent,
        });
    }

    fn expire(&self, pending: &mut VecDeque<Queued>, now: DateTime<Utc>) {
        let before = pending.len();
        pending.retain(|queued| now - queued.delivered_at <= self.max_age);
        let expired = before - pending.len();
        if expired > 0 {
            debug!(expired, "dropping stale reminders");
        }
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<Queued>> {
        self.pending.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            error!("notification feed lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl NotificationSink for NotificationFeed {
    fn deliver(&self, intent: NotificationIntent) {
        self.deliver_at(intent, Utc::now());
    }
}
