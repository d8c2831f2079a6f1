use crate::notify::NotificationFeed;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared by every handler and the alarm task; the lock serialises all
/// access to the record store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<RecordStore>>,
    pub notifications: NotificationFeed,
}

impl AppState {
    pub fn new(store: RecordStore, notifications: NotificationFeed) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            notifications,
        }
    }
}
