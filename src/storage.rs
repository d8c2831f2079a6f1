use crate::errors::StorageError;
use crate::models::Snapshot;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{error, warn};

/// Load-on-start, save-on-mutation access to the persisted records.
pub trait PersistenceGateway: Send + Sync {
    fn load(&self) -> Result<Snapshot, StorageError>;
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Arc<G> {
    fn load(&self) -> Result<Snapshot, StorageError> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        (**self).save(snapshot)
    }
}

/// Keeps the snapshot as one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self) -> Result<Snapshot, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory gateway for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    saved: Mutex<Option<Snapshot>>,
    fail_saves: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: Mutex::new(Some(snapshot)),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Last snapshot handed to `save`, if any.
    pub fn saved(&self) -> Option<Snapshot> {
        self.saved.lock().ok().and_then(|saved| saved.clone())
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Snapshot, StorageError> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("saves disabled").into());
        }
        if let Ok(mut saved) = self.saved.lock() {
            *saved = Some(snapshot.clone());
        }
        Ok(())
    }
}

/// Reads the startup snapshot. A missing file is an empty store; a file that
/// cannot be read or parsed is logged and replaced by an empty store.
pub fn load_data(gateway: &dyn PersistenceGateway) -> Snapshot {
    match gateway.load() {
        Ok(snapshot) => normalize(snapshot),
        Err(err) => {
            error!("failed to load data file: {err}");
            Snapshot::default()
        }
    }
}

fn normalize(mut snapshot: Snapshot) -> Snapshot {
    let mut seen = HashSet::new();
    snapshot.subjects.retain(|subject| {
        let fresh = seen.insert(subject.name.to_lowercase());
        if !fresh {
            warn!(subject = %subject.name, "duplicate subject name, dropping");
        }
        fresh
    });

    let names: HashSet<&str> = snapshot.subjects.iter().map(|s| s.name.as_str()).collect();
    snapshot.schedule.retain(|entry| {
        let known = names.contains(entry.subject.as_str());
        if !known {
            warn!(
                subject = %entry.subject,
                day = %entry.day,
                time = %entry.time,
                "schedule entry for unknown subject, dropping"
            );
        }
        known
    });

    for subject in &mut snapshot.subjects {
        if subject.attended > subject.total {
            warn!(
                subject = %subject.name,
                attended = subject.attended,
                total = subject.total,
                "attended exceeds total, clamping"
            );
            subject.attended = subject.total;
        }
    }

    if !snapshot.goal.is_finite() || !(0.0..=100.0).contains(&snapshot.goal) {
        let clamped = if snapshot.goal.is_finite() {
            snapshot.goal.clamp(0.0, 100.0)
        } else {
            crate::models::DEFAULT_GOAL
        };
        warn!(goal = snapshot.goal, clamped, "stored goal out of range");
        snapshot.goal = clamped;
    }

    snapshot
}
