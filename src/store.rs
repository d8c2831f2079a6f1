use crate::errors::StoreError;
use crate::models::{RemovalPreview, RemovedSubject, ScheduleEntry, Snapshot, Subject};
use crate::schedule::{day_index, parse_time, sort_entries};
use crate::storage::{PersistenceGateway, load_data};
use tracing::{debug, info};

/// Single owner of the subjects, the schedule and the goal. Every mutation
/// is applied to a copy that replaces the live records only after the
/// gateway has saved it.
pub struct RecordStore {
    data: Snapshot,
    gateway: Box<dyn PersistenceGateway>,
}

impl RecordStore {
    /// Loads the startup snapshot from `gateway`.
    pub fn open(gateway: impl PersistenceGateway + 'static) -> Self {
        let data = load_data(&gateway);
        let mut store = Self {
            data,
            gateway: Box::new(gateway),
        };
        sort_entries(&mut store.data.schedule);
        store
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.data.subjects
    }

    /// Schedule entries in weekday-then-time order.
    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.data.schedule
    }

    pub fn goal(&self) -> f64 {
        self.data.goal
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    pub fn add_subject(&mut self, name: &str) -> Result<Subject, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("Subject name must not be empty."));
        }
        let lowered = name.to_lowercase();
        if self
            .data
            .subjects
            .iter()
            .any(|subject| subject.name.to_lowercase() == lowered)
        {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let subject = Subject::new(name);
        self.commit(|data| {
            data.subjects.push(subject.clone());
            Ok(())
        })?;
        info!(subject = %subject.name, "subject added");
        Ok(subject)
    }

    /// What `remove_subject(index)` would delete, without deleting it.
    pub fn preview_remove_subject(&self, index: usize) -> Result<RemovalPreview, StoreError> {
        let subject = self.subject_at(index)?;
        let schedule_entries = self
            .data
            .schedule
            .iter()
            .filter(|entry| entry.subject == subject.name)
            .count();
        Ok(RemovalPreview {
            subject: subject.clone(),
            schedule_entries,
        })
    }

    /// Removes the subject and every schedule entry that names it. Callers
    /// confirm beforehand.
    pub fn remove_subject(&mut self, index: usize) -> Result<RemovedSubject, StoreError> {
        self.subject_at(index)?;
        let removed = self.commit(|data| {
            let subject = data.subjects.remove(index);
            let before = data.schedule.len();
            data.schedule.retain(|entry| entry.subject != subject.name);
            Ok(RemovedSubject {
                schedule_entries_removed: before - data.schedule.len(),
                subject,
            })
        })?;
        info!(
            subject = %removed.subject.name,
            schedule_entries = removed.schedule_entries_removed,
            "subject removed"
        );
        Ok(removed)
    }

    pub fn mark_attended(&mut self, index: usize) -> Result<Subject, StoreError> {
        self.update_subject(index, |subject| {
            subject.attended = subject.attended.saturating_add(1);
            subject.total = subject.total.saturating_add(1);
        })
    }

    pub fn mark_missed(&mut self, index: usize) -> Result<Subject, StoreError> {
        self.update_subject(index, |subject| {
            subject.total = subject.total.saturating_add(1);
        })
    }

    /// The subject `reset_subject(index)` would zero out.
    pub fn preview_reset_subject(&self, index: usize) -> Result<Subject, StoreError> {
        self.subject_at(index).cloned()
    }

    pub fn reset_subject(&mut self, index: usize) -> Result<Subject, StoreError> {
        let subject = self.update_subject(index, |subject| {
            subject.attended = 0;
            subject.total = 0;
        })?;
        info!(subject = %subject.name, "attendance reset");
        Ok(subject)
    }

    pub fn add_schedule_entry(
        &mut self,
        subject: &str,
        day: &str,
        time: &str,
    ) -> Result<ScheduleEntry, StoreError> {
        let (subject, day, time) = (subject.trim(), day.trim(), time.trim());
        if subject.is_empty() || day.is_empty() || time.is_empty() {
            return Err(StoreError::validation("Please fill out all fields."));
        }
        if day_index(day).is_none() {
            return Err(StoreError::validation(format!("'{day}' is not a weekday.")));
        }
        if parse_time(time).is_none() {
            return Err(StoreError::validation(format!(
                "'{time}' is not a 24-hour HH:MM time."
            )));
        }
        if !self.data.subjects.iter().any(|s| s.name == subject) {
            return Err(StoreError::validation(format!(
                "Unknown subject '{subject}'. Add the subject first."
            )));
        }

        let entry = ScheduleEntry {
            subject: subject.to_string(),
            day: day.to_string(),
            time: time.to_string(),
        };
        self.commit(|data| {
            data.schedule.push(entry.clone());
            sort_entries(&mut data.schedule);
            Ok(())
        })?;
        info!(subject = %entry.subject, day = %entry.day, time = %entry.time, "class scheduled");
        Ok(entry)
    }

    pub fn remove_schedule_entry(&mut self, index: usize) -> Result<ScheduleEntry, StoreError> {
        if index >= self.data.schedule.len() {
            return Err(StoreError::IndexOutOfRange {
                kind: "schedule entry",
                index,
            });
        }
        let entry = self.commit(|data| Ok(data.schedule.remove(index)))?;
        info!(subject = %entry.subject, day = %entry.day, time = %entry.time, "class removed from schedule");
        Ok(entry)
    }

    pub fn set_goal(&mut self, value: f64) -> Result<f64, StoreError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(StoreError::validation(
                "Goal must be a percentage between 0 and 100.",
            ));
        }
        self.commit(|data| {
            data.goal = value;
            Ok(value)
        })?;
        info!(goal = value, "attendance goal updated");
        Ok(value)
    }

    fn subject_at(&self, index: usize) -> Result<&Subject, StoreError> {
        self.data
            .subjects
            .get(index)
            .ok_or(StoreError::IndexOutOfRange {
                kind: "subject",
                index,
            })
    }

    fn update_subject(
        &mut self,
        index: usize,
        apply: impl FnOnce(&mut Subject),
    ) -> Result<Subject, StoreError> {
        self.subject_at(index)?;
        self.commit(|data| {
            let subject = &mut data.subjects[index];
            apply(subject);
            Ok(subject.clone())
        })
    }

    fn commit<T>(
        &mut self,
        apply: impl FnOnce(&mut Snapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.data.clone();
        let output = apply(&mut next)?;
        self.gateway.save(&next)?;
        self.data = next;
        debug!(
            subjects = self.data.subjects.len(),
            schedule = self.data.schedule.len(),
            "records saved"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryGateway;

    fn store() -> RecordStore {
        RecordStore::open(MemoryGateway::new())
    }

    #[test]
    fn duplicate_names_are_case_insensitive() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        let err = store.add_subject("math").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName(ref name) if name == "math"));
        assert_eq!(store.subjects().len(), 1);
    }

    #[test]
    fn blank_subject_name_is_rejected() {
        let mut store = store();
        assert!(matches!(
            store.add_subject("   "),
            Err(StoreError::Validation(_))
        ));
        let added = store.add_subject("  Physics ").unwrap();
        assert_eq!(added.name, "Physics");
    }

    #[test]
    fn attended_then_missed_is_half() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        store.mark_attended(0).unwrap();
        let subject = store.mark_missed(0).unwrap();
        assert_eq!((subject.attended, subject.total), (1, 2));
        assert_eq!(subject.percentage(), 50.0);
    }

    #[test]
    fn out_of_range_index_leaves_store_untouched() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        let before = store.snapshot().clone();

        assert!(matches!(
            store.mark_attended(1),
            Err(StoreError::IndexOutOfRange { kind: "subject", index: 1 })
        ));
        assert!(store.mark_missed(7).is_err());
        assert!(store.reset_subject(2).is_err());
        assert!(store.remove_subject(1).is_err());
        assert!(store.remove_schedule_entry(0).is_err());
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn reset_zeroes_both_counters() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        store.mark_attended(0).unwrap();
        store.mark_missed(0).unwrap();
        assert_eq!(store.preview_reset_subject(0).unwrap().total, 2);

        let subject = store.reset_subject(0).unwrap();
        assert_eq!((subject.attended, subject.total), (0, 0));
    }

    #[test]
    fn schedule_entry_requires_every_field() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        for (subject, day, time) in [
            ("", "Monday", "09:00"),
            ("Math", "", "09:00"),
            ("Math", "Monday", ""),
        ] {
            let err = store.add_schedule_entry(subject, day, time).unwrap_err();
            assert_eq!(err.to_string(), "Please fill out all fields.");
        }
        assert!(store.schedule().is_empty());
    }

    #[test]
    fn schedule_entry_rejects_bad_day_time_and_subject() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        assert!(store.add_schedule_entry("Math", "Funday", "09:00").is_err());
        assert!(store.add_schedule_entry("Math", "Monday", "9am").is_err());
        assert!(store.add_schedule_entry("Art", "Monday", "09:00").is_err());
        assert!(store.schedule().is_empty());
    }

    #[test]
    fn schedule_stays_sorted() {
        let mut store = store();
        store.add_subject("Math").unwrap();
        store.add_schedule_entry("Math", "Wednesday", "09:00").unwrap();
        store.add_schedule_entry("Math", "Monday", "14:00").unwrap();
        store.add_schedule_entry("Math", "Monday", "08:00").unwrap();

        let slots: Vec<(&str, &str)> = store
            .schedule()
            .iter()
            .map(|e| (e.day.as_str(), e.time.as_str()))
            .collect();
        assert_eq!(
            slots,
            vec![("Monday", "08:00"), ("Monday", "14:00"), ("Wednesday", "09:00")]
        );

        let removed = store.remove_schedule_entry(1).unwrap();
        assert_eq!(removed.time, "14:00");
        assert_eq!(store.schedule().len(), 2);
    }

    #[test]
    fn goal_must_be_a_percentage() {
        let mut store = store();
        assert_eq!(store.goal(), 75.0);
        assert!(store.set_goal(101.0).is_err());
        assert!(store.set_goal(-1.0).is_err());
        assert!(store.set_goal(f64::NAN).is_err());
        assert_eq!(store.set_goal(80.0).unwrap(), 80.0);
        assert_eq!(store.goal(), 80.0);
    }
}
