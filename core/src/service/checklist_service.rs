use anyhow::Result;
use tracing::{debug, info, warn};

use crate::error::{ChecklistError, DecodeError};
use crate::model::checklist::{Item, Period};
use crate::model::{nutrition, workout};
use crate::repository::LifestyleRepository;
use crate::service::events::Subscribers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerKind {
    Nutrition,
    Workout,
}

impl TrackerKind {
    pub fn label(self) -> &'static str {
        match self {
            TrackerKind::Nutrition => "nutrition",
            TrackerKind::Workout => "workout",
        }
    }

    pub fn default_week(self) -> Period {
        match self {
            TrackerKind::Nutrition => nutrition::default_week(),
            TrackerKind::Workout => workout::default_week(),
        }
    }

    fn load<R: LifestyleRepository>(self, repo: &R) -> Result<Period, DecodeError> {
        match self {
            TrackerKind::Nutrition => repo.load_nutrition(),
            TrackerKind::Workout => repo.load_workouts(),
        }
    }

    fn save<R: LifestyleRepository>(self, repo: &R, week: &Period) -> Result<()> {
        match self {
            TrackerKind::Nutrition => repo.save_nutrition(week),
            TrackerKind::Workout => repo.save_workouts(week),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistEvent {
    Toggled { group: usize, item: usize, is_complete: bool },
    GroupReset { group: usize },
    /// `automatic` is set when finishing the last item wiped the week.
    PeriodReset { automatic: bool },
    ItemRemoved { group: usize, item: usize, name: String },
    ItemRenamed { group: usize, item: usize },
    SetsChanged { group: usize, item: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The item's flag right after the flip.
    pub is_complete: bool,
    /// The flip completed the week, which was reset in the same call.
    pub period_reset: bool,
}

/// Weekly checklist shared by the meal plan and the workout split.
///
/// A week is never stored fully complete: the toggle that completes the last
/// open item resets the whole week before anything is written.
pub struct ChecklistTracker<R: LifestyleRepository> {
    repo: R,
    kind: TrackerKind,
    period: Period,
    subscribers: Subscribers<ChecklistEvent>,
}

impl<R: LifestyleRepository> ChecklistTracker<R> {
    /// Loads the stored week, or the built-in one if nothing usable is stored.
    pub fn load(repo: R, kind: TrackerKind) -> Self {
        let period = kind.load(&repo).unwrap_or_else(|e| {
            match e {
                DecodeError::Missing { .. } => debug!(tracker = kind.label(), "no saved week, using defaults"),
                e => warn!(tracker = kind.label(), error = %e, "saved week unreadable, using defaults"),
            }
            kind.default_week()
        });
        Self::with_period(repo, kind, period)
    }

    pub fn with_period(repo: R, kind: TrackerKind, period: Period) -> Self {
        Self {
            repo,
            kind,
            period,
            subscribers: Subscribers::new(),
        }
    }

    pub fn kind(&self) -> TrackerKind {
        self.kind
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ChecklistEvent) + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    /// Flips one item and persists the week.
    ///
    /// If the flip completes the week, the week is reset before it is saved.
    pub fn toggle(&mut self, group: usize, item: usize) -> Result<ToggleOutcome, ChecklistError> {
        let is_complete = self.period.toggle(group, item)?;
        debug!(tracker = self.kind.label(), group, item, is_complete, "toggled item");
        self.subscribers.publish(&ChecklistEvent::Toggled { group, item, is_complete });

        let period_reset = self.period.is_complete();
        if period_reset {
            info!(tracker = self.kind.label(), "week complete, starting over");
            self.period.reset();
            self.subscribers.publish(&ChecklistEvent::PeriodReset { automatic: true });
        }

        self.persist();
        Ok(ToggleOutcome { is_complete, period_reset })
    }

    pub fn is_group_complete(&self, group: usize) -> Result<bool, ChecklistError> {
        Ok(self.period.group(group)?.is_complete())
    }

    pub fn is_period_complete(&self) -> bool {
        self.period.is_complete()
    }

    /// Clears one day. Not persisted until [`save`](Self::save).
    pub fn reset_group(&mut self, group: usize) -> Result<(), ChecklistError> {
        self.period.group_mut(group)?.reset();
        self.subscribers.publish(&ChecklistEvent::GroupReset { group });
        Ok(())
    }

    /// Clears the whole week. Not persisted until [`save`](Self::save).
    pub fn reset_period(&mut self) {
        self.period.reset();
        self.subscribers.publish(&ChecklistEvent::PeriodReset { automatic: false });
    }

    /// Deletes a workout; the ones after it move up. Persists.
    pub fn remove_item(&mut self, group: usize, item: usize) -> Result<Item, ChecklistError> {
        if self.kind != TrackerKind::Workout {
            return Err(ChecklistError::RemovalNotSupported);
        }
        let removed = self
            .period
            .group_mut(group)?
            .remove(item)
            .ok_or(ChecklistError::IndexOutOfRange { group, item: Some(item) })?;

        self.subscribers.publish(&ChecklistEvent::ItemRemoved {
            group,
            item,
            name: removed.name.clone(),
        });
        self.persist();
        Ok(removed)
    }

    pub fn rename_item(&mut self, group: usize, item: usize, name: impl Into<String>) -> Result<(), ChecklistError> {
        self.period.item_mut(group, item)?.name = name.into();
        self.subscribers.publish(&ChecklistEvent::ItemRenamed { group, item });
        self.persist();
        Ok(())
    }

    pub fn set_item_sets(&mut self, group: usize, item: usize, sets: impl Into<String>) -> Result<(), ChecklistError> {
        if self.kind != TrackerKind::Workout {
            return Err(ChecklistError::NotAWorkout);
        }
        self.period.item_mut(group, item)?.sets = Some(sets.into());
        self.subscribers.publish(&ChecklistEvent::SetsChanged { group, item });
        self.persist();
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.kind.save(&self.repo, &self.period)
    }

    // Saves are fire-and-forget: a failed write is logged and the in-memory
    // week stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(tracker = self.kind.label(), error = %e, "failed to save week");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::checklist::Group;
    use crate::repository::{BlobStore, MemoryBlobStore, StoreRepository};
    use crate::repository::store::{NUTRITION_KEY, WORKOUT_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Keeps every write so tests can inspect what hit the disk.
    #[derive(Clone, Default)]
    struct RecordingStore {
        writes: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
    }

    impl BlobStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Ok(self
                .writes
                .borrow()
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()))
        }

        fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
            self.writes.borrow_mut().push((key.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        fn put(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }
    }

    fn small_week() -> Period {
        Period::from_days(std::array::from_fn(|i| {
            Group::new(format!("Day {}", i + 1), vec![Item::new("x"), Item::new("y")])
        }))
    }

    fn tracker(kind: TrackerKind) -> ChecklistTracker<StoreRepository<MemoryBlobStore>> {
        ChecklistTracker::with_period(StoreRepository::new(MemoryBlobStore::new()), kind, small_week())
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let tracker = ChecklistTracker::load(StoreRepository::new(MemoryBlobStore::new()), TrackerKind::Workout);
        assert_eq!(tracker.period().item_count(), 42);

        let store = MemoryBlobStore::new();
        store.put(NUTRITION_KEY, b"[]").unwrap();
        let tracker = ChecklistTracker::load(StoreRepository::new(store), TrackerKind::Nutrition);
        assert_eq!(tracker.period().item_count(), 21);
    }

    #[test]
    fn test_toggle_persists_and_returns_flag() {
        let mut tracker = tracker(TrackerKind::Nutrition);
        let outcome = tracker.toggle(1, 0).unwrap();
        assert_eq!(outcome, ToggleOutcome { is_complete: true, period_reset: false });

        let reloaded = ChecklistTracker::load(tracker.repo.clone(), TrackerKind::Nutrition);
        assert!(reloaded.period().groups()[1].item(0).unwrap().is_complete);

        let outcome = tracker.toggle(1, 0).unwrap();
        assert!(!outcome.is_complete);
    }

    #[test]
    fn test_toggle_bad_index() {
        let mut tracker = tracker(TrackerKind::Workout);
        assert_eq!(
            tracker.toggle(0, 9),
            Err(ChecklistError::IndexOutOfRange { group: 0, item: Some(9) })
        );
        assert!(tracker.is_group_complete(7).is_err());
    }

    #[test]
    fn test_completing_week_resets_in_same_call() {
        let mut tracker = tracker(TrackerKind::Workout);
        // Walk the week back to front to show order doesn't matter.
        let mut last = None;
        for group in (0..7).rev() {
            for item in [1, 0] {
                last = Some(tracker.toggle(group, item).unwrap());
            }
        }

        assert_eq!(last, Some(ToggleOutcome { is_complete: true, period_reset: true }));
        assert!(!tracker.is_period_complete());
        assert_eq!(tracker.period().completed_count(), 0);
        for group in tracker.period().groups() {
            assert!(group.items().all(|i| !i.is_complete));
        }
    }

    #[test]
    fn test_full_week_never_written() {
        let store = RecordingStore::default();
        let repo = StoreRepository::new(store.clone());
        let mut tracker = ChecklistTracker::with_period(repo, TrackerKind::Nutrition, small_week());
        for group in 0..7 {
            for item in 0..2 {
                tracker.toggle(group, item).unwrap();
            }
        }

        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 14);
        for (_, bytes) in writes.iter() {
            let week: Period = serde_json::from_slice(bytes).unwrap();
            assert!(!week.is_complete());
        }
        let last: Period = serde_json::from_slice(&writes[13].1).unwrap();
        assert_eq!(last.completed_count(), 0);
    }

    #[test]
    fn test_reset_group_does_not_persist() {
        let mut tracker = tracker(TrackerKind::Nutrition);
        tracker.toggle(0, 0).unwrap();
        tracker.reset_group(0).unwrap();
        assert!(!tracker.period().groups()[0].item(0).unwrap().is_complete);

        let stored = tracker.repo.load_nutrition().unwrap();
        assert!(stored.groups()[0].item(0).unwrap().is_complete);

        tracker.save().unwrap();
        let stored = tracker.repo.load_nutrition().unwrap();
        assert_eq!(stored.completed_count(), 0);
    }

    #[test]
    fn test_remove_item_only_on_workouts() {
        let mut meals = tracker(TrackerKind::Nutrition);
        assert_eq!(meals.remove_item(0, 0), Err(ChecklistError::RemovalNotSupported));

        let mut workouts = tracker(TrackerKind::Workout);
        let removed = workouts.remove_item(2, 0).unwrap();
        assert_eq!(removed.name, "x");
        let day = &workouts.period().groups()[2];
        assert_eq!(day.len(), 1);
        assert_eq!(day.item(0).unwrap().name, "y");
        assert!(workouts.repo.store().contains(WORKOUT_KEY));
        assert!(workouts.remove_item(2, 1).is_err());
    }

    #[test]
    fn test_removing_last_open_item_does_not_trigger_reset() {
        let mut workouts = tracker(TrackerKind::Workout);
        for group in 0..7 {
            workouts.toggle(group, 0).unwrap();
        }
        for group in 0..6 {
            workouts.toggle(group, 1).unwrap();
        }
        workouts.remove_item(6, 1).unwrap();
        // Removal is not a toggle; the week sits complete until the next toggle.
        assert!(workouts.is_period_complete());
    }

    #[test]
    fn test_rename_and_sets() {
        let mut workouts = tracker(TrackerKind::Workout);
        workouts.rename_item(0, 1, "Push-ups").unwrap();
        workouts.set_item_sets(0, 1, "5 sets of 20").unwrap();
        let item = workouts.period().groups()[0].item(1).unwrap();
        assert_eq!(item.name, "Push-ups");
        assert_eq!(item.sets.as_deref(), Some("5 sets of 20"));

        let mut meals = tracker(TrackerKind::Nutrition);
        assert_eq!(meals.set_item_sets(0, 0, "2"), Err(ChecklistError::NotAWorkout));
    }

    #[test]
    fn test_subscribers_see_auto_reset() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = tracker(TrackerKind::Nutrition);
        let sink = Rc::clone(&events);
        tracker.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        for group in 0..7 {
            for item in 0..2 {
                tracker.toggle(group, item).unwrap();
            }
        }

        let events = events.borrow();
        assert_eq!(events.len(), 15);
        assert_eq!(events[14], ChecklistEvent::PeriodReset { automatic: true });
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut tracker =
            ChecklistTracker::with_period(StoreRepository::new(BrokenStore), TrackerKind::Nutrition, small_week());
        assert!(tracker.toggle(0, 0).unwrap().is_complete);
        assert!(tracker.save().is_err());
    }
}
