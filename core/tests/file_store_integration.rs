use std::fs;

use chrono::{Duration, Utc};
use hard75_core::repository::store::{NUTRITION_KEY, WORKOUT_KEY};
use hard75_core::{
    AppService, BlobStore, BudgetField, BudgetService, ChecklistTracker, FileBlobStore, LocationFix,
    MonthsToSurvive, RunningService, StoreRepository, TrackerKind,
};
use tempfile::TempDir;

fn repo(dir: &TempDir) -> StoreRepository<FileBlobStore> {
    StoreRepository::new(FileBlobStore::new(Some(dir.path().to_path_buf())).unwrap())
}

#[test]
fn checklist_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut workouts = ChecklistTracker::load(repo(&dir), TrackerKind::Workout);
    workouts.toggle(0, 0).unwrap();
    workouts.remove_item(1, 5).unwrap();

    let reloaded = ChecklistTracker::load(repo(&dir), TrackerKind::Workout);
    assert_eq!(reloaded.period(), workouts.period());
    assert_eq!(reloaded.period().groups()[1].len(), 5);
    assert!(dir.path().join(format!("{}.json", WORKOUT_KEY)).exists());
}

#[test]
fn corrupt_file_falls_back_to_default_week() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{}.json", NUTRITION_KEY)), "garbage").unwrap();

    let meals = ChecklistTracker::load(repo(&dir), TrackerKind::Nutrition);
    assert_eq!(meals.period().groups().len(), 7);
    assert_eq!(meals.period().item_count(), 21);
    assert_eq!(meals.period().completed_count(), 0);
}

#[test]
fn full_week_cycle_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut meals = ChecklistTracker::load(repo(&dir), TrackerKind::Nutrition);
    let shape: Vec<usize> = meals.period().groups().iter().map(|g| g.len()).collect();
    for (group, len) in shape.into_iter().enumerate() {
        for item in 0..len {
            meals.toggle(group, item).unwrap();
        }
    }

    let reloaded = ChecklistTracker::load(repo(&dir), TrackerKind::Nutrition);
    assert_eq!(reloaded.period().completed_count(), 0);
}

#[test]
fn missing_file_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = FileBlobStore::new(Some(dir.path().to_path_buf())).unwrap();
    assert!(store.get("nothingHere").unwrap().is_none());
    store.put("raw", b"[1,2]").unwrap();
    assert_eq!(store.get("raw").unwrap(), Some(b"[1,2]".to_vec()));
}

#[test]
fn run_budget_and_day_counter_share_one_directory() {
    let dir = TempDir::new().unwrap();

    let mut runs = RunningService::load(repo(&dir));
    runs.start_session();
    let t0 = Utc::now();
    runs.record_fix(LocationFix::new(0.0, 0.0, t0));
    runs.record_fix(LocationFix::new(0.0, 0.001, t0 + Duration::seconds(2)));
    runs.record_fix(LocationFix::new(0.0, 0.002, t0 + Duration::seconds(4)));
    let session = runs.end_session().unwrap();
    assert_eq!(session.day, 1);

    let mut budget = BudgetService::load(repo(&dir));
    budget.update(BudgetField::SavingsAmount, 1000.0).unwrap();
    budget.update(BudgetField::DebitAccountAmount, 500.0).unwrap();
    budget.update(BudgetField::CreditAmount, 200.0).unwrap();
    budget.update(BudgetField::GrocerySpending, 300.0).unwrap();
    budget.save().unwrap();

    let mut app = AppService::load(repo(&dir));
    app.start_at("casey", Utc::now() - Duration::days(10)).unwrap();

    let runs = RunningService::load(repo(&dir));
    assert_eq!(runs.sessions().len(), 1);
    assert_eq!(runs.sessions()[0].route.len(), 3);

    let budget = BudgetService::load(repo(&dir));
    assert_eq!(budget.summary().months_to_survive, MonthsToSurvive::Months(4.3));

    let app = AppService::load(repo(&dir));
    assert_eq!(app.username(), "casey");
    assert_eq!(app.day_counter(), 11);
}
