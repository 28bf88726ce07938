use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::DecodeError;
use crate::model::budget::BudgetField;
use crate::model::checklist::Period;
use crate::model::profile::UserProfile;
use crate::model::running::RunningSession;
use crate::repository::traits::{BlobStore, LifestyleRepository};

pub const NUTRITION_KEY: &str = "nutritionData";
pub const WORKOUT_KEY: &str = "weekData";
pub const SESSIONS_KEY: &str = "runningSessions";
pub const PROFILE_KEY: &str = "userProfile";
pub const LAUNCHED_ONCE_KEY: &str = "HasLaunchedOnce";
pub const USERNAME_KEY: &str = "Username";
pub const LAUNCH_DATE_KEY: &str = "LaunchDate";

pub fn budget_key(field: BudgetField) -> &'static str {
    match field {
        BudgetField::MonthlyIncome => "monthlyIncome",
        BudgetField::GrocerySpending => "grocerySpending",
        BudgetField::UtilitiesSpending => "utilitiesSpending",
        BudgetField::ActivitiesSpending => "activitiesSpending",
        BudgetField::MonthlySavingsGoal => "monthlySavingsGoal",
        BudgetField::SavingsAmount => "savingsAmount",
        BudgetField::DebitAccountAmount => "debitAccountAmount",
        BudgetField::CreditAmount => "creditAmount",
    }
}

/// [`LifestyleRepository`] over any [`BlobStore`], one JSON document per key.
#[derive(Clone, Debug)]
pub struct StoreRepository<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> StoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, DecodeError> {
        let bytes = self
            .store
            .get(key)
            .map_err(|source| DecodeError::Store { key, source })?
            .ok_or(DecodeError::Missing { key })?;
        debug!(key, len = bytes.len(), "loaded document");
        serde_json::from_slice(&bytes).map_err(|source| DecodeError::Corrupt { key, source })
    }

    fn save<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.put(key, &bytes)?;
        debug!(key, len = bytes.len(), "saved document");
        Ok(())
    }
}

impl<S: BlobStore> LifestyleRepository for StoreRepository<S> {
    fn load_nutrition(&self) -> Result<Period, DecodeError> {
        self.load(NUTRITION_KEY)
    }

    fn save_nutrition(&self, week: &Period) -> Result<()> {
        self.save(NUTRITION_KEY, week)
    }

    fn load_workouts(&self) -> Result<Period, DecodeError> {
        self.load(WORKOUT_KEY)
    }

    fn save_workouts(&self, week: &Period) -> Result<()> {
        self.save(WORKOUT_KEY, week)
    }

    fn load_sessions(&self) -> Result<Vec<RunningSession>, DecodeError> {
        self.load(SESSIONS_KEY)
    }

    fn save_sessions(&self, sessions: &[RunningSession]) -> Result<()> {
        self.save(SESSIONS_KEY, sessions)
    }

    fn load_profile(&self) -> Result<UserProfile, DecodeError> {
        self.load(PROFILE_KEY)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.save(PROFILE_KEY, profile)
    }

    fn load_budget_field(&self, field: BudgetField) -> Result<f64, DecodeError> {
        self.load(budget_key(field))
    }

    fn save_budget_field(&self, field: BudgetField, value: f64) -> Result<()> {
        self.save(budget_key(field), &value)
    }

    fn load_launched_once(&self) -> Result<bool, DecodeError> {
        self.load(LAUNCHED_ONCE_KEY)
    }

    fn save_launched_once(&self, launched: bool) -> Result<()> {
        self.save(LAUNCHED_ONCE_KEY, &launched)
    }

    fn load_username(&self) -> Result<String, DecodeError> {
        self.load(USERNAME_KEY)
    }

    fn save_username(&self, username: &str) -> Result<()> {
        self.save(USERNAME_KEY, username)
    }

    fn load_launch_date(&self) -> Result<DateTime<Utc>, DecodeError> {
        self.load(LAUNCH_DATE_KEY)
    }

    fn save_launch_date(&self, date: DateTime<Utc>) -> Result<()> {
        self.save(LAUNCH_DATE_KEY, &date)
    }
}
