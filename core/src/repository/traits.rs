use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::error::DecodeError;
use crate::model::budget::{BudgetField, BudgetRecord};
use crate::model::checklist::Period;
use crate::model::profile::UserProfile;
use crate::model::running::RunningSession;

/// Raw key-value storage. Keys are short ASCII names, values are bytes.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// One method pair per persisted document. Only implementations know which
/// store key a document lives under.
///
/// Loads report why a value could not be produced; deciding to fall back to
/// a default is the caller's job.
pub trait LifestyleRepository {
    fn load_nutrition(&self) -> Result<Period, DecodeError>;
    fn save_nutrition(&self, week: &Period) -> Result<()>;

    fn load_workouts(&self) -> Result<Period, DecodeError>;
    fn save_workouts(&self, week: &Period) -> Result<()>;

    fn load_sessions(&self) -> Result<Vec<RunningSession>, DecodeError>;
    fn save_sessions(&self, sessions: &[RunningSession]) -> Result<()>;

    fn load_profile(&self) -> Result<UserProfile, DecodeError>;
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;

    fn load_budget_field(&self, field: BudgetField) -> Result<f64, DecodeError>;
    fn save_budget_field(&self, field: BudgetField, value: f64) -> Result<()>;

    fn load_launched_once(&self) -> Result<bool, DecodeError>;
    fn save_launched_once(&self, launched: bool) -> Result<()>;

    fn load_username(&self) -> Result<String, DecodeError>;
    fn save_username(&self, username: &str) -> Result<()>;

    fn load_launch_date(&self) -> Result<DateTime<Utc>, DecodeError>;
    fn save_launch_date(&self, date: DateTime<Utc>) -> Result<()>;

    fn save_budget(&self, budget: &BudgetRecord) -> Result<()> {
        for field in BudgetField::ALL {
            self.save_budget_field(field, budget.get(field))?;
        }
        Ok(())
    }
}
