pub mod config;
pub mod error;
pub mod geo;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Config;
pub use input::{expand_key, parse_budget_field, parse_day, parse_position};
pub use error::{BudgetError, ChecklistError, DecodeError, ProfileError};
pub use model::budget::{BudgetField, BudgetRecord, MonthsToSurvive};
pub use model::checklist::{Group, Item, Period};
pub use model::profile::UserProfile;
pub use model::running::{Coordinate, LocationFix, RunningSession};
pub use repository::{BlobStore, FileBlobStore, LifestyleRepository, MemoryBlobStore, StoreRepository};
pub use service::app_service::AppService;
pub use service::budget_service::BudgetService;
pub use service::checklist_service::{ChecklistEvent, ChecklistTracker, ToggleOutcome, TrackerKind};
pub use service::dto::{BudgetSummary, WeekProgress};
pub use service::profile_service::{ProfileService, ProfileUpdate};
pub use service::running_service::{spawn_ticker, RunEvent, RunUpdate, RunningService};
pub use time::day_counter;
