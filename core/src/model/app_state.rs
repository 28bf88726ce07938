use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub username: String,
    pub has_launched_once: bool,
    /// Set on the first start and never moved afterwards.
    pub launch_date: Option<DateTime<Utc>>,
}
