use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::DecodeError;
use crate::model::app_state::AppState;
use crate::repository::LifestyleRepository;
use crate::time::{day_counter, progress_ratio};

/// First-launch bookkeeping and the challenge day counter.
pub struct AppService<R: LifestyleRepository> {
    repo: R,
    state: AppState,
}

fn or_default<T: Default>(loaded: Result<T, DecodeError>) -> T {
    loaded.unwrap_or_else(|e| {
        if !matches!(e, DecodeError::Missing { .. }) {
            warn!(error = %e, "app state unreadable, using default");
        }
        T::default()
    })
}

impl<R: LifestyleRepository> AppService<R> {
    pub fn load(repo: R) -> Self {
        let has_launched_once = or_default(repo.load_launched_once());
        let username = if has_launched_once {
            or_default(repo.load_username())
        } else {
            String::new()
        };
        let launch_date = repo.load_launch_date().map(Some).unwrap_or_else(|e| {
            if !matches!(e, DecodeError::Missing { .. }) {
                warn!(error = %e, "launch date unreadable");
            }
            None
        });
        Self {
            repo,
            state: AppState { username, has_launched_once, launch_date },
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn username(&self) -> &str {
        &self.state.username
    }

    pub fn has_launched_once(&self) -> bool {
        self.state.has_launched_once
    }

    /// Marks the app as launched and stores the username. The launch date is
    /// only written the first time.
    pub fn start(&mut self, username: impl Into<String>) -> Result<()> {
        self.start_at(username, Utc::now())
    }

    pub fn start_at(&mut self, username: impl Into<String>, now: DateTime<Utc>) -> Result<()> {
        self.state.username = username.into();
        self.state.has_launched_once = true;
        self.repo.save_launched_once(true)?;
        self.repo.save_username(&self.state.username)?;

        if self.state.launch_date.is_none() {
            self.state.launch_date = Some(now);
            self.repo.save_launch_date(now)?;
            info!(username = %self.state.username, "challenge started");
        }
        Ok(())
    }

    pub fn day_counter(&self) -> u32 {
        self.day_counter_at(Utc::now())
    }

    pub fn day_counter_at(&self, now: DateTime<Utc>) -> u32 {
        day_counter(self.state.launch_date, now)
    }

    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.day_counter())
    }
}
