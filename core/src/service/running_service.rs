use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::error::DecodeError;
use crate::model::running::{LocationFix, RunAccumulator, RunningSession};
use crate::repository::LifestyleRepository;
use crate::service::events::Subscribers;

/// Everything that can happen to a run in progress.
///
/// Location callbacks and the elapsed-time ticker live on other threads and
/// only send these; the thread running [`RunningService::drive`] applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    Fix(LocationFix),
    Tick,
    /// Permission denied or no hardware. The run carries on without fixes.
    LocationUnavailable(String),
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunUpdate {
    Started,
    Distance { miles: f64 },
    Elapsed { seconds: u64 },
    Recorded(RunningSession),
}

pub struct RunningService<R: LifestyleRepository> {
    repo: R,
    sessions: Vec<RunningSession>,
    current: RunAccumulator,
    subscribers: Subscribers<RunUpdate>,
}

impl<R: LifestyleRepository> RunningService<R> {
    pub fn load(repo: R) -> Self {
        let sessions = repo.load_sessions().unwrap_or_else(|e| {
            if !matches!(e, DecodeError::Missing { .. }) {
                warn!(error = %e, "running log unreadable, starting empty");
            }
            Vec::new()
        });
        Self {
            repo,
            sessions,
            current: RunAccumulator::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn sessions(&self) -> &[RunningSession] {
        &self.sessions
    }

    pub fn current(&self) -> &RunAccumulator {
        &self.current
    }

    pub fn total_miles(&self) -> f64 {
        self.sessions.iter().map(|s| s.distance).sum()
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&RunUpdate) + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    pub fn start_session(&mut self) {
        self.current.start();
        debug!(day = self.sessions.len() + 1, "run started");
        self.subscribers.publish(&RunUpdate::Started);
    }

    pub fn record_fix(&mut self, fix: LocationFix) {
        if !self.current.is_active() {
            return;
        }
        self.current.record_fix(fix);
        self.subscribers.publish(&RunUpdate::Distance {
            miles: self.current.distance_miles(),
        });
    }

    pub fn tick(&mut self) {
        if !self.current.is_active() {
            return;
        }
        self.current.tick();
        self.subscribers.publish(&RunUpdate::Elapsed {
            seconds: self.current.elapsed_seconds(),
        });
    }

    /// Finalizes the run into the log and clears in-progress state.
    ///
    /// Returns `None` and leaves the log alone when no run was started. A run
    /// with no fixes is recorded with zero distance.
    pub fn end_session(&mut self) -> Option<RunningSession> {
        if !self.current.is_active() {
            debug!("end requested with no run in progress");
            return None;
        }
        Some(self.record_session())
    }

    fn record_session(&mut self) -> RunningSession {
        let snapshot = self.current.finish();
        let day = u32::try_from(self.sessions.len()).unwrap_or(u32::MAX - 1) + 1;
        let session = RunningSession::new(day, snapshot);
        self.sessions.push(session.clone());

        info!(
            day,
            miles = session.distance,
            seconds = session.time,
            points = session.route.len(),
            "run recorded"
        );
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save running log");
        }
        self.subscribers.publish(&RunUpdate::Recorded(session.clone()));
        session
    }

    /// Runs one session from start to finish off an event channel.
    ///
    /// Ends on [`RunEvent::End`] or when every sender is gone.
    pub fn drive(&mut self, events: Receiver<RunEvent>) -> RunningSession {
        self.start_session();
        for event in events {
            match event {
                RunEvent::Fix(fix) => self.record_fix(fix),
                RunEvent::Tick => self.tick(),
                RunEvent::LocationUnavailable(reason) => {
                    warn!(%reason, "location unavailable, distance will not be tracked");
                }
                RunEvent::End => break,
            }
        }
        self.record_session()
    }

    pub fn save(&self) -> Result<()> {
        self.repo.save_sessions(&self.sessions)
    }
}

/// Sends a [`RunEvent::Tick`] every `interval` until the receiver goes away.
pub fn spawn_ticker(events: Sender<RunEvent>, interval: Duration) -> JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if events.send(RunEvent::Tick).is_err() {
            break;
        }
    })
}
