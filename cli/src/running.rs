use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use hard75_core::model::running::format_elapsed;
use hard75_core::{spawn_ticker, LocationFix, RunEvent, RunUpdate, RunningService, RunningSession};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use tracing::warn;

use crate::Repo;

#[derive(clap::Subcommand)]
pub enum RunAction {
    /// List recorded runs
    List,
    /// Record a run from `lat,lon` lines on stdin; ends at EOF
    Live,
    /// Record a run from a JSON file of timestamped fixes
    Replay { path: PathBuf },
}

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Distance (mi)")]
    distance: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Done")]
    completed: &'static str,
}

pub fn run(repo: Repo, action: RunAction) -> Result<()> {
    let mut service = RunningService::load(repo);

    match action {
        RunAction::List => print_sessions(service.sessions(), service.total_miles()),
        RunAction::Live => {
            let (mut seconds, mut miles) = (0u64, 0.0f64);
            service.subscribe(move |update| {
                match update {
                    RunUpdate::Elapsed { seconds: s } => seconds = *s,
                    RunUpdate::Distance { miles: m } => miles = *m,
                    _ => return,
                }
                eprint!("\rTime: {}   Distance: {:.2} miles ", format_elapsed(seconds), miles);
                let _ = io::stderr().flush();
            });
            let (tx, rx) = mpsc::channel();
            spawn_ticker(tx.clone(), Duration::from_secs(1));
            thread::spawn(move || read_stdin_fixes(tx));
            eprintln!("Run started. Send `lat,lon` lines, Ctrl-D to finish.");
            let session = service.drive(rx);
            eprintln!();
            print_recorded(&session);
        }
        RunAction::Replay { path } => {
            let data = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let fixes: Vec<LocationFix> =
                serde_json::from_str(&data).with_context(|| format!("parsing fixes in {}", path.display()))?;
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || replay_fixes(fixes, tx));
            let session = service.drive(rx);
            print_recorded(&session);
        }
    }
    Ok(())
}

/// Feeds fixes in order with one tick per whole second between them.
fn replay_fixes(fixes: Vec<LocationFix>, events: Sender<RunEvent>) {
    let Some(start) = fixes.first().map(|f| f.timestamp) else {
        let _ = events.send(RunEvent::LocationUnavailable("replay file has no fixes".into()));
        let _ = events.send(RunEvent::End);
        return;
    };

    let mut ticks_sent: i64 = 0;
    for fix in fixes {
        let due = (fix.timestamp - start).num_seconds();
        while ticks_sent < due {
            if events.send(RunEvent::Tick).is_err() {
                return;
            }
            ticks_sent += 1;
        }
        if events.send(RunEvent::Fix(fix)).is_err() {
            return;
        }
    }
    let _ = events.send(RunEvent::End);
}

fn read_stdin_fixes(events: Sender<RunEvent>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                let _ = events.send(RunEvent::LocationUnavailable(e.to_string()));
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_coordinate(line) {
            Some((lat, lon)) => {
                if events.send(RunEvent::Fix(LocationFix::new(lat, lon, Utc::now()))).is_err() {
                    return;
                }
            }
            None => warn!(line, "ignoring line that is not `lat,lon`"),
        }
    }
    let _ = events.send(RunEvent::End);
}

fn parse_coordinate(line: &str) -> Option<(f64, f64)> {
    let (lat, lon) = line.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}

fn print_recorded(session: &RunningSession) {
    println!(
        "Day {} - Time: {}   Distance: {:.2} miles",
        session.day,
        session.formatted_time(),
        session.distance
    );
}

fn print_sessions(sessions: &[RunningSession], total_miles: f64) {
    if sessions.is_empty() {
        println!("No runs recorded yet.");
        return;
    }
    let rows: Vec<SessionRow> = sessions
        .iter()
        .map(|s| SessionRow {
            day: s.day,
            time: s.formatted_time(),
            distance: format!("{:.2}", s.distance),
            points: s.route.len(),
            completed: if s.completed { "✔" } else { "☐" },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("Total: {:.2} miles over {} run(s)", total_miles, sessions.len());
}
