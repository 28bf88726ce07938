use anyhow::Result;
use hard75_core::{parse_day, parse_position, ChecklistTracker, Period, TrackerKind, WeekProgress};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::Repo;

#[derive(clap::Subcommand)]
pub enum ChecklistAction {
    /// Show the whole week
    Show,
    /// Tick or untick an item (day: 1-7 or name, item: 1-based)
    Toggle { day: String, item: String },
    /// Clear one day, or the whole week when no day is given
    Reset { day: Option<String> },
    /// Delete a workout
    Remove { day: String, item: String },
    /// Rename an item
    Rename {
        day: String,
        item: String,
        #[arg(trailing_var_arg = true, required = true)]
        name: Vec<String>,
    },
    /// Change a workout's sets description
    Sets {
        day: String,
        item: String,
        #[arg(trailing_var_arg = true, required = true)]
        sets: Vec<String>,
    },
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Sets")]
    sets: String,
    #[tabled(rename = "Done")]
    done: &'static str,
}

pub fn run(repo: Repo, kind: TrackerKind, action: Option<ChecklistAction>) -> Result<()> {
    let mut tracker = ChecklistTracker::load(repo, kind);

    match action.unwrap_or(ChecklistAction::Show) {
        ChecklistAction::Show => {}
        ChecklistAction::Toggle { day, item } => {
            let (group, item) = address(tracker.period(), &day, &item)?;
            let outcome = tracker.toggle(group, item)?;
            if outcome.period_reset {
                println!("Every item this week is done! The week starts over.");
            } else {
                let state = if outcome.is_complete { "done" } else { "not done" };
                println!("Marked {}", state);
            }
        }
        ChecklistAction::Reset { day: Some(day) } => {
            let group = parse_day(&day, tracker.period())?;
            tracker.reset_group(group)?;
            tracker.save()?;
        }
        ChecklistAction::Reset { day: None } => {
            tracker.reset_period();
            tracker.save()?;
        }
        ChecklistAction::Remove { day, item } => {
            let (group, item) = address(tracker.period(), &day, &item)?;
            let removed = tracker.remove_item(group, item)?;
            println!("Removed {}", removed.name);
        }
        ChecklistAction::Rename { day, item, name } => {
            let (group, item) = address(tracker.period(), &day, &item)?;
            tracker.rename_item(group, item, name.join(" "))?;
        }
        ChecklistAction::Sets { day, item, sets } => {
            let (group, item) = address(tracker.period(), &day, &item)?;
            tracker.set_item_sets(group, item, sets.join(" "))?;
        }
    }

    print_week(tracker.kind(), tracker.period());
    Ok(())
}

fn address(period: &Period, day: &str, item: &str) -> Result<(usize, usize)> {
    Ok((parse_day(day, period)?, parse_position(item)?))
}

fn print_week(kind: TrackerKind, period: &Period) {
    let mut rows = Vec::new();
    for group in period.groups() {
        let header = format!(
            "{}{}",
            group.label,
            if group.is_complete() { " ✔" } else { "" }
        );
        for (i, item) in group.items().enumerate() {
            rows.push(ItemRow {
                day: if i == 0 { header.clone() } else { String::new() },
                position: i + 1,
                name: item.name.clone(),
                sets: item.sets.clone().unwrap_or_default(),
                done: if item.is_complete { "✔" } else { "☐" },
            });
        }
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    let progress = WeekProgress::from_period(period);
    println!(
        "{} week: {}/{} done ({:.0}%)",
        kind.label(),
        progress.completed,
        progress.total,
        progress.ratio() * 100.0
    );
}
