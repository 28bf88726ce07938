mod checklist;
mod running;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hard75_core::{
    parse_budget_field, AppService, BudgetField, BudgetService, Config, FileBlobStore, ProfileService,
    ProfileUpdate, StoreRepository, TrackerKind,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub type Repo = StoreRepository<FileBlobStore>;

#[derive(Parser)]
#[command(name = "hard75")]
#[command(about = "75 Hard lifestyle tracker: meals, workouts, runs and budget", long_about = None)]
struct Cli {
    /// Data directory (defaults to $HARD75_HOME or ~/.hard75)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// First launch: store your name and start the 75 day clock
    Start { username: String },
    /// Show today's challenge day
    Status,
    /// Meal checklist
    Nutrition {
        #[command(subcommand)]
        action: Option<checklist::ChecklistAction>,
    },
    /// Workout checklist
    Workout {
        #[command(subcommand)]
        action: Option<checklist::ChecklistAction>,
    },
    /// Budget calculator
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },
    /// Running sessions
    Run {
        #[command(subcommand)]
        action: running::RunAction,
    },
    /// Profile details and pictures
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Open the Terminal User Interface
    Tui,
}

#[derive(clap::Subcommand)]
enum BudgetAction {
    /// Show the budget summary
    Show,
    /// Set one field (income, grocery, utilities, activities, goal, savings, debit, credit)
    Set { field: String, value: f64 },
}

#[derive(clap::Subcommand)]
enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        goals: Option<String>,
    },
    /// Use an image file as the profile picture
    Avatar { path: PathBuf },
    /// Add a progress picture
    AddPhoto { path: PathBuf },
    /// Remove a progress picture by its 1-based position
    RemovePhoto { position: usize },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.data_dir)?;
    debug!(data_dir = %config.data_dir.display(), "using data directory");
    let repo = StoreRepository::new(FileBlobStore::new(Some(config.data_dir))?);

    match cli.command {
        Some(Commands::Start { username }) => {
            let mut app = AppService::load(repo);
            app.start(username)?;
            println!("Welcome, {}! Day {} of 75.", app.username(), app.day_counter());
        }
        Some(Commands::Status) => show_status(repo),
        Some(Commands::Nutrition { action }) => checklist::run(repo, TrackerKind::Nutrition, action)?,
        Some(Commands::Workout { action }) => checklist::run(repo, TrackerKind::Workout, action)?,
        Some(Commands::Budget { action }) => budget(repo, action.unwrap_or(BudgetAction::Show))?,
        Some(Commands::Run { action }) => running::run(repo, action)?,
        Some(Commands::Profile { action }) => profile(repo, action.unwrap_or(ProfileAction::Show))?,
        Some(Commands::Tui) | None => tui::run(repo)?,
    }
    Ok(())
}

fn show_status(repo: Repo) {
    let app = AppService::load(repo);
    if !app.has_launched_once() {
        println!("Not started yet. Run `hard75 start <name>` to begin.");
        return;
    }
    let day = app.day_counter();
    let filled = (app.progress_ratio() * 30.0).round() as usize;
    println!("Hello {}", app.username());
    println!("DAY {}", day);
    println!("[{}{}] {}/75", "#".repeat(filled), "-".repeat(30 - filled), day.min(75));
}

fn budget(repo: Repo, action: BudgetAction) -> Result<()> {
    let mut service = BudgetService::load(repo);
    if let BudgetAction::Set { field, value } = action {
        let field = parse_budget_field(&field)?;
        service.update(field, value)?;
        service.save()?;
        println!("{} set to {:.2}", field.label(), value);
    }

    let budget = service.budget();
    let summary = service.summary();
    println!("Inputs");
    for field in BudgetField::ALL {
        println!("  {:<22} {:>12.2}", field.label(), budget.get(field));
    }
    println!();
    println!("Your Budget Summary");
    println!("  {:<38} {:>12.2}", "Monthly Savings Goal:", summary.monthly_savings_goal);
    println!("  {:<38} {:>12.2}", "Total Expenses:", summary.total_expenses);
    println!("  {:<38} {:>11.2}%", "Savings Ratio (%):", summary.savings_ratio);
    println!("  {:<38} {:>12.2}", "Projected Yearly Savings:", summary.projected_yearly_savings);
    println!("  {:<38} {:>12}", "Months to Survive with Current Funds:", summary.months_to_survive.to_string());
    println!("  {:<38} {:>12.2}", "Net Income:", summary.net_income);
    println!();
    for category in summary.expense_categories {
        let bar = if summary.total_expenses > 0.0 {
            "#".repeat((category.amount / summary.total_expenses * 30.0).round() as usize)
        } else {
            String::new()
        };
        println!("  {:<11} {:>10.2} {}", category.category, category.amount, bar);
    }
    Ok(())
}

fn profile(repo: Repo, action: ProfileAction) -> Result<()> {
    let mut service = ProfileService::load(repo);
    match action {
        ProfileAction::Show => {}
        ProfileAction::Set { first_name, last_name, gender, goals } => {
            service.update(ProfileUpdate { first_name, last_name, gender, goals });
            service.save()?;
        }
        ProfileAction::Avatar { path } => {
            let image = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            service.set_profile_picture(image);
            service.save()?;
        }
        ProfileAction::AddPhoto { path } => {
            let image = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            service.add_progress_picture(image);
            service.save()?;
        }
        ProfileAction::RemovePhoto { position } => {
            let index = position
                .checked_sub(1)
                .ok_or_else(|| anyhow!("Positions start at 1"))?;
            let removed = service.remove_progress_picture(index)?;
            service.save()?;
            println!("Removed progress picture {} ({} bytes)", position, removed.len());
        }
    }

    let p = service.profile();
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    println!("Name:     {}", or_dash(&p.display_name()));
    println!("Gender:   {}", or_dash(&p.gender));
    println!("Goals:    {}", or_dash(&p.goals));
    println!(
        "Picture:  {}",
        p.profile_picture
            .as_ref()
            .map(|b| format!("{} bytes", b.len()))
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Progress: {} picture(s)", p.progress_pictures.len());
    Ok(())
}
