use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use tracing::warn;

use splat_tracker::analysis::AggregationEngine;
use splat_tracker::api::{schedule_lines, ScheduleClient};
use splat_tracker::catalog::{StaticCatalog, WeaponCatalog};
use splat_tracker::config::Config;
use splat_tracker::display::output::{
    display_error, display_info, display_recorded, display_schedule, display_stats_report,
    display_success, display_weapons,
};
use splat_tracker::error::AppError;
use splat_tracker::logging::init_tracing;
use splat_tracker::records::{FileBackend, RecordStore};

/// Rotations shown per battle mode.
const SCHEDULE_SLOTS: usize = 2;

#[derive(Parser, Debug)]
#[command(name = "splat-tracker")]
#[command(about = "Splatoon 3 schedule and personal win rate tracker", long_about = None)]
struct Args {
    /// Number of entries per ranking table (default: 5, or SPLAT_TOP_N)
    #[arg(short, long, global = true)]
    top_n: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current X Battle and Anarchy Open rotations
    Schedule,
    /// Show win rates by weapon, sub weapon and special
    Stats,
    /// Record a win with the given weapon
    Win {
        /// Weapon display name, exactly as listed by `weapons`
        weapon: String,
    },
    /// Record a loss with the given weapon
    Lose {
        /// Weapon display name, exactly as listed by `weapons`
        weapon: String,
    },
    /// List the weapon names the tracker accepts
    Weapons,
    /// Delete every recorded match
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let top_n = match args.top_n {
        Some(0) => {
            return Err(AppError::ConfigError("--top-n must be at least 1".to_string()).into())
        }
        Some(n) => n,
        None => config.top_n,
    };

    let catalog = load_catalog(&config)?;
    let engine = AggregationEngine::new(top_n);
    let mut store = RecordStore::new(FileBackend::new(&config.data_dir));

    match args.command {
        None => {
            show_schedule(&config);
            display_stats_report(&engine.compute(&store.load(), &catalog));
        }
        Some(Command::Schedule) => show_schedule(&config),
        Some(Command::Stats) => {
            display_stats_report(&engine.compute(&store.load(), &catalog));
        }
        Some(Command::Win { weapon }) => {
            record(&mut store, &catalog, &engine, &weapon, true)?;
        }
        Some(Command::Lose { weapon }) => {
            record(&mut store, &catalog, &engine, &weapon, false)?;
        }
        Some(Command::Weapons) => display_weapons(&catalog.display_names()),
        Some(Command::Clear { yes }) => {
            let cleared = store
                .clear(|| yes || confirm("Delete all recorded matches? This cannot be undone."))
                .context("failed to clear match records")?;
            if cleared {
                display_success("All match records deleted");
            } else {
                display_info("Nothing deleted");
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> anyhow::Result<StaticCatalog> {
    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::load(path, &config.locale)
            .with_context(|| format!("failed to load weapon catalog {}", path.display()))?,
        None => StaticCatalog::builtin(&config.locale)?,
    };

    if catalog.is_empty() {
        warn!(locale = %config.locale, "weapon catalog is empty for this locale");
    }
    Ok(catalog)
}

fn record(
    store: &mut RecordStore<FileBackend>,
    catalog: &StaticCatalog,
    engine: &AggregationEngine,
    weapon: &str,
    is_win: bool,
) -> anyhow::Result<()> {
    let record = match store.append(catalog, weapon, is_win) {
        Ok(record) => record,
        // Nothing was written; exit non-zero so scripts can tell.
        Err(e @ AppError::UnknownWeapon(_)) => return Err(e.into()),
        Err(e) => return Err(e).context("failed to save match record"),
    };
    display_recorded(&record);

    display_stats_report(&engine.compute(&store.load(), catalog));
    Ok(())
}

// Schedule failures are shown in place; the stats view still renders.
fn show_schedule(config: &Config) {
    let client = ScheduleClient::new(config.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching schedule");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let fetched = client.fetch();
    spinner.finish_and_clear();

    match fetched {
        Ok(schedule) => {
            let local = chrono::Local;
            display_schedule(
                "🏆 X Battle",
                &schedule_lines(&schedule.x, SCHEDULE_SLOTS, &local),
            );
            display_schedule(
                "⚔️ Anarchy Battle (Open)",
                &schedule_lines(&schedule.bankara_open, SCHEDULE_SLOTS, &local),
            );
        }
        Err(e) => {
            warn!(error = %e, "schedule fetch failed");
            display_error(&format!("Could not load the schedule: {}", e));
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
