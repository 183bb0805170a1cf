//! RustPace - Pace Reference Tables for Runners
//!
//! Main entry point for the command-line application.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustpace::distances::DistanceCatalog;
use rustpace::metrics::{EffortPaceWindow, TimeCalculator};
use rustpace::storage::config::{self, AppConfig};
use rustpace::storage::preferences::keys;
use rustpace::storage::{PreferenceStore, Theme, TomlStore, UserPreferences};
use rustpace::table::{TableAssembler, TableMode};
use rustpace::ui::{render_table, RenderOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pace and split time tables for runners", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pace table (default)
    Table(TableArgs),
    /// List catalog distances
    Distances(DistancesArgs),
    /// Show or reset stored preferences
    Prefs(PrefsArgs),
}

#[derive(Args, Debug, Default)]
struct TableArgs {
    /// Table mode: official, interval or intermediate
    #[arg(short, long)]
    mode: Option<TableMode>,

    /// Race key to split (implies intermediate mode)
    #[arg(short, long)]
    race: Option<String>,

    /// Split interval in meters
    #[arg(long)]
    split: Option<u32>,

    /// Slowest pace to show (m:ss per km)
    #[arg(long, value_parser = parse_pace_arg)]
    slow: Option<i32>,

    /// Fastest pace to show (m:ss per km)
    #[arg(long, value_parser = parse_pace_arg)]
    fast: Option<i32>,

    /// Seconds between pace rows
    #[arg(long)]
    step: Option<i32>,

    /// VMA in km/h
    #[arg(long)]
    vma: Option<f64>,

    /// Shade cells inside the sustainable effort range
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_color")]
    color: bool,

    /// Disable effort shading
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,

    /// Color theme: light or dark
    #[arg(long)]
    theme: Option<Theme>,

    /// TOML file replacing the official distances
    #[arg(long, value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Do not persist the resulting preferences
    #[arg(long, action = ArgAction::SetTrue)]
    no_save: bool,

    /// Plain text output without ANSI escapes
    #[arg(long, action = ArgAction::SetTrue)]
    plain: bool,
}

#[derive(Args, Debug)]
struct DistancesArgs {
    /// List training distances instead of official races
    #[arg(long, action = ArgAction::SetTrue)]
    training: bool,

    /// TOML file replacing the official distances
    #[arg(long, value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PrefsArgs {
    /// Clear every stored preference
    #[arg(long, action = ArgAction::SetTrue)]
    reset: bool,
}

fn parse_pace_arg(s: &str) -> Result<i32, String> {
    let seconds = TimeCalculator::parse_pace(s).map_err(|e| e.to_string())?;
    i32::try_from(seconds).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting RustPace v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("failed to load configuration")?;

    match cli.command.unwrap_or_else(|| Command::Table(TableArgs::default())) {
        Command::Table(args) => handle_table(args, &config),
        Command::Distances(args) => handle_distances(args, &config),
        Command::Prefs(args) => handle_prefs(args, &config),
    }
}

fn open_store(config: &AppConfig) -> Result<TomlStore> {
    let path = TomlStore::default_path(&config.data_dir);
    TomlStore::open(&path).with_context(|| format!("failed to open preferences {}", path.display()))
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Option<DistanceCatalog>> {
    path.map(|p| {
        DistanceCatalog::load(p).with_context(|| format!("failed to load catalog {}", p.display()))
    })
    .transpose()
}

fn handle_table(args: TableArgs, config: &AppConfig) -> Result<()> {
    let mut store = open_store(config)?;
    let mut prefs = if store.get(keys::MODE).is_none() {
        UserPreferences {
            mode: config.table.default_mode,
            ..UserPreferences::load(&store)
        }
    } else {
        UserPreferences::load(&store)
    };
    prefs.split_interval_m = config.table.checked_split(prefs.split_interval_m);

    if let Some(race) = args.race {
        prefs.race_key = Some(race);
        prefs.mode = TableMode::Intermediate;
    }
    if let Some(mode) = args.mode {
        prefs.mode = mode;
    }
    if let Some(split) = args.split {
        let meters = f64::from(split);
        if !config.table.allows_split(meters) {
            bail!(
                "split interval must be one of {:?} meters",
                config.table.split_intervals_m
            );
        }
        prefs.split_interval_m = meters;
    }
    if let Some(slow) = args.slow {
        prefs.pace.max_seconds = slow;
    }
    if let Some(fast) = args.fast {
        prefs.pace.min_seconds = fast;
    }
    if let Some(step) = args.step {
        prefs.pace.interval_seconds = step;
    }
    if let Some(vma) = args.vma {
        if !UserPreferences::validate_vma(vma) {
            bail!("VMA must be between 0 and 30 km/h, got {vma}");
        }
        prefs.vma = vma;
    }
    if args.color {
        prefs.color_enabled = true;
    }
    if args.no_color {
        prefs.color_enabled = false;
    }
    if let Some(theme) = args.theme {
        prefs.theme = theme;
    }

    if !args.no_save {
        prefs.save(&mut store).context("failed to save preferences")?;
    }

    let catalog_path = args.catalog.as_ref().or(config.catalog_path.as_ref());
    let mut assembler = match load_catalog(catalog_path)? {
        Some(catalog) => TableAssembler::with_catalog(catalog),
        None => TableAssembler::new(),
    };

    let request = prefs.to_request();
    let table = assembler.assemble(&request);
    tracing::info!(
        "Assembled {} table: {} rows x {} columns ({:?})",
        table.mode,
        table.rows.len(),
        table.columns.len(),
        table.status
    );

    let options = RenderOptions {
        theme: prefs.theme,
        ansi: config.display.ansi_colors && !args.plain,
        column_width: config.display.column_width,
        vma: Some(prefs.vma),
    };
    println!("{}", render_table(table, &options));

    Ok(())
}

fn handle_distances(args: DistancesArgs, config: &AppConfig) -> Result<()> {
    let custom = load_catalog(args.catalog.as_ref().or(config.catalog_path.as_ref()))?;
    let catalog = match (&custom, args.training) {
        (_, true) => DistanceCatalog::training(),
        (Some(custom), false) => custom,
        (None, false) => DistanceCatalog::official(),
    };

    let vma = UserPreferences::load(&open_store(config)?).vma;

    for entry in catalog.all() {
        let mut line = format!("{:<10} {:<10} {:>9} m", entry.key, entry.label, entry.meters);

        if let Some(bounds) = entry.bounds {
            line.push_str(&format!(
                "  {}-{}% VMA",
                bounds.min_soutien, bounds.max_soutien
            ));
            if let Some(window) = EffortPaceWindow::from_bounds(bounds, vma) {
                line.push_str(&format!("  {}/km at {} km/h", window.format_range(), vma));
            }
        }

        println!("{line}");
    }

    Ok(())
}

fn handle_prefs(args: PrefsArgs, config: &AppConfig) -> Result<()> {
    let mut store = open_store(config)?;

    if args.reset {
        store.clear().context("failed to reset preferences")?;
        println!("Preferences reset ({})", store.path().display());
        return Ok(());
    }

    let prefs = UserPreferences::load(&store);
    println!("Preferences ({})", store.path().display());
    println!("  mode            {}", prefs.mode);
    println!(
        "  pace range      {} to {} every {}s",
        TimeCalculator::format_pace(prefs.pace.max_seconds.max(0) as u32),
        TimeCalculator::format_pace(prefs.pace.min_seconds.max(0) as u32),
        prefs.pace.interval_seconds
    );
    println!("  vma             {} km/h", prefs.vma);
    println!("  color mode      {}", if prefs.color_enabled { "on" } else { "off" });
    println!("  theme           {}", prefs.theme);
    println!(
        "  race            {}",
        prefs.race_key.as_deref().unwrap_or("(none)")
    );
    println!("  split interval  {} m", prefs.split_interval_m);

    Ok(())
}
