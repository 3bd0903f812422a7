//! Lotto-Face - terminal lottery number generator
//!
//! Draws sets of 1-45 with optional included/excluded numbers, shows them as
//! rows of balls, and remembers the light/dark theme between runs.

mod clipboard;
mod config;
mod core;
mod draw;
mod frontend;
mod store;
mod theme;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::Frontend;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "lotto-face")]
#[command(about = "Terminal lottery number generator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.lotto-face)
    /// Can also be set via LOTTO_FACE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Seed the random generator for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw sets and print them without starting the TUI
    Draw {
        /// Number of sets (default: draw.default_sets from config)
        #[arg(short, long)]
        sets: Option<usize>,

        /// Numbers that must appear, comma-separated
        #[arg(short, long, default_value = "")]
        include: String,

        /// Numbers that must not appear, comma-separated
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Print sets and diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    }
}

fn init_logging() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file in the data directory
    // (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set custom data directory before anything resolves paths
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }

    init_logging()?;
    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    }

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };

    match cli.command {
        Some(Commands::Draw {
            sets,
            include,
            exclude,
            json,
        }) => run_draw(config, cli.seed, sets, &include, &exclude, json),
        None => run_tui(config, cli.seed),
    }
}

/// What a headless draw prints, and whether it failed
#[derive(Debug)]
struct DrawReport {
    stdout: String,
    stderr: String,
    rejected: bool,
}

/// Format the last draw held by `app_core` for the `draw` subcommand.
///
/// JSON mode puts sets and diagnostics on stdout; plain mode prints one set
/// per line on stdout and the diagnostics on stderr.
fn draw_report(app_core: &crate::core::AppCore, json: bool) -> Result<DrawReport> {
    use crate::draw::Severity;

    let rejected = app_core
        .diagnostics()
        .iter()
        .any(|d| d.severity() == Severity::Error);

    if json {
        let diagnostics: Vec<serde_json::Value> = app_core
            .diagnostics()
            .iter()
            .map(|d| {
                serde_json::json!({
                    "severity": match d.severity() {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    },
                    "message": d.to_string(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "sets": app_core.results(),
            "diagnostics": diagnostics,
        });
        return Ok(DrawReport {
            stdout: serde_json::to_string_pretty(&output)?,
            stderr: String::new(),
            rejected,
        });
    }

    let stderr = app_core
        .diagnostics()
        .iter()
        .map(|diag| match diag.severity() {
            Severity::Error => format!("✗ Error: {}", diag),
            Severity::Warning => format!("⚠ Warning: {}", diag),
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(DrawReport {
        stdout: app_core.results_text(),
        stderr,
        rejected,
    })
}

/// Headless draw: print sets to stdout, diagnostics to stderr
fn run_draw(
    config: config::Config,
    seed: Option<u64>,
    sets: Option<usize>,
    include: &str,
    exclude: &str,
    json: bool,
) -> Result<()> {
    let sets = sets.unwrap_or(config.draw.default_sets);
    let mut app_core =
        crate::core::AppCore::new(config, Box::new(store::MemoryStore::new()), make_rng(seed));
    app_core.generate(include, exclude, sets);

    let report = draw_report(&app_core, json)?;
    if !report.stderr.is_empty() {
        eprintln!("{}", report.stderr);
    }
    if !report.stdout.is_empty() {
        println!("{}", report.stdout);
    }

    if report.rejected {
        std::process::exit(1);
    }
    Ok(())
}

/// Run TUI frontend
fn run_tui(config: config::Config, seed: Option<u64>) -> Result<()> {
    use crate::core::AppCore;
    use frontend::TuiFrontend;

    let store = store::FileStore::open(config::Config::state_path()?);
    tracing::info!("Preferences stored in {:?}", store.path());

    let mut app_core = AppCore::new(config, Box::new(store), make_rng(seed));
    let mut frontend = TuiFrontend::new(&app_core.config)?;
    frontend.update_theme_cache(app_core.theme());

    if app_core.config.ui.draw_on_startup {
        app_core.apply(frontend.initial_generate());
    }

    // Main event loop
    while app_core.running {
        for event in frontend.poll_events()? {
            if !event.is_resize() {
                let result = frontend.handle_event(event);
                if result.touches_core() {
                    app_core.apply(result);
                }
            }
            // Typing and resizing change the screen even when the core doesn't
            app_core.needs_render = true;
        }

        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }
    }

    frontend.cleanup()?;
    Ok(())
}
