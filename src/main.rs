use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker::audit::{AuditLogger, AuditTrail};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::session::Session;
use expense_tracker::tracker::Tracker;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Expense Tracker records income and expenses against a set of \
                  categories, keeps a budget per category and reports spending \
                  against those budgets, all from an interactive menu."
)]
struct Cli {
    /// Settings file (defaults to config.json in the config directory)
    #[arg(short, long, env = "EXPENSE_TRACKER_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load_or_default(&paths.settings_file())?,
    };

    init_logging(&settings, cli.verbose);
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let audit = if settings.audit_log {
        tracing::info!(path = %paths.audit_log().display(), "audit log enabled");
        AuditTrail::with_logger(AuditLogger::new(paths.audit_log()))
    } else {
        AuditTrail::new()
    };
    let tracker = Tracker::new(settings).with_audit_trail(audit);

    let stdin = io::stdin();
    let hide_password = stdin.is_terminal();
    let mut session = Session::new(tracker, stdin.lock(), io::stdout().lock())
        .hide_password(hide_password);

    session.run().context("Session ended unexpectedly")?;

    let (tracker, _) = session.into_parts();
    tracing::debug!(
        transactions = tracker.ledger().len(),
        categories = tracker.categories().len(),
        budgets = tracker.budgets().len(),
        "final state"
    );
    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` before `-v` and the settings level
fn init_logging(settings: &Settings, verbose: u8) {
    let level = match verbose {
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
