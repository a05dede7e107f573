//! Registration Intake - headless host.
//!
//! Reads one JSON form snapshot per stdin line, submits each through the
//! intake module, then prints the status element and the table as HTML.

use anyhow::{Context, Result};
use registration_intake::{
    config::{IntakeConfig, LogConfig, LogFormat},
    surface::{HtmlStatus, HtmlTable, MemoryForm},
    feed_snapshots, RegistrationIntake, Surfaces,
};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Load configuration
    let config = match IntakeConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log);

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn run(config: &IntakeConfig) -> Result<()> {
    info!("Starting registration intake host");

    let surfaces = Surfaces::new(MemoryForm::new(), HtmlTable::new(), HtmlStatus::new());
    let mut intake = RegistrationIntake::setup(surfaces, config);

    let summary =
        feed_snapshots(&mut intake, io::stdin().lock()).context("Failed to read stdin")?;

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        skipped = summary.skipped,
        "Input exhausted"
    );

    let surfaces = intake.into_surfaces();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", surfaces.status.to_html()).context("Failed to write output")?;
    writeln!(stdout, "{}", surfaces.table.to_html()).context("Failed to write output")?;

    Ok(())
}
