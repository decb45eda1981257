//! Console entry point.

use anyhow::Context;
use clap::Parser;

use clubhouse_console::{AppConfig, ClubApp, ConsoleArgs, Shell};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(ConsoleArgs::parse());
    clubhouse_observability::init(config.log_format);

    tracing::info!(db = %config.db_path.display(), "starting clubhouse console");

    let app = ClubApp::open(&config);
    let stdin = std::io::stdin();
    Shell::new(app, stdin.lock(), std::io::stdout())
        .run()
        .context("console session failed")?;

    tracing::info!("clubhouse console stopped");
    Ok(())
}
