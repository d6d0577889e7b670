//! Arena bot binary.
//!
//! Reads the judge protocol from stdin and answers on stdout, one action
//! line and one production line per turn. Diagnostics go to stderr.

use std::io;

use anyhow::Result;
use royale_client::{ClientConfig, logging, run_session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        first_garrison = %config.strategy().first_garrison,
        high_water = config.runtime.economy.high_water,
        low_water = config.runtime.economy.low_water,
        "Starting royale bot"
    );

    let turns = run_session(config.runtime, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(turns, "Game over");
    Ok(())
}
