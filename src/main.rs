//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `email_setup_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Fatal error reporting and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;
use structopt::StructOpt;

use email_setup_check::initialization::init_logger_with;
use email_setup_check::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
