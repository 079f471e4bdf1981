//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_recon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the report
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dns_recon::initialization::{init_logger_with, init_resolver};
use dns_recon::output::write_report;
use dns_recon::{run_lookup, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables (e.g. RUST_LOG) from .env if present
    let _ = dotenvy::dotenv();

    // Missing domain is a usage error; clap exits before any lookup
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let format = opt.format;
    let config = opt.into_config();

    let resolver = init_resolver(config.timeout_seconds, config.attempts)
        .context("Failed to initialize DNS resolver")?;

    let report = run_lookup(&config, &resolver).await;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_report(&mut stdout, &report.domains, format) {
        eprintln!("dns_recon error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
