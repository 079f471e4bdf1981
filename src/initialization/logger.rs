//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (timestamped, coloured by level) and JSON lines for structured logging. Logs are
/// written to stderr so the report on stdout stays machine-readable.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show which queries came back empty or failed
/// dns_recon example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=dns_recon=debug,hickory_resolver=info dns_recon example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    // CLI-provided level takes precedence over RUST_LOG
    builder.filter_level(level);
    // hickory logs every NXDOMAIN and truncated UDP answer; those are expected here
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("dns_recon", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let line = plain_line(
                    &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// `{"ts", "level", "target", "msg"}` as one line of JSON.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

/// `time LEVEL target: msg`, with the level coloured by severity.
fn plain_line(time: &str, level: Level, target: &str, msg: &str) -> String {
    let label = format!("{:<5}", level.as_str());
    let label = match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    };
    format!("{} {} {}: {}", time.dimmed(), label, target.cyan(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            1_700_000_000_000,
            Level::Debug,
            "dns_recon::dns::hickory",
            "No MX records for \"quoted\".example",
        );

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000_i64);
        assert_eq!(value["level"], "DEBUG");
        assert_eq!(value["target"], "dns_recon::dns::hickory");
        assert_eq!(value["msg"], "No MX records for \"quoted\".example");
    }

    #[test]
    fn test_plain_line_layout() {
        colored::control::set_override(false);

        let line = plain_line("12:00:00.000", Level::Warn, "dns_recon", "resolver fallback");

        assert_eq!(line, "12:00:00.000 WARN  dns_recon: resolver fallback");
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = env_logger::try_init();

        // A logger is installed by now, so this must report LoggerError
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
