//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;

use super::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use super::file::{default_config_path, load_file_config, FileConfig};
use super::lookup::LookupConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per domain
    Text,
    /// Pretty-printed JSON array
    Json,
}

fn parse_domain(raw: &str) -> Result<String, String> {
    let domain = raw.trim();
    if domain.is_empty() {
        return Err("domain must not be empty".to_string());
    }
    Ok(domain.to_string())
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "dns_recon", version, about = "DNS lookup tool")]
pub struct Opt {
    /// Root domain to look up, e.g. example.com
    #[arg(value_parser = parse_domain)]
    pub domain: String,

    /// Config file (default: ~/.config/dns/dns.json)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Subdomain hosts to look up (comma separated), e.g. www,mail,ftp
    #[arg(short = 's', long)]
    pub subdomains: Option<String>,

    /// Also look up CNAME and MX targets (one level)
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Attempts per DNS query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub attempts: usize,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the library configuration, reading the config file and merging
    /// the command-line overrides into it.
    pub fn into_config(self) -> Config {
        let file_config = match self.config.or_else(default_config_path) {
            Some(path) => load_file_config(&path),
            None => {
                debug!("No home directory, running without a config file");
                FileConfig::default()
            }
        };

        Config {
            domain: self.domain,
            lookup: LookupConfig::merge(file_config, self.subdomains.as_deref(), self.recursive),
            timeout_seconds: self.timeout_seconds,
            attempts: self.attempts,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use dns_recon::{Config, LookupConfig};
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     lookup: LookupConfig::new(["www", "mail"], true),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root domain
    pub domain: String,

    /// Subdomain labels and recursion
    pub lookup: LookupConfig,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Attempts per query
    pub attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            lookup: LookupConfig::default(),
            timeout_seconds: DNS_TIMEOUT_SECS,
            attempts: DNS_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_domain_trims() {
        assert_eq!(parse_domain("  example.com "), Ok("example.com".to_string()));
        assert!(parse_domain("   ").is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, DNS_TIMEOUT_SECS);
        assert_eq!(config.attempts, DNS_ATTEMPTS);
        assert!(config.lookup.subdomain_labels().is_empty());
        assert!(!config.lookup.recursive());
    }

    #[test]
    fn test_into_config_merges_file_and_cli() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(br#"{"hosts": ["www"], "recursive": false}"#)
            .expect("Failed to write temp file");

        let opt = Opt::try_parse_from([
            "dns_recon",
            "example.com",
            "--config",
            file.path().to_str().unwrap(),
            "-s",
            "mail,www",
            "-r",
        ])
        .expect("valid arguments");
        let config = opt.into_config();

        assert_eq!(config.domain, "example.com");
        assert_eq!(config.lookup.subdomain_labels(), ["www", "mail"]);
        assert!(config.lookup.recursive());
    }

    #[test]
    fn test_into_config_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("dns.json");
        let opt = Opt::try_parse_from([
            "dns_recon",
            "example.com",
            "-c",
            missing.to_str().unwrap(),
        ])
        .expect("valid arguments");
        let config = opt.into_config();

        assert!(config.lookup.subdomain_labels().is_empty());
        assert!(!config.lookup.recursive());
    }
}
