//! Configuration constants.
//!
//! Defaults for resolver behavior and the configuration file location.

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Attempts per DNS query before the query counts as failed
pub const DNS_ATTEMPTS: usize = 2;

/// Configuration file location, relative to the user's home directory.
pub const CONFIG_FILE_RELATIVE_PATH: &str = ".config/dns/dns.json";

/// Separator for subdomain labels passed on the command line.
pub const SUBDOMAIN_SEPARATOR: char = ',';
