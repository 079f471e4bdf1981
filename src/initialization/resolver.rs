//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::dns::HickoryResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for all lookups of a run.
///
/// Name servers come from the system configuration (`/etc/resolv.conf` on
/// Unix). If that cannot be read, hickory's default upstreams are used
/// instead.
///
/// Regardless of source:
/// - the local domain and search list are dropped, and `ndots` is 0, so a
///   queried name is never expanded into `<name>.<search domain>`
/// - address lookups return both IPv4 and IPv6 results
/// - `timeout_seconds` and `attempts` bound each query
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the options are
/// unusable (zero attempts).
pub fn init_resolver(
    timeout_seconds: u64,
    attempts: usize,
) -> Result<HickoryResolver, InitializationError> {
    if attempts == 0 {
        return Err(InitializationError::DnsResolverError(
            "at least one attempt per query is required".to_string(),
        ));
    }

    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) => {
            debug!(
                "Using system resolver configuration ({} name servers)",
                config.name_servers().len()
            );
            (config, opts)
        }
        Err(e) => {
            warn!("Could not read system resolver configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = attempts;
    opts.ndots = 0;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    Ok(HickoryResolver::new(TokioAsyncResolver::tokio(
        without_search_domains(&config),
        opts,
    )))
}

/// Keeps only the name servers of `config`.
fn without_search_domains(config: &ResolverConfig) -> ResolverConfig {
    ResolverConfig::from_parts(None, vec![], config.name_servers().to_vec())
}
