//! dns_recon library: DNS reconnaissance for a domain
//!
//! This library resolves the CNAME, NS, A/AAAA, MX and TXT records of a root
//! domain, reverse-resolves its addresses, and optionally expands the search to
//! configured subdomains and to the CNAME/MX targets it discovers.
//!
//! # Example
//!
//! ```no_run
//! use dns_recon::initialization::init_resolver;
//! use dns_recon::{run_lookup, Config, LookupConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     lookup: LookupConfig::new(["www", "mail"], true),
//!     ..Default::default()
//! };
//!
//! let resolver = init_resolver(config.timeout_seconds, config.attempts)?;
//! let report = run_lookup(&config, &resolver).await;
//! for domain in &report.domains {
//!     println!("{}: {} records", domain.name, domain.records.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups are issued one at a time,
//! so a current-thread runtime is sufficient.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod models;
pub mod output;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, LookupConfig, Opt, OutputFormat};
pub use dns::{DnsResolver, HickoryResolver};
pub use models::{Record, RecordKind, ResolvedDomain, ReverseEntry};
pub use run::{run_lookup, LookupReport};

// Internal run module (ties configuration, engine and expansion together)
mod run {
    use std::time::Instant;

    use log::{debug, info};

    use crate::config::Config;
    use crate::dns::DnsResolver;
    use crate::error_handling::LookupStats;
    use crate::lookup::{expand, DomainLookup};
    use crate::models::ResolvedDomain;

    /// Results of one lookup run.
    #[derive(Debug)]
    pub struct LookupReport {
        /// Resolved domains in report order (root, subdomains, expansion targets)
        pub domains: Vec<ResolvedDomain>,
        /// Per-query-kind outcome counters
        pub stats: LookupStats,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one lookup for `config.domain` against `resolver`.
    ///
    /// Every run starts with an empty set of seen names. There is no error
    /// path: failed queries only shorten the report, and a root domain that
    /// does not resolve yields an empty report.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dns_recon::initialization::init_resolver;
    /// use dns_recon::{run_lookup, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     domain: "example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let resolver = init_resolver(config.timeout_seconds, config.attempts)?;
    /// let report = run_lookup(&config, &resolver).await;
    /// println!("Resolved {} domains", report.domains.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(config: &Config, resolver: &dyn DnsResolver) -> LookupReport {
        let start = Instant::now();
        info!(
            "Looking up {} ({} subdomain labels, recursive: {})",
            config.domain,
            config.lookup.subdomain_labels().len(),
            config.lookup.recursive()
        );

        let mut engine = DomainLookup::new(resolver);
        let domains = expand(&config.domain, &config.lookup, &mut engine).await;
        let names_queried = engine.seen().len();
        let stats = engine.into_stats();
        let elapsed_seconds = start.elapsed().as_secs_f64();

        info!(
            "Resolved {} of {} queried names in {:.1}s",
            domains.len(),
            names_queried,
            elapsed_seconds
        );
        debug!(
            "Query outcomes (answered/no data/failed): {}",
            stats.summary()
        );

        LookupReport {
            domains,
            stats,
            elapsed_seconds,
        }
    }
}
