//! Error type definitions.
//!
//! This module defines the initialization errors, the per-query failure type
//! returned by resolvers, and the query kinds statistics are keyed on.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Why a single DNS query produced no usable data.
///
/// Both variants mean "no data for this kind" to the lookup engine. They are
/// kept apart so statistics and logs can tell an absent record from a
/// resolver that could not answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// NXDOMAIN, or the name exists without records of the queried type.
    #[error("no records found")]
    NoData,

    /// Timeout, refused query, I/O error or malformed response.
    #[error("resolver failure: {0}")]
    Transport(String),
}

/// Result of a single DNS query.
pub type LookupResult<T> = Result<T, LookupFailure>;

/// The queries issued by the lookup engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum QueryKind {
    Cname,
    Ns,
    Address,
    Mx,
    Txt,
    Reverse,
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Cname => "CNAME",
            QueryKind::Ns => "NS",
            QueryKind::Address => "A/AAAA",
            QueryKind::Mx => "MX",
            QueryKind::Txt => "TXT",
            QueryKind::Reverse => "PTR",
        }
    }
}
