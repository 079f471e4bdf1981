//! The resolver capability consumed by the lookup engine.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::error_handling::LookupResult;

/// An MX exchange host and its preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchange {
    pub preference: u16,
    pub exchange: String,
}

impl MailExchange {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// DNS queries the lookup engine needs, one method per query kind.
///
/// Every method answers independently: a failure of one kind says nothing
/// about the others. Host names may be returned with or without a trailing
/// dot; callers normalize. Implementations must not retry on their own beyond
/// what the underlying resolver does.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Canonical name `name` is an alias for.
    async fn lookup_cname(&self, name: &str) -> LookupResult<String>;

    /// Authoritative name servers of `name`.
    async fn lookup_ns(&self, name: &str) -> LookupResult<Vec<String>>;

    /// IPv4 and IPv6 addresses of `name`.
    async fn lookup_ip(&self, name: &str) -> LookupResult<Vec<IpAddr>>;

    /// Mail exchangers of `name`, most preferred first.
    async fn lookup_mx(&self, name: &str) -> LookupResult<Vec<MailExchange>>;

    /// Text records of `name`, one string per record.
    async fn lookup_txt(&self, name: &str) -> LookupResult<Vec<String>>;

    /// PTR names for `address`, in resolver order.
    async fn reverse_lookup(&self, address: IpAddr) -> LookupResult<Vec<String>>;
}
