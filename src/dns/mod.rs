//! DNS resolution capability.
//!
//! This module defines the resolver seam used by the lookup engine and its
//! production implementation on top of `hickory-resolver`:
//! - Alias queries (CNAME records)
//! - Nameserver queries (NS records)
//! - Address resolution (A/AAAA records)
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records)
//! - Reverse lookups (PTR records)
//!
//! All operations are async and report "no data" separately from transport
//! failures via [`crate::error_handling::LookupFailure`].

mod hickory;
mod resolver;

// Re-export public API
pub use hickory::HickoryResolver;
pub use resolver::{DnsResolver, MailExchange};
