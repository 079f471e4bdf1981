//! Domain lookup and expansion.
//!
//! This module provides:
//! - [`SeenSet`]: names already claimed during a run
//! - [`DomainLookup`]: queries one name and classifies the answers
//! - [`expand`]: walks from the root domain to subdomains and, optionally,
//!   one level of CNAME/MX targets
//!
//! A fresh [`DomainLookup`] (and therefore a fresh [`SeenSet`]) is created for
//! every run, so runs within one process never see each other's names.

mod engine;
mod expansion;
mod seen;

// Re-export public API
pub use engine::DomainLookup;
pub use expansion::expand;
pub use seen::SeenSet;
