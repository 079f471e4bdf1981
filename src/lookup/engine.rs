//! Per-domain lookup: issues the record queries for one name and classifies
//! the answers into a [`ResolvedDomain`].

use log::debug;

use super::seen::SeenSet;
use crate::dns::DnsResolver;
use crate::error_handling::{LookupStats, QueryKind};
use crate::models::{Record, RecordKind, ResolvedDomain, ReverseEntry};

/// Strips one trailing root dot from a host name.
fn strip_root_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Looks up individual domains, each at most once.
///
/// Owns the run's [`SeenSet`] and [`LookupStats`]. Queries are awaited one
/// after another.
pub struct DomainLookup<'r> {
    resolver: &'r dyn DnsResolver,
    seen: SeenSet,
    stats: LookupStats,
}

impl<'r> DomainLookup<'r> {
    pub fn new(resolver: &'r dyn DnsResolver) -> Self {
        Self {
            resolver,
            seen: SeenSet::new(),
            stats: LookupStats::new(),
        }
    }

    /// Resolves `name` into a [`ResolvedDomain`].
    ///
    /// Returns `None` if the name was already claimed during this run, or if
    /// no query produced a record. Query failures are never propagated: a
    /// kind that fails contributes nothing and the remaining kinds are still
    /// queried.
    pub async fn lookup(&mut self, name: &str) -> Option<ResolvedDomain> {
        if !self.seen.try_claim(name) {
            debug!("Skipping {name}: already looked up");
            return None;
        }

        let mut domain = ResolvedDomain::new(name);

        // A name with a CNAME cannot hold any other data.
        if let Some(target) = self.canonical_name(name).await {
            domain.records.push(Record::new(RecordKind::Cname, target));
            return Some(domain);
        }

        self.collect_nameservers(&mut domain).await;
        self.collect_addresses(&mut domain).await;
        self.collect_mail_exchangers(&mut domain).await;
        self.collect_text(&mut domain).await;

        if domain.is_empty() {
            debug!("No records found for {name}");
            return None;
        }
        Some(domain)
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn stats(&self) -> &LookupStats {
        &self.stats
    }

    pub fn into_stats(self) -> LookupStats {
        self.stats
    }

    /// CNAME target of `name`, unless the resolver echoes the name itself.
    async fn canonical_name(&self, name: &str) -> Option<String> {
        let result = self.resolver.lookup_cname(name).await;
        self.stats.record(QueryKind::Cname, &result);
        let target = result.ok()?;
        let target = strip_root_dot(&target);
        if target == name {
            return None;
        }
        Some(target.to_owned())
    }

    async fn collect_nameservers(&self, domain: &mut ResolvedDomain) {
        let result = self.resolver.lookup_ns(&domain.name).await;
        self.stats.record(QueryKind::Ns, &result);
        if let Ok(nameservers) = result {
            domain.records.extend(
                nameservers
                    .iter()
                    .map(|ns| Record::new(RecordKind::Ns, strip_root_dot(ns))),
            );
        }
    }

    /// Appends one A record per address and a reverse entry for each address
    /// that has PTR data. Reverse failures are ignored.
    async fn collect_addresses(&self, domain: &mut ResolvedDomain) {
        let result = self.resolver.lookup_ip(&domain.name).await;
        self.stats.record(QueryKind::Address, &result);
        let Ok(addresses) = result else {
            return;
        };

        for address in addresses {
            let literal = address.to_string();
            domain.records.push(Record::new(RecordKind::A, literal.clone()));

            let reverse = self.resolver.reverse_lookup(address).await;
            self.stats.record(QueryKind::Reverse, &reverse);
            if let Ok(hostnames) = reverse {
                domain.reverse_entries.push(ReverseEntry {
                    address: literal,
                    hostnames,
                });
            }
        }
    }

    async fn collect_mail_exchangers(&self, domain: &mut ResolvedDomain) {
        let result = self.resolver.lookup_mx(&domain.name).await;
        self.stats.record(QueryKind::Mx, &result);
        if let Ok(exchanges) = result {
            domain.records.extend(
                exchanges
                    .iter()
                    .map(|mx| Record::new(RecordKind::Mx, strip_root_dot(&mx.exchange))),
            );
        }
    }

    async fn collect_text(&self, domain: &mut ResolvedDomain) {
        let result = self.resolver.lookup_txt(&domain.name).await;
        self.stats.record(QueryKind::Txt, &result);
        if let Ok(texts) = result {
            domain
                .records
                .extend(texts.into_iter().map(|txt| Record::new(RecordKind::Txt, txt)));
        }
    }
}
