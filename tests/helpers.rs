// Shared test helpers: an in-memory resolver with scripted answers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use dns_recon::dns::{DnsResolver, MailExchange};
use dns_recon::error_handling::{LookupFailure, LookupResult};

/// Scripted answers for one name.
#[derive(Default, Clone)]
#[allow(dead_code)] // Not every test file sets every field
pub struct Answers {
    pub cname: Option<String>,
    pub ns: Vec<String>,
    pub ip: Vec<IpAddr>,
    pub mx: Vec<(u16, String)>,
    pub txt: Vec<String>,
}

/// A `DnsResolver` that answers from fixed tables and remembers every name
/// it was asked about.
#[derive(Default)]
pub struct StubResolver {
    answers: HashMap<String, Answers>,
    ptr: HashMap<IpAddr, Vec<String>>,
    asked: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut Answers {
        self.answers.entry(name.to_string()).or_default()
    }

    pub fn with_cname(mut self, name: &str, target: &str) -> Self {
        self.entry(name).cname = Some(target.to_string());
        self
    }

    pub fn with_ns(mut self, name: &str, hosts: &[&str]) -> Self {
        self.entry(name).ns = hosts.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn with_a(mut self, name: &str, addresses: &[&str]) -> Self {
        self.entry(name).ip = addresses
            .iter()
            .map(|a| a.parse().expect("valid IP literal"))
            .collect();
        self
    }

    pub fn with_mx(mut self, name: &str, hosts: &[(u16, &str)]) -> Self {
        self.entry(name).mx = hosts.iter().map(|(p, h)| (*p, h.to_string())).collect();
        self
    }

    pub fn with_txt(mut self, name: &str, texts: &[&str]) -> Self {
        self.entry(name).txt = texts.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_ptr(mut self, address: &str, names: &[&str]) -> Self {
        self.ptr.insert(
            address.parse().expect("valid IP literal"),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    /// Number of queries (of any kind) issued for `name`.
    pub fn times_asked(&self, name: &str) -> usize {
        self.asked
            .lock()
            .unwrap()
            .iter()
            .filter(|asked| asked.as_str() == name)
            .count()
    }

    fn lookup<T>(&self, name: &str, pick: impl Fn(&Answers) -> Vec<T>) -> LookupResult<Vec<T>> {
        self.asked.lock().unwrap().push(name.to_string());
        let values = self.answers.get(name).map(pick).unwrap_or_default();
        if values.is_empty() {
            Err(LookupFailure::NoData)
        } else {
            Ok(values)
        }
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn lookup_cname(&self, name: &str) -> LookupResult<String> {
        self.lookup(name, |a| a.cname.clone().into_iter().collect())
            .map(|mut targets| targets.remove(0))
    }

    async fn lookup_ns(&self, name: &str) -> LookupResult<Vec<String>> {
        self.lookup(name, |a| a.ns.clone())
    }

    async fn lookup_ip(&self, name: &str) -> LookupResult<Vec<IpAddr>> {
        self.lookup(name, |a| a.ip.clone())
    }

    async fn lookup_mx(&self, name: &str) -> LookupResult<Vec<MailExchange>> {
        self.lookup(name, |a| {
            a.mx.iter()
                .map(|(pref, host)| MailExchange::new(*pref, host.clone()))
                .collect()
        })
    }

    async fn lookup_txt(&self, name: &str) -> LookupResult<Vec<String>> {
        self.lookup(name, |a| a.txt.clone())
    }

    async fn reverse_lookup(&self, address: IpAddr) -> LookupResult<Vec<String>> {
        self.ptr.get(&address).cloned().ok_or(LookupFailure::NoData)
    }
}
