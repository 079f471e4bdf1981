//! Record model shared by the lookup engine and the renderers.

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// The record kinds a [`ResolvedDomain`] can carry.
///
/// `A` covers both IPv4 and IPv6 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordKind {
    Cname,
    Ns,
    A,
    Mx,
    Txt,
}

impl RecordKind {
    /// Whether records of this kind name another host that can itself be looked up.
    pub fn is_expandable(self) -> bool {
        matches!(self, RecordKind::Cname | RecordKind::Mx)
    }
}

/// A single typed DNS fact for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    kind: RecordKind,
    value: String,
}

impl Record {
    pub fn new(kind: RecordKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.kind, self.value)
    }
}

/// Hostnames returned by a reverse lookup of one resolved address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseEntry {
    pub address: String,
    /// In resolver order.
    pub hostnames: Vec<String>,
}

impl fmt::Display for ReverseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.address, self.hostnames.join(", "))
    }
}

/// Aggregated records for one domain name.
///
/// Records are kept in query order: CNAME, NS, A, MX, TXT. A CNAME record is
/// always the only record of its domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDomain {
    pub name: String,
    pub records: Vec<Record>,
    #[serde(rename = "reverse")]
    pub reverse_entries: Vec<ReverseEntry>,
}

impl ResolvedDomain {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            reverse_entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The CNAME target, if this domain is an alias.
    pub fn cname(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.kind() == RecordKind::Cname)
            .map(Record::value)
    }

    /// Records of the given kind, in insertion order.
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |record| record.kind() == kind)
    }

    /// Host names this domain points at that are worth a lookup of their own.
    pub(crate) fn expansion_targets(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|record| record.kind().is_expandable())
            .map(Record::value)
    }
}
