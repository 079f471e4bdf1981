//! `DnsResolver` backed by `hickory-resolver`.

use std::borrow::Cow;
use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use super::resolver::{DnsResolver, MailExchange};
use crate::error_handling::{LookupFailure, LookupResult};

/// Resolver adapter over a shared hickory `TokioAsyncResolver`.
///
/// Every name is sent fully qualified, so an answer always belongs to the
/// name that was asked for and never to `<name>.<search domain>`.
///
/// Build one with [`crate::initialization::init_resolver`].
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    pub fn new(inner: TokioAsyncResolver) -> Self {
        Self { inner }
    }

    async fn lookup_rdata(&self, name: &str, record_type: RecordType) -> LookupResult<Vec<RData>> {
        match self.inner.lookup(fully_qualified(name).as_ref(), record_type).await {
            Ok(lookup) => Ok(lookup.iter().cloned().collect()),
            Err(e) => Err(classify_error(name, record_type, e)),
        }
    }
}

/// Appends the root label unless `name` already ends with it.
pub(crate) fn fully_qualified(name: &str) -> Cow<'_, str> {
    if name.ends_with('.') {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name}."))
    }
}

/// Maps a hickory error onto the engine's failure model.
///
/// "no records found" covers both NXDOMAIN and NOERROR/NODATA answers.
/// Everything else is a transport-level failure.
pub(crate) fn classify_error(
    name: &str,
    record_type: RecordType,
    error: ResolveError,
) -> LookupFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => {
            debug!("No {record_type} records for {name}");
            LookupFailure::NoData
        }
        _ => {
            debug!("{record_type} lookup for {name} failed: {error}");
            LookupFailure::Transport(error.to_string())
        }
    }
}

/// Returns `Err(NoData)` when a successful answer carried no usable rdata,
/// e.g. a CNAME query answered only with records of other types.
fn non_empty<T>(values: Vec<T>) -> LookupResult<Vec<T>> {
    if values.is_empty() {
        Err(LookupFailure::NoData)
    } else {
        Ok(values)
    }
}

/// First CNAME target in the answer.
pub(crate) fn canonical_target(rdata: &[RData]) -> LookupResult<String> {
    rdata
        .iter()
        .find_map(|rdata| match rdata {
            RData::CNAME(cname) => Some(cname.to_utf8()),
            _ => None,
        })
        .ok_or(LookupFailure::NoData)
}

pub(crate) fn nameserver_names(rdata: &[RData]) -> LookupResult<Vec<String>> {
    non_empty(
        rdata
            .iter()
            .filter_map(|rdata| match rdata {
                RData::NS(ns) => Some(ns.to_utf8()),
                _ => None,
            })
            .collect(),
    )
}

pub(crate) fn mail_exchanges(rdata: &[RData]) -> LookupResult<Vec<MailExchange>> {
    let mut exchanges: Vec<MailExchange> = rdata
        .iter()
        .filter_map(|rdata| match rdata {
            RData::MX(mx) => Some(MailExchange::new(mx.preference(), mx.exchange().to_utf8())),
            _ => None,
        })
        .collect();
    // Lower preference first; stable so equal preferences keep answer order
    exchanges.sort_by_key(|mx| mx.preference);
    non_empty(exchanges)
}

/// One value per TXT record; its character-strings are concatenated.
pub(crate) fn text_values(rdata: &[RData]) -> LookupResult<Vec<String>> {
    non_empty(
        rdata
            .iter()
            .filter_map(|rdata| match rdata {
                RData::TXT(txt) => Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect(),
    )
}

#[async_trait]
impl DnsResolver for HickoryResolver {
    async fn lookup_cname(&self, name: &str) -> LookupResult<String> {
        canonical_target(&self.lookup_rdata(name, RecordType::CNAME).await?)
    }

    async fn lookup_ns(&self, name: &str) -> LookupResult<Vec<String>> {
        nameserver_names(&self.lookup_rdata(name, RecordType::NS).await?)
    }

    async fn lookup_ip(&self, name: &str) -> LookupResult<Vec<IpAddr>> {
        match self.inner.lookup_ip(fully_qualified(name).as_ref()).await {
            Ok(response) => non_empty(response.iter().collect()),
            Err(e) => Err(classify_error(name, RecordType::A, e)),
        }
    }

    async fn lookup_mx(&self, name: &str) -> LookupResult<Vec<MailExchange>> {
        mail_exchanges(&self.lookup_rdata(name, RecordType::MX).await?)
    }

    async fn lookup_txt(&self, name: &str) -> LookupResult<Vec<String>> {
        text_values(&self.lookup_rdata(name, RecordType::TXT).await?)
    }

    async fn reverse_lookup(&self, address: IpAddr) -> LookupResult<Vec<String>> {
        match self.inner.reverse_lookup(address).await {
            Ok(response) => non_empty(response.iter().map(|name| name.to_utf8()).collect()),
            Err(e) => Err(classify_error(&address.to_string(), RecordType::PTR, e)),
        }
    }
}
