//! Expansion from a root domain to configured subdomains and alias/mail targets.

use log::{debug, info};

use super::engine::DomainLookup;
use crate::config::LookupConfig;
use crate::models::ResolvedDomain;

/// Resolves `root` and everything the configuration expands it to.
///
/// Order of the result:
/// 1. the root domain (if it does not resolve, nothing else is queried and
///    the result is empty),
/// 2. `<label>.<root>` for each configured label, in configuration order,
/// 3. with `recursive`, the CNAME and MX targets found in 1 and 2, in the
///    order they were encountered.
///
/// Step 3 scans a snapshot taken after step 2, so targets discovered by step
/// 3 are not expanded again. Names already claimed by `engine` are skipped
/// wherever they reappear.
pub async fn expand(
    root: &str,
    config: &LookupConfig,
    engine: &mut DomainLookup<'_>,
) -> Vec<ResolvedDomain> {
    let Some(root_domain) = engine.lookup(root).await else {
        info!("{root} did not resolve, nothing to report");
        return Vec::new();
    };

    let mut domains = vec![root_domain];

    for label in config.subdomain_labels() {
        let name = format!("{label}.{root}");
        if let Some(domain) = engine.lookup(&name).await {
            domains.push(domain);
        }
    }

    if config.recursive() {
        let targets: Vec<String> = domains
            .iter()
            .flat_map(|domain| domain.expansion_targets())
            .map(str::to_owned)
            .collect();
        debug!("Following {} CNAME/MX targets", targets.len());

        for target in targets {
            if let Some(domain) = engine.lookup(&target).await {
                domains.push(domain);
            }
        }
    }

    domains
}
