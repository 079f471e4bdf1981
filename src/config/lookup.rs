//! The per-run lookup configuration.

use super::constants::SUBDOMAIN_SEPARATOR;
use super::file::FileConfig;

/// Which names to query beyond the root domain.
///
/// Labels are trimmed, empty labels are dropped, and only the first
/// occurrence of a label is kept, so each `<label>.<root>` is queried once and
/// in the order it was first configured. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupConfig {
    subdomain_labels: Vec<String>,
    recursive: bool,
}

impl LookupConfig {
    pub fn new<I, S>(labels: I, recursive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self {
            subdomain_labels: Vec::new(),
            recursive,
        };
        config.extend_labels(labels);
        config
    }

    /// Merges the file configuration with command-line overrides.
    ///
    /// File labels come first, then the comma-separated CLI labels. Recursion
    /// is enabled if either source enables it.
    pub fn merge(file: FileConfig, cli_subdomains: Option<&str>, cli_recursive: bool) -> Self {
        let mut config = Self::new(file.hosts, file.recursive || cli_recursive);
        if let Some(list) = cli_subdomains {
            config.extend_labels(list.split(SUBDOMAIN_SEPARATOR));
        }
        config
    }

    pub fn subdomain_labels(&self) -> &[String] {
        &self.subdomain_labels
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    fn extend_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || self.subdomain_labels.iter().any(|l| l == label) {
                continue;
            }
            self.subdomain_labels.push(label.to_owned());
        }
    }
}
