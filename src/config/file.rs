//! Configuration file loading.
//!
//! The file is optional. A missing, unreadable or malformed file yields an
//! empty configuration and is only mentioned at debug level.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use super::constants::CONFIG_FILE_RELATIVE_PATH;

/// Contents of the JSON configuration file.
///
/// ```json
/// { "hosts": ["www", "mail"], "recursive": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Subdomain labels to look up under the root domain.
    pub hosts: Vec<String>,
    /// Follow CNAME and MX targets one level deep.
    pub recursive: bool,
}

/// `$HOME/.config/dns/dns.json`, or `None` if the home directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_RELATIVE_PATH))
}

/// Loads the configuration file at `path`, falling back to an empty
/// configuration on any error.
pub fn load_file_config(path: &Path) -> FileConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Not using config file {}: {e}", path.display());
            return FileConfig::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(config) => {
            debug!("Loaded config file {}", path.display());
            config
        }
        Err(e) => {
            debug!("Ignoring malformed config file {}: {e}", path.display());
            FileConfig::default()
        }
    }
}
