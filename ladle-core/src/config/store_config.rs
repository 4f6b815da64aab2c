use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistence adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON collection file.
    pub path: PathBuf,
    /// Pretty-print the JSON on save.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: defaults::default_store_path(),
            pretty: defaults::DEFAULT_PRETTY,
        }
    }
}
