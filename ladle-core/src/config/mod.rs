//! Workspace configuration, loadable from TOML.

pub mod defaults;
pub mod store_config;

pub use store_config::StoreConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LadleError, LadleResult};

/// Top-level configuration aggregating per-subsystem sections.
/// Every section has full defaults, so an empty TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LadleConfig {
    pub store: StoreConfig,
}

impl LadleConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(toml_str: &str) -> LadleResult<Self> {
        toml::from_str(toml_str).map_err(|e| LadleError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = LadleConfig::from_toml("").unwrap();
        assert_eq!(config.store.path, defaults::default_store_path());
        assert!(config.store.pretty);
    }

    #[test]
    fn store_section_overrides() {
        let config = LadleConfig::from_toml(
            r#"
            [store]
            path = "/tmp/recipes.json"
            pretty = false
            "#,
        )
        .unwrap();
        assert_eq!(config.store.path.to_str(), Some("/tmp/recipes.json"));
        assert!(!config.store.pretty);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = LadleConfig::from_toml("store = 3").unwrap_err();
        assert!(matches!(err, LadleError::Config(_)));
    }
}
