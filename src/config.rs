//! Storage location resolution.
//!
//! The storage document is found, in order, from an explicit path, the
//! `ITEM_CATALOG_STORAGE` environment variable, the path baked in at build
//! time through `ITEM_CATALOG_STORAGE_HINT`, and finally the default
//! `data/items.json` relative to the working directory.

use crate::catalog::ItemCatalog;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default relative path to the item storage document.
pub const DEFAULT_STORAGE_PATH: &str = "data/items.json";
pub const ENV_STORAGE_PATH: &str = "ITEM_CATALOG_STORAGE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageSource {
    Explicit,
    Environment,
    BuildHint,
    Default,
}

impl StorageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageSource::Explicit => "explicit",
            StorageSource::Environment => "environment",
            StorageSource::BuildHint => "build-hint",
            StorageSource::Default => "default",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub storage_path: PathBuf,
    pub source: StorageSource,
}

impl CatalogConfig {
    /// Resolve against the process environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, env_non_empty(ENV_STORAGE_PATH))
    }

    fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path, StorageSource::Explicit);
        }
        if let Some(value) = env_value {
            return Self::new(PathBuf::from(value), StorageSource::Environment);
        }
        if let Some(hint) = option_env!("ITEM_CATALOG_STORAGE_HINT").filter(|h| !h.is_empty()) {
            return Self::new(PathBuf::from(hint), StorageSource::BuildHint);
        }
        Self::new(PathBuf::from(DEFAULT_STORAGE_PATH), StorageSource::Default)
    }

    fn new(storage_path: PathBuf, source: StorageSource) -> Self {
        Self {
            storage_path,
            source,
        }
    }

    /// Load and build the catalog from the resolved storage path.
    pub fn load_catalog(&self) -> Result<ItemCatalog> {
        tracing::debug!(
            path = %self.storage_path.display(),
            source = self.source.as_str(),
            "resolving item storage"
        );
        ItemCatalog::load(&self.storage_path).with_context(|| {
            format!(
                "building item catalog from {} storage path",
                self.source.as_str()
            )
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
