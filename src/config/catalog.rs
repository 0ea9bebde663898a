//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::ValidationError;

/// Where the strategy catalog is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// Catalog compiled into the binary
    #[default]
    Builtin,
    /// YAML file at `catalog.path`
    File,
}

/// Catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Source kind (default: builtin)
    #[serde(default)]
    pub source: CatalogSourceKind,

    /// Path of the YAML catalog, required when `source = file`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source == CatalogSourceKind::File && self.path.is_none() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }
        Ok(())
    }
}
