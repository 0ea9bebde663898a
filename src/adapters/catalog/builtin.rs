//! Built-in catalog shipped with the crate.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use super::parse_catalog_yaml;
use crate::domain::catalog::StrategyCatalog;
use crate::ports::{SourceError, StrategySource};

/// Raw YAML of the bundled catalog.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../../catalog/strategies.yaml");

static BUILTIN_CATALOG: Lazy<Result<StrategyCatalog, SourceError>> =
    Lazy::new(|| parse_catalog_yaml(BUILTIN_CATALOG_YAML));

/// Serves the catalog compiled into the binary.
///
/// The YAML is parsed once per process; every `load` hands out a copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStrategySource;

impl BuiltinStrategySource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StrategySource for BuiltinStrategySource {
    async fn load(&self) -> Result<StrategyCatalog, SourceError> {
        BUILTIN_CATALOG.clone()
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}
