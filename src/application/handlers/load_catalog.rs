//! LoadCatalogHandler - Loads the strategy catalog once at startup.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::catalog::StrategyCatalog;
use crate::ports::{SourceError, StrategySource};

/// Handler that loads and freezes the catalog.
///
/// The returned `Arc` is shared read-only by every query for the rest of
/// the process.
pub struct LoadCatalogHandler {
    source: Arc<dyn StrategySource>,
}

impl LoadCatalogHandler {
    pub fn new(source: Arc<dyn StrategySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<Arc<StrategyCatalog>, SourceError> {
        let source = self.source.describe();
        let catalog = self.source.load().await.map_err(|e| {
            warn!(%source, error = %e, "failed to load strategy catalog");
            e
        })?;

        if catalog.is_empty() {
            warn!(%source, "strategy catalog is empty; every plan will be empty");
        } else {
            info!(%source, strategies = catalog.len(), "strategy catalog loaded");
        }
        Ok(Arc::new(catalog))
    }
}
