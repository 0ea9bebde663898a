//! StrategySource port - where the strategy catalog comes from.
//!
//! The catalog is loaded once at startup and then shared read-only.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{CatalogError, StrategyCatalog};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Catalog IO error: {0}")]
    Io(String),

    #[error("Catalog could not be parsed: {0}")]
    Parse(String),

    #[error("Catalog is invalid: {0}")]
    Invalid(#[from] CatalogError),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Invalid(inner) => inner.into(),
            other => DomainError::new(ErrorCode::CatalogUnavailable, other.to_string()),
        }
    }
}

/// Loads a [`StrategyCatalog`].
#[async_trait]
pub trait StrategySource: Send + Sync {
    /// Load and validate the catalog.
    async fn load(&self) -> Result<StrategyCatalog, SourceError>;

    /// Short description of the source for logs (e.g. `builtin`, a file path).
    fn describe(&self) -> String;
}
