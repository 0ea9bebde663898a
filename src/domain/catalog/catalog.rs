//! StrategyCatalog - the fixed, ordered collection of strategies.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::Strategy;
use crate::domain::foundation::{DomainError, ErrorCode, StrategyId, ValidationError};

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Strategy id '{0}' appears more than once")]
    DuplicateId(StrategyId),

    #[error("Strategy '{id}' is invalid: {source}")]
    InvalidStrategy {
        id: StrategyId,
        #[source]
        source: ValidationError,
    },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::DuplicateId(id) => {
                DomainError::new(ErrorCode::DuplicateStrategy, err.to_string())
                    .with_detail("strategy_id", id.as_str())
            }
            CatalogError::InvalidStrategy { id, source } => {
                DomainError::validation(source.field(), err.to_string())
                    .with_detail("strategy_id", id.as_str())
            }
        }
    }
}

/// Immutable strategy catalog preserving insertion order.
///
/// Insertion order is the final ranking tie-break, so it is part of the
/// catalog's meaning and never rearranged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    /// Builds a catalog, validating every strategy and id uniqueness.
    pub fn try_new(strategies: Vec<Strategy>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(strategies.len());
        for strategy in &strategies {
            strategy
                .validate()
                .map_err(|source| CatalogError::InvalidStrategy {
                    id: strategy.id.clone(),
                    source,
                })?;
            if !seen.insert(strategy.id.clone()) {
                return Err(CatalogError::DuplicateId(strategy.id.clone()));
            }
        }
        Ok(Self { strategies })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Strategies in insertion order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Looks up a strategy by id.
    pub fn get(&self, id: &StrategyId) -> Option<&Strategy> {
        self.strategies.iter().find(|s| &s.id == id)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strategy> {
        self.strategies.iter()
    }
}

impl<'a> IntoIterator for &'a StrategyCatalog {
    type Item = &'a Strategy;
    type IntoIter = std::slice::Iter<'a, Strategy>;

    fn into_iter(self) -> Self::IntoIter {
        self.strategies.iter()
    }
}

/// Serialized catalog layout: `{ strategies: [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

impl TryFrom<CatalogDocument> for StrategyCatalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Self::try_new(doc.strategies)
    }
}

impl From<StrategyCatalog> for CatalogDocument {
    fn from(catalog: StrategyCatalog) -> Self {
        Self {
            strategies: catalog.strategies,
        }
    }
}
