//! In-memory catalog source for embedding and tests.

use async_trait::async_trait;

use crate::domain::catalog::{Strategy, StrategyCatalog};
use crate::ports::{SourceError, StrategySource};

/// Serves a fixed list of strategies, validated on every load.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStrategySource {
    strategies: Vec<Strategy>,
}

impl InMemoryStrategySource {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }
}

#[async_trait]
impl StrategySource for InMemoryStrategySource {
    async fn load(&self) -> Result<StrategyCatalog, SourceError> {
        Ok(StrategyCatalog::try_new(self.strategies.clone())?)
    }

    fn describe(&self) -> String {
        format!("memory:{}", self.strategies.len())
    }
}
