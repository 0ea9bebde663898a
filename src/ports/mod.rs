//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StrategySource` - Loads the strategy catalog at startup

mod strategy_source;

pub use strategy_source::{SourceError, StrategySource};
