//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Strategy catalog sources (built-in, YAML file, in-memory)

pub mod catalog;

pub use catalog::{BuiltinStrategySource, InMemoryStrategySource, YamlFileStrategySource};
