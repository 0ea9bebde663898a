//! Catalog adapters - implementations of the `StrategySource` port.

mod builtin;
mod in_memory;
mod yaml_file;

pub use builtin::{BuiltinStrategySource, BUILTIN_CATALOG_YAML};
pub use in_memory::InMemoryStrategySource;
pub use yaml_file::{parse_catalog_yaml, YamlFileStrategySource};
