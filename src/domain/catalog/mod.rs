//! Catalog Module - Strategy records and the immutable catalog holding them.
//!
//! - `Strategy` - One income approach with metadata and an execution playbook
//! - `StrategyBuilder` - Validating builder for strategies
//! - `StrategyCatalog` - Ordered collection with unique ids

#[allow(clippy::module_inception)]
mod catalog;
mod strategy;

pub use catalog::{CatalogDocument, CatalogError, StrategyCatalog};
pub use strategy::{PlaybookStep, Strategy, StrategyBuilder};
