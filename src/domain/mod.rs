//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Strategy records and the immutable catalog
//! - `preferences` - The user's current input snapshot
//! - `matching` - Pure filter and ranking of strategies for a snapshot

pub mod catalog;
pub mod foundation;
pub mod matching;
pub mod preferences;
