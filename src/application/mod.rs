//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Loading the catalog is the only asynchronous step; recommendation queries
//! and preference changes run synchronously against the loaded catalog.

pub mod handlers;

pub use handlers::{
    ApplyPreferenceChangeCommand, ApplyPreferenceChangeHandler, ApplyPreferenceChangeResult,
    LoadCatalogHandler, RecommendPlanHandler, RecommendPlanQuery, RecommendPlanResult,
};
