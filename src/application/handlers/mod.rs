//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod apply_preference_change;
mod load_catalog;
mod recommend_plan;

pub use apply_preference_change::{
    ApplyPreferenceChangeCommand, ApplyPreferenceChangeHandler, ApplyPreferenceChangeResult,
};
pub use load_catalog::LoadCatalogHandler;
pub use recommend_plan::{RecommendPlanHandler, RecommendPlanQuery, RecommendPlanResult};
