//! Matching Module - Pure domain services mapping preferences to strategies.
//!
//! # Components
//!
//! - `StrategyMatcher` - Eligibility filter and composite ranking
//! - `StrategyMatch` - An eligible strategy with its ranking facts
//! - `RecommendationPlan` - Primary pick, fit summary, and alternatives
//!
//! Everything here is stateless and synchronous. It is re-run from scratch
//! after every preference change; the catalog is small enough that no
//! caching is needed.

mod engine;
mod plan;

pub use engine::{StrategyMatch, StrategyMatcher};
pub use plan::{FitSummary, PlanPrimary, RecommendationPlan};
