//! RecommendPlanHandler - Query handler turning preferences into a plan.
//!
//! Synchronous and infallible: an empty plan is the "nothing fits" answer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::catalog::StrategyCatalog;
use crate::domain::matching::RecommendationPlan;
use crate::domain::preferences::UserPreferences;

/// Query for a recommendation plan.
#[derive(Debug, Clone)]
pub struct RecommendPlanQuery {
    /// Current preferences snapshot.
    pub preferences: UserPreferences,
}

/// Result of a plan query.
pub type RecommendPlanResult = RecommendationPlan;

/// Handler for recommendation queries against a loaded catalog.
#[derive(Clone)]
pub struct RecommendPlanHandler {
    catalog: Arc<StrategyCatalog>,
}

impl RecommendPlanHandler {
    pub fn new(catalog: Arc<StrategyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    pub fn handle(&self, query: RecommendPlanQuery) -> RecommendPlanResult {
        let plan = RecommendationPlan::build(&query.preferences, &self.catalog);

        match &plan.primary {
            Some(primary) => debug!(
                primary = %primary.strategy.id,
                eligible = plan.len(),
                catalog = self.catalog.len(),
                "recommendation plan computed"
            ),
            None => warn!(
                weekly_hours = query.preferences.weekly_hours.value(),
                skill_level = %query.preferences.skill_level,
                leverage = %query.preferences.leverage,
                "no strategy matches; broaden leverage or add weekly hours"
            ),
        }
        plan
    }
}
