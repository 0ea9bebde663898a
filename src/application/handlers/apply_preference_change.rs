//! ApplyPreferenceChangeHandler - Command handler for one input change.
//!
//! Each control change produces a new preferences snapshot and the plan is
//! recomputed from scratch against it.

use tracing::debug;

use super::{RecommendPlanHandler, RecommendPlanQuery};
use crate::domain::foundation::ValidationError;
use crate::domain::matching::RecommendationPlan;
use crate::domain::preferences::{PreferenceChange, UserPreferences};

/// Command to apply a change to the current preferences.
#[derive(Debug, Clone)]
pub struct ApplyPreferenceChangeCommand {
    /// Snapshot before the change.
    pub current: UserPreferences,
    pub change: PreferenceChange,
}

/// Result of applying a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPreferenceChangeResult {
    /// Snapshot that replaces the previous one.
    pub preferences: UserPreferences,
    pub plan: RecommendationPlan,
}

/// Handler that applies a change and recomputes the plan.
pub struct ApplyPreferenceChangeHandler {
    recommender: RecommendPlanHandler,
}

impl ApplyPreferenceChangeHandler {
    pub fn new(recommender: RecommendPlanHandler) -> Self {
        Self { recommender }
    }

    pub fn handle(
        &self,
        cmd: ApplyPreferenceChangeCommand,
    ) -> Result<ApplyPreferenceChangeResult, ValidationError> {
        let preferences = cmd.current.apply(cmd.change)?;
        debug!(change = ?cmd.change, "preferences updated");

        let plan = self.recommender.handle(RecommendPlanQuery {
            preferences: preferences.clone(),
        });
        Ok(ApplyPreferenceChangeResult { preferences, plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Strategy, StrategyCatalog};
    use crate::domain::foundation::{Leverage, SkillLevel, StrategyId};
    use std::sync::Arc;

    fn handler() -> ApplyPreferenceChangeHandler {
        let make = |id: &str, hours: u8, level: SkillLevel, leverage: &[Leverage]| {
            Strategy::builder(StrategyId::new(id).unwrap(), id)
                .weekly_hours(hours)
                .skill_level(level)
                .leverage(leverage.iter().copied())
                .build()
                .unwrap()
        };
        let catalog = StrategyCatalog::try_new(vec![
            make("templates", 3, SkillLevel::Beginner, &[Leverage::Skills, Leverage::Content]),
            make("referrals", 2, SkillLevel::Beginner, &[Leverage::Network]),
            make("consulting", 6, SkillLevel::Advanced, &[Leverage::Skills, Leverage::Network]),
        ])
        .unwrap();
        ApplyPreferenceChangeHandler::new(RecommendPlanHandler::new(Arc::new(catalog)))
    }

    fn ids(plan: &RecommendationPlan) -> Vec<String> {
        plan.ranked_ids().iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_toggle_leverage_recomputes_plan() {
        let handler = handler();
        let current = UserPreferences::default();

        let result = handler
            .handle(ApplyPreferenceChangeCommand {
                current,
                change: PreferenceChange::ToggleLeverage(Leverage::Network),
            })
            .unwrap();

        assert!(result.preferences.leverage.contains(Leverage::Network));
        assert_eq!(ids(&result.plan), vec!["templates", "referrals"]);
    }

    #[test]
    fn test_raising_skill_and_hours_unlocks_strategies() {
        let handler = handler();
        let start = UserPreferences::default().toggle_leverage(Leverage::Network);

        let step = handler
            .handle(ApplyPreferenceChangeCommand {
                current: start,
                change: PreferenceChange::SetSkillLevel(SkillLevel::Advanced),
            })
            .unwrap();
        assert_eq!(ids(&step.plan), vec!["templates", "referrals"]);

        let step = handler
            .handle(ApplyPreferenceChangeCommand {
                current: step.preferences,
                change: PreferenceChange::SetWeeklyHours(6),
            })
            .unwrap();
        assert_eq!(ids(&step.plan), vec!["consulting", "templates", "referrals"]);
    }

    #[test]
    fn test_invalid_hours_are_rejected() {
        let result = handler().handle(ApplyPreferenceChangeCommand {
            current: UserPreferences::default(),
            change: PreferenceChange::SetWeeklyHours(0),
        });
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_removing_last_leverage_is_ignored() {
        let handler = handler();
        let mut current = UserPreferences::default();
        current.leverage = [Leverage::Network].into();

        let result = handler
            .handle(ApplyPreferenceChangeCommand {
                current: current.clone(),
                change: PreferenceChange::ToggleLeverage(Leverage::Network),
            })
            .unwrap();

        assert_eq!(result.preferences, current);
        assert_eq!(ids(&result.plan), vec!["referrals"]);
    }
}
