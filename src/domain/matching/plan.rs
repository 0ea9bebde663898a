//! RecommendationPlan - the best match, why it fits, and the alternatives.

use serde::{Deserialize, Serialize};

use super::{StrategyMatch, StrategyMatcher};
use crate::domain::catalog::{Strategy, StrategyCatalog};
use crate::domain::foundation::{LeverageSet, SkillLevel, StrategyId};
use crate::domain::preferences::UserPreferences;

/// Why the primary strategy fits the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitSummary {
    pub required_hours: u8,
    pub available_hours: u8,
    pub strategy_skill: SkillLevel,
    pub user_skill: SkillLevel,
    pub shared_leverage: LeverageSet,
}

impl FitSummary {
    fn from_match(prefs: &UserPreferences, m: &StrategyMatch<'_>) -> Self {
        Self {
            required_hours: m.strategy.weekly_hours,
            available_hours: prefs.weekly_hours.value(),
            strategy_skill: m.strategy.skill_level,
            user_skill: prefs.skill_level,
            shared_leverage: m.shared_leverage.clone(),
        }
    }

    /// Human-readable reasons, one per criterion.
    pub fn reasons(&self) -> Vec<String> {
        vec![
            format!(
                "Needs about {} hours a week: you have {}.",
                self.required_hours, self.available_hours
            ),
            format!(
                "Recommended level {}, and you set {}.",
                self.strategy_skill, self.user_skill
            ),
            format!("Uses the leverage you selected: {}.", self.shared_leverage),
        ]
    }
}

/// The highlighted strategy of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrimary {
    pub strategy: Strategy,
    pub fit: FitSummary,
}

/// Ranked output of the matcher shaped for display.
///
/// `primary` is the top-ranked strategy; `alternatives` are the remaining
/// eligible strategies in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPlan {
    pub preferences: Option<UserPreferences>,
    pub primary: Option<PlanPrimary>,
    pub alternatives: Vec<Strategy>,
}

impl RecommendationPlan {
    /// Matches `prefs` against `catalog` and shapes the result.
    pub fn build(prefs: &UserPreferences, catalog: &StrategyCatalog) -> Self {
        let ranked = StrategyMatcher::rank(prefs, catalog.strategies());
        let mut iter = ranked.into_iter();

        let primary = iter.next().map(|top| PlanPrimary {
            fit: FitSummary::from_match(prefs, &top),
            strategy: top.strategy.clone(),
        });
        let alternatives = iter.map(|m| m.strategy.clone()).collect();

        Self {
            preferences: Some(prefs.clone()),
            primary,
            alternatives,
        }
    }

    /// True when nothing matched; the caller should suggest broadening inputs.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    /// Total number of recommended strategies.
    pub fn len(&self) -> usize {
        usize::from(self.primary.is_some()) + self.alternatives.len()
    }

    /// Ids of all recommended strategies in rank order.
    pub fn ranked_ids(&self) -> Vec<&StrategyId> {
        self.primary
            .iter()
            .map(|p| &p.strategy.id)
            .chain(self.alternatives.iter().map(|s| &s.id))
            .collect()
    }
}
