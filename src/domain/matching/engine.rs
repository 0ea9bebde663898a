//! Strategy Matcher - eligibility filter and composite ranking.

use std::cmp::Ordering;

use crate::domain::catalog::Strategy;
use crate::domain::foundation::LeverageSet;
use crate::domain::preferences::UserPreferences;

/// An eligible strategy together with the facts it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyMatch<'a> {
    pub strategy: &'a Strategy,
    /// Factors offered by the user that the strategy uses.
    pub shared_leverage: LeverageSet,
    /// Available hours the strategy leaves unused.
    pub hour_gap: u8,
}

impl StrategyMatch<'_> {
    /// Number of shared leverage factors (primary ranking key).
    pub fn overlap(&self) -> usize {
        self.shared_leverage.len()
    }

    /// Ranking order: more shared leverage first, then smaller hour gap.
    ///
    /// Equal matches compare `Equal`; callers rely on a stable sort to keep
    /// catalog order between them.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .overlap()
            .cmp(&self.overlap())
            .then(self.hour_gap.cmp(&other.hour_gap))
    }
}

/// Preference-to-catalog matching functions.
///
/// All functions are pure and total: no I/O, no errors. An empty result
/// means nothing in the catalog fits.
pub struct StrategyMatcher;

impl StrategyMatcher {
    /// Returns true if `strategy` can be recommended for `prefs`.
    ///
    /// # Rules
    /// 1. It fits the time budget: `strategy.weekly_hours <= prefs.weekly_hours`
    /// 2. The user's skill covers it: `rank(strategy) <= rank(user)`
    /// 3. At least one leverage factor is shared
    pub fn is_eligible(prefs: &UserPreferences, strategy: &Strategy) -> bool {
        prefs.weekly_hours.fits(strategy.weekly_hours)
            && prefs.skill_level.covers(strategy.skill_level)
            && strategy.leverage.overlap(&prefs.leverage) > 0
    }

    /// Evaluates one strategy, returning its ranking facts if eligible.
    pub fn evaluate<'a>(prefs: &UserPreferences, strategy: &'a Strategy) -> Option<StrategyMatch<'a>> {
        if !Self::is_eligible(prefs, strategy) {
            return None;
        }
        Some(StrategyMatch {
            strategy,
            shared_leverage: strategy.leverage.shared_with(&prefs.leverage),
            hour_gap: prefs.weekly_hours.slack(strategy.weekly_hours),
        })
    }

    /// Filters and ranks `strategies` for `prefs`.
    ///
    /// # Algorithm
    /// Keep eligible strategies, then stable-sort by
    /// (shared leverage count desc, hour gap asc). Ties keep input order.
    ///
    /// # Edge Cases
    /// - Empty input: returns empty Vec
    /// - Empty preference leverage: nothing is eligible, returns empty Vec
    pub fn rank<'a>(prefs: &UserPreferences, strategies: &'a [Strategy]) -> Vec<StrategyMatch<'a>> {
        let mut matches: Vec<StrategyMatch<'a>> = strategies
            .iter()
            .filter_map(|strategy| Self::evaluate(prefs, strategy))
            .collect();

        // slice::sort_by is stable
        matches.sort_by(StrategyMatch::rank_cmp);
        matches
    }

    /// Returns the eligible strategies, best match first.
    pub fn match_strategies<'a>(
        prefs: &UserPreferences,
        strategies: &'a [Strategy],
    ) -> Vec<&'a Strategy> {
        Self::rank(prefs, strategies)
            .into_iter()
            .map(|m| m.strategy)
            .collect()
    }
}
