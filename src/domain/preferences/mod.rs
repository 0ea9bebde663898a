//! Preferences Module - The user's current snapshot of inputs.
//!
//! Preferences are a plain value. Every update returns a new snapshot that
//! replaces the previous one wholesale; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Leverage, LeverageSet, SkillLevel, ValidationError, WeeklyHours};

/// A single change to the preferences, as produced by one input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PreferenceChange {
    /// Set the weekly time budget (validated to 1-15).
    SetWeeklyHours(u8),
    SetSkillLevel(SkillLevel),
    /// Add the factor if absent, remove it if present (never the last one).
    ToggleLeverage(Leverage),
}

/// What the user can offer: time, skill, and capabilities.
///
/// Fields are public so callers can assemble any snapshot. An empty
/// `leverage` set is a caller precondition violation: it is representable,
/// and simply matches nothing. Use [`UserPreferences::try_new`] to reject it
/// up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPreferences {
    pub weekly_hours: WeeklyHours,
    pub skill_level: SkillLevel,
    pub leverage: LeverageSet,
}

impl UserPreferences {
    /// Creates preferences, rejecting an empty leverage selection.
    pub fn try_new(
        weekly_hours: WeeklyHours,
        skill_level: SkillLevel,
        leverage: LeverageSet,
    ) -> Result<Self, ValidationError> {
        if leverage.is_empty() {
            return Err(ValidationError::empty_field("leverage"));
        }
        Ok(Self {
            weekly_hours,
            skill_level,
            leverage,
        })
    }

    /// Returns a snapshot with a different time budget.
    pub fn with_weekly_hours(&self, weekly_hours: WeeklyHours) -> Self {
        Self {
            weekly_hours,
            ..self.clone()
        }
    }

    /// Returns a snapshot with a different skill level.
    pub fn with_skill_level(&self, skill_level: SkillLevel) -> Self {
        Self {
            skill_level,
            ..self.clone()
        }
    }

    /// Returns a snapshot with `leverage` toggled.
    ///
    /// Removing the only selected factor is refused: the snapshot is
    /// returned unchanged so at least one factor stays selected.
    pub fn toggle_leverage(&self, leverage: Leverage) -> Self {
        let next = if self.leverage.contains(leverage) {
            if self.leverage.len() <= 1 {
                return self.clone();
            }
            self.leverage.without(leverage)
        } else {
            self.leverage.with(leverage)
        };
        Self {
            leverage: next,
            ..self.clone()
        }
    }

    /// Applies a single change, producing the next snapshot.
    pub fn apply(&self, change: PreferenceChange) -> Result<Self, ValidationError> {
        match change {
            PreferenceChange::SetWeeklyHours(hours) => {
                Ok(self.with_weekly_hours(WeeklyHours::try_new(hours)?))
            }
            PreferenceChange::SetSkillLevel(level) => Ok(self.with_skill_level(level)),
            PreferenceChange::ToggleLeverage(leverage) => Ok(self.toggle_leverage(leverage)),
        }
    }
}

impl Default for UserPreferences {
    /// 4 hours a week, beginner, leaning on skills, time and content.
    fn default() -> Self {
        Self {
            weekly_hours: WeeklyHours::default(),
            skill_level: SkillLevel::Beginner,
            leverage: [Leverage::Skills, Leverage::Time, Leverage::Content].into(),
        }
    }
}
