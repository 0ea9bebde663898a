//! Starting preferences configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::foundation::{LeverageSet, SkillLevel, WeeklyHours};
use crate::domain::preferences::UserPreferences;

/// Preferences used for the first recommendation
///
/// Defaults mirror [`UserPreferences::default()`].
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    /// Weekly hours available (1-15)
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u8,

    /// Skill level: beginner, intermediate or advanced
    #[serde(default = "default_skill_level")]
    pub skill_level: String,

    /// Comma-separated leverage list, e.g. `skills,time,content`
    #[serde(default = "default_leverage")]
    pub leverage: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            weekly_hours: default_weekly_hours(),
            skill_level: default_skill_level(),
            leverage: default_leverage(),
        }
    }
}

fn default_weekly_hours() -> u8 {
    4
}

fn default_skill_level() -> String {
    "beginner".to_string()
}

fn default_leverage() -> String {
    "skills,time,content".to_string()
}

impl PreferencesConfig {
    /// Build validated preferences
    pub fn to_preferences(&self) -> Result<UserPreferences, ValidationError> {
        let weekly_hours = WeeklyHours::try_new(self.weekly_hours)?;
        let skill_level: SkillLevel = self.skill_level.parse()?;
        let leverage = LeverageSet::parse_list(&self.leverage)?;
        Ok(UserPreferences::try_new(weekly_hours, skill_level, leverage)?)
    }

    /// Validate preferences configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_preferences().map(|_| ())
    }
}
