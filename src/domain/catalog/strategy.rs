//! Strategy record and builder.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Effort, Leverage, LeverageSet, SkillLevel, StrategyId, TimeToIncome, ValidationError,
};

/// One step of a strategy's execution playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybookStep {
    pub title: String,
    pub detail: String,
}

impl PlaybookStep {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// A catalog entry describing one no-investment approach to generating income.
///
/// Strategies are loaded once and never mutated; the catalog hands out
/// shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub title: String,
    pub summary: String,
    pub why_it_works: String,
    /// Expected weekly time requirement in hours.
    pub weekly_hours: u8,
    /// Minimum expected skill level.
    pub skill_level: SkillLevel,
    /// Capabilities the strategy depends on. Never empty.
    pub leverage: LeverageSet,
    pub effort: Effort,
    pub time_to_first_income: TimeToIncome,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub steps: Vec<PlaybookStep>,
    #[serde(default)]
    pub growth_ideas: Vec<String>,
}

impl Strategy {
    /// Starts building a strategy with the given id and title.
    pub fn builder(id: StrategyId, title: impl Into<String>) -> StrategyBuilder {
        StrategyBuilder::new(id, title)
    }

    /// Checks the record-level invariants.
    ///
    /// - title must not be blank
    /// - leverage must contain at least one factor
    /// - weekly_hours must be at least 1
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.leverage.is_empty() {
            return Err(ValidationError::empty_field("leverage"));
        }
        if self.weekly_hours == 0 {
            return Err(ValidationError::out_of_range(
                "weekly_hours",
                1,
                i32::from(u8::MAX),
                0,
            ));
        }
        Ok(())
    }
}

/// Builder for [`Strategy`].
///
/// Defaults: 1 weekly hour, beginner, low effort, medium time to income,
/// empty text and lists. Leverage has no default and must be supplied.
#[derive(Debug, Clone)]
pub struct StrategyBuilder {
    strategy: Strategy,
}

impl StrategyBuilder {
    fn new(id: StrategyId, title: impl Into<String>) -> Self {
        Self {
            strategy: Strategy {
                id,
                title: title.into(),
                summary: String::new(),
                why_it_works: String::new(),
                weekly_hours: 1,
                skill_level: SkillLevel::Beginner,
                leverage: LeverageSet::new(),
                effort: Effort::Low,
                time_to_first_income: TimeToIncome::Medium,
                requirements: Vec::new(),
                steps: Vec::new(),
                growth_ideas: Vec::new(),
            },
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.strategy.summary = summary.into();
        self
    }

    pub fn why_it_works(mut self, why: impl Into<String>) -> Self {
        self.strategy.why_it_works = why.into();
        self
    }

    pub fn weekly_hours(mut self, hours: u8) -> Self {
        self.strategy.weekly_hours = hours;
        self
    }

    pub fn skill_level(mut self, level: SkillLevel) -> Self {
        self.strategy.skill_level = level;
        self
    }

    pub fn leverage(mut self, leverage: impl IntoIterator<Item = Leverage>) -> Self {
        self.strategy.leverage = leverage.into_iter().collect();
        self
    }

    pub fn effort(mut self, effort: Effort) -> Self {
        self.strategy.effort = effort;
        self
    }

    pub fn time_to_first_income(mut self, speed: TimeToIncome) -> Self {
        self.strategy.time_to_first_income = speed;
        self
    }

    pub fn requirement(mut self, requirement: impl Into<String>) -> Self {
        self.strategy.requirements.push(requirement.into());
        self
    }

    pub fn step(mut self, title: impl Into<String>, detail: impl Into<String>) -> Self {
        self.strategy.steps.push(PlaybookStep::new(title, detail));
        self
    }

    pub fn growth_idea(mut self, idea: impl Into<String>) -> Self {
        self.strategy.growth_ideas.push(idea.into());
        self
    }

    /// Validates and returns the strategy.
    pub fn build(self) -> Result<Strategy, ValidationError> {
        self.strategy.validate()?;
        Ok(self.strategy)
    }
}
