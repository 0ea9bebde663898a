//! Effort and time-to-first-income ratings for strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a strategy is to run week after week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Effort::Low => "Low effort",
            Effort::Medium => "Medium effort",
            Effort::High => "High effort",
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How quickly a strategy usually produces its first income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeToIncome {
    Fast,
    Medium,
    Slow,
}

impl TimeToIncome {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            TimeToIncome::Fast => "Within 2 weeks",
            TimeToIncome::Medium => "Within 1-2 months",
            TimeToIncome::Slow => "3 months or more",
        }
    }
}

impl fmt::Display for TimeToIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
