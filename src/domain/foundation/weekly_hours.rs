//! WeeklyHours value object (1-15 hour sustainable time budget).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Hours per week a user can sustainably dedicate, between 1 and 15 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeeklyHours(u8);

impl WeeklyHours {
    /// Smallest accepted budget.
    pub const MIN: Self = Self(1);

    /// Largest accepted budget.
    pub const MAX: Self = Self(15);

    /// Creates a new WeeklyHours, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Creates a WeeklyHours, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weekly_hours",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if a plan needing `required` hours fits in this budget.
    pub fn fits(&self, required: u8) -> bool {
        required <= self.0
    }

    /// Unused hours left after a plan needing `required` hours.
    ///
    /// Saturates at zero when the plan does not fit.
    pub fn slack(&self, required: u8) -> u8 {
        self.0.saturating_sub(required)
    }
}

impl Default for WeeklyHours {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for WeeklyHours {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<WeeklyHours> for u8 {
    fn from(hours: WeeklyHours) -> Self {
        hours.0
    }
}

impl fmt::Display for WeeklyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
