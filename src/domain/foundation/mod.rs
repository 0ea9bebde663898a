//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the income planner domain.

mod effort;
mod errors;
mod ids;
mod leverage;
mod skill_level;
mod weekly_hours;

pub use effort::{Effort, TimeToIncome};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::StrategyId;
pub use leverage::{Leverage, LeverageSet};
pub use skill_level::SkillLevel;
pub use weekly_hours::WeeklyHours;
