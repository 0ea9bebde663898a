//! Leverage factors and sets of them.
//!
//! A leverage factor is a capability a strategy depends on and a user can
//! supply without spending money.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A capability category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leverage {
    Skills,
    Time,
    Network,
    Content,
    Automation,
}

impl Leverage {
    /// Every leverage factor in canonical order.
    pub const ALL: [Leverage; 5] = [
        Leverage::Skills,
        Leverage::Time,
        Leverage::Network,
        Leverage::Content,
        Leverage::Automation,
    ];

    /// Returns the display name for this factor.
    pub fn display_name(&self) -> &'static str {
        match self {
            Leverage::Skills => "Skills",
            Leverage::Time => "Time",
            Leverage::Network => "Network",
            Leverage::Content => "Content",
            Leverage::Automation => "Automation",
        }
    }

    /// Returns the machine name used in configuration and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Leverage::Skills => "skills",
            Leverage::Time => "time",
            Leverage::Network => "network",
            Leverage::Content => "content",
            Leverage::Automation => "automation",
        }
    }
}

impl fmt::Display for Leverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Leverage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skills" => Ok(Leverage::Skills),
            "time" => Ok(Leverage::Time),
            "network" => Ok(Leverage::Network),
            "content" => Ok(Leverage::Content),
            "automation" => Ok(Leverage::Automation),
            other => Err(ValidationError::invalid_format(
                "leverage",
                format!("unknown leverage '{}'", other),
            )),
        }
    }
}

/// A set of distinct leverage factors, iterated in canonical order.
///
/// The set itself may be empty; whether emptiness is allowed is decided by
/// the owner (strategies reject it, preferences leave it to the caller).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeverageSet(BTreeSet<Leverage>);

impl LeverageSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns true if the set contains `leverage`.
    pub fn contains(&self, leverage: Leverage) -> bool {
        self.0.contains(&leverage)
    }

    /// Number of distinct factors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no factor is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates factors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Leverage> + '_ {
        self.0.iter().copied()
    }

    /// Factors present in both sets.
    pub fn shared_with(&self, other: &LeverageSet) -> LeverageSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// Number of factors present in both sets.
    pub fn overlap(&self, other: &LeverageSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Returns a copy with `leverage` added.
    pub fn with(&self, leverage: Leverage) -> Self {
        let mut next = self.0.clone();
        next.insert(leverage);
        Self(next)
    }

    /// Returns a copy with `leverage` removed.
    pub fn without(&self, leverage: Leverage) -> Self {
        let mut next = self.0.clone();
        next.remove(&leverage);
        Self(next)
    }

    /// Parses a comma-separated list such as `skills, content`.
    ///
    /// Blank entries are ignored and duplicates collapse.
    pub fn parse_list(list: &str) -> Result<Self, ValidationError> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Leverage::from_str)
            .collect()
    }
}

impl FromIterator<Leverage> for LeverageSet {
    fn from_iter<I: IntoIterator<Item = Leverage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Leverage; N]> for LeverageSet {
    fn from(values: [Leverage; N]) -> Self {
        values.into_iter().collect()
    }
}

impl fmt::Display for LeverageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|l| l.display_name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leverage_parses_known_values() {
        assert_eq!("skills".parse::<Leverage>().unwrap(), Leverage::Skills);
        assert_eq!("AUTOMATION".parse::<Leverage>().unwrap(), Leverage::Automation);
        assert!("money".parse::<Leverage>().is_err());
    }

    #[test]
    fn leverage_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Leverage::Network).unwrap(), "\"network\"");
    }

    #[test]
    fn set_collapses_duplicates() {
        let set: LeverageSet = [Leverage::Time, Leverage::Time, Leverage::Skills].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_iterates_in_canonical_order() {
        let set: LeverageSet = [Leverage::Automation, Leverage::Skills, Leverage::Content].into();
        let order: Vec<Leverage> = set.iter().collect();
        assert_eq!(
            order,
            vec![Leverage::Skills, Leverage::Content, Leverage::Automation]
        );
    }

    #[test]
    fn overlap_counts_shared_factors() {
        let a: LeverageSet = [Leverage::Skills, Leverage::Content].into();
        let b: LeverageSet = [Leverage::Content, Leverage::Automation].into();
        assert_eq!(a.overlap(&b), 1);
        assert_eq!(a.shared_with(&b), [Leverage::Content].into());
    }

    #[test]
    fn overlap_with_empty_set_is_zero() {
        let a: LeverageSet = [Leverage::Skills].into();
        assert_eq!(a.overlap(&LeverageSet::new()), 0);
    }

    #[test]
    fn with_and_without_leave_original_untouched() {
        let base: LeverageSet = [Leverage::Skills].into();
        let added = base.with(Leverage::Time);
        let removed = added.without(Leverage::Skills);

        assert_eq!(base.len(), 1);
        assert_eq!(added.len(), 2);
        assert_eq!(removed, [Leverage::Time].into());
    }

    #[test]
    fn parse_list_accepts_comma_separated_values() {
        let set = LeverageSet::parse_list("skills, time,,content ").unwrap();
        assert_eq!(set, [Leverage::Skills, Leverage::Time, Leverage::Content].into());
    }

    #[test]
    fn parse_list_rejects_unknown_values() {
        assert!(LeverageSet::parse_list("skills,capital").is_err());
    }

    #[test]
    fn parse_list_of_blank_string_is_empty() {
        assert!(LeverageSet::parse_list("  ").unwrap().is_empty());
    }

    #[test]
    fn set_deserializes_from_list() {
        let set: LeverageSet = serde_json::from_str(r#"["content","skills"]"#).unwrap();
        assert!(set.contains(Leverage::Content));
        assert!(set.contains(Leverage::Skills));
    }

    #[test]
    fn set_displays_names() {
        let set: LeverageSet = [Leverage::Content, Leverage::Skills].into();
        assert_eq!(format!("{}", set), "Skills, Content");
    }
}
