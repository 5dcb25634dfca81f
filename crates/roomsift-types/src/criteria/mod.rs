//! Filter criteria: the value objects rebuilt from input controls on every
//! triggering event.
//!
//! Construction never fails. A control that is missing, blank or unreadable
//! contributes "no constraint" on its dimension.

mod reservation;
mod room;

pub use reservation::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Current raw value of every registered input control, keyed by control name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlValues(BTreeMap<String, String>);

impl ControlValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Raw value, `None` when the control is absent or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A min/max pair of numeric controls that must never be left with min > max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPair {
    pub min_control: &'static str,
    pub max_control: &'static str,
    /// Value assumed for an unreadable minimum.
    pub min_default: f64,
    /// Value assumed for an unreadable maximum.
    pub max_default: f64,
}

/// Criteria for one kind of listing.
pub trait FilterCriteria: Default + Clone + PartialEq + fmt::Debug {
    /// Free-text control whose keystrokes are debounced.
    const SEARCH_CONTROL: &'static str;

    /// Control driven by the quick-filter buttons, if the listing has them.
    const QUICK_FILTER_CONTROL: Option<&'static str> = None;

    /// Numeric ranges the input layer keeps ordered.
    fn bound_pairs() -> &'static [BoundPair] {
        &[]
    }

    fn from_controls(controls: &ControlValues) -> Self;

    /// True when no dimension constrains the listing.
    fn is_unconstrained(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_control_reads_as_absent() {
        let controls = ControlValues::new().with("tipo", "   ").with("capacidad", "2");
        assert_eq!(controls.get("tipo"), None);
        assert_eq!(controls.get("capacidad"), Some("2"));
        assert_eq!(controls.get("precio-min"), None);
    }
}
