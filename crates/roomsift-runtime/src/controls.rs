use roomsift_types::{parse_number, BoundPair, ControlValues, FilterCriteria};
use tracing::debug;

/// A value the input layer wrote back into a control to keep a range ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub control: &'static str,
    pub value: String,
}

/// The registered input controls of one listing.
///
/// Every write goes through [`ControlSet::set`], which keeps numeric ranges
/// consistent: raising a minimum above its maximum drags the maximum up, and
/// lowering a maximum below its minimum drags the minimum down.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    values: ControlValues,
    bounds: &'static [BoundPair],
}

impl ControlSet {
    pub fn for_criteria<C: FilterCriteria>() -> Self {
        Self {
            values: ControlValues::new(),
            bounds: C::bound_pairs(),
        }
    }

    pub fn values(&self) -> &ControlValues {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Build the criteria the current control state describes.
    pub fn criteria<C: FilterCriteria>(&self) -> C {
        C::from_controls(&self.values)
    }

    /// Write a control value, returning the correction applied to its
    /// partner control if the range would otherwise be inverted.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<Correction> {
        let value = value.into();
        self.values.set(name, value.clone());

        let pair = self
            .bounds
            .iter()
            .find(|pair| pair.min_control == name || pair.max_control == name)?;

        let min = self.read_bound(pair.min_control, pair.min_default);
        let max = self.read_bound(pair.max_control, pair.max_default);
        if min <= max {
            return None;
        }

        let correction = if name == pair.min_control {
            Correction {
                control: pair.max_control,
                value: format_bound(min),
            }
        } else {
            Correction {
                control: pair.min_control,
                value: format_bound(max),
            }
        };

        debug!(
            changed = name,
            adjusted = correction.control,
            value = %correction.value,
            "range bound corrected"
        );
        self.values.set(correction.control, correction.value.clone());
        Some(correction)
    }

    /// Return every control to its default (empty) value.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    fn read_bound(&self, control: &str, default: f64) -> f64 {
        self.values
            .get(control)
            .and_then(parse_number)
            .unwrap_or(default)
    }
}

fn format_bound(value: f64) -> String {
    // f64 Display already drops a zero fraction: 150.0 -> "150"
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomsift_types::{
        ReservationCriteria, RoomCriteria, CONTROL_PRICE_MAX, CONTROL_PRICE_MIN, CONTROL_TYPE,
    };

    #[test]
    fn test_raising_min_above_max_drags_max_up() {
        let mut controls = ControlSet::for_criteria::<RoomCriteria>();
        assert_eq!(controls.set(CONTROL_PRICE_MAX, "100"), None);

        let correction = controls.set(CONTROL_PRICE_MIN, "150");
        assert_eq!(
            correction,
            Some(Correction {
                control: CONTROL_PRICE_MAX,
                value: "150".to_string()
            })
        );
        assert_eq!(controls.get(CONTROL_PRICE_MAX), Some("150"));

        let criteria: RoomCriteria = controls.criteria();
        assert_eq!(criteria.price_min, 150.0);
        assert_eq!(criteria.price_max, 150.0);
    }

    #[test]
    fn test_lowering_max_below_min_drags_min_down() {
        let mut controls = ControlSet::for_criteria::<RoomCriteria>();
        controls.set(CONTROL_PRICE_MIN, "120");

        let correction = controls.set(CONTROL_PRICE_MAX, "90");
        assert_eq!(
            correction,
            Some(Correction {
                control: CONTROL_PRICE_MIN,
                value: "90".to_string()
            })
        );
        assert_eq!(controls.get(CONTROL_PRICE_MIN), Some("90"));
    }

    #[test]
    fn test_empty_max_never_conflicts() {
        let mut controls = ControlSet::for_criteria::<RoomCriteria>();
        assert_eq!(controls.set(CONTROL_PRICE_MIN, "5000"), None);
        assert_eq!(controls.get(CONTROL_PRICE_MAX), None);
    }

    #[test]
    fn test_unrelated_controls_are_not_checked() {
        let mut controls = ControlSet::for_criteria::<RoomCriteria>();
        assert_eq!(controls.set(CONTROL_TYPE, "suite"), None);

        let mut controls = ControlSet::for_criteria::<ReservationCriteria>();
        assert_eq!(controls.set(CONTROL_PRICE_MIN, "10"), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut controls = ControlSet::for_criteria::<RoomCriteria>();
        controls.set(CONTROL_TYPE, "suite");
        controls.set(CONTROL_PRICE_MIN, "10");
        controls.reset();
        assert!(controls.criteria::<RoomCriteria>().is_unconstrained());
    }
}
