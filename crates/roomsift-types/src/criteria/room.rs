use super::{BoundPair, ControlValues, FilterCriteria};
use crate::util::{normalize_text, parse_count, parse_number};

pub const CONTROL_TYPE: &str = "tipo";
pub const CONTROL_PRICE_MIN: &str = "precio-min";
pub const CONTROL_PRICE_MAX: &str = "precio-max";
pub const CONTROL_CAPACITY: &str = "capacidad";
pub const CONTROL_QUICK_SEARCH: &str = "quick-search";

/// Upper price bound used when the maximum is left empty or unreadable.
pub const PRICE_MAX_SENTINEL: f64 = f64::INFINITY;

const ROOM_BOUNDS: [BoundPair; 1] = [BoundPair {
    min_control: CONTROL_PRICE_MIN,
    max_control: CONTROL_PRICE_MAX,
    min_default: 0.0,
    max_default: PRICE_MAX_SENTINEL,
}];

/// Active constraints on the rooms listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCriteria {
    /// Lower-cased type fragment; a room matches if its type contains it.
    pub room_type: Option<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub min_capacity: Option<u32>,
    /// Lower-cased quick-search text matched against title, description and type.
    pub search_text: Option<String>,
}

impl Default for RoomCriteria {
    fn default() -> Self {
        Self {
            room_type: None,
            price_min: 0.0,
            price_max: PRICE_MAX_SENTINEL,
            min_capacity: None,
            search_text: None,
        }
    }
}

impl RoomCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_type(mut self, room_type: &str) -> Self {
        self.room_type = normalize_text(room_type);
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search_text = normalize_text(text);
        self
    }
}

impl FilterCriteria for RoomCriteria {
    const SEARCH_CONTROL: &'static str = CONTROL_QUICK_SEARCH;
    const QUICK_FILTER_CONTROL: Option<&'static str> = Some(CONTROL_TYPE);

    fn bound_pairs() -> &'static [BoundPair] {
        &ROOM_BOUNDS
    }

    fn from_controls(controls: &ControlValues) -> Self {
        Self {
            room_type: controls.get(CONTROL_TYPE).and_then(normalize_text),
            price_min: controls
                .get(CONTROL_PRICE_MIN)
                .and_then(parse_number)
                .unwrap_or(0.0),
            price_max: controls
                .get(CONTROL_PRICE_MAX)
                .and_then(parse_number)
                .unwrap_or(PRICE_MAX_SENTINEL),
            min_capacity: controls.get(CONTROL_CAPACITY).and_then(parse_count),
            search_text: controls.get(CONTROL_QUICK_SEARCH).and_then(normalize_text),
        }
    }

    fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
