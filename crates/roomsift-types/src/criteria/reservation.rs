use std::fmt;
use std::str::FromStr;

use super::{ControlValues, FilterCriteria};
use crate::error::Error;
use crate::util::normalize_text;

pub const CONTROL_STATUS: &str = "reservation-filter";
pub const CONTROL_DATE: &str = "date-filter";
pub const CONTROL_SORT: &str = "sort-filter";
pub const CONTROL_RESERVATION_SEARCH: &str = "reservation-search";

/// Which statuses are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Exact (lower-cased) status text.
    Only(String),
}

impl StatusFilter {
    fn from_control(raw: Option<&str>) -> Self {
        match raw.and_then(normalize_text) {
            None => StatusFilter::All,
            Some(value) if value == "all" => StatusFilter::All,
            Some(value) => StatusFilter::Only(value),
        }
    }
}

/// Check-in date window relative to today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateBucket {
    #[default]
    All,
    Upcoming,
    Current,
    Past,
    ThisYear,
}

impl DateBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateBucket::All => "all",
            DateBucket::Upcoming => "upcoming",
            DateBucket::Current => "current",
            DateBucket::Past => "past",
            DateBucket::ThisYear => "this-year",
        }
    }
}

impl FromStr for DateBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DateBucket::All),
            "upcoming" => Ok(DateBucket::Upcoming),
            "current" => Ok(DateBucket::Current),
            "past" => Ok(DateBucket::Past),
            "this-year" => Ok(DateBucket::ThisYear),
            _ => Err(Error::InvalidValue {
                field: CONTROL_DATE,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the visible reservations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent check-in first
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
    /// Status text, ascending
    Status,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::AmountDesc => "amount-desc",
            SortKey::AmountAsc => "amount-asc",
            SortKey::Status => "status",
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "amount-desc" => Ok(SortKey::AmountDesc),
            "amount-asc" => Ok(SortKey::AmountAsc),
            "status" => Ok(SortKey::Status),
            _ => Err(Error::InvalidValue {
                field: CONTROL_SORT,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active constraints and ordering on the reservations listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationCriteria {
    pub status: StatusFilter,
    pub date_bucket: DateBucket,
    pub sort_key: SortKey,
    /// Lower-cased search text, matched against the card's full text.
    pub search_text: Option<String>,
}

impl ReservationCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = StatusFilter::from_control(Some(status));
        self
    }

    pub fn date_bucket(mut self, bucket: DateBucket) -> Self {
        self.date_bucket = bucket;
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search_text = normalize_text(text);
        self
    }
}

impl FilterCriteria for ReservationCriteria {
    const SEARCH_CONTROL: &'static str = CONTROL_RESERVATION_SEARCH;

    fn from_controls(controls: &ControlValues) -> Self {
        Self {
            status: StatusFilter::from_control(controls.get(CONTROL_STATUS)),
            date_bucket: controls
                .get(CONTROL_DATE)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            sort_key: controls
                .get(CONTROL_SORT)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            search_text: controls
                .get(CONTROL_RESERVATION_SEARCH)
                .and_then(normalize_text),
        }
    }

    fn is_unconstrained(&self) -> bool {
        self.status == StatusFilter::All
            && self.date_bucket == DateBucket::All
            && self.search_text.is_none()
    }
}
