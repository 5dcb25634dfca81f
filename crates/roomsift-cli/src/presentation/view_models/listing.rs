use chrono::NaiveDate;
use roomsift_types::ReservationStatus;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Rooms,
    Reservations,
}

impl ListingKind {
    pub fn command(&self) -> &'static str {
        match self {
            ListingKind::Rooms => "rooms",
            ListingKind::Reservations => "reservations",
        }
    }
}

/// A settled listing: what the page shows once every control has applied.
#[derive(Debug, Serialize)]
pub struct ListingViewModel<T> {
    pub listing: ListingKind,
    pub count_label: String,
    pub visible_count: usize,
    pub total_count: usize,
    /// Visible items in display order.
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BreakdownViewModel>,
    /// Final control values, after range correction.
    pub controls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomEntryViewModel {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationEntryViewModel {
    pub id: String,
    pub status: String,
    pub check_in: Option<NaiveDate>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderViewModel {
    pub title: String,
    pub hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownViewModel {
    pub total: usize,
    pub confirmada: usize,
    pub pendiente: usize,
    pub activa: usize,
    pub cancelada: usize,
    pub other: usize,
}

impl BreakdownViewModel {
    pub fn count(&self, status: &ReservationStatus) -> usize {
        match status {
            ReservationStatus::Confirmada => self.confirmada,
            ReservationStatus::Pendiente => self.pendiente,
            ReservationStatus::Activa => self.activa,
            ReservationStatus::Cancelada => self.cancelada,
            ReservationStatus::Other(_) => self.other,
        }
    }
}
