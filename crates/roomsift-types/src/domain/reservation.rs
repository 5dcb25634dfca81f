use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::{ItemId, ListItem, RawField};
use crate::util::{parse_amount, parse_check_in};

/// Reservation lifecycle status as published by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Confirmada,
    Pendiente,
    Cancelada,
    Activa,
    /// A status this client does not know about. Kept verbatim so it still
    /// matches an exact status filter and sorts by its text.
    Other(String),
}

impl ReservationStatus {
    /// Statuses with a dedicated slot in the breakdown, in display order.
    pub const KNOWN: [ReservationStatus; 4] = [
        ReservationStatus::Confirmada,
        ReservationStatus::Pendiente,
        ReservationStatus::Activa,
        ReservationStatus::Cancelada,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Confirmada => "confirmada",
            ReservationStatus::Pendiente => "pendiente",
            ReservationStatus::Cancelada => "cancelada",
            ReservationStatus::Activa => "activa",
            ReservationStatus::Other(s) => s,
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "confirmada" => ReservationStatus::Confirmada,
            "pendiente" => ReservationStatus::Pendiente,
            "cancelada" => ReservationStatus::Cancelada,
            "activa" => ReservationStatus::Activa,
            _ => ReservationStatus::Other(normalized),
        }
    }
}

impl From<&str> for ReservationStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation card on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ItemId,
    pub status: ReservationStatus,
    /// `None` when no date could be read from the card.
    pub check_in: Option<NaiveDate>,
    /// `None` when no amount could be read from the card.
    pub amount: Option<f64>,
    /// Lower-cased card text other than the status.
    #[serde(default)]
    pub details: String,
    /// Status followed by `details`, used by free-text search.
    #[serde(default)]
    pub search_text: String,
}

fn searchable(status: &ReservationStatus, details: &str) -> String {
    [status.as_str(), details]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Reservation {
    pub fn new(
        id: impl Into<String>,
        status: ReservationStatus,
        check_in: Option<NaiveDate>,
        amount: Option<f64>,
    ) -> Self {
        let id = ItemId::new(id);
        let mut details = id.as_str().to_lowercase();
        if let Some(date) = check_in {
            details.push(' ');
            details.push_str(&date.format("%d/%m/%Y").to_string());
        }
        if let Some(amount) = amount {
            details.push_str(&format!(" ${}", amount));
        }

        Self {
            search_text: searchable(&status, &details),
            id,
            status,
            check_in,
            amount,
            details,
        }
    }

    pub fn with_searchable(mut self, text: &str) -> Self {
        self.details.push(' ');
        self.details.push_str(&text.to_lowercase());
        self.search_text = searchable(&self.status, &self.details);
        self
    }

    /// Same reservation with a new status, as after a successful cancel action.
    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.search_text = searchable(&status, &self.details);
        self.status = status;
        self
    }
}

impl ListItem for Reservation {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Reservation record as embedded in the page: `data-status` plus the text
/// of the card's info items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReservation {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub amount: RawField,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub guest: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl From<RawReservation> for Reservation {
    fn from(raw: RawReservation) -> Self {
        let amount_text = raw.amount.to_text();
        let status = ReservationStatus::from(raw.status);

        let details: Vec<&str> = [
            raw.id.as_str(),
            raw.room.as_str(),
            raw.guest.as_str(),
            raw.check_in.as_str(),
            raw.check_out.as_str(),
            amount_text.as_str(),
        ]
        .into_iter()
        .chain(raw.notes.iter().map(String::as_str))
        .filter(|s| !s.trim().is_empty())
        .collect();

        let details = details.join(" ").to_lowercase();

        Self {
            id: ItemId::new(raw.id.clone()),
            search_text: searchable(&status, &details),
            status,
            check_in: parse_check_in(&raw.check_in),
            amount: parse_amount(&amount_text),
            details,
        }
    }
}
