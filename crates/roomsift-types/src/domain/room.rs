use serde::{Deserialize, Serialize};

use super::item::{ItemId, ListItem, RawField};
use crate::util::{parse_count, parse_number};

/// A bookable room as listed on the rooms page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: ItemId,
    /// Room type label, e.g. "doble" or "suite presidencial".
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly price. Unreadable prices are stored as 0.
    pub price: f64,
    /// Guest capacity, `None` when the markup did not carry a readable number.
    pub capacity: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Room {
    pub fn new(id: impl Into<String>, room_type: impl Into<String>, price: f64, capacity: u32) -> Self {
        Self {
            id: ItemId::new(id),
            room_type: room_type.into(),
            price,
            capacity: Some(capacity),
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ListItem for Room {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Room record exactly as embedded in the page (`data-tipo`, `data-precio`,
/// `data-capacidad`, heading and description text).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRoom {
    pub id: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub precio: RawField,
    #[serde(default)]
    pub capacidad: RawField,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
}

impl From<RawRoom> for Room {
    fn from(raw: RawRoom) -> Self {
        Self {
            id: ItemId::new(raw.id),
            room_type: raw.tipo.trim().to_string(),
            price: parse_number(&raw.precio.to_text()).unwrap_or(0.0),
            capacity: parse_count(&raw.capacidad.to_text()),
            title: raw.titulo,
            description: raw.descripcion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_room_parses_attributes() {
        let raw: RawRoom = serde_json::from_str(
            r#"{"id":"r1","tipo":"doble","precio":"80","capacidad":2,"titulo":"Vista al mar"}"#,
        )
        .unwrap();
        let room = Room::from(raw);
        assert_eq!(room.room_type, "doble");
        assert_eq!(room.price, 80.0);
        assert_eq!(room.capacity, Some(2));
        assert_eq!(room.title, "Vista al mar");
    }

    #[test]
    fn test_raw_room_unreadable_fields_degrade() {
        let raw: RawRoom =
            serde_json::from_str(r#"{"id":"r2","precio":"consultar","capacidad":"?"}"#).unwrap();
        let room = Room::from(raw);
        assert_eq!(room.price, 0.0);
        assert_eq!(room.capacity, None);
    }
}
