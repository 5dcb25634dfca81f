use roomsift_types::{Room, RoomCriteria};

use crate::FilterEngine;

/// Rules for the rooms listing. Rooms keep their server-rendered order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomEngine;

impl RoomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl FilterEngine for RoomEngine {
    type Item = Room;
    type Criteria = RoomCriteria;

    fn visible(&self, criteria: &RoomCriteria, room: &Room) -> bool {
        matches_type(criteria, room)
            && matches_price(criteria, room)
            && matches_capacity(criteria, room)
            && matches_search(criteria, room)
    }
}

fn matches_type(criteria: &RoomCriteria, room: &Room) -> bool {
    match &criteria.room_type {
        Some(wanted) => room.room_type.to_lowercase().contains(wanted.as_str()),
        None => true,
    }
}

fn matches_price(criteria: &RoomCriteria, room: &Room) -> bool {
    room.price >= criteria.price_min && room.price <= criteria.price_max
}

// Unknown capacity never hides a room.
fn matches_capacity(criteria: &RoomCriteria, room: &Room) -> bool {
    match (criteria.min_capacity, room.capacity) {
        (Some(required), Some(capacity)) => capacity >= required,
        _ => true,
    }
}

fn matches_search(criteria: &RoomCriteria, room: &Room) -> bool {
    let Some(term) = &criteria.search_text else {
        return true;
    };

    [&room.title, &room.description, &room.room_type]
        .iter()
        .any(|field| field.to_lowercase().contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doble() -> Room {
        Room::new("101", "doble", 80.0, 2)
            .with_title("Doble con balcón")
            .with_description("Vista al jardín interior")
    }

    fn suite() -> Room {
        Room::new("301", "suite", 200.0, 4)
            .with_title("Suite Océano")
            .with_description("Terraza privada frente al mar")
    }

    #[test]
    fn test_type_is_substring_match() {
        let engine = RoomEngine::new();
        let criteria = RoomCriteria::new().room_type("Dob");
        assert!(engine.visible(&criteria, &doble()));
        assert!(!engine.visible(&criteria, &suite()));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let engine = RoomEngine::new();
        let criteria = RoomCriteria::new().price_range(80.0, 200.0);
        assert!(engine.visible(&criteria, &doble()));
        assert!(engine.visible(&criteria, &suite()));

        let criteria = RoomCriteria::new().price_range(80.01, 199.99);
        assert!(!engine.visible(&criteria, &doble()));
        assert!(!engine.visible(&criteria, &suite()));
    }

    #[test]
    fn test_capacity_is_a_minimum() {
        let engine = RoomEngine::new();
        let criteria = RoomCriteria::new().min_capacity(3);
        assert!(!engine.visible(&criteria, &doble()));
        assert!(engine.visible(&criteria, &suite()));
    }

    #[test]
    fn test_unknown_capacity_fails_open() {
        let engine = RoomEngine::new();
        let mut room = doble();
        room.capacity = None;
        assert!(engine.visible(&RoomCriteria::new().min_capacity(10), &room));
    }

    #[test]
    fn test_quick_search_covers_title_description_and_type() {
        let engine = RoomEngine::new();
        assert!(engine.visible(&RoomCriteria::new().search("océano"), &suite()));
        assert!(engine.visible(&RoomCriteria::new().search("JARDÍN"), &doble()));
        assert!(engine.visible(&RoomCriteria::new().search("suite"), &suite()));
        assert!(!engine.visible(&RoomCriteria::new().search("piscina"), &suite()));
    }

    #[test]
    fn test_dimensions_compose() {
        let engine = RoomEngine::new();
        let criteria = RoomCriteria::new().room_type("suite").price_range(0.0, 150.0);
        assert!(!engine.visible(&criteria, &suite()));
    }
}
