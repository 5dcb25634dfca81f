use crate::Result;
use roomsift_types::{ListItem, RawReservation, RawRoom, Reservation, Room};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a JSON array of raw room records.
pub fn parse_rooms(json: &str) -> Result<Vec<Room>> {
    parse_items::<RawRoom, Room>(json)
}

/// Parse a JSON array of raw reservation records.
pub fn parse_reservations(json: &str) -> Result<Vec<Reservation>> {
    parse_items::<RawReservation, Reservation>(json)
}

pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    let content = std::fs::read_to_string(path)?;
    let rooms = parse_rooms(&content)?;
    debug!(path = %path.display(), count = rooms.len(), "loaded rooms");
    Ok(rooms)
}

pub fn load_reservations(path: &Path) -> Result<Vec<Reservation>> {
    let content = std::fs::read_to_string(path)?;
    let reservations = parse_reservations(&content)?;
    debug!(path = %path.display(), count = reservations.len(), "loaded reservations");
    Ok(reservations)
}

fn parse_items<R, T>(json: &str) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    T: From<R> + ListItem,
{
    let raw: Vec<R> = serde_json::from_str(json)?;
    Ok(dedup_by_id(raw.into_iter().map(T::from)))
}

/// The first record with a given id wins; later duplicates are dropped.
fn dedup_by_id<T: ListItem>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .filter(|item| {
            let fresh = seen.insert(item.id().clone());
            if !fresh {
                warn!(id = %item.id(), "duplicate item id in source, keeping the first");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::NaiveDate;
    use roomsift_types::ReservationStatus;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rooms_keeps_source_order() -> Result<()> {
        let rooms = parse_rooms(
            r#"[
                {"id":"101","tipo":"doble","precio":"80","capacidad":"2"},
                {"id":"102","tipo":"suite","precio":200,"capacidad":4}
            ]"#,
        )?;
        let ids: Vec<&str> = rooms.iter().map(|room| room.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "102"]);
        assert_eq!(rooms[1].price, 200.0);
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_keep_first() -> Result<()> {
        let rooms = parse_rooms(
            r#"[
                {"id":"101","tipo":"doble","precio":"80"},
                {"id":"101","tipo":"suite","precio":"500"}
            ]"#,
        )?;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_type, "doble");
        Ok(())
    }

    #[test]
    fn test_parse_reservations_reads_fields() -> Result<()> {
        let reservations = parse_reservations(
            r#"[{"id":"R-1","status":"confirmada","check_in":"Entrada: 10/1/2024","amount":"$1,250.50"}]"#,
        )?;
        let reservation = &reservations[0];
        assert_eq!(reservation.status, ReservationStatus::Confirmada);
        assert_eq!(reservation.check_in, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(reservation.amount, Some(1250.5));
        Ok(())
    }

    #[test]
    fn test_not_an_array_is_source_error() {
        let err = parse_rooms(r#"{"id":"101"}"#).unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("reservations.json");
        std::fs::write(&path, r#"[{"id":"R-1","status":"pendiente"}]"#)?;

        let reservations = load_reservations(&path)?;
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].check_in, None);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_rooms(Path::new("/nonexistent/rooms.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
