//! Listing-level behaviour of the engine: composition of predicates,
//! idempotent re-evaluation and stable ordering.

use chrono::NaiveDate;
use roomsift_engine::{evaluate, FilterEngine, ReservationEngine, RoomEngine};
use roomsift_types::{
    ControlValues, DateBucket, FilterCriteria, ItemId, Reservation, ReservationCriteria,
    ReservationStatus, Room, RoomCriteria, SortKey,
};

fn rooms() -> Vec<Room> {
    vec![
        Room::new("doble-1", "doble", 80.0, 2),
        Room::new("suite-1", "suite", 200.0, 4),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn reservations() -> Vec<Reservation> {
    vec![
        Reservation::new(
            "R-100",
            ReservationStatus::Confirmada,
            NaiveDate::from_ymd_opt(2024, 1, 10),
            Some(100.0),
        ),
        Reservation::new(
            "R-050",
            ReservationStatus::Pendiente,
            NaiveDate::from_ymd_opt(2024, 6, 1),
            Some(50.0),
        ),
        Reservation::new("R-undated", ReservationStatus::Activa, None, None),
        Reservation::new(
            "R-075",
            ReservationStatus::Cancelada,
            NaiveDate::from_ymd_opt(2023, 11, 20),
            Some(75.0),
        ),
    ]
}

fn ids(evaluation: &roomsift_engine::Evaluation) -> Vec<&str> {
    evaluation.order.iter().map(ItemId::as_str).collect()
}

#[test]
fn type_filter_shows_only_matching_room() {
    let criteria = RoomCriteria::new().room_type("doble");
    let evaluation = evaluate(&RoomEngine::new(), &criteria, &rooms());
    assert_eq!(ids(&evaluation), vec!["doble-1"]);
}

#[test]
fn price_window_between_rooms_shows_nothing() {
    let criteria = RoomCriteria::new().price_range(100.0, 150.0);
    let evaluation = evaluate(&RoomEngine::new(), &criteria, &rooms());
    assert_eq!(evaluation.visible_count(), 0);
    assert!(evaluation.decisions.iter().all(|d| !d.visible));
}

#[test]
fn cleared_criteria_show_everything() {
    let room_criteria = RoomCriteria::from_controls(&ControlValues::new());
    let evaluation = evaluate(&RoomEngine::new(), &room_criteria, &rooms());
    assert_eq!(evaluation.visible_count(), rooms().len());

    let engine = ReservationEngine::fixed(today());
    let reservation_criteria = ReservationCriteria::from_controls(&ControlValues::new());
    let evaluation = evaluate(&engine, &reservation_criteria, &reservations());
    assert_eq!(evaluation.visible_count(), reservations().len());
}

#[test]
fn amount_desc_orders_by_amount() {
    let engine = ReservationEngine::fixed(today());
    let items: Vec<Reservation> = reservations().into_iter().take(2).collect();
    let criteria = ReservationCriteria::new().sort_by(SortKey::AmountDesc);

    let evaluation = evaluate(&engine, &criteria, &items);
    assert_eq!(ids(&evaluation), vec!["R-100", "R-050"]);
}

#[test]
fn default_sort_is_newest_check_in_first_with_undated_last() {
    let engine = ReservationEngine::fixed(today());
    let evaluation = evaluate(&engine, &ReservationCriteria::new(), &reservations());
    assert_eq!(ids(&evaluation), vec!["R-050", "R-100", "R-075", "R-undated"]);
}

#[test]
fn evaluation_is_idempotent() {
    let engine = ReservationEngine::fixed(today());
    let criteria = ReservationCriteria::new()
        .date_bucket(DateBucket::ThisYear)
        .sort_by(SortKey::Status);
    let items = reservations();

    let first = evaluate(&engine, &criteria, &items);
    let second = evaluate(&engine, &criteria, &items);
    assert_eq!(first, second);

    for item in &items {
        assert_eq!(engine.visible(&criteria, item), engine.visible(&criteria, item));
    }
}

#[test]
fn reordering_an_ordered_listing_changes_nothing() {
    let engine = ReservationEngine::fixed(today());
    let criteria = ReservationCriteria::new();
    let items = reservations();

    let once = engine.order(&criteria, items.iter().collect());
    let twice = engine.order(&criteria, once.clone());
    assert_eq!(once, twice);
}

#[test]
fn equal_amounts_keep_input_order() {
    let engine = ReservationEngine::fixed(today());
    let items = vec![
        Reservation::new("first", ReservationStatus::Activa, None, Some(10.0)),
        Reservation::new("second", ReservationStatus::Activa, None, Some(10.0)),
        Reservation::new("third", ReservationStatus::Activa, None, Some(10.0)),
    ];

    for key in [SortKey::AmountAsc, SortKey::AmountDesc, SortKey::DateDesc] {
        let evaluation = evaluate(&engine, &ReservationCriteria::new().sort_by(key), &items);
        assert_eq!(ids(&evaluation), vec!["first", "second", "third"], "{key}");
    }
}

#[test]
fn predicates_compose_with_and() {
    let engine = ReservationEngine::fixed(today());
    let criteria = ReservationCriteria::new()
        .status("confirmada")
        .date_bucket(DateBucket::Upcoming);

    // R-100 is confirmada but in the past relative to 2024-03-01.
    let evaluation = evaluate(&engine, &criteria, &reservations());
    assert_eq!(evaluation.visible_count(), 0);
}

#[test]
fn breakdown_counts_only_visible_reservations() {
    let engine = ReservationEngine::fixed(today());
    let criteria = ReservationCriteria::new().date_bucket(DateBucket::Past);
    let evaluation = evaluate(&engine, &criteria, &reservations());

    let breakdown = evaluation.breakdown.expect("reservations carry a breakdown");
    // R-100 and R-075 are past; the undated one fails open.
    assert_eq!(breakdown.total, 3);
    assert_eq!(breakdown.confirmada, 1);
    assert_eq!(breakdown.cancelada, 1);
    assert_eq!(breakdown.activa, 1);
}

#[test]
fn items_are_not_mutated() {
    let engine = ReservationEngine::fixed(today());
    let items = reservations();
    let snapshot = items.clone();
    let _ = evaluate(&engine, &ReservationCriteria::new().search("suite"), &items);
    assert_eq!(items, snapshot);
}

#[test]
fn past_bucket_evaluation_snapshot() {
    let engine = ReservationEngine::fixed(today());
    let criteria = ReservationCriteria::new().date_bucket(DateBucket::Past);
    let evaluation = evaluate(&engine, &criteria, &reservations());

    insta::assert_json_snapshot!(evaluation, @r###"
    {
      "decisions": [
        {
          "id": "R-100",
          "visible": true
        },
        {
          "id": "R-050",
          "visible": false
        },
        {
          "id": "R-undated",
          "visible": true
        },
        {
          "id": "R-075",
          "visible": true
        }
      ],
      "order": [
        "R-100",
        "R-075",
        "R-undated"
      ],
      "breakdown": {
        "total": 3,
        "confirmada": 1,
        "pendiente": 0,
        "activa": 1,
        "cancelada": 1,
        "other": 0
      }
    }
    "###);
}
