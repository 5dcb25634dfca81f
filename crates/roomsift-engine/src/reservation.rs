use chrono::{Datelike, Local, NaiveDate};
use roomsift_types::{DateBucket, Reservation, ReservationCriteria, SortKey, StatusFilter};
use std::cmp::Ordering;

use crate::{FilterEngine, StatusBreakdown};

/// Where the engine reads "today" from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Today {
    /// Local calendar day at the moment of evaluation.
    #[default]
    Local,
    Fixed(NaiveDate),
}

impl Today {
    pub fn date(&self) -> NaiveDate {
        match self {
            Today::Local => Local::now().date_naive(),
            Today::Fixed(date) => *date,
        }
    }
}

/// Rules for the reservations listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationEngine {
    today: Today,
}

impl ReservationEngine {
    pub fn new(today: Today) -> Self {
        Self { today }
    }

    pub fn local() -> Self {
        Self::new(Today::Local)
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self::new(Today::Fixed(today))
    }

    pub fn today(&self) -> NaiveDate {
        self.today.date()
    }
}

impl FilterEngine for ReservationEngine {
    type Item = Reservation;
    type Criteria = ReservationCriteria;

    fn for_evaluation(&self) -> Self {
        Self::fixed(self.today())
    }

    fn visible(&self, criteria: &ReservationCriteria, reservation: &Reservation) -> bool {
        let status_match = match &criteria.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => reservation.status.as_str() == status,
        };

        let date_match = match reservation.check_in {
            Some(check_in) => in_date_bucket(criteria.date_bucket, check_in, self.today()),
            // No readable date: keep the reservation visible.
            None => true,
        };

        let search_match = match &criteria.search_text {
            Some(term) => reservation.search_text.contains(term.as_str()),
            None => true,
        };

        status_match && date_match && search_match
    }

    fn order<'a>(
        &self,
        criteria: &ReservationCriteria,
        mut visible: Vec<&'a Reservation>,
    ) -> Vec<&'a Reservation> {
        // `sort_by` is stable, equal keys keep their input order.
        visible.sort_by(|a, b| compare(criteria.sort_key, a, b));
        visible
    }

    fn breakdown(&self, visible: &[&Reservation]) -> Option<StatusBreakdown> {
        Some(StatusBreakdown::tally(
            visible.iter().map(|reservation| &reservation.status),
        ))
    }
}

/// Whether a check-in date falls in `bucket`, relative to `today`.
pub fn in_date_bucket(bucket: DateBucket, check_in: NaiveDate, today: NaiveDate) -> bool {
    match bucket {
        DateBucket::All => true,
        DateBucket::Upcoming => check_in >= today,
        DateBucket::Current => check_in.month() == today.month() && check_in.year() == today.year(),
        DateBucket::Past => check_in < today,
        DateBucket::ThisYear => check_in.year() == today.year(),
    }
}

fn compare(key: SortKey, a: &Reservation, b: &Reservation) -> Ordering {
    match key {
        SortKey::DateDesc => date_key(b).cmp(&date_key(a)),
        SortKey::DateAsc => date_key(a).cmp(&date_key(b)),
        SortKey::AmountDesc => amount_key(b).total_cmp(&amount_key(a)),
        SortKey::AmountAsc => amount_key(a).total_cmp(&amount_key(b)),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn date_key(reservation: &Reservation) -> NaiveDate {
    reservation.check_in.unwrap_or_else(epoch)
}

fn amount_key(reservation: &Reservation) -> f64 {
    reservation.amount.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomsift_types::ReservationStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(id: &str, status: ReservationStatus, check_in: Option<NaiveDate>, amount: Option<f64>) -> Reservation {
        Reservation::new(id, status, check_in, amount)
    }

    #[test]
    fn test_date_buckets_relative_to_today() {
        let today = date(2024, 6, 15);
        assert!(in_date_bucket(DateBucket::Upcoming, date(2024, 6, 15), today));
        assert!(!in_date_bucket(DateBucket::Upcoming, date(2024, 6, 14), today));
        assert!(in_date_bucket(DateBucket::Past, date(2024, 6, 14), today));
        assert!(!in_date_bucket(DateBucket::Past, date(2024, 6, 15), today));
        assert!(in_date_bucket(DateBucket::Current, date(2024, 6, 1), today));
        assert!(!in_date_bucket(DateBucket::Current, date(2023, 6, 1), today));
        assert!(in_date_bucket(DateBucket::ThisYear, date(2024, 12, 31), today));
        assert!(!in_date_bucket(DateBucket::ThisYear, date(2025, 1, 1), today));
        assert!(in_date_bucket(DateBucket::All, date(1999, 1, 1), today));
    }

    #[test]
    fn test_missing_date_is_never_hidden_by_bucket() {
        let engine = ReservationEngine::fixed(date(2024, 6, 15));
        let undated = reservation("R-1", ReservationStatus::Activa, None, None);
        for bucket in [
            DateBucket::Upcoming,
            DateBucket::Current,
            DateBucket::Past,
            DateBucket::ThisYear,
        ] {
            let criteria = ReservationCriteria::new().date_bucket(bucket);
            assert!(engine.visible(&criteria, &undated), "{bucket} hid undated item");
        }
    }

    #[test]
    fn test_status_must_match_exactly() {
        let engine = ReservationEngine::fixed(date(2024, 6, 15));
        let pending = reservation("R-1", ReservationStatus::Pendiente, None, None);
        assert!(engine.visible(&ReservationCriteria::new().status("pendiente"), &pending));
        assert!(!engine.visible(&ReservationCriteria::new().status("pend"), &pending));
        assert!(engine.visible(&ReservationCriteria::new().status("all"), &pending));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let engine = ReservationEngine::fixed(date(2024, 6, 15));
        let item = reservation("R-9", ReservationStatus::Confirmada, None, None)
            .with_searchable("Suite Presidencial");
        assert!(engine.visible(&ReservationCriteria::new().search("PRESIDENCIAL"), &item));
        assert!(!engine.visible(&ReservationCriteria::new().search("individual"), &item));
    }

    #[test]
    fn test_unparseable_keys_sort_as_minimum() {
        let engine = ReservationEngine::fixed(date(2024, 6, 15));
        let dated = reservation("dated", ReservationStatus::Activa, Some(date(1990, 1, 1)), Some(5.0));
        let blank = reservation("blank", ReservationStatus::Activa, None, None);
        let items = vec![&blank, &dated];

        let by_date = engine.order(&ReservationCriteria::new().sort_by(SortKey::DateDesc), items.clone());
        assert_eq!(by_date[0].id.as_str(), "dated");

        let by_amount = engine.order(&ReservationCriteria::new().sort_by(SortKey::AmountAsc), items);
        assert_eq!(by_amount[0].id.as_str(), "blank");
    }

    #[test]
    fn test_status_sort_is_stable() {
        let engine = ReservationEngine::fixed(date(2024, 6, 15));
        let a = reservation("a", ReservationStatus::Pendiente, None, None);
        let b = reservation("b", ReservationStatus::Confirmada, None, None);
        let c = reservation("c", ReservationStatus::Pendiente, None, None);
        let d = reservation("d", ReservationStatus::Confirmada, None, None);

        let ordered = engine.order(
            &ReservationCriteria::new().sort_by(SortKey::Status),
            vec![&a, &b, &c, &d],
        );
        let ids: Vec<&str> = ordered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_local_today_is_pinned_for_one_evaluation() {
        let pinned = ReservationEngine::local().for_evaluation();
        assert!(matches!(pinned.today, Today::Fixed(_)));

        let fixed = ReservationEngine::fixed(date(2024, 6, 15));
        assert_eq!(fixed.for_evaluation().today, Today::Fixed(date(2024, 6, 15)));
    }
}
