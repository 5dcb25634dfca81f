// Engine module - Pure filtering and ordering decisions
// This layer sits between typed item records (types) and the presenter (runtime).
// Nothing here touches the view; every function is deterministic for a given
// criteria, item set and calendar day.

mod breakdown;
mod evaluation;
mod reservation;
mod room;

pub use breakdown::StatusBreakdown;
pub use evaluation::{evaluate, Decision, Evaluation};
pub use reservation::{in_date_bucket, ReservationEngine, Today};
pub use room::RoomEngine;

use roomsift_types::{FilterCriteria, ListItem};

/// Visibility and ordering rules for one kind of listing.
///
/// Implementations must be pure: the same criteria and item always give the
/// same answer, and items are never mutated.
pub trait FilterEngine: Clone {
    type Item: ListItem;
    type Criteria: FilterCriteria;

    /// The engine one evaluation runs with. Anything read from the
    /// environment (the clock) is resolved here, once per evaluation.
    fn for_evaluation(&self) -> Self {
        self.clone()
    }

    /// Whether `item` satisfies every active constraint.
    fn visible(&self, criteria: &Self::Criteria, item: &Self::Item) -> bool;

    /// Display order of the visible subset. Must be a stable sort of the
    /// input; the default keeps the input order.
    fn order<'a>(
        &self,
        _criteria: &Self::Criteria,
        visible: Vec<&'a Self::Item>,
    ) -> Vec<&'a Self::Item> {
        visible
    }

    /// Per-status tally of the visible items, for listings that show one.
    fn breakdown(&self, _visible: &[&Self::Item]) -> Option<StatusBreakdown> {
        None
    }
}
