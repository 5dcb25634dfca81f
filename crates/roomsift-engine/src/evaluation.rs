use roomsift_types::{ItemId, ListItem};
use serde::Serialize;

use crate::{FilterEngine, StatusBreakdown};

/// Visibility decision for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub id: ItemId,
    pub visible: bool,
}

/// Outcome of running the engine over a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// One decision per input item, in input order.
    pub decisions: Vec<Decision>,
    /// Visible items in display order.
    pub order: Vec<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<StatusBreakdown>,
}

impl Evaluation {
    pub fn visible_count(&self) -> usize {
        self.order.len()
    }

    /// Position of `id` in the display order, if visible.
    pub fn rank(&self, id: &ItemId) -> Option<usize> {
        self.order.iter().position(|visible| visible == id)
    }
}

/// Decide visibility for every item, then order the visible subset.
pub fn evaluate<E: FilterEngine>(
    engine: &E,
    criteria: &E::Criteria,
    items: &[E::Item],
) -> Evaluation {
    let engine = engine.for_evaluation();
    let mut decisions = Vec::with_capacity(items.len());
    let mut visible = Vec::new();

    for item in items {
        let shown = engine.visible(criteria, item);
        decisions.push(Decision {
            id: item.id().clone(),
            visible: shown,
        });
        if shown {
            visible.push(item);
        }
    }

    let breakdown = engine.breakdown(&visible);
    let order = engine
        .order(criteria, visible)
        .into_iter()
        .map(|item| item.id().clone())
        .collect();

    Evaluation {
        decisions,
        order,
        breakdown,
    }
}
