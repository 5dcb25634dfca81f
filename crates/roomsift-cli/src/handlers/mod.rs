pub mod config;
pub mod reservations;
pub mod rooms;

use roomsift_engine::FilterEngine;
use roomsift_runtime::{ListPresenter, LogNotifier, MemoryView, PresenterSettings, UiEvent};
use roomsift_types::ListItem;
use std::time::Instant;
use tracing::debug;

/// Run the listing the way a page would: all items rendered, then each
/// control event in turn, then every pending timer until the view settles.
fn replay<E: FilterEngine>(
    engine: E,
    items: Vec<E::Item>,
    settings: PresenterSettings,
    events: Vec<UiEvent<E::Item>>,
) -> ListPresenter<E, MemoryView> {
    let view = MemoryView::with_items(items.iter().map(ListItem::id));
    let settings = batch_settings(settings);
    let mut presenter = ListPresenter::new(engine, view, LogNotifier, items, settings);

    let now = Instant::now();
    presenter.start(now);
    for event in events {
        presenter.handle(event, now);
    }
    let fired = presenter.settle();
    debug!(
        fired,
        evaluations = presenter.evaluations(),
        "listing settled"
    );
    presenter
}

/// Configured timing, minus the transitions a one-shot render cannot show.
fn batch_settings(settings: PresenterSettings) -> PresenterSettings {
    let timing = settings.timing.clone().without_transitions();
    settings.with_timing(timing)
}

/// Control events for the flags that were given, in declaration order.
fn control_events<I>(controls: &[(&str, &Option<String>)]) -> Vec<UiEvent<I>> {
    controls
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|value| UiEvent::control(name, value.clone()))
        })
        .collect()
}
