use crate::presentation::view_models::{
    BreakdownViewModel, CommandResultViewModel, Guidance, ListingKind, ListingViewModel,
    PlaceholderViewModel, ReservationEntryViewModel, RoomEntryViewModel, StatusBadge,
};
use roomsift_engine::{FilterEngine, ReservationEngine, RoomEngine, StatusBreakdown};
use roomsift_runtime::{ListPresenter, MemoryView, Notifier};
use roomsift_types::{ItemId, ListItem, Reservation, Room};
use serde::Serialize;
use std::collections::HashMap;

pub fn present_rooms<N: Notifier>(
    presenter: &ListPresenter<RoomEngine, MemoryView, N>,
) -> CommandResultViewModel<ListingViewModel<RoomEntryViewModel>> {
    present_listing(presenter, ListingKind::Rooms, room_entry)
}

pub fn present_reservations<N: Notifier>(
    presenter: &ListPresenter<ReservationEngine, MemoryView, N>,
) -> CommandResultViewModel<ListingViewModel<ReservationEntryViewModel>> {
    present_listing(presenter, ListingKind::Reservations, reservation_entry)
}

fn present_listing<E, N, T>(
    presenter: &ListPresenter<E, MemoryView, N>,
    listing: ListingKind,
    entry: impl Fn(&E::Item) -> T,
) -> CommandResultViewModel<ListingViewModel<T>>
where
    E: FilterEngine,
    N: Notifier,
    T: Serialize,
{
    let view = presenter.view();
    let by_id: HashMap<&ItemId, &E::Item> = presenter
        .items()
        .iter()
        .map(|item| (item.id(), item))
        .collect();

    let items: Vec<T> = view
        .settled()
        .into_iter()
        .filter_map(|id| by_id.get(id).copied())
        .map(|item| entry(item))
        .collect();

    let controls = presenter
        .controls()
        .values()
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let count_label = view.count_label().unwrap_or_default().to_string();
    let visible_count = items.len();

    let content = ListingViewModel {
        listing,
        count_label: count_label.clone(),
        visible_count,
        total_count: presenter.items().len(),
        items,
        placeholder: view.placeholder().map(|placeholder| PlaceholderViewModel {
            title: placeholder.title.clone(),
            hint: placeholder.hint.clone(),
        }),
        breakdown: view.breakdown().map(breakdown_view),
        controls,
    };

    let has_filters = !content.controls.is_empty();
    let result = CommandResultViewModel::new(content);

    if visible_count > 0 {
        return result.with_badge(StatusBadge::success(count_label));
    }

    let result = result.with_badge(StatusBadge::info(count_label));
    if has_filters {
        result.with_suggestion(
            Guidance::new("Run without filters to list every item")
                .with_command(format!("roomsift {} <FILE>", listing.command())),
        )
    } else {
        result
    }
}

fn room_entry(room: &Room) -> RoomEntryViewModel {
    RoomEntryViewModel {
        id: room.id.to_string(),
        room_type: room.room_type.clone(),
        price: room.price,
        capacity: room.capacity,
        title: room.title.clone(),
    }
}

fn reservation_entry(reservation: &Reservation) -> ReservationEntryViewModel {
    ReservationEntryViewModel {
        id: reservation.id.to_string(),
        status: reservation.status.to_string(),
        check_in: reservation.check_in,
        amount: reservation.amount,
    }
}

fn breakdown_view(breakdown: &StatusBreakdown) -> BreakdownViewModel {
    BreakdownViewModel {
        total: breakdown.total,
        confirmada: breakdown.confirmada,
        pendiente: breakdown.pendiente,
        activa: breakdown.activa,
        cancelada: breakdown.cancelada,
        other: breakdown.other,
    }
}
