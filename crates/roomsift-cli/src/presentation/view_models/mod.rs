pub mod common;
pub mod listing;
pub mod result;

pub use common::{CreateView, Guidance, StatusBadge, StatusLevel};
pub use listing::{
    BreakdownViewModel, ListingKind, ListingViewModel, PlaceholderViewModel,
    ReservationEntryViewModel, RoomEntryViewModel,
};
pub use result::CommandResultViewModel;
