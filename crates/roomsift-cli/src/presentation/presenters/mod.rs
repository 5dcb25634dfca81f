mod listing;

pub use listing::{present_reservations, present_rooms};
