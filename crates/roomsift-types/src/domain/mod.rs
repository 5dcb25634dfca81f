mod item;
mod reservation;
mod room;

pub use item::*;
pub use reservation::*;
pub use room::*;
