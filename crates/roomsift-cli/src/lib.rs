// roomsift CLI
//
// Stands in for the listing page: an item source file plays the part of the
// server-rendered cards, command-line flags play the input controls, and a
// MemoryView plays the list container. The output is whatever the page
// would show after the controls settle.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, ReservationsArgs, RoomsArgs};
pub use commands::run;
pub use logging::init_logging;
