//! # Presentation Layer
//!
//! Turns a settled listing into console output.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (replay)       (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** Prices are numbers and dates are ISO dates;
//!   `--format json` is an API and always dumps the full ViewModel.
//! * **Presenters read the view, not the engine.** What is listed is what the
//!   `MemoryView` ended up displaying, in its on-screen order.
//! * **Views own layout and styling.** Colours are applied only when stdout is
//!   a terminal.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Decide when to show a suggestion | **`presenters/`** |
//! | Change a column or a colour | **`views/`** |
//! | Format an amount or a date | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
