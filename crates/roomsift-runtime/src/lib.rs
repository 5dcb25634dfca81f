//! Runtime layer: everything between user input and the rendered listing.
//!
//! ```text
//! [ UiEvent ] --> [ ControlSet ] --> (debounce?) --> [ FilterEngine ] --> [ ListPresenter ] --> [ ListView ]
//!                  (bound fix)        (search only)      (pure)             (reconcile)          (DOM)
//! ```
//!
//! Single-threaded and cooperative. The host feeds events through
//! [`ListPresenter::handle`] and drives time through [`ListPresenter::tick`];
//! nothing blocks and no thread is spawned.

pub mod config;
pub mod controls;
pub mod debounce;
pub mod error;
pub mod notify;
pub mod presenter;
pub mod source;
pub mod timer;
pub mod view;

pub use config::{Config, ListLabels, MessageConfig, PresenterSettings, TimingConfig};
pub use controls::{ControlSet, Correction};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use notify::{LogNotifier, NotificationLevel, Notifier};
pub use presenter::{DisplayState, ListPresenter, QuickFilter, UiEvent};
pub use source::{load_reservations, load_rooms, parse_reservations, parse_rooms};
pub use timer::TimerQueue;
pub use view::{ListView, MemoryView, ViewCall};
