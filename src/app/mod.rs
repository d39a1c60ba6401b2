//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / host event → handle_event → AppState commands → Actions → host calls
//!        ↑                                                           │
//!        └────────────── web reply / timer events ───────────────────┘
//! ```
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`form`]: Search criteria form
//! - [`handler`]: Event processing and key bindings per input mode
//! - [`modes`]: Input modes
//! - [`session`]: Search session state machine
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use form::{FieldSpec, SearchForm};
pub use handler::{apply_modifiers, handle_event, Event, KeyModifiers};
pub use modes::InputMode;
pub use session::{SearchSession, SessionStatus};
pub use state::{AppState, SearchSettings};
