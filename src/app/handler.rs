//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point through which the plugin runtime
//! changes [`AppState`]. Key events are interpreted according to the current
//! [`InputMode`]; host events (web replies, timers, permission results) are
//! forwarded to the session commands regardless of mode.
//!
//! Each call returns whether the view changed, plus the side effects the
//! runtime must execute.

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use std::collections::BTreeMap;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A printable key.
    Char(char),
    Backspace,
    Tab,
    /// Shift-Tab.
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,

    /// Reply to a search request.
    SearchResponse {
        /// HTTP status code reported by the host.
        status: u16,
        body: Vec<u8>,
        /// Context map attached when the request was issued.
        context: BTreeMap<String, String>,
    },

    /// A timeout timer fired.
    Timer,

    /// Outcome of the permission request made at load.
    PermissionsResult {
        /// Whether web access was granted.
        granted: bool,
    },
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Resolves a key press with its modifiers into the event it triggers.
///
/// `Ctrl+n`/`Ctrl+p` move down/up and `Shift+Tab` moves back. Any other
/// chord holding Ctrl or Alt is unbound and yields `None`, so it neither
/// types into the form nor fires a browse command.
#[must_use]
pub fn apply_modifiers(key: Event, modifiers: KeyModifiers) -> Option<Event> {
    match key {
        Event::Char('n') if modifiers.ctrl && !modifiers.alt => Some(Event::Down),
        Event::Char('p') if modifiers.ctrl && !modifiers.alt => Some(Event::Up),
        _ if modifiers.ctrl || modifiers.alt => None,
        Event::Tab if modifiers.shift => Some(Event::BackTab),
        key => Some(key),
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for commands that can
/// fail without ending the plugin.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_kind(event), mode = ?state.input_mode).entered();

    match event {
        Event::SearchResponse {
            status,
            body,
            context,
        } => Ok((state.handle_response(*status, body, context), vec![])),
        Event::Timer => Ok((state.handle_timer(), vec![])),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
            } else {
                tracing::warn!("web access denied, searches will fail");
            }
            Ok((false, vec![]))
        }
        key => match state.input_mode {
            InputMode::Form => Ok(handle_form_key(state, key)),
            InputMode::Browse => Ok(handle_browse_key(state, key)),
            InputMode::LetterPick => Ok(handle_letter_key(state, key)),
        },
    }
}

/// Event name without payload, so response bodies stay out of span fields.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::Tab => "tab",
        Event::BackTab => "back_tab",
        Event::Up => "up",
        Event::Down => "down",
        Event::Left => "left",
        Event::Right => "right",
        Event::Enter => "enter",
        Event::Escape => "escape",
        Event::SearchResponse { .. } => "search_response",
        Event::Timer => "timer",
        Event::PermissionsResult { .. } => "permissions_result",
    }
}

fn handle_form_key(state: &mut AppState, key: &Event) -> (bool, Vec<Action>) {
    match key {
        Event::Char(c) => {
            state.form.push_char(*c);
            (true, vec![])
        }
        Event::Backspace => {
            state.form.backspace();
            (true, vec![])
        }
        Event::Tab | Event::Down => {
            state.form.focus_next();
            (true, vec![])
        }
        Event::BackTab | Event::Up => {
            state.form.focus_prev();
            (true, vec![])
        }
        Event::Enter => {
            let actions = state.submit_search();
            (true, actions)
        }
        Event::Escape => {
            state.input_mode = InputMode::Browse;
            (true, vec![])
        }
        _ => (false, vec![]),
    }
}

fn handle_browse_key(state: &mut AppState, key: &Event) -> (bool, Vec<Action>) {
    match key {
        Event::Char('j') | Event::Down => {
            state.move_card_down();
            (true, vec![])
        }
        Event::Char('k') | Event::Up => {
            state.move_card_up();
            (true, vec![])
        }
        Event::Char(' ') | Event::Enter => (state.toggle_card(), vec![]),
        Event::Char('l') | Event::Right => (state.next_page(), vec![]),
        Event::Char('h') | Event::Left => (state.prev_page(), vec![]),
        Event::Char('g') => (state.first_page(), vec![]),
        Event::Char('G') => (state.last_page(), vec![]),
        Event::Char('f') => {
            if state.results.is_empty() {
                return (false, vec![]);
            }
            state.input_mode = InputMode::LetterPick;
            (true, vec![])
        }
        Event::Char('a') => {
            state.show_all();
            (true, vec![])
        }
        Event::Char('/' | 'i') | Event::Tab => {
            state.input_mode = InputMode::Form;
            (true, vec![])
        }
        Event::Char('c') => {
            state.clear();
            (true, vec![])
        }
        Event::Char('q') => (false, vec![Action::CloseFocus]),
        _ => (false, vec![]),
    }
}

fn handle_letter_key(state: &mut AppState, key: &Event) -> (bool, Vec<Action>) {
    match key {
        Event::Char('*') => {
            state.show_all();
            state.input_mode = InputMode::Browse;
            (true, vec![])
        }
        Event::Char(c) if c.is_alphabetic() => {
            state.select_letter(*c);
            state.input_mode = InputMode::Browse;
            (true, vec![])
        }
        Event::Escape => {
            state.input_mode = InputMode::Browse;
            (true, vec![])
        }
        _ => (false, vec![]),
    }
}
