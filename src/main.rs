//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the recordseek library
//! and the Zellij plugin system. It implements `ZellijPlugin`, translates
//! host events into library events and carries out the library's actions
//! through the host API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, `Timer` and
//!    `PermissionRequestResult` events
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → key events (`Event::Char`, `Event::Enter`, ...)
//! - `WebRequestResult` → `Event::SearchResponse { status, body, context }`
//! - `Timer` → `Event::Timer`
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - Other Ctrl/Alt chords are ignored
//!
//! In the search form:
//! - Characters: Type into the focused field
//! - `Tab`/`Shift+Tab`: Next/previous field
//! - `Enter`: Submit
//! - `Esc`: Browse results
//!
//! While browsing:
//! - `j`/`k`: Move between cards
//! - `Space`/`Enter`: Expand or collapse card
//! - `h`/`l`, `g`/`G`: Page navigation
//! - `f`: Pick a letter, `a`: Show all
//! - `/`: Back to the form, `c`: Clear
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use recordseek::{apply_modifiers, handle_event, Action, Config, Event, KeyModifiers};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "recordseek is a Zellij plugin; build it with `cargo build --target wasm32-wasip1` and load the .wasm from Zellij"
    );
}

/// Plugin state wrapper.
#[cfg(target_family = "wasm")]
struct State {
    /// Core application state from library layer.
    app: recordseek::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: recordseek::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue search requests
    /// - `ReadApplicationState`: Receive timer and key events
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        recordseek::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.search.endpoint, "parsed configuration");
        self.app = recordseek::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
        ]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::SearchResponse {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Timer,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        recordseek::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Mode-dependent meaning is left to the library; only the key identity
    /// and its modifiers are translated here.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        let bare = match key.bare_key {
            BareKey::Down => Event::Down,
            BareKey::Up => Event::Up,
            BareKey::Left => Event::Left,
            BareKey::Right => Event::Right,
            BareKey::Tab => Event::Tab,
            BareKey::Enter => Event::Enter,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        };

        apply_modifiers(
            bare,
            KeyModifiers {
                ctrl: key.key_modifiers.contains(&KeyModifier::Ctrl),
                alt: key.key_modifiers.contains(&KeyModifier::Alt),
                shift: key.key_modifiers.contains(&KeyModifier::Shift),
            },
        )
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `SendSearch`: POST the request through the host
    /// - `ScheduleTimeout`: Arm a host timer
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SendSearch(request) => {
                tracing::debug!(request_id = request.id, url = %request.url, "sending search request");
                web_request(
                    &request.url,
                    HttpVerb::Post,
                    request.headers,
                    request.body,
                    request.context,
                );
            }
            Action::ScheduleTimeout {
                request_id,
                seconds,
            } => {
                tracing::debug!(request_id, seconds, "arming request timeout");
                #[allow(clippy::cast_precision_loss)]
                set_timeout(seconds as f64);
            }
        }
    }
}
