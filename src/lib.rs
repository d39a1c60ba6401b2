//! recordseek: a Zellij plugin for searching a remote record service.
//!
//! The plugin posts search criteria to an HTTP endpoint and presents the
//! returned records:
//! - Paginated collapsible cards (10 per page by default)
//! - An alphabet bar filtering by the first letter of each record's name
//! - One request at a time, with a configurable timeout
//! - Server error text surfaced verbatim, previous results kept on failure

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling per input mode                    │
//! │  - Search session state machine                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Results       │   │ Remote        │
//! │ (ui/)         │   │ (results/)    │   │ (remote/)     │
//! │ - Rendering   │   │ - Store       │   │ - Request     │
//! │ - Theming     │   │ - Filter      │   │ - Response    │
//! │ - Components  │   │ - Pagination  │   │   decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Record model and errors (domain/)                │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Native**: the library and its tests build on any host

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod remote;
pub mod results;

pub mod ui;

pub mod observability;

pub use app::{
    apply_modifiers, handle_event, Action, AppState, Event, InputMode, KeyModifiers, SearchSettings,
};
pub use domain::{Result, SearchError, SearchRecord};
pub use ui::Theme;

use app::FieldSpec;
use results::PAGE_SIZE;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/recordseek.wasm" {
///     endpoint "http://127.0.0.1:5000/search"
///     fields "nombres:Nombres,apellidos:Apellidos,dui:DUI"
///     required_fields "dui"
///     display_field "NombreCompleto"
///     detail_fields "Dui:DUI,Sexo,Edad,Telefono:Teléfono"
///     page_size "10"
///     request_timeout "30"
///     theme "catppuccin-latte"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Endpoint, form, card and paging settings.
    pub search: SearchSettings,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` resolves under `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Parsing is lenient: a missing or unusable value falls back to its
    /// default.
    ///
    /// - `fields`, `detail_fields`: comma-separated `key[:Label]` lists
    /// - `required_fields`: comma-separated keys from `fields`
    /// - `page_size`: positive integer, default 10
    /// - `request_timeout`: seconds, default 30, `0` disables
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = SearchSettings::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let mut fields = value("fields")
            .map(parse_field_list)
            .filter(|fields| !fields.is_empty())
            .unwrap_or(defaults.fields);

        if let Some(required) = value("required_fields") {
            for name in required.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                match fields.iter_mut().find(|f| f.name == name) {
                    Some(field) => field.required = true,
                    None => tracing::warn!(field = %name, "required field is not a form field"),
                }
            }
        }

        let page_size = match value("page_size").map(str::parse::<usize>) {
            Some(Ok(size)) if size > 0 => size,
            None => PAGE_SIZE,
            Some(_) => {
                tracing::warn!(page_size = ?config.get("page_size"), "invalid page_size, using default");
                PAGE_SIZE
            }
        };

        let request_timeout = match value("request_timeout").map(str::parse::<u64>) {
            Some(Ok(seconds)) => seconds,
            None => defaults.request_timeout,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "invalid request_timeout, using default");
                defaults.request_timeout
            }
        };

        Self {
            search: SearchSettings {
                endpoint: value("endpoint").map_or(defaults.endpoint, String::from),
                fields,
                display_field: value("display_field").map_or(defaults.display_field, String::from),
                detail_fields: value("detail_fields").map(parse_field_list).unwrap_or_default(),
                page_size,
                request_timeout,
            },
            theme_name: value("theme").map(String::from),
            theme_file: value("theme_file").map(String::from),
            trace_level: value("trace_level").map(String::from),
        }
    }
}

fn parse_field_list(raw: &str) -> Vec<FieldSpec> {
    raw.split(',').filter_map(FieldSpec::parse).collect()
}

/// Resolves the configured theme: `theme_file`, then `theme`, then the
/// default, logging whichever step failed.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(infrastructure::resolve_host_path(theme_file)) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file"),
        }
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial application state from configuration.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.search.endpoint,
        fields = config.search.fields.len(),
        page_size = config.search.page_size,
        request_timeout = config.search.request_timeout,
        "initializing recordseek plugin"
    );

    AppState::new(config.search.clone(), load_theme(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "https://records.example/api/search"),
            ("fields", "nombres:Nombres, dui:DUI ,placa"),
            ("required_fields", "dui"),
            ("display_field", "FullName"),
            ("detail_fields", "Dui:DUI,Edad"),
            ("page_size", "25"),
            ("request_timeout", "0"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        let search = &config.search;
        assert_eq!(search.endpoint, "https://records.example/api/search");
        assert_eq!(
            search.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["nombres", "dui", "placa"]
        );
        assert!(search.fields[1].required);
        assert!(!search.fields[0].required);
        assert_eq!(search.fields[2].label, "Placa");
        assert_eq!(search.display_field, "FullName");
        assert_eq!(search.detail_fields.len(), 2);
        assert_eq!(search.page_size, 25);
        assert_eq!(search.request_timeout, 0);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "0"),
            ("request_timeout", "soon"),
            ("fields", " , "),
        ]));
        assert_eq!(config.search.page_size, PAGE_SIZE);
        assert_eq!(config.search.request_timeout, 30);
        assert_eq!(config.search.fields, SearchSettings::default().fields);
    }

    #[test]
    fn theme_resolution_order() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config), Theme::default());

        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "from-file");
    }

    #[test]
    fn initialize_starts_idle_in_form_mode() {
        let state = initialize(&Config::default());
        assert_eq!(state.input_mode, InputMode::Form);
        assert_eq!(state.session.status(), app::SessionStatus::Idle);
        assert_eq!(state.form.fields().len(), 8);
    }
}
