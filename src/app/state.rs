//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It composes the
//! search form, the [`SearchSession`] lifecycle, and the [`ResultStore`] with the
//! transient browsing state (card cursor, expanded cards, input mode).
//!
//! # Commands
//!
//! All mutations go through the command methods below; the event handler maps
//! key presses and host events onto them:
//!
//! - [`AppState::submit_search`] issues a request (rejected while Loading)
//! - [`AppState::handle_response`] / [`AppState::handle_timer`] finish it
//! - [`AppState::select_letter`], [`AppState::show_all`] filter
//! - [`AppState::next_page`] and friends paginate
//! - [`AppState::clear`] resets everything but an in-flight request
//!
//! Filtering and pagination never issue requests; they only change what
//! [`AppState::compute_viewmodel`] derives from the store.

use super::form::{FieldSpec, SearchForm};
use super::modes::InputMode;
use super::session::{Completion, SearchSession, SessionStatus};
use crate::app::Action;
use crate::domain::SearchRecord;
use crate::remote::{decode_response, request_id_from_context, SearchRequest, TraceContext};
use crate::results::{ResultStore, PAGE_SIZE};
use crate::ui::helpers::{card_rows, form_rows};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, EmptyState, FooterInfo, FormFieldView, FormView, HeaderInfo, LetterBar, PageInfo,
    StatusKind, StatusLine, UIViewModel,
};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Default search service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search";

/// Default display-name field of a record.
pub const DEFAULT_DISPLAY_FIELD: &str = "NombreCompleto";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Static search settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// URL the search is POSTed to.
    pub endpoint: String,
    /// Form fields, in submission order.
    pub fields: Vec<FieldSpec>,
    /// Record field used for titles and the alphabet facet.
    pub display_field: String,
    /// Fields listed in expanded cards; empty lists every field.
    pub detail_fields: Vec<FieldSpec>,
    pub page_size: usize,
    /// Seconds before a pending request fails; `0` disables the timeout.
    pub request_timeout: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fields: default_fields(),
            display_field: DEFAULT_DISPLAY_FIELD.to_string(),
            detail_fields: Vec::new(),
            page_size: PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Criteria accepted by the stock search service.
#[must_use]
pub fn default_fields() -> Vec<FieldSpec> {
    [
        "nombres:Nombres",
        "apellidos:Apellidos",
        "dui:DUI",
        "telefono:Teléfono",
        "correo:Correo",
        "direccion:Dirección",
        "placa:Placa",
        "nombre_empresa:Empresa",
    ]
    .iter()
    .filter_map(|raw| FieldSpec::parse(raw))
    .collect()
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search criteria being edited.
    pub form: SearchForm,

    /// Lifecycle of the single outstanding search.
    pub session: SearchSession,

    /// Records of the last successful search plus filter and page.
    pub results: ResultStore,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Card cursor, relative to the current page.
    pub selected_card: usize,

    /// Expanded cards, as indices into the current page.
    ///
    /// Cleared whenever the visible page changes.
    pub expanded: BTreeSet<usize>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    settings: SearchSettings,

    /// Request ids whose timeout timer is armed, in firing order.
    ///
    /// Every request gets the same delay, so host timers fire in submission
    /// order and each `Timer` event belongs to the front entry.
    pending_timers: VecDeque<u64>,
}

impl AppState {
    /// Creates the state for the given settings and theme.
    ///
    /// Starts in Form mode with an empty result store and an Idle session.
    #[must_use]
    pub fn new(settings: SearchSettings, theme: Theme) -> Self {
        Self {
            form: SearchForm::new(settings.fields.clone()),
            session: SearchSession::new(),
            results: ResultStore::new(settings.display_field.clone(), settings.page_size),
            input_mode: InputMode::Form,
            selected_card: 0,
            expanded: BTreeSet::new(),
            theme,
            settings,
            pending_timers: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Submits the form.
    ///
    /// Returns the actions that issue the request, or nothing when the
    /// submission is rejected: a search is already in flight, or a required
    /// field is blank (the form then carries a hint).
    pub fn submit_search(&mut self) -> Vec<Action> {
        if self.session.is_loading() {
            tracing::debug!("submit ignored while loading");
            return vec![];
        }

        let Some(criteria) = self.form.submission() else {
            return vec![];
        };

        let Some(id) = self.session.begin() else {
            return vec![];
        };

        let span = tracing::info_span!("search_submit", request_id = id, fields = criteria.len());
        let _guard = span.enter();

        let request = match SearchRequest::new(id, &self.settings.endpoint, &criteria) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build search request");
                self.session.complete(id, Err(e), &mut self.results);
                return vec![];
            }
        };

        self.collapse_cards();
        tracing::info!(endpoint = %self.settings.endpoint, "search submitted");

        let mut actions = vec![Action::SendSearch(request)];
        if self.settings.request_timeout > 0 {
            self.pending_timers.push_back(id);
            actions.push(Action::ScheduleTimeout {
                request_id: id,
                seconds: self.settings.request_timeout,
            });
        }
        actions
    }

    /// Applies a reply from the host. Returns whether the view changed.
    ///
    /// Replies without a request id, or for a request that is no longer in
    /// flight, are dropped.
    pub fn handle_response(
        &mut self,
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> bool {
        let Some(id) = request_id_from_context(context) else {
            tracing::debug!(status, "response without request id ignored");
            return false;
        };

        let trace = TraceContext::from_context(context);
        let span = tracing::info_span!(
            "search_response",
            request_id = id,
            status,
            body_len = body.len(),
            submit_trace_id = trace.as_ref().map_or("", |t| t.trace_id.as_str())
        );
        let _guard = span.enter();

        let outcome = decode_response(status, body);
        match self.session.complete(id, outcome, &mut self.results) {
            Completion::Stale => false,
            Completion::Succeeded { count } => {
                tracing::info!(record_count = count, "search completed");
                self.form.reset();
                self.collapse_cards();
                self.input_mode = InputMode::Browse;
                true
            }
            Completion::Failed { message } => {
                tracing::warn!(error = %message, "search failed");
                true
            }
        }
    }

    /// Handles a host timer. Returns whether the view changed.
    pub fn handle_timer(&mut self) -> bool {
        let Some(id) = self.pending_timers.pop_front() else {
            return false;
        };
        let message = format!(
            "no response within {} seconds",
            self.settings.request_timeout
        );
        let timed_out = self.session.time_out(id, message);
        if timed_out {
            tracing::warn!(request_id = id, "search timed out");
        }
        timed_out
    }

    /// Toggles the letter filter. Non-letters are ignored.
    pub fn select_letter(&mut self, letter: char) {
        let active = self.results.select_letter(letter);
        tracing::debug!(letter = %letter, active = ?active, "letter selected");
        self.collapse_cards();
    }

    /// Clears the letter filter.
    pub fn show_all(&mut self) {
        self.results.show_all();
        self.collapse_cards();
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.results.next_page();
        if moved {
            self.collapse_cards();
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.results.prev_page();
        if moved {
            self.collapse_cards();
        }
        moved
    }

    pub fn first_page(&mut self) -> bool {
        self.jump_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.jump_to_page(self.results.page_count())
    }

    fn jump_to_page(&mut self, page: usize) -> bool {
        let before = self.results.current_page();
        let after = self.results.go_to_page(page);
        if before != after {
            self.collapse_cards();
        }
        before != after
    }

    /// Resets form, results, filter, page and error.
    ///
    /// A request in flight is not cancelled; its reply still lands.
    pub fn clear(&mut self) {
        tracing::debug!(loading = self.session.is_loading(), "clearing view");
        self.form.reset();
        self.results.clear();
        self.session.reset();
        self.collapse_cards();
        self.input_mode = InputMode::Form;
    }

    pub fn move_card_down(&mut self) {
        let count = self.visible_card_count();
        if count > 0 {
            self.selected_card = (self.selected_card + 1) % count;
        }
    }

    pub fn move_card_up(&mut self) {
        let count = self.visible_card_count();
        if count > 0 {
            self.selected_card = self.selected_card.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Expands or collapses the card under the cursor.
    pub fn toggle_card(&mut self) -> bool {
        if self.selected_card >= self.visible_card_count() {
            return false;
        }
        if !self.expanded.remove(&self.selected_card) {
            self.expanded.insert(self.selected_card);
        }
        true
    }

    /// Number of cards the current frame shows.
    #[must_use]
    pub fn visible_card_count(&self) -> usize {
        if self.session.is_loading() {
            0
        } else {
            self.results.current_page_records().len()
        }
    }

    fn collapse_cards(&mut self) {
        self.selected_card = 0;
        self.expanded.clear();
    }

    /// Computes the view model for a `rows` x `cols` screen.
    ///
    /// Cards are windowed so the card under the cursor is always visible when
    /// expanded cards do not all fit.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let loading = self.session.is_loading();
        let showing_results = !loading && !self.results.is_empty();

        let cards = if loading {
            vec![]
        } else {
            let budget = card_rows(rows, form_rows(self.form.fields().len(), cols));
            self.window_cards(budget)
        };

        UIViewModel {
            header: self.compute_header(),
            form: self.compute_form(),
            status: self.compute_status(),
            letters: showing_results.then(|| LetterBar {
                letters: self.results.letters().to_vec(),
                active: self.results.active_letter(),
                picking: self.input_mode == InputMode::LetterPick,
            }),
            empty_state: if cards.is_empty() { self.compute_empty_state() } else { None },
            cards,
            pagination: (showing_results && self.results.filtered_count() > 0).then(|| PageInfo {
                current: self.results.current_page(),
                total: self.results.page_count(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn window_cards(&self, budget: usize) -> Vec<CardView> {
        let cards: Vec<CardView> = self
            .results
            .current_page_records()
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.card_view(index, record))
            .collect();

        let selected = self.selected_card.min(cards.len().saturating_sub(1));
        let mut start = 0;
        while start < selected
            && cards[start..=selected].iter().map(CardView::height).sum::<usize>() > budget
        {
            start += 1;
        }

        // The first card is always kept; the renderer clips it at the page line.
        let mut used = 0;
        cards
            .into_iter()
            .skip(start)
            .enumerate()
            .take_while(|(offset, card)| {
                used += card.height();
                *offset == 0 || used <= budget
            })
            .map(|(_, card)| card)
            .collect()
    }

    fn card_view(&self, index: usize, record: &SearchRecord) -> CardView {
        let is_expanded = self.expanded.contains(&index);
        let details = if is_expanded {
            self.card_details(record)
        } else {
            vec![]
        };

        CardView {
            title: record.title(self.results.display_field()).to_string(),
            is_selected: self.input_mode != InputMode::Form && index == self.selected_card,
            is_expanded,
            details,
        }
    }

    fn card_details(&self, record: &SearchRecord) -> Vec<(String, String)> {
        if self.settings.detail_fields.is_empty() {
            return record
                .fields()
                .filter(|(name, _)| name.as_str() != self.results.display_field())
                .map(|(name, _)| (name.clone(), record.field_text(name)))
                .collect();
        }

        self.settings
            .detail_fields
            .iter()
            .map(|spec| (spec.label.clone(), record.field_text(&spec.name)))
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut parts = vec![];

        if !self.results.is_empty() && !self.session.is_loading() {
            parts.push(format!("{} results", self.results.records().len()));
            if let Some(letter) = self.results.active_letter() {
                parts.push(format!("{} starting with '{letter}'", self.results.filtered_count()));
            }
            parts.push(format!(
                "page {} / {}",
                self.results.current_page(),
                self.results.page_count()
            ));
        }
        if let Some(at) = self.session.completed_at() {
            parts.push(format!("updated {}", at.format("%H:%M:%S")));
        }

        HeaderInfo {
            title: " recordseek ".to_string(),
            summary: parts.join("  |  "),
        }
    }

    fn compute_form(&self) -> FormView {
        let editing = self.input_mode == InputMode::Form;
        FormView {
            fields: self
                .form
                .fields()
                .iter()
                .enumerate()
                .map(|(index, field)| FormFieldView {
                    label: field.spec.label.clone(),
                    value: field.value.clone(),
                    required: field.spec.required,
                    is_focused: editing && index == self.form.focus(),
                })
                .collect(),
            submit_enabled: !self.session.is_loading(),
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if self.session.is_loading() {
            return Some(StatusLine {
                kind: StatusKind::Busy,
                text: "Searching…".to_string(),
            });
        }
        if let Some(error) = self.session.error() {
            return Some(StatusLine {
                kind: StatusKind::Error,
                text: format!("Search failed: {error}"),
            });
        }
        self.form.hint().map(|hint| StatusLine {
            kind: StatusKind::Hint,
            text: hint.to_string(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.session.status() {
            SessionStatus::Loading => None,
            _ if !self.results.is_empty() => {
                let letter = self.results.active_letter()?;
                if self.results.filtered_count() > 0 {
                    return None;
                }
                Some(EmptyState {
                    message: format!("No results starting with '{letter}'."),
                    subtitle: "Press 'a' to show all results".to_string(),
                })
            }
            SessionStatus::Success => Some(EmptyState {
                message: "No results found for the search criteria.".to_string(),
                subtitle: "Adjust the criteria and search again".to_string(),
            }),
            SessionStatus::Idle => Some(EmptyState {
                message: "Enter search criteria".to_string(),
                subtitle: "Fill in any field and press Enter".to_string(),
            }),
            SessionStatus::Error => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Form if self.session.is_loading() => {
                "Type to edit  Tab/↑↓: field  (searching…)  Esc: results"
            }
            InputMode::Form => "Type to edit  Tab/↑↓: field  Enter: search  Esc: results",
            InputMode::Browse => {
                "j/k: card  Enter: expand  h/l: page  g/G: first/last  f: letter  a: all  /: edit  c: clear  q: quit"
            }
            InputMode::LetterPick => "Press a letter to filter  *: show all  Esc: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::request::REQUEST_ID_KEY;

    fn settings() -> SearchSettings {
        SearchSettings {
            fields: vec![FieldSpec::parse("nombres:Nombres").unwrap()],
            detail_fields: vec![
                FieldSpec::parse("Dui:DUI").unwrap(),
                FieldSpec::parse("Edad").unwrap(),
            ],
            ..SearchSettings::default()
        }
    }

    fn state() -> AppState {
        AppState::new(settings(), Theme::default())
    }

    fn context(id: u64) -> BTreeMap<String, String> {
        BTreeMap::from([(REQUEST_ID_KEY.to_string(), id.to_string())])
    }

    fn submit(state: &mut AppState) -> u64 {
        state.form.push_char('a');
        match state.submit_search().first() {
            Some(Action::SendSearch(request)) => request.id,
            other => panic!("expected a search request, got {other:?}"),
        }
    }

    fn body(names: &[&str]) -> Vec<u8> {
        let records: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({"NombreCompleto": n, "Dui": "0123"}))
            .collect();
        serde_json::to_vec(&records).unwrap()
    }

    #[test]
    fn idle_state_invites_a_search() {
        let vm = state().compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "Enter search criteria");
        assert!(vm.letters.is_none());
        assert!(vm.pagination.is_none());
        assert!(vm.status.is_none());
    }

    #[test]
    fn submission_schedules_timeout() {
        let mut state = state();
        state.form.push_char('x');
        let actions = state.submit_search();
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            actions[1],
            Action::ScheduleTimeout { request_id: 1, seconds: DEFAULT_REQUEST_TIMEOUT }
        ));
    }

    #[test]
    fn zero_timeout_schedules_nothing() {
        let mut state = AppState::new(
            SearchSettings {
                request_timeout: 0,
                ..settings()
            },
            Theme::default(),
        );
        state.form.push_char('x');
        assert_eq!(state.submit_search().len(), 1);
        assert!(!state.handle_timer());
    }

    #[test]
    fn loading_hides_previous_results() {
        let mut state = state();
        let id = submit(&mut state);
        assert!(state.handle_response(200, &body(&["Ana", "Beto"]), &context(id)));

        submit(&mut state);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.letters.is_none());
        assert!(vm.empty_state.is_none());
        assert!(!vm.form.submit_enabled);
        assert_eq!(vm.status.unwrap().kind, StatusKind::Busy);
    }

    #[test]
    fn success_resets_form_and_switches_to_browse() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));

        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.form.fields().iter().all(|f| f.value.is_empty()));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), 1);
        assert!(vm.header.summary.starts_with("1 results  |  page 1 / 1"));
    }

    #[test]
    fn empty_success_replaces_filtered_results() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Marta", "Mario", "Zoe"]), &context(id));
        state.select_letter('M');
        assert_eq!(state.results.active_letter(), Some('M'));

        let id = submit(&mut state);
        assert!(state.handle_response(200, b"[]", &context(id)));

        assert!(state.results.is_empty());
        assert_eq!(state.results.active_letter(), None);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.unwrap().message,
            "No results found for the search criteria."
        );
        assert!(vm.cards.is_empty());
        assert!(vm.letters.is_none());
        assert!(vm.pagination.is_none());
        assert!(vm.status.is_none());
    }

    #[test]
    fn clear_drops_update_time_from_header() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));
        assert!(state.compute_viewmodel(24, 80).header.summary.contains("updated "));

        state.clear();
        assert_eq!(state.compute_viewmodel(24, 80).header.summary, "");
    }

    #[test]
    fn expanded_card_taller_than_card_area_is_still_shown() {
        let long_record = |name: &str| {
            let mut fields = serde_json::Map::new();
            fields.insert("NombreCompleto".to_string(), name.into());
            for i in 0..16 {
                fields.insert(format!("Campo{i}"), format!("valor {i}").into());
            }
            serde_json::Value::Object(fields)
        };
        let mut state = AppState::new(SearchSettings::default(), Theme::default());
        state.form.push_char('a');
        let id = match state.submit_search().first() {
            Some(Action::SendSearch(request)) => request.id,
            other => panic!("expected a search request, got {other:?}"),
        };
        let records = serde_json::to_vec(&vec![long_record("Ana"), long_record("Beto")]).unwrap();
        state.handle_response(200, &records, &context(id));
        assert_eq!(state.compute_viewmodel(24, 80).cards.len(), 2);

        // Eight form fields at 80 columns leave 9 card rows; the card needs 17.
        assert!(state.toggle_card());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), 1);
        assert!(vm.cards[0].is_selected);
        assert!(vm.cards[0].is_expanded);
        assert_eq!(vm.cards[0].details.len(), 16);
        assert!(vm.empty_state.is_none());

        state.move_card_down();
        state.toggle_card();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].title, "Beto");
        assert!(vm.cards[0].is_expanded);
    }

    #[test]
    fn error_keeps_previous_results_browsable() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana", "Beto"]), &context(id));

        let id = submit(&mut state);
        assert!(state.handle_response(400, br#"{"error":"invalid date"}"#, &context(id)));

        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Search failed: invalid date");
        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.letters.unwrap().letters, vec!['A', 'B']);
    }

    #[test]
    fn absent_letter_has_its_own_message() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));
        state.select_letter('q');

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No results starting with 'Q'.");
        assert!(vm.pagination.is_none());
        assert_eq!(vm.letters.unwrap().active, Some('Q'));
    }

    #[test]
    fn expanded_card_lists_detail_fields_with_placeholders() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));

        assert!(state.toggle_card());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.cards[0].details,
            vec![
                ("DUI".to_string(), "0123".to_string()),
                ("Edad".to_string(), "-".to_string()),
            ]
        );

        state.toggle_card();
        assert!(state.compute_viewmodel(24, 80).cards[0].details.is_empty());
    }

    #[test]
    fn page_change_collapses_cards() {
        let mut state = state();
        let id = submit(&mut state);
        let names: Vec<String> = (0..15).map(|i| format!("Name {i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        state.handle_response(200, &body(&names), &context(id));

        state.move_card_down();
        state.toggle_card();
        assert!(state.next_page());
        assert!(state.expanded.is_empty());
        assert_eq!(state.selected_card, 0);
        assert_eq!(state.visible_card_count(), 5);
        assert!(!state.next_page());
        assert!(state.first_page());
        assert!(!state.first_page());
        assert!(state.last_page());
    }

    #[test]
    fn cursor_stays_visible_when_cards_overflow() {
        let mut state = state();
        let id = submit(&mut state);
        let names: Vec<String> = (0..10).map(|i| format!("Name {i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        state.handle_response(200, &body(&names), &context(id));

        for _ in 0..9 {
            state.move_card_down();
        }
        state.toggle_card();

        // 20 rows, one form row: 8 rows for cards.
        let vm = state.compute_viewmodel(20, 80);
        let last = vm.cards.last().unwrap();
        assert!(last.is_selected);
        assert!(last.is_expanded);
        assert_eq!(vm.cards.len(), 6);
        assert_eq!(vm.cards[0].title, "Name 4");
        assert!(vm.cards.iter().map(CardView::height).sum::<usize>() <= 8);
    }

    #[test]
    fn timeout_fails_request_and_drops_late_reply() {
        let mut state = state();
        let id = submit(&mut state);

        assert!(state.handle_timer());
        assert_eq!(state.session.status(), SessionStatus::Error);
        assert_eq!(
            state.session.error(),
            Some("no response within 30 seconds")
        );

        assert!(!state.handle_response(200, &body(&["Ana"]), &context(id)));
        assert!(state.results.is_empty());
    }

    #[test]
    fn timer_after_reply_is_ignored() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));
        assert!(!state.handle_timer());
        assert_eq!(state.session.status(), SessionStatus::Success);
    }

    #[test]
    fn clear_resets_everything_but_in_flight_request() {
        let mut state = state();
        let id = submit(&mut state);
        state.handle_response(200, &body(&["Ana"]), &context(id));
        state.select_letter('A');

        let id = submit(&mut state);
        state.clear();
        assert!(state.session.is_loading());
        assert!(state.results.is_empty());
        assert_eq!(state.results.active_letter(), None);
        assert_eq!(state.input_mode, InputMode::Form);

        assert!(state.handle_response(200, &body(&["Zoe"]), &context(id)));
        assert_eq!(state.results.records().len(), 1);
    }

    #[test]
    fn required_field_blocks_without_request() {
        let mut settings = settings();
        settings.fields[0].required = true;
        let mut state = AppState::new(settings, Theme::default());

        assert!(state.submit_search().is_empty());
        assert_eq!(state.session.status(), SessionStatus::Idle);
        let status = state.compute_viewmodel(24, 80).status.unwrap();
        assert_eq!(status.kind, StatusKind::Hint);
        assert_eq!(status.text, "Required: Nombres");
    }
}
