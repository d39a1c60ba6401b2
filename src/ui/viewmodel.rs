//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings and flags only; every
//! decision about what is visible (busy indicator, hidden alphabet bar, which
//! empty-state message applies) has already been made when one is built.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title and result summary.
    pub header: HeaderInfo,

    /// The search criteria form.
    pub form: FormView,

    /// Busy indicator, error text or form hint.
    pub status: Option<StatusLine>,

    /// Alphabet bar; `None` while hidden.
    pub letters: Option<LetterBar>,

    /// Cards of the current page that fit on screen.
    pub cards: Vec<CardView>,

    /// Message shown in place of cards.
    pub empty_state: Option<EmptyState>,

    /// Page indicator; `None` while no results are shown.
    pub pagination: Option<PageInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
    /// Counts, page and completion time of the last search.
    pub summary: String,
}

/// Search form display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FormFieldView>,
    /// Whether a submission would be accepted right now.
    pub submit_enabled: bool,
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub required: bool,
    /// Focused field while the form is being edited.
    pub is_focused: bool,
}

/// Kind of status line, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Busy,
    Error,
    Hint,
}

/// Single status line below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Alphabet bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBar {
    /// Letters present in the full result set, in order.
    pub letters: Vec<char>,
    /// Currently active letter.
    pub active: Option<char>,
    /// Whether the next key press picks a letter.
    pub picking: bool,
}

/// A collapsible result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Display name or the unnamed placeholder.
    pub title: String,
    /// Whether the card cursor is on this card.
    pub is_selected: bool,
    pub is_expanded: bool,
    /// `(label, value)` pairs, populated only when expanded.
    pub details: Vec<(String, String)>,
}

impl CardView {
    /// Rows the card occupies when rendered.
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.details.len()
    }
}

/// Page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based current page.
    pub current: usize,
    pub total: usize,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Message displayed where cards would be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
