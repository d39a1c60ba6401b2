//! Input mode state for the plugin.
//!
//! The mode decides how a key press is interpreted. It is independent of the
//! search session status: the form can be edited while a search is in flight,
//! only submission is blocked.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing search criteria into the form.
    ///
    /// Printable keys edit the focused field, Tab/Up/Down move focus and Enter
    /// submits.
    Form,

    /// Navigating result cards and pages.
    ///
    /// j/k move the card cursor, h/l change page, Enter toggles a card.
    Browse,

    /// Waiting for the letter to filter by.
    ///
    /// The next letter key toggles that letter, `*` shows all, and the mode
    /// falls back to Browse afterwards.
    LetterPick,
}

impl InputMode {
    /// Whether printable keys go to the form.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Form)
    }
}
