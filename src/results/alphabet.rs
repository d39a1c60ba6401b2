//! Alphabetic prefix facet over the display-name field.
//!
//! The letter bar is always derived from the full, unfiltered result set so
//! the user can jump from one letter to another without returning to "all".

use crate::domain::SearchRecord;
use std::collections::BTreeSet;

/// Normalizes a character into a filter letter (uppercased alphabetic).
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    if c.is_alphabetic() {
        c.to_uppercase().next()
    } else {
        None
    }
}

/// Returns the filter letter a name belongs to, if it starts with a letter.
#[must_use]
pub fn first_letter(name: &str) -> Option<char> {
    name.chars().next().and_then(normalize_letter)
}

/// Case-insensitive "starts with letter" test used by the view deriver.
#[must_use]
pub fn starts_with_letter(name: &str, letter: char) -> bool {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .is_some_and(|c| Some(c) == normalize_letter(letter))
}

/// Distinct uppercased first letters across `records`, in alphabetical order.
#[must_use]
pub fn available_letters(records: &[SearchRecord], display_field: &str) -> Vec<char> {
    records
        .iter()
        .filter_map(|record| record.display_name(display_field))
        .filter_map(first_letter)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The single active letter, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabetFilter {
    active: Option<char>,
}

impl AlphabetFilter {
    #[must_use]
    pub const fn active(&self) -> Option<char> {
        self.active
    }

    /// Activates `letter`, or clears the filter when `letter` is already
    /// active. Non-alphabetic input is ignored. Returns the new active letter.
    pub fn select(&mut self, letter: char) -> Option<char> {
        let Some(letter) = normalize_letter(letter) else {
            return self.active;
        };
        self.active = if self.active == Some(letter) {
            None
        } else {
            Some(letter)
        };
        self.active
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
