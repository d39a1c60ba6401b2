//! Shared rendering utilities and layout arithmetic.
//!
//! The layout functions here are used both when the view model is computed
//! (to know how many card rows fit) and when it is drawn, so the two can never
//! disagree about where things go.
//!
//! ```text
//! [blank]
//! [title]
//! [summary]
//! [border]
//! [form grid]      form_rows()
//! [status line]
//! [border]
//! [alphabet bar]
//! [cards]          card_rows()
//! [page indicator]
//! [border]
//! [footer]
//! [blank]
//! ```

use crate::ui::theme::Theme;

/// Rows used by everything except the form grid and the cards.
pub const CHROME_ROWS: usize = 11;

/// Width of one form cell, label and value included.
pub const FORM_CELL_WIDTH: usize = 40;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of form cells placed side by side at width `cols`.
#[must_use]
pub const fn form_columns(cols: usize) -> usize {
    let columns = cols / FORM_CELL_WIDTH;
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// Rows taken by a form of `field_count` fields at width `cols`.
#[must_use]
pub const fn form_rows(field_count: usize, cols: usize) -> usize {
    field_count.div_ceil(form_columns(cols))
}

/// Rows left for cards on a `rows` tall screen.
#[must_use]
pub const fn card_rows(rows: usize, form_rows: usize) -> usize {
    rows.saturating_sub(CHROME_ROWS + form_rows)
}

/// Truncates `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{kept}…")
}

/// Prints `text` in `color` padded with spaces to `width` characters.
pub fn print_padded(text: &str, color: &str, width: usize) {
    let shown = truncate(text, width);
    let len = shown.chars().count();
    print!("{}{shown}{}", Theme::fg(color), " ".repeat(width.saturating_sub(len)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_grid_adapts_to_width() {
        assert_eq!(form_columns(30), 1);
        assert_eq!(form_columns(80), 2);
        assert_eq!(form_rows(8, 80), 4);
        assert_eq!(form_rows(7, 120), 3);
        assert_eq!(form_rows(0, 80), 0);
    }

    #[test]
    fn card_rows_never_underflow() {
        assert_eq!(card_rows(24, 4), 9);
        assert_eq!(card_rows(5, 4), 0);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Ángel", 10), "Ángel");
        assert_eq!(truncate("Ángel Pérez", 6), "Ángel…");
        assert_eq!(truncate("abc", 0), "");
    }
}
