//! Composable UI component renderers.
//!
//! Each component draws one band of the screen starting at a given row and
//! returns the next free row, so [`render_layout`] can stack them:
//!
//! - [`header`]: title and result summary
//! - [`form`]: criteria grid and status line
//! - [`letters`]: alphabet bar
//! - [`cards`]: collapsible result cards
//! - [`empty`]: message shown in place of cards
//! - [`footer`]: page indicator and keybinding hints

mod cards;
mod empty;
mod footer;
mod form;
mod header;
mod letters;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::render_cards;
use empty::render_empty_state;
use footer::{render_footer, render_page_indicator};
use form::{render_form, render_status};
use header::render_header;
use letters::render_letters;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// ```text
/// [blank line]
/// [Header: title + summary]
/// [Border]
/// [Form grid]
/// [Status line]
/// [Border]
/// [Alphabet bar]
/// [Cards or empty state]
/// [Page indicator]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_form(current_row, &vm.form, theme, cols);
    current_row = render_status(current_row, vm.status.as_ref(), theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_letters(current_row, vm.letters.as_ref(), theme, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let page_row = border_row.saturating_sub(1);

    if let Some(empty) = &vm.empty_state {
        if current_row + 3 <= page_row {
            render_empty_state(current_row, empty, theme, cols);
        }
    } else {
        render_cards(current_row, page_row, &vm.cards, theme, cols);
    }

    render_page_indicator(page_row, vm.pagination, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
