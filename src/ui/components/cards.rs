//! Result card component renderer.
//!
//! A collapsed card is a single title row with a disclosure arrow. An expanded
//! card is followed by one indented `Label: value` row per detail.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Indentation of detail rows.
const DETAIL_INDENT: usize = 6;

/// Renders cards from `row`, stopping before `limit`. Returns the next row.
pub fn render_cards(row: usize, limit: usize, cards: &[CardView], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        if current_row >= limit {
            break;
        }
        current_row = render_card(current_row, limit, card, theme, cols);
    }
    current_row
}

fn render_card(row: usize, limit: usize, card: &CardView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let arrow = if card.is_expanded { " ▼ " } else { " ▶ " };
    let (fg, bg) = if card.is_selected {
        (&theme.colors.selection_fg, Some(&theme.colors.selection_bg))
    } else {
        (&theme.colors.text_normal, None)
    };

    if let Some(bg) = bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}{arrow}", Theme::bold(), Theme::fg(fg));
    print_padded(&card.title, fg, cols.saturating_sub(arrow.chars().count()));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    let label_width = card
        .details
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in &card.details {
        if current_row >= limit {
            break;
        }
        position_cursor(current_row, 1);
        let pad = label_width - label.chars().count();
        print!(
            "{}{}{label}:{} ",
            " ".repeat(DETAIL_INDENT),
            Theme::fg(&theme.colors.detail_label),
            " ".repeat(pad)
        );
        print_padded(
            value,
            &theme.colors.text_normal,
            cols.saturating_sub(DETAIL_INDENT + label_width + 2),
        );
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
