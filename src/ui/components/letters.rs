//! Alphabet bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LetterBar;

/// Renders the letter bar, or a blank line while it is hidden.
///
/// The active letter is drawn as a highlighted chip; while a letter is being
/// picked the bar is prefixed with a prompt.
pub fn render_letters(row: usize, bar: Option<&LetterBar>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(bar) = bar else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let prefix = if bar.picking { " Letter? " } else { " Filter: " };
    let mut used = prefix.chars().count();
    print!("{}{prefix}", Theme::fg(&theme.colors.text_dim));

    let all_active = bar.active.is_none();
    used += print_chip("All", all_active, theme);

    for &letter in &bar.letters {
        if used + 3 > cols {
            break;
        }
        used += print_chip(&letter.to_string(), bar.active == Some(letter), theme);
    }

    if let Some(active) = bar.active {
        if !bar.letters.contains(&active) && used + 3 <= cols {
            used += print_chip(&active.to_string(), true, theme);
        }
    }

    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn print_chip(text: &str, active: bool, theme: &Theme) -> usize {
    if active {
        print!(
            "{}{}{} {text} {}",
            Theme::bold(),
            Theme::fg(&theme.colors.letter_active_fg),
            Theme::bg(&theme.colors.letter_active_bg),
            Theme::reset()
        );
    } else {
        print!("{} {text} ", Theme::fg(&theme.colors.letter_fg));
    }
    text.chars().count() + 2
}
