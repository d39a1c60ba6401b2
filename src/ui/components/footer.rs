//! Footer component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, PageInfo};

/// Renders the page indicator centered on `row`, or a blank line when there is
/// no page to show.
pub fn render_page_indicator(row: usize, page: Option<PageInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(page) = page else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let prev = if page.current > 1 { "‹ h" } else { "   " };
    let next = if page.current < page.total { "l ›" } else { "   " };
    let text = format!("{prev}  Page {} / {}  {next}", page.current, page.total);
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}{}", " ".repeat(padding), truncate(&text, cols));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the keybinding hints, dimmed and centered. Text wider than the
/// terminal is truncated.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
