//! Search form component renderer.
//!
//! Fields are laid out in a grid of [`FORM_CELL_WIDTH`]-wide cells, filled row
//! by row. The focused field has its value underlined in the focus color and a
//! trailing cursor block.

use crate::ui::helpers::{form_columns, position_cursor, print_padded, FORM_CELL_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldView, FormView, StatusKind, StatusLine};

/// Renders the form grid starting at `row`. Returns the next available row.
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let columns = form_columns(cols);
    let mut current_row = row;

    for chunk in form.fields.chunks(columns) {
        position_cursor(current_row, 1);
        for field in chunk {
            render_cell(field, theme, FORM_CELL_WIDTH.min(cols));
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_cell(field: &FormFieldView, theme: &Theme, width: usize) {
    let label = format!(" {}", field.label);
    let label_width = label.chars().count();
    print!("{}{label}", Theme::fg(&theme.colors.field_label));

    let marker = if field.required { "*" } else { " " };
    print!("{}{marker}{}", Theme::fg(&theme.colors.required_marker), Theme::reset());
    print!("{}: ", Theme::fg(&theme.colors.text_dim));

    let value_width = width.saturating_sub(label_width + 3);
    if field.is_focused {
        let value = format!("{}█", field.value);
        print!("{}", Theme::underline());
        print_padded(&value, &theme.colors.field_focus, value_width.saturating_sub(1));
        print!("{} ", Theme::reset());
    } else {
        print_padded(&field.value, &theme.colors.text_normal, value_width);
    }
}

/// Renders the status line (busy, error or hint) or a blank line.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Busy => &theme.colors.busy_fg,
                StatusKind::Error => &theme.colors.error_fg,
                StatusKind::Hint => &theme.colors.hint_fg,
            };
            if status.kind == StatusKind::Error {
                print!("{}", Theme::bold());
            }
            print!(" ");
            print_padded(&status.text, color, cols.saturating_sub(1));
        }
        None => print!("{}", " ".repeat(cols)),
    }
    print!("{}", Theme::reset());
    row + 1
}
