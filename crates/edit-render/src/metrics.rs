//! Folding a logical cursor position down to the one number the viewport
//! cares about: its absolute visual row within the whole rendered
//! expression.

use edit_buffer::{Buffer, Cursor};
use edit_text::coords::AbsoluteVisualRow;
use edit_text::wrap::{self, WrapError};

/// Sum of every prior logical line's visual height, plus the cursor's own
/// row within its line.
pub fn cursor_absolute_row(
    buffer: &Buffer,
    cursor: Cursor,
    prompt_width: usize,
    width: usize,
) -> Result<AbsoluteVisualRow, WrapError> {
    let mut row = 0usize;
    for y in 0..cursor.y {
        row += wrap::visual_height(prompt_width, buffer.line_len(y), width)?;
    }
    row += wrap::row_of_column(prompt_width, cursor.x, width)?;
    Ok(AbsoluteVisualRow(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_first_row() {
        let mut b = Buffer::new();
        b.replace(vec!["abc".to_string()]);
        let row = cursor_absolute_row(&b, Cursor::new(1, 0), 2, 20).unwrap();
        assert_eq!(row, AbsoluteVisualRow(0));
    }

    #[test]
    fn second_logical_line_accounts_for_first_lines_height() {
        let mut b = Buffer::new();
        b.replace(vec!["a".repeat(27), "x".to_string()]);
        // First line (prompt width 7, width 20) wraps to 2 rows.
        let row = cursor_absolute_row(&b, Cursor::new(0, 1), 7, 20).unwrap();
        assert_eq!(row, AbsoluteVisualRow(2));
    }
}
