//! The edit API: the mutation primitives meant to be called from inside an
//! `update` transaction. None of these repaint or touch a terminal — that
//! is `edit-core`'s job once the mutation closure returns.

use crate::{Buffer, Cursor};

fn is_dropped_control(c: char) -> bool {
    c.is_ascii_control() && c != '\n'
}

fn char_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Append one character at the cursor. A line-break character delegates to
/// `insert_new_line(0)`; other ASCII control characters are silently
/// dropped.
pub fn push_char(buffer: &mut Buffer, cursor: &mut Cursor, c: char, indent_width: usize) {
    if c == '\n' {
        insert_new_line(buffer, cursor, 0, indent_width);
        return;
    }
    if is_dropped_control(c) {
        return;
    }
    let line = &mut buffer.lines[cursor.y];
    let at = char_byte_index(line, cursor.x);
    line.insert(at, c);
    cursor.x += 1;
}

/// Append a whole string, scalar by scalar, applying the char rule to each.
pub fn push_str(buffer: &mut Buffer, cursor: &mut Cursor, s: &str, indent_width: usize) {
    for c in s.chars() {
        push_char(buffer, cursor, c, indent_width);
    }
}

/// Split the current line at the cursor, indenting the new line by
/// `indent * indent_width` spaces, and move the cursor to the start of the
/// indented text on the new line.
pub fn insert_new_line(buffer: &mut Buffer, cursor: &mut Cursor, indent: usize, indent_width: usize) {
    let k = indent * indent_width;
    let line = &buffer.lines[cursor.y];
    let at = char_byte_index(line, cursor.x);
    let right = line[at..].to_string();
    let left = line[..at].to_string();
    buffer.lines[cursor.y] = left;
    let mut new_line = " ".repeat(k);
    new_line.push_str(&right);
    buffer.lines.insert(cursor.y + 1, new_line);
    cursor.x = k;
    cursor.y += 1;
}

/// Forward delete: remove the character under the cursor, or join with the
/// next line if the cursor sits at end-of-line.
pub fn delete(buffer: &mut Buffer, cursor: &mut Cursor) {
    let len = buffer.lines[cursor.y].chars().count();
    if cursor.x < len {
        let at = char_byte_index(&buffer.lines[cursor.y], cursor.x);
        buffer.lines[cursor.y].remove(at);
    } else if cursor.y + 1 < buffer.lines.len() {
        let next = buffer.lines.remove(cursor.y + 1);
        buffer.lines[cursor.y].push_str(&next);
    }
}

/// Backspace: remove the character before the cursor, or join with the
/// previous line if the cursor sits at column 0.
pub fn back(buffer: &mut Buffer, cursor: &mut Cursor) {
    if cursor.x > 0 {
        let at = char_byte_index(&buffer.lines[cursor.y], cursor.x - 1);
        buffer.lines[cursor.y].remove(at);
        cursor.x -= 1;
    } else if cursor.y > 0 {
        let prev_len = buffer.lines[cursor.y - 1].chars().count();
        let current = buffer.lines.remove(cursor.y);
        buffer.lines[cursor.y - 1].push_str(&current);
        cursor.y -= 1;
        cursor.x = prev_len;
    }
}

/// Replace the buffer with a single empty line and reset the cursor.
pub fn clear(buffer: &mut Buffer, cursor: &mut Cursor) {
    buffer.clear();
    *cursor = Cursor::origin();
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDENT_WIDTH: usize = 2;

    #[test]
    fn insert_new_line_indents_the_continuation() {
        let mut buffer = Buffer::new();
        let mut cursor = Cursor::origin();
        push_str(&mut buffer, &mut cursor, "puts \"World\"", INDENT_WIDTH);
        insert_new_line(&mut buffer, &mut cursor, 1, INDENT_WIDTH);
        push_str(&mut buffer, &mut cursor, "puts \"!\"", INDENT_WIDTH);

        assert_eq!(
            buffer.lines(),
            &["puts \"World\"".to_string(), "  puts \"!\"".to_string()]
        );
        assert_eq!(cursor, Cursor::new(10, 1));
        assert_eq!(buffer.join(), "puts \"World\"\n  puts \"!\"");
    }

    #[test]
    fn back_three_times_empties_a_three_char_line() {
        let mut buffer = Buffer::new();
        buffer.replace(vec!["abc".to_string()]);
        let mut cursor = Cursor::new(3, 0);
        back(&mut buffer, &mut cursor);
        back(&mut buffer, &mut cursor);
        back(&mut buffer, &mut cursor);
        assert_eq!(buffer.lines(), &["".to_string()]);
        assert_eq!(cursor, Cursor::origin());
    }

    #[test]
    fn back_merges_empty_lines_across_the_line_boundary() {
        let mut buffer = Buffer::new();
        buffer.replace(vec!["".to_string(), "".to_string(), "".to_string()]);
        let mut cursor = Cursor::new(0, 2);
        back(&mut buffer, &mut cursor);
        back(&mut buffer, &mut cursor);
        assert_eq!(buffer.lines(), &["".to_string()]);
        assert_eq!(cursor, Cursor::origin());
    }

    /// `back` right after inserting one char restores the prior state.
    #[test]
    fn property_back_inverts_single_char_insert() {
        let mut buffer = Buffer::new();
        buffer.replace(vec!["abc".to_string(), "def".to_string()]);
        let before_buffer = buffer.clone();
        let mut cursor = Cursor::new(1, 1);
        let before_cursor = cursor;

        push_char(&mut buffer, &mut cursor, 'X', INDENT_WIDTH);
        back(&mut buffer, &mut cursor);

        assert_eq!(buffer, before_buffer);
        assert_eq!(cursor, before_cursor);
    }

    /// `insert_new_line` followed by `back` restores the prior state.
    #[test]
    fn property_back_inverts_insert_new_line() {
        let mut buffer = Buffer::new();
        buffer.replace(vec!["hello world".to_string()]);
        let before_buffer = buffer.clone();
        let mut cursor = Cursor::new(5, 0);
        let before_cursor = cursor;

        insert_new_line(&mut buffer, &mut cursor, 3, INDENT_WIDTH);
        back(&mut buffer, &mut cursor);

        assert_eq!(buffer, before_buffer);
        assert_eq!(cursor, before_cursor);
    }

    #[test]
    fn control_chars_other_than_newline_are_dropped() {
        let mut buffer = Buffer::new();
        let mut cursor = Cursor::origin();
        push_char(&mut buffer, &mut cursor, '\u{7}', INDENT_WIDTH); // BEL
        assert_eq!(buffer.lines(), &["".to_string()]);
        assert_eq!(cursor, Cursor::origin());
    }

    #[test]
    fn newline_char_delegates_to_insert_new_line() {
        let mut buffer = Buffer::new();
        let mut cursor = Cursor::origin();
        push_str(&mut buffer, &mut cursor, "ab\ncd", INDENT_WIDTH);
        assert_eq!(
            buffer.lines(),
            &["ab".to_string(), "cd".to_string()]
        );
        assert_eq!(cursor, Cursor::new(2, 1));
    }

    #[test]
    fn delete_joins_next_line_at_end_of_line() {
        let mut buffer = Buffer::new();
        buffer.replace(vec!["ab".to_string(), "cd".to_string()]);
        let mut cursor = Cursor::new(2, 0);
        delete(&mut buffer, &mut cursor);
        assert_eq!(buffer.lines(), &["abcd".to_string()]);
        assert_eq!(cursor, Cursor::new(2, 0));
    }
}
