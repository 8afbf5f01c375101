//! The navigation engine: walking the logical cursor one
//! character or one visual row at a time, each step paired with the exact
//! real-cursor motion that keeps the terminal in sync without a full
//! repaint.
//!
//! None of these functions touch the viewport's scroll offset — scrolling is
//! the caller's concern (`edit-core` recomputes it after a move completes).

use edit_buffer::{Buffer, Cursor};
use edit_terminal::Terminal;
use edit_text::wrap::{self, WrapError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigationError {
    /// `move_cursor_to` stepped past its target instead of landing on it —
    /// only reachable if the buffer or width changed out from under the
    /// sweep, which would be a bug in the caller.
    #[error("move_cursor_to overshot target ({target_x}, {target_y}), landed at ({actual_x}, {actual_y})")]
    Overshoot {
        target_x: usize,
        target_y: usize,
        actual_x: usize,
        actual_y: usize,
    },
    #[error(transparent)]
    Wrap(#[from] WrapError),
    #[error(transparent)]
    Terminal(#[from] anyhow::Error),
}

/// Step the cursor one character left. Returns `false` (without moving
/// anything) at the very start of the buffer.
pub fn move_left(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<bool, NavigationError> {
    if cursor.x > 0 {
        if wrap::last_row_width(prompt_width, cursor.x, width)? == 0 {
            terminal.move_to_column(width as u16)?;
            terminal.move_relative(0, -1)?;
        } else {
            terminal.move_relative(-1, 0)?;
        }
        cursor.x -= 1;
        Ok(true)
    } else if cursor.y > 0 {
        let prev_len = buffer.line_len(cursor.y - 1);
        let lp = wrap::last_row_width(prompt_width, prev_len, width)?;
        let delta = lp as i32 - prompt_width as i32;
        terminal.move_relative(delta, -1)?;
        cursor.x = prev_len;
        cursor.y -= 1;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Step the cursor one character right. Returns `false` at the very end of
/// the buffer.
pub fn move_right(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<bool, NavigationError> {
    let len = buffer.line_len(cursor.y);
    if cursor.x < len {
        if wrap::last_row_width(prompt_width, cursor.x, width)? == width - 1 {
            terminal.move_to_column(0)?;
            terminal.move_relative(0, 1)?;
        } else {
            terminal.move_relative(1, 0)?;
        }
        cursor.x += 1;
        Ok(true)
    } else if cursor.y + 1 < buffer.line_count() {
        let lp = wrap::last_row_width(prompt_width, len, width)?;
        let delta = prompt_width as i32 - lp as i32;
        terminal.move_relative(delta, 1)?;
        cursor.x = 0;
        cursor.y += 1;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Step the cursor one visual row up, crossing logical lines when the
/// current line's first visual row is reached.
pub fn move_up(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<bool, NavigationError> {
    if prompt_width + cursor.x >= width {
        // A continuation row of the current line: one row up is still
        // inside the same logical line, `width` characters back.
        cursor.x -= width;
        terminal.move_relative(0, -1)?;
        Ok(true)
    } else if cursor.y > 0 {
        let prev_len = buffer.line_len(cursor.y - 1);
        let lp = wrap::last_row_width(prompt_width, prev_len, width)?;
        let desired = prompt_width + cursor.x;
        if lp < desired {
            let effective_lp = if lp == 0 && prev_len > 0 { width } else { lp };
            terminal.move_relative(effective_lp as i32 - desired as i32, -1)?;
            cursor.x = prev_len;
        } else {
            let row = (prompt_width + prev_len) / width;
            terminal.move_relative(0, -1)?;
            cursor.x += row * width;
        }
        cursor.y -= 1;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Step the cursor one visual row down, crossing logical lines when the
/// current line's last visual row is reached.
pub fn move_down(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<bool, NavigationError> {
    let len = buffer.line_len(cursor.y);
    let total_rows = wrap::visual_height(prompt_width, len, width)?;
    let row = wrap::row_of_column(prompt_width, cursor.x, width)?;

    if row + 1 < total_rows {
        let new_x = (cursor.x + width).min(len);
        cursor.x = new_x;
        terminal.move_relative(0, 1)?;
        Ok(true)
    } else if cursor.y + 1 < buffer.line_count() {
        let next_len = buffer.line_len(cursor.y + 1);
        let vc = (prompt_width + cursor.x) - row * width;
        if vc < prompt_width {
            terminal.move_relative(prompt_width as i32 - vc as i32, 1)?;
            cursor.x = 0;
        } else if vc - prompt_width > next_len {
            let lp_next = prompt_width + next_len;
            terminal.move_relative(lp_next as i32 - vc as i32, 1)?;
            cursor.x = next_len;
        } else {
            terminal.move_relative(0, 1)?;
            cursor.x = vc - prompt_width;
        }
        cursor.y += 1;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Repeatedly step left or right until the logical cursor lands exactly on
/// `(target_x, target_y)`. Never touches the viewport's scroll offset.
pub fn move_cursor_to(
    buffer: &Buffer,
    cursor: &mut Cursor,
    target_x: usize,
    target_y: usize,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<(), NavigationError> {
    loop {
        if cursor.y == target_y && cursor.x == target_x {
            return Ok(());
        }
        let going_forward =
            cursor.y < target_y || (cursor.y == target_y && cursor.x < target_x);

        let moved = if going_forward {
            move_right(buffer, cursor, prompt_width, width, terminal)?
        } else {
            move_left(buffer, cursor, prompt_width, width, terminal)?
        };

        if !moved {
            return Err(NavigationError::Overshoot {
                target_x,
                target_y,
                actual_x: cursor.x,
                actual_y: cursor.y,
            });
        }

        let overshot = if going_forward {
            cursor.y > target_y
        } else {
            cursor.y < target_y
        };
        if overshot {
            return Err(NavigationError::Overshoot {
                target_x,
                target_y,
                actual_x: cursor.x,
                actual_y: cursor.y,
            });
        }
    }
}

pub fn move_to_begin(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<(), NavigationError> {
    move_cursor_to(buffer, cursor, 0, 0, prompt_width, width, terminal)
}

pub fn move_to_end(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<(), NavigationError> {
    let last_y = buffer.line_count().saturating_sub(1);
    let last_x = buffer.line_len(last_y);
    move_cursor_to(buffer, cursor, last_x, last_y, prompt_width, width, terminal)
}

pub fn move_to_end_of_line(
    buffer: &Buffer,
    cursor: &mut Cursor,
    prompt_width: usize,
    width: usize,
    terminal: &mut dyn Terminal,
) -> Result<(), NavigationError> {
    let len = buffer.line_len(cursor.y);
    move_cursor_to(buffer, cursor, len, cursor.y, prompt_width, width, terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edit_terminal::recording::{RecordedCommand, RecordingTerminal};

    fn buf(lines: &[&str]) -> Buffer {
        let mut b = Buffer::new();
        b.replace(lines.iter().map(|s| s.to_string()).collect());
        b
    }

    #[test]
    fn move_left_at_origin_does_nothing() {
        let b = buf(&[""]);
        let mut c = Cursor::origin();
        let mut t = RecordingTerminal::new();
        assert!(!move_left(&b, &mut c, 2, 20, &mut t).unwrap());
        assert!(t.commands().is_empty());
    }

    #[test]
    fn move_left_crosses_into_previous_line() {
        let b = buf(&["abc", "def"]);
        let mut c = Cursor::new(0, 1);
        let mut t = RecordingTerminal::new();
        assert!(move_left(&b, &mut c, 2, 20, &mut t).unwrap());
        assert_eq!(c, Cursor::new(3, 0));
        assert!(matches!(
            t.commands()[0],
            RecordedCommand::MoveRelative { dy: -1, .. }
        ));
    }

    #[test]
    fn move_right_crosses_into_next_line() {
        let b = buf(&["abc", "def"]);
        let mut c = Cursor::new(3, 0);
        let mut t = RecordingTerminal::new();
        assert!(move_right(&b, &mut c, 2, 20, &mut t).unwrap());
        assert_eq!(c, Cursor::new(0, 1));
    }

    #[test]
    fn move_right_at_end_of_buffer_does_nothing() {
        let b = buf(&["abc"]);
        let mut c = Cursor::new(3, 0);
        let mut t = RecordingTerminal::new();
        assert!(!move_right(&b, &mut c, 2, 20, &mut t).unwrap());
    }

    /// Prompt width 7, terminal width 20, a 27-character line wraps to
    /// two rows; moving up from the continuation row stays on the line.
    #[test]
    fn move_up_within_wrapped_line() {
        let line = "a".repeat(27);
        let b = buf(&[&line]);
        let mut c = Cursor::new(20, 0); // on the continuation row
        let mut t = RecordingTerminal::new();
        assert!(move_up(&b, &mut c, 7, 20, &mut t).unwrap());
        assert_eq!(c, Cursor::new(0, 0));
    }

    #[test]
    fn move_up_at_first_row_of_first_line_does_nothing() {
        let b = buf(&["abc"]);
        let mut c = Cursor::new(1, 0);
        let mut t = RecordingTerminal::new();
        assert!(!move_up(&b, &mut c, 2, 20, &mut t).unwrap());
    }

    #[test]
    fn move_down_at_last_row_of_last_line_does_nothing() {
        let b = buf(&["abc"]);
        let mut c = Cursor::new(1, 0);
        let mut t = RecordingTerminal::new();
        assert!(!move_down(&b, &mut c, 2, 20, &mut t).unwrap());
    }

    #[test]
    fn move_down_lands_on_shorter_next_line_end() {
        let b = buf(&["abcdef", "xy"]);
        let mut c = Cursor::new(5, 0);
        let mut t = RecordingTerminal::new();
        assert!(move_down(&b, &mut c, 2, 20, &mut t).unwrap());
        assert_eq!(c, Cursor::new(2, 1));
    }

    #[test]
    fn move_down_lands_on_matching_column_of_next_line() {
        let b = buf(&["abcdef", "xyzabc"]);
        let mut c = Cursor::new(2, 0);
        let mut t = RecordingTerminal::new();
        assert!(move_down(&b, &mut c, 2, 20, &mut t).unwrap());
        assert_eq!(c, Cursor::new(2, 1));
        assert_eq!(t.commands(), &[RecordedCommand::MoveRelative { dx: 0, dy: 1 }]);
    }

    #[test]
    fn move_cursor_to_walks_forward_and_lands_exactly() {
        let b = buf(&["abcdef"]);
        let mut c = Cursor::origin();
        let mut t = RecordingTerminal::new();
        move_cursor_to(&b, &mut c, 4, 0, 2, 20, &mut t).unwrap();
        assert_eq!(c, Cursor::new(4, 0));
    }

    #[test]
    fn move_cursor_to_walks_backward_and_lands_exactly() {
        let b = buf(&["abcdef"]);
        let mut c = Cursor::new(6, 0);
        let mut t = RecordingTerminal::new();
        move_cursor_to(&b, &mut c, 1, 0, 2, 20, &mut t).unwrap();
        assert_eq!(c, Cursor::new(1, 0));
    }

    #[test]
    fn move_to_end_of_line_stops_before_next_line() {
        let b = buf(&["abc", "def"]);
        let mut c = Cursor::new(0, 0);
        let mut t = RecordingTerminal::new();
        move_to_end_of_line(&b, &mut c, 2, 20, &mut t).unwrap();
        assert_eq!(c, Cursor::new(3, 0));
    }

    #[test]
    fn move_to_begin_and_end_span_whole_buffer() {
        let b = buf(&["abc", "de"]);
        let mut c = Cursor::new(1, 1);
        let mut t = RecordingTerminal::new();
        move_to_begin(&b, &mut c, 2, 20, &mut t).unwrap();
        assert_eq!(c, Cursor::origin());
        move_to_end(&b, &mut c, 2, 20, &mut t).unwrap();
        assert_eq!(c, Cursor::new(2, 1));
    }
}
