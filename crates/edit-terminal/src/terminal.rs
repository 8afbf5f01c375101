//! The `Terminal` trait and its `crossterm` implementation.
//!
//! Only a narrow control vocabulary is exposed: hide/show cursor, a
//! relative cursor move, absolute column/row jumps, clear-to-end-of-line,
//! clear-screen-down, and plain text output. No other escape sequence is
//! ever emitted by this crate.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveDown, MoveLeft, MoveRight, MoveToColumn, MoveToRow, MoveUp, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;

pub trait Terminal {
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    /// Move the real cursor by `(dx, dy)` columns/rows. Positive `dx` moves
    /// right, positive `dy` moves down; either may be negative.
    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<()>;
    /// Jump to an absolute 0-based column on the current row.
    fn move_to_column(&mut self, col: u16) -> Result<()>;
    /// Jump to an absolute 0-based row, preserving column.
    fn move_to_row(&mut self, row: u16) -> Result<()>;
    fn clear_to_end_of_line(&mut self) -> Result<()>;
    fn clear_screen_down(&mut self) -> Result<()>;
    fn write_str(&mut self, s: &str) -> Result<()>;
    fn line_feed(&mut self) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// A `Terminal` that queues `crossterm` commands onto any `Write` sink and
/// flushes them in one batch — the write-batching discipline `oxidized`'s
/// own writer uses, so a render pass is one syscall instead of one per
/// escape sequence.
pub struct CrosstermTerminal<W: Write> {
    out: W,
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.out, Hide).context("hide cursor")
    }

    fn show_cursor(&mut self) -> Result<()> {
        queue!(self.out, Show).context("show cursor")
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<()> {
        if dy < 0 {
            queue!(self.out, MoveUp((-dy) as u16)).context("move up")?;
        } else if dy > 0 {
            queue!(self.out, MoveDown(dy as u16)).context("move down")?;
        }
        if dx < 0 {
            queue!(self.out, MoveLeft((-dx) as u16)).context("move left")?;
        } else if dx > 0 {
            queue!(self.out, MoveRight(dx as u16)).context("move right")?;
        }
        Ok(())
    }

    fn move_to_column(&mut self, col: u16) -> Result<()> {
        queue!(self.out, MoveToColumn(col)).context("move to column")
    }

    fn move_to_row(&mut self, row: u16) -> Result<()> {
        queue!(self.out, MoveToRow(row)).context("move to row")
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine)).context("clear to end of line")
    }

    fn clear_screen_down(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown)).context("clear screen down")
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }
        queue!(self.out, Print(s)).context("write")
    }

    fn line_feed(&mut self) -> Result<()> {
        self.out.write_all(b"\r\n").context("line feed")
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush terminal output")
    }
}
