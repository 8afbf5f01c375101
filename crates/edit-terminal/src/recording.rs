//! An in-memory `Terminal` that records every call instead of touching a
//! real screen. Tests assert against the exact ordered command stream,
//! since the escape-sequence ordering is externally observable and must be
//! preserved exactly, rather than against terminal side effects that
//! cannot be inspected headlessly.

use crate::Terminal;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCommand {
    HideCursor,
    ShowCursor,
    MoveRelative { dx: i32, dy: i32 },
    MoveToColumn(u16),
    MoveToRow(u16),
    ClearToEndOfLine,
    ClearScreenDown,
    Write(String),
    LineFeed,
    Flush,
}

#[derive(Debug, Default)]
pub struct RecordingTerminal {
    commands: Vec<RecordedCommand>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Concatenation of every `write_str` payload, in order — the text a
    /// viewer would see if all cursor motion were a no-op scroll-back.
    pub fn printed_text(&self) -> String {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RecordedCommand::Write(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for RecordingTerminal {
    fn hide_cursor(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::ShowCursor);
        Ok(())
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<()> {
        if dx != 0 || dy != 0 {
            self.commands.push(RecordedCommand::MoveRelative { dx, dy });
        }
        Ok(())
    }

    fn move_to_column(&mut self, col: u16) -> Result<()> {
        self.commands.push(RecordedCommand::MoveToColumn(col));
        Ok(())
    }

    fn move_to_row(&mut self, row: u16) -> Result<()> {
        self.commands.push(RecordedCommand::MoveToRow(row));
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::ClearToEndOfLine);
        Ok(())
    }

    fn clear_screen_down(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::ClearScreenDown);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        if !s.is_empty() {
            self.commands.push(RecordedCommand::Write(s.to_string()));
        }
        Ok(())
    }

    fn line_feed(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::LineFeed);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.commands.push(RecordedCommand::Flush);
        Ok(())
    }
}

/// Lets a caller hold on to a `RecordingTerminal` while also handing an
/// owned `Box<dyn Terminal>` to something that takes ownership of its
/// terminal (such as `edit_core::Editor`) — the shared-ownership pattern an
/// integration test needs to inspect the command stream after the fact.
impl Terminal for Rc<RefCell<RecordingTerminal>> {
    fn hide_cursor(&mut self) -> Result<()> {
        self.borrow_mut().hide_cursor()
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.borrow_mut().show_cursor()
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.borrow_mut().move_relative(dx, dy)
    }

    fn move_to_column(&mut self, col: u16) -> Result<()> {
        self.borrow_mut().move_to_column(col)
    }

    fn move_to_row(&mut self, row: u16) -> Result<()> {
        self.borrow_mut().move_to_row(row)
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        self.borrow_mut().clear_to_end_of_line()
    }

    fn clear_screen_down(&mut self) -> Result<()> {
        self.borrow_mut().clear_screen_down()
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.borrow_mut().write_str(s)
    }

    fn line_feed(&mut self) -> Result<()> {
        self.borrow_mut().line_feed()
    }

    fn flush(&mut self) -> Result<()> {
        self.borrow_mut().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut t = RecordingTerminal::new();
        t.hide_cursor().unwrap();
        t.write_str("hi").unwrap();
        t.show_cursor().unwrap();
        assert_eq!(
            t.commands(),
            &[
                RecordedCommand::HideCursor,
                RecordedCommand::Write("hi".to_string()),
                RecordedCommand::ShowCursor,
            ]
        );
    }

    #[test]
    fn zero_magnitude_relative_move_is_not_recorded() {
        let mut t = RecordingTerminal::new();
        t.move_relative(0, 0).unwrap();
        assert!(t.commands().is_empty());
    }

    #[test]
    fn shared_handle_records_into_the_same_command_stream() {
        let shared = Rc::new(RefCell::new(RecordingTerminal::new()));
        let mut handle = shared.clone();
        handle.hide_cursor().unwrap();
        handle.write_str("hi").unwrap();
        assert_eq!(
            shared.borrow().commands(),
            &[RecordedCommand::HideCursor, RecordedCommand::Write("hi".to_string())]
        );
    }
}
