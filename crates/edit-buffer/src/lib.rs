//! The logical text buffer, the logical cursor, and the edit API.
//!
//! `Buffer` is deliberately a flat `Vec<String>` rather than a rope: the
//! expressions this crate edits are interactive REPL inputs, not whole
//! files, so there is no large-document case that would justify rope
//! overhead. Every logical line is a `String` guaranteed free of embedded
//! `\n`; the buffer itself is guaranteed never empty.

pub mod edit;
mod error;

pub use error::BufferError;

/// An ordered, never-empty sequence of logical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// A fresh buffer holding a single empty logical line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Replace the whole buffer wholesale. An empty `lines` becomes `[""]`
    /// so the never-empty invariant is never violated by a caller-supplied
    /// replacement.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() { vec![String::new()] } else { lines };
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    pub fn line_len(&self, y: usize) -> usize {
        self.lines.get(y).map(|l| l.chars().count()).unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join every logical line with `\n`.
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    /// Total visual height in rows, given a function from (prompt_width,
    /// line length, width) to visual row count for a single line — kept
    /// generic here so this crate stays free of `edit-text`'s wrap
    /// arithmetic while still letting callers fold over every line once.
    pub fn total_visual_height<F>(&self, mut visual_height_of: F) -> usize
    where
        F: FnMut(usize) -> usize,
    {
        self.lines.iter().map(|l| visual_height_of(l.chars().count())).sum()
    }
}

/// The logical cursor, as an `(x, y)` logical column/line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// Clamp `cursor` back into `buffer`: `y` first, then `x` against the
/// (possibly different) line `y` now points at.
pub fn clamp_cursor(buffer: &Buffer, cursor: &mut Cursor) {
    let last_line = buffer.line_count().saturating_sub(1);
    if cursor.y > last_line {
        cursor.y = last_line;
    }
    let len = buffer.line_len(cursor.y);
    if cursor.x > len {
        cursor.x = len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_single_empty_line() {
        let b = Buffer::new();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), Some(""));
    }

    #[test]
    fn replace_with_empty_vec_stays_nonempty() {
        let mut b = Buffer::new();
        b.replace(vec![]);
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), Some(""));
    }

    #[test]
    fn join_round_trips_with_split() {
        let lines = vec!["a".to_string(), "bc".to_string(), "".to_string()];
        let mut b = Buffer::new();
        b.replace(lines.clone());
        let joined = b.join();
        let split: Vec<String> = joined.split('\n').map(str::to_string).collect();
        assert_eq!(split, lines);
    }

    #[test]
    fn clamp_shrinks_into_new_bounds() {
        let mut b = Buffer::new();
        b.replace(vec!["ab".to_string()]);
        let mut c = Cursor::new(5, 3);
        clamp_cursor(&b, &mut c);
        assert_eq!(c, Cursor::new(2, 0));
    }
}
