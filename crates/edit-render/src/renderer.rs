//! The renderer: the four pieces of the render pass that
//! `edit-core`'s `update` envelope invokes in sequence — rewind, header,
//! paint, and cursor restore. Splitting them into separate methods (rather
//! than one monolithic `render`) lets the envelope interleave them with the
//! mutation closure and the clamp/scroll steps that must run in between.

use edit_buffer::{Buffer, Cursor};
use edit_terminal::Terminal;
use edit_text::splitter;
use edit_text::wrap;
use edit_viewport::Viewport;

use crate::navigation::{self, NavigationError};

/// Invoked to draw the header region. Receives the terminal (already
/// positioned at the start of the header area) and the previous header
/// height in rows; returns the new header height in rows.
pub type HeaderFn<'a> = dyn FnMut(&mut dyn Terminal, usize) -> anyhow::Result<usize> + 'a;

/// Invoked once per logical line to produce that line's prompt text.
pub type PromptFn<'a> = dyn FnMut(usize) -> String + 'a;

/// The renderer's own persistent state: how tall the header currently is,
/// and how tall the expression was the last time it was painted (used by
/// `rewind` to decide whether an absolute jump or a logical sweep is
/// cheaper/correct).
#[derive(Debug, Default)]
pub struct Renderer {
    header_height: usize,
    last_expression_height: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_height(&self) -> usize {
        self.header_height
    }

    /// Step 2 of the render pass: move the real cursor back to the start of
    /// the expression (logical `(0, 0)`) without touching the scroll
    /// offset, using the buffer and cursor as they stood *before* this
    /// update's mutations run.
    pub fn rewind(
        &mut self,
        buffer: &Buffer,
        cursor: Cursor,
        prompt_width: usize,
        width: usize,
        terminal_height: usize,
        terminal: &mut dyn Terminal,
    ) -> Result<(), NavigationError> {
        if self.last_expression_height >= terminal_height {
            terminal.move_to_row(0)?;
        } else {
            let mut walker = cursor;
            navigation::move_cursor_to(buffer, &mut walker, 0, 0, prompt_width, width, terminal)?;
        }
        terminal.move_to_column(0)?;
        Ok(())
    }

    /// Step 3: erase the previously drawn header and invoke the header
    /// callback to draw the new one, recording its height.
    pub fn draw_header(
        &mut self,
        header_fn: &mut HeaderFn,
        terminal: &mut dyn Terminal,
    ) -> anyhow::Result<()> {
        terminal.clear_to_end_of_line()?;
        if self.header_height > 0 {
            terminal.move_relative(0, -(self.header_height as i32))?;
            terminal.clear_screen_down()?;
        }
        self.header_height = header_fn(terminal, self.header_height)?;
        Ok(())
    }

    /// Steps 4 and 5: clear the screen from the cursor down and paint
    /// whatever slice of the (possibly scrolled) expression is visible.
    /// Returns the logical position of the last character actually painted,
    /// which is where the real cursor now sits — the starting point for
    /// `restore_cursor`.
    #[allow(clippy::too_many_arguments)]
    pub fn paint(
        &mut self,
        buffer: &Buffer,
        viewport: &mut Viewport,
        prompt_width: usize,
        width: usize,
        terminal_height: usize,
        colorized_lines: &[String],
        prompt_fn: &mut PromptFn,
        force_full_view: bool,
        terminal: &mut dyn Terminal,
    ) -> Result<Cursor, NavigationError> {
        terminal.clear_screen_down()?;

        let viewport_height = terminal_height.saturating_sub(self.header_height).max(1);
        let total_height = buffer.total_visual_height(|len| {
            wrap::visual_height(prompt_width, len, width).unwrap_or(1)
        });
        self.last_expression_height = total_height;

        let (window_start, window_end) = if force_full_view {
            (0usize, usize::MAX)
        } else {
            let range = viewport.range(total_height, viewport_height);
            (range.start.0, range.end.0)
        };

        let mut absolute_row = 0usize;
        let mut last_painted = Cursor::origin();
        let mut printed_any_line = false;

        for (idx, raw_line) in buffer.lines().iter().enumerate() {
            let len = raw_line.chars().count();
            let vh = wrap::visual_height(prompt_width, len, width)?;
            let line_start = absolute_row;
            let line_end = line_start + vh - 1;
            absolute_row += vh;

            if line_end < window_start {
                continue;
            }
            if line_start > window_end {
                break;
            }

            let colorized = colorized_lines.get(idx).map(String::as_str).unwrap_or(raw_line);
            let fits_wholly = line_start >= window_start && line_end <= window_end;

            if fits_wholly {
                if printed_any_line {
                    terminal.line_feed()?;
                }
                printed_any_line = true;
                terminal.write_str(&prompt_fn(idx))?;
                terminal.write_str(colorized)?;
                last_painted = Cursor::new(len, idx);
            } else {
                let fragments = splitter::split_colorized_line(colorized, prompt_width, width);
                let mut printed_first = false;
                let mut last_k = 0usize;
                for (k, frag) in fragments.iter().enumerate() {
                    let abs_row = line_start + k;
                    if abs_row < window_start || abs_row > window_end {
                        continue;
                    }
                    if !printed_first {
                        if printed_any_line {
                            terminal.line_feed()?;
                        }
                        printed_any_line = true;
                        // A prompt belongs only to a fragment's own row 0 —
                        // `split_colorized_line` starts every later fragment
                        // at column 0 of its row, so prepending a prompt to
                        // a scrolled-into continuation fragment would
                        // overflow the row by `prompt_width` columns.
                        if k == 0 {
                            terminal.write_str(&prompt_fn(idx))?;
                        }
                        printed_first = true;
                    }
                    terminal.write_str(frag)?;
                    last_k = k;
                }
                let printed_chars = ((last_k + 1) * width).saturating_sub(prompt_width).min(len);
                last_painted = Cursor::new(printed_chars, idx);
            }

            // A line whose last visual row is exactly full needs an
            // explicit line feed — auto-wrap alone would leave the real
            // cursor one row short of where the arithmetic expects it.
            if line_end <= window_end {
                let lrw = wrap::last_row_width(prompt_width, len, width)?;
                if lrw == 0 {
                    terminal.line_feed()?;
                }
            }
        }

        viewport.clamp(total_height, viewport_height);
        Ok(last_painted)
    }

    /// Step 6: walk the real cursor from wherever `paint` left it to the
    /// logical cursor's position, without touching the scroll offset.
    pub fn restore_cursor(
        &self,
        buffer: &Buffer,
        from: Cursor,
        to: Cursor,
        prompt_width: usize,
        width: usize,
        terminal: &mut dyn Terminal,
    ) -> Result<(), NavigationError> {
        let mut walker = from;
        navigation::move_cursor_to(buffer, &mut walker, to.x, to.y, prompt_width, width, terminal)
    }
}
