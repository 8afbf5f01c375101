//! The `Editor` facade: owns every piece of state the core needs and wires
//! `edit-text`, `edit-buffer`, `edit-viewport`, `edit-terminal`, and
//! `edit-render` together behind the transactional `update` envelope.
//!
//! Nothing below this crate knows about callbacks, configuration, or
//! caching — those are this crate's job; `edit-render` only ever sees
//! plain buffers, cursors, and terminals.

mod config;
mod error;

pub use config::EditorConfig;
pub use error::EditorError;

pub use edit_buffer::{Buffer, Cursor};

use edit_buffer::clamp_cursor;
use edit_render::{navigation, HeaderFn, Renderer};
use edit_terminal::{SizeProvider, Terminal};
use edit_text::splitter;
use edit_text::wrap;
use edit_viewport::Viewport;

#[derive(Debug, Default)]
struct Caches {
    joined: Option<String>,
    colorized_lines: Option<Vec<String>>,
    expression_height: Option<usize>,
}

/// The editing session. One `Editor` owns one buffer, one logical cursor,
/// the viewport, the renderer's own cross-render state, and the callbacks
/// an embedding application supplies.
pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
    viewport: Viewport,
    renderer: Renderer,
    config: EditorConfig,
    /// `p` in the design notes: printable width of the current prompt,
    /// recomputed by `prompt_next`.
    prompt_width: usize,
    terminal: Box<dyn Terminal>,
    size_provider: Box<dyn SizeProvider>,
    prompt_fn: Box<dyn FnMut(usize, bool) -> String>,
    header_fn: Box<HeaderFn<'static>>,
    highlight_fn: Box<dyn FnMut(&str) -> String>,
    caches: Caches,
}

impl Editor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: EditorConfig,
        terminal: Box<dyn Terminal>,
        size_provider: Box<dyn SizeProvider>,
        prompt_fn: Box<dyn FnMut(usize, bool) -> String>,
        header_fn: Box<HeaderFn<'static>>,
        highlight_fn: Box<dyn FnMut(&str) -> String>,
    ) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::origin(),
            viewport: Viewport::new(),
            renderer: Renderer::new(),
            config,
            prompt_width: 0,
            terminal,
            size_provider,
            prompt_fn,
            header_fn,
            highlight_fn,
            caches: Caches::default(),
        }
    }

    /// Construct with no header and identity highlighting — the defaults
    /// for an embedder that does not need either callback.
    pub fn with_defaults(
        config: EditorConfig,
        terminal: Box<dyn Terminal>,
        size_provider: Box<dyn SizeProvider>,
        prompt_fn: Box<dyn FnMut(usize, bool) -> String>,
    ) -> Self {
        Self::new(
            config,
            terminal,
            size_provider,
            prompt_fn,
            Box::new(|_terminal: &mut dyn Terminal, _previous_height: usize| Ok(0)),
            Box::new(|s: &str| s.to_string()),
        )
    }

    fn width(&self) -> anyhow::Result<usize> {
        match self.config.width {
            Some(w) => Ok(w),
            None => Ok(self.size_provider.size()?.0 as usize),
        }
    }

    fn height(&self) -> anyhow::Result<usize> {
        match self.config.height {
            Some(h) => Ok(h),
            None => Ok(self.size_provider.size()?.1 as usize),
        }
    }

    fn invalidate_caches(&mut self) {
        self.caches = Caches::default();
    }

    fn colorized_lines(&mut self) -> Vec<String> {
        if let Some(lines) = &self.caches.colorized_lines {
            return lines.clone();
        }
        let joined = self.buffer.join();
        let colorized_text = if self.config.color_enabled {
            (self.highlight_fn)(&joined)
        } else {
            joined.clone()
        };
        let lines: Vec<String> = colorized_text.split('\n').map(str::to_string).collect();
        self.caches.joined = Some(joined);
        self.caches.colorized_lines = Some(lines.clone());
        lines
    }

    /// Steps 1-3 of the render pass: hide cursor, rewind, header.
    fn begin_render(&mut self, pre_cursor: Cursor) -> Result<(), EditorError> {
        let width = self.width()?;
        let height = self.height()?;
        self.terminal.hide_cursor()?;
        self.renderer.rewind(
            &self.buffer,
            pre_cursor,
            self.prompt_width,
            width,
            height,
            &mut *self.terminal,
        )?;
        self.renderer
            .draw_header(&mut *self.header_fn, &mut *self.terminal)?;
        Ok(())
    }

    /// Steps 7-9 of the render pass: paint the visible slice, restore the
    /// real cursor, show it again.
    fn finish_render(&mut self, force_full_view: bool) -> Result<(), EditorError> {
        let width = self.width()?;
        let height = self.height()?;
        let colorized_lines = self.colorized_lines();
        let color_enabled = self.config.color_enabled;
        let prompt_fn = &mut self.prompt_fn;
        let mut adapter = move |idx: usize| (prompt_fn)(idx, color_enabled);

        let last_painted = self.renderer.paint(
            &self.buffer,
            &mut self.viewport,
            self.prompt_width,
            width,
            height,
            &colorized_lines,
            &mut adapter,
            force_full_view,
            &mut *self.terminal,
        )?;
        self.renderer.restore_cursor(
            &self.buffer,
            last_painted,
            self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.terminal.show_cursor()?;
        self.terminal.flush()?;
        Ok(())
    }

    /// The transactional envelope: exactly the nine-step ordering
    /// hide/rewind/header/mutate/clamp/invalidate/paint/restore/show.
    pub fn update<F>(&mut self, force_full_view: bool, mutate: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut Buffer, &mut Cursor),
    {
        let _span = tracing::debug_span!("update", force_full_view).entered();
        let pre_cursor = self.cursor;

        self.begin_render(pre_cursor)?;
        mutate(&mut self.buffer, &mut self.cursor);
        clamp_cursor(&self.buffer, &mut self.cursor);
        self.invalidate_caches();
        self.finish_render(force_full_view)?;

        tracing::debug!(x = self.cursor.x, y = self.cursor.y, "update complete");
        Ok(())
    }

    /// Reset scroll, buffer, caches, and cursor; print the prompt for line 0
    /// and record its uncolored width as `p`.
    pub fn prompt_next(&mut self) -> Result<(), EditorError> {
        self.viewport.reset();
        self.buffer.clear();
        self.cursor = Cursor::origin();
        self.invalidate_caches();

        let prompt = (self.prompt_fn)(0, self.config.color_enabled);
        self.prompt_width = splitter::strip_sgr(&prompt).chars().count();
        self.terminal.write_str(&prompt)?;
        self.terminal.flush()?;
        Ok(())
    }

    /// Force a full-view repaint, optionally replacing the buffer first,
    /// move the cursor to the end without scrolling, and emit a
    /// final line feed.
    pub fn end_editing(&mut self, replacement: Option<Vec<String>>) -> Result<(), EditorError> {
        self.update(true, move |buffer, _cursor| {
            if let Some(lines) = replacement {
                buffer.replace(lines);
            }
        })?;
        let width = self.width()?;
        navigation::move_to_end(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.terminal.line_feed()?;
        self.terminal.flush()?;
        Ok(())
    }

    pub fn replace(&mut self, lines: Vec<String>) -> Result<(), EditorError> {
        self.update(false, move |buffer, _cursor| buffer.replace(lines))
    }

    pub fn push_char(&mut self, c: char) -> Result<(), EditorError> {
        let indent_width = self.config.indent_width;
        self.update(false, move |buffer, cursor| {
            edit_buffer::edit::push_char(buffer, cursor, c, indent_width);
        })
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), EditorError> {
        let indent_width = self.config.indent_width;
        let owned = s.to_string();
        self.update(false, move |buffer, cursor| {
            edit_buffer::edit::push_str(buffer, cursor, &owned, indent_width);
        })
    }

    pub fn insert_new_line(&mut self, indent: usize) -> Result<(), EditorError> {
        let indent_width = self.config.indent_width;
        self.update(false, move |buffer, cursor| {
            edit_buffer::edit::insert_new_line(buffer, cursor, indent, indent_width);
        })
    }

    pub fn delete(&mut self) -> Result<(), EditorError> {
        self.update(false, |buffer, cursor| edit_buffer::edit::delete(buffer, cursor))
    }

    pub fn back(&mut self) -> Result<(), EditorError> {
        self.update(false, |buffer, cursor| edit_buffer::edit::back(buffer, cursor))
    }

    pub fn clear_expression(&mut self) -> Result<(), EditorError> {
        self.update(false, |buffer, cursor| edit_buffer::edit::clear(buffer, cursor))
    }

    /// After any navigation move, recompute the scroll offset and repaint
    /// if it changed.
    fn after_move(&mut self) -> Result<(), EditorError> {
        let width = self.width()?;
        let height = self.height()?;
        let viewport_height = height.saturating_sub(self.renderer.header_height()).max(1);
        let expression_height = self.expression_height()?;
        let row = edit_render::metrics::cursor_absolute_row(
            &self.buffer,
            self.cursor,
            self.prompt_width,
            width,
        )
        .map_err(edit_render::NavigationError::from)?;
        let changed = self
            .viewport
            .update_scroll_offset(row, expression_height, viewport_height, 0);
        if changed {
            let pre_cursor = self.cursor;
            self.begin_render(pre_cursor)?;
            self.finish_render(false)?;
        }
        Ok(())
    }

    pub fn move_left(&mut self) -> Result<bool, EditorError> {
        let width = self.width()?;
        let moved = navigation::move_left(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        if moved {
            self.after_move()?;
        } else {
            tracing::trace!("move_left: did not move");
        }
        Ok(moved)
    }

    pub fn move_right(&mut self) -> Result<bool, EditorError> {
        let width = self.width()?;
        let moved = navigation::move_right(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        if moved {
            self.after_move()?;
        } else {
            tracing::trace!("move_right: did not move");
        }
        Ok(moved)
    }

    pub fn move_up(&mut self) -> Result<bool, EditorError> {
        let width = self.width()?;
        let moved = navigation::move_up(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        if moved {
            self.after_move()?;
        } else {
            tracing::trace!("move_up: did not move");
        }
        Ok(moved)
    }

    pub fn move_down(&mut self) -> Result<bool, EditorError> {
        let width = self.width()?;
        let moved = navigation::move_down(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        if moved {
            self.after_move()?;
        } else {
            tracing::trace!("move_down: did not move");
        }
        Ok(moved)
    }

    pub fn move_cursor_to(&mut self, x: usize, y: usize) -> Result<(), EditorError> {
        let width = self.width()?;
        navigation::move_cursor_to(
            &self.buffer,
            &mut self.cursor,
            x,
            y,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.after_move()
    }

    pub fn move_to_begin(&mut self) -> Result<(), EditorError> {
        let width = self.width()?;
        navigation::move_to_begin(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.after_move()
    }

    pub fn move_to_end(&mut self) -> Result<(), EditorError> {
        let width = self.width()?;
        navigation::move_to_end(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.after_move()
    }

    pub fn move_to_end_of_line(&mut self) -> Result<(), EditorError> {
        let width = self.width()?;
        navigation::move_to_end_of_line(
            &self.buffer,
            &mut self.cursor,
            self.prompt_width,
            width,
            &mut *self.terminal,
        )?;
        self.after_move()
    }

    pub fn scroll_up(&mut self, rows: usize) -> Result<bool, EditorError> {
        let height = self.height()?;
        let viewport_height = height.saturating_sub(self.renderer.header_height()).max(1);
        let expression_height = self.expression_height()?;
        let changed = self.viewport.scroll_up(rows, expression_height, viewport_height);
        if changed {
            let pre_cursor = self.cursor;
            self.begin_render(pre_cursor)?;
            self.finish_render(false)?;
        }
        Ok(changed)
    }

    pub fn scroll_down(&mut self, rows: usize) -> Result<bool, EditorError> {
        let height = self.height()?;
        let viewport_height = height.saturating_sub(self.renderer.header_height()).max(1);
        let expression_height = self.expression_height()?;
        let changed = self.viewport.scroll_down(rows, expression_height, viewport_height);
        if changed {
            let pre_cursor = self.cursor;
            self.begin_render(pre_cursor)?;
            self.finish_render(false)?;
        }
        Ok(changed)
    }

    pub fn expression(&mut self) -> String {
        if let Some(joined) = &self.caches.joined {
            return joined.clone();
        }
        let joined = self.buffer.join();
        self.caches.joined = Some(joined.clone());
        joined
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn position(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    pub fn expression_height(&mut self) -> Result<usize, EditorError> {
        if let Some(h) = self.caches.expression_height {
            return Ok(h);
        }
        let width = self.width()?;
        let prompt_width = self.prompt_width;
        let h = self
            .buffer
            .total_visual_height(|len| wrap::visual_height(prompt_width, len, width).unwrap_or(1));
        self.caches.expression_height = Some(h);
        Ok(h)
    }

    pub fn cursor_on_last_line(&self) -> bool {
        self.cursor.y + 1 == self.buffer.line_count()
    }

    pub fn current_line(&self) -> &str {
        self.buffer.line(self.cursor.y).unwrap_or("")
    }

    pub fn previous_line(&self) -> Option<&str> {
        if self.cursor.y == 0 {
            None
        } else {
            self.buffer.line(self.cursor.y - 1)
        }
    }

    pub fn next_line(&self) -> Option<&str> {
        self.buffer.line(self.cursor.y + 1)
    }

    /// The expression text up to `(x, y)` (defaulting to the current
    /// cursor), joined the same way `expression()` is.
    pub fn expression_before_cursor(&self, x: Option<usize>, y: Option<usize>) -> String {
        let y = y.unwrap_or(self.cursor.y).min(self.buffer.line_count().saturating_sub(1));
        let line = self.buffer.line(y).unwrap_or("");
        let x = x.unwrap_or(self.cursor.x).min(line.chars().count());

        let mut parts: Vec<String> = self.buffer.lines()[..y].to_vec();
        let byte_idx = line.char_indices().nth(x).map(|(b, _)| b).unwrap_or(line.len());
        parts.push(line[..byte_idx].to_string());
        parts.join("\n")
    }
}
