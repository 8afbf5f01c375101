//! The navigation engine and renderer: composes
//! `edit-text`, `edit-buffer`, `edit-viewport`, and `edit-terminal` into the
//! part of the editor that actually moves a real cursor and paints real
//! text. `edit-core` owns the transactional `update` envelope that calls
//! into this crate at the right points; nothing here knows about that
//! envelope's ordering.

pub mod metrics;
pub mod navigation;
pub mod renderer;

pub use metrics::cursor_absolute_row;
pub use navigation::{
    move_cursor_to, move_down, move_left, move_right, move_to_begin, move_to_end,
    move_to_end_of_line, move_up, NavigationError,
};
pub use renderer::{HeaderFn, PromptFn, Renderer};
