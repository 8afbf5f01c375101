//! Pure wrap arithmetic and the highlight-aware wrap splitter.
//!
//! Nothing in this crate touches a terminal, a buffer, or an editor's state.
//! Every function here is a total function of a small set of scalar inputs
//! (prompt width, terminal width, a column or a string), which is what makes
//! the soft-wrap math in `edit-render` and `edit-core` testable in isolation
//! from cursor bookkeeping.
//!
//! Character width is always 1 per `char` (Unicode scalar value). Grapheme
//! clusters and East-Asian wide glyphs are out of scope; see the crate's
//! top-level design notes for the rationale.

pub mod coords;
pub mod splitter;
pub mod wrap;

pub use coords::{AbsoluteVisualRow, LogicalColumn, VisualRow};
pub use splitter::split_colorized_line;
pub use wrap::{WrapError, last_row_width, visual_height};
