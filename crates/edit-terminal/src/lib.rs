//! The terminal adapter: the control vocabulary the rest of the crate is
//! allowed to emit, a `crossterm`-backed implementation, a terminal-size
//! provider, and the RAII guard that restores terminal state on drop.

pub mod guard;
pub mod recording;
mod size;
mod terminal;

pub use guard::RawModeGuard;
pub use recording::{RecordedCommand, RecordingTerminal};
pub use size::{CrosstermSizeProvider, SizeProvider};
pub use terminal::{CrosstermTerminal, Terminal};
