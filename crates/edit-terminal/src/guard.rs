//! RAII guard restoring terminal state on drop: a process-exit hook that
//! emits a "show cursor" sequence to restore terminal state even after
//! abnormal exit.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

/// Enters raw mode on construction; on drop, always shows the cursor and
/// leaves raw mode, even if the caller's stack is unwinding from a panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = execute!(stdout(), Show);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}
