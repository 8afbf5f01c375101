//! Terminal width/height provider: read from here unless the editor has an
//! explicit override configured.

use anyhow::{Context, Result};

pub trait SizeProvider {
    /// Returns `(width, height)` in terminal cells.
    fn size(&self) -> Result<(u16, u16)>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermSizeProvider;

impl SizeProvider for CrosstermSizeProvider {
    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("query terminal size")
    }
}
