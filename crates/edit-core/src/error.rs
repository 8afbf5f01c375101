//! `EditorError`: the public-facing error type for every operation exposed
//! by [`crate::Editor`]. Precise, enumerable lower-level failures
//! (`BufferError`, `NavigationError`) fold in unchanged; anything
//! crossing an I/O boundary (callback failures, terminal writes) arrives as
//! a plain `anyhow::Error` and is surfaced to the caller without retry.

use edit_buffer::BufferError;
use edit_render::NavigationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
