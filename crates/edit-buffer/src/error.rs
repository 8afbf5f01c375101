use thiserror::Error;

/// Invariant violations local to the buffer/cursor pair. These never fire
/// from the public edit API, which always clamps; they exist so defensive
/// `debug_assert`-style checks can be promoted to a real error at crate
/// boundaries without `panic!`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("cursor line {y} out of range for buffer of {len} line(s)")]
    LineOutOfRange { y: usize, len: usize },
    #[error("cursor column {x} out of range for line of length {len}")]
    ColumnOutOfRange { x: usize, len: usize },
}
