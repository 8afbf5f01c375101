//! Newtypes for the three coordinate systems described in the design notes.
//!
//! `LogicalColumn` is a position within a single logical line (the `x` of
//! the logical cursor). `VisualRow` is a row *within one logical line's own
//! wrap* (0 on the line's first visual row, 1 on its first continuation,
//! …). `AbsoluteVisualRow` is a row within the whole rendered expression,
//! counting every logical line's visual rows cumulatively. Mixing these up
//! is the single most common class of bug in wrap arithmetic, so they are
//! kept as distinct types rather than three `usize` parameters that look
//! interchangeable at a call site.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalColumn(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualRow(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteVisualRow(pub usize);

impl Add<usize> for AbsoluteVisualRow {
    type Output = AbsoluteVisualRow;
    fn add(self, rhs: usize) -> Self::Output {
        AbsoluteVisualRow(self.0 + rhs)
    }
}

impl Sub<usize> for AbsoluteVisualRow {
    type Output = AbsoluteVisualRow;
    fn sub(self, rhs: usize) -> Self::Output {
        AbsoluteVisualRow(self.0.saturating_sub(rhs))
    }
}
