//! Soft-wrap arithmetic.
//!
//! `visual_height` and `last_row_width` are the two functions every other
//! component builds on: the viewport uses them to sum total expression
//! height, the navigation engine uses them to find wrap-row boundaries, and
//! the renderer uses them to decide where a line feed is mandatory.
//!
//! Both are defined only for `w > p` (terminal strictly wider than the
//! prompt). The narrower case is refused rather than computed into a
//! nonsensical layout — see `WrapError::TerminalTooNarrow`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WrapError {
    #[error("terminal width {width} is not greater than prompt width {prompt_width}")]
    TerminalTooNarrow { width: usize, prompt_width: usize },
}

fn check(prompt_width: usize, width: usize) -> Result<(), WrapError> {
    if width <= prompt_width {
        return Err(WrapError::TerminalTooNarrow {
            width,
            prompt_width,
        });
    }
    Ok(())
}

/// Number of visual rows a logical line of `len` scalar characters occupies,
/// given `prompt_width` columns consumed before its first character and a
/// terminal `width` columns wide: `1 + (p + len) div w`.
pub fn visual_height(prompt_width: usize, len: usize, width: usize) -> Result<usize, WrapError> {
    check(prompt_width, width)?;
    Ok(1 + (prompt_width + len) / width)
}

/// Column-within-last-visual-row for a line of `len` characters (or,
/// equivalently, the column-within-row for a cursor sitting at column
/// `len`): `(p + len) mod w`. A result of `0` means the line's last
/// visual row is exactly full — the renderer must then emit an explicit
/// line feed rather than relying on terminal auto-wrap.
pub fn last_row_width(prompt_width: usize, len: usize, width: usize) -> Result<usize, WrapError> {
    check(prompt_width, width)?;
    Ok((prompt_width + len) % width)
}

/// Which visual row (0-based, relative to the line's own first row) column
/// `col` falls on.
pub fn row_of_column(prompt_width: usize, col: usize, width: usize) -> Result<usize, WrapError> {
    check(prompt_width, width)?;
    Ok((prompt_width + col) / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_narrow_terminal() {
        assert_eq!(
            visual_height(10, 3, 10),
            Err(WrapError::TerminalTooNarrow {
                width: 10,
                prompt_width: 10
            })
        );
    }

    #[test]
    fn wraps_a_27_char_line_at_width_20() {
        assert_eq!(visual_height(7, 27, 20).unwrap(), 2);
        assert_eq!(last_row_width(7, 27, 20).unwrap(), 14);
    }

    #[test]
    fn wraps_exactly_at_terminal_width() {
        assert_eq!(visual_height(7, 10, 10).unwrap(), 2);
        assert_eq!(last_row_width(7, 10, 10).unwrap(), 7);
    }

    /// `visual_height(line) * w >= p + len(line) + 1` for every input.
    #[test]
    fn property_visual_height_lower_bound() {
        for p in 0..5usize {
            for w in (p + 1)..25usize {
                for len in 0..60usize {
                    let h = visual_height(p, len, w).unwrap();
                    assert!(h * w >= p + len + 1, "p={p} w={w} len={len} h={h}");
                    assert_eq!(h, 1 + (p + len) / w);
                }
            }
        }
    }

    #[test]
    fn exact_multiple_yields_zero_last_row_width() {
        // p + len == w exactly: the last row is full.
        assert_eq!(last_row_width(7, 13, 20).unwrap(), 0);
        assert_eq!(visual_height(7, 13, 20).unwrap(), 1);
    }
}
