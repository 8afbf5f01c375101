//! Highlight-aware wrap splitter.
//!
//! Splits one colorized logical line — a string that may contain ANSI SGR
//! escapes (`ESC [ … m`) interleaved with printable scalars — into the
//! fragments the renderer paints one-per-visual-row. SGR escapes consume
//! zero printable columns; the active color is remembered and re-emitted at
//! the start of every fragment after the first so that wrapping a colored
//! line never leaves a continuation row in the terminal's default color.

const ESC: char = '\u{1b}';
const RESET: &str = "\x1b[0m";

/// Split `line` into visual-row fragments for a terminal `width` columns
/// wide, given that `prompt_width` columns are already consumed on the
/// line's first visual row.
///
/// Uncolored input (no escapes) degenerates to plain fixed-width chunking.
pub fn split_colorized_line(line: &str, prompt_width: usize, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut col = prompt_width;
    let mut active_color: Option<String> = None;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == ESC && chars.get(i + 1) == Some(&'[') {
            let start = i;
            i += 2;
            while i < chars.len() && chars[i] != 'm' {
                i += 1;
            }
            if i < chars.len() {
                i += 1; // include the terminating 'm'
            }
            let seq: String = chars[start..i].iter().collect();
            current.push_str(&seq);
            active_color = Some(seq);
            continue;
        }

        current.push(c);
        col += 1;
        i += 1;

        if col == width {
            current.push_str(RESET);
            fragments.push(std::mem::take(&mut current));
            if let Some(ac) = &active_color {
                current.push_str(ac);
            }
            col = 0;
        }
    }

    // Only keep a trailing fragment if it actually holds printable content,
    // or if it is the sole fragment for an empty line.
    if col > 0 || fragments.is_empty() {
        fragments.push(current);
    }

    fragments
}

/// Strip SGR escapes, returning the plain printable text (used to validate
/// fragment round-trips and anywhere uncolored length matters).
pub fn strip_sgr(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ESC && chars.get(i + 1) == Some(&'[') {
            i += 2;
            while i < chars.len() && chars[i] != 'm' {
                i += 1;
            }
            if i < chars.len() {
                i += 1;
            }
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_chunking() {
        // prompt_width 0, width 5, line of 12 chars -> rows of 5,5,2.
        let frags = split_colorized_line("abcdefghijkl", 0, 5);
        assert_eq!(frags, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn respects_prompt_width_on_first_row() {
        let frags = split_colorized_line("0123456789", 7, 10);
        assert_eq!(frags, vec!["0123", "456789"]);
    }

    #[test]
    fn empty_line_yields_single_empty_fragment() {
        let frags = split_colorized_line("", 0, 10);
        assert_eq!(frags, vec![""]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_fragment() {
        let frags = split_colorized_line("01234", 0, 5);
        assert_eq!(frags, vec!["01234"]);
    }

    #[test]
    fn color_is_preserved_across_wrap_boundary() {
        let line = format!("{}redlongtext{}", "\x1b[31m", RESET);
        let frags = split_colorized_line(&line, 0, 5);
        // First fragment: escape + 5 chars + reset.
        assert_eq!(frags[0], "\x1b[31mredlo\x1b[0m");
        // Continuation re-applies the active color before more text.
        assert!(frags[1].starts_with("\x1b[31m"));
    }

    /// Stripping SGR from the concatenation of fragments (minus the
    /// resets/re-applied color codes that are also escapes) reproduces the
    /// original plain text.
    #[test]
    fn property_fragments_concatenate_back_to_original_text() {
        let line = format!("{}hello {}world{}", "\x1b[1m", "\x1b[32m", RESET);
        let frags = split_colorized_line(&line, 2, 4);
        let joined: String = frags.concat();
        assert_eq!(strip_sgr(&joined), strip_sgr(&line));
    }
}
