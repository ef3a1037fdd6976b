//! Console collaborator contracts (spec §4.12, §6). The real
//! interactive TUI loop — cursor math, ANSI screen control, keystroke
//! decoding — is out of scope (spec §1); this module defines the trait
//! boundary a real frontend implements against, plus the simplest
//! concrete renderer: a flat, non-interactive match listing with the
//! highlight bitmap rendered as bold spans.

use crate::fileindex::{FileIndex, Match};

/// Reads one query string from a UI collaborator. A real TUI would read
/// keystrokes incrementally; this crate only needs the final string.
pub trait ConsoleInput {
    fn read_query(&mut self) -> Option<String>;
}

/// Renders a set of matches to the user.
pub trait ConsoleOutput {
    fn render(&mut self, index: &FileIndex, matches: &[Match]);
}

const BOLD: &str = "\u{1b}[1m";
const RESET: &str = "\u{1b}[0m";

/// Prints each match's full path, one per line, with matched byte
/// ranges wrapped in ANSI bold.
#[derive(Debug, Default)]
pub struct AnsiListRenderer;

impl AnsiListRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_line(full_path: &str, highlight: &[bool]) -> String {
        let mut out = String::with_capacity(full_path.len() + 8);
        let mut bold = false;
        for (i, ch) in full_path.char_indices() {
            let hit = highlight.get(i).copied().unwrap_or(false);
            if hit && !bold {
                out.push_str(BOLD);
                bold = true;
            } else if !hit && bold {
                out.push_str(RESET);
                bold = false;
            }
            out.push(ch);
        }
        if bold {
            out.push_str(RESET);
        }
        out
    }
}

impl ConsoleOutput for AnsiListRenderer {
    fn render(&mut self, index: &FileIndex, matches: &[Match]) {
        for m in matches {
            let Some(file) = index.file(m.file) else { continue };
            let full_path = file.full_path();
            println!("{}", Self::render_line(&full_path, &m.highlight));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_wraps_only_highlighted_bytes() {
        let highlight = vec![false, false, true, true, false];
        let line = AnsiListRenderer::render_line("a/main", &highlight);
        assert!(line.contains(BOLD));
        assert!(line.contains(RESET));
        assert!(line.starts_with("a/"));
    }

    #[test]
    fn render_line_with_no_highlights_emits_no_ansi_codes() {
        let highlight = vec![false; 6];
        let line = AnsiListRenderer::render_line("a/main", &highlight);
        assert_eq!(line, "a/main");
    }
}
