//! Symbol index for C/C++ sources (spec §4.8), grounded on
//! `examples/original_source/symbols.h` and `symbol_finder.h`: an ART
//! keyed by symbol name (exact match only — unlike the file index, we
//! don't want prefix/suffix search here, so a suffix tree buys nothing
//! but memory), whose value is every `(file, [(line, preview)])`
//! occurrence of that name (spec §3 "Symbol refs").

use crate::art::Art;
use crate::fileindex::FileRecord;
use crate::slotmap::Handle;
use crate::tokenizer::{is_keyword, Token, TokenKind, Tokenizer};

/// One line, in one file, where a symbol occurs, plus the verbatim
/// source line it occurred on (trimmed of trailing whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    pub line: usize,
    pub preview: String,
}

/// Every occurrence of a symbol in one file.
#[derive(Debug)]
pub struct SymbolRefs {
    pub file: Handle<FileRecord>,
    pub lines: Vec<LineRef>,
}

/// One indexed identifier and everywhere it's used.
#[derive(Debug, Default)]
pub struct Symbol {
    pub refs: Vec<SymbolRefs>,
}

/// Maps symbol name to every occurrence across the indexed source tree.
pub struct SymbolIndex {
    index: Art<Symbol>,
}

impl Default for SymbolIndex {
    fn default() -> Self {
        Self { index: Art::new() }
    }
}

impl SymbolIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `symbol_name` at `line` in `file`, with
    /// `line_text` as its preview (spec §4.8 `insert`). Duplicate lines
    /// for the same file are not recorded twice.
    pub fn insert(&mut self, symbol_name: &str, file: Handle<FileRecord>, line: usize, line_text: &str) {
        let preview = line_text.trim_end().to_owned();
        if let Some(symbol) = self.index.search_mut(symbol_name.as_bytes()) {
            match symbol.refs.iter_mut().find(|r| r.file == file) {
                Some(refs) => {
                    if !refs.lines.iter().any(|l| l.line == line) {
                        refs.lines.push(LineRef { line, preview });
                    }
                }
                None => symbol.refs.push(SymbolRefs { file, lines: vec![LineRef { line, preview }] }),
            }
            return;
        }
        self.index.insert(
            symbol_name.as_bytes(),
            Symbol { refs: vec![SymbolRefs { file, lines: vec![LineRef { line, preview }] }] },
        );
    }

    /// Tokenizes `text` with `tokenizer` and indexes every non-keyword
    /// word token as a symbol occurrence in `file`, with each
    /// occurrence's source line as its preview (spec §4.8, ambient
    /// `CTokenizer` wiring per `SPEC_FULL.md` §4.8).
    pub fn index_source(&mut self, text: &str, file: Handle<FileRecord>, tokenizer: &dyn Tokenizer) {
        let source_lines: Vec<&str> = text.lines().collect();
        for Token { kind, text: word, line } in tokenizer.tokenize(text) {
            if kind != TokenKind::Word || is_keyword(word) {
                continue;
            }
            let preview = source_lines.get(line - 1).copied().unwrap_or("");
            self.insert(word, file, line, preview);
        }
    }

    /// Removes one occurrence of `symbol_name` at `line` in `file`,
    /// pruning the symbol entirely once its last reference is gone.
    pub fn erase(&mut self, symbol_name: &str, file: Handle<FileRecord>, line: usize) {
        let Some(symbol) = self.index.search_mut(symbol_name.as_bytes()) else { return };
        let Some(pos) = symbol.refs.iter().position(|r| r.file == file) else { return };
        let lines = &mut symbol.refs[pos].lines;
        let Some(line_pos) = lines.iter().position(|l| l.line == line) else { return };
        lines.remove(line_pos);
        if lines.is_empty() {
            symbol.refs.remove(pos);
        }
        if symbol.refs.is_empty() {
            self.index.erase(symbol_name.as_bytes());
        }
    }

    #[must_use]
    pub fn search(&self, symbol_name: &str) -> Option<&Symbol> {
        self.index.search(symbol_name.as_bytes())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slotmap::SlotMap;

    fn handle(n: u32) -> Handle<FileRecord> {
        let mut map: SlotMap<FileRecord> = SlotMap::new();
        for _ in 0..n {
            map.insert(FileRecord::new("x", std::sync::Arc::from("/")));
        }
        map.insert(FileRecord::new("x", std::sync::Arc::from("/")))
    }

    #[test]
    fn insert_then_search_finds_symbol_with_its_line_and_preview() {
        let mut idx = SymbolIndex::new();
        let f = handle(0);
        idx.insert("process_frame", f, 42, "  process_frame(buf);  ");
        let sym = idx.search("process_frame").expect("present");
        assert_eq!(sym.refs.len(), 1);
        assert_eq!(sym.refs[0].lines[0].line, 42);
        assert_eq!(sym.refs[0].lines[0].preview, "  process_frame(buf);");
    }

    #[test]
    fn repeated_inserts_on_same_file_dedupe_lines() {
        let mut idx = SymbolIndex::new();
        let f = handle(0);
        idx.insert("count", f, 1, "let count = 0;");
        idx.insert("count", f, 1, "let count = 0;");
        idx.insert("count", f, 2, "count += 1;");
        let sym = idx.search("count").unwrap();
        let lines: Vec<usize> = sym.refs[0].lines.iter().map(|l| l.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn index_source_skips_keywords_and_bare_numbers_and_captures_preview() {
        let mut idx = SymbolIndex::new();
        let f = handle(0);
        idx.index_source("int total = count + 1;\n", f, &crate::tokenizer::CTokenizer);
        assert!(idx.search("int").is_none());
        let total = idx.search("total").expect("present");
        assert_eq!(total.refs[0].lines[0].preview, "int total = count + 1;");
        assert!(idx.search("count").is_some());
        assert!(idx.search("1").is_none());
    }

    #[test]
    fn erase_removes_line_then_ref_then_whole_symbol() {
        let mut idx = SymbolIndex::new();
        let f = handle(0);
        idx.insert("tmp", f, 1, "int tmp = 0;");
        idx.insert("tmp", f, 2, "tmp += 1;");
        idx.erase("tmp", f, 1);
        let remaining: Vec<usize> = idx.search("tmp").unwrap().refs[0].lines.iter().map(|l| l.line).collect();
        assert_eq!(remaining, vec![2]);
        idx.erase("tmp", f, 2);
        assert!(idx.search("tmp").is_none());
    }

    #[test]
    fn finds_symbol_with_two_occurrences_across_lines() {
        let mut idx = SymbolIndex::new();
        let f = handle(0);
        let src = "void f() {\n  int my_sym = 0;\n}\nvoid g() {\n  my_sym++;\n}\n";
        idx.index_source(src, f, &crate::tokenizer::CTokenizer);
        let sym = idx.search("my_sym").expect("present");
        assert_eq!(sym.refs.len(), 1);
        let previews: Vec<(usize, &str)> =
            sym.refs[0].lines.iter().map(|l| (l.line, l.preview.as_str())).collect();
        assert_eq!(previews, vec![(2, "  int my_sym = 0;"), (5, "  my_sym++;")]);
    }
}
