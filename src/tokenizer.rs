//! Pluggable lexing for the symbol index (spec §4.8). The engine only
//! needs a stream of classified tokens; the exact lexical grammar of any
//! given source language is an external collaborator's concern (spec
//! §1). [`CTokenizer`] is the one concrete implementation this crate
//! ships, covering C/C++-shaped identifiers, grounded on
//! `examples/original_source/symbol_finder.h`'s keyword table.

/// What a [`Tokenizer`] classified a run of text as. Only `Word` tokens
/// are ever indexed as symbols; everything else exists so a tokenizer
/// can report structure without the caller re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// 1-based source line.
    pub line: usize,
}

/// Splits source text into classified tokens.
pub trait Tokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

/// Single-word keywords and identifier-shaped operator names a symbol
/// index should never treat as a user symbol. Trimmed from
/// `symbol_finder.h`'s `cpp_keywords` table down to entries that could
/// ever actually collide with an identifier run (multi-character
/// operators and punctuators can't: this tokenizer never emits them as
/// `Word` tokens in the first place).
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

#[must_use]
pub fn is_keyword(word: &str) -> bool {
    CPP_KEYWORDS.contains(&word)
}

/// Whether a file extension is one this tokenizer knows how to read
/// (spec §4.8 `supported_file`).
#[must_use]
pub fn supported_extension(ext: &str) -> bool {
    matches!(ext, "c" | "cpp" | "cc" | "cxx" | "h" | "hpp" | "hh" | "hxx")
}

/// Tokenizes identifier runs (`[A-Za-z_][A-Za-z0-9_]*`) per line,
/// discarding everything else. This is intentionally looser than a full
/// C/C++ lexer (it does not strip comments or string-literal contents),
/// trading precision for not needing a real preprocessor/lexer — good
/// enough to seed a symbol index.
pub struct CTokenizer;

impl Tokenizer for CTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line_number = line_no + 1;
            let mut start = None;
            for (i, c) in line.char_indices() {
                let continues_word = c.is_alphanumeric() || c == '_';
                let starts_word = c.is_alphabetic() || c == '_';
                match (continues_word, starts_word, start) {
                    (_, true, None) => start = Some(i),
                    (false, _, Some(s)) => {
                        tokens.push(Token { kind: TokenKind::Word, text: &line[s..i], line: line_number });
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = start {
                tokens.push(Token { kind: TokenKind::Word, text: &line[s..], line: line_number });
            }
        }
        tokens
    }
}
