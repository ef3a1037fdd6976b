//! Crate-wide error type for the small number of fatal, propagated
//! failures (spec §7): bad startup configuration and clipboard/console
//! collaborator failures. Everything else — duplicate insertion, missing
//! keys, per-path scan errors, tokenisation failures — is non-fatal and
//! never surfaces as an `Err` (spec §7), matching
//! `examples/alexcu2718-fdf/src/error.rs`'s plain enum + manual
//! `Display`/`Error` idiom (see also its `glob::Error`).

use std::fmt;

#[derive(Debug)]
pub enum ArtfindError {
    /// The configured root does not exist or is not a directory.
    InvalidRoot(std::path::PathBuf),
    /// A clipboard collaborator failed to accept the copied text.
    Clipboard(String),
    /// A console collaborator failed to render or read input.
    Console(std::io::Error),
}

impl fmt::Display for ArtfindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot(path) => write!(f, "not a directory: {}", path.display()),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            Self::Console(err) => write!(f, "console error: {err}"),
        }
    }
}

impl std::error::Error for ArtfindError {}
