//! Small-string-optimised filename storage (spec §2 row G, §9).
//!
//! The original keeps this cheap by tagging a pointer so short strings
//! live inline; a safe-Rust rendition gets the same effect from a plain
//! enum, at the cost of one discriminant byte. `INLINE_CAP` is chosen so
//! [`SmallString`] stays one cache line on 64-bit.

use std::fmt;

const INLINE_CAP: usize = 22;

/// An immutable, cheaply-cloned UTF-8 string, inline up to 22 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SmallString {
    Inline { buf: [u8; INLINE_CAP], len: u8 },
    Heap(Box<str>),
}

impl SmallString {
    #[must_use]
    pub fn new(s: &str) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            Self::Inline { buf, len: u8::try_from(s.len()).expect("len <= INLINE_CAP") }
        } else {
            Self::Heap(s.into())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inline { buf, len } => {
                std::str::from_utf8(&buf[..*len as usize]).expect("SmallString always holds valid UTF-8")
            }
            Self::Heap(s) => s,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Inline { len, .. } => *len as usize,
            Self::Heap(s) => s.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }
}

impl From<&str> for SmallString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SmallString {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl AsRef<str> for SmallString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SmallString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SmallString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_stay_inline() {
        let s = SmallString::new("main.rs");
        assert!(s.is_inline());
        assert_eq!(s.as_str(), "main.rs");
    }

    #[test]
    fn exactly_cap_length_stays_inline() {
        let text = "a".repeat(INLINE_CAP);
        let s = SmallString::new(&text);
        assert!(s.is_inline());
        assert_eq!(s.len(), INLINE_CAP);
    }

    #[test]
    fn longer_strings_spill_to_heap() {
        let text = "a".repeat(INLINE_CAP + 1);
        let s = SmallString::new(&text);
        assert!(!s.is_inline());
        assert_eq!(s.as_str(), text);
    }

    #[test]
    fn equality_ignores_representation() {
        let short = SmallString::new("short");
        let long = SmallString::new(&"x".repeat(INLINE_CAP + 5));
        assert_ne!(short, long);
        assert_eq!(SmallString::new("short"), short);
    }
}
