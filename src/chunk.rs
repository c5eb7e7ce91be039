//! Byte-range view with explicit borrowed/owned provenance.
//!
//! Mirrors the `chunk` struct from the original C inline parser (`data` +
//! `len` + an `alloc` flag), but the ownership flag becomes a real enum
//! discriminant instead of a convention callers have to honor by hand.

use std::borrow::Cow;
use std::fmt;

/// A contiguous run of text, either borrowed from the source buffer or
/// owned (produced by normalization, unescaping, or whitespace collapsing).
#[derive(Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    Borrowed(&'a str),
    Owned(Box<str>),
}

impl<'a> Chunk<'a> {
    pub fn as_str(&self) -> &str {
        match self {
            Chunk::Borrowed(s) => s,
            Chunk::Owned(s) => s,
        }
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn into_owned(self) -> Chunk<'static> {
        match self {
            Chunk::Borrowed(s) => Chunk::Owned(s.to_string().into_boxed_str()),
            Chunk::Owned(s) => Chunk::Owned(s),
        }
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(s: &'a str) -> Self {
        Chunk::Borrowed(s)
    }
}

impl From<String> for Chunk<'static> {
    fn from(s: String) -> Self {
        Chunk::Owned(s.into_boxed_str())
    }
}

impl<'a> From<Cow<'a, str>> for Chunk<'a> {
    fn from(c: Cow<'a, str>) -> Self {
        match c {
            Cow::Borrowed(s) => Chunk::Borrowed(s),
            Cow::Owned(s) => Chunk::Owned(s.into_boxed_str()),
        }
    }
}

impl<'a> fmt::Debug for Chunk<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<'a> fmt::Display for Chunk<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
