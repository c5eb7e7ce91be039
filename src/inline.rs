//! The inline node tree.
//!
//! Trimmed from the teacher's `parser::ast::NodeKind` down to the
//! inline-only variants, with the `Position`/`Span` fields dropped (no
//! source-map output) and the payloads shaped for the constructs this
//! parser actually emits.

use crate::chunk::Chunk;

/// One node of the parsed inline tree.
///
/// Children of `Emph`/`Strong` and the label of `Link`/`Image` are plain
/// `Vec<Inline>` rather than an intrusive linked list — see DESIGN.md (D5).
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    Str(Chunk<'a>),
    Code(Chunk<'a>),
    RawHtml(Chunk<'a>),
    Entity(Chunk<'a>),
    LineBreak,
    SoftBreak,
    Emph(Vec<Inline<'a>>),
    Strong(Vec<Inline<'a>>),
    Link {
        label: Vec<Inline<'a>>,
        url: Box<str>,
        title: Box<str>,
    },
    Image {
        label: Vec<Inline<'a>>,
        url: Box<str>,
        title: Box<str>,
    },
}

impl<'a> Inline<'a> {
    pub fn str_lit(s: &'a str) -> Self {
        Inline::Str(Chunk::Borrowed(s))
    }

    /// Turns a resolved `Link` into an `Image` in place, used by the `!`
    /// dispatcher once the bracket handler has produced a link (§4.5).
    pub fn retag_link_as_image(self) -> Self {
        match self {
            Inline::Link { label, url, title } => Inline::Image { label, url, title },
            other => other,
        }
    }
}

/// The list of top-level inline nodes produced by a single `parse_inlines`
/// call. Kept as a type alias rather than a wrapper struct: a `Vec` already
/// has the drop semantics §5 requires (dropping it frees every owned
/// allocation reachable from it, including nested children).
pub type InlineList<'a> = Vec<Inline<'a>>;
