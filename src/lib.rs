// A CommonMark inline-content parser: code spans, emphasis/strong, links,
// images, autolinks, raw HTML, entities, and reference definitions.

use anyhow::Context;

pub mod chunk;
pub mod grammar;
pub mod inline;
pub mod parser;
pub mod reference;
pub mod subject;

pub use chunk::Chunk;
pub use inline::{Inline, InlineList};
pub use parser::{parse_inlines, parse_reference};
pub use reference::{normalize_label, Reference, ReferenceMap};
pub use subject::Subject;

/// Tree destructor, kept for interface parity with the original four
/// entry points (§6). Ordinary `Drop` already reclaims everything
/// reachable from `tree` once it goes out of scope; this just gives that
/// moment an explicit name at call sites that expect one.
pub fn free_inlines(tree: InlineList<'_>) {
    drop(tree);
}

/// Map destructor, kept for the same reason as `free_inlines`.
pub fn free_reference_map(refmap: ReferenceMap) {
    drop(refmap);
}

/// Convenience entry point for callers that only have raw bytes (e.g. a
/// block parser reading straight from a file buffer) rather than an
/// already-validated `&str`. `parse_inlines` itself stays total per §7 —
/// this is the one real fallibility boundary in the crate, so it's the one
/// place that reaches for `anyhow` rather than the infallible core API.
pub fn parse_inlines_from_bytes<'a>(
    buffer: &'a [u8],
    start_pos: usize,
    refmap: Option<&ReferenceMap>,
) -> anyhow::Result<InlineList<'a>> {
    let text = std::str::from_utf8(buffer).context("inline buffer is not valid UTF-8")?;
    Ok(parse_inlines(text, start_pos, refmap))
}
