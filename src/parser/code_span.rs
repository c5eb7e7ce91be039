//! Backtick code spans (§4.2).
//!
//! The exact-length rewind-scan is ported from the teacher's
//! `grammar/inlines/cm_code_span.rs`; the leading/trailing-space trim and
//! internal whitespace collapse follow `handle_backticks` in the original C
//! inline parser — except the original ships that collapse disabled
//! (`#if 0`), while this implements it per the spec (DESIGN.md D4).

use crate::chunk::Chunk;
use crate::inline::Inline;
use crate::subject::Subject;

/// Attempts to parse a code span at `subj.pos` (which must point at a
/// backtick). On success, advances past the closing run and returns the
/// `Code` node. On failure, leaves `pos` untouched so the caller can fall
/// back to emitting the opening run as literal text.
pub fn handle_backticks<'a>(subj: &mut Subject<'a, '_>) -> Option<Inline<'a>> {
    let start = subj.pos;
    let bytes = subj.buffer.as_bytes();
    let mut i = start;
    while bytes.get(i) == Some(&b'`') {
        i += 1;
    }
    let opening_len = i - start;
    log::debug!("code span: opening run of {opening_len} backticks at {start}");

    let mut scan = i;
    while scan < bytes.len() {
        if bytes[scan] == b'`' {
            let run_start = scan;
            while bytes.get(scan) == Some(&b'`') {
                scan += 1;
            }
            let run_len = scan - run_start;
            if run_len == opening_len {
                let content = &subj.buffer[i..run_start];
                subj.pos = scan;
                let collapsed = collapse_whitespace(content);
                log::debug!("code span matched, content {content:?}");
                return Some(Inline::Code(Chunk::Owned(collapsed.into_boxed_str())));
            }
        } else {
            scan += 1;
        }
    }
    log::debug!("code span: no matching closing run, falling back to literal backticks");
    None
}

/// Trims one leading/trailing space and folds internal whitespace runs to a
/// single space, per CommonMark's code-span content rule.
fn collapse_whitespace(content: &str) -> String {
    let all_spaces = content.bytes().all(|b| b == b' ');
    let trimmed = if !all_spaces && content.starts_with(' ') && content.ends_with(' ') {
        &content[1..content.len() - 1]
    } else {
        content
    };

    let mut out = String::with_capacity(trimmed.len());
    let mut prev_was_space = false;
    for ch in trimmed.chars() {
        if ch == ' ' || ch == '\n' || ch == '\t' {
            if !prev_was_space {
                out.push(' ');
            }
            prev_was_space = true;
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
    out
}
