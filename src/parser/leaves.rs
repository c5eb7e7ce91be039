//! Backslash escapes, entities, newlines, and plain text runs (§4.6).
//!
//! Ported from `handle_backslash`/`handle_entity`/`handle_newline` and the
//! `parse_inline` text-run fallback branch in the original C inline parser.

use crate::grammar::scan_entity;
use crate::inline::Inline;
use crate::subject::Subject;

/// The special bytes that terminate a plain text run, per `find_special_char`
/// in the original source (`"\n\\`&_*[]<!"`, notably including `]`).
const SPECIAL: &[u8] = b"\n\\`&_*[]<!";

pub fn handle_backslash<'a>(subj: &mut Subject<'a, '_>) -> Inline<'a> {
    debug_assert_eq!(subj.peek(), Some(b'\\'));
    subj.advance(1);
    match subj.peek() {
        Some(b) if is_ascii_punct(b) => {
            let start = subj.pos;
            subj.advance(1);
            Inline::Str(subj.buffer[start..subj.pos].into())
        }
        Some(b'\n') => {
            subj.advance(1);
            Inline::LineBreak
        }
        _ => Inline::str_lit("\\"),
    }
}

fn is_ascii_punct(b: u8) -> bool {
    (b.is_ascii_graphic()) && !(b.is_ascii_alphanumeric())
}

pub fn handle_entity<'a>(subj: &mut Subject<'a, '_>) -> Inline<'a> {
    debug_assert_eq!(subj.peek(), Some(b'&'));
    let matched = scan_entity(subj.rest());
    if matched > 0 {
        let start = subj.pos;
        subj.advance(matched);
        Inline::Entity(subj.buffer[start..subj.pos].into())
    } else {
        subj.advance(1);
        Inline::str_lit("&")
    }
}

/// Handles a newline: hard break if preceded by two or more trailing spaces
/// on the prior line, otherwise soft break. Skips leading spaces on the next
/// line afterward.
pub fn handle_newline<'a>(subj: &mut Subject<'a, '_>) -> Inline<'a> {
    debug_assert_eq!(subj.peek(), Some(b'\n'));
    let nlpos = subj.pos;
    subj.advance(1);
    while subj.peek() == Some(b' ') {
        subj.advance(1);
    }
    let bytes = subj.buffer.as_bytes();
    let hard = nlpos > 1 && bytes[nlpos - 1] == b' ' && bytes[nlpos - 2] == b' ';
    if hard {
        Inline::LineBreak
    } else {
        Inline::SoftBreak
    }
}

/// Splits `text` into `Str`/`Entity` nodes, the way `make_str_with_entities`
/// does in the original: everything up to the next `&` is emitted verbatim,
/// `&`-runs that match an entity become `Entity` nodes, and anything else is
/// just literal text. Unlike `parse_inlines`, this never considers
/// emphasis, links, or any other inline construct — callers use it for
/// spans (like an autolink body) whose contents are markup-inert except for
/// entity references.
pub fn parse_text_with_entities(text: &str) -> Vec<Inline<'_>> {
    let mut subj = Subject::new(text, 0, None);
    let mut out = Vec::new();
    while let Some(c) = subj.peek() {
        if c == b'&' {
            out.push(handle_entity(&mut subj));
        } else {
            let start = subj.pos;
            let bytes = subj.buffer.as_bytes();
            let mut end = start;
            while end < bytes.len() && bytes[end] != b'&' {
                end += 1;
            }
            subj.pos = end;
            out.push(Inline::Str(subj.buffer[start..end].into()));
        }
    }
    out
}

/// Scans a run of plain text up to the next special byte, trimming trailing
/// spaces if the run ends right before a newline.
pub fn handle_text_run<'a>(subj: &mut Subject<'a, '_>) -> Inline<'a> {
    let start = subj.pos;
    let bytes = subj.buffer.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() && !SPECIAL.contains(&bytes[end]) {
        end += 1;
    }
    subj.pos = end;
    let mut text = &subj.buffer[start..end];
    if subj.peek() == Some(b'\n') {
        text = text.trim_end_matches(' ');
    }
    Inline::Str(text.into())
}
