//! Link, reference, and image resolution (§4.5).
//!
//! Ported from `link_label`/`handle_left_bracket` in the original C inline
//! parser; the recursive re-parse of a resolved label mirrors the teacher's
//! `parser/inlines/cm_link_parser.rs` (`parse_inlines` over the label text).

use crate::grammar::{scan_link_title, scan_link_url, scan_spacechars};
use crate::inline::Inline;
use crate::reference::ReferenceMap;
use crate::subject::Subject;

/// Scans a balanced `[...]` label at `subj.pos`. On success returns the raw
/// label text (bytes strictly inside the brackets) and leaves `pos` just
/// past the closing `]`. On failure, rewinds `pos` to where it started.
///
/// Honors backtick and angle-bracket precedence over bracket nesting, and
/// maintains `label_nestlevel` to bound repeated unmatched `[` scans to
/// linear time (§4.5, §9).
pub(super) fn link_label<'a>(subj: &mut Subject<'a, '_>) -> Option<&'a str> {
    if subj.label_nestlevel > 0 {
        subj.label_nestlevel -= 1;
        return None;
    }

    let startpos = subj.pos;
    let mut nestlevel: i32 = 0;
    subj.advance(1); // past '['

    loop {
        let c = match subj.peek() {
            Some(c) => c,
            None => {
                subj.label_nestlevel = nestlevel.max(0) as u32;
                subj.pos = startpos;
                return None;
            }
        };
        if c == b']' && nestlevel == 0 {
            break;
        }
        match c {
            b'`' => {
                if super::code_span::handle_backticks(subj).is_none() {
                    subj.advance(1);
                }
            }
            b'<' => {
                super::autolink_html::handle_pointy_brace(subj);
            }
            b'[' => {
                nestlevel += 1;
                subj.advance(1);
            }
            b']' => {
                nestlevel -= 1;
                subj.advance(1);
            }
            b'\\' => {
                subj.advance(1);
                if let Some(next) = subj.peek() {
                    if next.is_ascii_punctuation() {
                        subj.advance(1);
                    }
                }
            }
            _ => {
                subj.advance(1);
            }
        }
    }

    let label = &subj.buffer[startpos + 1..subj.pos];
    subj.label_nestlevel = 0;
    subj.advance(1); // past ']'
    Some(label)
}

/// Handles a `[` at `subj.pos`: explicit inline link, reference link, or a
/// literal `[` fallback. Returns a list of sibling nodes because the
/// reference-miss fallback emits `[`, the re-parsed label, and `]` as three
/// separate nodes rather than one (mirrors the original's node chain).
pub fn handle_left_bracket<'a>(subj: &mut Subject<'a, '_>) -> Vec<Inline<'a>> {
    let label_start = subj.pos;
    let rawlabel = match link_label(subj) {
        Some(l) => l,
        None => {
            subj.pos = label_start;
            subj.advance(1);
            return vec![Inline::str_lit("[")];
        }
    };
    let endlabel = subj.pos;

    if subj.peek() == Some(b'(') {
        if let Some(link) = try_explicit_link(subj, rawlabel) {
            return vec![link];
        }
        subj.pos = endlabel;
    }

    resolve_reference_link(subj, rawlabel, endlabel)
}

fn try_explicit_link<'a>(subj: &mut Subject<'a, '_>, rawlabel: &'a str) -> Option<Inline<'a>> {
    let open_paren = subj.pos;
    let after_paren = open_paren + 1;
    let sps = scan_spacechars(&subj.buffer[after_paren..]);
    let starturl = after_paren + sps;
    let url_region = &subj.buffer[starturl..];
    let n = scan_link_url(url_region);
    // A zero-length match from the bracketed `<...>` form means it never
    // found a closing `>` — a real failure. From the bare form, zero means a
    // (valid) empty destination, e.g. `[text]()`.
    if n == 0 && url_region.starts_with('<') {
        return None;
    }
    let endurl = starturl + n;
    let sps2 = scan_spacechars(&subj.buffer[endurl..]);
    let starttitle = endurl + sps2;
    let endtitle = if starttitle == endurl {
        starttitle
    } else {
        starttitle + scan_link_title(&subj.buffer[starttitle..])
    };
    let sps3 = scan_spacechars(&subj.buffer[endtitle..]);
    let endall = endtitle + sps3;

    if subj.buffer.as_bytes().get(endall) != Some(&b')') {
        return None;
    }

    let url_raw = &subj.buffer[starturl..endurl];
    let title_raw = &subj.buffer[starttitle..endtitle];
    subj.pos = endall + 1;

    let label_children = crate::parser::parse_inlines(rawlabel, 0, None);
    log::debug!("explicit link: url={url_raw:?} title={title_raw:?}");
    Some(Inline::Link {
        label: label_children,
        url: clean_url(url_raw).into_boxed_str(),
        title: clean_title(title_raw).into_boxed_str(),
    })
}

fn resolve_reference_link<'a>(
    subj: &mut Subject<'a, '_>,
    rawlabel: &'a str,
    endlabel: usize,
) -> Vec<Inline<'a>> {
    subj.pos = endlabel + scan_spacechars(&subj.buffer[endlabel..]);
    let mut reflabel = rawlabel;

    if subj.peek() == Some(b'[') {
        let before_second = subj.pos;
        match link_label(subj) {
            Some(second) if !second.is_empty() => reflabel = second,
            Some(_) => {}
            None => subj.pos = before_second,
        }
    } else {
        subj.pos = endlabel;
    }

    let found = subj.refmap.and_then(|m: &ReferenceMap| m.lookup(reflabel).cloned());
    match found {
        Some(reference) => {
            let label_children = crate::parser::parse_inlines(rawlabel, 0, None);
            log::debug!("reference link resolved: label={reflabel:?}");
            vec![Inline::Link {
                label: label_children,
                url: reference.url,
                title: reference.title,
            }]
        }
        None => {
            subj.pos = endlabel;
            let mut out = vec![Inline::str_lit("[")];
            out.extend(crate::parser::parse_inlines(rawlabel, 0, subj.refmap));
            out.push(Inline::str_lit("]"));
            log::debug!(
                "reference link not found for label={reflabel:?}, falling back to literal brackets"
            );
            out
        }
    }
}

/// Strips surrounding `<...>`, trims, and unescapes backslash-escaped
/// punctuation, per `clean_url`.
pub(super) fn clean_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = if trimmed.len() >= 2 && trimmed.starts_with('<') && trimmed.ends_with('>') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    unescape(inner)
}

/// Strips a single matching pair of `'...'`/`"..."`/`(...)` quotes, then
/// unescapes, per `clean_title`.
pub(super) fn clean_title(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let inner = if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'(' && last == b')') || (first == b'"' && last == b'"') {
            &raw[1..raw.len() - 1]
        } else {
            raw
        }
    } else {
        raw
    };
    unescape(inner)
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_punctuation() {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
