//! Reference definition parsing (§4.7), e.g. `[foo]: /url "title"`.
//!
//! Ported from `parse_reference` in the original C inline parser. Unlike the
//! rest of the inline dispatcher, this is meant to be called once per
//! candidate line by a block-level caller, not from `parse_one`.

use crate::grammar::{scan_link_title, scan_link_url, scan_spnl};
use crate::reference::{Reference, ReferenceMap};
use crate::subject::Subject;

/// Tries to parse a reference definition starting at `input[start_pos..]`.
/// On success, inserts it into `refmap` (first-write-wins, DESIGN.md D2) and
/// returns the byte offset just past the definition. Returns 0 on failure,
/// leaving `refmap` untouched.
pub fn parse_reference(input: &str, start_pos: usize, refmap: &mut ReferenceMap) -> usize {
    let mut subj = Subject::new(input, start_pos, None);

    let rawlabel = match super::link::link_label(&mut subj) {
        Some(l) if !l.trim().is_empty() => l,
        _ => return 0,
    };

    if subj.peek() == Some(b':') {
        subj.advance(1);
    } else {
        return 0;
    }

    subj.pos += scan_spnl(&subj.buffer[subj.pos..]);
    let n = scan_link_url(&subj.buffer[subj.pos..]);
    if n == 0 {
        return 0;
    }
    let url_raw = &subj.buffer[subj.pos..subj.pos + n];
    subj.pos += n;

    let before_title = subj.pos;
    subj.pos += scan_spnl(&subj.buffer[subj.pos..]);
    let title_len = scan_link_title(&subj.buffer[subj.pos..]);
    let title_raw = if title_len > 0 {
        let t = &subj.buffer[subj.pos..subj.pos + title_len];
        subj.pos += title_len;
        t
    } else {
        subj.pos = before_title;
        ""
    };

    while subj.peek() == Some(b' ') {
        subj.advance(1);
    }
    match subj.peek() {
        Some(b'\n') => subj.advance(1),
        None => {}
        Some(_) => return 0,
    }

    let reference = Reference {
        url: super::link::clean_url(url_raw).into_boxed_str(),
        title: super::link::clean_title(title_raw).into_boxed_str(),
    };
    if refmap.insert(rawlabel, reference) {
        log::debug!("reference definition parsed for label={rawlabel:?}");
    }
    subj.pos
}
