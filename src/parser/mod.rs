//! The inline parser: `Subject`-driven single-token dispatcher and the two
//! public entry points, `parse_inlines` and `parse_reference` (§4.1, §6).
//!
//! The dispatch table and its `MAX_ITERATIONS` progress guard mirror the
//! priority-chain/guard idiom in the teacher's `parser/inlines/mod.rs`;
//! the byte-keyed switch itself follows `parse_inline` in the original C
//! inline parser.

mod autolink_html;
mod code_span;
mod emphasis;
mod leaves;
mod link;
mod reference_definition;

pub use reference_definition::parse_reference;

use crate::inline::{Inline, InlineList};
use crate::reference::ReferenceMap;
use crate::subject::Subject;

/// Safety valve against a dispatch branch that stops making progress; no
/// legitimate input should come close to this, since every branch advances
/// `pos` by at least one byte.
const MAX_ITERATIONS: usize = 1_000_000;

/// Parses the buffer from `start_pos` to EOF into an inline tree.
pub fn parse_inlines<'a>(
    buffer: &'a str,
    start_pos: usize,
    refmap: Option<&ReferenceMap>,
) -> InlineList<'a> {
    let mut subj = Subject::new(buffer, start_pos, refmap);
    let mut out = Vec::new();
    let mut delims: Vec<emphasis::Delim> = Vec::new();
    let mut last_pos = subj.pos;
    let mut iterations = 0;

    while !subj.at_eof() {
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            log::warn!("parse_inlines exceeded MAX_ITERATIONS, aborting to avoid a hang");
            break;
        }
        if !parse_one(&mut subj, &mut out, &mut delims) {
            break;
        }
        if subj.pos == last_pos {
            log::warn!("inline dispatcher made no progress at byte {}, forcing advance", subj.pos);
            subj.advance(1);
        }
        last_pos = subj.pos;
    }
    emphasis::process_emphasis(buffer, &mut out, &mut delims);
    out
}

/// Dispatches a single token at `subj.pos` into `out` (and, for `*`/`_`
/// delimiter runs, onto `delims`, for `process_emphasis` to resolve once
/// the whole buffer has been scanned), advancing the subject. Returns
/// `false` only at EOF.
fn parse_one<'a>(subj: &mut Subject<'a, '_>, out: &mut Vec<Inline<'a>>, delims: &mut Vec<emphasis::Delim>) -> bool {
    let c = match subj.peek() {
        Some(c) => c,
        None => return false,
    };
    match c {
        b'\n' => out.push(leaves::handle_newline(subj)),
        b'`' => match code_span::handle_backticks(subj) {
            Some(node) => out.push(node),
            None => {
                let start = subj.pos;
                while subj.peek() == Some(b'`') {
                    subj.advance(1);
                }
                out.push(Inline::Str(subj.buffer[start..subj.pos].into()));
            }
        },
        b'\\' => out.push(leaves::handle_backslash(subj)),
        b'&' => out.push(leaves::handle_entity(subj)),
        b'<' => out.push(autolink_html::handle_pointy_brace(subj)),
        b'_' => {
            let intraword = subj
                .peek_prev()
                .map(|p| p.is_ascii_alphanumeric() || p == b'_')
                .unwrap_or(false);
            if intraword {
                out.push(leaves::handle_text_run(subj));
            } else {
                emphasis::push_delimiter(subj, b'_', out, delims);
            }
        }
        b'*' => emphasis::push_delimiter(subj, b'*', out, delims),
        b'[' => out.extend(link::handle_left_bracket(subj)),
        b'!' => {
            subj.advance(1);
            if subj.peek() == Some(b'[') {
                let mut result = link::handle_left_bracket(subj);
                if result.len() == 1 && matches!(result[0], Inline::Link { .. }) {
                    out.push(result.pop().unwrap().retag_link_as_image());
                } else {
                    out.push(Inline::str_lit("!"));
                    out.extend(result);
                }
            } else {
                out.push(Inline::str_lit("!"));
            }
        }
        _ => out.push(leaves::handle_text_run(subj)),
    }
    true
}
