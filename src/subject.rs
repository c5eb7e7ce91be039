//! Parser cursor state.
//!
//! Grounded on `init_subject` and the `subject` struct in the original C
//! inline parser: a buffer, a byte position, a borrowed reference map, and
//! the `label_nestlevel` anti-quadratic memoization hint used by
//! `link_label` (§4.5).

use crate::reference::ReferenceMap;

pub struct Subject<'a, 'r> {
    pub buffer: &'a str,
    pub pos: usize,
    pub refmap: Option<&'r ReferenceMap>,
    /// Set when a `link_label` scan hits EOF at some bracket nesting depth
    /// `d` without finding a close. The next `d` `link_label` calls on this
    /// Subject fail immediately without rescanning, bounding repeated
    /// unmatched-`[` inputs to linear time instead of quadratic.
    pub label_nestlevel: u32,
}

impl<'a, 'r> Subject<'a, 'r> {
    pub fn new(buffer: &'a str, start_pos: usize, refmap: Option<&'r ReferenceMap>) -> Self {
        Self {
            buffer,
            pos: start_pos,
            refmap,
            label_nestlevel: 0,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.buffer.as_bytes().get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buffer.as_bytes().get(self.pos + offset).copied()
    }

    pub fn peek_prev(&self) -> Option<u8> {
        if self.pos == 0 {
            None
        } else {
            self.buffer.as_bytes().get(self.pos - 1).copied()
        }
    }

    pub fn rest(&self) -> &'a str {
        &self.buffer[self.pos..]
    }

    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}
