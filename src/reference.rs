//! Link reference definitions and the reference map.
//!
//! Grounded on `normalize_reference`/`lookup_reference`/`add_reference` in
//! the original C inline parser. Reference-map writes are first-write-wins
//! (see DESIGN.md D2) — this diverges from the teacher's own
//! `cm_link_reference_parser.rs`, whose plain `HashMap::insert` is
//! last-write-wins, which the spec and the original source both contradict.

use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// A single `[label]: url "title"` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub url: Box<str>,
    pub title: Box<str>,
}

/// Label -> definition map, keyed by the normalized label.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    entries: HashMap<String, Reference>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts `reference` under `label`'s normalized form, but only if no
    /// definition is already present for that label. Returns `true` if the
    /// insert happened.
    pub fn insert(&mut self, label: &str, reference: Reference) -> bool {
        let key = normalize_label(label);
        if self.entries.contains_key(&key) {
            log::debug!("reference definition for {key:?} already present, dropping duplicate");
            return false;
        }
        self.entries.insert(key, reference);
        true
    }

    pub fn lookup(&self, label: &str) -> Option<&Reference> {
        self.entries.get(&normalize_label(label))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Case-folds, trims, and whitespace-collapses a label for use as a map key.
///
/// Full Unicode simple case folding has no direct crate in this codebase's
/// dependency set; NFC normalization followed by `to_lowercase` is used as a
/// practical approximation (see DESIGN.md D10).
pub fn normalize_label(label: &str) -> String {
    let folded: String = label.nfc().collect::<String>().to_lowercase();
    let mut out = String::with_capacity(folded.len());
    let mut prev_was_space = false;
    for ch in folded.trim().chars() {
        if ch.is_whitespace() {
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
