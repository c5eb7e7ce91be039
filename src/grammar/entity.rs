//! Entity reference recognition (§4.1a, §4.6).
//!
//! Named-entity validation follows the same `htmlescape::decode_html` check
//! used in the teacher's `parser/inlines/cm_entity_reference_parser.rs`
//! (decode and require the result to differ from the input), but unlike
//! that module this scanner does *not* decode — per the spec, the raw
//! `&name;`/`&#NNN;` bytes are stored verbatim in the `Entity` node and
//! decoding is left to a renderer outside this crate's scope.

const MAX_ENTITY_LEN: usize = 64;

/// `s` must start with `&`. Returns the matched length including the
/// leading `&` and trailing `;`, or 0 on no match.
pub fn scan_entity(s: &str) -> usize {
    if !s.starts_with('&') {
        return 0;
    }
    if let Some(n) = scan_numeric(s) {
        return n;
    }
    scan_named(s)
}

fn scan_numeric(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("&#")?;
    if let Some(hex) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
        let digits: usize = hex.bytes().take_while(|b| b.is_ascii_hexdigit()).count();
        if digits == 0 || digits > 6 {
            return None;
        }
        if hex.as_bytes().get(digits) == Some(&b';') {
            return Some(2 + 1 + digits + 1);
        }
        return None;
    }
    let digits: usize = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || digits > 7 {
        return None;
    }
    if rest.as_bytes().get(digits) == Some(&b';') {
        Some(2 + digits + 1)
    } else {
        None
    }
}

fn scan_named(s: &str) -> usize {
    let semi_pos = match s.find(';').filter(|&idx| idx > 1 && idx < MAX_ENTITY_LEN) {
        Some(idx) => idx,
        None => return 0,
    };
    let consumed = semi_pos + 1;
    let entity_str = &s[..consumed];
    match htmlescape::decode_html(entity_str) {
        Ok(decoded) if decoded != entity_str => consumed,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_named_entity() {
        assert_eq!(scan_entity("&copy; rest"), "&copy;".len());
    }

    #[test]
    fn smoke_test_decimal_entity() {
        assert_eq!(scan_entity("&#169; rest"), "&#169;".len());
    }

    #[test]
    fn smoke_test_hex_entity() {
        assert_eq!(scan_entity("&#x1F600; rest"), "&#x1F600;".len());
    }

    #[test]
    fn smoke_test_unknown_named_entity_rejected() {
        assert_eq!(scan_entity("&nosuchentity; rest"), 0);
    }

    #[test]
    fn smoke_test_not_an_entity() {
        assert_eq!(scan_entity("& rest"), 0);
    }
}
