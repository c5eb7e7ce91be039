//! Whitespace-run scanning (§4.1a), ported from `spnl`/`scan_spacechars`
//! in the original C inline parser.

/// Length of the maximal run of space/tab/newline bytes at the start of
/// `s`. May be 0 — unlike the other scanners in this module, 0 here means
/// "no whitespace", not "no match"; there is no failure case.
pub fn scan_spacechars(s: &str) -> usize {
    s.bytes()
        .take_while(|&b| b == b' ' || b == b'\t' || b == b'\n')
        .count()
}

/// Skips spaces/tabs and at most one newline, per `spnl` in the original
/// parser (used between a link label and its destination, and between a
/// destination and its title).
pub fn scan_spnl(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'\n') {
        i += 1;
        while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
            i += 1;
        }
    }
    i
}
