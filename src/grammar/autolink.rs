//! Autolink URI/email grammars (§4.1a, §4.4).
//!
//! Generalizes the teacher's `grammar/inlines/cm_autolink.rs` (a bare
//! `<...>` matcher that only distinguished email by `@`-presence) into the
//! two precise CommonMark grammars, per `handle_pointy_brace` in the
//! original C inline parser.

use nom::bytes::complete::take_while1;
use nom::IResult;

fn is_scheme_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_scheme_rest(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '.' || c == '-'
}

/// Matches a URI autolink body (without the enclosing `<`/`>`) followed by
/// `>`. `s` must start immediately after the opening `<`. Returns the total
/// matched length including the trailing `>`, or 0 on no match.
pub fn scan_autolink_uri(s: &str) -> usize {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !is_scheme_start(bytes[0] as char) {
        return 0;
    }
    let mut i = 1;
    while i < bytes.len() && is_scheme_rest(bytes[i] as char) {
        i += 1;
    }
    if i < 2 || i > 32 {
        return 0;
    }
    if bytes.get(i) != Some(&b':') {
        return 0;
    }
    i += 1;
    let body_start = i;
    while i < bytes.len() {
        let c = bytes[i];
        if c == b'>' {
            if i == body_start {
                // empty body after the scheme is still a valid URI autolink
            }
            return i + 1;
        }
        if c.is_ascii_control() || c == b' ' || c == b'<' {
            return 0;
        }
        i += 1;
    }
    0
}

fn is_email_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c)
}

fn is_domain_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Matches an email autolink body followed by `>`. Returns total matched
/// length including the trailing `>`, or 0 on no match.
pub fn scan_autolink_email(s: &str) -> usize {
    fn local_part(input: &str) -> IResult<&str, &str> {
        take_while1(is_email_atext)(input)
    }
    fn domain_label(input: &str) -> IResult<&str, &str> {
        take_while1(is_domain_label_char)(input)
    }

    let (rest, local) = match local_part(s) {
        Ok(r) => r,
        Err(_) => return 0,
    };
    let mut rest = match rest.strip_prefix('@') {
        Some(r) => r,
        None => return 0,
    };

    let mut consumed = local.len() + 1;
    let mut labels = 0;
    loop {
        let (after_label, label) = match domain_label(rest) {
            Ok(r) => r,
            Err(_) => return 0,
        };
        if label.len() > 63 {
            return 0;
        }
        consumed += label.len();
        labels += 1;
        rest = after_label;
        if let Some(stripped) = rest.strip_prefix('.') {
            consumed += 1;
            rest = stripped;
            continue;
        }
        break;
    }
    if labels < 1 {
        return 0;
    }
    if rest.starts_with('>') {
        consumed + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_uri_autolink() {
        let s = "http://example.com>and more";
        let n = scan_autolink_uri(s);
        assert_eq!(&s[..n], "http://example.com>");
    }

    #[test]
    fn smoke_test_uri_autolink_rejects_space() {
        assert_eq!(scan_autolink_uri("ht tp://x>"), 0);
    }

    #[test]
    fn smoke_test_email_autolink() {
        let s = "foo@bar.example.com>rest";
        let n = scan_autolink_email(s);
        assert_eq!(&s[..n], "foo@bar.example.com>");
    }

    #[test]
    fn smoke_test_email_autolink_rejects_missing_domain() {
        assert_eq!(scan_autolink_email("foo@>"), 0);
    }
}
