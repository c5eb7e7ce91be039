//! Angle-bracket handler: autolinks and raw HTML (§4.4).
//!
//! Ported from `handle_pointy_brace` in the original C inline parser. The
//! autolink label is parsed for entities via `make_str_with_entities`
//! there; this keeps that instead of wrapping the raw URI/email text in a
//! single literal `Str` (DESIGN.md).

use super::leaves;
use crate::grammar::{scan_autolink_email, scan_autolink_uri, scan_html_tag};
use crate::inline::Inline;
use crate::subject::Subject;

pub fn handle_pointy_brace<'a>(subj: &mut Subject<'a, '_>) -> Inline<'a> {
    debug_assert_eq!(subj.peek(), Some(b'<'));
    subj.advance(1);
    let rest = subj.rest();

    let uri_len = scan_autolink_uri(rest);
    if uri_len > 0 {
        let uri = &rest[..uri_len - 1];
        subj.advance(uri_len);
        log::debug!("autolink URI: {uri:?}");
        return Inline::Link {
            label: leaves::parse_text_with_entities(uri),
            url: uri.to_string().into_boxed_str(),
            title: "".into(),
        };
    }

    let email_len = scan_autolink_email(rest);
    if email_len > 0 {
        let email = &rest[..email_len - 1];
        subj.advance(email_len);
        log::debug!("autolink email: {email:?}");
        return Inline::Link {
            label: leaves::parse_text_with_entities(email),
            url: format!("mailto:{email}").into_boxed_str(),
            title: "".into(),
        };
    }

    let tag_len = scan_html_tag(rest);
    if tag_len > 0 {
        let start = subj.pos - 1; // include the '<' we already consumed
        subj.advance(tag_len);
        let raw = &subj.buffer[start..subj.pos];
        log::debug!("raw inline html: {raw:?}");
        return Inline::RawHtml(raw.into());
    }

    log::debug!("angle bracket matched nothing, literal '<'");
    Inline::str_lit("<")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Inline, usize) {
        let mut subj = Subject::new(input, 0, None);
        let node = handle_pointy_brace(&mut subj);
        (node, subj.pos)
    }

    #[test]
    fn smoke_test_uri_autolink() {
        let (node, pos) = run("<http://example.com>rest");
        match node {
            Inline::Link { url, .. } => assert_eq!(url.as_ref(), "http://example.com"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(pos, "<http://example.com>".len());
    }

    #[test]
    fn smoke_test_email_autolink() {
        let (node, _) = run("<a@b.com>rest");
        match node {
            Inline::Link { url, .. } => assert_eq!(url.as_ref(), "mailto:a@b.com"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn smoke_test_raw_html() {
        let (node, _) = run("<span>text");
        match node {
            Inline::RawHtml(c) => assert_eq!(c.as_str(), "<span>"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn smoke_test_literal_angle_bracket() {
        let (node, _) = run("<3 is a heart");
        assert_eq!(node, Inline::str_lit("<"));
    }

    #[test]
    fn smoke_test_uri_autolink_label_parses_entities() {
        let (node, _) = run("<http://x/?a&amp;b>rest");
        match node {
            Inline::Link { label, .. } => {
                assert_eq!(label.len(), 3);
                assert_eq!(label[0], Inline::str_lit("http://x/?a"));
                match &label[1] {
                    Inline::Entity(c) => assert_eq!(c.as_str(), "&amp;"),
                    other => panic!("unexpected {other:?}"),
                }
                assert_eq!(label[2], Inline::str_lit("b"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
