//! End-to-end scenarios from the specification's Testable Properties
//! section (§8): each case exercises `parse_inlines`/`parse_reference`
//! through the public API rather than poking at individual handlers.

use marco_inline::{parse_inlines, parse_reference, Inline, Reference, ReferenceMap};

fn parse(input: &str) -> Vec<Inline> {
    parse_inlines(input, 0, None)
}

#[test]
fn smoke_test_code_span_scenario() {
    let nodes = parse("`foo`");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Inline::Code(c) => assert_eq!(c.as_str(), "foo"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_embedded_double_delim_stays_literal() {
    // *foo**bar* -> emph[str "foo", str "**", str "bar"]
    let nodes = parse("*foo**bar*");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Inline::Emph(children) => {
            assert_eq!(
                children,
                &vec![
                    Inline::str_lit("foo"),
                    Inline::str_lit("**"),
                    Inline::str_lit("bar"),
                ]
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_triple_delim_is_strong_of_emph() {
    let nodes = parse("***abc***");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Inline::Strong(children) => match &children[..] {
            [Inline::Emph(inner)] => assert_eq!(inner, &vec![Inline::str_lit("abc")]),
            other => panic!("unexpected strong children {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_explicit_inline_link() {
    let nodes = parse(r#"[foo](/url "t")"#);
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Inline::Link { label, url, title } => {
            assert_eq!(label, &vec![Inline::str_lit("foo")]);
            assert_eq!(url.as_ref(), "/url");
            assert_eq!(title.as_ref(), "t");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_reference_link_full_and_collapsed() {
    let mut map = ReferenceMap::new();
    map.insert(
        "x",
        Reference {
            url: "/u".into(),
            title: "T".into(),
        },
    );

    let full = parse_inlines("[foo][x]", 0, Some(&map));
    assert_eq!(full.len(), 1);
    match &full[0] {
        Inline::Link { label, url, title } => {
            assert_eq!(label, &vec![Inline::str_lit("foo")]);
            assert_eq!(url.as_ref(), "/u");
            assert_eq!(title.as_ref(), "T");
        }
        other => panic!("unexpected {other:?}"),
    }

    let collapsed = parse_inlines("[x]", 0, Some(&map));
    assert_eq!(collapsed, full);
}

#[test]
fn smoke_test_autolinks() {
    let uri = parse("<http://example.com>");
    assert_eq!(uri.len(), 1);
    match &uri[0] {
        Inline::Link { label, url, title } => {
            assert_eq!(label, &vec![Inline::str_lit("http://example.com")]);
            assert_eq!(url.as_ref(), "http://example.com");
            assert_eq!(title.as_ref(), "");
        }
        other => panic!("unexpected {other:?}"),
    }

    let email = parse("<a@b.c>");
    match &email[0] {
        Inline::Link { url, .. } => assert_eq!(url.as_ref(), "mailto:a@b.c"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_hard_and_soft_breaks() {
    let hard = parse("foo  \nbar");
    assert_eq!(
        hard,
        vec![Inline::str_lit("foo"), Inline::LineBreak, Inline::str_lit("bar")]
    );

    let soft = parse("foo \nbar");
    assert_eq!(
        soft,
        vec![Inline::str_lit("foo"), Inline::SoftBreak, Inline::str_lit("bar")]
    );
}

#[test]
fn smoke_test_unclosed_bracket_falls_back_to_literal_text() {
    let nodes = parse("[unclosed");
    assert_eq!(nodes, vec![Inline::str_lit("["), Inline::str_lit("unclosed")]);
}

#[test]
fn smoke_test_label_nestlevel_bounds_repeated_unmatched_brackets() {
    // `[[[[...` with many unmatched opens: the first `link_label` scan runs
    // to EOF and records the nesting depth; every subsequent `[` dispatch
    // within the same `parse_inlines` call must short-circuit instead of
    // rescanning to EOF again. We don't assert on wall-clock time (that
    // would make this test flaky); we assert that parsing terminates and
    // produces the expected linear-looking literal fallback, which is only
    // possible if each `[` consumes exactly one byte instead of walking to
    // EOF on every call.
    let input = "[".repeat(2000);
    let nodes = parse(&input);
    assert_eq!(nodes.len(), 2000);
    for node in &nodes {
        assert_eq!(node, &Inline::str_lit("["));
    }
}

#[test]
fn smoke_test_reference_definition_then_use() {
    let mut map = ReferenceMap::new();
    let consumed = parse_reference("[foo]: /url 'a title'\n", 0, &mut map);
    assert!(consumed > 0);

    let nodes = parse_inlines("see [foo]", 0, Some(&map));
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0], Inline::str_lit("see "));
    match &nodes[1] {
        Inline::Link { url, title, .. } => {
            assert_eq!(url.as_ref(), "/url");
            assert_eq!(title.as_ref(), "a title");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_reference_first_write_wins_end_to_end() {
    let mut map = ReferenceMap::new();
    parse_reference("[a]: /first\n", 0, &mut map);
    parse_reference("[a]: /second\n", 0, &mut map);
    let nodes = parse_inlines("[a]", 0, Some(&map));
    match &nodes[0] {
        Inline::Link { url, .. } => assert_eq!(url.as_ref(), "/first"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_image_dispatch() {
    let nodes = parse("![alt](/img.png \"title\")");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Inline::Image { label, url, title } => {
            assert_eq!(label, &vec![Inline::str_lit("alt")]);
            assert_eq!(url.as_ref(), "/img.png");
            assert_eq!(title.as_ref(), "title");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn smoke_test_byte_reconstruction_for_plain_text() {
    // Property 2 (§8): concatenating leaf literal bytes reconstructs the
    // input exactly when no structural bytes (brackets/delimiters/etc.)
    // are consumed — verified here on a plain-text-and-escape input where
    // no bytes become purely structural.
    let input = "hello world, \\*not emphasis\\*";
    let nodes = parse(input);
    let mut reconstructed = String::new();
    for node in &nodes {
        match node {
            Inline::Str(c) => reconstructed.push_str(c.as_str()),
            other => panic!("unexpected node in plain-text scenario: {other:?}"),
        }
    }
    assert_eq!(reconstructed, "hello world, *not emphasis*");
}

#[test]
fn smoke_test_tree_is_finite_and_terminates_on_adversarial_input() {
    // A mix of unmatched delimiters, brackets, and backticks that could in
    // principle confuse a naive scanner into infinite or quadratic
    // behavior; asserting only termination and non-panicking here.
    let input = "*_`[![*_`[![*_`[![".repeat(50);
    let nodes = parse(&input);
    assert!(!nodes.is_empty());
}
