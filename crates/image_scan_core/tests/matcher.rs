use image_scan_core::{scan_fragments, Fragment, FragmentKind};
use pretty_assertions::assert_eq;

fn texts<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a str> {
    fragments.iter().map(|f| f.text).collect()
}

#[test]
fn no_marker_yields_no_fragments() {
    let html = r#"<html><body><img src="/images/logo.png"></body></html>"#;
    assert!(scan_fragments(html).is_empty());
}

#[test]
fn protocol_relative_match_stops_at_query() {
    let html = r#"<img src="//dimemtl.com/cdn/shop/files/a.jpg?v=1700000000">"#;
    let fragments = scan_fragments(html);
    assert_eq!(
        fragments,
        vec![Fragment {
            text: "//dimemtl.com/cdn/shop/files/a.jpg",
            kind: FragmentKind::ProtocolRelative,
        }]
    );
}

#[test]
fn root_relative_match_keeps_leading_quote_and_stops_at_query() {
    let html = r#"{"src":"/cdn/shop/files/a.jpg?v=123"}"#;
    let fragments = scan_fragments(html);
    assert_eq!(
        fragments,
        vec![Fragment {
            text: "\"/cdn/shop/files/a.jpg",
            kind: FragmentKind::RootRelative,
        }]
    );
}

#[test]
fn absolute_urls_match_from_the_double_slash() {
    let html = r#"<meta content="https://dimemtl.com/cdn/shop/files/og.png">"#;
    assert_eq!(
        texts(&scan_fragments(html)),
        vec!["//dimemtl.com/cdn/shop/files/og.png"]
    );
}

#[test]
fn every_terminator_ends_a_match() {
    let html = concat!(
        "'//a.example/cdn/shop/files/single.jpg' ",
        "[//a.example/cdn/shop/files/bracket.jpg] ",
        "//a.example/cdn/shop/files/space.jpg next ",
        "//a.example/cdn/shop/files/tab.jpg\tnext ",
        "\"/cdn/shop/files/newline.jpg\nnext",
    );
    assert_eq!(
        texts(&scan_fragments(html)),
        vec![
            "//a.example/cdn/shop/files/single.jpg",
            "//a.example/cdn/shop/files/bracket.jpg",
            "//a.example/cdn/shop/files/space.jpg",
            "//a.example/cdn/shop/files/tab.jpg",
            "\"/cdn/shop/files/newline.jpg",
        ]
    );
}

#[test]
fn protocol_relative_fragments_come_before_root_relative() {
    let html = r#"
        <img src="/cdn/shop/files/root.jpg">
        <img src="//cdn.example.com/s/files/1/cdn/shop/files/proto.jpg">
    "#;
    let fragments = scan_fragments(html);
    let kinds: Vec<FragmentKind> = fragments.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![FragmentKind::ProtocolRelative, FragmentKind::RootRelative]
    );
    assert_eq!(
        texts(&fragments),
        vec![
            "//cdn.example.com/s/files/1/cdn/shop/files/proto.jpg",
            "\"/cdn/shop/files/root.jpg",
        ]
    );
}

#[test]
fn srcset_candidates_are_matched_separately() {
    let html = r#"<img srcset="//dimemtl.com/cdn/shop/files/a.jpg?width=100 100w, //dimemtl.com/cdn/shop/files/a.jpg?width=200 200w">"#;
    assert_eq!(
        texts(&scan_fragments(html)),
        vec![
            "//dimemtl.com/cdn/shop/files/a.jpg",
            "//dimemtl.com/cdn/shop/files/a.jpg",
        ]
    );
}

#[test]
fn marker_without_leading_slashes_or_quote_is_ignored() {
    let html = "see cdn/shop/files/orphan.jpg for details";
    assert!(scan_fragments(html).is_empty());
}
