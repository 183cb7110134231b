use std::sync::LazyLock;

use regex::Regex;

/// Path segment every storefront CDN image carries.
pub const CDN_FILES_MARKER: &str = "cdn/shop/files/";

// Terminators: double quote, single quote, whitespace, `?` and `]`.
static PROTOCOL_RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"//[^"'\s]*cdn/shop/files/[^"'?\]\s]+"#)
        .expect("hardcoded regex pattern is valid")
});

static ROOT_RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""/cdn/shop/files/[^"'?\]\s]+"#).expect("hardcoded regex pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// `//host/.../cdn/shop/files/...`
    ProtocolRelative,
    /// `"/cdn/shop/files/...`, leading quote included.
    RootRelative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub kind: FragmentKind,
}

/// Scan raw page text for CDN image fragments.
///
/// Returns every protocol-relative match in text order, followed by every
/// root-relative match in text order. The scan is plain substring matching:
/// markup, attributes and embedded JSON are not parsed.
pub fn scan_fragments(text: &str) -> Vec<Fragment<'_>> {
    if !text.contains(CDN_FILES_MARKER) {
        return Vec::new();
    }

    let protocol_relative = PROTOCOL_RELATIVE.find_iter(text).map(|m| Fragment {
        text: m.as_str(),
        kind: FragmentKind::ProtocolRelative,
    });
    let root_relative = ROOT_RELATIVE.find_iter(text).map(|m| Fragment {
        text: m.as_str(),
        kind: FragmentKind::RootRelative,
    });

    protocol_relative.chain(root_relative).collect()
}
