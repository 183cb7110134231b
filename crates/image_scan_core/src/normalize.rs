/// Turn a matched fragment into an absolute URL.
///
/// Surrounding `"` characters are stripped first. Protocol-relative
/// fragments get `https:`, root-relative ones get `origin`, anything else is
/// returned as is.
pub fn normalize_fragment(fragment: &str, origin: &str) -> String {
    let cleaned = fragment.trim_matches('"');
    if cleaned.starts_with("//") {
        format!("https:{cleaned}")
    } else if cleaned.starts_with('/') {
        format!("{}{cleaned}", origin.trim_end_matches('/'))
    } else {
        cleaned.to_string()
    }
}
