use regex::Regex;

fn remote_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset reference is already publicly reachable.
///
/// Absolute URLs, protocol-relative URLs and data URIs are served as-is by the
/// resolver, since rewriting them onto a CDN origin would break them.
pub fn is_remote_reference(value: &str) -> bool {
    remote_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}
