/// Produce the canonical provider-facing form of an asset path.
///
/// Backslashes are replaced with forward slashes so Windows-authored
/// references behave identically everywhere, and leading and trailing
/// separators are stripped because providers join the path onto their own
/// origin. Cleaning an already-clean path returns it unchanged.
pub fn clean_path(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_string()
}

/// Prepend a configured directory prefix to an already-cleaned path.
///
/// The prefix itself is cleaned first, so `"build/"` and `"/build"` behave the
/// same. An empty prefix leaves the path untouched. This runs exactly once per
/// resolution, after [`clean_path`], which keeps cleaning itself idempotent.
pub fn apply_prefix(prefix: &str, cleaned: &str) -> String {
    let prefix = clean_path(prefix);
    if prefix.is_empty() {
        cleaned.to_string()
    } else {
        format!("{prefix}/{cleaned}")
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_prefix, clean_path};

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(clean_path("/a/b/"), "a/b");
        assert_eq!(clean_path("a/b/"), "a/b");
        assert_eq!(clean_path("a/b"), "a/b");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_path("/css/app.css/");
        assert_eq!(clean_path(&once), once);
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        assert_eq!(clean_path("images\\logo.png"), "images/logo.png");
    }

    #[test]
    fn applies_prefix_once() {
        assert_eq!(apply_prefix("static", "css/app.css"), "static/css/app.css");
        assert_eq!(apply_prefix("/static/", "css/app.css"), "static/css/app.css");
    }

    #[test]
    fn empty_prefix_is_a_no_op() {
        assert_eq!(apply_prefix("", "css/app.css"), "css/app.css");
        assert_eq!(apply_prefix("/", "css/app.css"), "css/app.css");
    }
}
