//! Canonical URL construction.

/// Ensure a page path starts with `/`.
///
/// `about` -> `/about`, `/about` -> `/about`, `` -> `/`
pub fn normalize_page_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Join the site base URL and a page path.
///
/// The base is used as-is; an empty base yields the normalized path alone.
pub fn canonical_url(base_url: &str, page_path: &str) -> String {
    format!("{base_url}{}", normalize_page_path(page_path))
}
