//! Base-path aware URL path helpers.
//!
//! Routes in the page tree are site-absolute (`/reference/text/`). When the
//! site is deployed under a prefix such as `/docs/`, every absolute link the
//! renderer emits goes through [`apply_base_path`]. Relative links are never
//! rewritten.
//!
//! All functions are total: malformed input is normalized, never rejected.

/// Join two URL path segments with exactly one `/` between them.
///
/// # Examples
///
/// ```
/// use doctree_site::join_path;
///
/// assert_eq!(join_path("/base/", "/foo"), "/base/foo");
/// assert_eq!(join_path("/", "/foo"), "/foo");
/// assert_eq!(join_path("/base", ""), "/base/");
/// assert_eq!(join_path("", "foo"), "/foo");
/// ```
#[must_use]
pub fn join_path(base: &str, path: &str) -> String {
    let head = base.trim_end_matches('/');
    let tail = path.trim_start_matches('/');

    // `/` and `""` both collapse to an empty head, so the result gets a
    // single leading slash instead of `//foo`.
    if head.is_empty() {
        return format!("/{tail}");
    }
    if path.is_empty() {
        return format!("{head}/");
    }
    format!("{head}/{tail}")
}

/// Prefix an absolute in-site path with the deployment base path.
///
/// Relative paths (anything not starting with `/`) are returned unchanged.
///
/// # Examples
///
/// ```
/// use doctree_site::apply_base_path;
///
/// assert_eq!(apply_base_path("/docs", "/reference"), "/docs/reference");
/// assert_eq!(apply_base_path("/docs", "./image.png"), "./image.png");
/// ```
#[must_use]
pub fn apply_base_path(base: &str, path: &str) -> String {
    if is_relative(path) {
        return path.to_owned();
    }
    join_path(base, path)
}

/// Strip a leading base path from a route.
///
/// Returns the remainder including its leading `/`. Routes outside the base
/// path are returned unchanged, and a base of `/` or `""` is a no-op. Only
/// whole segments match: `/docsearch` is not under `/docs`.
///
/// # Examples
///
/// ```
/// use doctree_site::remove_base_path;
///
/// assert_eq!(remove_base_path("/docs/", "/docs/foo/bar"), "/foo/bar");
/// assert_eq!(remove_base_path("/docs/", "/other/foo"), "/other/foo");
/// ```
#[must_use]
pub fn remove_base_path<'a>(base: &str, route: &'a str) -> &'a str {
    let head = base.trim_end_matches('/');
    if head.is_empty() {
        return route;
    }

    match route.strip_prefix(head) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => route,
    }
}

/// True if the path is relative (does not start with `/`).
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !path.starts_with('/')
}
