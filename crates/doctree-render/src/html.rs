//! HTML text helpers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use doctree_site::apply_base_path;

/// Absolute `href`/`src` attribute values, double-quoted, single-quoted or bare.
static ABSOLUTE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\s(?:href|src)\s*=\s*)(?:"(/[^"]*)"|'(/[^']*)'|(/[^\s"'>]*))"#).unwrap()
});

/// Escape HTML special characters.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Resolve a link target against the base path.
///
/// Protocol-relative URLs (`//host/...`) point off-site and are returned
/// unchanged, like relative ones.
#[must_use]
pub fn resolve_url(base_path: &str, url: &str) -> String {
    if url.starts_with("//") {
        return url.to_owned();
    }
    apply_base_path(base_path, url)
}

/// Rewrite absolute in-site links of an HTML fragment through the base path.
///
/// Protocol-relative (`//host/...`) and relative links are kept as is.
#[must_use]
pub fn rewrite_links<'a>(html: &'a str, base_path: &str) -> Cow<'a, str> {
    if base_path.trim_matches('/').is_empty() {
        return Cow::Borrowed(html);
    }

    ABSOLUTE_LINK_RE.replace_all(html, |caps: &Captures| {
        let (url, quote) = match (caps.get(2), caps.get(3), caps.get(4)) {
            (Some(url), _, _) => (url.as_str(), "\""),
            (None, Some(url), _) => (url.as_str(), "'"),
            (None, None, Some(url)) => (url.as_str(), ""),
            (None, None, None) => return caps[0].to_owned(),
        };
        format!(
            "{}{quote}{}{quote}",
            &caps[1],
            resolve_url(base_path, url)
        )
    })
}
