/// Path utilities for page files and menu hrefs
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Rewrites every `\` to `/` so page paths split the same way on every host
///
/// Returns `Cow::Borrowed` when the path already uses forward slashes.
///
/// ```
/// use navcheck_router::path::normalize_separators;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_separators("src/pages"), Cow::Borrowed("src/pages")));
/// assert_eq!(normalize_separators("src\\pages\\blog"), "src/pages/blog");
/// ```
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Checks whether an href points inside the site
///
/// Only hrefs starting with `/` are internal. Relative links (`about`), anchors, `mailto:`
/// and absolute URLs are all treated as external.
///
/// ```
/// use navcheck_router::path::is_internal_href;
///
/// assert!(is_internal_href("/about"));
/// assert!(!is_internal_href("about"));
/// assert!(!is_internal_href("https://example.com/"));
/// assert!(!is_internal_href("#top"));
/// ```
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/')
}

/// Normalize an internal href before matching
///
/// Strips exactly one trailing `/`. The root `/` is never reduced to an empty string.
///
/// ```
/// use navcheck_router::path::normalize_href;
///
/// assert_eq!(normalize_href("/about/"), "/about");
/// assert_eq!(normalize_href("/about"), "/about");
/// assert_eq!(normalize_href("/"), "/");
/// assert_eq!(normalize_href("/about//"), "/about/");
/// ```
pub fn normalize_href(href: &str) -> &str {
    if href == "/" {
        return href;
    }
    href.strip_suffix('/').unwrap_or(href)
}
