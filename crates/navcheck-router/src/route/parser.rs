/// Page path parsing and priority calculation
///
/// Pure functional parsers that transform page file paths into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

use super::pattern::{classify_segment, PatternSegmentType};
use crate::path::normalize_separators;

/// Strips the pages root from a file path
///
/// Both arguments are separator-normalized first. The root only matches on a whole
/// directory boundary, so `src/pages` is not stripped from `src/pagesx/about.astro`.
/// Paths outside the root are returned unchanged (minus leading slashes).
fn relative_to_root(file_path: &str, pages_dir: &str) -> String {
    let file_path = normalize_separators(file_path);
    let pages_dir = normalize_separators(pages_dir);
    let root = pages_dir.trim_end_matches('/');

    let relative = match file_path.strip_prefix(root) {
        Some(rest) if !root.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => &*file_path,
    };

    relative.trim_start_matches('/').to_string()
}

/// Removes the extension from the last segment (`a.b.astro` → `a.b`)
fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}

/// Parses a page file path into ordered route segments (pure function)
///
/// 1. normalize separators and strip the pages root
/// 2. drop the extension of the file name
/// 3. drop a trailing `index` segment
/// 4. classify every remaining segment
///
/// # Examples
///
/// ```
/// use navcheck_router::route::parser::parse_segments;
/// use navcheck_router::PatternSegmentType;
///
/// let segments = parse_segments("src/pages/blog/[slug].astro", "src/pages");
/// assert_eq!(
///     segments,
///     vec![
///         PatternSegmentType::Static("blog".to_string()),
///         PatternSegmentType::Dynamic("slug".to_string()),
///     ]
/// );
///
/// assert!(parse_segments("src/pages/index.astro", "src/pages").is_empty());
/// ```
pub fn parse_segments(file_path: &str, pages_dir: &str) -> Vec<PatternSegmentType> {
    let relative = relative_to_root(file_path, pages_dir);

    let mut raw: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();

    if let Some(last) = raw.last_mut() {
        *last = strip_extension(*last);
    }

    if raw.last() == Some(&"index") {
        raw.pop();
    }

    raw.into_iter().map(classify_segment).collect()
}

/// Calculates route priority for resolution order (pure function)
///
/// Lower number = higher priority (resolved first).
///
/// # Priority Order
///
/// 1. **Static routes** → 0
/// 2. **Dynamic routes** → dynamic count + depth
/// 3. **Catch-all routes** → 1000 + depth
///
/// ```
/// use navcheck_router::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(false, 0, 2), 0);
/// assert_eq!(calculate_priority(false, 1, 2), 3);
/// assert_eq!(calculate_priority(true, 1, 2), 1002);
/// ```
pub fn calculate_priority(has_catch_all: bool, dynamic_count: usize, depth: usize) -> usize {
    if has_catch_all {
        1000 + depth
    } else if dynamic_count > 0 {
        dynamic_count + depth
    } else {
        0
    }
}
