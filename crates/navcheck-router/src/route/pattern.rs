/// Segment classification for page file names
///
/// Pure functional parsing of file-based route segments into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

/// Represents the kinds of segment a page path can contain
///
/// Functional sum type for pattern matching route segments.
/// Dynamic variants carry the parameter name.
///
/// # Examples
///
/// ```
/// use navcheck_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// // Static segment
/// let seg = classify_segment("about");
/// assert!(matches!(seg, PatternSegmentType::Static(_)));
///
/// // Single dynamic segment
/// let seg = classify_segment("[slug]");
/// assert!(matches!(seg, PatternSegmentType::Dynamic(_)));
///
/// // Catch-all
/// let seg = classify_segment("[...rest]");
/// assert!(matches!(seg, PatternSegmentType::CatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Catch-all segment: `[...rest]`, matches zero or more trailing segments
    CatchAll(String),
    /// Dynamic segment: `[slug]`, matches exactly one non-empty segment
    Dynamic(String),
    /// Static text segment, matched verbatim
    Static(String),
}

impl PatternSegmentType {
    /// Returns true for segments that match variable content
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, PatternSegmentType::Static(_))
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Catch-all**: `[...name]`
/// 2. **Dynamic**: `[name]`
/// 3. **Static**: any other text
///
/// A bracketed segment is only recognized when its name is non-empty and carries no
/// further brackets, so `[]`, `[...]`, `[[...slug]]` and `[lang]-[version]` stay literal.
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(name) if is_param_name(name) => PatternSegmentType::CatchAll(name.to_string()),
            None if is_param_name(inner) => PatternSegmentType::Dynamic(inner.to_string()),
            _ => PatternSegmentType::Static(segment.to_string()),
        },
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['[', ']'])
}
