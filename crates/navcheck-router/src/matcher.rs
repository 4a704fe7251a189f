/// Compiled path matchers
///
/// A matcher is built once from the classified segments of a page file and then tested
/// against normalized hrefs. Two implementations share the [`PathMatcher`] contract:
///
/// - [`RegexMatcher`]: compiles the segments into one anchored `regex::Regex` (default)
/// - [`SegmentMatcher`]: walks the segments directly, no pattern engine involved
///
/// Both accept exactly the same set of paths.

use std::convert::Infallible;
use std::fmt;

use regex::Regex;

use crate::PatternSegmentType;

/// Fragment for a `[...name]` segment: an optional `/` followed by anything
const CATCH_ALL_FRAGMENT: &str = "(?:/(?s:.*))?";

/// Fragment for a `[name]` segment: exactly one non-empty segment
const DYNAMIC_FRAGMENT: &str = "/[^/]+";

/// Construct-from-segments, test-against-string
pub trait PathMatcher: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds a matcher from the ordered segments of one page file
    ///
    /// An empty slice means the page is the site root and only `/` matches.
    fn from_segments(segments: &[PatternSegmentType]) -> Result<Self, Self::Error>;

    /// Tests a normalized path against the compiled pattern
    fn is_match(&self, path: &str) -> bool;

    /// Human-readable form of the pattern, used in diagnostics
    fn pattern(&self) -> &str;
}

/// Builds the anchored regex source for a list of segments (pure function)
///
/// ```
/// use navcheck_router::matcher::regex_source;
/// use navcheck_router::classify_segment;
///
/// let segments: Vec<_> = ["docs", "[...rest]"].into_iter().map(classify_segment).collect();
/// assert_eq!(regex_source(&segments), "^/docs(?:/(?s:.*))?$");
///
/// assert_eq!(regex_source(&[]), "^/$");
/// ```
pub fn regex_source(segments: &[PatternSegmentType]) -> String {
    if segments.is_empty() {
        return "^/$".to_string();
    }

    let body: String = segments
        .iter()
        .map(|segment| match segment {
            PatternSegmentType::CatchAll(_) => CATCH_ALL_FRAGMENT.to_string(),
            PatternSegmentType::Dynamic(_) => DYNAMIC_FRAGMENT.to_string(),
            PatternSegmentType::Static(text) => format!("/{}", regex::escape(text)),
        })
        .collect();

    format!("^{}$", body)
}

/// Matcher backed by a single anchored regular expression
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl PathMatcher for RegexMatcher {
    type Error = regex::Error;

    fn from_segments(segments: &[PatternSegmentType]) -> Result<Self, Self::Error> {
        Ok(Self {
            regex: Regex::new(&regex_source(segments))?,
        })
    }

    fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Display for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.regex.as_str())
    }
}

/// Matcher that compares path segments without a pattern engine
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    segments: Vec<PatternSegmentType>,
    display: String,
}

impl PathMatcher for SegmentMatcher {
    type Error = Infallible;

    fn from_segments(segments: &[PatternSegmentType]) -> Result<Self, Self::Error> {
        let display = if segments.is_empty() {
            "/".to_string()
        } else {
            segments
                .iter()
                .map(|segment| match segment {
                    PatternSegmentType::CatchAll(name) => format!("/[...{}]", name),
                    PatternSegmentType::Dynamic(name) => format!("/[{}]", name),
                    PatternSegmentType::Static(text) => format!("/{}", text),
                })
                .collect()
        };

        Ok(Self {
            segments: segments.to_vec(),
            display,
        })
    }

    fn is_match(&self, path: &str) -> bool {
        if self.segments.is_empty() {
            return path == "/";
        }
        match_segments(&self.segments, path)
    }

    fn pattern(&self) -> &str {
        &self.display
    }
}

/// Recursive walk over the remaining segments and the unconsumed rest of the path
fn match_segments(segments: &[PatternSegmentType], rest: &str) -> bool {
    let Some((segment, tail)) = segments.split_first() else {
        return rest.is_empty();
    };

    match segment {
        PatternSegmentType::Static(text) => rest
            .strip_prefix('/')
            .and_then(|r| r.strip_prefix(text.as_str()))
            .is_some_and(|r| match_segments(tail, r)),
        PatternSegmentType::Dynamic(_) => match rest.strip_prefix('/') {
            Some(r) => {
                let end = r.find('/').unwrap_or(r.len());
                end > 0 && match_segments(tail, &r[end..])
            }
            None => false,
        },
        PatternSegmentType::CatchAll(_) => {
            // Zero segments consumed, or a `/` plus any prefix of what follows.
            match_segments(tail, rest)
                || (rest.starts_with('/')
                    && rest
                        .char_indices()
                        .map(|(i, _)| i)
                        .chain(std::iter::once(rest.len()))
                        .skip(1)
                        .any(|i| match_segments(tail, &rest[i..])))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify_segment;
    use rstest::rstest;

    fn segments(parts: &[&str]) -> Vec<PatternSegmentType> {
        parts.iter().copied().map(classify_segment).collect()
    }

    #[test]
    fn test_regex_source_static() {
        assert_eq!(regex_source(&segments(&["about"])), "^/about$");
    }

    #[test]
    fn test_regex_source_dynamic() {
        assert_eq!(regex_source(&segments(&["blog", "[slug]"])), "^/blog/[^/]+$");
    }

    #[test]
    fn test_regex_source_escapes_metacharacters() {
        let source = regex_source(&segments(&["a.b+c(d)"]));
        assert_eq!(source, r"^/a\.b\+c\(d\)$");
    }

    #[rstest]
    #[case(&["a.b"], "/a.b", true)]
    #[case(&["a.b"], "/aXb", false)]
    #[case(&["a*"], "/a*", true)]
    #[case(&["a*"], "/aaaa", false)]
    #[case(&["x|y"], "/x", false)]
    #[case(&["x|y"], "/x|y", true)]
    #[case(&["^a$"], "/^a$", true)]
    #[case(&["{1}"], "/{1}", true)]
    #[case(&["a?"], "/a", false)]
    #[case(&["[[...x]]"], "/[[...x]]", true)]
    #[case(&["[[...x]]"], "/anything", false)]
    fn test_literals_match_verbatim(
        #[case] parts: &[&str],
        #[case] path: &str,
        #[case] expected: bool,
    ) {
        let regex = RegexMatcher::from_segments(&segments(parts)).unwrap();
        let walker = SegmentMatcher::from_segments(&segments(parts)).unwrap();
        assert_eq!(regex.is_match(path), expected, "regex {} vs {}", regex, path);
        assert_eq!(walker.is_match(path), expected, "walker {} vs {}", walker.pattern(), path);
    }

    #[rstest]
    #[case(&[], "/", true)]
    #[case(&[], "", false)]
    #[case(&[], "/a", false)]
    #[case(&["a", "[slug]"], "/a/x", true)]
    #[case(&["a", "[slug]"], "/a", false)]
    #[case(&["a", "[slug]"], "/a/", false)]
    #[case(&["a", "[slug]"], "/a/b/c", false)]
    #[case(&["a", "[...rest]"], "/a", true)]
    #[case(&["a", "[...rest]"], "/a/b", true)]
    #[case(&["a", "[...rest]"], "/a/b/c", true)]
    #[case(&["a", "[...rest]"], "/a/", true)]
    #[case(&["a", "[...rest]"], "/x", false)]
    #[case(&["a", "[...rest]"], "/ab", false)]
    #[case(&["[...rest]"], "/", true)]
    #[case(&["[...rest]"], "", true)]
    #[case(&["[...rest]"], "/deep/nested/path", true)]
    #[case(&["[...rest]", "edit"], "/edit", true)]
    #[case(&["[...rest]", "edit"], "/a/b/edit", true)]
    #[case(&["[...rest]", "edit"], "/a/b", false)]
    #[case(&["[id]", "[tab]"], "/1/info", true)]
    #[case(&["[id]", "[tab]"], "/1", false)]
    #[case(&["blog", "[slug]", "[...rest]"], "/blog/x", true)]
    #[case(&["blog", "[slug]", "[...rest]"], "/blog/x/y/z", true)]
    #[case(&["blog", "[slug]", "[...rest]"], "/blog", false)]
    fn test_matchers_agree(#[case] parts: &[&str], #[case] path: &str, #[case] expected: bool) {
        let regex = RegexMatcher::from_segments(&segments(parts)).unwrap();
        let walker = SegmentMatcher::from_segments(&segments(parts)).unwrap();
        assert_eq!(regex.is_match(path), expected, "regex {} vs {:?}", regex, path);
        assert_eq!(walker.is_match(path), expected, "walker {} vs {:?}", walker.pattern(), path);
    }

    #[test]
    fn test_catch_all_spans_newlines() {
        let regex = RegexMatcher::from_segments(&segments(&["[...rest]"])).unwrap();
        assert!(regex.is_match("/a\nb"));
    }

    #[test]
    fn test_segment_matcher_display() {
        let walker = SegmentMatcher::from_segments(&segments(&["blog", "[slug]"])).unwrap();
        assert_eq!(walker.pattern(), "/blog/[slug]");

        let root = SegmentMatcher::from_segments(&[]).unwrap();
        assert_eq!(root.pattern(), "/");
    }
}
