//! # navcheck Router
//!
//! Compiles page files of a file-based-routing site into route matchers:
//! - Static routes (`about.astro` → `/about`)
//! - Index pages (`blog/index.astro` → `/blog`, `index.astro` → `/`)
//! - Dynamic segments (`blog/[slug].astro` → `/blog/<one segment>`)
//! - Catch-all segments (`docs/[...rest].astro` → `/docs`, `/docs/a`, `/docs/a/b`, ...)
//!
//! Every compiled pattern is anchored at both ends, literal segments are matched verbatim,
//! and directory separators are normalized before a path is split, so the same page tree
//! produces the same routes on every host.
//!
//! ## Example
//!
//! ```
//! use navcheck_router::{RoutePattern, RouteTable};
//!
//! let table: RouteTable = RouteTable::from_patterns(vec![
//!     RoutePattern::from_path("src/pages/index.astro", "src/pages").unwrap(),
//!     RoutePattern::from_path("src/pages/blog/[slug].astro", "src/pages").unwrap(),
//! ]);
//!
//! assert!(table.matches_any("/"));
//! assert!(table.matches_any("/blog/hello"));
//! assert!(!table.matches_any("/blog"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod matcher;
pub mod path;
pub mod route;

pub use matcher::{PathMatcher, RegexMatcher, SegmentMatcher};
pub use path::{is_internal_href, normalize_href, normalize_separators};
pub use route::pattern::{classify_segment, PatternSegmentType};

// ============================================================================
// Core Types
// ============================================================================

/// The set of URL paths one page file answers to
#[derive(Debug, Clone)]
pub struct RoutePattern<M = RegexMatcher> {
    /// File path of the page, as it was handed to the compiler
    pub template_path: String,
    /// Classified segments after root, extension and index stripping
    pub segments: Vec<PatternSegmentType>,
    /// Priority for resolution (lower = higher priority)
    pub priority: usize,
    /// Whether this route has a catch-all segment
    pub has_catch_all: bool,
    matcher: M,
}

impl<M: PathMatcher> RoutePattern<M> {
    /// Compiles a route from a page file path
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the page file (either separator style)
    /// * `pages_dir` - Pages root to strip from the path
    ///
    /// # Examples
    ///
    /// ```
    /// use navcheck_router::RoutePattern;
    ///
    /// let route: RoutePattern = RoutePattern::from_path("pages/blog/index.astro", "pages").unwrap();
    /// assert!(route.matches("/blog"));
    /// assert!(!route.matches("/blog/index"));
    /// ```
    pub fn from_path(file_path: &str, pages_dir: &str) -> Result<Self, M::Error> {
        let segments = route::parse_segments(file_path, pages_dir);
        let matcher = M::from_segments(&segments)?;

        let has_catch_all = segments
            .iter()
            .any(|s| matches!(s, PatternSegmentType::CatchAll(_)));
        let dynamic_count = segments.iter().filter(|s| s.is_dynamic()).count();
        let priority = route::calculate_priority(has_catch_all, dynamic_count, segments.len());

        Ok(RoutePattern {
            template_path: file_path.to_string(),
            segments,
            priority,
            has_catch_all,
            matcher,
        })
    }

    /// Tests a normalized path against this route
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Human-readable compiled pattern
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    /// Whether the route contains no dynamic or catch-all segment
    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(PatternSegmentType::is_dynamic)
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// All compiled routes of one pages root
///
/// Routes are kept in resolution order: static before dynamic before catch-all, then by
/// template path so output is stable between runs.
#[derive(Debug, Clone)]
pub struct RouteTable<M = RegexMatcher> {
    routes: Vec<RoutePattern<M>>,
}

impl<M: PathMatcher> RouteTable<M> {
    /// Builds a table from already compiled routes
    pub fn from_patterns(mut routes: Vec<RoutePattern<M>>) -> Self {
        routes.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.template_path.cmp(&b.template_path))
        });
        Self { routes }
    }

    /// Compiles every page path into a table
    ///
    /// ```
    /// use navcheck_router::RouteTable;
    ///
    /// let table: RouteTable = RouteTable::compile(["pages/about.md", "pages/[...rest].md"], "pages").unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn compile<I, S>(paths: I, pages_dir: &str) -> Result<Self, M::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let routes = paths
            .into_iter()
            .map(|path| RoutePattern::from_path(path.as_ref(), pages_dir))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_patterns(routes))
    }

    /// Whether any route accepts the path
    pub fn matches_any(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.matches(path))
    }

    /// Returns the first route, in priority order, that accepts the path
    ///
    /// Priority ranks static over dynamic over catch-all routes. It does not reproduce every
    /// tie-break a site generator applies between routes of different depths.
    ///
    /// ```
    /// use navcheck_router::RouteTable;
    ///
    /// let table: RouteTable =
    ///     RouteTable::compile(["pages/blog/new.astro", "pages/blog/[slug].astro"], "pages").unwrap();
    /// assert_eq!(table.resolve("/blog/new").unwrap().template_path, "pages/blog/new.astro");
    /// assert_eq!(table.resolve("/blog/post").unwrap().template_path, "pages/blog/[slug].astro");
    /// ```
    pub fn resolve(&self, path: &str) -> Option<&RoutePattern<M>> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Get all routes in resolution order
    pub fn routes(&self) -> &[RoutePattern<M>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<M> Default for RouteTable<M> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}
