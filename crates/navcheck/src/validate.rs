// File: src/validate.rs
// Purpose: Checks flattened menu hrefs against the compiled route table

use navcheck_router::{is_internal_href, normalize_href, PathMatcher, RouteTable};
use tracing::debug;

use crate::FlatEntry;

/// Outcome of validating a menu against the pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every internal href resolves
    Clean,
    /// Entries whose href no route accepts, in menu order
    Missing(Vec<FlatEntry>),
}

impl Validation {
    pub fn is_clean(&self) -> bool {
        matches!(self, Validation::Clean)
    }

    /// Unresolved entries (empty when clean)
    pub fn missing(&self) -> &[FlatEntry] {
        match self {
            Validation::Clean => &[],
            Validation::Missing(entries) => entries.as_slice(),
        }
    }
}

/// Validation outcome plus the counts shown in the summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    /// Internal hrefs tested against the routes
    pub checked: usize,
    /// Entries without an href, with an external href, or under an ignored prefix
    pub exempt: usize,
    pub outcome: Validation,
}

/// Validates menu hrefs, optionally skipping configured prefixes
#[derive(Debug, Clone, Default)]
pub struct LinkValidator {
    ignore: Vec<String>,
}

impl LinkValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Href prefixes exempt from checking, like external links
    pub fn with_ignored<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(prefixes.into_iter().map(Into::into));
        self
    }

    fn is_ignored(&self, href: &str) -> bool {
        self.ignore.iter().any(|prefix| href.starts_with(prefix.as_str()))
    }

    /// Returns the internal hrefs this validator would check, already normalized
    fn checked_href<'a>(&self, entry: &'a FlatEntry) -> Option<&'a str> {
        let href = entry.href.as_deref()?;
        if !is_internal_href(href) || self.is_ignored(href) {
            return None;
        }
        Some(normalize_href(href))
    }

    pub fn validate<M: PathMatcher>(&self, entries: &[FlatEntry], routes: &RouteTable<M>) -> LinkReport {
        let mut checked = 0;
        let mut missing = Vec::new();

        for entry in entries {
            let Some(href) = self.checked_href(entry) else {
                continue;
            };
            checked += 1;

            match routes.resolve(href) {
                Some(route) => debug!("{} -> {}", href, route.template_path),
                None => {
                    debug!("No page serves {} ({})", href, entry.label());
                    missing.push(entry.clone());
                }
            }
        }

        let outcome = if missing.is_empty() {
            Validation::Clean
        } else {
            Validation::Missing(missing)
        };

        LinkReport {
            checked,
            exempt: entries.len() - checked,
            outcome,
        }
    }
}

/// Validates every internal href with no ignored prefixes
///
/// ```
/// use navcheck::{validate_links, FlatEntry, Validation};
/// use navcheck_router::RouteTable;
///
/// let routes: RouteTable = RouteTable::compile(["pages/about.astro"], "pages").unwrap();
/// let entries = vec![FlatEntry { href: Some("/about/".into()), ..Default::default() }];
/// assert_eq!(validate_links(&entries, &routes), Validation::Clean);
/// ```
pub fn validate_links<M: PathMatcher>(entries: &[FlatEntry], routes: &RouteTable<M>) -> Validation {
    LinkValidator::new().validate(entries, routes).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(text: &str, href: Option<&str>) -> FlatEntry {
        FlatEntry {
            id: None,
            text: Some(text.to_string()),
            href: href.map(str::to_string),
        }
    }

    fn routes(files: &[&str]) -> RouteTable {
        RouteTable::compile(files.iter().copied(), "src/pages").unwrap()
    }

    #[test]
    fn test_exempt_entries_are_dropped() {
        let table = routes(&["src/pages/index.astro"]);
        let entries = vec![
            entry("No href", None),
            entry("External", Some("https://example.com/nope")),
            entry("Mail", Some("mailto:someone@example.com")),
            entry("Anchor", Some("#section")),
            entry("Relative", Some("about")),
            entry("Empty", Some("")),
        ];

        let report = LinkValidator::new().validate(&entries, &table);
        assert_eq!(report.checked, 0);
        assert_eq!(report.exempt, 6);
        assert_eq!(report.outcome, Validation::Clean);
    }

    #[test]
    fn test_trailing_slash_is_equivalent() {
        let table = routes(&["src/pages/about.astro"]);
        let entries = vec![entry("A", Some("/about")), entry("B", Some("/about/"))];
        assert_eq!(validate_links(&entries, &table), Validation::Clean);
    }

    #[test]
    fn test_root_is_not_altered() {
        let table = routes(&["src/pages/index.astro"]);
        assert!(validate_links(&[entry("Home", Some("/"))], &table).is_clean());

        let catch_all = routes(&["src/pages/[...all].astro"]);
        assert!(validate_links(&[entry("Home", Some("/"))], &catch_all).is_clean());
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        let table = routes(&["src/pages/about.astro"]);
        let outcome = validate_links(&[entry("Double", Some("/about//"))], &table);
        assert_eq!(outcome.missing().len(), 1);
    }

    #[test]
    fn test_missing_entries_keep_order_and_fields() {
        let table = routes(&["src/pages/index.astro"]);
        let entries = vec![
            entry("Z", Some("/z")),
            entry("Home", Some("/")),
            FlatEntry {
                id: Some("a-id".to_string()),
                text: None,
                href: Some("/a/".to_string()),
            },
        ];

        let outcome = validate_links(&entries, &table);
        assert_eq!(
            outcome,
            Validation::Missing(vec![entries[0].clone(), entries[2].clone()])
        );
        assert_eq!(outcome.missing()[1].href.as_deref(), Some("/a/"));
    }

    #[test]
    fn test_ignored_prefixes_are_exempt() {
        let table = routes(&["src/pages/index.astro"]);
        let entries = vec![entry("Api", Some("/api/docs")), entry("Other", Some("/other"))];

        let report = LinkValidator::new()
            .with_ignored(["/api/"])
            .validate(&entries, &table);

        assert_eq!(report.checked, 1);
        assert_eq!(report.exempt, 1);
        assert_eq!(report.outcome.missing(), &[entries[1].clone()]);
    }

    #[test]
    fn test_empty_route_table_reports_everything_missing() {
        let table: RouteTable = RouteTable::default();
        let outcome = validate_links(&[entry("Home", Some("/"))], &table);
        assert_eq!(outcome.missing().len(), 1);
    }
}
