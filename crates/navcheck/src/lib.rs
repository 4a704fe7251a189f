// navcheck - navigation menu link checker
// Verifies that every internal menu href resolves to a page of a file-based-routing site

pub mod config;
pub mod error;
pub mod menu;
pub mod pages;
pub mod validate;

use std::path::Path;
use tracing::info;

use navcheck_router::RouteTable;

// Re-export core types
pub use config::{CheckConfig, Config};
pub use error::CheckError;
pub use menu::{flatten_menu, load_menu, parse_menu, FlatEntry, MenuEntry};
pub use pages::enumerate_pages;
pub use validate::{validate_links, LinkReport, LinkValidator, Validation};

/// Everything one check run produced, for the reporter
#[derive(Debug)]
pub struct CheckReport {
    /// Compiled routes in resolution order
    pub routes: RouteTable,
    /// Flattened menu, in depth-first pre-order
    pub entries: Vec<FlatEntry>,
    pub links: LinkReport,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.links.outcome.is_clean()
    }
}

/// Runs the whole check for one project
///
/// load menu → enumerate pages → compile routes → flatten menu → validate
///
/// Paths in `config` are resolved against `project_root`. A missing menu file, missing
/// pages directory, or a pages directory without any page file is an error; unresolved
/// links are reported through [`CheckReport::links`].
pub fn check_project(project_root: &Path, config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let menu = load_menu(&project_root.join(&config.menu_file))?;

    let pages_dir = project_root.join(&config.pages_dir);
    let files = enumerate_pages(&pages_dir, &config.extensions)?;
    if files.is_empty() {
        return Err(CheckError::NoPages {
            path: pages_dir,
            extensions: config.extensions.join(", "),
        });
    }

    // Display paths are relative to the project root, e.g. `src/pages/blog/[slug].astro`.
    let display_paths: Vec<String> = files
        .iter()
        .filter_map(|file| file.strip_prefix(&pages_dir).ok())
        .map(|relative| Path::new(&config.pages_dir).join(relative).to_string_lossy().into_owned())
        .collect();

    let routes: RouteTable = RouteTable::compile(&display_paths, &config.pages_dir)?;
    info!("Compiled {} routes from {:?}", routes.len(), pages_dir);

    let entries = flatten_menu(&menu);
    info!("Flattened menu into {} entries", entries.len());

    let links = LinkValidator::new()
        .with_ignored(config.ignore.iter().cloned())
        .validate(&entries, &routes);
    info!(
        "Checked {} internal links ({} exempt, {} missing)",
        links.checked,
        links.exempt,
        links.outcome.missing().len()
    );

    Ok(CheckReport {
        routes,
        entries,
        links,
    })
}
