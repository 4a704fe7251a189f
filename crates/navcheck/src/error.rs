// File: src/error.rs
// Purpose: Setup errors that abort a check before any link is validated

use std::io;
use std::path::PathBuf;

/// Fatal conditions of a check run
///
/// Unresolved links are not errors; they come back as
/// [`Validation::Missing`](crate::Validation::Missing).
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("menu configuration not found: {}", path.display())]
    MenuFileMissing { path: PathBuf },

    #[error("failed to read menu configuration {}", path.display())]
    MenuRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse menu configuration {}", path.display())]
    MenuParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("menu configuration {} has no `site.menu` key", path.display())]
    MenuKeyMissing { path: PathBuf },

    #[error("pages directory not found: {}", path.display())]
    PagesDirMissing { path: PathBuf },

    #[error("failed to scan pages directory")]
    PageWalk(#[from] walkdir::Error),

    #[error("no page files with extensions [{extensions}] found under {}", path.display())]
    NoPages { path: PathBuf, extensions: String },

    #[error("failed to compile route pattern")]
    Pattern(#[from] regex::Error),
}
