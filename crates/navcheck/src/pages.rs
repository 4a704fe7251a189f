// File: src/pages.rs
// Purpose: Enumerates page template files under the pages root

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::CheckError;

/// Recursively collects every file under `root` whose extension is in `extensions`
///
/// Paths are returned in file-name order so routes and diagnostics are stable between runs.
/// Symlinked pages and directories are followed; a link loop is reported as a walk error.
pub fn enumerate_pages(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, CheckError> {
    if !root.is_dir() {
        return Err(CheckError::PagesDirMissing {
            path: root.to_path_buf(),
        });
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        if has_page_extension(entry.path(), extensions) {
            debug!("Found page {:?}", entry.path());
            pages.push(entry.into_path());
        }
    }

    Ok(pages)
}

fn has_page_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
