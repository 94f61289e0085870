//! Discovery of candidate files.
//! Lists regular files directly inside the directory whose extension matches,
//! non-recursive, and turns them into plan entries.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::RenumberError;
use crate::plan::Entry;

use super::util::has_extension;

/// Ensure `directory` exists and is a directory.
pub fn ensure_directory(directory: &Path) -> Result<(), RenumberError> {
    match std::fs::metadata(directory) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RenumberError::NotADirectory(directory.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(RenumberError::DirectoryNotFound(directory.to_path_buf()))
        }
        Err(e) => Err(RenumberError::Discover {
            path: directory.to_path_buf(),
            source: e,
        }),
    }
}

/// Paths of matching files directly inside `directory`, sorted by file name.
///
/// Subdirectories (including the staging directory) and symlinks are
/// ignored. Unreadable children are logged and skipped; an
/// unreadable `directory` is an error.
pub fn list_matching(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, RenumberError> {
    ensure_directory(directory)?;

    let mut out = Vec::new();
    for item in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match item {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk failed"));
                return Err(RenumberError::Discover {
                    path: directory.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.path(), extension) {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}

/// Discover entries for renumbering.
pub fn discover(
    directory: &Path,
    extension: &str,
    marker: &str,
) -> Result<Vec<Entry>, RenumberError> {
    let paths = list_matching(directory, extension)?;
    debug!(count = paths.len(), dir = %directory.display(), "Discovered matching files");
    Ok(paths
        .into_iter()
        .map(|p| Entry::from_path(p, marker))
        .collect())
}
