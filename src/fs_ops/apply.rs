//! Staged two-phase apply of a renumbering plan.
//!
//! Phase 1 moves every assigned file into an empty staging subdirectory under
//! its new name; phase 2 moves the staged files back into the directory.
//! Target names inside the staging directory are unique by construction, so
//! no rename can land on a file that has not been renamed yet.
//!
//! Per-file failures are collected and the batch keeps going. Nothing is
//! rolled back. Files that fail to commit stay in the staging directory, which
//! then cannot be removed; that is reported as a cleanup warning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{MovePhase, RenumberError};
use crate::plan::Plan;

use super::atomic::rename_no_clobber;
use super::util::fsync_dir;

/// One file that made it through both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
    pub index: usize,
}

/// Outcome of applying a plan.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub staging_dir: PathBuf,
    /// Files moved into staging.
    pub staged: usize,
    /// Files moved to their final name.
    pub renamed: Vec<Renamed>,
    /// Per-file `MoveFailed` errors, in processing order.
    pub failures: Vec<RenumberError>,
    /// `CleanupFailed` if the staging directory could not be removed.
    pub cleanup: Option<RenumberError>,
}

impl ApplyReport {
    pub fn committed(&self) -> usize {
        self.renamed.len()
    }

    /// True when every file was renamed and the staging directory is gone.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.cleanup.is_none()
    }
}

/// Create the staging directory, or reuse it if it already exists empty.
///
/// Anything else at that path (a file, a non-empty directory, or a creation
/// error) is fatal; nothing has been moved at that point.
pub fn prepare_staging_dir(staging: &Path) -> Result<(), RenumberError> {
    let fail = |reason: String| RenumberError::StagingDirCreate {
        path: staging.to_path_buf(),
        reason,
    };

    match fs::symlink_metadata(staging) {
        Ok(meta) if meta.is_dir() => {
            let mut children = fs::read_dir(staging).map_err(|e| fail(e.to_string()))?;
            if children.next().is_some() {
                return Err(fail("directory already exists and is not empty".into()));
            }
            debug!(path = %staging.display(), "Reusing empty staging directory");
            Ok(())
        }
        Ok(_) => Err(fail("path exists and is not a directory".into())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir(staging).map_err(|e| fail(e.to_string()))?;
            debug!(path = %staging.display(), "Created staging directory");
            Ok(())
        }
        Err(e) => Err(fail(e.to_string())),
    }
}

/// Apply `plan` to `directory` using `<directory>/<staging_name>` as the
/// staging area.
pub fn apply_plan(
    plan: &Plan,
    directory: &Path,
    staging_name: &str,
) -> Result<ApplyReport, RenumberError> {
    let staging = directory.join(staging_name);
    prepare_staging_dir(&staging)?;

    let mut report = ApplyReport {
        staging_dir: staging.clone(),
        ..Default::default()
    };

    // Phase 1: original -> staging/<index>.<ext>
    info!(count = plan.assignments.len(), "Staging files");
    let mut staged: Vec<(usize, &str, PathBuf, PathBuf)> = Vec::with_capacity(plan.assignments.len());
    for a in &plan.assignments {
        let tmp = staging.join(&a.target_name);
        match rename_no_clobber(&a.entry.path, &tmp) {
            Ok(()) => {
                debug!(from = %a.entry.path.display(), to = %tmp.display(), "Staged");
                staged.push((a.index, a.entry.file_name.as_str(), a.entry.path.clone(), tmp));
            }
            Err(source) => {
                warn!(file = %a.entry.file_name, error = %source, "Failed to stage file");
                report.failures.push(RenumberError::MoveFailed {
                    phase: MovePhase::Stage,
                    from: a.entry.path.clone(),
                    to: tmp,
                    source,
                });
            }
        }
    }
    report.staged = staged.len();

    // Phase 2: staging/<index>.<ext> -> directory/<index>.<ext>
    info!(count = staged.len(), "Committing staged files");
    for (index, original_name, original, tmp) in staged {
        let Some(name) = tmp.file_name() else { continue };
        let dest = directory.join(name);
        match rename_no_clobber(&tmp, &dest) {
            Ok(()) => {
                info!(from = %original_name, to = %dest.display(), "Renamed");
                report.renamed.push(Renamed {
                    from: original,
                    to: dest,
                    index,
                });
            }
            Err(source) => {
                warn!(file = %original_name, error = %source, "Failed to commit file; left in staging");
                report.failures.push(RenumberError::MoveFailed {
                    phase: MovePhase::Commit,
                    from: tmp,
                    to: dest,
                    source,
                });
            }
        }
    }
    let _ = fsync_dir(directory);

    // Cleanup: staging must be empty to be removed.
    if let Err(source) = fs::remove_dir(&staging) {
        let orphans = fs::read_dir(&staging)
            .map(|rd| rd.flatten().map(|e| e.path()).collect())
            .unwrap_or_default();
        warn!(path = %staging.display(), error = %source, "Could not remove staging directory");
        report.cleanup = Some(RenumberError::CleanupFailed {
            path: staging,
            orphans,
            source,
        });
    } else {
        debug!(path = %staging.display(), "Removed staging directory");
    }

    Ok(report)
}
