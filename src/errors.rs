//! Typed error definitions for renumber.
//! Fatal variants abort a run before anything is moved; `MoveFailed` and
//! `CleanupFailed` are collected per file and surfaced in the run report.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of the two-phase move a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePhase {
    /// Original name -> staging directory.
    Stage,
    /// Staging directory -> final name.
    Commit,
}

impl fmt::Display for MovePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MovePhase::Stage => "stage",
            MovePhase::Commit => "commit",
        })
    }
}

#[derive(Debug, Error)]
pub enum RenumberError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot list directory {path}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot prepare staging directory {path}: {reason}")]
    StagingDirCreate { path: PathBuf, reason: String },

    #[error("Move failed during {phase} ({from} -> {to}): {source}")]
    MoveFailed {
        phase: MovePhase,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not remove staging directory {path} ({} file(s) left inside): {source}", .orphans.len())]
    CleanupFailed {
        path: PathBuf,
        orphans: Vec<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RenumberError {
    /// Stable numeric code used in structured log fields.
    pub fn code(&self) -> u16 {
        match self {
            RenumberError::DirectoryNotFound(_) => 10,
            RenumberError::NotADirectory(_) => 11,
            RenumberError::Discover { .. } => 12,
            RenumberError::StagingDirCreate { .. } => 20,
            RenumberError::MoveFailed { .. } => 30,
            RenumberError::CleanupFailed { .. } => 40,
            RenumberError::InvalidConfig(_) => 50,
        }
    }

    /// True for errors that abort the whole run before any file is moved.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            RenumberError::MoveFailed { .. } | RenumberError::CleanupFailed { .. }
        )
    }

    /// Short machine-friendly label for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenumberError::DirectoryNotFound(_) => "directory_not_found",
            RenumberError::NotADirectory(_) => "not_a_directory",
            RenumberError::Discover { .. } => "discover",
            RenumberError::StagingDirCreate { .. } => "staging_dir_create",
            RenumberError::MoveFailed { .. } => "move_failed",
            RenumberError::CleanupFailed { .. } => "cleanup_failed",
            RenumberError::InvalidConfig(_) => "invalid_config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_and_cleanup_failures_are_not_fatal() {
        let mv = RenumberError::MoveFailed {
            phase: MovePhase::Commit,
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!mv.is_fatal());
        assert!(mv.to_string().contains("commit"));

        let missing = RenumberError::DirectoryNotFound(PathBuf::from("/nope"));
        assert!(missing.is_fatal());
        assert_eq!(missing.kind(), "directory_not_found");
    }
}
