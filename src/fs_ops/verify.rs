//! Read-only post-run summary of a directory's numbering.

use std::fmt;
use std::path::Path;

use crate::errors::RenumberError;

use super::discover::list_matching;

/// What a directory looks like after (or before) renumbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifySummary {
    /// Matching files found.
    pub total: usize,
    /// Files whose stem is a plain integer.
    pub numeric: usize,
    /// Distinct integer values among numeric stems (`01` and `1` collide).
    pub distinct: usize,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl VerifySummary {
    pub fn non_numeric(&self) -> usize {
        self.total - self.numeric
    }

    /// True when the files are exactly `1..=total` with nothing else.
    pub fn is_dense(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                self.distinct == self.total && min == 1 && max == self.total as u64
            }
            _ => self.total == 0,
        }
    }
}

impl fmt::Display for VerifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} files", self.total)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            write!(f, "; range {min} to {max}")?;
        }
        if self.non_numeric() > 0 {
            write!(f, "; {} non-numeric", self.non_numeric())?;
        }
        Ok(())
    }
}

/// Summarize matching files in `directory`. Never mutates anything.
pub fn summarize(directory: &Path, extension: &str) -> Result<VerifySummary, RenumberError> {
    let paths = list_matching(directory, extension)?;
    let keys: Vec<u64> = paths
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|s| s.parse::<u64>().ok())
        .collect();

    let mut seen = keys.clone();
    seen.sort_unstable();
    seen.dedup();

    Ok(VerifySummary {
        total: paths.len(),
        numeric: keys.len(),
        distinct: seen.len(),
        min: keys.iter().copied().min(),
        max: keys.iter().copied().max(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn dense_directory() {
        let dir = assert_fs::TempDir::new().unwrap();
        for n in 1..=4 {
            dir.child(format!("{n}.png")).touch().unwrap();
        }
        let s = summarize(dir.path(), "png").unwrap();
        assert_eq!(s.total, 4);
        assert_eq!((s.min, s.max), (Some(1), Some(4)));
        assert!(s.is_dense());
        assert_eq!(s.to_string(), "Found 4 files; range 1 to 4");
    }

    #[test]
    fn gaps_and_names_are_not_dense() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("1.png").touch().unwrap();
        dir.child("3.png").touch().unwrap();
        dir.child("cover.png").touch().unwrap();
        let s = summarize(dir.path(), "png").unwrap();
        assert_eq!(s.total, 3);
        assert_eq!(s.non_numeric(), 1);
        assert!(!s.is_dense());
    }

    #[test]
    fn duplicate_values_are_not_dense() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("1.png").touch().unwrap();
        dir.child("01.png").touch().unwrap();
        let s = summarize(dir.path(), "png").unwrap();
        assert_eq!((s.numeric, s.distinct), (2, 1));
        assert!(!s.is_dense());
    }

    #[test]
    fn empty_directory_is_trivially_dense() {
        let dir = assert_fs::TempDir::new().unwrap();
        let s = summarize(dir.path(), "png").unwrap();
        assert_eq!(s, VerifySummary::default());
        assert!(s.is_dense());
    }
}
