//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{
    DIRECTORY_DEFAULT, EXTENSION_DEFAULT, MAX_COUNT_DEFAULT, STAGING_DIR_DEFAULT,
    VARIANT_MARKER_DEFAULT,
};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Per-phase detail
    Info,
    /// Per-file detail
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a renumbering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Flat directory whose files are renumbered
    pub directory: PathBuf,
    /// Extension filter without the dot, matched case-sensitively
    pub extension: String,
    /// Substring marking the alternate variant (e.g. "_b2")
    pub variant_marker: String,
    /// Highest index that will be assigned
    pub max_count: usize,
    /// Name of the staging subdirectory created inside `directory`
    pub staging_dir_name: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, print the plan but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DIRECTORY_DEFAULT),
            extension: EXTENSION_DEFAULT.to_string(),
            variant_marker: VARIANT_MARKER_DEFAULT.to_string(),
            max_count: MAX_COUNT_DEFAULT,
            staging_dir_name: STAGING_DIR_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config for `directory`; other fields use defaults.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_variant_marker(mut self, marker: impl Into<String>) -> Self {
        self.variant_marker = marker.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Full path of the staging subdirectory.
    pub fn staging_dir(&self) -> PathBuf {
        self.directory.join(&self.staging_dir_name)
    }
}
