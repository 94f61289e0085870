//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Flags override values loaded from the XML config.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Renumber a folder of images to 1..N, alternates after regulars.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Renumber image files into a dense 1..N sequence (staged two-phase rename)"
)]
pub struct Args {
    /// Directory to renumber (overrides the configured directory).
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// File extension to process, without the dot.
    #[arg(long, short = 'e', value_name = "EXT")]
    pub extension: Option<String>,

    /// Substring marking alternate files (numbered after regular files).
    #[arg(long, short = 'm', value_name = "MARKER")]
    pub marker: Option<String>,

    /// Highest index to assign; files past it are left untouched.
    #[arg(long, value_name = "N")]
    pub max_count: Option<usize>,

    /// Name of the temporary staging subdirectory.
    #[arg(long, value_name = "NAME")]
    pub staging_dir: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Dry-run: print planned renames but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be renamed, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Print where renumber will look for the config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, help = "Create a template config file and exit")]
    pub init_config: bool,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(d) = &self.directory {
            cfg.directory = d.clone();
        }
        if let Some(ext) = &self.extension {
            cfg.extension = ext.trim().trim_start_matches('.').to_string();
        }
        if let Some(m) = &self.marker {
            cfg.variant_marker = m.clone();
        }
        if let Some(n) = self.max_count {
            cfg.max_count = n;
        }
        if let Some(s) = &self.staging_dir {
            cfg.staging_dir_name = s.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
