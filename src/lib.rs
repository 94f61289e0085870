//! Core library for `renumber`.
//!
//! Renames the image files of one flat directory to `1.<ext>` … `N.<ext>`:
//! regular files first (by numeric key), then files carrying the alternate
//! marker. Planning is pure (`plan`); all filesystem work is in `fs_ops`,
//! which moves files through an empty staging subdirectory so no rename can
//! collide with a name that has not been moved yet.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod plan;
pub mod platform;
pub mod prompt;
pub mod renumber;

pub use config::{
    Config, LogLevel, create_template_config, default_config_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{MovePhase, RenumberError};
pub use fs_ops::{ApplyReport, VerifySummary, apply_plan, summarize};
pub use plan::{Assignment, Entry, ParsedName, Plan, UNPARSED_KEY, Variant, build_plan, parse_stem};
pub use crate::renumber::{RenumberReport, plan_renumber, renumber, renumber_with_config};
