//! Filesystem side of renumbering: discovery, staged apply, verification.

mod apply;
mod atomic;
mod discover;
mod util;
mod verify;

pub use apply::{ApplyReport, Renamed, apply_plan, prepare_staging_dir};
pub use atomic::rename_no_clobber;
pub use discover::{discover, ensure_directory, list_matching};
pub use verify::{VerifySummary, summarize};
