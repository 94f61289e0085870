//! No-clobber rename helper.
//! - Refuses to replace anything already at the destination (std's rename would
//!   silently overwrite on Unix).
//! - Errors carry the operation and both paths via io::Error kind + message.

use std::fs;
use std::io;
use std::path::Path;

/// Rename `src` to `dst`, failing with `AlreadyExists` if `dst` is occupied.
///
/// The existence check and the rename are two steps; the directory is assumed
/// not to be modified by anyone else during a run.
pub fn rename_no_clobber(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(_) => {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination already exists: {}", dst.display()),
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::rename(src, dst)
}
