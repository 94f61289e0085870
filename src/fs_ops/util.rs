use std::io;
use std::path::Path;

/// Best-effort durability for renames inside `dir`.
#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = std::fs::File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// True when `name` ends with `.<extension>` (case-sensitive).
pub(super) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e == std::ffi::OsStr::new(extension))
        .unwrap_or(false)
}
