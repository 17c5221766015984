//! Atomic file write using the write-rename pattern.
//!
//! Writes to `{path}.tmp`, flushes, then renames onto the final path, so a
//! crash mid-write cannot leave a truncated artifact behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `data` to `path`, creating parent directories as
/// needed.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_path: PathBuf = path.to_path_buf();
    tmp_path.as_mut_os_string().push(".tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
