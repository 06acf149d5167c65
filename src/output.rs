//! Writing generated files.
//!
//! Generated files are left read-only to discourage hand edits. A rebuild
//! unlocks the file, rewrites it and locks it again; the lock step is owned by
//! a guard so it also runs when the write fails part way.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

#[cfg(unix)]
const READ_ONLY_MODE: u32 = 0o444;
#[cfg(unix)]
const WRITABLE_MODE: u32 = 0o644;

/// Write `content` to `path`, creating parent directories and leaving the
/// file read-only. A trailing newline is appended when missing.
pub fn write_generated(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    if path.exists() {
        set_read_only(path, false)
            .with_context(|| format!("Failed to unlock {}", path.display()))?;
    }

    let guard = ReadOnlyGuard::new(path);
    fs::write(path, with_trailing_newline(content))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    guard.lock()
}

fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}

/// Locks the file at `path` when dropped, unless `lock` already did.
struct ReadOnlyGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> ReadOnlyGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    /// Lock now and surface any failure to the caller.
    fn lock(mut self) -> Result<()> {
        self.armed = false;
        set_read_only(self.path, true)
            .with_context(|| format!("Failed to lock {}", self.path.display()))
    }
}

impl Drop for ReadOnlyGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }
        if let Err(e) = set_read_only(self.path, true) {
            warn!("Failed to restore read-only on {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(unix)]
fn set_read_only(path: &Path, read_only: bool) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = if read_only { READ_ONLY_MODE } else { WRITABLE_MODE };
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_read_only(path: &Path, read_only: bool) -> std::io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(read_only);
    fs::set_permissions(path, permissions)
}
