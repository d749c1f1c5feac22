//! Staged artifact writes and removal primitives.
//!
//! Writes land under a temporary sibling name, then rename within the parent
//! directory handle, then fsync of that handle, so a crash never leaves a
//! half-written artifact at the final name.
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use rustix::fd::OwnedFd;
use rustix::fs::{openat, renameat, Mode, OFlags, CWD};
use rustix::io::Errno;

use crate::constants::TMP_SUFFIX;
use crate::types::errors::{Error, Result};

// Process-unique counter for temporary staging names.
static NEXT_TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn errno_msg(op: &str, path: &Path, e: Errno) -> Error {
    Error::io(format!("{op} {}: {e}", path.display()))
}

fn open_dir(dir: &Path) -> Result<OwnedFd> {
    openat(
        CWD,
        dir,
        OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
        Mode::empty(),
    )
    .map_err(|e| errno_msg("open dir", dir, e))
}

/// Write `contents` to `path` via a temporary sibling plus rename.
///
/// Missing parent directories are created. When `overwrite` is false and a
/// node already exists at `path`, the write is refused.
pub fn write_atomic(path: &Path, contents: &[u8], overwrite: bool) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::invalid_path(format!("{} has no parent", path.display())))?;
    let fname = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::invalid_path(format!("{} has no file name", path.display())))?;
    if !overwrite && path.symlink_metadata().is_ok() {
        return Err(Error::io(format!("{} already exists", path.display())));
    }

    fs::create_dir_all(parent)
        .map_err(|e| Error::io(format!("create {}: {e}", parent.display())))?;

    let ctr = NEXT_TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{fname}.{}.{ctr}{TMP_SUFFIX}", std::process::id());
    let tmp = parent.join(&tmp_name);
    fs::write(&tmp, contents).map_err(|e| Error::io(format!("write {}: {e}", tmp.display())))?;

    let dirfd = open_dir(parent)?;
    if let Err(e) = renameat(&dirfd, tmp_name.as_str(), &dirfd, fname) {
        let _ = fs::remove_file(&tmp);
        return Err(errno_msg("rename into", path, e));
    }
    rustix::fs::fsync(&dirfd).map_err(|e| errno_msg("fsync dir of", path, e))?;
    Ok(())
}

/// Remove `path` if present, fsyncing the parent directory afterwards.
///
/// Returns whether a node was removed; a missing path is not an error, so
/// a repeated rollback sweep converges.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            let _ = fsync_parent_dir(path);
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(format!("remove {}: {e}", path.display()))),
    }
}

/// Fsync the parent directory of `path` for durability.
pub fn fsync_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        let dir = fs::File::open(parent)
            .map_err(|e| Error::io(format!("open {}: {e}", parent.display())))?;
        dir.sync_all()
            .map_err(|e| Error::io(format!("fsync {}: {e}", parent.display())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_creates_missing_parents() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("menu/sub/Foo.lnk");
        write_atomic(&path, b"body", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"body");
    }

    #[test]
    fn refuses_existing_node_without_overwrite() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("Foo.lnk");
        fs::write(&path, b"old").unwrap();
        assert!(write_atomic(&path, b"new", false).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn replaces_existing_node_with_overwrite() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("Foo.lnk");
        fs::write(&path, b"old").unwrap();
        write_atomic(&path, b"new", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn removal_converges() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("Foo.lnk");
        fs::write(&path, b"x").unwrap();
        assert!(remove_file_if_exists(&path).unwrap());
        assert!(!remove_file_if_exists(&path).unwrap());
    }
}
