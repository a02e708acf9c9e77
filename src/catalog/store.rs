//! Durable catalog persistence: backup copies and atomic replacement.
//!
//! A catalog is never written in place. New content goes to a temporary
//! sibling file which is flushed and then renamed over the target, so a
//! failure at any point leaves the original file as it was.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Backup tag used when several languages are merged in one run.
pub const ALL_LANGUAGES_TAG: &str = "all";

/// `<catalog>.<tag>.bak`, next to the catalog.
pub fn backup_path(catalog: &Path, tag: &str) -> PathBuf {
    let mut name = OsString::from(catalog.as_os_str());
    name.push(format!(".{}.bak", tag));
    PathBuf::from(name)
}

/// Copy the catalog to its backup path, overwriting an older backup.
pub fn create_backup(catalog: &Path, tag: &str) -> Result<PathBuf> {
    let backup = backup_path(catalog, tag);
    fs::copy(catalog, &backup).map_err(|source| Error::WriteFailure {
        path: backup.clone(),
        source,
    })?;
    Ok(backup)
}

/// Create the directories leading to `path`. [`write_atomic`] requires them
/// to exist.
pub fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| Error::WriteFailure {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Atomically replace `path` with `contents`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomic_with(path, |file| file.write_all(contents))
}

/// Atomically replace `path` with whatever `write` puts into the temporary
/// file. If `write` fails, the target is left untouched and the temporary
/// file is removed.
pub fn write_atomic_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let failure = |source: io::Error| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on an error path deletes it.
    let mut temp = NamedTempFile::new_in(dir).map_err(failure)?;
    write(temp.as_file_mut()).map_err(failure)?;
    temp.as_file().sync_all().map_err(failure)?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(failure)?;
    }

    temp.persist(path).map_err(|err| failure(err.error))?;
    Ok(())
}
