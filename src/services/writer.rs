use crate::error::AmalgamateError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> AmalgamateError + '_ {
    move |source| AmalgamateError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// An output written to a temporary file next to its destination and not
/// yet renamed into place. Dropping it removes the temporary file.
pub struct StagedWrite {
    path: PathBuf,
    tmp: NamedTempFile,
    previous: Option<Vec<u8>>,
}

impl StagedWrite {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the temporary file over the destination and hands back what
    /// the destination held before.
    fn commit(self) -> Result<Option<Vec<u8>>, AmalgamateError> {
        let StagedWrite {
            path,
            tmp,
            previous,
        } = self;
        tmp.persist(&path).map_err(|e| write_error(&path)(e.error))?;
        Ok(previous)
    }
}

/// Writes `contents` to a temporary file next to `path` without touching
/// `path` itself. Fails if the destination exists but cannot be read.
pub fn stage_write(
    path: &Path,
    contents: impl AsRef<[u8]>,
) -> Result<StagedWrite, AmalgamateError> {
    // also rejects a destination that is a directory
    let previous = match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(source) => {
            return Err(AmalgamateError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_error(path))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_error(path))?;
    tmp.write_all(contents.as_ref()).map_err(write_error(path))?;
    tmp.as_file().sync_all().map_err(write_error(path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)
            .map(|m| m.permissions().mode())
            .unwrap_or(0o644);
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(write_error(path))?;
    }

    Ok(StagedWrite {
        path: path.to_path_buf(),
        tmp,
        previous,
    })
}

/// Renames every staged file into place, in order. If a rename fails, the
/// outputs already replaced by this call get their previous contents back
/// (or are removed when they did not exist) before the error is returned.
pub fn commit_all(staged: Vec<StagedWrite>) -> Result<(), AmalgamateError> {
    let mut committed: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
    for write in staged {
        let path = write.path.clone();
        match write.commit() {
            Ok(previous) => committed.push((path, previous)),
            Err(err) => {
                for (path, previous) in committed.into_iter().rev() {
                    restore(&path, previous);
                }
                return Err(err);
            }
        }
    }
    Ok(())
}

fn restore(path: &Path, previous: Option<Vec<u8>>) {
    let result = match previous {
        Some(bytes) => write_atomic(path, bytes),
        None => std::fs::remove_file(path).map_err(write_error(path)),
    };
    if let Err(err) = result {
        tracing::warn!(output = %path.display(), error = ?err, "could not restore output");
    }
}

/// Writes `contents` to a temporary file next to `path` and renames it into
/// place. A failure leaves any existing file at `path` untouched.
pub fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), AmalgamateError> {
    stage_write(path, contents)?.commit()?;
    Ok(())
}

/// Outcome of comparing a freshly rendered output with the file on disk.
pub fn compare_with_disk(path: &Path, contents: &str) -> Result<&'static str, AmalgamateError> {
    match std::fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => Ok("up_to_date"),
        Ok(_) => Ok("stale"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok("missing"),
        Err(source) => Err(AmalgamateError::OutputRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
