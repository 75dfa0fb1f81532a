//! Copy every file of one directory into another.

use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};
use tracing::debug;

use commonkit_core::{FsError, FsResult};

use crate::batch::{run_batch, OperationType};
use crate::config::{CopyOptions, ListOptions};
use crate::listing::{entry_paths, list_files};
use crate::require_dir;

/// Copy every file in `from` (hidden ones included) into `to`.
///
/// Content and permissions are always copied; timestamps too unless
/// `options.preserve_timestamps` is off. Existing files in `to` are
/// overwritten. Copying a directory onto itself fails with `SameFile` before
/// any file is touched. The first failure aborts the batch and files copied
/// before it stay in place.
pub fn copy_all(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    options: &CopyOptions,
) -> FsResult<usize> {
    let (from, to) = (from.as_ref(), to.as_ref());

    list_files(from, &ListOptions::with_hidden(), &[]).flat_map(|entries| {
        require_dir(to)
            .and_then(|()| ensure_distinct_dirs(from, to))
            .and_then(|()| {
                run_batch(OperationType::Copy, entry_paths(from, &entries), |source| {
                    let dest = to.join(source.file_name().unwrap_or_default());
                    copy_file(source, &dest, options).map(|_| ())
                })
            })
            .into()
    })
}

fn ensure_distinct_dirs(from: &Path, to: &Path) -> Result<(), FsError> {
    let from = fs::canonicalize(from).map_err(|e| FsError::io(from, e))?;
    let to = fs::canonicalize(to).map_err(|e| FsError::io(to, e))?;
    if from == to {
        return Err(FsError::SameFile { path: to });
    }
    Ok(())
}

/// Copy a single file, carrying metadata over.
///
/// Fails with `SameFile` when `dest` already names `source`, since the copy
/// would truncate it.
pub(crate) fn copy_file(source: &Path, dest: &Path, options: &CopyOptions) -> Result<u64, FsError> {
    if is_same_file(source, dest)? {
        return Err(FsError::SameFile {
            path: dest.to_path_buf(),
        });
    }

    let bytes = fs::copy(source, dest).map_err(|e| FsError::io(source, e))?;

    if options.preserve_timestamps {
        let metadata = fs::metadata(source).map_err(|e| FsError::io(source, e))?;
        let accessed = FileTime::from_last_access_time(&metadata);
        let modified = FileTime::from_last_modification_time(&metadata);
        set_file_times(dest, accessed, modified).map_err(|e| FsError::io(dest, e))?;
    }

    debug!(source = %source.display(), dest = %dest.display(), bytes, "copied file");
    Ok(bytes)
}

/// Whether `dest` exists and is the same file as `source`, links included.
fn is_same_file(source: &Path, dest: &Path) -> Result<bool, FsError> {
    let source_meta = fs::metadata(source).map_err(|e| FsError::io(source, e))?;
    let dest_meta = match fs::metadata(dest) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(FsError::io(dest, e)),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(source_meta.dev() == dest_meta.dev() && source_meta.ino() == dest_meta.ino())
    }

    #[cfg(not(unix))]
    {
        let _ = (source_meta, dest_meta);
        match (fs::canonicalize(source), fs::canonicalize(dest)) {
            (Ok(a), Ok(b)) => Ok(a == b),
            _ => Ok(false),
        }
    }
}
