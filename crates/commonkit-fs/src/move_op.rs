//! Move every file of one directory into another.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use commonkit_core::{FsError, FsResult};

use crate::batch::{run_batch, OperationType};
use crate::config::{CopyOptions, ListOptions, MoveOptions};
use crate::copy::copy_file;
use crate::listing::{entry_paths, list_files_impl};
use crate::require_dir;

/// Move every file in `from` (hidden ones included) into `to`.
///
/// With `options.overwrite` an existing file of the same name in `to` is
/// replaced; without it the collision aborts the batch with
/// `AlreadyExists`. Files moved before a failure are not moved back.
pub fn move_all(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    options: &MoveOptions,
) -> FsResult<usize> {
    move_all_impl(from.as_ref(), to.as_ref(), options).into()
}

fn move_all_impl(from: &Path, to: &Path, options: &MoveOptions) -> Result<usize, FsError> {
    let entries = list_files_impl(from, &ListOptions::with_hidden(), &[])?;
    require_dir(to)?;

    run_batch(OperationType::Move, entry_paths(from, &entries), |source| {
        let dest = to.join(source.file_name().unwrap_or_default());
        if !options.overwrite && fs::symlink_metadata(&dest).is_ok() {
            return Err(FsError::AlreadyExists { path: dest });
        }
        move_file(source, &dest)
    })
}

/// Move a single file, falling back to copy and delete only when the rename
/// crosses file systems.
pub(crate) fn move_file(source: &Path, dest: &Path) -> Result<(), FsError> {
    match fs::rename(source, dest) {
        Ok(()) => {
            debug!(source = %source.display(), dest = %dest.display(), "moved file");
            return Ok(());
        }
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {}
        Err(e) => return Err(FsError::io(source, e)),
    }

    copy_file(source, dest, &CopyOptions::default())?;
    fs::remove_file(source).map_err(|e| FsError::io(source, e))?;

    debug!(source = %source.display(), dest = %dest.display(), "moved file by copy");
    Ok(())
}
