//! Folder creation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use commonkit_core::{FsError, FsResult};

use crate::batch::OperationType;

/// Create `path` along with any missing parent directories.
///
/// With `exist_ok` an existing directory is accepted as-is. Without it, an
/// existing path fails with `AlreadyExists`. Returns the path as given.
pub fn create_folder(path: impl AsRef<Path>, exist_ok: bool) -> FsResult<PathBuf> {
    create_folder_impl(path.as_ref(), exist_ok).into()
}

fn create_folder_impl(path: &Path, exist_ok: bool) -> Result<PathBuf, FsError> {
    if exist_ok {
        fs::create_dir_all(path).map_err(|e| FsError::io(path, e))?;
    } else {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
        }
        // create_dir fails on an existing path.
        fs::create_dir(path).map_err(|e| FsError::io(path, e))?;
    }

    debug!(
        operation = %OperationType::CreateFolder,
        path = %path.display(),
        exist_ok,
        "created folder"
    );
    Ok(path.to_path_buf())
}
