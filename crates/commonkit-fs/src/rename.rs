//! Rename files inside a single directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use commonkit_core::{sequence, FsError, FsResult};

use crate::batch::OperationType;

/// One rename inside a target directory: `from` becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSpec {
    /// Current file name.
    pub from: String,
    /// New file name.
    pub to: String,
}

impl RenameSpec {
    /// Create a new rename spec.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for RenameSpec {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

/// Rename `dir/original_name` to `dir/new_name`.
///
/// Returns the new path. Fails with `NotFound` when the original file is
/// missing. An existing file at the new name is replaced, as the platform
/// rename does.
pub fn rename_one(original_name: &str, new_name: &str, dir: impl AsRef<Path>) -> FsResult<PathBuf> {
    rename_impl(original_name, new_name, dir.as_ref()).into()
}

fn rename_impl(original_name: &str, new_name: &str, dir: &Path) -> Result<PathBuf, FsError> {
    validate_filename(original_name)?;
    validate_filename(new_name)?;

    let source = dir.join(original_name);
    let target = dir.join(new_name);
    fs::rename(&source, &target).map_err(|e| FsError::io(&source, e))?;

    debug!(source = %source.display(), target = %target.display(), "renamed file");
    Ok(target)
}

/// Apply each rename in order, then fold the outcomes.
///
/// Every rename is attempted and takes effect immediately, even after an
/// earlier one failed; nothing is undone. The result is all new paths, or
/// the first failure in list order. Callers that need all-or-nothing
/// behavior must stage the renames themselves.
pub fn rename_many(specs: &[RenameSpec], dir: impl AsRef<Path>) -> FsResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let results: Vec<FsResult<PathBuf>> = specs
        .iter()
        .map(|spec| rename_one(&spec.from, &spec.to, dir))
        .collect();

    let failed = results.iter().filter(|r| r.is_failure()).count();
    if failed > 0 {
        warn!(
            operation = %OperationType::Rename,
            succeeded = results.len() - failed,
            failed,
            dir = %dir.display(),
            "some renames failed"
        );
    }

    sequence(results)
}

/// Validate a file name that must stay inside its directory.
pub fn validate_filename(name: &str) -> Result<(), FsError> {
    if name.is_empty() {
        return Err(FsError::invalid_name(name, "name cannot be empty"));
    }

    if name == "." || name == ".." {
        return Err(FsError::invalid_name(name, "'.' and '..' are reserved names"));
    }

    let separators: &[char] = if cfg!(windows) { &['/', '\\', '\0'] } else { &['/', '\0'] };
    if let Some(c) = name.chars().find(|c| separators.contains(c)) {
        return Err(FsError::invalid_name(
            name,
            format!("name cannot contain {c:?}"),
        ));
    }

    Ok(())
}
