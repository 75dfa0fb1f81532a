//! Batch file removal.

use std::fs;
use std::path::Path;

use globset::{Glob, GlobBuilder};
use tracing::debug;

use commonkit_core::{FsError, FsResult, Predicate};

use crate::batch::{run_batch, OperationType};
use crate::config::ListOptions;
use crate::listing::{entry_paths, list_files_impl, FileEntry};
use crate::HIDDEN_PREFIX;

/// Remove every file in `dir`, hidden ones included.
///
/// Subdirectories are left alone. Files removed before a failure stay
/// removed.
pub fn remove_all(dir: impl AsRef<Path>) -> FsResult<usize> {
    let dir = dir.as_ref();
    list_files_impl(dir, &ListOptions::with_hidden(), &[])
        .and_then(|entries| {
            run_batch(OperationType::Remove, entry_paths(dir, &entries), |path| {
                remove_file(path)
            })
        })
        .into()
}

/// Remove the files in `dir` whose names start with any of `prefixes`.
///
/// Prefixes are processed in order and each one is matched as the glob
/// `<prefix>*`, so glob metacharacters inside a prefix keep their meaning.
/// As with shell globs, hidden files only match a prefix that itself starts
/// with a dot. The directory is re-listed for every prefix, so a file
/// matched and removed by an earlier prefix is not seen again. Returns the
/// total number of files removed.
pub fn remove_by_prefix<S: AsRef<str>>(prefixes: &[S], dir: impl AsRef<Path>) -> FsResult<usize> {
    remove_by_prefix_impl(prefixes, dir.as_ref()).into()
}

fn remove_by_prefix_impl<S: AsRef<str>>(prefixes: &[S], dir: &Path) -> Result<usize, FsError> {
    let mut removed = 0;

    for prefix in prefixes {
        let prefix = prefix.as_ref();
        let matcher = prefix_glob(prefix)?.compile_matcher();
        let options = ListOptions {
            include_hidden: prefix.starts_with(HIDDEN_PREFIX),
            ..ListOptions::new()
        };
        let matches = [Predicate::new(|entry: &FileEntry| matcher.is_match(entry.name()))];

        let entries = list_files_impl(dir, &options, &matches)?;
        debug!(prefix, matched = entries.len(), "matched prefix");

        removed += run_batch(OperationType::Remove, entry_paths(dir, &entries), |path| {
            remove_file(path)
        })?;
    }

    Ok(removed)
}

/// Build the `<prefix>*` glob for a single directory level.
fn prefix_glob(prefix: &str) -> Result<Glob, FsError> {
    let pattern = format!("{prefix}*");
    GlobBuilder::new(&pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| FsError::InvalidPattern {
            pattern,
            message: e.kind().to_string(),
        })
}

fn remove_file(path: &Path) -> Result<(), FsError> {
    fs::remove_file(path).map_err(|e| FsError::io(path, e))?;
    debug!(path = %path.display(), "removed file");
    Ok(())
}
