//! Flat directory listing with predicate filters.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use commonkit_core::{filter_chain, FsError, FsResult, Predicate};

use crate::config::{ListOptions, ListOrder};
use crate::{require_dir, HIDDEN_PREFIX};

/// A file name inside some directory.
///
/// Entries do not remember their directory; join them back with
/// [`FileEntry::path_in`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileEntry {
    name: OsString,
}

impl FileEntry {
    /// Create an entry from a bare file name.
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The name as UTF-8, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        self.name.to_str()
    }

    /// The name with invalid UTF-8 replaced.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Check whether the name begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.name.as_encoded_bytes().starts_with(prefix.as_bytes())
    }

    /// Check whether the name ends with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.name.as_encoded_bytes().ends_with(suffix.as_bytes())
    }

    /// Hidden files start with a dot.
    pub fn is_hidden(&self) -> bool {
        self.starts_with(HIDDEN_PREFIX)
    }

    /// Join this entry onto a directory.
    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.name)
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name_lossy())
    }
}

/// List the regular files directly inside `dir`.
///
/// Directories and special files are dropped first (symlinks count as what
/// they point to), then hidden files unless `options.include_hidden` is set,
/// then every caller predicate in the order given. No recursion.
pub fn list_files(
    dir: impl AsRef<Path>,
    options: &ListOptions,
    predicates: &[Predicate<'_, FileEntry>],
) -> FsResult<Vec<FileEntry>> {
    list_files_impl(dir.as_ref(), options, predicates).into()
}

pub(crate) fn list_files_impl(
    dir: &Path,
    options: &ListOptions,
    predicates: &[Predicate<'_, FileEntry>],
) -> Result<Vec<FileEntry>, FsError> {
    require_dir(dir)?;

    let entries = fs::read_dir(dir)
        .map_err(|e| FsError::io(dir, e))?
        .map(|entry| {
            entry
                .map(|e| FileEntry::new(e.file_name()))
                .map_err(|e| FsError::io(dir, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let scanned = entries.len();

    let mut builtin: Vec<Predicate<'_, FileEntry>> =
        vec![Predicate::new(|entry: &FileEntry| entry.path_in(dir).is_file())];
    if !options.include_hidden {
        builtin.push(Predicate::new(|entry: &FileEntry| !entry.is_hidden()));
    }

    let mut files = filter_chain(predicates, filter_chain(&builtin, entries));
    if options.order == ListOrder::Sorted {
        files.sort();
    }

    debug!(
        dir = %dir.display(),
        scanned,
        kept = files.len(),
        "listed directory"
    );
    Ok(files)
}

/// Paths of every entry, joined onto `dir`.
pub(crate) fn entry_paths(dir: &Path, entries: &[FileEntry]) -> Vec<PathBuf> {
    entries.iter().map(|entry| entry.path_in(dir)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_hidden() {
        assert!(FileEntry::new(".hidden.txt").is_hidden());
        assert!(!FileEntry::new("tiger.txt").is_hidden());
        assert!(!FileEntry::new("a.b").is_hidden());
    }

    #[test]
    fn test_entry_prefix_suffix() {
        let entry = FileEntry::new("tiger.txt");
        assert!(entry.starts_with("ti"));
        assert!(entry.starts_with(""));
        assert!(!entry.starts_with("tile"));
        assert!(entry.ends_with(".txt"));
        assert_eq!(entry.to_str(), Some("tiger.txt"));
        assert_eq!(entry.to_string(), "tiger.txt");
    }

    #[test]
    fn test_entry_path_in() {
        let entry = FileEntry::new("robot.txt");
        assert_eq!(entry.path_in("/tmp/base"), PathBuf::from("/tmp/base/robot.txt"));
    }

    #[test]
    fn test_entries_sort_by_name() {
        let mut entries = vec![FileEntry::new("tile.txt"), FileEntry::new("robot.txt")];
        entries.sort();
        assert_eq!(entries[0].name(), "robot.txt");
    }
}
