//! File-system helpers for commonkit.
//!
//! This crate provides flat directory listing with predicate filters,
//! folder creation and batch operations (copy, move, remove, rename) over
//! the files of a single directory. Every operation reports its outcome as
//! an [`FsResult`]; batch operations stop at the first failure without
//! undoing the work already done.
//!
//! ```rust,ignore
//! use commonkit_fs::{copy_all, list_files, CopyOptions, ListOptions};
//!
//! let visible = list_files("photos", &ListOptions::new(), &[]);
//! match copy_all("photos", "backup", &CopyOptions::default()) {
//!     commonkit_core::Either::Success(n) => println!("copied {n} files"),
//!     commonkit_core::Either::Failure(e) => eprintln!("copy stopped: {e}"),
//! }
//! ```

mod batch;
mod config;
mod copy;
mod folder;
mod listing;
mod move_op;
mod remove;
mod rename;

use std::fs;
use std::path::Path;

pub use batch::OperationType;
pub use config::{
    CopyOptions, CopyOptionsBuilder, ListOptions, ListOptionsBuilder, ListOrder, MoveOptions,
    MoveOptionsBuilder,
};
pub use copy::copy_all;
pub use folder::create_folder;
pub use listing::{list_files, FileEntry};
pub use move_op::move_all;
pub use remove::{remove_all, remove_by_prefix};
pub use rename::{rename_many, rename_one, validate_filename, RenameSpec};

// Re-export core types
pub use commonkit_core::{Either, ErrorKind, FsError, FsResult, Predicate};

/// Leading marker of hidden file names.
pub const HIDDEN_PREFIX: &str = ".";

/// Fail unless `path` is an existing directory.
pub(crate) fn require_dir(path: &Path) -> Result<(), FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::io(path, e))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(FsError::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}
