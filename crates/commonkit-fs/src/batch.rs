//! Shared driver for batch operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use commonkit_core::FsError;

/// The type of operation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Copy,
    Move,
    Remove,
    Rename,
    CreateFolder,
}

impl OperationType {
    /// Past-tense verb used in summaries.
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Copy => "Copied",
            Self::Move => "Moved",
            Self::Remove => "Removed",
            Self::Rename => "Renamed",
            Self::CreateFolder => "Created",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
            Self::Remove => write!(f, "Remove"),
            Self::Rename => write!(f, "Rename"),
            Self::CreateFolder => write!(f, "Create folder"),
        }
    }
}

/// Apply `step` to each path in order, stopping at the first error.
///
/// Returns the number of completed steps. Nothing is rolled back on error:
/// steps that already ran stay applied. The number completed before the
/// failure is only reported through the log.
pub(crate) fn run_batch<F>(
    operation: OperationType,
    paths: Vec<PathBuf>,
    mut step: F,
) -> Result<usize, FsError>
where
    F: FnMut(&PathBuf) -> Result<(), FsError>,
{
    let total = paths.len();
    let mut completed = 0;

    for path in &paths {
        if let Err(error) = step(path) {
            warn!(
                %operation,
                completed,
                total,
                path = %path.display(),
                %error,
                "batch aborted"
            );
            return Err(error);
        }
        completed += 1;
    }

    info!(%operation, completed, "{} {} items", operation.past_tense(), completed);
    Ok(completed)
}
