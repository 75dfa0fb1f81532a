//! Options for listing and batch operations.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Ordering of entries returned by a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Lexicographic by file name (byte-wise on the platform encoding).
    #[default]
    Sorted,
    /// Whatever order the operating system enumerates the directory in.
    Enumeration,
}

/// Configuration for directory listings.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ListOptions {
    /// Include hidden files (starting with `.`).
    #[builder(default = "false")]
    #[serde(default)]
    pub include_hidden: bool,

    /// Order of the returned entries.
    #[builder(default)]
    #[serde(default)]
    pub order: ListOrder,
}

impl ListOptions {
    /// Create a new list options builder.
    pub fn builder() -> ListOptionsBuilder {
        ListOptionsBuilder::default()
    }

    /// Visible files only, sorted by name.
    pub fn new() -> Self {
        Self {
            include_hidden: false,
            order: ListOrder::Sorted,
        }
    }

    /// All files including hidden ones, sorted by name.
    pub fn with_hidden() -> Self {
        Self {
            include_hidden: true,
            ..Self::new()
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`move_all`](crate::move_all).
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct MoveOptions {
    /// Replace files that already exist at the destination. When false, a
    /// collision aborts the batch with `AlreadyExists`.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub overwrite: bool,
}

impl MoveOptions {
    /// Create a new move options builder.
    pub fn builder() -> MoveOptionsBuilder {
        MoveOptionsBuilder::default()
    }

    /// Fail instead of replacing existing destination files.
    pub fn no_overwrite() -> Self {
        Self { overwrite: false }
    }
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

/// Configuration for [`copy_all`](crate::copy_all).
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct CopyOptions {
    /// Carry access and modification times over to the copy.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub preserve_timestamps: bool,
}

impl CopyOptions {
    /// Create a new copy options builder.
    pub fn builder() -> CopyOptionsBuilder {
        CopyOptionsBuilder::default()
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_timestamps: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_builder() {
        let options = ListOptions::builder()
            .include_hidden(true)
            .order(ListOrder::Enumeration)
            .build()
            .unwrap();

        assert!(options.include_hidden);
        assert_eq!(options.order, ListOrder::Enumeration);
    }

    #[test]
    fn test_list_options_defaults() {
        let options = ListOptions::builder().build().unwrap();
        assert_eq!(options, ListOptions::default());
        assert!(!options.include_hidden);
        assert_eq!(options.order, ListOrder::Sorted);
        assert!(ListOptions::with_hidden().include_hidden);
    }

    #[test]
    fn test_move_and_copy_defaults() {
        assert!(MoveOptions::default().overwrite);
        assert!(MoveOptions::builder().build().unwrap().overwrite);
        assert!(!MoveOptions::no_overwrite().overwrite);
        assert!(CopyOptions::default().preserve_timestamps);
        assert!(!CopyOptions::builder()
            .preserve_timestamps(false)
            .build()
            .unwrap()
            .preserve_timestamps);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: MoveOptions = serde_json::from_str("{}").unwrap();
        assert!(options.overwrite);

        let options: ListOptions = serde_json::from_str(r#"{"order":"enumeration"}"#).unwrap();
        assert!(!options.include_hidden);
        assert_eq!(options.order, ListOrder::Enumeration);

        let options: CopyOptions = serde_json::from_str("{}").unwrap();
        assert!(options.preserve_timestamps);
    }
}
