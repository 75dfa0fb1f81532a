//! Core types for commonkit.
//!
//! This crate provides the pieces that do not touch the file system: the
//! [`Either`] result type with its [`sequence`] combinator, the [`FsError`]
//! model shared by every file helper, first-class [`Predicate`] chains, and
//! a handful of list and map helpers.

mod collections;
mod either;
mod error;
mod predicate;

pub use collections::{get_or_default, list_diff, list_intersection, multiset_equal, ordered_equal};
pub use either::{sequence, Either, Monad};
pub use error::{ErrorKind, FsError};
pub use predicate::{filter_chain, Predicate};

/// The result type returned by every fallible file helper.
pub type FsResult<T> = Either<T, FsError>;
