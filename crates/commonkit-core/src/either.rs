//! The `Either` result type and its sequencing combinators.
//!
//! Every fallible helper in commonkit reports its outcome as an [`Either`]
//! instead of panicking. Batch operations produce many of them and fold the
//! lot into one with [`sequence`]: all successes become a single `Success`
//! holding every value in input order, otherwise the first `Failure` wins.
//!
//! ```
//! use commonkit_core::{sequence, Either};
//!
//! let all: Either<Vec<u32>, String> = sequence(vec![Either::Success(1), Either::Success(2)]);
//! assert_eq!(all.success(), Some(vec![1, 2]));
//!
//! let first: Either<Vec<u32>, &str> = sequence(vec![
//!     Either::Success(1),
//!     Either::Failure("a"),
//!     Either::Failure("b"),
//! ]);
//! assert_eq!(first.failure(), Some("a"));
//! ```

use serde::{Deserialize, Serialize};

/// A value that is exactly one of `Success(T)` or `Failure(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Either` may be a `Failure`, which should be handled"]
pub enum Either<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Either<T, E> {
    /// Wrap a value as a success.
    pub fn pure(value: T) -> Self {
        Self::Success(value)
    }

    /// Chain a fallible step. A `Failure` is passed through untouched and `f`
    /// is never called.
    pub fn flat_map<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Either::Failure(error),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Either::pure(f(value)))
    }

    /// Transform the failure value.
    pub fn map_failure<E2, F>(self, f: F) -> Either<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(error) => Either::Failure(f(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, discarding any failure.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure value, discarding any success.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Either<&T, &E> {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(error) => Either::Failure(error),
        }
    }

    /// The success value, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Convert into a standard `Result` so `?` can be used.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Either<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Either<T, E>> for Result<T, E> {
    fn from(either: Either<T, E>) -> Self {
        match either {
            Either::Success(value) => Ok(value),
            Either::Failure(error) => Err(error),
        }
    }
}

/// Collecting stops at the first `Failure`; later items are not inspected.
impl<T, E, V> FromIterator<Either<T, E>> for Either<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Either<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

/// Fold an ordered sequence of results into one.
///
/// Returns `Success` with every value in input order when all items succeed,
/// otherwise the first `Failure` in scan order.
pub fn sequence<T, E, I>(results: I) -> Either<Vec<T>, E>
where
    I: IntoIterator<Item = Either<T, E>>,
{
    results.into_iter().collect()
}

/// A minimal monad interface: `pure` plus `flat_map`, with `map` derived.
pub trait Monad: Sized {
    /// The wrapped value type.
    type Item;
    /// The same container holding a different value type.
    type Bound<U>: Monad<Item = U>;

    fn pure(value: Self::Item) -> Self;

    fn flat_map<U, F>(self, f: F) -> Self::Bound<U>
    where
        F: FnOnce(Self::Item) -> Self::Bound<U>;

    fn map<U, F>(self, f: F) -> Self::Bound<U>
    where
        F: FnOnce(Self::Item) -> U,
    {
        self.flat_map(|value| <Self::Bound<U> as Monad>::pure(f(value)))
    }
}

impl<T, E> Monad for Either<T, E> {
    type Item = T;
    type Bound<U> = Either<U, E>;

    fn pure(value: Self::Item) -> Self {
        Either::Success(value)
    }

    fn flat_map<U, F>(self, f: F) -> Self::Bound<U>
    where
        F: FnOnce(Self::Item) -> Self::Bound<U>,
    {
        Either::flat_map(self, f)
    }
}

impl<T> Monad for Option<T> {
    type Item = T;
    type Bound<U> = Option<U>;

    fn pure(value: Self::Item) -> Self {
        Some(value)
    }

    fn flat_map<U, F>(self, f: F) -> Self::Bound<U>
    where
        F: FnOnce(Self::Item) -> Self::Bound<U>,
    {
        self.and_then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve(n: u32) -> Either<u32, String> {
        if n % 2 == 0 {
            Either::Success(n / 2)
        } else {
            Either::Failure(format!("{n} is odd"))
        }
    }

    #[test]
    fn test_flat_map_chains_without_nesting() {
        let result = Either::pure(8).flat_map(halve).flat_map(halve);
        assert_eq!(result, Either::Success(2));
    }

    #[test]
    fn test_flat_map_short_circuits_on_failure() {
        let mut called = false;
        let result = halve(3).flat_map(|n| {
            called = true;
            halve(n)
        });
        assert_eq!(result, Either::Failure("3 is odd".to_string()));
        assert!(!called);
    }

    #[test]
    fn test_map_is_flat_map_of_pure() {
        let a = halve(10).map(|n| n + 1);
        let b = halve(10).flat_map(|n| Either::pure(n + 1));
        assert_eq!(a, b);
        assert_eq!(a, Either::Success(6));
    }

    #[test]
    fn test_accessors() {
        let ok: Either<u32, String> = Either::Success(1);
        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert_eq!(ok.as_ref().success(), Some(&1));
        assert_eq!(ok.clone().failure(), None);

        let err: Either<u32, String> = Either::Failure("boom".into());
        assert!(err.is_failure());
        assert_eq!(err.clone().unwrap_or(7), 7);
        assert_eq!(err.map_failure(|e| e.len()), Either::Failure(4));
    }

    #[test]
    fn test_result_round_trip() {
        let either: Either<u8, &str> = Ok::<u8, &str>(3).into();
        assert_eq!(either, Either::Success(3));
        assert_eq!(Either::<u8, &str>::Failure("x").into_result(), Err("x"));
    }

    #[test]
    fn test_sequence_empty_is_success() {
        let result: Either<Vec<u32>, String> = sequence(Vec::new());
        assert_eq!(result, Either::Success(vec![]));
    }

    #[test]
    fn test_sequence_stops_at_first_failure() {
        let mut inspected = 0;
        let items = [Either::Success(1), Either::Failure("first"), Either::Failure("second")];
        let result = sequence(items.into_iter().inspect(|_| inspected += 1));
        assert_eq!(result, Either::Failure("first"));
        assert_eq!(inspected, 2);
    }

    #[test]
    fn test_monad_trait_for_option() {
        let doubled = Monad::map(Some(4), |n| n * 2);
        assert_eq!(doubled, Some(8));
        let none: Option<u32> = Monad::flat_map(None::<u32>, |n| Some(n + 1));
        assert_eq!(none, None);
        assert_eq!(<Option<u8> as Monad>::pure(1), Some(1));
    }

    #[test]
    fn test_monad_trait_for_either() {
        let result = Monad::map(halve(4), |n| n.to_string());
        assert_eq!(result, Either::Success("2".to_string()));
    }
}
