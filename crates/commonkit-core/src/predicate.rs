//! First-class predicates and the filter chain that applies them.

use std::fmt;

/// A pure test over a borrowed item.
///
/// Predicates are collected into ordered slices and applied by
/// [`filter_chain`]; an item survives only if every predicate accepts it.
pub struct Predicate<'a, T: ?Sized + 'a> {
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    /// Wrap a closure as a predicate.
    pub fn new(test: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            test: Box::new(test),
        }
    }

    /// Run the predicate against an item.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }

    /// A predicate accepting exactly what this one rejects.
    pub fn negate(self) -> Self {
        Self::new(move |item| !self.test(item))
    }
}

impl<'a, T: ?Sized + 'a> fmt::Debug for Predicate<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Apply each predicate in order, narrowing the surviving items on every pass.
///
/// The result equals filtering by the conjunction of all predicates; the
/// relative order of surviving items is preserved. An empty chain returns
/// `items` unchanged.
pub fn filter_chain<T>(predicates: &[Predicate<'_, T>], items: Vec<T>) -> Vec<T> {
    predicates.iter().fold(items, |survivors, predicate| {
        survivors
            .into_iter()
            .filter(|item| predicate.test(item))
            .collect()
    })
}
