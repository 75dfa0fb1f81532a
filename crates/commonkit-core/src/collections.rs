//! List and map convenience helpers.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use itertools::Itertools;

/// Look up `key`, falling back to `default` when it is absent.
///
/// Never mutates the map.
pub fn get_or_default<'a, K, V, Q, S>(
    map: &'a HashMap<K, V, S>,
    key: &Q,
    default: Option<&'a V>,
) -> Option<&'a V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    map.get(key).or(default)
}

/// True when both slices hold the same elements with the same multiplicities,
/// in any order. Runs in O(n).
pub fn multiset_equal<T: Hash + Eq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().counts() == b.iter().counts()
}

/// True when sorting both slices yields identical sequences. Runs in
/// O(n log n).
pub fn ordered_equal<T: Ord>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().sorted().eq(b.iter().sorted())
}

/// Elements of `a` that never occur in `b`.
///
/// Each such element is reported once, at its first position in `a`.
pub fn list_diff<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !excluded.contains(item))
        .unique()
        .cloned()
        .collect()
}

/// Elements of `a` that also occur in `b`, in `a`'s order.
///
/// An element is kept at most as many times as it occurs in `b`; further
/// occurrences in `a` are dropped.
pub fn list_intersection<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut remaining = b.iter().counts();
    a.iter()
        .filter(|item| match remaining.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_default() {
        let map = HashMap::from([
            ("apple".to_string(), "computer".to_string()),
            ("orange".to_string(), "fruit".to_string()),
            ("carrot".to_string(), "bait".to_string()),
        ]);
        let fallback = "no value".to_string();

        assert_eq!(get_or_default(&map, "apple", None).map(String::as_str), Some("computer"));
        assert_eq!(get_or_default(&map, "axe", Some(&fallback)), Some(&fallback));
        assert_eq!(
            get_or_default(&map, "orange", Some(&fallback)).map(String::as_str),
            Some("fruit")
        );
        assert_eq!(get_or_default(&map, "axe", None), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_multiset_equal() {
        let l1 = ["orange", "car"];
        let l2 = ["lemon", "apple"];
        assert!(multiset_equal(&l1, &l1));
        assert!(multiset_equal(&l1, &["car", "orange"]));
        assert!(!multiset_equal(&l1, &l2));
        assert!(!multiset_equal(&[1, 1, 2], &[1, 2, 2]));
        assert!(!multiset_equal(&[1, 2], &[1, 2, 2]));
    }

    #[test]
    fn test_ordered_equal() {
        let l1 = ["orange", "car"];
        let l2 = ["lemon", "apple"];
        assert!(ordered_equal(&l1, &l1));
        assert!(ordered_equal(&l1, &["car", "orange"]));
        assert!(!ordered_equal(&l1, &l2));
        assert!(!ordered_equal(&[3, 1, 1], &[1, 3, 3]));
    }

    #[test]
    fn test_list_diff() {
        assert_eq!(list_diff(&[1, 2, 3, 4], &[1, 2, 3]), vec![4]);
        assert_eq!(list_diff(&[1, 2, 3], &[1, 2, 3, 4]), Vec::<i32>::new());
        assert_eq!(list_diff(&[1, 2, 3, 4, 4], &[1, 2, 3]), vec![4]);
        assert_eq!(list_diff(&[1, 2, 3, 4, 4], &[1, 2, 3, 3, 3]), vec![4]);
        assert_eq!(list_diff(&[5, 1, 6, 5], &[1]), vec![5, 6]);
    }

    #[test]
    fn test_list_intersection() {
        assert_eq!(list_intersection(&[1, 2, 3], &[1, 5, 9, 2]), vec![1, 2]);
        assert_eq!(list_intersection(&[1, 2, 3, 3, 3, 2], &[1, 5, 9, 2]), vec![1, 2]);
        assert_eq!(list_intersection(&[2, 7, 2, 2], &[2, 2]), vec![2, 2]);
        assert_eq!(list_intersection::<i32>(&[], &[1]), Vec::<i32>::new());
    }
}
