//! Power-set enumeration.
//!
//! Subsets are produced in binary-counting order over the input slice: the
//! subset at position `k` contains `items[i]` exactly when bit `i` of `k` is
//! set. The first subset is therefore always empty and the last is the whole
//! input. Enumeration is exhaustive and never prunes; the number of subsets
//! doubles with every element.

use std::collections::BTreeSet;

/// Largest input the enumerator accepts (exclusive).
pub const MAX_SUBSET_ITEMS: usize = 64;

/// Number of subsets of a set with `n` elements, if it fits in a `u64`.
pub fn subset_count(n: usize) -> Option<u64> {
    u32::try_from(n).ok().and_then(|n| 1u64.checked_shl(n))
}

/// Iterator over every subset of a slice.
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    next: u64,
    end: u64,
}

impl<'a, T: Clone + Ord> Subsets<'a, T> {
    /// Enumerate the subsets of `items`.
    ///
    /// Duplicate elements in `items` collapse inside each yielded set, so
    /// callers pass distinct elements.
    ///
    /// # Panics
    ///
    /// Panics if `items` has [`MAX_SUBSET_ITEMS`] or more elements.
    pub fn new(items: &'a [T]) -> Self {
        let end = match subset_count(items.len()) {
            Some(end) => end,
            None => panic!(
                "cannot enumerate subsets of {} items (limit {})",
                items.len(),
                MAX_SUBSET_ITEMS - 1
            ),
        };
        Self {
            items,
            next: 0,
            end,
        }
    }

    fn subset_for_mask(&self, mask: u64) -> BTreeSet<T> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << i) != 0)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

impl<T: Clone + Ord> Iterator for Subsets<'_, T> {
    type Item = BTreeSet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let subset = self.subset_for_mask(self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.next) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Lazily enumerate every subset of `items`.
pub fn subsets<T: Clone + Ord>(items: &[T]) -> Subsets<'_, T> {
    Subsets::new(items)
}

/// Collect every subset of `items`, from the empty set to the full set.
pub fn power_set<T: Clone + Ord>(items: &[T]) -> Vec<BTreeSet<T>> {
    Subsets::new(items).collect()
}

/// Elements of `universe` that are not in `excluded`, in `universe` order.
pub fn complement<T: Clone + Ord>(universe: &[T], excluded: &BTreeSet<T>) -> Vec<T> {
    universe
        .iter()
        .filter(|item| !excluded.contains(*item))
        .cloned()
        .collect()
}
