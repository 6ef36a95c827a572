//! Insertion sort with comparison accounting

use crate::criterion::SortCriterion;
use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    /// Criterion the items were sorted by
    pub criterion: SortCriterion,
    /// Comparator evaluations performed
    pub comparisons: usize,
}

/// Sort `items` in place by `criterion`, returning the comparisons made
///
/// Each pass lifts `items[i]` out and shifts larger neighbours right until
/// the comparator stops reporting `Greater`. Every comparator call is
/// counted: the shifting calls inside the loop, plus the final non-shifting
/// call when the scan stops before reaching the front. Equal keys never
/// shift, so the sort is stable.
pub fn insertion_sort(items: &mut [Item], criterion: SortCriterion) -> usize {
    let mut comparisons = 0;

    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            if criterion.compare(&items[j - 1], &items[j]) != Ordering::Greater {
                // Failed comparison that ends the scan
                comparisons += 1;
                break;
            }
            comparisons += 1;
            items.swap(j - 1, j);
            j -= 1;
        }
    }

    log::debug!("Sorted {} items by {} ({} comparisons)", items.len(), criterion, comparisons);
    comparisons
}

/// Check that adjacent items are in non-decreasing order under `criterion`
pub fn is_sorted_by(items: &[Item], criterion: SortCriterion) -> bool {
    items
        .windows(2)
        .all(|pair| criterion.compare(&pair[0], &pair[1]) != Ordering::Greater)
}
