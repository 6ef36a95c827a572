//! Name lookups: linear scan and binary search

use crate::error::{InventoryError, Result};
use crate::item::Item;
use std::cmp::Ordering;

/// Find the first item named `name`, scanning from the front
pub fn linear_search<'a>(items: &'a [Item], name: &str) -> Result<&'a Item> {
    if items.is_empty() {
        return Err(InventoryError::EmptyCollection);
    }
    items
        .iter()
        .find(|item| item.name == name)
        .ok_or_else(|| InventoryError::NotFound(name.to_string()))
}

/// Find an item named `name` by interval halving
///
/// `sorted_by_name` is the caller's claim that `items` are ordered by name;
/// it is trusted, not re-checked. With duplicate names the first match
/// probed wins, which is not necessarily the leftmost one.
pub fn binary_search_by_name<'a>(
    items: &'a [Item],
    name: &str,
    sorted_by_name: bool,
) -> Result<&'a Item> {
    if items.is_empty() {
        return Err(InventoryError::EmptyCollection);
    }
    if !sorted_by_name {
        return Err(InventoryError::PreconditionFailed);
    }

    let target = name.as_bytes();
    let mut low = 0;
    let mut high = items.len() - 1;
    let mut probes = 0;

    while low <= high {
        let mid = low + (high - low) / 2;
        probes += 1;
        match items[mid].name.as_bytes().cmp(target) {
            Ordering::Equal => {
                log::debug!("Binary search found '{}' at {} after {} probes", name, mid, probes);
                return Ok(&items[mid]);
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    log::debug!("Binary search missed '{}' after {} probes", name, probes);
    Err(InventoryError::NotFound(name.to_string()))
}
