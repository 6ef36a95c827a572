//! Bounded item store

use crate::criterion::SortCriterion;
use crate::error::{InventoryError, Result};
use crate::item::Item;
use crate::search;
use crate::sort;

/// Default number of slots in a backpack
pub const DEFAULT_CAPACITY: usize = 10;

/// Ordered, fixed-capacity item store
///
/// Items keep insertion order until [`Inventory::sort`] reorders them.
/// Removal closes the gap by shifting later items one slot to the left.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Stored items, in current order
    items: Vec<Item>,
    /// Maximum number of items
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory with given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Get inventory capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if inventory is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if inventory is full
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Number of free slots
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Append an item at the end
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(InventoryError::CollectionFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the first item whose name equals `name`
    ///
    /// Later items shift one slot earlier, keeping their relative order.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Item> {
        let index = self
            .position_of(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Ordered view of the items, or `EmptyCollection`
    pub fn list(&self) -> Result<&[Item]> {
        if self.items.is_empty() {
            Err(InventoryError::EmptyCollection)
        } else {
            Ok(&self.items)
        }
    }

    /// Ordered view of the items (possibly empty)
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get item at position
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of the first item named `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Linear search by name
    pub fn find_by_name(&self, name: &str) -> Result<&Item> {
        search::linear_search(&self.items, name)
    }

    /// Binary search by name; `sorted_by_name` is the caller's sort-state claim
    pub fn binary_search_by_name(&self, name: &str, sorted_by_name: bool) -> Result<&Item> {
        search::binary_search_by_name(&self.items, name, sorted_by_name)
    }

    /// Insertion-sort the items, returning the number of comparisons made
    pub fn sort(&mut self, criterion: SortCriterion) -> usize {
        sort::insertion_sort(&mut self.items, criterion)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
