//! Backpack session: item store plus sort-state tracking

use crate::criterion::SortCriterion;
use crate::error::{InventoryError, Result};
use crate::inventory::{Inventory, DEFAULT_CAPACITY};
use crate::item::Item;
use crate::sort::SortReport;
use serde::{Deserialize, Serialize};

/// Whether the backpack is known to be ordered by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortState {
    /// Order unknown; binary search unavailable
    Unsorted,
    /// Last operation was a sort by name
    SortedByName,
}

impl Default for SortState {
    fn default() -> Self {
        Self::Unsorted
    }
}

impl SortState {
    /// State after a sort by `criterion`
    pub fn after_sort(criterion: SortCriterion) -> Self {
        match criterion {
            SortCriterion::Name => Self::SortedByName,
            SortCriterion::Category | SortCriterion::Priority => Self::Unsorted,
        }
    }

    /// State after an insert or removal
    pub fn after_mutation(self) -> Self {
        Self::Unsorted
    }

    /// Check if binary search may run
    pub fn is_sorted_by_name(&self) -> bool {
        matches!(self, Self::SortedByName)
    }
}

/// Backpack owning an [`Inventory`] and its [`SortState`]
///
/// Every mutation goes through here so the sort-state can never claim an
/// order the items no longer have.
#[derive(Debug, Clone, Default)]
pub struct Backpack {
    inventory: Inventory,
    sort_state: SortState,
}

impl Backpack {
    /// Create an empty backpack
    pub fn new(capacity: usize) -> Self {
        Self {
            inventory: Inventory::new(capacity),
            sort_state: SortState::Unsorted,
        }
    }

    /// Create a backpack pre-loaded with `items`, in order
    pub fn with_items(capacity: usize, items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut backpack = Self::new(capacity);
        for item in items {
            backpack.add(item)?;
        }
        Ok(backpack)
    }

    /// Get the underlying inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Current sort-state
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Check if binary search is available
    pub fn is_sorted_by_name(&self) -> bool {
        self.sort_state.is_sorted_by_name()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    /// Get backpack capacity
    pub fn capacity(&self) -> usize {
        self.inventory.capacity()
    }

    /// Check if backpack is empty
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Check if backpack is full
    pub fn is_full(&self) -> bool {
        self.inventory.is_full()
    }

    /// Add an item at the end
    pub fn add(&mut self, item: Item) -> Result<()> {
        let name = item.name.clone();
        match self.inventory.insert(item) {
            Ok(()) => {
                self.sort_state = self.sort_state.after_mutation();
                log::debug!("Added '{}' ({}/{})", name, self.len(), self.capacity());
                Ok(())
            }
            Err(e) => {
                log::debug!("Rejected '{}': {}", name, e);
                Err(e)
            }
        }
    }

    /// Remove the first item named `name`
    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let removed = self.inventory.remove_by_name(name)?;
        self.sort_state = self.sort_state.after_mutation();
        log::debug!("Removed '{}' ({}/{})", name, self.len(), self.capacity());
        Ok(removed)
    }

    /// Ordered view of the items, or `EmptyCollection`
    pub fn list(&self) -> Result<&[Item]> {
        self.inventory.list()
    }

    /// Linear search by name
    pub fn find(&self, name: &str) -> Result<&Item> {
        self.inventory.find_by_name(name)
    }

    /// Binary search by name, gated on the sort-state
    pub fn binary_find(&self, name: &str) -> Result<&Item> {
        self.inventory
            .binary_search_by_name(name, self.sort_state.is_sorted_by_name())
    }

    /// Sort by `criterion` and update the sort-state
    pub fn sort(&mut self, criterion: SortCriterion) -> SortReport {
        let comparisons = self.inventory.sort(criterion);
        self.sort_state = SortState::after_sort(criterion);
        SortReport {
            criterion,
            comparisons,
        }
    }

    /// Sort by a menu selector code (1 = name, 2 = category, 3 = priority)
    pub fn sort_by_code(&mut self, code: i64) -> Result<SortReport> {
        let criterion = SortCriterion::from_code(code)?;
        Ok(self.sort(criterion))
    }

    /// Backpack with the default capacity of ten items
    pub fn standard() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Fail with `CollectionFull` when no slot is free
    pub fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            Err(InventoryError::CollectionFull {
                capacity: self.capacity(),
            })
        } else {
            Ok(())
        }
    }
}
