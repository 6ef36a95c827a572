//! Void Inventory - Backpack Item System
//!
//! This crate provides a small fixed-capacity backpack of named items.
//!
//! # Features
//!
//! - Item records with category, quantity and a 1-5 priority
//! - Bounded store with insert-at-end and remove-by-name compaction
//! - Insertion sort by name, category or priority with comparison counting
//! - Linear search and binary search by name
//! - Sort-state tracking that gates binary search
//!
//! # Example
//!
//! ```ignore
//! use void_inventory::prelude::*;
//!
//! let mut backpack = Backpack::new(10);
//! backpack.add(Item::new("Rope", "Tool", 1, Priority::new(3)?)?)?;
//! backpack.add(Item::new("Ammo", "Weapon", 40, Priority::new(4)?)?)?;
//!
//! let report = backpack.sort(SortCriterion::Name);
//! println!("{} comparisons", report.comparisons);
//! let rope = backpack.binary_find("Rope")?;
//! ```

pub mod backpack;
pub mod criterion;
pub mod error;
pub mod inventory;
pub mod item;
pub mod search;
pub mod sort;

pub mod prelude {
    pub use crate::backpack::{Backpack, SortState};
    pub use crate::criterion::{compare, SortCriterion};
    pub use crate::error::{InventoryError, Result};
    pub use crate::inventory::{Inventory, DEFAULT_CAPACITY};
    pub use crate::item::{
        clean_category, clean_name, parse_quantity, Item, Priority, MAX_CATEGORY_LEN,
        MAX_NAME_LEN,
    };
    pub use crate::search::{binary_search_by_name, linear_search};
    pub use crate::sort::{insertion_sort, is_sorted_by, SortReport};
}

pub use prelude::*;
