//! Item records and field validation

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted item name, in characters
pub const MAX_NAME_LEN: usize = 49;

/// Longest accepted item category, in characters
pub const MAX_CATEGORY_LEN: usize = 29;

/// Item priority, from 1 (least important) to 5 (most important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Lowest priority
    pub const MIN: Priority = Priority(1);
    /// Highest priority
    pub const MAX: Priority = Priority(5);

    /// Create a priority, rejecting values outside 1..=5
    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InventoryError::invalid(format!(
                "priority must be between {} and {}, got {}",
                Self::MIN.0,
                Self::MAX.0,
                value
            )))
        }
    }

    /// Parse a priority typed by the user
    pub fn parse(input: &str) -> Result<Self> {
        let value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| InventoryError::invalid(format!("'{}' is not a number", input.trim())))?;
        Self::new(value)
    }

    /// Numeric value
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = InventoryError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parse a quantity typed by the user (non-negative integer)
pub fn parse_quantity(input: &str) -> Result<u32> {
    let input = input.trim();
    input.parse::<u32>().map_err(|_| {
        InventoryError::invalid(format!("quantity must be a non-negative integer, got '{}'", input))
    })
}

/// Strip the trailing newline/whitespace of a text field and check its bounds
fn clean_field(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim_end();
    if value.is_empty() {
        return Err(InventoryError::invalid(format!("{} must not be empty", field)));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(InventoryError::invalid(format!(
            "{} is {} characters long (max {})",
            field, len, max_len
        )));
    }
    Ok(value.to_string())
}

/// Validate an item name typed by the user
pub fn clean_name(value: &str) -> Result<String> {
    clean_field("name", value, MAX_NAME_LEN)
}

/// Validate an item category typed by the user
pub fn clean_category(value: &str) -> Result<String> {
    clean_field("category", value, MAX_CATEGORY_LEN)
}

/// Unvalidated item fields, as they appear in config files
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub priority: Priority,
}

/// An item carried in the backpack
///
/// The name is the item's key: searches and removals match it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    /// Item name
    pub name: String,
    /// Item category (weapon, tool, heal...)
    pub category: String,
    /// How many units are carried
    pub quantity: u32,
    /// Importance of the item
    pub priority: Priority,
}

impl Item {
    /// Create an item, validating the text fields
    pub fn new(
        name: impl AsRef<str>,
        category: impl AsRef<str>,
        quantity: u32,
        priority: Priority,
    ) -> Result<Self> {
        Ok(Self {
            name: clean_name(name.as_ref())?,
            category: clean_category(category.as_ref())?,
            quantity,
            priority,
        })
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = InventoryError;

    fn try_from(record: ItemRecord) -> Result<Self> {
        Self::new(record.name, record.category, record.quantity, record.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_range() {
        assert_eq!(Priority::new(1).unwrap(), Priority::MIN);
        assert_eq!(Priority::new(5).unwrap(), Priority::MAX);
        assert!(matches!(Priority::new(0), Err(InventoryError::InvalidInput(_))));
        assert!(matches!(Priority::new(6), Err(InventoryError::InvalidInput(_))));
        assert!(Priority::new(-3).is_err());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse(" 4\n").unwrap().get(), 4);
        assert!(Priority::parse("four").is_err());
        assert!(Priority::parse("").is_err());
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(parse_quantity("40\n").unwrap(), 40);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("ten").is_err());
    }

    #[test]
    fn test_item_strips_trailing_newline() {
        let item = Item::new("Medkit\n", "Heal\r\n", 2, Priority::MAX).unwrap();

        assert_eq!(item.name, "Medkit");
        assert_eq!(item.category, "Heal");
    }

    #[test]
    fn test_item_rejects_blank_fields() {
        assert!(Item::new("  \n", "Tool", 1, Priority::MIN).is_err());
        assert!(Item::new("Rope", "", 1, Priority::MIN).is_err());
    }

    #[test]
    fn test_item_length_bounds() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(Item::new(&name, "Tool", 1, Priority::MIN).is_ok());

        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(Item::new(&name, "Tool", 1, Priority::MIN).is_err());

        let category = "y".repeat(MAX_CATEGORY_LEN + 1);
        assert!(Item::new("Rope", &category, 1, Priority::MIN).is_err());
    }
}
