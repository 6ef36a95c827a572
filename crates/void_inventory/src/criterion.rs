//! Sort criteria and the item comparator

use crate::error::{InventoryError, Result};
use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Criterion used to order the backpack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Alphabetical by name
    Name,
    /// Alphabetical by category
    Category,
    /// Highest priority first
    Priority,
}

impl SortCriterion {
    /// All criteria, in menu order
    pub const ALL: [SortCriterion; 3] = [Self::Name, Self::Category, Self::Priority];

    /// Resolve a menu selector (1 = name, 2 = category, 3 = priority)
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Self::Name),
            2 => Ok(Self::Category),
            3 => Ok(Self::Priority),
            _ => Err(InventoryError::invalid(format!("unknown sort criterion {}", code))),
        }
    }

    /// Menu selector for this criterion
    pub fn code(&self) -> i64 {
        match self {
            Self::Name => 1,
            Self::Category => 2,
            Self::Priority => 3,
        }
    }

    /// Compare two items under this criterion
    ///
    /// `Greater` means `a` belongs after `b`. Names and categories compare
    /// byte-wise and case-sensitively; priorities compare in descending order.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Name => a.name.as_bytes().cmp(b.name.as_bytes()),
            Self::Category => a.category.as_bytes().cmp(b.category.as_bytes()),
            Self::Priority => b.priority.cmp(&a.priority),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Category => write!(f, "category"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

impl std::str::FromStr for SortCriterion {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "category" | "type" => Ok(Self::Category),
            "priority" => Ok(Self::Priority),
            _ => Err(InventoryError::invalid(format!("unknown sort criterion '{}'", s))),
        }
    }
}

/// Compare two items under `criterion`
pub fn compare(a: &Item, b: &Item, criterion: SortCriterion) -> Ordering {
    criterion.compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Priority;

    fn item(name: &str, category: &str, priority: i64) -> Item {
        Item::new(name, category, 1, Priority::new(priority).unwrap()).unwrap()
    }

    #[test]
    fn test_from_code() {
        assert_eq!(SortCriterion::from_code(1).unwrap(), SortCriterion::Name);
        assert_eq!(SortCriterion::from_code(2).unwrap(), SortCriterion::Category);
        assert_eq!(SortCriterion::from_code(3).unwrap(), SortCriterion::Priority);
        assert!(matches!(
            SortCriterion::from_code(4),
            Err(InventoryError::InvalidInput(_))
        ));
        assert!(SortCriterion::from_code(0).is_err());

        for criterion in SortCriterion::ALL {
            assert_eq!(SortCriterion::from_code(criterion.code()).unwrap(), criterion);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<SortCriterion>().unwrap(), SortCriterion::Category);
        assert_eq!("Priority".parse::<SortCriterion>().unwrap(), SortCriterion::Priority);
        assert!("weight".parse::<SortCriterion>().is_err());
    }

    #[test]
    fn test_compare_by_name_is_case_sensitive() {
        let upper = item("Rope", "Tool", 1);
        let lower = item("ammo", "Weapon", 1);

        // 'R' (0x52) sorts before 'a' (0x61)
        assert_eq!(compare(&upper, &lower, SortCriterion::Name), Ordering::Less);
        assert_eq!(compare(&lower, &upper, SortCriterion::Name), Ordering::Greater);
        assert_eq!(compare(&upper, &upper, SortCriterion::Name), Ordering::Equal);
    }

    #[test]
    fn test_compare_by_category() {
        let heal = item("Medkit", "Heal", 5);
        let tool = item("Rope", "Tool", 3);

        assert_eq!(compare(&heal, &tool, SortCriterion::Category), Ordering::Less);
    }

    #[test]
    fn test_compare_by_priority_descending() {
        let high = item("Medkit", "Heal", 5);
        let low = item("Rope", "Tool", 3);

        assert_eq!(compare(&high, &low, SortCriterion::Priority), Ordering::Less);
        assert_eq!(compare(&low, &high, SortCriterion::Priority), Ordering::Greater);
        assert_eq!(
            compare(&low, &item("Ammo", "Weapon", 3), SortCriterion::Priority),
            Ordering::Equal
        );
    }
}
