//! Text rendering for the menu

use void_inventory::{Backpack, Item, SortReport};

const RULE: &str = "------------------------------------------------------------------------";

/// Welcome banner
pub fn banner() -> String {
    [
        "╔════════════════════════════════════════════════════════════╗",
        "║           VOID BACKPACK - SURVIVAL INVENTORY               ║",
        "╚════════════════════════════════════════════════════════════╝",
    ]
    .join("\n")
}

/// Main menu, including the binary search availability line
pub fn main_menu(backpack: &Backpack) -> String {
    let status = if backpack.is_sorted_by_name() {
        "Status: sorted by name (binary search available)"
    } else {
        "Status: not sorted by name"
    };
    format!(
        "\n========== MAIN MENU ==========\n\
         1 - Add item\n\
         2 - Remove item\n\
         3 - List items\n\
         4 - Search item (linear)\n\
         5 - Sort backpack\n\
         6 - Search item (binary, by name)\n\
         0 - Exit\n\
         ===============================\n\
         {}\n\
         ===============================",
        status
    )
}

/// Sort criterion sub-menu
pub fn sort_menu() -> &'static str {
    "\n--- SORT BACKPACK ---\n1 - By name\n2 - By category\n3 - By priority"
}

/// Item table followed by the slot count
pub fn item_table(items: &[Item], capacity: usize) -> String {
    let mut out = format!(
        "{:<20} {:<20} {:<12} {:<10}\n{}\n",
        "NAME", "CATEGORY", "QUANTITY", "PRIORITY", RULE
    );
    for item in items {
        out.push_str(&format!(
            "{:<20} {:<20} {:<12} {:<10}\n",
            item.name, item.category, item.quantity, item.priority
        ));
    }
    out.push_str(RULE);
    out.push_str(&format!("\nTotal: {}/{}", items.len(), capacity));
    out
}

/// Full field set of a single item
pub fn item_details(item: &Item) -> String {
    format!(
        "Name:     {}\nCategory: {}\nQuantity: {}\nPriority: {}/5",
        item.name, item.category, item.quantity, item.priority
    )
}

/// Sort confirmation with the comparison count
pub fn sort_summary(report: &SortReport) -> String {
    format!(
        "Backpack sorted by {}.\nComparisons: {}",
        report.criterion, report.comparisons
    )
}
