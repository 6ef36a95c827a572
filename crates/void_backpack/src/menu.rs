//! Interactive menu loop
//!
//! Reads commands line by line and drives a [`Backpack`]. Generic over the
//! reader and writer so the loop can run against stdin/stdout or in-memory
//! buffers.

use crate::render;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use void_inventory::{
    clean_category, clean_name, parse_quantity, Backpack, InventoryError, Item, Priority,
};

/// Menu errors
#[derive(Debug, Error)]
pub enum MenuError {
    /// Terminal I/O error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Input reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Add an item
    Add,
    /// Remove an item by name
    Remove,
    /// List all items
    List,
    /// Linear search by name
    Search,
    /// Sort by a chosen criterion
    Sort,
    /// Binary search by name
    BinarySearch,
    /// Leave the menu
    Exit,
}

impl std::str::FromStr for MenuOption {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::List),
            "4" => Ok(Self::Search),
            "5" => Ok(Self::Sort),
            "6" => Ok(Self::BinarySearch),
            "0" => Ok(Self::Exit),
            other => Err(InventoryError::invalid(format!("unknown option '{}'", other))),
        }
    }
}

/// Menu session
pub struct Menu<R, W> {
    input: R,
    output: W,
    backpack: Backpack,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu over `backpack`
    pub fn new(input: R, output: W, backpack: Backpack) -> Self {
        Self {
            input,
            output,
            backpack,
        }
    }

    /// Get the backpack
    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    /// Take back the backpack and the writer
    #[cfg(test)]
    pub fn into_parts(self) -> (Backpack, W) {
        (self.backpack, self.output)
    }

    /// Print the welcome banner
    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::banner())
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(MenuError::InputClosed) => {
                    log::debug!("Input closed, leaving menu");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        writeln!(self.output, "\nLeaving the backpack... good luck on the island!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Show the menu and handle one choice; `false` once the user exits
    fn step(&mut self) -> Result<bool, MenuError> {
        writeln!(self.output, "{}", render::main_menu(&self.backpack))?;
        let choice = self.prompt("Choose an option: ")?;

        let option = match choice.parse::<MenuOption>() {
            Ok(option) => option,
            Err(e) => {
                self.report(&e)?;
                return Ok(true);
            }
        };

        match option {
            MenuOption::Add => self.add_item()?,
            MenuOption::Remove => self.remove_item()?,
            MenuOption::List => self.list_items()?,
            MenuOption::Search => self.search_item()?,
            MenuOption::Sort => self.sort_items()?,
            MenuOption::BinarySearch => self.binary_search_item()?,
            MenuOption::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn add_item(&mut self) -> Result<(), MenuError> {
        if let Err(e) = self.backpack.ensure_room() {
            self.report(&e)?;
            return Ok(());
        }

        writeln!(self.output, "\n--- ADD ITEM ---")?;
        let name = self.prompt_until("Item name: ", clean_name)?;
        let category = self.prompt_until("Item category: ", clean_category)?;
        let quantity = self.prompt_until("Quantity: ", parse_quantity)?;
        let priority = self.prompt_until("Priority (1-5): ", Priority::parse)?;

        match Item::new(name, category, quantity, priority).and_then(|item| self.backpack.add(item)) {
            Ok(()) => writeln!(self.output, "\nItem added.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn remove_item(&mut self) -> Result<(), MenuError> {
        if self.backpack.is_empty() {
            self.report(&InventoryError::EmptyCollection)?;
            return Ok(());
        }

        writeln!(self.output, "\n--- REMOVE ITEM ---")?;
        let name = self.prompt("Name of the item to remove: ")?;
        match self.backpack.remove(name.trim_end()) {
            Ok(item) => writeln!(self.output, "\nItem '{}' removed.", item.name)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_items(&mut self) -> Result<(), MenuError> {
        let capacity = self.backpack.capacity();
        let listing = self
            .backpack
            .list()
            .map(|items| render::item_table(items, capacity));
        match listing {
            Ok(table) => writeln!(self.output, "\n{}", table)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn search_item(&mut self) -> Result<(), MenuError> {
        if self.backpack.is_empty() {
            self.report(&InventoryError::EmptyCollection)?;
            return Ok(());
        }

        writeln!(self.output, "\n--- SEARCH ITEM (linear) ---")?;
        let name = self.prompt("Item name: ")?;
        let found = self.backpack.find(name.trim_end()).map(render::item_details);
        match found {
            Ok(details) => writeln!(self.output, "\nItem found!\n{}", details)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn sort_items(&mut self) -> Result<(), MenuError> {
        if self.backpack.is_empty() {
            self.report(&InventoryError::EmptyCollection)?;
            return Ok(());
        }

        writeln!(self.output, "{}", render::sort_menu())?;
        let choice = self.prompt("Choose a criterion: ")?;
        let report = choice
            .trim()
            .parse::<i64>()
            .map_err(|_| InventoryError::invalid(format!("'{}' is not a number", choice.trim())))
            .and_then(|code| self.backpack.sort_by_code(code));

        match report {
            Ok(report) => writeln!(self.output, "\n{}", render::sort_summary(&report))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn binary_search_item(&mut self) -> Result<(), MenuError> {
        if self.backpack.is_empty() {
            self.report(&InventoryError::EmptyCollection)?;
            return Ok(());
        }
        if !self.backpack.is_sorted_by_name() {
            self.report(&InventoryError::PreconditionFailed)?;
            writeln!(self.output, "Hint: use option 5 to sort by name first.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- SEARCH ITEM (binary) ---")?;
        let name = self.prompt("Item name: ")?;
        let found = self.backpack.binary_find(name.trim_end()).map(render::item_details);
        match found {
            Ok(details) => writeln!(self.output, "\nItem found with binary search!\n{}", details)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn report(&mut self, err: &InventoryError) -> io::Result<()> {
        log::debug!("Menu operation failed: {:?}", err);
        writeln!(self.output, "\nError: {}", err)
    }

    /// Read one line without its line terminator
    fn read_line(&mut self) -> Result<String, MenuError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, MenuError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt until `parse` accepts the answer
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> void_inventory::Result<T>,
    ) -> Result<T, MenuError> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use void_inventory::SortState;

    fn run_script(script: &str, backpack: Backpack) -> (Backpack, String) {
        let mut menu = Menu::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), backpack);
        menu.run().unwrap();
        let (backpack, output) = menu.into_parts();
        (backpack, String::from_utf8(output).unwrap())
    }

    fn names(backpack: &Backpack) -> Vec<&str> {
        backpack
            .inventory()
            .items()
            .iter()
            .map(|i| i.name.as_str())
            .collect()
    }

    #[test]
    fn test_parse_option() {
        assert_eq!("1".parse::<MenuOption>().unwrap(), MenuOption::Add);
        assert_eq!(" 6 ".parse::<MenuOption>().unwrap(), MenuOption::BinarySearch);
        assert_eq!("0".parse::<MenuOption>().unwrap(), MenuOption::Exit);
        assert!("9".parse::<MenuOption>().is_err());
        assert!("add".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_add_sort_and_binary_search() {
        let script = "1\nMedkit\nHeal\n2\n5\n\
                      1\nRope\nTool\n1\n3\n\
                      1\nAmmo\nWeapon\n40\n4\n\
                      5\n1\n\
                      6\nRope\n\
                      0\n";

        let (backpack, output) = run_script(script, Backpack::new(10));

        assert_eq!(names(&backpack), ["Ammo", "Medkit", "Rope"]);
        assert!(backpack.is_sorted_by_name());
        assert!(output.contains("Comparisons: 3"));
        assert!(output.contains("Item found with binary search!"));
        assert!(output.contains("Quantity: 1"));
        assert!(output.contains("good luck"));
    }

    #[test]
    fn test_priority_reprompts_until_valid() {
        let script = "1\nRope\nTool\nlots\n1\n0\n7\n3\n0\n";

        let (backpack, output) = run_script(script, Backpack::new(10));

        let rope = backpack.find("Rope").unwrap();
        assert_eq!(rope.quantity, 1);
        assert_eq!(rope.priority.get(), 3);
        assert_eq!(output.matches("Priority (1-5): ").count(), 3);
        assert_eq!(output.matches("Quantity: ").count(), 2);
    }

    #[test]
    fn test_blank_name_reprompts() {
        let script = "1\n\n   \nRope\nTool\n1\n3\n0\n";

        let (backpack, output) = run_script(script, Backpack::new(10));

        assert_eq!(names(&backpack), ["Rope"]);
        assert_eq!(output.matches("Item name: ").count(), 3);
    }

    #[test]
    fn test_binary_search_requires_name_sort() {
        let script = "1\nRope\nTool\n1\n3\n6\n0\n";

        let (_, output) = run_script(script, Backpack::new(10));

        assert!(output.contains("sorted by name before a binary search"));
        assert!(output.contains("Hint: use option 5"));
    }

    #[test]
    fn test_mutation_clears_sort_state() {
        let script = "1\nRope\nTool\n1\n3\n5\n1\n1\nAmmo\nWeapon\n40\n4\n0\n";

        let (backpack, _) = run_script(script, Backpack::new(10));

        assert!(!backpack.is_sorted_by_name());
        assert_eq!(names(&backpack), ["Rope", "Ammo"]);
    }

    #[test]
    fn test_empty_backpack_messages() {
        let (_, output) = run_script("2\n3\n4\n5\n6\n0\n", Backpack::new(10));

        assert_eq!(output.matches("Error: Backpack is empty").count(), 5);
        // Nothing was prompted beyond the main menu
        assert!(!output.contains("Item name: "));
    }

    #[test]
    fn test_full_backpack_skips_prompts() {
        let backpack = Backpack::with_items(
            1,
            [Item::new("Rope", "Tool", 1, Priority::MIN).unwrap()],
        )
        .unwrap();

        let (backpack, output) = run_script("1\n0\n", backpack);

        assert!(output.contains("Error: Backpack is full (1 items)"));
        assert!(!output.contains("Item name: "));
        assert_eq!(backpack.len(), 1);
    }

    #[test]
    fn test_remove_and_list() {
        let script = "1\nRope\nTool\n1\n3\n1\nAmmo\nWeapon\n40\n4\n2\nRope\n2\nKnife\n3\n0\n";

        let (backpack, output) = run_script(script, Backpack::new(10));

        assert_eq!(names(&backpack), ["Ammo"]);
        assert!(output.contains("Item 'Rope' removed."));
        assert!(output.contains("Error: Item 'Knife' not found"));
        assert!(output.contains("Total: 1/10"));
    }

    #[test]
    fn test_invalid_choices() {
        let backpack = Backpack::with_items(
            5,
            [Item::new("Rope", "Tool", 1, Priority::MIN).unwrap()],
        )
        .unwrap();

        let (backpack, output) = run_script("8\n5\n4\n5\nx\n0\n", backpack);

        assert!(output.contains("unknown option '8'"));
        assert!(output.contains("unknown sort criterion 4"));
        assert!(output.contains("'x' is not a number"));
        assert!(!backpack.is_sorted_by_name());
    }

    #[test]
    fn test_linear_search() {
        let backpack = Backpack::with_items(
            5,
            [Item::new("Rope", "Tool", 1, Priority::MIN).unwrap()],
        )
        .unwrap();

        let (_, output) = run_script("4\nRope\n4\nKnife\n0\n", backpack);

        assert!(output.contains("Item found!\nName:     Rope"));
        assert!(output.contains("Error: Item 'Knife' not found"));
    }

    #[test]
    fn test_eof_ends_session() {
        // Input ends in the middle of adding an item
        let (backpack, output) = run_script("1\nRope\n", Backpack::new(10));

        assert!(backpack.is_empty());
        assert!(output.contains("good luck"));
    }

    #[test]
    fn test_sort_by_priority() {
        let backpack = Backpack::with_items(
            5,
            [
                Item::new("Rope", "Tool", 1, Priority::new(3).unwrap()).unwrap(),
                Item::new("Medkit", "Heal", 2, Priority::MAX).unwrap(),
            ],
        )
        .unwrap();

        let (backpack, output) = run_script("5\n3\n0\n", backpack);

        assert_eq!(names(&backpack), ["Medkit", "Rope"]);
        assert!(output.contains("Backpack sorted by priority."));
        assert_eq!(backpack.sort_state(), SortState::Unsorted);
    }
}
