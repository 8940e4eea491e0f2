//! Commands for the Inventory Ledger context.

use selim_core::command::Command;

/// Command to add an item to the ledger.
#[derive(Debug, Clone)]
pub struct AddItem {
    /// The item key.
    pub item_key: String,
}

/// Command to remove an item from the ledger.
#[derive(Debug, Clone)]
pub struct RemoveItem {
    /// The item key.
    pub item_key: String,
}

/// Command to select a held item.
#[derive(Debug, Clone)]
pub struct SelectItem {
    /// The item key.
    pub item_key: String,
}

impl Command for AddItem {
    fn command_type(&self) -> &'static str {
        "inventory.add_item"
    }
}

impl Command for RemoveItem {
    fn command_type(&self) -> &'static str {
        "inventory.remove_item"
    }
}

impl Command for SelectItem {
    fn command_type(&self) -> &'static str {
        "inventory.select_item"
    }
}
