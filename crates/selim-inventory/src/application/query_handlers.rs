//! Query handlers for the Inventory Ledger context.

use serde::Serialize;

use crate::domain::aggregates::InventoryLedger;

/// Read-only view of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    /// Held item keys in dock order.
    pub items: Vec<String>,
}

/// Snapshots the ledger.
#[must_use]
pub fn get_inventory_view(ledger: &InventoryLedger) -> InventoryView {
    InventoryView {
        items: ledger.items().map(str::to_owned).collect(),
    }
}

#[cfg(test)]
mod tests {
    use selim_test_support::fixed_clock;

    use super::*;

    #[test]
    fn test_view_lists_items_in_dock_order() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = InventoryLedger::new();
        ledger.add_item("item_ssd", &clock);
        ledger.add_item("item_usb", &clock);

        // Act
        let view = get_inventory_view(&ledger);

        // Assert
        assert_eq!(view.items, vec!["item_ssd", "item_usb"]);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({ "items": ["item_ssd", "item_usb"] })
        );
    }
}
