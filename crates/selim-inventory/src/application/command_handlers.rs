//! Command handlers for the Inventory Ledger context.

use selim_core::clock::Clock;
use selim_core::command::Command;
use tracing::{info, instrument};

use crate::domain::aggregates::InventoryLedger;
use crate::domain::commands::{AddItem, RemoveItem, SelectItem};
use crate::domain::events::InventoryEvent;

/// Handles the `AddItem` command.
#[instrument(skip_all, fields(item_key = %command.item_key))]
pub fn handle_add_item(
    command: &AddItem,
    ledger: &mut InventoryLedger,
    clock: &dyn Clock,
) -> Vec<InventoryEvent> {
    if ledger.add_item(&command.item_key, clock) {
        info!(command = command.command_type(), "item added");
    }
    ledger.take_uncommitted_events()
}

/// Handles the `RemoveItem` command.
#[instrument(skip_all, fields(item_key = %command.item_key))]
pub fn handle_remove_item(
    command: &RemoveItem,
    ledger: &mut InventoryLedger,
    clock: &dyn Clock,
) -> Vec<InventoryEvent> {
    if ledger.remove_item(&command.item_key, clock) {
        info!(command = command.command_type(), "item removed");
    }
    ledger.take_uncommitted_events()
}

/// Handles the `SelectItem` command.
#[instrument(skip_all, fields(item_key = %command.item_key))]
pub fn handle_select_item(
    command: &SelectItem,
    ledger: &mut InventoryLedger,
    clock: &dyn Clock,
) -> Vec<InventoryEvent> {
    if ledger.select_item(&command.item_key, clock) {
        info!(command = command.command_type(), "item selected");
    }
    ledger.take_uncommitted_events()
}

#[cfg(test)]
mod tests {
    use selim_test_support::fixed_clock;

    use super::*;
    use crate::domain::events::InventoryEventKind;

    fn add(key: &str) -> AddItem {
        AddItem {
            item_key: key.to_owned(),
        }
    }

    #[test]
    fn test_handle_add_item_returns_drained_events() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = InventoryLedger::new();

        // Act
        let first = handle_add_item(&add("item_usb"), &mut ledger, &clock);
        let again = handle_add_item(&add("item_usb"), &mut ledger, &clock);

        // Assert
        assert_eq!(first.len(), 1);
        assert!(again.is_empty());
        assert!(ledger.uncommitted_events().is_empty());
    }

    #[test]
    fn test_handle_remove_item_of_missing_key_is_silent() {
        let clock = fixed_clock();
        let mut ledger = InventoryLedger::new();

        let events = handle_remove_item(
            &RemoveItem {
                item_key: "item_ssd".to_owned(),
            },
            &mut ledger,
            &clock,
        );

        assert!(events.is_empty());
    }

    #[test]
    fn test_handle_select_item_reports_selected_key() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = InventoryLedger::new();
        handle_add_item(&add("item_tchap"), &mut ledger, &clock);

        // Act
        let events = handle_select_item(
            &SelectItem {
                item_key: "item_tchap".to_owned(),
            },
            &mut ledger,
            &clock,
        );

        // Assert
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            InventoryEventKind::ItemSelected(payload) => assert_eq!(payload.item_key, "item_tchap"),
            other => panic!("expected ItemSelected, got {other:?}"),
        }
    }
}
