//! Aggregate roots for the Inventory Ledger context.

use indexmap::IndexSet;
use selim_core::clock::Clock;
use selim_core::event::EventMetadata;

use super::events::{
    InventoryEvent, InventoryEventKind, ItemAdded, ItemRemoved, ItemSelected,
};

/// Items the player holds. Insertion order is kept for the dock and has
/// no bearing on possession.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    items: IndexSet<String>,
    emitted: u64,
    uncommitted_events: Vec<InventoryEvent>,
}

impl InventoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item_key`, producing an `ItemAdded` event. Holding it already
    /// is a no-op. Returns whether the item was new.
    pub fn add_item(&mut self, item_key: &str, clock: &dyn Clock) -> bool {
        if !self.items.insert(item_key.to_owned()) {
            return false;
        }
        self.emit(
            InventoryEventKind::ItemAdded(ItemAdded {
                item_key: item_key.to_owned(),
            }),
            clock,
        );
        true
    }

    /// Removes `item_key`, producing an `ItemRemoved` event. Not holding it
    /// is a no-op. Returns whether anything was removed.
    pub fn remove_item(&mut self, item_key: &str, clock: &dyn Clock) -> bool {
        if !self.items.shift_remove(item_key) {
            return false;
        }
        self.emit(
            InventoryEventKind::ItemRemoved(ItemRemoved {
                item_key: item_key.to_owned(),
            }),
            clock,
        );
        true
    }

    /// Records that the player activated `item_key`. Items not held cannot
    /// be selected. Returns whether an `ItemSelected` event was produced.
    pub fn select_item(&mut self, item_key: &str, clock: &dyn Clock) -> bool {
        if !self.items.contains(item_key) {
            return false;
        }
        self.emit(
            InventoryEventKind::ItemSelected(ItemSelected {
                item_key: item_key.to_owned(),
            }),
            clock,
        );
        true
    }

    /// Returns true if `item_key` is held.
    #[must_use]
    pub fn has_item(&self, item_key: &str) -> bool {
        self.items.contains(item_key)
    }

    /// Held items in the order they were added.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of held items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every item without producing events. Used when a scene starts
    /// over with a fresh dock.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Events produced since the buffer was last drained.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[InventoryEvent] {
        &self.uncommitted_events
    }

    /// Drains and returns the produced events.
    pub fn take_uncommitted_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    fn emit(&mut self, kind: InventoryEventKind, clock: &dyn Clock) {
        self.emitted += 1;
        self.uncommitted_events.push(InventoryEvent {
            metadata: EventMetadata::stamp(kind.event_type(), self.emitted, clock),
            kind,
        });
    }
}
