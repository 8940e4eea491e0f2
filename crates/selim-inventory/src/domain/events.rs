//! Domain events for the Inventory Ledger context.

use selim_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Event type name for [`ItemAdded`].
pub const ITEM_ADDED_EVENT_TYPE: &str = "inventory.item_added";
/// Event type name for [`ItemRemoved`].
pub const ITEM_REMOVED_EVENT_TYPE: &str = "inventory.item_removed";
/// Event type name for [`ItemSelected`].
pub const ITEM_SELECTED_EVENT_TYPE: &str = "inventory.item_selected";

/// Emitted when an item enters the ledger and becomes selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    /// The item key.
    pub item_key: String,
}

/// Emitted when an item leaves the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    /// The item key.
    pub item_key: String,
}

/// Emitted when the player activates a held item. What that means is up to
/// the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSelected {
    /// The item key.
    pub item_key: String,
}

/// Event payload variants for the Inventory Ledger context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEventKind {
    /// An item has been added.
    ItemAdded(ItemAdded),
    /// An item has been removed.
    ItemRemoved(ItemRemoved),
    /// An item has been selected.
    ItemSelected(ItemSelected),
}

impl InventoryEventKind {
    /// The event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ItemAdded(_) => ITEM_ADDED_EVENT_TYPE,
            Self::ItemRemoved(_) => ITEM_REMOVED_EVENT_TYPE,
            Self::ItemSelected(_) => ITEM_SELECTED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Inventory Ledger context.
#[derive(Debug, Clone)]
pub struct InventoryEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: InventoryEventKind,
}

impl DomainEvent for InventoryEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("InventoryEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
