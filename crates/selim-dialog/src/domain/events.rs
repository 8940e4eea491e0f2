//! Domain events for the Dialog Sequencing context.

use selim_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::model::DialogNode;

/// Event type name for [`DialogStarted`].
pub const DIALOG_STARTED_EVENT_TYPE: &str = "dialog.started";
/// Event type name for [`DialogUpdated`].
pub const DIALOG_UPDATED_EVENT_TYPE: &str = "dialog.updated";
/// Event type name for [`DialogEnded`].
pub const DIALOG_ENDED_EVENT_TYPE: &str = "dialog.ended";

/// Emitted when a sequence is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogStarted {
    /// Key of the sequence that started.
    pub sequence_key: String,
}

/// Emitted when a node becomes current and should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogUpdated {
    /// Key of the running sequence.
    pub sequence_key: String,
    /// The node now current.
    pub node: DialogNode,
}

/// Why a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The current node had no `next`.
    Terminal,
    /// The current node's `next` could not be resolved.
    DanglingReference {
        /// The node holding the reference.
        from: i64,
        /// The id that was not found.
        missing: i64,
    },
}

/// Emitted when a sequence is exhausted. The engine is idle again by the
/// time listeners see this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogEnded {
    /// Key of the sequence that ended.
    pub sequence_key: String,
    /// How it ended.
    pub reason: EndReason,
}

/// Event payload variants for the Dialog Sequencing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogEventKind {
    /// A sequence has started.
    DialogStarted(DialogStarted),
    /// A node became current.
    DialogUpdated(DialogUpdated),
    /// A sequence has ended.
    DialogEnded(DialogEnded),
}

impl DialogEventKind {
    /// The event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DialogStarted(_) => DIALOG_STARTED_EVENT_TYPE,
            Self::DialogUpdated(_) => DIALOG_UPDATED_EVENT_TYPE,
            Self::DialogEnded(_) => DIALOG_ENDED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Dialog Sequencing context.
#[derive(Debug, Clone)]
pub struct DialogEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: DialogEventKind,
}

impl DomainEvent for DialogEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("DialogEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
