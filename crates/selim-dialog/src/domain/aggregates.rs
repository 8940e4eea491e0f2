//! Aggregate roots for the Dialog Sequencing context.

use selim_core::clock::Clock;
use selim_core::event::EventMetadata;
use tracing::{debug, warn};

use super::events::{
    DialogEnded, DialogEvent, DialogEventKind, DialogStarted, DialogUpdated, EndReason,
};
use super::model::{DialogNode, DialogSequence, DialogSet};

/// The sequence being played and where in it we are.
#[derive(Debug, Clone)]
struct ActiveDialog {
    key: String,
    sequence: DialogSequence,
    index: usize,
}

/// The dialog state machine. One per dialog context; idle until a sequence
/// is started, idle again once that sequence runs out.
///
/// Operations never fail: a missing dataset or sequence is logged and
/// ignored. Every notification is appended to the uncommitted-event buffer
/// in emission order for the caller to drain and deliver.
#[derive(Debug, Default)]
pub struct DialogEngine {
    dialogs: DialogSet,
    active: Option<ActiveDialog>,
    emitted: u64,
    uncommitted_events: Vec<DialogEvent>,
}

impl DialogEngine {
    /// Creates an idle engine with no dialogs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle engine over `dialogs`.
    #[must_use]
    pub fn with_dialogs(dialogs: DialogSet) -> Self {
        Self {
            dialogs,
            ..Self::default()
        }
    }

    /// Replaces the whole dataset. An absent dataset is logged and the
    /// previous one kept. A running sequence keeps playing from its own
    /// copy. Returns whether a dataset was installed.
    pub fn load_dialogs(&mut self, dataset: Option<DialogSet>) -> bool {
        match dataset {
            Some(dialogs) => {
                debug!(sequences = dialogs.len(), "dialog dataset loaded");
                self.dialogs = dialogs;
                true
            }
            None => {
                warn!("dialog dataset missing; keeping previous dataset");
                false
            }
        }
    }

    /// Starts the sequence under `sequence_key` at its first listed node,
    /// emitting `dialog.updated` then `dialog.started`.
    ///
    /// A running sequence is dropped without a `dialog.ended`. An unknown
    /// or empty sequence is logged and leaves the engine untouched.
    /// Returns whether a sequence started.
    pub fn start_dialog(&mut self, sequence_key: &str, clock: &dyn Clock) -> bool {
        let Some(sequence) = self.dialogs.get(sequence_key) else {
            warn!(sequence_key, "dialog sequence not found");
            return false;
        };
        if sequence.is_empty() {
            warn!(sequence_key, "dialog sequence is empty");
            return false;
        }

        if let Some(previous) = &self.active {
            debug!(
                discarded = %previous.key,
                sequence_key,
                "dialog restarted while active"
            );
        }

        self.active = Some(ActiveDialog {
            key: sequence_key.to_owned(),
            sequence: sequence.clone(),
            index: 0,
        });
        self.emit_update(clock);
        self.emit(
            DialogEventKind::DialogStarted(DialogStarted {
                sequence_key: sequence_key.to_owned(),
            }),
            clock,
        );
        true
    }

    /// Moves to the current node's successor, or ends the sequence if there
    /// is none. A `next` id missing from the sequence ends it the same way.
    /// Does nothing while idle.
    pub fn next_dialog(&mut self, clock: &dyn Clock) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let Some(current) = active.sequence.get(active.index) else {
            self.end_dialog(EndReason::Terminal, clock);
            return;
        };

        let reason = match current.next {
            None => EndReason::Terminal,
            Some(next) => match active.sequence.position_of(next) {
                Some(position) => {
                    active.index = position;
                    self.emit_update(clock);
                    return;
                }
                None => {
                    warn!(
                        sequence_key = %active.key,
                        node_id = current.id,
                        missing = next,
                        "dangling dialog reference; ending sequence"
                    );
                    EndReason::DanglingReference {
                        from: current.id,
                        missing: next,
                    }
                }
            },
        };
        self.end_dialog(reason, clock);
    }

    /// Returns true while a sequence is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The node currently shown, if any.
    #[must_use]
    pub fn current_node(&self) -> Option<&DialogNode> {
        self.active
            .as_ref()
            .and_then(|active| active.sequence.get(active.index))
    }

    /// List position of the current node; `None` while idle.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.index)
    }

    /// Key of the running sequence.
    #[must_use]
    pub fn active_sequence_key(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.key.as_str())
    }

    /// The installed dataset.
    #[must_use]
    pub fn dialogs(&self) -> &DialogSet {
        &self.dialogs
    }

    /// Events emitted since the buffer was last drained.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[DialogEvent] {
        &self.uncommitted_events
    }

    /// Drains and returns the emitted events.
    pub fn take_uncommitted_events(&mut self) -> Vec<DialogEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    /// Clears state first, then emits, so a listener may start a new
    /// sequence straight from its end handler.
    fn end_dialog(&mut self, reason: EndReason, clock: &dyn Clock) {
        let Some(ended) = self.active.take() else {
            return;
        };
        debug!(sequence_key = %ended.key, ?reason, "dialog ended");
        self.emit(
            DialogEventKind::DialogEnded(DialogEnded {
                sequence_key: ended.key,
                reason,
            }),
            clock,
        );
    }

    fn emit_update(&mut self, clock: &dyn Clock) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let Some(node) = active.sequence.get(active.index) else {
            return;
        };
        let kind = DialogEventKind::DialogUpdated(DialogUpdated {
            sequence_key: active.key.clone(),
            node: node.clone(),
        });
        self.emit(kind, clock);
    }

    fn emit(&mut self, kind: DialogEventKind, clock: &dyn Clock) {
        self.emitted += 1;
        let event = DialogEvent {
            metadata: EventMetadata::stamp(kind.event_type(), self.emitted, clock),
            kind,
        };
        self.uncommitted_events.push(event);
    }
}
