//! Command handlers for the Dialog Sequencing context.
//!
//! Each handler runs one engine operation, drains the events it produced
//! and delivers them synchronously to a [`DialogListener`] before
//! returning them. Delivery happens after the engine has settled, so a
//! listener's owner is free to issue the next command as soon as the
//! handler returns.

use selim_core::clock::Clock;
use selim_core::command::Command;
use tracing::{debug, instrument};

use crate::domain::aggregates::DialogEngine;
use crate::domain::commands::{NextDialog, StartDialog};
use crate::domain::events::{
    DialogEnded, DialogEvent, DialogEventKind, DialogStarted, DialogUpdated,
};

/// Observer of the three dialog notifications. All methods default to
/// doing nothing.
pub trait DialogListener {
    /// A sequence was entered.
    fn on_dialog_start(&mut self, _event: &DialogStarted) {}

    /// A node became current and should be rendered.
    fn on_dialog_update(&mut self, _event: &DialogUpdated) {}

    /// A sequence was exhausted.
    fn on_dialog_end(&mut self, _event: &DialogEnded) {}
}

/// Listener that ignores everything.
impl DialogListener for () {}

/// Delivers `events` to `listener` in order.
pub fn dispatch(events: &[DialogEvent], listener: &mut dyn DialogListener) {
    for event in events {
        match &event.kind {
            DialogEventKind::DialogStarted(payload) => listener.on_dialog_start(payload),
            DialogEventKind::DialogUpdated(payload) => listener.on_dialog_update(payload),
            DialogEventKind::DialogEnded(payload) => listener.on_dialog_end(payload),
        }
    }
}

/// Handles the `StartDialog` command.
#[instrument(skip_all, fields(sequence_key = %command.sequence_key))]
pub fn handle_start_dialog(
    command: &StartDialog,
    engine: &mut DialogEngine,
    clock: &dyn Clock,
    listener: &mut dyn DialogListener,
) -> Vec<DialogEvent> {
    debug!(command = command.command_type(), "handling command");
    engine.start_dialog(&command.sequence_key, clock);
    let events = engine.take_uncommitted_events();
    dispatch(&events, listener);
    events
}

/// Handles the `NextDialog` command.
#[instrument(skip_all)]
pub fn handle_next_dialog(
    command: &NextDialog,
    engine: &mut DialogEngine,
    clock: &dyn Clock,
    listener: &mut dyn DialogListener,
) -> Vec<DialogEvent> {
    debug!(command = command.command_type(), "handling command");
    engine.next_dialog(clock);
    let events = engine.take_uncommitted_events();
    dispatch(&events, listener);
    events
}

#[cfg(test)]
mod tests {
    use selim_test_support::fixed_clock;
    use selim_test_support::fixtures::{DANGLING_DIALOG_JSON, INTRO_DIALOG_JSON};

    use super::*;
    use crate::domain::events::EndReason;

    #[derive(Debug, PartialEq, Eq)]
    enum Seen {
        Start(String),
        Update(i64),
        End(String),
    }

    #[derive(Default)]
    struct RecordingListener {
        seen: Vec<Seen>,
    }

    impl DialogListener for RecordingListener {
        fn on_dialog_start(&mut self, event: &DialogStarted) {
            self.seen.push(Seen::Start(event.sequence_key.clone()));
        }

        fn on_dialog_update(&mut self, event: &DialogUpdated) {
            self.seen.push(Seen::Update(event.node.id));
        }

        fn on_dialog_end(&mut self, event: &DialogEnded) {
            self.seen.push(Seen::End(event.sequence_key.clone()));
        }
    }

    fn engine_for(json: &str) -> DialogEngine {
        DialogEngine::with_dialogs(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_handlers_deliver_intro_scenario_in_order() {
        // Arrange
        let clock = fixed_clock();
        let mut engine = engine_for(INTRO_DIALOG_JSON);
        let mut listener = RecordingListener::default();

        // Act
        handle_start_dialog(&StartDialog::new("intro"), &mut engine, &clock, &mut listener);
        handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);
        handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);
        let trailing = handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);

        // Assert
        assert_eq!(
            listener.seen,
            vec![
                Seen::Update(1),
                Seen::Start("intro".to_owned()),
                Seen::Update(2),
                Seen::End("intro".to_owned()),
            ]
        );
        assert!(trailing.is_empty());
    }

    #[test]
    fn test_listener_owner_can_restart_after_end() {
        // Arrange
        let clock = fixed_clock();
        let mut engine = engine_for(INTRO_DIALOG_JSON);
        let mut listener = RecordingListener::default();
        handle_start_dialog(&StartDialog::new("intro"), &mut engine, &clock, &mut listener);
        handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);

        // Act
        let ended = handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);
        assert!(!engine.is_active());
        let restarted =
            handle_start_dialog(&StartDialog::new("intro"), &mut engine, &clock, &mut listener);

        // Assert
        assert_eq!(ended.len(), 1);
        assert_eq!(restarted.len(), 2);
        assert_eq!(engine.current_index(), Some(0));
    }

    #[test]
    fn test_dangling_reference_reaches_listener_as_plain_end() {
        let clock = fixed_clock();
        let mut engine = engine_for(DANGLING_DIALOG_JSON);
        let mut listener = RecordingListener::default();

        handle_start_dialog(&StartDialog::new("broken"), &mut engine, &clock, &mut listener);
        let events = handle_next_dialog(&NextDialog, &mut engine, &clock, &mut listener);

        assert_eq!(listener.seen.last(), Some(&Seen::End("broken".to_owned())));
        match &events[0].kind {
            DialogEventKind::DialogEnded(payload) => assert!(matches!(
                payload.reason,
                EndReason::DanglingReference { missing: 99, .. }
            )),
            other => panic!("expected DialogEnded, got {other:?}"),
        }
    }

    #[test]
    fn test_unit_listener_accepts_everything() {
        let clock = fixed_clock();
        let mut engine = engine_for(INTRO_DIALOG_JSON);

        let events = handle_start_dialog(&StartDialog::new("intro"), &mut engine, &clock, &mut ());

        assert_eq!(events.len(), 2);
    }
}
