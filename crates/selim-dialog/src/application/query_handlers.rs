//! Query handlers for the Dialog Sequencing context.

use serde::Serialize;

use crate::domain::aggregates::DialogEngine;

/// Read-only view of the engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    /// Key of the running sequence.
    pub sequence_key: Option<String>,
    /// List position of the current node.
    pub current_index: Option<usize>,
    /// Id of the current node.
    pub current_node_id: Option<i64>,
    /// Speaker of the current node.
    pub speaker: Option<String>,
    /// Number of sequences in the installed dataset.
    pub sequence_count: usize,
}

/// Snapshots the engine.
#[must_use]
pub fn get_dialog_view(engine: &DialogEngine) -> DialogView {
    let node = engine.current_node();
    DialogView {
        sequence_key: engine.active_sequence_key().map(str::to_owned),
        current_index: engine.current_index(),
        current_node_id: node.map(|n| n.id),
        speaker: node.map(|n| n.speaker.clone()),
        sequence_count: engine.dialogs().len(),
    }
}

#[cfg(test)]
mod tests {
    use selim_test_support::fixed_clock;
    use selim_test_support::fixtures::SHUFFLED_DIALOG_JSON;

    use super::*;

    #[test]
    fn test_view_of_idle_engine_is_empty() {
        let engine = DialogEngine::with_dialogs(serde_json::from_str(SHUFFLED_DIALOG_JSON).unwrap());

        let view = get_dialog_view(&engine);

        assert_eq!(view.sequence_key, None);
        assert_eq!(view.current_index, None);
        assert_eq!(view.current_node_id, None);
        assert_eq!(view.sequence_count, 2);
    }

    #[test]
    fn test_view_tracks_current_node() {
        // Arrange
        let clock = fixed_clock();
        let mut engine =
            DialogEngine::with_dialogs(serde_json::from_str(SHUFFLED_DIALOG_JSON).unwrap());
        engine.start_dialog("shuffled", &clock);
        engine.next_dialog(&clock);

        // Act
        let view = get_dialog_view(&engine);

        // Assert
        assert_eq!(view.sequence_key.as_deref(), Some("shuffled"));
        assert_eq!(view.current_index, Some(2));
        assert_eq!(view.current_node_id, Some(30));
        assert_eq!(view.speaker.as_deref(), Some("Prof"));
    }
}
