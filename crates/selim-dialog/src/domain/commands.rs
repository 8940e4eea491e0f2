//! Commands for the Dialog Sequencing context.

use selim_core::command::Command;

/// Command to begin a dialog sequence, discarding any running one.
#[derive(Debug, Clone)]
pub struct StartDialog {
    /// Key of the sequence to start.
    pub sequence_key: String,
}

impl StartDialog {
    /// Builds the command for `sequence_key`.
    #[must_use]
    pub fn new(sequence_key: impl Into<String>) -> Self {
        Self {
            sequence_key: sequence_key.into(),
        }
    }
}

impl Command for StartDialog {
    fn command_type(&self) -> &'static str {
        "dialog.start"
    }
}

/// Command to move to the current node's successor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextDialog;

impl Command for NextDialog {
    fn command_type(&self) -> &'static str {
        "dialog.next"
    }
}
