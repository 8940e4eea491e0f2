//! Dialog notifications as seen by a scene.

use selim_core::scheduler::Scheduler;
use selim_dialog::application::command_handlers::DialogListener;
use selim_dialog::domain::events::{DialogEnded, DialogStarted, DialogUpdated};
use selim_presenter::application::listener::PresenterListener;
use selim_presenter::domain::aggregates::DialogPresenter;
use tracing::debug;

/// Forwards updates to the dialog box and remembers whether the sequence
/// ended, so the scene can react once the engine has settled.
pub struct SceneDialogListener<'a> {
    presenter: PresenterListener<'a>,
    ended: Option<DialogEnded>,
}

impl<'a> SceneDialogListener<'a> {
    /// Wraps the dialog box and the scheduler its timers run on.
    pub fn new(presenter: &'a mut DialogPresenter, scheduler: &'a mut dyn Scheduler) -> Self {
        Self {
            presenter: PresenterListener::new(presenter, scheduler),
            ended: None,
        }
    }

    /// The end notification, if one was delivered.
    #[must_use]
    pub fn into_ended(self) -> Option<DialogEnded> {
        self.ended
    }
}

impl DialogListener for SceneDialogListener<'_> {
    fn on_dialog_start(&mut self, event: &DialogStarted) {
        debug!(sequence_key = %event.sequence_key, "dialog started");
        self.presenter.on_dialog_start(event);
    }

    fn on_dialog_update(&mut self, event: &DialogUpdated) {
        self.presenter.on_dialog_update(event);
    }

    fn on_dialog_end(&mut self, event: &DialogEnded) {
        self.presenter.on_dialog_end(event);
        self.ended = Some(event.clone());
    }
}
