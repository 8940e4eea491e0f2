//! Binds the presenter to dialog notifications.

use selim_core::scheduler::Scheduler;
use selim_dialog::application::command_handlers::DialogListener;
use selim_dialog::domain::events::{DialogEnded, DialogUpdated};

use crate::domain::aggregates::DialogPresenter;

/// Shows every updated node and hides the box when the sequence ends.
pub struct PresenterListener<'a> {
    presenter: &'a mut DialogPresenter,
    scheduler: &'a mut dyn Scheduler,
}

impl<'a> PresenterListener<'a> {
    /// Borrows the presenter and the scheduler its timers run on.
    pub fn new(presenter: &'a mut DialogPresenter, scheduler: &'a mut dyn Scheduler) -> Self {
        Self {
            presenter,
            scheduler,
        }
    }
}

impl DialogListener for PresenterListener<'_> {
    fn on_dialog_update(&mut self, event: &DialogUpdated) {
        self.presenter.show_dialog(&event.node, self.scheduler);
    }

    fn on_dialog_end(&mut self, _event: &DialogEnded) {
        self.presenter.hide_dialog(self.scheduler);
    }
}
