//! The adventure director.
//!
//! One [`Adventure`] owns every stateful piece of a playthrough and is the
//! only thing the host talks to: it feeds [`Input`]s in and gets
//! [`SceneOutcome`]s back. Dialog notifications are delivered after the
//! engine has settled, so reacting to an ended sequence by starting the
//! next scene's intro is an ordinary call, not a re-entrant one.

use std::time::Duration;

use selim_core::clock::Clock;
use selim_core::command::Command;
use selim_core::geometry::Viewport;
use selim_core::render::Color;
use selim_core::scheduler::{Scheduler, TimerHandle};
use selim_dialog::application::command_handlers::{handle_next_dialog, handle_start_dialog};
use selim_dialog::domain::aggregates::DialogEngine;
use selim_dialog::domain::commands::{NextDialog, StartDialog};
use selim_dialog::domain::events::DialogEnded;
use selim_dialog::domain::model::DialogSet;
use selim_inventory::application::command_handlers::{
    handle_add_item, handle_remove_item, handle_select_item,
};
use selim_inventory::application::dock::DockLayout;
use selim_inventory::domain::aggregates::InventoryLedger;
use selim_inventory::domain::commands::{AddItem, RemoveItem, SelectItem};
use selim_presenter::domain::aggregates::{DialogPresenter, PresenterConfig};
use tracing::{debug, info, instrument, trace};

use super::listener::SceneDialogListener;
use crate::domain::commands::Input;
use crate::domain::events::{CameraEffect, SceneOutcome};
use crate::domain::progress::{ProgressFlags, PuzzleState};
use crate::domain::scene::{ITEM_SSD, ITEM_TCHAP, ITEM_USB, SceneId, SceneObject};
use crate::domain::urgency::{GaugeTick, UrgencyGauge};

const USB_FOUND: &str = "USB key found!";
const OLD_PC_HINT: &str = "It needs an OS...";
const PC_REPAIRED: &str = "REPAIRED!";

/// A playthrough, from the intro narration to the credits.
#[derive(Debug)]
pub struct Adventure {
    engine: DialogEngine,
    presenter: DialogPresenter,
    ledger: InventoryLedger,
    dock: DockLayout,
    gauge: UrgencyGauge,
    flags: ProgressFlags,
    puzzles: PuzzleState,
    scene: SceneId,
    viewport: Viewport,
}

impl Adventure {
    /// Creates an adventure that has not begun. With no dataset every
    /// dialog request is a logged no-op.
    #[must_use]
    pub fn new(dialogs: Option<DialogSet>, config: PresenterConfig, viewport: Viewport) -> Self {
        let mut engine = DialogEngine::new();
        engine.load_dialogs(dialogs);
        Self {
            engine,
            presenter: DialogPresenter::new(config, viewport),
            ledger: InventoryLedger::new(),
            dock: DockLayout::for_viewport(viewport),
            gauge: UrgencyGauge::new(),
            flags: ProgressFlags::default(),
            puzzles: PuzzleState::default(),
            scene: SceneId::Intro,
            viewport,
        }
    }

    /// Enters the intro scene and starts its narration.
    pub fn begin(&mut self, scheduler: &mut dyn Scheduler, clock: &dyn Clock) -> Vec<SceneOutcome> {
        let mut outcomes = Vec::new();
        self.enter_scene(SceneId::Intro, scheduler, clock, &mut outcomes);
        outcomes
    }

    /// Routes one input and reports what happened.
    #[instrument(skip_all, fields(scene = %self.scene, input = input.command_type()))]
    pub fn handle_input(
        &mut self,
        input: Input,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
    ) -> Vec<SceneOutcome> {
        let mut outcomes = Vec::new();
        match input {
            Input::Advance => self.advance(scheduler, clock, &mut outcomes),
            Input::PointerDown(point) => {
                if self.presenter.is_visible() {
                    self.advance(scheduler, clock, &mut outcomes);
                } else if self.scene.has_hud()
                    && let Some(key) = self.dock.hit_test(point, &self.ledger).map(str::to_owned)
                {
                    self.select_item(&key, clock, &mut outcomes);
                }
            }
            Input::Interact(object) => self.interact(object, scheduler, clock, &mut outcomes),
            Input::SelectItem(key) => {
                if self.presenter.is_visible() {
                    debug!(item_key = %key, "dialog showing, selection ignored");
                } else {
                    self.select_item(&key, clock, &mut outcomes);
                }
            }
            Input::Resize(viewport) => self.resize(viewport),
            Input::TimerFired(handle) => self.on_timer(handle, scheduler, &mut outcomes),
        }
        outcomes
    }

    /// The scene being played.
    #[must_use]
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// Returns true once the credits are reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.scene == SceneId::Finished
    }

    /// Puzzle completion flags.
    #[must_use]
    pub fn flags(&self) -> ProgressFlags {
        self.flags
    }

    /// Puzzle state of the current scene.
    #[must_use]
    pub fn puzzles(&self) -> &PuzzleState {
        &self.puzzles
    }

    /// The dialog engine.
    #[must_use]
    pub fn engine(&self) -> &DialogEngine {
        &self.engine
    }

    /// The dialog box.
    #[must_use]
    pub fn presenter(&self) -> &DialogPresenter {
        &self.presenter
    }

    /// Items held.
    #[must_use]
    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Dock geometry.
    #[must_use]
    pub fn dock(&self) -> &DockLayout {
        &self.dock
    }

    /// The countdown.
    #[must_use]
    pub fn gauge(&self) -> &UrgencyGauge {
        &self.gauge
    }

    /// Current display size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn advance(
        &mut self,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        if !self.presenter.is_visible() {
            debug!("no dialog showing, advance ignored");
            return;
        }
        if self.presenter.is_typing() {
            self.presenter.complete_typing(scheduler);
            return;
        }
        let mut listener = SceneDialogListener::new(&mut self.presenter, scheduler);
        handle_next_dialog(&NextDialog, &mut self.engine, clock, &mut listener);
        if let Some(ended) = listener.into_ended() {
            self.on_sequence_ended(&ended, scheduler, clock, outcomes);
        }
    }

    fn start_sequence(
        &mut self,
        sequence_key: &str,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        let mut listener = SceneDialogListener::new(&mut self.presenter, scheduler);
        handle_start_dialog(
            &StartDialog::new(sequence_key),
            &mut self.engine,
            clock,
            &mut listener,
        );
        if let Some(ended) = listener.into_ended() {
            self.on_sequence_ended(&ended, scheduler, clock, outcomes);
        }
    }

    fn on_sequence_ended(
        &mut self,
        ended: &DialogEnded,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        if !self.flags.is_complete(self.scene) {
            debug!(sequence_key = %ended.sequence_key, "dialog ended, scene continues");
            return;
        }
        self.enter_scene(self.scene.next(), scheduler, clock, outcomes);
    }

    fn enter_scene(
        &mut self,
        scene: SceneId,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        info!(from = %self.scene, to = %scene, "entering scene");
        self.scene = scene;
        self.puzzles = PuzzleState::default();
        self.ledger.reset();
        outcomes.push(SceneOutcome::SceneEntered(scene));
        if let Some(item) = scene.stocked_item() {
            self.grant_item(item, clock, outcomes);
        }
        if scene.has_hud() {
            self.gauge.start(scheduler);
        } else {
            self.gauge.stop(scheduler);
        }
        if let Some(sequence_key) = scene.intro_sequence() {
            self.start_sequence(sequence_key, scheduler, clock, outcomes);
        }
    }

    fn interact(
        &mut self,
        object: SceneObject,
        scheduler: &mut dyn Scheduler,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        if self.presenter.is_visible() {
            debug!(%object, "dialog showing, interaction ignored");
            return;
        }
        if object.scene() != self.scene {
            debug!(%object, "object is not in this scene");
            return;
        }

        match object {
            SceneObject::Professor => {
                self.start_sequence("scene1_prof", scheduler, clock, outcomes);
            }
            SceneObject::Cupboard => {
                if self.puzzles.search_cupboard() {
                    self.grant_item(ITEM_USB, clock, outcomes);
                    outcomes.push(SceneOutcome::Feedback(USB_FOUND.to_owned()));
                }
            }
            SceneObject::OldPc => {
                if self.ledger.has_item(ITEM_USB) {
                    self.consume_item(ITEM_USB, clock, outcomes);
                    self.flags.complete(SceneId::Cemetery);
                    outcomes.push(SceneOutcome::Camera(CameraEffect::Flash {
                        duration: Duration::from_millis(1000),
                        color: Color::GREEN,
                    }));
                    self.start_sequence("scene1_wiwi_success", scheduler, clock, outcomes);
                } else {
                    outcomes.push(SceneOutcome::Feedback(OLD_PC_HINT.to_owned()));
                }
            }
            SceneObject::Student => {
                self.start_sequence("scene2_geek_choice", scheduler, clock, outcomes);
            }
            SceneObject::Pc(pc) => {
                if !self.ledger.has_item(ITEM_SSD) || !self.puzzles.repair(pc) {
                    return;
                }
                info!(pc, "workshop machine repaired");
                outcomes.push(SceneOutcome::Feedback(PC_REPAIRED.to_owned()));
                outcomes.push(SceneOutcome::PcRepaired(self.puzzles.repaired_count()));
                if self.puzzles.all_repaired() {
                    self.flags.complete(SceneId::Workshop);
                    self.start_sequence("scene2_success", scheduler, clock, outcomes);
                }
            }
            SceneObject::Firewall => {
                if self.ledger.has_item(ITEM_TCHAP) {
                    self.flags.complete(SceneId::ServerRoom);
                    outcomes.push(SceneOutcome::Camera(CameraEffect::Shake {
                        duration: Duration::from_millis(500),
                        intensity: 0.01,
                    }));
                    outcomes.push(SceneOutcome::Camera(CameraEffect::Flash {
                        duration: Duration::from_millis(1000),
                        color: Color::BLUE,
                    }));
                    self.start_sequence("scene3_ending", scheduler, clock, outcomes);
                }
            }
        }
    }

    fn grant_item(&mut self, item_key: &str, clock: &dyn Clock, outcomes: &mut Vec<SceneOutcome>) {
        let command = AddItem {
            item_key: item_key.to_owned(),
        };
        if !handle_add_item(&command, &mut self.ledger, clock).is_empty() {
            outcomes.push(SceneOutcome::ItemGranted(command.item_key));
        }
    }

    fn consume_item(
        &mut self,
        item_key: &str,
        clock: &dyn Clock,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        let command = RemoveItem {
            item_key: item_key.to_owned(),
        };
        if !handle_remove_item(&command, &mut self.ledger, clock).is_empty() {
            outcomes.push(SceneOutcome::ItemConsumed(command.item_key));
        }
    }

    fn select_item(&mut self, item_key: &str, clock: &dyn Clock, outcomes: &mut Vec<SceneOutcome>) {
        let command = SelectItem {
            item_key: item_key.to_owned(),
        };
        if handle_select_item(&command, &mut self.ledger, clock).is_empty() {
            debug!(item_key, "item not held, selection ignored");
        } else {
            outcomes.push(SceneOutcome::ItemSelected(command.item_key));
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.presenter.resize(viewport);
        self.dock = DockLayout::for_viewport(viewport);
    }

    fn on_timer(
        &mut self,
        handle: TimerHandle,
        scheduler: &mut dyn Scheduler,
        outcomes: &mut Vec<SceneOutcome>,
    ) {
        if self.presenter.on_timer(handle, scheduler) {
            return;
        }
        match self.gauge.on_timer(handle, scheduler) {
            GaugeTick::TimedOut => outcomes.push(SceneOutcome::UrgencyTimedOut),
            GaugeTick::Counting(_) => {}
            GaugeTick::Ignored => trace!(%handle, "stale timer tick"),
        }
    }
}
