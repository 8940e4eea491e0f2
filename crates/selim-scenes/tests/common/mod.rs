//! Shared helpers for scene integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use selim_content::application::loader::load_dialogs_from_path;
use selim_content::domain::format::ValidationMode;
use selim_core::geometry::Viewport;
use selim_core::scheduler::TimerQueue;
use selim_presenter::domain::aggregates::PresenterConfig;
use selim_scenes::application::adventure::Adventure;
use selim_scenes::domain::commands::Input;
use selim_scenes::domain::events::SceneOutcome;
use selim_test_support::{FixedClock, fixed_clock};

/// Upper bound on advances spent on one sequence before a test gives up.
const MAX_ADVANCES: usize = 64;

/// The dialog dataset the game ships with.
pub fn shipped_dialogs_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/data/dialogs.json")
}

/// An adventure over the shipped dataset, driven by a real timer queue.
pub struct Game {
    pub adventure: Adventure,
    pub timers: TimerQueue,
    pub clock: FixedClock,
}

impl Game {
    /// Loads the shipped dataset and begins the intro.
    pub fn start() -> (Self, Vec<SceneOutcome>) {
        let dialogs = load_dialogs_from_path(&shipped_dialogs_path(), ValidationMode::Strict)
            .unwrap()
            .into_set();
        let mut game = Self {
            adventure: Adventure::new(
                Some(dialogs),
                PresenterConfig::default(),
                Viewport::REFERENCE,
            ),
            timers: TimerQueue::new(),
            clock: fixed_clock(),
        };
        let outcomes = game.adventure.begin(&mut game.timers, &game.clock);
        (game, outcomes)
    }

    /// Feeds one input.
    pub fn send(&mut self, input: Input) -> Vec<SceneOutcome> {
        self.adventure
            .handle_input(input, &mut self.timers, &self.clock)
    }

    /// Lets `elapsed` pass, routing every fired timer back in.
    pub fn wait(&mut self, elapsed: Duration) -> Vec<SceneOutcome> {
        let fired = self.timers.advance(elapsed);
        let mut outcomes = Vec::new();
        for handle in fired {
            outcomes.extend(self.send(Input::TimerFired(handle)));
        }
        outcomes
    }

    /// Clicks through the running sequence until it is no longer the one
    /// on screen.
    pub fn finish_dialog(&mut self) -> Vec<SceneOutcome> {
        let key = self
            .adventure
            .engine()
            .active_sequence_key()
            .map(str::to_owned)
            .expect("a dialog should be running");
        let mut outcomes = Vec::new();
        for _ in 0..MAX_ADVANCES {
            outcomes.extend(self.send(Input::Advance));
            if self.adventure.engine().active_sequence_key() != Some(key.as_str()) {
                return outcomes;
            }
        }
        panic!("sequence {key} did not finish");
    }
}
