//! Aggregate roots for the Typed-Text Presentation context.

use std::time::Duration;

use selim_core::geometry::Viewport;
use selim_core::scheduler::{Scheduler, TimerHandle, TimerSpec};
use selim_dialog::domain::model::DialogNode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::layout::DialogLayout;
use super::portrait::{PortraitFrame, portrait_base_key, portrait_texture};

/// Animation cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Time between two revealed characters.
    pub char_delay: Duration,
    /// Time between two portrait frame swaps.
    pub portrait_frame_delay: Duration,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(50),
            portrait_frame_delay: Duration::from_millis(150),
        }
    }
}

/// The dialog box. Reveals a node's text one character per reveal tick
/// while toggling the speaker's portrait between its two frames.
///
/// Owns exactly two timers, the reveal ticker and the talk ticker. Each is
/// cancelled before being rescheduled, and ticks for any other handle are
/// ignored, so a stale tick can never touch the displayed text.
#[derive(Debug)]
pub struct DialogPresenter {
    config: PresenterConfig,
    layout: DialogLayout,
    visible: bool,
    is_typing: bool,
    speaker: String,
    full_text: String,
    /// Byte offset of the revealed prefix of `full_text`.
    revealed_bytes: usize,
    /// Number of characters revealed.
    revealed_len: usize,
    portrait_base_key: String,
    portrait_frame: PortraitFrame,
    portrait_visible: bool,
    typing_timer: Option<TimerHandle>,
    portrait_timer: Option<TimerHandle>,
}

impl DialogPresenter {
    /// Creates a hidden presenter laid out for `viewport`.
    #[must_use]
    pub fn new(config: PresenterConfig, viewport: Viewport) -> Self {
        Self {
            config,
            layout: DialogLayout::for_viewport(viewport),
            visible: false,
            is_typing: false,
            speaker: String::new(),
            full_text: String::new(),
            revealed_bytes: 0,
            revealed_len: 0,
            portrait_base_key: String::new(),
            portrait_frame: PortraitFrame::One,
            portrait_visible: false,
            typing_timer: None,
            portrait_timer: None,
        }
    }

    /// Shows `node` and starts revealing its text from the first character.
    pub fn show_dialog(&mut self, node: &DialogNode, scheduler: &mut dyn Scheduler) {
        self.visible = true;
        self.speaker.clone_from(&node.speaker);
        self.full_text.clone_from(&node.text);
        self.revealed_bytes = 0;
        self.revealed_len = 0;

        if node.has_portrait() {
            self.portrait_base_key = portrait_base_key(&node.portrait).to_owned();
            self.portrait_frame = PortraitFrame::One;
            self.portrait_visible = true;
            self.start_portrait_animation(scheduler);
        } else {
            self.portrait_visible = false;
            self.stop_portrait_animation(scheduler);
        }

        debug!(speaker = %node.speaker, node_id = node.id, "showing dialog node");
        self.start_typing(scheduler);
    }

    /// Reveals the whole text immediately and stops the talk animation.
    /// Safe to call at any time, any number of times.
    pub fn complete_typing(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.typing_timer.take() {
            scheduler.cancel(handle);
        }
        self.revealed_bytes = self.full_text.len();
        self.revealed_len = self.full_text.chars().count();
        self.is_typing = false;
        self.stop_portrait_animation(scheduler);
        if self.portrait_visible {
            self.portrait_frame = PortraitFrame::One;
        }
    }

    /// Hides the box and cancels both timers. Text and speaker are kept
    /// until the next [`show_dialog`](Self::show_dialog).
    pub fn hide_dialog(&mut self, scheduler: &mut dyn Scheduler) {
        self.visible = false;
        self.stop_portrait_animation(scheduler);
        if let Some(handle) = self.typing_timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Routes a fired timer. Returns `false` if the handle is not one of
    /// this presenter's live timers.
    pub fn on_timer(&mut self, handle: TimerHandle, scheduler: &mut dyn Scheduler) -> bool {
        if self.typing_timer == Some(handle) {
            self.reveal_next_char(scheduler);
            true
        } else if self.portrait_timer == Some(handle) {
            self.portrait_frame = self.portrait_frame.toggled();
            trace!(frame = %self.portrait_frame, "portrait frame swapped");
            true
        } else {
            false
        }
    }

    /// Recomputes geometry for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = DialogLayout::for_viewport(viewport);
    }

    /// Returns true while the box is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true while a reveal is in progress.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Speaker of the last shown node.
    #[must_use]
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Complete text of the last shown node.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The revealed prefix of the text.
    #[must_use]
    pub fn displayed_text(&self) -> &str {
        &self.full_text[..self.revealed_bytes]
    }

    /// Number of characters revealed.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    /// Texture to draw for the portrait, `None` when it is hidden.
    #[must_use]
    pub fn portrait_texture(&self) -> Option<String> {
        self.portrait_visible
            .then(|| portrait_texture(&self.portrait_base_key, self.portrait_frame))
    }

    /// Base key of the last portrait shown.
    #[must_use]
    pub fn portrait_base_key(&self) -> &str {
        &self.portrait_base_key
    }

    /// Frame currently selected.
    #[must_use]
    pub fn portrait_frame(&self) -> PortraitFrame {
        self.portrait_frame
    }

    /// Current geometry.
    #[must_use]
    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    /// Handle of the running reveal ticker.
    #[must_use]
    pub fn typing_timer(&self) -> Option<TimerHandle> {
        self.typing_timer
    }

    /// Handle of the running talk ticker.
    #[must_use]
    pub fn portrait_timer(&self) -> Option<TimerHandle> {
        self.portrait_timer
    }

    fn start_typing(&mut self, scheduler: &mut dyn Scheduler) {
        self.is_typing = true;
        if let Some(handle) = self.typing_timer.take() {
            scheduler.cancel(handle);
        }

        let total = self.full_text.chars().count();
        if total == 0 {
            self.complete_typing(scheduler);
            return;
        }

        let ticks = u32::try_from(total).unwrap_or(u32::MAX);
        self.typing_timer = Some(scheduler.schedule(TimerSpec::repeating(
            self.config.char_delay,
            ticks,
        )));
    }

    fn reveal_next_char(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(next) = self.full_text[self.revealed_bytes..].chars().next() {
            self.revealed_bytes += next.len_utf8();
            self.revealed_len += 1;
        }
        if self.revealed_bytes >= self.full_text.len() {
            self.complete_typing(scheduler);
        }
    }

    fn start_portrait_animation(&mut self, scheduler: &mut dyn Scheduler) {
        self.stop_portrait_animation(scheduler);
        self.portrait_frame = PortraitFrame::One;
        self.portrait_timer = Some(
            scheduler.schedule(TimerSpec::looping(self.config.portrait_frame_delay)),
        );
    }

    fn stop_portrait_animation(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.portrait_timer.take() {
            scheduler.cancel(handle);
        }
    }
}

impl Default for DialogPresenter {
    fn default() -> Self {
        Self::new(PresenterConfig::default(), Viewport::REFERENCE)
    }
}
