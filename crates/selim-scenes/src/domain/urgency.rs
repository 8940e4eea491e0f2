//! The end-of-support countdown shown during play.

use std::time::Duration;

use selim_core::geometry::{Point, Rect, Viewport};
use selim_core::render::{Color, Renderer, Stroke, TextStyle};
use selim_core::scheduler::{Scheduler, TimerHandle, TimerSpec};
use tracing::{debug, info};

/// Seconds on the clock when a scene starts.
pub const URGENCY_SECONDS: u32 = 300;

const TICK: Duration = Duration::from_secs(1);
const GAUGE_WIDTH: f32 = 200.0;
const GAUGE_HEIGHT: f32 = 60.0;
const GAUGE_RIGHT_OFFSET: f32 = 120.0;
const GAUGE_TOP_OFFSET: f32 = 50.0;
const GAUGE_TITLE: &str = "WIN10 END OF SUPPORT";

/// What a countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeTick {
    /// The tick was not for this gauge.
    Ignored,
    /// One second elapsed; this many remain.
    Counting(u32),
    /// Time ran out. Reported once, after which the gauge stops.
    TimedOut,
}

/// A countdown ticking once per second. The tick that finds zero seconds
/// left reports [`GaugeTick::TimedOut`] and cancels the timer.
#[derive(Debug)]
pub struct UrgencyGauge {
    seconds_left: u32,
    timer: Option<TimerHandle>,
    timed_out: bool,
}

impl UrgencyGauge {
    /// Creates a full, stopped gauge.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seconds_left: URGENCY_SECONDS,
            timer: None,
            timed_out: false,
        }
    }

    /// Refills the gauge and starts counting down.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        self.stop(scheduler);
        self.seconds_left = URGENCY_SECONDS;
        self.timed_out = false;
        self.timer = Some(scheduler.schedule(TimerSpec::looping(TICK)));
        debug!(seconds = URGENCY_SECONDS, "urgency countdown started");
    }

    /// Stops counting without touching the remaining time.
    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Routes a fired timer to the gauge.
    pub fn on_timer(&mut self, handle: TimerHandle, scheduler: &mut dyn Scheduler) -> GaugeTick {
        if self.timer != Some(handle) {
            return GaugeTick::Ignored;
        }
        if self.seconds_left > 0 {
            self.seconds_left -= 1;
            return GaugeTick::Counting(self.seconds_left);
        }
        self.stop(scheduler);
        self.timed_out = true;
        info!("urgency countdown expired");
        GaugeTick::TimedOut
    }

    /// Seconds remaining.
    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    /// Returns true while the countdown timer runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns true once time has run out.
    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    /// The countdown timer, while running.
    #[must_use]
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }

    /// Draws the gauge in the top-right corner of `viewport`.
    pub fn render(&self, viewport: Viewport, renderer: &mut dyn Renderer) {
        let center = Point::new(viewport.width - GAUGE_RIGHT_OFFSET, GAUGE_TOP_OFFSET);
        let panel = Rect::centered(center, GAUGE_WIDTH, GAUGE_HEIGHT);
        renderer.fill_rect(
            panel,
            Color::CRIMSON,
            0.8,
            Some(Stroke {
                width: 2.0,
                color: Color::RED,
            }),
        );
        renderer.draw_text(
            GAUGE_TITLE,
            Point::new(panel.left() + 10.0, panel.top() + 6.0),
            &TextStyle {
                font_size: 12.0,
                color: Color::WHITE,
                bold: true,
                wrap_width: None,
            },
        );
        renderer.draw_text(
            &self.label(),
            Point::new(panel.left() + 10.0, panel.top() + 26.0),
            &TextStyle {
                font_size: 24.0,
                color: if self.timed_out {
                    Color::RED
                } else {
                    Color::WHITE
                },
                bold: true,
                wrap_width: None,
            },
        );
    }
}

impl Default for UrgencyGauge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use selim_core::scheduler::{Repeat, TimerQueue};
    use selim_test_support::{ManualScheduler, RecordingRenderer};

    use super::*;

    #[test]
    fn test_start_schedules_one_second_loop() {
        // Arrange
        let mut scheduler = ManualScheduler::new();
        let mut gauge = UrgencyGauge::new();

        // Act
        gauge.start(&mut scheduler);

        // Assert
        let handle = gauge.timer().unwrap();
        let spec = scheduler.spec(handle).unwrap();
        assert_eq!(spec.delay, Duration::from_secs(1));
        assert_eq!(spec.repeat, Repeat::Forever);
        assert_eq!(gauge.label(), "05:00");
    }

    #[test]
    fn test_tick_counts_down_and_formats_label() {
        let mut scheduler = ManualScheduler::new();
        let mut gauge = UrgencyGauge::new();
        gauge.start(&mut scheduler);
        let handle = gauge.timer().unwrap();

        let tick = gauge.on_timer(handle, &mut scheduler);

        assert_eq!(tick, GaugeTick::Counting(299));
        assert_eq!(gauge.label(), "04:59");
    }

    #[test]
    fn test_foreign_tick_is_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut gauge = UrgencyGauge::new();
        gauge.start(&mut scheduler);

        let tick = gauge.on_timer(TimerHandle(999), &mut scheduler);

        assert_eq!(tick, GaugeTick::Ignored);
        assert_eq!(gauge.seconds_left(), URGENCY_SECONDS);
    }

    #[test]
    fn test_times_out_once_then_stops() {
        // Arrange
        let mut queue = TimerQueue::new();
        let mut gauge = UrgencyGauge::new();
        gauge.start(&mut queue);
        let mut timeouts = 0;

        // Act
        for _ in 0..400 {
            for handle in queue.advance(Duration::from_secs(1)) {
                if gauge.on_timer(handle, &mut queue) == GaugeTick::TimedOut {
                    timeouts += 1;
                }
            }
        }

        // Assert
        assert_eq!(timeouts, 1);
        assert!(gauge.is_timed_out());
        assert!(!gauge.is_running());
        assert!(queue.is_empty());
        assert_eq!(gauge.label(), "00:00");
    }

    #[test]
    fn test_restart_refills_and_replaces_timer() {
        // Arrange
        let mut scheduler = ManualScheduler::new();
        let mut gauge = UrgencyGauge::new();
        gauge.start(&mut scheduler);
        let first = gauge.timer().unwrap();
        gauge.on_timer(first, &mut scheduler);

        // Act
        gauge.start(&mut scheduler);

        // Assert
        assert_eq!(scheduler.cancelled(), &[first]);
        assert_ne!(gauge.timer(), Some(first));
        assert_eq!(gauge.seconds_left(), URGENCY_SECONDS);
        assert_eq!(gauge.on_timer(first, &mut scheduler), GaugeTick::Ignored);
    }

    #[test]
    fn test_render_shows_title_and_time() {
        let gauge = UrgencyGauge::new();
        let mut renderer = RecordingRenderer::new();

        gauge.render(Viewport::REFERENCE, &mut renderer);

        assert_eq!(renderer.texts(), vec![GAUGE_TITLE, "05:00"]);
    }
}
