//! A renderer that draws frames as plain text.

use selim_core::geometry::{Point, Rect};
use selim_core::render::{Color, Renderer, Stroke, TextStyle};
use selim_scenes::domain::events::{CameraEffect, SceneOutcome};

/// Columns body text is wrapped to.
pub const TEXT_COLUMNS: usize = 72;

/// Collects one frame as lines of text. Images show as `[texture]` and
/// wrapped runs are word-wrapped to [`TEXT_COLUMNS`].
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame drawn so far.
    #[must_use]
    pub fn frame(&self) -> String {
        self.lines.join("\n")
    }
}

impl Renderer for TextRenderer {
    fn fill_rect(&mut self, _rect: Rect, _fill: Color, _alpha: f32, _stroke: Option<Stroke>) {}

    fn draw_image(&mut self, texture: &str, _at: Point, _scale: f32) {
        self.lines.push(format!("[{texture}]"));
    }

    fn draw_text(&mut self, text: &str, _at: Point, style: &TextStyle) {
        if style.wrap_width.is_some() {
            self.lines.extend(wrap(text, TEXT_COLUMNS));
        } else {
            self.lines.push(text.to_owned());
        }
    }
}

/// Greedy word wrap to `columns` characters. Words longer than a line
/// get a line of their own.
#[must_use]
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
        if !line.is_empty() && needed > columns {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// One-line description of an outcome for the terminal.
#[must_use]
pub fn describe(outcome: &SceneOutcome) -> String {
    match outcome {
        SceneOutcome::SceneEntered(scene) => format!("== {scene} =="),
        SceneOutcome::Feedback(text) => format!(">> {text}"),
        SceneOutcome::Camera(CameraEffect::Flash { color, .. }) => {
            format!("* flash {} *", color.to_hex())
        }
        SceneOutcome::Camera(CameraEffect::Shake { .. }) => "* the screen shakes *".to_owned(),
        SceneOutcome::ItemGranted(key) => format!("+ {key}"),
        SceneOutcome::ItemConsumed(key) => format!("- {key}"),
        SceneOutcome::ItemSelected(key) => format!("you hold up {key}"),
        SceneOutcome::PcRepaired(count) => format!("{count} machine(s) repaired"),
        SceneOutcome::UrgencyTimedOut => "Time is up! Windows 10 support has ended.".to_owned(),
    }
}
