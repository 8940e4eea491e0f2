//! Portrait texture naming.
//!
//! Talking portraits ship as two textures, `<base>1` and `<base>2`. Dialog
//! data may name either frame or the bare base.

use std::fmt;

/// Which of the two talk frames is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortraitFrame {
    /// Resting frame, also shown whenever the portrait is idle.
    #[default]
    One,
    /// Alternate frame.
    Two,
}

impl PortraitFrame {
    /// The other frame.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for PortraitFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

/// Strips one trailing `1` or `2` from a portrait key.
#[must_use]
pub fn portrait_base_key(portrait: &str) -> &str {
    portrait
        .strip_suffix('1')
        .or_else(|| portrait.strip_suffix('2'))
        .unwrap_or(portrait)
}

/// Texture key for `base` at `frame`.
#[must_use]
pub fn portrait_texture(base: &str, frame: PortraitFrame) -> String {
    format!("{base}{frame}")
}
