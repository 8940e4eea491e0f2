//! Line commands typed at the terminal.

use std::str::FromStr;

use selim_core::geometry::Viewport;
use selim_scenes::domain::commands::Input;
use selim_scenes::domain::scene::SceneObject;
use thiserror::Error;

use crate::config::parse_viewport;

/// One line of player input.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Empty line or `next`.
    Advance,
    /// `click <object>`.
    Click(SceneObject),
    /// `use <item>`.
    Use(String),
    /// `look`: print the current state.
    Look,
    /// `resize WxH`.
    Resize(Viewport),
    /// `quit`.
    Quit,
}

impl PlayerCommand {
    /// The adventure input this command stands for, if any.
    #[must_use]
    pub fn into_input(self) -> Option<Input> {
        match self {
            Self::Advance => Some(Input::Advance),
            Self::Click(object) => Some(Input::Interact(object)),
            Self::Use(item_key) => Some(Input::SelectItem(item_key)),
            Self::Resize(viewport) => Some(Input::Resize(viewport)),
            Self::Look | Self::Quit => None,
        }
    }
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The verb is not known.
    #[error("unknown command: {0}")]
    Unknown(String),
    /// The verb needs an argument.
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    /// The argument could not be understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FromStr for PlayerCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Advance);
        };
        let argument = words.next();

        match (verb.to_ascii_lowercase().as_str(), argument) {
            ("next" | "n", _) => Ok(Self::Advance),
            ("look" | "l", _) => Ok(Self::Look),
            ("quit" | "q" | "exit", _) => Ok(Self::Quit),
            ("click", Some(name)) => name
                .parse()
                .map(Self::Click)
                .map_err(|e| CommandError::InvalidArgument(e.to_string())),
            ("use", Some(item)) => Ok(Self::Use(item.to_owned())),
            ("resize", Some(size)) => parse_viewport(size)
                .map(Self::Resize)
                .map_err(|e| CommandError::InvalidArgument(e.to_string())),
            ("click", None) => Err(CommandError::MissingArgument("click")),
            ("use", None) => Err(CommandError::MissingArgument("use")),
            ("resize", None) => Err(CommandError::MissingArgument("resize")),
            (other, _) => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_advances() {
        assert_eq!("".parse::<PlayerCommand>(), Ok(PlayerCommand::Advance));
        assert_eq!("   ".parse::<PlayerCommand>(), Ok(PlayerCommand::Advance));
        assert_eq!("next".parse::<PlayerCommand>(), Ok(PlayerCommand::Advance));
    }

    #[test]
    fn test_click_parses_scene_object() {
        assert_eq!(
            "click pc2".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Click(SceneObject::Pc(2)))
        );
        assert_eq!(
            "CLICK old_pc".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Click(SceneObject::OldPc))
        );
    }

    #[test]
    fn test_use_and_resize_carry_arguments() {
        assert_eq!(
            "use item_usb".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Use("item_usb".to_owned()))
        );
        assert_eq!(
            "resize 1024x512".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Resize(Viewport::new(1024.0, 512.0)))
        );
    }

    #[test]
    fn test_bad_lines_are_reported() {
        assert_eq!(
            "dance".parse::<PlayerCommand>(),
            Err(CommandError::Unknown("dance".to_owned()))
        );
        assert_eq!(
            "click".parse::<PlayerCommand>(),
            Err(CommandError::MissingArgument("click"))
        );
        assert!(matches!(
            "click dragon".parse::<PlayerCommand>(),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(matches!(
            "resize big".parse::<PlayerCommand>(),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_look_and_quit_are_not_inputs() {
        assert_eq!(PlayerCommand::Look.into_input(), None);
        assert_eq!(PlayerCommand::Quit.into_input(), None);
        assert_eq!(
            PlayerCommand::Click(SceneObject::Firewall).into_input(),
            Some(Input::Interact(SceneObject::Firewall))
        );
    }
}
