//! The scenes of the adventure and what can be clicked in them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item granted by the cemetery cupboard.
pub const ITEM_USB: &str = "item_usb";
/// Item stocked in the workshop.
pub const ITEM_SSD: &str = "item_ssd";
/// Item stocked in the server room.
pub const ITEM_TCHAP: &str = "item_tchap";

/// Number of broken machines in the workshop.
pub const WORKSHOP_PC_COUNT: u8 = 3;

/// A stage of the adventure, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Opening narration.
    Intro,
    /// The computer graveyard.
    Cemetery,
    /// The school workshop.
    Workshop,
    /// The final confrontation.
    ServerRoom,
    /// Credits; nothing left to play.
    Finished,
}

impl SceneId {
    /// The scene that follows this one. `Finished` is its own successor.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Intro => Self::Cemetery,
            Self::Cemetery => Self::Workshop,
            Self::Workshop => Self::ServerRoom,
            Self::ServerRoom | Self::Finished => Self::Finished,
        }
    }

    /// Sequence played on entering the scene.
    #[must_use]
    pub fn intro_sequence(self) -> Option<&'static str> {
        match self {
            Self::Intro => Some("scene0_intro"),
            Self::Cemetery => Some("scene1_intro"),
            Self::Workshop => Some("scene2_intro"),
            Self::ServerRoom => Some("scene3_intro"),
            Self::Finished => None,
        }
    }

    /// Item placed in the dock on entry.
    #[must_use]
    pub fn stocked_item(self) -> Option<&'static str> {
        match self {
            Self::Workshop => Some(ITEM_SSD),
            Self::ServerRoom => Some(ITEM_TCHAP),
            Self::Intro | Self::Cemetery | Self::Finished => None,
        }
    }

    /// Background texture, if the scene has one.
    #[must_use]
    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Cemetery => Some("bg_cimetiere"),
            Self::Workshop => Some("bg_atelier"),
            Self::ServerRoom => Some("bg_serveur"),
            Self::Intro | Self::Finished => None,
        }
    }

    /// Returns true for the playable scenes, which show the dock and the
    /// urgency gauge.
    #[must_use]
    pub fn has_hud(self) -> bool {
        matches!(self, Self::Cemetery | Self::Workshop | Self::ServerRoom)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Cemetery => "cemetery",
            Self::Workshop => "workshop",
            Self::ServerRoom => "server_room",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Something the player can click in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneObject {
    /// The sceptical professor in the cemetery.
    Professor,
    /// The cemetery cupboard hiding the USB key.
    Cupboard,
    /// The dying machine in the cemetery.
    OldPc,
    /// The student in the workshop.
    Student,
    /// One of the workshop machines, numbered from 1.
    Pc(u8),
    /// The server room boss.
    Firewall,
}

impl SceneObject {
    /// Every object, in scene order.
    pub const ALL: [Self; 8] = [
        Self::Professor,
        Self::Cupboard,
        Self::OldPc,
        Self::Student,
        Self::Pc(1),
        Self::Pc(2),
        Self::Pc(3),
        Self::Firewall,
    ];

    /// The scene the object lives in.
    #[must_use]
    pub fn scene(self) -> SceneId {
        match self {
            Self::Professor | Self::Cupboard | Self::OldPc => SceneId::Cemetery,
            Self::Student | Self::Pc(_) => SceneId::Workshop,
            Self::Firewall => SceneId::ServerRoom,
        }
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Professor => f.write_str("professor"),
            Self::Cupboard => f.write_str("cupboard"),
            Self::OldPc => f.write_str("old_pc"),
            Self::Student => f.write_str("student"),
            Self::Pc(n) => write!(f, "pc{n}"),
            Self::Firewall => f.write_str("firewall"),
        }
    }
}

/// A name that matches no scene object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene object: {0}")]
pub struct UnknownObject(pub String);

impl FromStr for SceneObject {
    type Err = UnknownObject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professor" => Ok(Self::Professor),
            "cupboard" => Ok(Self::Cupboard),
            "old_pc" => Ok(Self::OldPc),
            "student" => Ok(Self::Student),
            "firewall" => Ok(Self::Firewall),
            other => other
                .strip_prefix("pc")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=WORKSHOP_PC_COUNT).contains(n))
                .map(Self::Pc)
                .ok_or_else(|| UnknownObject(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenes_advance_in_play_order() {
        let mut scene = SceneId::Intro;
        let mut order = vec![scene];
        while scene != SceneId::Finished {
            scene = scene.next();
            order.push(scene);
        }

        assert_eq!(
            order,
            vec![
                SceneId::Intro,
                SceneId::Cemetery,
                SceneId::Workshop,
                SceneId::ServerRoom,
                SceneId::Finished,
            ]
        );
        assert_eq!(SceneId::Finished.next(), SceneId::Finished);
    }

    #[test]
    fn test_only_playable_scenes_have_hud() {
        assert!(!SceneId::Intro.has_hud());
        assert!(SceneId::Cemetery.has_hud());
        assert!(SceneId::ServerRoom.has_hud());
        assert!(!SceneId::Finished.has_hud());
    }

    #[test]
    fn test_object_names_round_trip() {
        for object in SceneObject::ALL {
            let parsed: SceneObject = object.to_string().parse().unwrap();
            assert_eq!(parsed, object);
        }
    }

    #[test]
    fn test_out_of_range_pc_is_unknown() {
        assert_eq!(
            "pc4".parse::<SceneObject>(),
            Err(UnknownObject("pc4".to_owned()))
        );
        assert!("pc0".parse::<SceneObject>().is_err());
        assert!("wizard".parse::<SceneObject>().is_err());
    }
}
