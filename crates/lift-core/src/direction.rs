//! Travel direction and high-level cabin state.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Direction of travel for a cabin, or the direction a hall call wants.
///
/// Hall calls only ever carry `Up` or `Down`; `None` means a cabin has no
/// heading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
}

impl Direction {
    /// The reverse heading.  `None` stays `None`.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::None => "none",
            Direction::Up   => "up",
            Direction::Down => "down",
        })
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"   | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "none" | ""  => Ok(Direction::None),
            other => Err(CoreError::UnknownDirection(other.to_owned())),
        }
    }
}

/// High-level finite state of a cabin.
///
/// `Arriving` lasts exactly one tick: it is entered when the cabin reaches its
/// target and left on the next tick's target selection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CabinState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    Arriving,
}

impl fmt::Display for CabinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CabinState::Idle       => "idle",
            CabinState::MovingUp   => "moving_up",
            CabinState::MovingDown => "moving_down",
            CabinState::Arriving   => "arriving",
        })
    }
}
