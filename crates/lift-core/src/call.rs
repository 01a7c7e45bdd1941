//! The `Call` data entity — a floor-originated request for a direction.

use std::fmt;

use crate::{CoreError, CoreResult, Direction, Floor, Tick};

/// An immutable hall call: "someone on `floor` wants to go `direction`".
///
/// Fields are private so that every `Call` in existence has passed
/// validation: `floor >= 0` and `direction` is `Up` or `Down`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Call {
    floor:      Floor,
    direction:  Direction,
    created_at: Tick,
}

impl Call {
    /// Validate and construct a call.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingDirection`] if `direction` is `None`,
    /// [`CoreError::NegativeFloor`] if `floor < 0`.
    pub fn new(floor: Floor, direction: Direction, created_at: Tick) -> CoreResult<Self> {
        if direction.is_none() {
            return Err(CoreError::MissingDirection);
        }
        if floor < 0 {
            return Err(CoreError::NegativeFloor(floor));
        }
        Ok(Self { floor, direction, created_at })
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Tick at which the call was made.  Recorded for fairness policies;
    /// no shipped strategy compares it.
    #[inline]
    pub fn created_at(&self) -> Tick {
        self.created_at
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call[{}, {}]", self.floor, self.direction)
    }
}
