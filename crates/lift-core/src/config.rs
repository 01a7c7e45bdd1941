//! Per-cabin tunables.

/// Construction parameters for one cabin.
///
/// Typically deserialized from the application's building description (with
/// the `serde` feature) and handed to `Cabin::new`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CabinConfig {
    /// Human-readable label, unique within a registry.
    pub id: String,

    /// Travel speed in distance units per second.  Default: 3.0.
    pub move_speed: f64,

    /// Vertical distance between consecutive floors.  Default: 3.0.
    pub floor_spacing: f64,

    /// Floor the cabin starts at.  Default: 0.
    pub start_floor: i32,

    /// Number of floors served (`0..floor_count`).  `None` means unbounded
    /// above; requests beyond the range are rejected.
    pub floor_count: Option<u32>,
}

impl CabinConfig {
    /// Default tunables with the given label.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Builder-style override of the starting floor.
    pub fn starting_at(mut self, floor: i32) -> Self {
        self.start_floor = floor;
        self
    }

    /// Builder-style override of the served floor range.
    pub fn with_floor_count(mut self, floors: u32) -> Self {
        self.floor_count = Some(floors);
        self
    }

    /// Vertical offset of `floor` in distance units.
    #[inline]
    pub fn floor_to_y(&self, floor: i32) -> f64 {
        floor as f64 * self.floor_spacing
    }
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            id:            "A".to_owned(),
            move_speed:    3.0,
            floor_spacing: 3.0,
            start_floor:   0,
            floor_count:   None,
        }
    }
}
