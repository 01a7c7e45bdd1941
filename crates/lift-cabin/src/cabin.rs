//! The `Cabin` finite-state machine.

use std::cmp::Ordering;

use log::{debug, trace};

use lift_core::{CabinConfig, CabinState, Call, Direction, Floor};

use crate::{CabinError, CabinObserver, CabinResult, Elevator, TargetQueues};

/// Distance (in floor-spacing units) within which a cabin counts as being at
/// its target.  Arrival snaps the position onto the exact floor offset, so the
/// error never accumulates across trips.
pub const ARRIVAL_TOLERANCE: f64 = 1e-4;

/// A single elevator cabin: position, direction, and its own stop ordering.
///
/// Invariants maintained by every public method:
///
/// - a floor is in at most one of {active target, up-queue, down-queue};
/// - `direction == None` whenever the cabin is `Idle` or `Arriving`;
/// - `state == Idle` only with no active target and both queues empty.
#[derive(Clone, Debug)]
pub struct Cabin {
    config:        CabinConfig,
    current_floor: Floor,
    /// Vertical offset in distance units.
    position:      f64,
    state:         CabinState,
    direction:     Direction,
    queues:        TargetQueues,
    active_target: Option<Floor>,
    full:          bool,
}

impl Cabin {
    /// Build an idle cabin parked at `config.start_floor`.
    ///
    /// # Errors
    ///
    /// [`CabinError::Config`] for a non-positive speed or floor spacing, or a
    /// starting floor outside the served range.
    pub fn new(config: CabinConfig) -> CabinResult<Self> {
        if !config.move_speed.is_finite() || config.move_speed <= 0.0 {
            return Err(CabinError::Config(format!(
                "cabin {:?}: move_speed must be positive, got {}",
                config.id, config.move_speed
            )));
        }
        if !config.floor_spacing.is_finite() || config.floor_spacing <= 0.0 {
            return Err(CabinError::Config(format!(
                "cabin {:?}: floor_spacing must be positive, got {}",
                config.id, config.floor_spacing
            )));
        }
        if config.floor_count == Some(0) {
            return Err(CabinError::Config(format!(
                "cabin {:?}: floor_count must be at least 1",
                config.id
            )));
        }
        check_floor(config.start_floor, config.floor_count).map_err(|e| {
            CabinError::Config(format!("cabin {:?}: start_floor: {e}", config.id))
        })?;

        let current_floor = config.start_floor;
        let position = config.floor_to_y(current_floor);
        Ok(Self {
            config,
            current_floor,
            position,
            state:         CabinState::Idle,
            direction:     Direction::None,
            queues:        TargetQueues::new(),
            active_target: None,
            full:          false,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &CabinConfig {
        &self.config
    }

    /// Vertical offset in distance units.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn active_target(&self) -> Option<Floor> {
        self.active_target
    }

    pub fn queues(&self) -> &TargetQueues {
        &self.queues
    }

    pub fn set_full(&mut self, full: bool) {
        self.full = full;
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the cabin by `dt` seconds.
    ///
    /// Picks a new target if none is active, moves towards it, and finalizes
    /// the arrival in the same tick the target is reached.
    pub fn tick(&mut self, dt: f64, observer: &mut dyn CabinObserver) {
        let target = match self.active_target {
            Some(t) => t,
            None => match self.pick_next_target() {
                Some(t) => t,
                None => {
                    self.state = CabinState::Idle;
                    self.direction = Direction::None;
                    return;
                }
            },
        };

        let target_y = self.config.floor_to_y(target);
        if self.at(target_y) {
            self.arrive(target, observer);
            return;
        }

        let current_y = self.position;
        let step = self.config.move_speed * dt * (target_y - current_y).signum();
        let mut new_y = current_y + step;
        if (step > 0.0 && new_y >= target_y) || (step < 0.0 && new_y <= target_y) {
            new_y = target_y;
        }
        self.position = new_y;

        if new_y < target_y {
            self.state = CabinState::MovingUp;
            self.direction = Direction::Up;
        } else if new_y > target_y {
            self.state = CabinState::MovingDown;
            self.direction = Direction::Down;
        }
        trace!("cabin {} at y={:.3} -> floor {target}", self.config.id, self.position);

        if self.at(target_y) {
            self.arrive(target, observer);
        }
    }

    /// Choose the next active target from the queues.
    ///
    /// Sets `direction` to the chosen queue's direction, or clears it when
    /// nothing is pending.  Arrival resets `direction` to `None`, so after a
    /// stop the nearer queue head decides.
    fn pick_next_target(&mut self) -> Option<Floor> {
        let chosen = match (self.queues.peek_up(), self.queues.peek_down()) {
            (Some(_), _) if self.direction == Direction::Up => Direction::Up,
            (_, Some(_)) if self.direction == Direction::Down => Direction::Down,
            (Some(_), None) => Direction::Up,
            (None, Some(_)) => Direction::Down,
            (Some(up), Some(down)) => {
                let d_up = (up - self.current_floor).abs();
                let d_down = (down - self.current_floor).abs();
                if d_up <= d_down { Direction::Up } else { Direction::Down }
            }
            (None, None) => {
                self.direction = Direction::None;
                return None;
            }
        };

        let target = match chosen {
            Direction::Up => self.queues.pop_up(),
            _ => self.queues.pop_down(),
        };
        self.direction = chosen;
        self.active_target = target;
        debug!(
            "cabin {} picked floor {:?} going {chosen} from floor {}",
            self.config.id, target, self.current_floor
        );
        target
    }

    fn arrive(&mut self, floor: Floor, observer: &mut dyn CabinObserver) {
        self.position = self.config.floor_to_y(floor);
        self.current_floor = floor;
        self.active_target = None;
        self.state = CabinState::Arriving;
        self.direction = Direction::None;
        debug!("cabin {} arrived at floor {floor}", self.config.id);
        observer.on_arrived(&*self, floor);
        observer.on_queue_changed(&*self);
    }

    #[inline]
    fn at(&self, target_y: f64) -> bool {
        (self.position - target_y).abs() <= ARRIVAL_TOLERANCE * self.config.floor_spacing
    }

    // ── Target insertion ──────────────────────────────────────────────────

    /// Route `floor` into the right queue, or arrive on the spot.
    fn enqueue_target(&mut self, floor: Floor, observer: &mut dyn CabinObserver) -> CabinResult<()> {
        check_floor(floor, self.config.floor_count)?;

        if self.active_target.is_none() && floor == self.current_floor {
            // Stationary at the requested floor.
            self.state = CabinState::Arriving;
            self.direction = Direction::None;
            debug!("cabin {} already at floor {floor}", self.config.id);
            observer.on_arrived(&*self, floor);
            observer.on_queue_changed(&*self);
            return Ok(());
        }

        if self.active_target == Some(floor) || self.queues.contains(floor) {
            return Ok(());
        }

        let queue = match floor.cmp(&self.current_floor) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            // Departed from this floor: queue it behind the travel direction.
            Ordering::Equal => self.direction.opposite(),
        };
        let upward = queue == Direction::Up;
        if upward {
            self.queues.push_up(floor);
        } else {
            self.queues.push_down(floor);
        }
        debug!(
            "cabin {} queued floor {floor} ({}), pending {:?}",
            self.config.id,
            if upward { "up" } else { "down" },
            self.targets()
        );
        observer.on_queue_changed(&*self);
        Ok(())
    }
}

impl Elevator for Cabin {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn current_floor(&self) -> Floor {
        self.current_floor
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn state(&self) -> CabinState {
        self.state
    }

    fn is_busy(&self) -> bool {
        self.active_target.is_some() || !self.queues.is_empty()
    }

    fn is_full(&self) -> bool {
        self.full
    }

    fn assign_hall_call(&mut self, call: &Call, observer: &mut dyn CabinObserver) -> CabinResult<()> {
        debug!("cabin {} assigned {call}", self.config.id);
        self.enqueue_target(call.floor(), observer)
    }

    fn accept_car_call(&mut self, floor: Floor, observer: &mut dyn CabinObserver) -> CabinResult<()> {
        self.enqueue_target(floor, observer)
    }

    fn targets(&self) -> Vec<Floor> {
        self.active_target.into_iter().chain(self.queues.iter()).collect()
    }

    fn pending_count(&self) -> usize {
        self.active_target.map_or(0, |_| 1) + self.queues.len()
    }
}

/// Reject floors below zero or beyond `floor_count`.
fn check_floor(floor: Floor, floor_count: Option<u32>) -> CabinResult<()> {
    if floor < 0 {
        return Err(CabinError::NegativeFloor(floor));
    }
    match floor_count {
        Some(n) if floor as u32 >= n => Err(CabinError::FloorOutOfRange { floor, floor_count: n }),
        _ => Ok(()),
    }
}
