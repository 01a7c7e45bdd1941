//! The `Dispatcher` — owns unassigned hall calls and routes them to cabins.

use std::collections::VecDeque;

use log::{debug, warn};

use lift_cabin::{CabinError, CabinObserver, CabinRegistry, Elevator, NoopCabinObserver};
use lift_core::{Call, Direction, Floor, Tick};

use crate::{DispatchResult, DispatchStrategy};

/// Dispatcher notifications, fired synchronously during `enqueue` and
/// scheduling passes.
///
/// A `DispatchObserver` is also a [`CabinObserver`]: the cabin notifications
/// caused by an assignment reach the same observer, before `on_assigned`.
pub trait DispatchObserver: CabinObserver {
    /// `call` joined the pending queue.
    fn on_enqueued(&mut self, _call: &Call) {}

    /// `call` left the queue and now belongs to `cabin`.
    fn on_assigned(&mut self, _call: &Call, _cabin: &dyn Elevator) {}

    /// The chosen cabin refused `call` (e.g. floor outside its range).  The
    /// call is dropped.
    fn on_rejected(&mut self, _call: &Call, _cabin: &dyn Elevator, _error: &CabinError) {}
}

impl DispatchObserver for NoopCabinObserver {}

/// FIFO queue of unassigned hall calls plus the strategy that places them.
///
/// The dispatcher does not own the cabins: every operation that may assign
/// takes the registry explicitly.
pub struct Dispatcher<S: DispatchStrategy> {
    strategy: S,
    pending:  VecDeque<Call>,
}

impl<S: DispatchStrategy> Dispatcher<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy, pending: VecDeque::new() }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Calls still waiting for a cabin, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Call> + '_ {
        self.pending.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Validate and enqueue a hall call made at `now`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::InvalidCall`][crate::DispatchError::InvalidCall] if
    /// `direction` is `None` or `floor` is negative.  Nothing is enqueued.
    pub fn enqueue_hall_call<E, O>(
        &mut self,
        floor:     Floor,
        direction: Direction,
        now:       Tick,
        registry:  &mut CabinRegistry<E>,
        observer:  &mut O,
    ) -> DispatchResult<()>
    where
        E: Elevator,
        O: DispatchObserver,
    {
        let call = Call::new(floor, direction, now)?;
        self.enqueue(call, registry, observer);
        Ok(())
    }

    /// Append `call`, fire `on_enqueued`, and run a scheduling pass.
    pub fn enqueue<E, O>(&mut self, call: Call, registry: &mut CabinRegistry<E>, observer: &mut O)
    where
        E: Elevator,
        O: DispatchObserver,
    {
        debug!("enqueued {call}");
        self.pending.push_back(call.clone());
        observer.on_enqueued(&call);
        self.try_assign(registry, observer);
    }

    /// Run one scheduling pass over the calls pending right now.
    ///
    /// Returns the number of calls that left the queue (assigned or
    /// rejected).  Calls with no eligible cabin go to the back of the queue.
    pub fn try_assign<E, O>(&mut self, registry: &mut CabinRegistry<E>, observer: &mut O) -> usize
    where
        E: Elevator,
        O: DispatchObserver,
    {
        let count = self.pending.len();
        let mut placed = 0;

        for _ in 0..count {
            let Some(call) = self.pending.pop_front() else {
                break;
            };

            let Some(cabin) = self
                .strategy
                .pick(&call, registry.cabins())
                .and_then(|id| registry.get_mut(id))
            else {
                self.pending.push_back(call);
                continue;
            };

            placed += 1;
            match cabin.assign_hall_call(&call, &mut *observer) {
                Ok(()) => {
                    debug!("assigned {call} to cabin {}", cabin.id());
                    observer.on_assigned(&call, &*cabin);
                }
                Err(e) => {
                    warn!("cabin {} rejected {call}: {e}", cabin.id());
                    observer.on_rejected(&call, &*cabin, &e);
                }
            }
        }

        if self.has_pending() {
            debug!("{} call(s) waiting for a cabin", self.pending.len());
        }
        placed
    }
}
