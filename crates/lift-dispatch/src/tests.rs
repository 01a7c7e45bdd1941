//! Unit tests for lift-dispatch.

use std::cell::Cell;

use lift_cabin::{Cabin, CabinError, CabinObserver, CabinRegistry, CabinResult, Elevator};
use lift_core::{CabinConfig, CabinId, CabinState, Call, CoreError, Direction, Floor, Tick};

use crate::{
    DispatchError, DispatchObserver, DispatchStrategy, Dispatcher, LeastLoaded, NearestByDistance,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cabin(id: &str, floor: Floor) -> Cabin {
    Cabin::new(CabinConfig::new(id).starting_at(floor)).unwrap()
}

fn call(floor: Floor, direction: Direction) -> Call {
    Call::new(floor, direction, Tick(0)).unwrap()
}

/// Cabin at `floor` already travelling upward towards `target`.
fn moving_up(id: &str, floor: Floor, target: Floor) -> Cabin {
    let mut c = cabin(id, floor);
    let mut rec = Recorder::default();
    c.accept_car_call(target, &mut rec).unwrap();
    c.tick(0.1, &mut rec);
    assert_eq!(c.direction(), Direction::Up);
    assert_eq!(c.current_floor(), floor);
    c
}

/// Records every notification as a short string, in firing order.
#[derive(Default)]
struct Recorder {
    log: Vec<String>,
}

impl Recorder {
    fn count(&self, prefix: &str) -> usize {
        self.log.iter().filter(|e| e.starts_with(prefix)).count()
    }
}

impl CabinObserver for Recorder {
    fn on_queue_changed(&mut self, cabin: &dyn Elevator) {
        self.log.push(format!("queue {}", cabin.id()));
    }

    fn on_arrived(&mut self, cabin: &dyn Elevator, floor: Floor) {
        self.log.push(format!("arrived {} {floor}", cabin.id()));
    }
}

impl DispatchObserver for Recorder {
    fn on_enqueued(&mut self, call: &Call) {
        self.log.push(format!("enqueued {}", call.floor()));
    }

    fn on_assigned(&mut self, call: &Call, cabin: &dyn Elevator) {
        self.log.push(format!("assigned {} {}", call.floor(), cabin.id()));
    }

    fn on_rejected(&mut self, call: &Call, cabin: &dyn Elevator, _error: &CabinError) {
        self.log.push(format!("rejected {} {}", call.floor(), cabin.id()));
    }
}

/// Minimal `Elevator` with directly settable state.
struct StubCabin {
    id:        &'static str,
    floor:     Floor,
    direction: Direction,
    full:      bool,
    load:      usize,
    received:  Vec<Floor>,
}

impl StubCabin {
    fn new(id: &'static str, floor: Floor) -> Self {
        Self { id, floor, direction: Direction::None, full: false, load: 0, received: vec![] }
    }
}

impl Elevator for StubCabin {
    fn id(&self) -> &str { self.id }
    fn current_floor(&self) -> Floor { self.floor }
    fn direction(&self) -> Direction { self.direction }
    fn state(&self) -> CabinState { CabinState::Idle }
    fn is_busy(&self) -> bool { self.load > 0 }
    fn is_full(&self) -> bool { self.full }

    fn assign_hall_call(&mut self, call: &Call, observer: &mut dyn CabinObserver) -> CabinResult<()> {
        self.accept_car_call(call.floor(), observer)
    }

    fn accept_car_call(&mut self, floor: Floor, observer: &mut dyn CabinObserver) -> CabinResult<()> {
        self.received.push(floor);
        self.load += 1;
        observer.on_queue_changed(&*self);
        Ok(())
    }

    fn targets(&self) -> Vec<Floor> {
        self.received.clone()
    }

    fn pending_count(&self) -> usize {
        self.load
    }
}

/// Strategy that never finds a cabin and counts how often it was asked.
#[derive(Default)]
struct CountingRefusal {
    picks: Cell<usize>,
}

impl DispatchStrategy for CountingRefusal {
    fn pick<E: Elevator>(&self, _call: &Call, _cabins: &[E]) -> Option<CabinId> {
        self.picks.set(self.picks.get() + 1);
        None
    }
}

// ── NearestByDistance ─────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use super::*;

    #[test]
    fn defaults() {
        let s = NearestByDistance::default();
        assert_eq!(s.floor_travel_time, 0.8);
        assert_eq!(s.on_the_way_bonus, 0.5);
        assert_eq!(s.full_penalty, 2.0);
    }

    #[test]
    fn closer_cabin_wins() {
        let s = NearestByDistance::default();
        let cabins = [cabin("A", 0), cabin("B", 10)];
        let c = call(1, Direction::Up);
        assert!((s.score(&c, &cabins[0]) - 0.8).abs() < 1e-9);
        assert!((s.score(&c, &cabins[1]) - 7.2).abs() < 1e-9);
        assert_eq!(s.pick(&c, &cabins), Some(CabinId(0)));
    }

    #[test]
    fn on_the_way_bonus_breaks_equal_eta() {
        let s = NearestByDistance::default();
        // Idle cabin first so that registration order alone would pick it.
        let cabins = [cabin("B", 3), moving_up("A", 3, 8)];
        let c = call(5, Direction::Up);
        assert!((s.score(&c, &cabins[0]) - 1.6).abs() < 1e-9);
        assert!((s.score(&c, &cabins[1]) - 1.1).abs() < 1e-9);
        assert_eq!(s.pick(&c, &cabins), Some(CabinId(1)));
    }

    #[test]
    fn no_bonus_for_call_behind_cabin() {
        let s = NearestByDistance::default();
        let mut up = StubCabin::new("A", 3);
        up.direction = Direction::Up;
        let c = call(1, Direction::Up);
        assert!((s.score(&c, &up) - 1.6).abs() < 1e-9);

        let mut down = StubCabin::new("B", 3);
        down.direction = Direction::Down;
        let c = call(1, Direction::Down);
        assert!((s.score(&c, &down) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn no_bonus_for_opposite_direction() {
        let s = NearestByDistance::default();
        let mut stub = StubCabin::new("A", 3);
        stub.direction = Direction::Down;
        let c = call(5, Direction::Up);
        assert!((s.score(&c, &stub) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn full_cabin_penalized() {
        let s = NearestByDistance::default();
        let mut full = cabin("A", 2);
        full.set_full(true);
        let cabins = [full, cabin("B", 2)];
        let c = call(4, Direction::Down);
        assert!((s.score(&c, &cabins[0]) - 3.6).abs() < 1e-9);
        assert_eq!(s.pick(&c, &cabins), Some(CabinId(1)));
    }

    #[test]
    fn first_cabin_wins_ties() {
        let s = NearestByDistance::default();
        let cabins = [cabin("A", 2), cabin("B", 6)];
        assert_eq!(s.pick(&call(4, Direction::Up), &cabins), Some(CabinId(0)));
    }

    #[test]
    fn empty_list_picks_nothing() {
        let s = NearestByDistance::default();
        let cabins: [Cabin; 0] = [];
        assert_eq!(s.pick(&call(4, Direction::Up), &cabins), None);
    }

    #[test]
    fn tunables_change_outcome() {
        // A large bonus lets a farther cabin that is on its way win.
        let s = NearestByDistance { on_the_way_bonus: 5.0, ..NearestByDistance::default() };
        let mut far = StubCabin::new("far", 0);
        far.direction = Direction::Up;
        let near = StubCabin::new("near", 7);
        let cabins = [near, far];
        assert_eq!(s.pick(&call(5, Direction::Up), &cabins), Some(CabinId(1)));
    }
}

// ── LeastLoaded ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod least_loaded {
    use super::*;

    #[test]
    fn fewest_pending_wins() {
        let mut busy = StubCabin::new("A", 0);
        busy.load = 2;
        let idle = StubCabin::new("B", 9);
        let cabins = [busy, idle];
        assert_eq!(LeastLoaded::default().pick(&call(1, Direction::Up), &cabins), Some(CabinId(1)));
    }

    #[test]
    fn equal_load_falls_back_to_eta() {
        let cabins = [StubCabin::new("A", 9), StubCabin::new("B", 2)];
        assert_eq!(LeastLoaded::default().pick(&call(1, Direction::Up), &cabins), Some(CabinId(1)));
    }

    #[test]
    fn full_tie_goes_to_first() {
        let cabins = [StubCabin::new("A", 3), StubCabin::new("B", 3)];
        assert_eq!(LeastLoaded::default().pick(&call(1, Direction::Up), &cabins), Some(CabinId(0)));
    }

    #[test]
    fn empty_list_picks_nothing() {
        let cabins: [StubCabin; 0] = [];
        assert_eq!(LeastLoaded::default().pick(&call(1, Direction::Up), &cabins), None);
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn enqueue_assigns_to_single_cabin() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 0));
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(5, Direction::Up), &mut reg, &mut rec);

        assert_eq!(reg.cabins()[0].targets(), vec![5]);
        assert_eq!(rec.count("assigned"), 1);
        assert_eq!(rec.count("enqueued"), 1);
        assert_eq!(d.pending_len(), 0);
    }

    #[test]
    fn enqueue_appends_then_notifies() {
        let mut reg: CabinRegistry<Cabin> = CabinRegistry::new();
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(4, Direction::Up), &mut reg, &mut rec);
        d.enqueue(call(9, Direction::Down), &mut reg, &mut rec);

        assert_eq!(d.pending().map(Call::floor).collect::<Vec<_>>(), vec![4, 9]);
        assert_eq!(rec.log, vec!["enqueued 4", "enqueued 9"]);
    }

    #[test]
    fn notification_order() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 0));
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(5, Direction::Up), &mut reg, &mut rec);
        assert_eq!(rec.log, vec!["enqueued 5", "queue A", "assigned 5 A"]);
    }

    #[test]
    fn empty_registry_keeps_calls_in_order() {
        let mut reg: CabinRegistry = CabinRegistry::new();
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(3, Direction::Up), &mut reg, &mut rec);
        d.enqueue(call(7, Direction::Down), &mut reg, &mut rec);
        assert_eq!(d.try_assign(&mut reg, &mut rec), 0);

        let floors: Vec<Floor> = d.pending().map(Call::floor).collect();
        assert_eq!(floors, vec![3, 7]);
        assert_eq!(rec.count("assigned"), 0);
    }

    #[test]
    fn waiting_calls_assigned_once_cabin_registered() {
        let mut reg = CabinRegistry::new();
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(3, Direction::Up), &mut reg, &mut rec);
        d.enqueue(call(7, Direction::Down), &mut reg, &mut rec);
        reg.register(cabin("A", 0));

        assert_eq!(d.try_assign(&mut reg, &mut rec), 2);
        assert!(!d.has_pending());
        let assigned: Vec<&String> = rec.log.iter().filter(|e| e.starts_with("assigned")).collect();
        assert_eq!(assigned, ["assigned 3 A", "assigned 7 A"]);
    }

    #[test]
    fn pass_visits_each_call_once() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 0));
        let mut d = Dispatcher::new(CountingRefusal::default());
        let mut rec = Recorder::default();

        for f in [1, 2, 3] {
            d.enqueue(call(f, Direction::Up), &mut reg, &mut rec);
        }
        // 1 + 2 + 3 picks from the passes triggered by each enqueue.
        assert_eq!(d.strategy().picks.get(), 6);

        d.try_assign(&mut reg, &mut rec);
        assert_eq!(d.strategy().picks.get(), 9);
        assert_eq!(d.pending().map(Call::floor).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn try_assign_on_empty_queue_is_noop() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 0));
        let mut d = Dispatcher::new(CountingRefusal::default());
        assert_eq!(d.try_assign(&mut reg, &mut Recorder::default()), 0);
        assert_eq!(d.strategy().picks.get(), 0);
    }

    #[test]
    fn invalid_hall_call_never_enqueued() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 0));
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        let err = d.enqueue_hall_call(2, Direction::None, Tick(0), &mut reg, &mut rec);
        assert_eq!(err, Err(DispatchError::InvalidCall(CoreError::MissingDirection)));
        let err = d.enqueue_hall_call(-3, Direction::Up, Tick(0), &mut reg, &mut rec);
        assert_eq!(err, Err(DispatchError::InvalidCall(CoreError::NegativeFloor(-3))));
        assert!(rec.log.is_empty());

        d.enqueue_hall_call(2, Direction::Up, Tick(4), &mut reg, &mut rec).unwrap();
        assert_eq!(rec.count("assigned"), 1);
    }

    #[test]
    fn rejected_call_is_dropped() {
        let mut reg = CabinRegistry::new();
        reg.register(Cabin::new(CabinConfig::new("A").with_floor_count(5)).unwrap());
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(8, Direction::Down), &mut reg, &mut rec);
        assert_eq!(rec.count("rejected"), 1);
        assert_eq!(rec.count("assigned"), 0);
        assert!(!d.has_pending());
        assert!(reg.cabins()[0].targets().is_empty());
    }

    #[test]
    fn call_at_cabin_floor_arrives_immediately() {
        let mut reg = CabinRegistry::new();
        reg.register(cabin("A", 4));
        let mut d = Dispatcher::new(NearestByDistance::default());
        let mut rec = Recorder::default();

        d.enqueue(call(4, Direction::Down), &mut reg, &mut rec);
        assert_eq!(rec.log, vec!["enqueued 4", "arrived A 4", "queue A", "assigned 4 A"]);
    }

    #[test]
    fn strategy_is_swappable() {
        let mut reg = CabinRegistry::new();
        let mut busy = StubCabin::new("A", 0);
        busy.load = 3;
        reg.register(busy);
        reg.register(StubCabin::new("B", 9));
        let mut d = Dispatcher::new(LeastLoaded::default());
        let mut rec = Recorder::default();

        d.enqueue(call(1, Direction::Up), &mut reg, &mut rec);
        assert_eq!(reg.cabins()[1].received, vec![1]);
        assert_eq!(rec.log.last().map(String::as_str), Some("assigned 1 B"));
    }
}
