//! tower — a three-cabin office tower driven by scripted and random calls.
//!
//! The building (cabins, strategy, run length) comes from an embedded JSON
//! description; pass a path as the first argument to load another one.
//! Morning arrivals are scripted from an embedded call CSV, and a seeded
//! random source adds hall and car calls on top.  Set `RUST_LOG=debug` to
//! watch every queue change.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use lift_cabin::{CabinError, CabinObserver, CabinRegistry, Elevator};
use lift_core::{CabinConfig, Call, Direction, Floor, SimConfig, SimRng, Tick};
use lift_dispatch::{DispatchObserver, DispatchStrategy, LeastLoaded, NearestByDistance};
use lift_output::{CsvTraceWriter, TraceObserver, TraceWriter};
use lift_sim::{SimBuilder, SimObserver, load_script_reader};

// ── Building description ──────────────────────────────────────────────────────

const BUILDING_JSON: &str = r#"{
  "sim": {
    "tick_duration_secs": 0.1,
    "total_ticks": 3000,
    "seed": 42,
    "snapshot_interval_ticks": 50
  },
  "strategy": { "kind": "nearest", "floor_travel_time": 0.8, "on_the_way_bonus": 0.5, "full_penalty": 2.0 },
  "traffic": { "hall_call_probability": 0.02, "car_call_probability": 0.01 },
  "cabins": [
    { "id": "A", "start_floor": 0,  "floor_count": 16 },
    { "id": "B", "start_floor": 8,  "floor_count": 16 },
    { "id": "C", "start_floor": 15, "floor_count": 16, "move_speed": 4.5 }
  ]
}"#;

#[derive(Deserialize)]
struct Building {
    sim:      SimConfig,
    strategy: StrategyConfig,
    #[serde(default)]
    traffic:  Traffic,
    cabins:   Vec<CabinConfig>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StrategyConfig {
    Nearest(NearestByDistance),
    LeastLoaded(LeastLoaded),
}

/// Per-tick probabilities of the random call source.
#[derive(Deserialize, Default)]
struct Traffic {
    hall_call_probability: f64,
    car_call_probability:  f64,
}

// ── Scripted calls ────────────────────────────────────────────────────────────

// Lobby rush in the first minute, then a few passengers heading home.
const CALLS_CSV: &str = "\
tick,kind,floor,direction,cabin
0,hall,0,up,
5,car,12,,A
40,hall,0,up,
60,hall,7,down,
120,hall,0,up,
150,car,3,,B
300,hall,14,down,
310,hall,11,down,
320,hall,5,down,
";

// ── Observer wrapper to collect run statistics ────────────────────────────────

/// Forwards everything to a [`TraceObserver`] and keeps a few counters.
struct StatsObserver<W: TraceWriter> {
    inner:          TraceObserver<W>,
    tick:           Tick,
    enqueued:       usize,
    assigned:       usize,
    rejected:       usize,
    arrivals:       usize,
    /// Sum over assigned calls of (assignment tick − call tick).
    wait_ticks:     u64,
    peak_pending:   usize,
}

impl<W: TraceWriter> StatsObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self {
            inner,
            tick: Tick::ZERO,
            enqueued: 0,
            assigned: 0,
            rejected: 0,
            arrivals: 0,
            wait_ticks: 0,
            peak_pending: 0,
        }
    }
}

impl<W: TraceWriter> CabinObserver for StatsObserver<W> {
    fn on_queue_changed(&mut self, cabin: &dyn Elevator) {
        self.inner.on_queue_changed(cabin);
    }

    fn on_arrived(&mut self, cabin: &dyn Elevator, floor: Floor) {
        self.arrivals += 1;
        self.inner.on_arrived(cabin, floor);
    }
}

impl<W: TraceWriter> DispatchObserver for StatsObserver<W> {
    fn on_enqueued(&mut self, call: &Call) {
        self.enqueued += 1;
        self.inner.on_enqueued(call);
    }

    fn on_assigned(&mut self, call: &Call, cabin: &dyn Elevator) {
        self.assigned += 1;
        self.wait_ticks += self.tick.since(call.created_at());
        self.inner.on_assigned(call, cabin);
    }

    fn on_rejected(&mut self, call: &Call, cabin: &dyn Elevator, error: &CabinError) {
        self.rejected += 1;
        self.inner.on_rejected(call, cabin, error);
    }
}

impl<W: TraceWriter> SimObserver for StatsObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick = tick;
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, pending_calls: usize) {
        self.peak_pending = self.peak_pending.max(pending_calls);
        self.inner.on_tick_end(tick, pending_calls);
    }

    fn on_snapshot(&mut self, tick: Tick, cabins: &CabinRegistry) {
        self.inner.on_snapshot(tick, cabins);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let building: Building = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading building description {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => serde_json::from_str(BUILDING_JSON).context("parsing embedded building")?,
    };

    match &building.strategy {
        StrategyConfig::Nearest(s) => run(&building, s.clone()),
        StrategyConfig::LeastLoaded(s) => run(&building, s.clone()),
    }
}

fn run<S: DispatchStrategy>(building: &Building, strategy: S) -> Result<()> {
    let config = building.sim.clone();
    println!("=== tower — lift simulator ===");
    println!(
        "Cabins: {}  |  Ticks: {} × {:.2} s  |  Seed: {}",
        building.cabins.len(),
        config.total_ticks,
        config.tick_duration_secs,
        config.seed
    );
    println!();

    // 1. Scripted calls.
    let script = load_script_reader(Cursor::new(CALLS_CSV))?;
    println!("Loaded {} scripted calls", script.len());

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.clone(), strategy)
        .cabins(building.cabins.iter().cloned())
        .script(script)
        .build()?;

    // 3. Set up output.
    std::fs::create_dir_all("output/tower")?;
    let writer = CsvTraceWriter::new(Path::new("output/tower"))?;
    let mut obs = StatsObserver::new(TraceObserver::new(writer));

    // 4. Run, with random traffic injected between ticks.
    let mut rng = SimRng::new(config.seed).child(1);
    let labels: Vec<String> = building.cabins.iter().map(|c| c.id.clone()).collect();
    let top = building
        .cabins
        .iter()
        .filter_map(|c| c.floor_count)
        .min()
        .map_or(15, |n| n as Floor - 1);

    let t0 = Instant::now();
    while sim.clock.current_tick < config.end_tick() {
        if top > 0 && rng.gen_bool(building.traffic.hall_call_probability) {
            let floor = rng.gen_range(0..=top);
            let direction = match floor {
                0 => Direction::Up,
                f if f == top => Direction::Down,
                _ if rng.gen_bool(0.5) => Direction::Up,
                _ => Direction::Down,
            };
            sim.hall_call(floor, direction, &mut obs)?;
        }
        if !labels.is_empty() && rng.gen_bool(building.traffic.car_call_probability) {
            let cabin = &labels[rng.gen_range(0..labels.len())];
            let floor = rng.gen_range(0..=top);
            if let Err(e) = sim.car_call(cabin, floor, &mut obs) {
                info!("random car call {cabin}->{floor} refused: {e}");
            }
        }
        sim.run_ticks(1, &mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  hall calls     : {} enqueued, {} assigned, {} rejected", obs.enqueued, obs.assigned, obs.rejected);
    println!("  still waiting  : {} (peak {})", sim.pending_calls(), obs.peak_pending);
    println!("  arrivals       : {}", obs.arrivals);
    if obs.assigned > 0 {
        let mean = obs.wait_ticks as f64 / obs.assigned as f64 * config.tick_duration_secs;
        println!("  mean wait for assignment : {mean:.2} s");
    }
    println!();

    // 6. Final cabin table.
    println!("{:<6} {:<7} {:<12} {:<6} Targets", "Cabin", "Floor", "State", "Dir");
    println!("{}", "-".repeat(44));
    for (_, cabin) in sim.registry.iter() {
        println!(
            "{:<6} {:<7} {:<12} {:<6} {:?}",
            cabin.id(),
            cabin.current_floor(),
            cabin.state().to_string(),
            cabin.direction().to_string(),
            cabin.targets(),
        );
    }

    Ok(())
}
