//! Fluent builder for constructing a [`Sim`].

use log::{debug, warn};

use lift_cabin::{Cabin, CabinRegistry};
use lift_core::{CabinConfig, SimConfig};
use lift_dispatch::{DispatchStrategy, Dispatcher};

use crate::{CallScript, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, tick duration, seed, snapshot interval
/// - `S: DispatchStrategy` — e.g. [`lift_dispatch::NearestByDistance`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default            |
/// |-----------------|--------------------|
/// | `.cabin(c)`     | No cabins          |
/// | `.cabins(iter)` | No cabins          |
/// | `.script(s)`    | Empty `CallScript` |
///
/// A building with no cabins is legal: hall calls simply wait in the queue.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, NearestByDistance::default())
///     .cabin(CabinConfig::new("A"))
///     .cabin(CabinConfig::new("B").starting_at(10))
///     .script(load_script_csv(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: DispatchStrategy> {
    config:   SimConfig,
    strategy: S,
    cabins:   Vec<CabinConfig>,
    script:   Option<CallScript>,
}

impl<S: DispatchStrategy> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, strategy: S) -> Self {
        Self {
            config,
            strategy,
            cabins: Vec::new(),
            script: None,
        }
    }

    /// Add one cabin.  Cabins are registered in the order they are added.
    pub fn cabin(mut self, cabin: CabinConfig) -> Self {
        self.cabins.push(cabin);
        self
    }

    /// Add several cabins.
    pub fn cabins(mut self, cabins: impl IntoIterator<Item = CabinConfig>) -> Self {
        self.cabins.extend(cabins);
        self
    }

    /// Supply calls to inject at fixed ticks.
    pub fn script(mut self, script: CallScript) -> Self {
        self.script = Some(script);
        self
    }

    /// Validate inputs and construct the [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] if `tick_duration_secs` is not a positive number.
    /// - [`SimError::Cabin`] if any cabin configuration is invalid.
    /// - [`SimError::UnknownCabin`] if the script has a car call for a label
    ///   no cabin carries.
    pub fn build(self) -> SimResult<Sim<S>> {
        let tick = self.config.tick_duration_secs;
        if !tick.is_finite() || tick <= 0.0 {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be positive, got {tick}"
            )));
        }

        let mut registry = CabinRegistry::new();
        for config in self.cabins {
            let label = config.id.clone();
            let cabin = Cabin::new(config)?;
            let before = registry.len();
            registry.register(cabin);
            if registry.len() == before {
                warn!("duplicate cabin label {label:?}; keeping the first");
            }
        }

        let script = self.script.unwrap_or_default();
        if let Some(label) = script.cabin_labels().find(|l| registry.find(l).is_none()) {
            return Err(SimError::UnknownCabin(label.to_owned()));
        }

        debug!(
            "built sim: {} cabin(s), {} scripted call(s), {} ticks",
            registry.len(),
            script.len(),
            self.config.total_ticks
        );

        let clock = self.config.make_clock();
        Ok(Sim {
            config: self.config,
            clock,
            registry,
            dispatcher: Dispatcher::new(self.strategy),
            script,
        })
    }
}
