//! Fluent builder for constructing an [`Engine`].

use ltc_core::{Coordinate, SimConfig, SimRng};
use ltc_fleet::Truck;

use crate::setup::{InitialState, scatter_trucks, waiting_area_points};
use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                  |
/// |----------------------------|------------------------------------------|
/// | `.seed(s)`                 | `config.seed`                            |
/// | `.trucks(v)`               | `config.truck_count` scattered trucks    |
/// | `.waiting_area_points(v)`  | `config.waiting_area_count()` scattered  |
/// | `.paused(b)`               | `false`                                  |
///
/// Explicit trucks and points only shape the first run; `Engine::reset`
/// always lays out a fresh random one from the configuration.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config)
///     .seed(7)
///     .build()?;
/// engine.run_ticks(100, &mut NoopObserver);
/// ```
pub struct EngineBuilder {
    config:         SimConfig,
    seed:           Option<u64>,
    trucks:         Option<Vec<Truck>>,
    waiting_points: Option<Vec<Coordinate>>,
    paused:         bool,
}

impl EngineBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            seed:           None,
            trucks:         None,
            waiting_points: None,
            paused:         false,
        }
    }

    /// Override the configured RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from these trucks instead of scattering them.
    ///
    /// Ids are renumbered `1..=n` in the given order and `truck_count`
    /// becomes `n`.
    pub fn trucks(mut self, trucks: Vec<Truck>) -> Self {
        self.trucks = Some(trucks);
        self
    }

    /// Start from these waiting areas instead of scattering them.
    pub fn waiting_area_points(mut self, points: Vec<Coordinate>) -> Self {
        self.waiting_points = Some(points);
        self
    }

    /// Build the engine already paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Validate the configuration and lay out the first run.
    pub fn build(self) -> SimResult<Engine> {
        let mut config = self.config;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(trucks) = &self.trucks {
            config.truck_count = trucks.len();
        }
        config.validate()?;

        if let Some(trucks) = &self.trucks {
            if let Some(t) = trucks.iter().find(|t| !t.coordinates.is_finite()) {
                return Err(SimError::Config(format!("{} has a non-finite position", t.id)));
            }
        }
        if let Some(points) = &self.waiting_points {
            if points.iter().any(|p| !p.is_finite()) {
                return Err(SimError::Config("waiting area points must be finite".into()));
            }
        }

        let mut rng = SimRng::new(config.seed);
        let state = match (self.trucks, self.waiting_points) {
            (None, None) => InitialState::random(&config, &mut rng),
            (Some(trucks), Some(points)) => InitialState::from_parts(trucks, points),
            (Some(trucks), None) => {
                let points = waiting_area_points(&config, &mut rng);
                InitialState::from_parts(trucks, points)
            }
            (None, Some(points)) => {
                let trucks = scatter_trucks(&config, &mut rng);
                InitialState::from_parts(trucks, points)
            }
        };
        Ok(Engine::from_state(config, state, rng, self.paused))
    }
}
