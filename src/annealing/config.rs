//! Annealing configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid [`AnnealConfig`] parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),
    #[error("cooling_factor must be in (0, 1), got {0}")]
    BadCoolingFactor(f64),
    #[error("cooling_interval must be positive")]
    ZeroCoolingInterval,
    #[error("{name} must be a probability in [0, 1], got {value}")]
    BadProbability {
        /// Which probability parameter was out of range.
        name: &'static str,
        value: f64,
    },
}

/// Configuration for the simulated-annealing optimizer.
///
/// The run is a fixed iteration budget with geometric cooling: the
/// temperature is multiplied by `cooling_factor` every `cooling_interval`
/// iterations. There is no convergence detection; the budget is the
/// caller's latency bound.
///
/// # Examples
///
/// ```
/// use route_cover::annealing::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_iterations(20_000)
///     .with_initial_temperature(50.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Total move attempts (skipped degenerate moves count).
    pub iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling multiplier in (0, 1).
    pub cooling_factor: f64,

    /// Iterations between cooling steps.
    pub cooling_interval: usize,

    /// Probability of attempting a segment reversal instead of a
    /// relocation.
    pub reversal_probability: f64,

    /// During relocation, probability of picking a uniformly random
    /// destination route rather than reusing the longest route.
    pub cross_route_probability: f64,

    /// RNG seed. A given seed makes the whole run exactly reproducible.
    pub seed: u64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            initial_temperature: 100.0,
            cooling_factor: 0.9,
            cooling_interval: 100,
            reversal_probability: 0.2,
            cross_route_probability: 0.7,
            seed: 0,
        }
    }
}

impl AnnealConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, c: f64) -> Self {
        self.cooling_factor = c;
        self
    }

    pub fn with_cooling_interval(mut self, n: usize) -> Self {
        self.cooling_interval = n;
        self
    }

    pub fn with_reversal_probability(mut self, p: f64) -> Self {
        self.reversal_probability = p;
        self
    }

    pub fn with_cross_route_probability(mut self, p: f64) -> Self {
        self.cross_route_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ConfigError::BadCoolingFactor(self.cooling_factor));
        }
        if self.cooling_interval == 0 {
            return Err(ConfigError::ZeroCoolingInterval);
        }
        for (name, value) in [
            ("reversal_probability", self.reversal_probability),
            ("cross_route_probability", self.cross_route_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::BadProbability { name, value });
            }
        }
        Ok(())
    }
}
