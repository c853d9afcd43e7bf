//! Solver parameters.

use serde::{Deserialize, Serialize};

use crate::constructive::GREEDY_BETA;
use crate::selection::{check_beta, SelectionStrategy};
use crate::SolverError;

/// Parameters of a mapping + routing pass.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_orienteering::config::SolverConfig;
/// use u_orienteering::selection::SelectionStrategy;
///
/// let config = SolverConfig::default()
///     .with_max_iter(200)
///     .with_beta_range(0.1, 0.4)
///     .with_mapper_strategy(SelectionStrategy::BiasedRandomized { beta: 0.3 });
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_iter, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Bias of the cached near-greedy PJS.
    pub greedy_beta: f64,
    /// Range β is drawn from in multistart PJS.
    pub beta_range: (f64, f64),
    /// Multistart iterations per source.
    pub max_iter: usize,
    /// Selection iterator used by the mapper.
    pub mapper_strategy: SelectionStrategy,
    /// Seed of the deterministic PJS cache.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            greedy_beta: GREEDY_BETA,
            beta_range: (0.1, 0.3),
            max_iter: 1000,
            mapper_strategy: SelectionStrategy::Greedy,
            seed: 0,
        }
    }
}

impl SolverConfig {
    /// Sets the near-greedy bias.
    pub fn with_greedy_beta(mut self, beta: f64) -> Self {
        self.greedy_beta = beta;
        self
    }

    /// Sets the multistart β range.
    pub fn with_beta_range(mut self, min: f64, max: f64) -> Self {
        self.beta_range = (min, max);
        self
    }

    /// Sets the multistart iteration count.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the mapper selection strategy.
    pub fn with_mapper_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.mapper_strategy = strategy;
        self
    }

    /// Sets the cache seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<(), SolverError> {
        check_beta(self.greedy_beta)?;
        let (min, max) = self.beta_range;
        check_beta(min)?;
        check_beta(max)?;
        if min > max {
            return Err(SolverError::InvalidParameter(format!(
                "beta range ({min}, {max}) is inverted"
            )));
        }
        self.mapper_strategy.validate()
    }
}
