//! Memoized near-greedy PJS.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use tracing::trace;

use super::pjs::{pjs, GREEDY_BETA};
use crate::config::SolverConfig;
use crate::models::{PjsSolution, Problem};
use crate::selection::check_beta;
use crate::SolverError;

/// Explicit key of a cached PJS baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// [`Problem::id`] of the instance.
    pub problem: u64,
    /// Source node id.
    pub source: usize,
    /// Sorted, deduplicated node subset.
    pub nodes: Vec<usize>,
    /// Bit pattern of the savings-weighting parameter.
    pub alpha_bits: u64,
}

impl CacheKey {
    /// Builds the key for a PJS call.
    pub fn new(problem: &Problem, source: usize, nodes: &[usize], alpha: f64) -> Self {
        let mut nodes = nodes.to_vec();
        nodes.sort_unstable();
        nodes.dedup();
        // fold -0.0 into 0.0
        let alpha = if alpha == 0.0 { 0.0 } else { alpha };
        Self {
            problem: problem.id(),
            source,
            nodes,
            alpha_bits: alpha.to_bits(),
        }
    }
}

/// Cache of near-greedy PJS results.
///
/// Each miss runs PJS with `greedy_beta` on the sorted node subset and a
/// generator seeded from `seed`, so a result depends on the key alone.
/// `alpha` is not used by PJS itself; it names the savings the caller
/// populated, and changing savings without changing `alpha` (or calling
/// [`PjsCache::clear`]) serves stale results.
///
/// # Examples
///
/// ```
/// use u_orienteering::constructive::{set_savings, PjsCache};
/// use u_orienteering::models::{Node, Problem};
///
/// let mut problem = Problem::new(
///     "pair",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::visitable(1, 1.0, 0.0, 4),
///         Node::visitable(2, 2.0, 0.0, 6),
///         Node::depot(3, 3.0, 0.0),
///     ],
///     10.0,
/// )
/// .unwrap();
/// set_savings(&mut problem, 0.5).unwrap();
///
/// let mut cache = PjsCache::new(0);
/// let a = cache.get_or_compute(&mut problem, 0, &[1, 2], 0.5).unwrap();
/// let b = cache.get_or_compute(&mut problem, 0, &[2, 1], 0.5).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PjsCache {
    seed: u64,
    greedy_beta: f64,
    entries: FxHashMap<CacheKey, PjsSolution>,
    hits: usize,
    misses: usize,
}

impl PjsCache {
    /// Creates an empty cache using [`GREEDY_BETA`].
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            greedy_beta: GREEDY_BETA,
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Sets the bias used on cache misses; must lie in (0, 1).
    pub fn with_greedy_beta(mut self, beta: f64) -> Result<Self, SolverError> {
        check_beta(beta)?;
        self.greedy_beta = beta;
        Ok(self)
    }

    /// Creates an empty cache with the seed and bias of `config`.
    pub fn from_config(config: &SolverConfig) -> Result<Self, SolverError> {
        Self::new(config.seed).with_greedy_beta(config.greedy_beta)
    }

    /// Returns the cached baseline for the key, computing it on a miss.
    pub fn get_or_compute(
        &mut self,
        problem: &mut Problem,
        source: usize,
        nodes: &[usize],
        alpha: f64,
    ) -> Result<PjsSolution, SolverError> {
        let key = CacheKey::new(problem, source, nodes, alpha);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            trace!(source, nodes = key.nodes.len(), "pjs cache hit");
            return Ok(hit.clone());
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let solution = pjs(problem, source, &key.nodes, self.greedy_beta, &mut rng)?;
        self.misses += 1;
        self.entries.insert(key, solution.clone());
        Ok(solution)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that ran PJS.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
