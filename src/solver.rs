//! One mapping + routing pass over a whole instance.
//!
//! The mapper partitions visitable nodes among sources, then PJS routes
//! each source's share. Iterating passes, tuning the savings weight, and
//! keeping elite solutions are left to the caller.

use rand::Rng;
use tracing::debug;

use crate::assignment::map_sources;
use crate::config::SolverConfig;
use crate::constructive::{multistart_pjs, PjsCache};
use crate::models::{Problem, Solution};
use crate::SolverError;

/// Maps sources with `config.mapper_strategy`, then routes every source with
/// the cached near-greedy PJS.
///
/// Savings must already be populated for weight `alpha` (see
/// [`set_savings`](crate::constructive::set_savings)).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_orienteering::config::SolverConfig;
/// use u_orienteering::constructive::{set_savings, PjsCache};
/// use u_orienteering::models::{Node, Problem};
/// use u_orienteering::solver::solve;
///
/// let mut problem = Problem::new(
///     "two-sources",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::source(1, 10.0, 0.0, 1),
///         Node::visitable(2, 1.0, 1.0, 5),
///         Node::visitable(3, 9.0, 1.0, 7),
///         Node::depot(4, 5.0, 5.0),
///     ],
///     20.0,
/// )
/// .unwrap();
/// set_savings(&mut problem, 0.5).unwrap();
///
/// let config = SolverConfig::default();
/// let mut cache = PjsCache::from_config(&config).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let solution = solve(&mut problem, &config, &mut cache, 0.5, &mut rng).unwrap();
/// assert_eq!(solution.revenue(), 12);
/// ```
pub fn solve<R: Rng + ?Sized>(
    problem: &mut Problem,
    config: &SolverConfig,
    cache: &mut PjsCache,
    alpha: f64,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    config.validate()?;
    let assignment = map_sources(problem, config.mapper_strategy, rng)?;

    let sources = problem.sources().to_vec();
    let mut plans = Vec::with_capacity(sources.len());
    for s in sources {
        plans.push(cache.get_or_compute(problem, s, assignment.nodes_of(s), alpha)?);
    }

    let solution = Solution::new(assignment.into_matrix(), plans);
    debug!(
        revenue = solution.revenue(),
        cost = solution.cost(),
        routes = solution.num_routes(),
        "solve finished"
    );
    Ok(solution)
}

/// Like [`solve`], but routes every source with multistart PJS using
/// `config.max_iter` and `config.beta_range`.
pub fn solve_multistart<R: Rng + ?Sized>(
    problem: &mut Problem,
    config: &SolverConfig,
    cache: &mut PjsCache,
    alpha: f64,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    config.validate()?;
    let assignment = map_sources(problem, config.mapper_strategy, rng)?;

    let sources = problem.sources().to_vec();
    let mut plans = Vec::with_capacity(sources.len());
    for s in sources {
        plans.push(multistart_pjs(
            problem,
            cache,
            s,
            assignment.nodes_of(s),
            alpha,
            config.max_iter,
            config.beta_range,
            rng,
        )?);
    }

    let solution = Solution::new(assignment.into_matrix(), plans);
    debug!(
        revenue = solution.revenue(),
        cost = solution.cost(),
        routes = solution.num_routes(),
        "multistart solve finished"
    );
    Ok(solution)
}
