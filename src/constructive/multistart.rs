//! Multi-start PJS.

use rand::Rng;
use tracing::{debug, instrument};

use super::cache::PjsCache;
use super::pjs::pjs;
use crate::models::{PjsSolution, Problem};
use crate::selection::check_beta;
use crate::SolverError;

/// Repeats randomized PJS `max_iter` times and keeps the best revenue.
///
/// The cached near-greedy result is the starting incumbent. Each iteration
/// draws β uniformly from `beta_range` and replaces the incumbent only on a
/// strict revenue improvement. With the same generator state, a larger
/// `max_iter` never yields a lower revenue.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_orienteering::constructive::{multistart_pjs, set_savings, PjsCache};
/// use u_orienteering::models::{Node, Problem};
///
/// let mut problem = Problem::new(
///     "square",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::visitable(1, 0.0, 2.0, 5),
///         Node::visitable(2, 2.0, 2.0, 8),
///         Node::visitable(3, 2.0, 0.0, 3),
///         Node::depot(4, 0.0, 0.0),
///     ],
///     8.5,
/// )
/// .unwrap();
/// set_savings(&mut problem, 0.3).unwrap();
///
/// let mut cache = PjsCache::new(0);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let best = multistart_pjs(&mut problem, &mut cache, 0, &[1, 2, 3], 0.3, 50, (0.1, 0.3), &mut rng)
///     .unwrap();
/// assert_eq!(best.revenue(), 16);
/// ```
#[allow(clippy::too_many_arguments)]
#[instrument(skip(problem, cache, nodes, rng))]
pub fn multistart_pjs<R: Rng + ?Sized>(
    problem: &mut Problem,
    cache: &mut PjsCache,
    source: usize,
    nodes: &[usize],
    alpha: f64,
    max_iter: usize,
    beta_range: (f64, f64),
    rng: &mut R,
) -> Result<PjsSolution, SolverError> {
    let (beta_min, beta_max) = beta_range;
    check_beta(beta_min)?;
    check_beta(beta_max)?;
    if beta_min > beta_max {
        return Err(SolverError::InvalidParameter(format!(
            "beta range ({beta_min}, {beta_max}) is inverted"
        )));
    }

    let mut best = cache.get_or_compute(problem, source, nodes, alpha)?;
    let baseline = best.revenue();

    for iter in 0..max_iter {
        let beta = rng.random_range(beta_min..=beta_max);
        let candidate = pjs(problem, source, nodes, beta, rng)?;
        if candidate.revenue() > best.revenue() {
            debug!(iter, beta, revenue = candidate.revenue(), previous = best.revenue(), "multistart improved");
            best = candidate;
        }
    }

    debug!(baseline, best = best.revenue(), "multistart finished");
    Ok(best)
}
