//! Marginal-distance mapper.
//!
//! # Algorithm
//!
//! Every source ranks every visitable node by its marginal distance
//!
//! ```text
//! m(s, c) = d(s, c) − min over s' ≠ s of d(s', c)
//! ```
//!
//! so nodes that some other source reaches more cheaply sink to the bottom
//! of the list. Sources then take turns in a fixed cyclic order, each
//! drafting up to one node per vehicle from its own selection iterator,
//! until every node is drafted or `|visitable|` turns have passed.
//!
//! # Complexity
//!
//! O(S² · N + S · N log N) for S sources and N visitable nodes.

use rand::Rng;
use tracing::debug;

use crate::models::{Assignment, Problem};
use crate::selection::{SelectionIterator, SelectionStrategy};
use crate::SolverError;

/// Marginal distance of every visitable node for `source`, in the order of
/// [`Problem::visitable`].
///
/// With a single source there is no alternative and the marginal distance
/// equals the plain distance.
pub fn marginal_distances(problem: &Problem, source: usize) -> Vec<f64> {
    let others = || problem.sources().iter().copied().filter(move |&s| s != source);
    problem
        .visitable()
        .iter()
        .map(|&c| {
            let best_other = problem.distances().min_from(others(), c).unwrap_or(0.0);
            problem.distance(source, c) - best_other
        })
        .collect()
}

/// Assigns visitable nodes to sources.
///
/// Resets every visitable node's `assigned` flag first, then drafts nodes
/// round-robin. Identical inputs, strategy, and generator state reproduce
/// identical assignments.
///
/// # Examples
///
/// ```
/// use u_orienteering::assignment::map_sources;
/// use u_orienteering::models::{Node, Problem};
/// use u_orienteering::selection::SelectionStrategy;
///
/// let mut problem = Problem::new(
///     "two-sources",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::source(1, 100.0, 0.0, 1),
///         Node::visitable(2, 1.0, 0.0, 5),
///         Node::visitable(3, 99.0, 0.0, 5),
///         Node::depot(4, 50.0, 50.0),
///     ],
///     500.0,
/// )
/// .unwrap();
/// let mut rng = rand::rng();
/// let assignment = map_sources(&mut problem, SelectionStrategy::Greedy, &mut rng).unwrap();
/// assert_eq!(assignment.nodes_of(0), &[2]);
/// assert_eq!(assignment.nodes_of(1), &[3]);
/// ```
pub fn map_sources<R: Rng + ?Sized>(
    problem: &mut Problem,
    strategy: SelectionStrategy,
    rng: &mut R,
) -> Result<Assignment, SolverError> {
    strategy.validate()?;

    let visitable = problem.visitable().to_vec();
    let sources = problem.sources().to_vec();
    for &c in &visitable {
        problem.node_mut(c).state_mut().assigned = false;
    }

    let mut selectors = Vec::with_capacity(sources.len());
    for &s in &sources {
        let mut ranked: Vec<(f64, usize)> = marginal_distances(problem, s)
            .into_iter()
            .zip(visitable.iter().copied())
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        selectors.push(strategy.build(ranked.into_iter().map(|(_, c)| c).collect())?);
    }

    let mut assignment = Assignment::new(&sources, problem.num_nodes());
    let n = visitable.len();
    let mut n_assigned = 0;

    for pos in (0..sources.len()).cycle().take(n) {
        let source = sources[pos];
        for _ in 0..problem.node(source).vehicles() {
            let picked = selectors[pos].next_with(rng, |&c| problem.node(c).state().assigned);
            let Some(node) = picked else {
                break;
            };
            let state = problem.node_mut(node).state_mut();
            debug_assert!(!state.assigned, "node {node} drafted twice");
            state.assigned = true;
            assignment.draft(source, node);
            n_assigned += 1;
        }
        if n_assigned == n {
            break;
        }
    }

    debug!(
        assigned = n_assigned,
        visitable = n,
        sources = sources.len(),
        "mapper finished"
    );
    Ok(assignment)
}
