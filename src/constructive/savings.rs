//! Default savings population.
//!
//! For an edge `i → j` and source `s`:
//!
//! ```text
//! savings(i, j, s) = (1 − α) · (d(i, depot) + d(s, j) − c(i, j)) + α · (r_i + r_j)
//! ```
//!
//! The first term is the classic distance saving of linking `i` to `j`
//! instead of sending `i` to the depot and starting a new route at `j`; the
//! second rewards joining two revenue-rich nodes. PJS only relies on the
//! resulting order, so callers may populate savings any other way through
//! [`Edge::set_saving`](crate::models::Edge::set_saving).

use crate::models::Problem;
use crate::SolverError;

/// Fills every edge's savings for every source using weight `alpha` in [0, 1].
///
/// # Examples
///
/// ```
/// use u_orienteering::constructive::set_savings;
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
/// set_savings(&mut problem, 0.0).unwrap();
/// // 1 → 2: d(1, depot) + d(0, 2) − c(1, 2) = 2 + 2 − 1
/// let e = problem.edges().iter().find(|e| e.inode() == 1).unwrap();
/// assert!((e.saving(0).unwrap() - 3.0).abs() < 1e-10);
/// ```
pub fn set_savings(problem: &mut Problem, alpha: f64) -> Result<(), SolverError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(SolverError::InvalidParameter(format!(
            "alpha must lie in [0, 1], got {alpha}"
        )));
    }

    let depot = problem.depot();
    let sources = problem.sources().to_vec();
    for idx in 0..problem.edges().len() {
        let edge = &problem.edges()[idx];
        let (i, j, cost) = (edge.inode(), edge.jnode(), edge.cost());
        let revenue = f64::from(problem.node(i).revenue()) + f64::from(problem.node(j).revenue());
        let to_depot = problem.distance(i, depot);
        let values: Vec<(usize, f64)> = sources
            .iter()
            .map(|&s| {
                let distance_saving = to_depot + problem.distance(s, j) - cost;
                (s, (1.0 - alpha) * distance_saving + alpha * revenue)
            })
            .collect();

        let edge = &mut problem.edges_mut()[idx];
        for (s, value) in values {
            edge.set_saving(s, value);
        }
    }
    Ok(())
}
