//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::{AssignmentMatrix, Route};

/// A type of inconsistency found when auditing a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route cost exceeds the travel budget.
    BudgetExceeded {
        /// Source the route leaves from.
        source: usize,
        /// Route position in its plan.
        route_index: usize,
        /// Recomputed cost.
        cost: f64,
        /// Travel budget.
        budget: f64,
    },
    /// Recorded route cost differs from the cost recomputed from distances.
    CostMismatch {
        /// Source the route leaves from.
        source: usize,
        /// Route position in its plan.
        route_index: usize,
        /// Cost stored on the route.
        recorded: f64,
        /// Cost recomputed from the distance matrix.
        actual: f64,
    },
    /// Recorded route revenue differs from the sum of its node revenues.
    RevenueMismatch {
        /// Source the route leaves from.
        source: usize,
        /// Route position in its plan.
        route_index: usize,
        /// Revenue stored on the route.
        recorded: u64,
        /// Revenue recomputed from the nodes.
        actual: u64,
    },
    /// A node appears in more than one route, or twice in the same route.
    NodeVisitedTwice {
        /// Node visited more than once.
        node: usize,
    },
    /// A source runs more routes than it has vehicles.
    TooManyRoutes {
        /// Offending source.
        source: usize,
        /// Routes in its plan.
        routes: usize,
        /// Vehicles available at the source.
        vehicles: usize,
    },
    /// A routed node is not marked as assigned to the source routing it.
    NotAssignedToSource {
        /// Routed node.
        node: usize,
        /// Source routing it.
        source: usize,
    },
}

/// An inconsistency in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Routes built by PJS for one source.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{PjsSolution, Route};
///
/// let routes = vec![
///     Route::singleton(0, 9, 1, 10, 2.0, 2.0),
///     Route::singleton(0, 9, 2, 5, 1.0, 3.0),
/// ];
/// let sol = PjsSolution::from_routes(0, routes);
/// assert_eq!(sol.revenue(), 15);
/// assert!((sol.cost() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PjsSolution {
    source: usize,
    routes: Vec<Route>,
    revenue: u64,
    cost: f64,
}

impl PjsSolution {
    /// Wraps routes of `source`, summing their revenue and cost.
    pub fn from_routes(source: usize, routes: Vec<Route>) -> Self {
        let revenue = routes.iter().map(Route::revenue).sum();
        let cost = routes.iter().map(Route::cost).sum();
        Self {
            source,
            routes,
            revenue,
            cost,
        }
    }

    /// Source the routes leave from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Routes in decreasing revenue order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Total revenue across routes.
    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    /// Total cost across routes.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes visited across routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }
}

/// A full multi-source solution: the source assignment plus one PJS plan
/// per source.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    mapping: AssignmentMatrix,
    plans: Vec<PjsSolution>,
    revenue: u64,
    cost: f64,
}

impl Solution {
    /// Assembles a solution, summing plan revenue and cost.
    pub fn new(mapping: AssignmentMatrix, plans: Vec<PjsSolution>) -> Self {
        let revenue = plans.iter().map(PjsSolution::revenue).sum();
        let cost = plans.iter().map(PjsSolution::cost).sum();
        Self {
            mapping,
            plans,
            revenue,
            cost,
        }
    }

    /// Assignment matrix produced by the mapper.
    pub fn mapping(&self) -> &AssignmentMatrix {
        &self.mapping
    }

    /// Per-source plans in source order.
    pub fn plans(&self) -> &[PjsSolution] {
        &self.plans
    }

    /// Plan of the given source, if present.
    pub fn plan_of(&self, source: usize) -> Option<&PjsSolution> {
        self.plans.iter().find(|p| p.source() == source)
    }

    /// Iterates every route across all plans.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.plans.iter().flat_map(|p| p.routes().iter())
    }

    /// Number of routes across all plans.
    pub fn num_routes(&self) -> usize {
        self.plans.iter().map(|p| p.routes().len()).sum()
    }

    /// Number of nodes visited across all plans.
    pub fn num_served(&self) -> usize {
        self.plans.iter().map(PjsSolution::num_served).sum()
    }

    /// Total collected revenue.
    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    /// Total travel cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pjs_solution_empty() {
        let sol = PjsSolution::from_routes(3, Vec::new());
        assert_eq!(sol.source(), 3);
        assert_eq!(sol.revenue(), 0);
        assert_eq!(sol.cost(), 0.0);
        assert_eq!(sol.num_served(), 0);
    }

    #[test]
    fn test_solution_totals() {
        let a = PjsSolution::from_routes(0, vec![Route::singleton(0, 4, 2, 10, 1.0, 1.0)]);
        let b = PjsSolution::from_routes(
            1,
            vec![
                Route::singleton(1, 4, 3, 6, 2.0, 2.0),
                Route::singleton(1, 4, 5, 1, 0.5, 0.5),
            ],
        );
        let sol = Solution::new(AssignmentMatrix::new(&[0, 1], 6), vec![a, b]);
        assert_eq!(sol.revenue(), 17);
        assert!((sol.cost() - 7.0).abs() < 1e-10);
        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.routes().count(), 3);
        assert_eq!(sol.plan_of(1).map(|p| p.routes().len()), Some(2));
        assert!(sol.plan_of(7).is_none());
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::NodeVisitedTwice { node: 4 });
        assert_eq!(v.kind, ViolationType::NodeVisitedTwice { node: 4 });
    }
}
