//! Route evaluator that recomputes cost and revenue and checks constraints.

use rustc_hash::FxHashSet;

use crate::models::{PjsSolution, Problem, Route, Solution, Violation, ViolationType};

const COST_TOLERANCE: f64 = 1e-6;

/// Recomputes routes from the distance matrix and node revenues, and audits
/// plans and solutions against the travel budget and the fleet sizes.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Node, Problem};
/// use u_orienteering::evaluation::RouteEvaluator;
///
/// let problem = Problem::new(
///     "line",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::visitable(1, 3.0, 4.0, 10),
///         Node::visitable(2, 6.0, 8.0, 20),
///         Node::depot(3, 6.0, 0.0),
///     ],
///     30.0,
/// )
/// .unwrap();
///
/// let evaluator = RouteEvaluator::new(&problem);
/// let (route, violations) = evaluator.build_route(0, &[1, 2]);
/// assert_eq!(route.revenue(), 30);
/// assert!((route.cost() - 18.0).abs() < 1e-10);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a Problem,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Cost of the path `source → nodes… → depot`.
    pub fn route_cost(&self, source: usize, nodes: &[usize]) -> f64 {
        let depot = self.problem.depot();
        let mut prev = source;
        let mut cost = 0.0;
        for &n in nodes {
            cost += self.problem.distance(prev, n);
            prev = n;
        }
        if nodes.is_empty() {
            return 0.0;
        }
        cost + self.problem.distance(prev, depot)
    }

    /// Sum of node revenues.
    pub fn route_revenue(&self, nodes: &[usize]) -> u64 {
        nodes
            .iter()
            .map(|&n| u64::from(self.problem.node(n).revenue()))
            .sum()
    }

    /// Builds a route from a node sequence, computing cost and revenue.
    ///
    /// Returns the constructed route and a budget violation if it overshoots.
    pub fn build_route(&self, source: usize, nodes: &[usize]) -> (Route, Vec<Violation>) {
        let cost = self.route_cost(source, nodes);
        let route = Route::from_parts(
            source,
            self.problem.depot(),
            nodes.to_vec(),
            self.route_revenue(nodes),
            cost,
        );
        let mut violations = Vec::new();
        if cost > self.problem.budget() {
            violations.push(Violation::new(ViolationType::BudgetExceeded {
                source,
                route_index: 0,
                cost,
                budget: self.problem.budget(),
            }));
        }
        (route, violations)
    }

    /// Checks one route against the budget and its recorded totals.
    fn check_route(&self, route_index: usize, route: &Route, violations: &mut Vec<Violation>) {
        let source = route.source();
        let actual = self.route_cost(source, route.nodes());
        if actual > self.problem.budget() + COST_TOLERANCE {
            violations.push(Violation::new(ViolationType::BudgetExceeded {
                source,
                route_index,
                cost: actual,
                budget: self.problem.budget(),
            }));
        }
        if (actual - route.cost()).abs() > COST_TOLERANCE * actual.max(1.0) {
            violations.push(Violation::new(ViolationType::CostMismatch {
                source,
                route_index,
                recorded: route.cost(),
                actual,
            }));
        }
        let revenue = self.route_revenue(route.nodes());
        if revenue != route.revenue() {
            violations.push(Violation::new(ViolationType::RevenueMismatch {
                source,
                route_index,
                recorded: route.revenue(),
                actual: revenue,
            }));
        }
    }

    /// Evaluates the routes of one source, returning `(revenue, violations)`.
    pub fn evaluate_plan(&self, plan: &PjsSolution) -> (u64, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut seen = FxHashSet::default();
        self.audit_plan(plan, &mut seen, &mut violations);
        let revenue = plan
            .routes()
            .iter()
            .map(|r| self.route_revenue(r.nodes()))
            .sum();
        (revenue, violations)
    }

    fn audit_plan(
        &self,
        plan: &PjsSolution,
        seen: &mut FxHashSet<usize>,
        violations: &mut Vec<Violation>,
    ) {
        let source = plan.source();
        let vehicles = self.problem.node(source).vehicles();
        if plan.routes().len() > vehicles {
            violations.push(Violation::new(ViolationType::TooManyRoutes {
                source,
                routes: plan.routes().len(),
                vehicles,
            }));
        }
        for (idx, route) in plan.routes().iter().enumerate() {
            self.check_route(idx, route, violations);
            for &n in route.nodes() {
                if !seen.insert(n) {
                    violations.push(Violation::new(ViolationType::NodeVisitedTwice { node: n }));
                }
            }
        }
    }

    /// Evaluates a full solution, returning `(revenue, violations)`.
    ///
    /// Besides per-route checks, every routed node must be marked in the
    /// assignment matrix for the source routing it, and no node may be
    /// visited twice across sources.
    pub fn evaluate_solution(&self, solution: &Solution) -> (u64, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut seen = FxHashSet::default();
        let mut revenue = 0;
        for plan in solution.plans() {
            self.audit_plan(plan, &mut seen, &mut violations);
            for route in plan.routes() {
                revenue += self.route_revenue(route.nodes());
                for &n in route.nodes() {
                    if solution.mapping().get(plan.source(), n) != 1 {
                        violations.push(Violation::new(ViolationType::NotAssignedToSource {
                            node: n,
                            source: plan.source(),
                        }));
                    }
                }
            }
        }
        (revenue, violations)
    }
}
