//! Panadero-Juan savings heuristic (PJS) for one source.
//!
//! # Algorithm
//!
//! 1. Every node whose direct trip source → node → depot fits the budget
//!    starts on its own route; the rest are dropped for this source.
//! 2. Edges between the remaining nodes are ranked by the source's savings
//!    value (highest first) and drawn with biased randomization.
//! 3. A drawn edge `i → j` merges the route ending at `i` with the route
//!    starting at `j` when the two differ and the merged cost
//!
//!    ```text
//!    (cost(R_i) − d(i, depot)) + (cost(R_j) − d(source, j)) + c(i, j)
//!    ```
//!
//!    fits the budget.
//! 4. Every edge is drawn once. After each edge whose endpoints sit on two
//!    distinct routes, merging stops if the active route count equals the
//!    fleet size; the best `vehicles` routes by revenue are returned.
//!
//! # Complexity
//!
//! O(E log E + E · R) for E candidate edges and R initial routes.
//!
//! # Reference
//!
//! Panadero, J., Juan, A.A., Bayliss, C. & Currie, C. (2020). "Maximising
//! reward from a team of surveillance drones: a simheuristic approach to the
//! stochastic team orienteering problem", *European Journal of Industrial
//! Engineering* 14(4), 485-516.

use rand::Rng;
use tracing::{debug, trace};

use crate::models::{NodeState, PjsSolution, Problem, Route, RouteId};
use crate::selection::{check_beta, BiasedRandomized, SelectionIterator};
use crate::SolverError;

/// Bias that makes PJS behave (almost) greedily.
pub const GREEDY_BETA: f64 = 0.9999;

/// Routes of one PJS pass, addressed by [`RouteId`].
///
/// Absorbed routes leave an empty slot behind so handles stay stable;
/// `active` keeps the live handles in creation order.
#[derive(Debug, Default)]
struct RouteArena {
    slots: Vec<Option<Route>>,
    active: Vec<RouteId>,
}

impl RouteArena {
    fn push(&mut self, route: Route) -> RouteId {
        let id = RouteId(self.slots.len());
        self.slots.push(Some(route));
        self.active.push(id);
        id
    }

    fn get(&self, id: RouteId) -> Option<&Route> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn take(&mut self, id: RouteId) -> Option<Route> {
        let route = self.slots.get_mut(id.0).and_then(Option::take)?;
        self.active.retain(|&r| r != id);
        Some(route)
    }

    fn active_len(&self) -> usize {
        self.active.len()
    }

    /// The `k` highest-revenue routes; ties keep creation order.
    fn into_best(mut self, k: usize) -> Vec<Route> {
        let mut routes: Vec<Route> = self
            .active
            .iter()
            .filter_map(|id| self.slots[id.0].take())
            .collect();
        routes.sort_by(|a, b| b.revenue().cmp(&a.revenue()));
        routes.truncate(k);
        routes
    }
}

/// Runs PJS for `source` over `nodes` with edge-selection bias `beta`.
///
/// Resets the routing state (route handle, link flags, source and depot
/// distances) of every node in `nodes` before building. Duplicate ids are
/// ignored; the first occurrence fixes the construction order used to break
/// revenue ties. Every edge between two nodes of the subset must carry a
/// finite savings value for `source`.
///
/// # Examples
///
/// ```
/// use u_orienteering::constructive::{pjs, set_savings, GREEDY_BETA};
/// use u_orienteering::models::{Node, Problem};
///
/// let mut problem = Problem::new(
///     "line",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::visitable(1, 1.0, 0.0, 10),
///         Node::visitable(2, 2.0, 0.0, 20),
///         Node::visitable(3, 3.0, 0.0, 30),
///         Node::depot(4, 4.0, 0.0),
///     ],
///     10.0,
/// )
/// .unwrap();
/// set_savings(&mut problem, 0.5).unwrap();
///
/// let mut rng = rand::rng();
/// let sol = pjs(&mut problem, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).unwrap();
/// assert_eq!(sol.routes().len(), 1);
/// assert_eq!(sol.revenue(), 60);
/// ```
pub fn pjs<R: Rng + ?Sized>(
    problem: &mut Problem,
    source: usize,
    nodes: &[usize],
    beta: f64,
    rng: &mut R,
) -> Result<PjsSolution, SolverError> {
    problem.ensure_source(source)?;
    check_beta(beta)?;

    let depot = problem.depot();
    let budget = problem.budget();
    let n_vehicles = problem.node(source).vehicles();

    let mut in_subset = vec![false; problem.num_nodes()];
    let mut subset = Vec::with_capacity(nodes.len());
    for &n in nodes {
        problem.ensure_visitable(n)?;
        if !in_subset[n] {
            in_subset[n] = true;
            subset.push(n);
        }
    }

    let mut ranked = Vec::new();
    for (idx, edge) in problem.edges().iter().enumerate() {
        if !(in_subset[edge.inode()] && in_subset[edge.jnode()]) {
            continue;
        }
        match edge.saving(source) {
            Some(value) if value.is_finite() => ranked.push((value, idx)),
            _ => return Err(SolverError::MissingSavings { edge: idx, source_id: source }),
        }
    }
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut arena = RouteArena::default();
    for &n in &subset {
        let from_source = problem.distance(source, n);
        let to_depot = problem.distance(n, depot);
        let node = problem.node_mut(n);
        let revenue = node.revenue();
        let state = node.state_mut();
        *state = NodeState {
            assigned: state.assigned,
            route: None,
            from_source,
            to_depot,
            link_left: false,
            link_right: false,
        };
        if from_source + to_depot > budget {
            continue;
        }
        state.route = Some(arena.push(Route::singleton(
            source,
            depot,
            n,
            revenue,
            from_source,
            to_depot,
        )));
        state.link_left = true;
        state.link_right = true;
    }
    let feasible = arena.active_len();

    let mut edges = BiasedRandomized::new(ranked.into_iter().map(|(_, idx)| idx).collect(), beta)?;
    let mut merges = 0;
    while let Some(idx) = edges.next_with(rng, |_| false) {
        match try_merge(problem, &mut arena, idx) {
            Merge::Skipped => continue,
            Merge::Rejected => {}
            Merge::Merged => merges += 1,
        }
        if arena.active_len() == n_vehicles {
            break;
        }
    }

    let solution = PjsSolution::from_routes(source, arena.into_best(n_vehicles));
    debug!(
        source,
        candidates = subset.len(),
        feasible,
        merges,
        edges_drawn = edges.draws(),
        routes = solution.routes().len(),
        revenue = solution.revenue(),
        "pjs finished"
    );
    Ok(solution)
}

/// Outcome of considering one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    /// An endpoint is unrouted or both endpoints share a route.
    Skipped,
    /// The endpoints are not route ends, or the merge breaks the budget.
    Rejected,
    Merged,
}

/// Merges the route ending at the edge tail into the route starting at the
/// edge head, if allowed. Unless the outcome is [`Merge::Merged`], routes and
/// node flags are left untouched.
fn try_merge(problem: &mut Problem, arena: &mut RouteArena, edge_idx: usize) -> Merge {
    let edge = &problem.edges()[edge_idx];
    let (i, j, edge_cost) = (edge.inode(), edge.jnode(), edge.cost());
    let (istate, jstate) = (problem.node(i).state(), problem.node(j).state());

    let (Some(ir), Some(jr)) = (istate.route, jstate.route) else {
        return Merge::Skipped;
    };
    if ir == jr {
        return Merge::Skipped;
    }
    if !(istate.link_right && jstate.link_left) {
        return Merge::Rejected;
    }
    let (Some(iroute), Some(jroute)) = (arena.get(ir), arena.get(jr)) else {
        return Merge::Skipped;
    };
    debug_assert_eq!(iroute.last(), Some(i), "stale link flag on node {i}");
    debug_assert_eq!(jroute.first(), Some(j), "stale link flag on node {j}");

    let (i_to_depot, j_from_source) = (istate.to_depot, jstate.from_source);
    let merged = Route::merged_cost(iroute.cost(), i_to_depot, jroute.cost(), j_from_source, edge_cost);
    if merged > problem.budget() {
        return Merge::Rejected;
    }

    let Some(absorbed) = arena.take(jr) else {
        return Merge::Skipped;
    };
    for &n in absorbed.nodes() {
        problem.node_mut(n).state_mut().route = Some(ir);
    }
    problem.node_mut(i).state_mut().link_right = false;
    problem.node_mut(j).state_mut().link_left = false;
    if let Some(route) = arena.get_mut(ir) {
        route.absorb(absorbed, i_to_depot, j_from_source, edge_cost);
        trace!(edge = edge_idx, from = i, to = j, cost = route.cost(), revenue = route.revenue(), "merged routes");
    }
    Merge::Merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::set_savings;
    use crate::models::Node;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// One source at the origin, nodes on a line, depot at the far end.
    fn line(vehicles: usize, budget: f64) -> Problem {
        let mut p = Problem::new(
            "line",
            vec![
                Node::source(0, 0.0, 0.0, vehicles),
                Node::visitable(1, 1.0, 0.0, 10),
                Node::visitable(2, 2.0, 0.0, 20),
                Node::visitable(3, 3.0, 0.0, 30),
                Node::depot(4, 4.0, 0.0),
            ],
            budget,
        )
        .expect("valid");
        set_savings(&mut p, 0.5).expect("valid alpha");
        p
    }

    fn check_links(p: &Problem, sol: &PjsSolution) {
        for route in sol.routes() {
            let nodes = route.nodes();
            for (k, &n) in nodes.iter().enumerate() {
                let st = p.node(n).state();
                assert_eq!(st.link_left, k == 0, "node {n}");
                assert_eq!(st.link_right, k == nodes.len() - 1, "node {n}");
            }
        }
    }

    #[test]
    fn test_pjs_merges_all_into_one_route() {
        let mut p = line(1, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.routes().len(), 1);
        let route = &sol.routes()[0];
        assert_eq!(route.len(), 3);
        assert_eq!(route.revenue(), 60);
        assert!(route.cost() <= p.budget());
        let mut visited = route.nodes().to_vec();
        visited.sort_unstable();
        assert_eq!(visited, vec![1, 2, 3]);
        check_links(&p, &sol);
    }

    #[test]
    fn test_pjs_cost_matches_path() {
        let mut p = line(1, 100.0);
        let mut rng = StdRng::seed_from_u64(1);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        let route = &sol.routes()[0];
        let mut prev = 0;
        let mut cost = 0.0;
        for &n in route.nodes() {
            cost += p.distance(prev, n);
            prev = n;
        }
        cost += p.distance(prev, 4);
        assert!((route.cost() - cost).abs() < 1e-9);
    }

    #[test]
    fn test_pjs_infeasible_node_dropped() {
        let mut p = Problem::new(
            "far",
            vec![
                Node::source(0, 0.0, 0.0, 2),
                Node::visitable(1, 1.0, 0.0, 10),
                Node::visitable(2, 50.0, 50.0, 99),
                Node::depot(3, 2.0, 0.0),
            ],
            10.0,
        )
        .expect("valid");
        set_savings(&mut p, 0.5).expect("valid alpha");
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.routes().len(), 1);
        assert_eq!(sol.routes()[0].nodes(), &[1]);
        assert!(p.node(2).state().route.is_none());
        assert!(!p.node(2).state().link_left);
    }

    #[test]
    fn test_pjs_budget_splits_routes() {
        // singletons already cost the whole budget; forward merges along the
        // line keep the cost at 4, backward ones overshoot
        let mut p = line(3, 4.0);
        let mut rng = StdRng::seed_from_u64(3);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        for r in sol.routes() {
            assert!(r.cost() <= 4.0 + 1e-9);
        }
        assert!(sol.routes().len() <= 3);
    }

    #[test]
    fn test_pjs_fleet_limit_keeps_best_routes() {
        // source and depot coincide and each singleton uses the whole budget,
        // so nothing merges and only the top-revenue route survives
        let mut p = Problem::new(
            "spread",
            vec![
                Node::source(0, 0.0, 0.0, 1),
                Node::visitable(1, 0.0, 5.0, 10),
                Node::visitable(2, 0.0, -5.0, 30),
                Node::visitable(3, 5.0, 0.0, 20),
                Node::depot(4, 0.0, 0.0),
            ],
            10.0,
        )
        .expect("valid");
        set_savings(&mut p, 0.5).expect("valid alpha");
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.routes().len(), 1);
        assert_eq!(sol.routes()[0].nodes(), &[2]);
        assert_eq!(sol.revenue(), 30);
    }

    #[test]
    fn test_pjs_revenue_ties_keep_construction_order() {
        let mut p = Problem::new(
            "ties",
            vec![
                Node::source(0, 0.0, 0.0, 2),
                Node::visitable(1, 0.0, 5.0, 10),
                Node::visitable(2, 0.0, -5.0, 10),
                Node::visitable(3, 5.0, 0.0, 10),
                Node::depot(4, 0.0, 0.0),
            ],
            10.0,
        )
        .expect("valid");
        set_savings(&mut p, 0.5).expect("valid alpha");
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[3, 1, 2], GREEDY_BETA, &mut rng).expect("valid");
        let firsts: Vec<usize> = sol.routes().iter().map(|r| r.nodes()[0]).collect();
        assert_eq!(firsts, vec![3, 1]);
    }

    #[test]
    fn test_pjs_merges_below_fleet_size() {
        // three vehicles for three nodes: merging still runs to a single route
        let mut p = line(3, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.routes().len(), 1);
        assert_eq!(sol.routes()[0].len(), 3);
        assert_eq!(sol.revenue(), 60);
        check_links(&p, &sol);
    }

    #[test]
    fn test_pjs_stops_when_fleet_matches() {
        // the first drawn edge always merges two singletons, which leaves
        // exactly two routes for two vehicles
        let mut p = line(2, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.routes().len(), 2);
        let mut lens: Vec<usize> = sol.routes().iter().map(|r| r.len()).collect();
        lens.sort_unstable();
        assert_eq!(lens, vec![1, 2]);
        assert_eq!(sol.revenue(), 60);
        check_links(&p, &sol);
    }

    #[test]
    fn test_pjs_deterministic_with_seed() {
        let mut p = line(1, 7.0);
        let a = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut StdRng::seed_from_u64(8)).expect("valid");
        let b = pjs(&mut p, 0, &[1, 2, 3], GREEDY_BETA, &mut StdRng::seed_from_u64(8)).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_pjs_duplicates_ignored() {
        let mut p = line(1, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[1, 2, 2, 3, 1], GREEDY_BETA, &mut rng).expect("valid");
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.revenue(), 60);
    }

    #[test]
    fn test_pjs_empty_subset() {
        let mut p = line(2, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let sol = pjs(&mut p, 0, &[], GREEDY_BETA, &mut rng).expect("valid");
        assert!(sol.routes().is_empty());
        assert_eq!(sol.revenue(), 0);
    }

    #[test]
    fn test_pjs_errors() {
        let mut p = line(1, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pjs(&mut p, 1, &[2], GREEDY_BETA, &mut rng),
            Err(SolverError::NotASource(1))
        );
        assert_eq!(
            pjs(&mut p, 0, &[4], GREEDY_BETA, &mut rng),
            Err(SolverError::UnknownNode(4))
        );
        assert!(matches!(
            pjs(&mut p, 0, &[1], 1.0, &mut rng),
            Err(SolverError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pjs_missing_savings() {
        let mut p = line(1, 100.0);
        for e in p.edges_mut() {
            e.clear_savings();
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            pjs(&mut p, 0, &[1, 2], GREEDY_BETA, &mut rng),
            Err(SolverError::MissingSavings { source_id: 0, .. })
        ));
        // a single node needs no edge
        assert!(pjs(&mut p, 0, &[1], GREEDY_BETA, &mut rng).is_ok());
    }

    fn edge_index(p: &Problem, i: usize, j: usize) -> usize {
        p.edges()
            .iter()
            .position(|e| e.inode() == i && e.jnode() == j)
            .expect("edge exists")
    }

    fn singletons(p: &mut Problem, nodes: &[usize]) -> RouteArena {
        let mut arena = RouteArena::default();
        let depot = p.depot();
        for &n in nodes {
            let (fs, td) = (p.distance(0, n), p.distance(n, depot));
            let revenue = p.node(n).revenue();
            let id = arena.push(Route::singleton(0, depot, n, revenue, fs, td));
            *p.node_mut(n).state_mut() = NodeState {
                assigned: false,
                route: Some(id),
                from_source: fs,
                to_depot: td,
                link_left: true,
                link_right: true,
            };
        }
        arena
    }

    #[test]
    fn test_try_merge_conserves_revenue() {
        let mut p = line(1, 100.0);
        let mut arena = singletons(&mut p, &[1, 2]);
        let before: u64 = [RouteId(0), RouteId(1)]
            .iter()
            .map(|&id| arena.get(id).expect("live").revenue())
            .sum();
        let e = edge_index(&p, 1, 2);
        assert_eq!(try_merge(&mut p, &mut arena, e), Merge::Merged);
        assert_eq!(arena.active_len(), 1);
        let merged = arena.get(RouteId(0)).expect("survivor");
        assert_eq!(merged.revenue(), before);
        assert_eq!(merged.nodes(), &[1, 2]);
        // 0 → 1 → 2 → 4
        assert!((merged.cost() - 4.0).abs() < 1e-9);
        assert!(arena.get(RouteId(1)).is_none());
        assert_eq!(p.node(2).state().route, Some(RouteId(0)));
        assert!(!p.node(1).state().link_right);
        assert!(!p.node(2).state().link_left);
    }

    #[test]
    fn test_try_merge_over_budget_leaves_state() {
        // singletons cost 4 each; 0 → 2 → 1 → 4 costs 2 + 1 + 3 = 6 > 5
        let mut p = line(1, 5.0);
        let mut arena = singletons(&mut p, &[1, 2]);
        let states: Vec<NodeState> = [1, 2].iter().map(|&n| p.node(n).state().clone()).collect();
        let routes: Vec<Route> = [RouteId(0), RouteId(1)]
            .iter()
            .map(|&id| arena.get(id).expect("live").clone())
            .collect();

        let e = edge_index(&p, 2, 1);
        assert_eq!(try_merge(&mut p, &mut arena, e), Merge::Rejected);

        assert_eq!(arena.active_len(), 2);
        for (k, &n) in [1, 2].iter().enumerate() {
            assert_eq!(p.node(n).state(), &states[k]);
        }
        assert_eq!(arena.get(RouteId(0)), Some(&routes[0]));
        assert_eq!(arena.get(RouteId(1)), Some(&routes[1]));
    }

    #[test]
    fn test_try_merge_rejects_same_route_and_inner_nodes() {
        let mut p = line(1, 100.0);
        let mut arena = singletons(&mut p, &[1, 2, 3]);
        let (e12, e21, e13, e31) = (
            edge_index(&p, 1, 2),
            edge_index(&p, 2, 1),
            edge_index(&p, 1, 3),
            edge_index(&p, 3, 1),
        );
        assert_eq!(try_merge(&mut p, &mut arena, e12), Merge::Merged);
        // 2 → 1 would close a cycle on the same route
        assert_eq!(try_merge(&mut p, &mut arena, e21), Merge::Skipped);
        // 1 is no longer the last stop of its route
        assert_eq!(try_merge(&mut p, &mut arena, e13), Merge::Rejected);
        // 3 is the last stop of its route and 1 still the first of [1, 2]
        assert_eq!(try_merge(&mut p, &mut arena, e31), Merge::Merged);
        assert_eq!(arena.get(RouteId(2)).expect("survivor").nodes(), &[3, 1, 2]);
    }

    mod merge_properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::Index;

        prop_compose! {
            fn scattered()(
                stops in prop::collection::vec(((0u32..30, 0u32..30), 1u32..50), 2..=8),
                budget in 10u32..90,
            ) -> Problem {
                let mut nodes = vec![Node::source(0, 0.0, 0.0, 1)];
                for ((x, y), revenue) in stops {
                    nodes.push(Node::visitable(nodes.len(), f64::from(x), f64::from(y), revenue));
                }
                nodes.push(Node::depot(nodes.len(), 15.0, 15.0));
                Problem::new("merges", nodes, f64::from(budget)).unwrap()
            }
        }

        fn feasible_singletons(p: &mut Problem) -> RouteArena {
            let depot = p.depot();
            let feasible: Vec<usize> = p
                .visitable()
                .iter()
                .copied()
                .filter(|&n| p.distance(0, n) + p.distance(n, depot) <= p.budget())
                .collect();
            singletons(p, &feasible)
        }

        fn revenue_of(arena: &RouteArena) -> u64 {
            arena
                .active
                .iter()
                .map(|&id| arena.get(id).map_or(0, Route::revenue))
                .sum()
        }

        proptest! {
            #[test]
            fn merges_conserve_revenue_and_rejections_change_nothing(
                mut p in scattered(),
                picks in prop::collection::vec(any::<Index>(), 0..40),
            ) {
                let mut arena = feasible_singletons(&mut p);
                let total = revenue_of(&arena);

                for pick in picks {
                    let e = pick.index(p.edges().len());
                    let (i, j) = (p.edges()[e].inode(), p.edges()[e].jnode());
                    let part = |n: usize| {
                        p.node(n).state().route.and_then(|r| arena.get(r)).map_or(0, Route::revenue)
                    };
                    let (ri, rj) = (part(i), part(j));
                    let states: Vec<NodeState> = p.nodes().iter().map(|n| n.state().clone()).collect();
                    let (slots, active) = (arena.slots.clone(), arena.active.clone());

                    match try_merge(&mut p, &mut arena, e) {
                        Merge::Merged => {
                            let survivor = p.node(i).state().route.and_then(|r| arena.get(r));
                            prop_assert_eq!(survivor.map(Route::revenue), Some(ri + rj));
                            prop_assert!(survivor.map_or(0.0, Route::cost) <= p.budget());
                            prop_assert_eq!(arena.active_len(), active.len() - 1);
                        }
                        Merge::Skipped | Merge::Rejected => {
                            let after: Vec<NodeState> = p.nodes().iter().map(|n| n.state().clone()).collect();
                            prop_assert_eq!(after, states);
                            prop_assert_eq!(&arena.slots, &slots);
                            prop_assert_eq!(&arena.active, &active);
                        }
                    }
                    prop_assert_eq!(revenue_of(&arena), total);
                }
            }
        }
    }
}
