//! Route type and route handles.

use serde::{Deserialize, Serialize};

/// Handle of a route inside the arena of one PJS pass.
///
/// Handles are only meaningful within the pass that created them; route
/// identity is always compared through handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Position of the route in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A path from a source through visitable nodes to the depot.
///
/// Source and depot are not stored in `nodes`. `cost` covers the whole path
/// (source → first, internal arcs, last → depot); `revenue` is the sum of
/// member node revenues.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::Route;
///
/// let route = Route::singleton(0, 9, 4, 10, 3.0, 5.0);
/// assert_eq!(route.nodes(), &[4]);
/// assert_eq!(route.revenue(), 10);
/// assert!((route.cost() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    source: usize,
    depot: usize,
    nodes: Vec<usize>,
    revenue: u64,
    cost: f64,
}

impl Route {
    /// Creates the route `source → node → depot`.
    pub fn singleton(
        source: usize,
        depot: usize,
        node: usize,
        revenue: u32,
        from_source: f64,
        to_depot: f64,
    ) -> Self {
        Self {
            source,
            depot,
            nodes: vec![node],
            revenue: u64::from(revenue),
            cost: from_source + to_depot,
        }
    }

    /// Assembles a route from already computed totals.
    pub fn from_parts(source: usize, depot: usize, nodes: Vec<usize>, revenue: u64, cost: f64) -> Self {
        Self {
            source,
            depot,
            nodes,
            revenue,
            cost,
        }
    }

    /// Cost of the route obtained by linking the last stop `i` of a route
    /// costing `icost` to the first stop `j` of a route costing `jcost`.
    pub fn merged_cost(
        icost: f64,
        i_to_depot: f64,
        jcost: f64,
        j_from_source: f64,
        edge_cost: f64,
    ) -> f64 {
        (icost - i_to_depot) + (jcost - j_from_source) + edge_cost
    }

    /// Appends `other` after this route, joined by an arc of `edge_cost`.
    ///
    /// `i_to_depot` is the depot leg dropped from this route and
    /// `j_from_source` the source leg dropped from `other`.
    pub(crate) fn absorb(
        &mut self,
        other: Route,
        i_to_depot: f64,
        j_from_source: f64,
        edge_cost: f64,
    ) {
        self.cost = Self::merged_cost(self.cost, i_to_depot, other.cost, j_from_source, edge_cost);
        self.revenue += other.revenue;
        self.nodes.extend(other.nodes);
    }

    /// Source node ID.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Depot node ID.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Visited nodes in order (excluding source and depot).
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First visited node.
    pub fn first(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Last visited node.
    pub fn last(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
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
