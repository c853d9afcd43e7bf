//! Node type: sources, visitable nodes, and the depot.

use serde::{Deserialize, Serialize};

use super::RouteId;

/// The role a node plays in a multi-source orienteering instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    /// A departure point operating one or more vehicles.
    Source,
    /// A node offering revenue to the first route that passes through it.
    Visitable,
    /// The shared arrival point of every route.
    Depot,
}

/// Per-run bookkeeping carried by a node.
///
/// Written by the mapper (`assigned`) and by PJS (everything else). Both
/// reset the fields they use at the start of every pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    /// Drafted by some source in the current mapping.
    pub assigned: bool,
    /// Route currently holding this node, if any.
    pub route: Option<RouteId>,
    /// Distance from the routing source to this node.
    pub from_source: f64,
    /// Distance from this node to the depot.
    pub to_depot: f64,
    /// First stop of its route (still linked to the source).
    pub link_left: bool,
    /// Last stop of its route (still linked to the depot).
    pub link_right: bool,
}

/// A location of the instance.
///
/// Ids are unique and dense (`0..n`) within a [`Problem`](super::Problem).
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Node, NodeRole};
///
/// let s = Node::source(0, 0.0, 0.0, 2);
/// assert_eq!(s.role(), NodeRole::Source);
/// assert_eq!(s.vehicles(), 2);
///
/// let c = Node::visitable(1, 3.0, 4.0, 10);
/// assert_eq!(c.revenue(), 10);
/// assert!((s.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
    revenue: u32,
    role: NodeRole,
    vehicles: usize,
    state: NodeState,
}

impl Node {
    fn new(id: usize, x: f64, y: f64, revenue: u32, role: NodeRole, vehicles: usize) -> Self {
        Self {
            id,
            x,
            y,
            revenue,
            role,
            vehicles,
            state: NodeState::default(),
        }
    }

    /// Creates a visitable node offering `revenue`.
    pub fn visitable(id: usize, x: f64, y: f64, revenue: u32) -> Self {
        Self::new(id, x, y, revenue, NodeRole::Visitable, 0)
    }

    /// Creates a source operating `vehicles` vehicles.
    pub fn source(id: usize, x: f64, y: f64, vehicles: usize) -> Self {
        Self::new(id, x, y, 0, NodeRole::Source, vehicles)
    }

    /// Creates the depot.
    pub fn depot(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, x, y, 0, NodeRole::Depot, 0)
    }

    /// Sets the revenue of this node.
    pub fn with_revenue(mut self, revenue: u32) -> Self {
        self.revenue = revenue;
        self
    }

    /// Node ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Revenue collected when a route visits this node.
    pub fn revenue(&self) -> u32 {
        self.revenue
    }

    /// Role of the node.
    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Number of vehicles starting here (0 unless this is a source).
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Returns `true` for source nodes.
    pub fn is_source(&self) -> bool {
        self.role == NodeRole::Source
    }

    /// Returns `true` for visitable nodes.
    pub fn is_visitable(&self) -> bool {
        self.role == NodeRole::Visitable
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.role == NodeRole::Depot
    }

    /// Current per-run state.
    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
