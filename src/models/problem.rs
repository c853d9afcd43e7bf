//! Multi-source orienteering problem instance.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{Edge, Node, NodeRole};
use crate::distance::DistanceMatrix;
use crate::SolverError;

static NEXT_PROBLEM_ID: AtomicU64 = AtomicU64::new(0);

/// A multi-source team orienteering instance.
///
/// Holds the node arena (indexed by node id), the distance matrix, the edge
/// set between visitable nodes, and the travel budget every route must
/// respect. Node per-run state lives in the arena, so any mapping or routing
/// pass needs `&mut Problem`; clone the problem to run independent trials in
/// parallel.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Node, Problem};
///
/// let problem = Problem::new(
///     "line",
///     vec![
///         Node::source(0, 0.0, 0.0, 1),
///         Node::visitable(1, 1.0, 0.0, 10),
///         Node::visitable(2, 2.0, 0.0, 20),
///         Node::depot(3, 3.0, 0.0),
///     ],
///     10.0,
/// )
/// .unwrap();
/// assert_eq!(problem.sources(), &[0]);
/// assert_eq!(problem.visitable(), &[1, 2]);
/// assert_eq!(problem.depot(), 3);
/// assert_eq!(problem.edges().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    id: u64,
    name: String,
    nodes: Vec<Node>,
    sources: Vec<usize>,
    visitable: Vec<usize>,
    depot: usize,
    budget: f64,
    distances: DistanceMatrix,
    edges: Vec<Edge>,
}

impl Problem {
    /// Builds an instance using Euclidean distances between node coordinates.
    ///
    /// Node ids must be unique and dense (`0..n`) in any order.
    pub fn new(name: impl Into<String>, nodes: Vec<Node>, budget: f64) -> Result<Self, SolverError> {
        let nodes = sort_dense(nodes)?;
        let distances = DistanceMatrix::from_nodes(&nodes);
        Self::build(name.into(), nodes, distances, budget)
    }

    /// Builds an instance with an explicit (possibly asymmetric) distance matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_orienteering::distance::DistanceMatrix;
    /// use u_orienteering::models::{Node, Problem};
    ///
    /// #[rustfmt::skip]
    /// let dm = DistanceMatrix::from_data(4, vec![
    ///     0.0, 2.0, 3.0, 5.0,
    ///     2.0, 0.0, 1.0, 3.0,
    ///     3.0, 7.0, 0.0, 2.0,
    ///     5.0, 3.0, 2.0, 0.0,
    /// ])
    /// .unwrap();
    /// let nodes = vec![
    ///     Node::source(0, 0.0, 0.0, 1),
    ///     Node::visitable(1, 0.0, 0.0, 4),
    ///     Node::visitable(2, 0.0, 0.0, 6),
    ///     Node::depot(3, 0.0, 0.0),
    /// ];
    /// let problem = Problem::with_distances("asym", nodes, dm, 10.0).unwrap();
    /// assert_eq!(problem.distance(1, 2), 1.0);
    /// assert_eq!(problem.distance(2, 1), 7.0);
    /// ```
    pub fn with_distances(
        name: impl Into<String>,
        nodes: Vec<Node>,
        distances: DistanceMatrix,
        budget: f64,
    ) -> Result<Self, SolverError> {
        let nodes = sort_dense(nodes)?;
        if distances.size() != nodes.len() {
            return Err(SolverError::MalformedInstance(format!(
                "distance matrix has size {} but the instance has {} nodes",
                distances.size(),
                nodes.len()
            )));
        }
        Self::build(name.into(), nodes, distances, budget)
    }

    fn build(
        name: String,
        nodes: Vec<Node>,
        distances: DistanceMatrix,
        budget: f64,
    ) -> Result<Self, SolverError> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(SolverError::MalformedInstance(format!(
                "budget must be a non-negative number, got {budget}"
            )));
        }

        let mut sources = Vec::new();
        let mut visitable = Vec::new();
        let mut depots = Vec::new();
        for node in &nodes {
            match node.role() {
                NodeRole::Source => {
                    if node.vehicles() == 0 {
                        return Err(SolverError::MalformedInstance(format!(
                            "source {} operates no vehicles",
                            node.id()
                        )));
                    }
                    sources.push(node.id());
                }
                NodeRole::Visitable => visitable.push(node.id()),
                NodeRole::Depot => depots.push(node.id()),
            }
        }

        let depot = match depots.as_slice() {
            [depot] => *depot,
            [] => return Err(SolverError::MalformedInstance("missing depot".into())),
            _ => {
                return Err(SolverError::MalformedInstance(format!(
                    "expected one depot, found {}",
                    depots.len()
                )))
            }
        };
        if sources.is_empty() {
            return Err(SolverError::MalformedInstance("no source".into()));
        }

        let mut edges = Vec::with_capacity(visitable.len() * visitable.len().saturating_sub(1));
        for &i in &visitable {
            for &j in &visitable {
                if i != j {
                    edges.push(Edge::new(i, j, distances.get(i, j)));
                }
            }
        }

        Ok(Self {
            id: NEXT_PROBLEM_ID.fetch_add(1, Ordering::Relaxed),
            name,
            nodes,
            sources,
            visitable,
            depot,
            budget,
            distances,
            edges,
        })
    }

    /// Process-unique identifier of this instance (shared by its clones).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: usize) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Source ids in instance order.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Visitable node ids in ascending order.
    pub fn visitable(&self) -> &[usize] {
        &self.visitable
    }

    /// Depot id.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Maximum travel cost of any route.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Total number of nodes (sources, visitable nodes, depot).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vehicles across all sources.
    pub fn total_vehicles(&self) -> usize {
        self.sources.iter().map(|&s| self.nodes[s].vehicles()).sum()
    }

    /// Travel distance from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Edges between every ordered pair of distinct visitable nodes.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable access to the edges, used to populate savings.
    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// Clears the per-run state of every node.
    pub fn reset_state(&mut self) {
        for node in &mut self.nodes {
            *node.state_mut() = Default::default();
        }
    }

    pub(crate) fn ensure_source(&self, id: usize) -> Result<(), SolverError> {
        match self.nodes.get(id) {
            Some(node) if node.is_source() => Ok(()),
            _ => Err(SolverError::NotASource(id)),
        }
    }

    pub(crate) fn ensure_visitable(&self, id: usize) -> Result<(), SolverError> {
        match self.nodes.get(id) {
            Some(node) if node.is_visitable() => Ok(()),
            _ => Err(SolverError::UnknownNode(id)),
        }
    }
}

fn sort_dense(mut nodes: Vec<Node>) -> Result<Vec<Node>, SolverError> {
    nodes.sort_by_key(|n| n.id());
    for (idx, node) in nodes.iter().enumerate() {
        if node.id() != idx {
            return Err(SolverError::MalformedInstance(format!(
                "node ids must be unique and dense, found {} at position {idx}",
                node.id()
            )));
        }
    }
    Ok(nodes)
}
