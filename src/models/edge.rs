//! Directed edges between visitable nodes.

use rustc_hash::FxHashMap;

/// A directed arc `i → j` between two visitable nodes.
///
/// Edges never touch a source or the depot. Each edge carries one savings
/// value per source, since savings are measured relative to the source a
/// route leaves from.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::Edge;
///
/// let mut e = Edge::new(3, 4, 2.5);
/// assert_eq!(e.saving(0), None);
/// e.set_saving(0, 7.0);
/// assert_eq!(e.saving(0), Some(7.0));
/// ```
#[derive(Debug, Clone)]
pub struct Edge {
    inode: usize,
    jnode: usize,
    cost: f64,
    savings: FxHashMap<usize, f64>,
}

impl Edge {
    /// Creates an edge from `inode` to `jnode` with the given travel cost.
    pub fn new(inode: usize, jnode: usize, cost: f64) -> Self {
        Self {
            inode,
            jnode,
            cost,
            savings: FxHashMap::default(),
        }
    }

    /// Tail node ID.
    pub fn inode(&self) -> usize {
        self.inode
    }

    /// Head node ID.
    pub fn jnode(&self) -> usize {
        self.jnode
    }

    /// Travel cost of the arc.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Savings value of this edge for `source`, if populated.
    pub fn saving(&self, source: usize) -> Option<f64> {
        self.savings.get(&source).copied()
    }

    /// Sets the savings value of this edge for `source`.
    pub fn set_saving(&mut self, source: usize, value: f64) {
        self.savings.insert(source, value);
    }

    /// Drops every savings value.
    pub fn clear_savings(&mut self) {
        self.savings.clear();
    }
}
