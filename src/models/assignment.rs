//! Source assignment results.

use serde::{Deserialize, Serialize};

/// Binary sources × node-ids matrix: entry `[s, n]` is 1 when node `n` is
/// drafted by source `s`.
///
/// Rows follow the order of the sources passed at construction; columns are
/// node ids (every id of the instance, not only visitable ones).
///
/// # Examples
///
/// ```
/// use u_orienteering::models::AssignmentMatrix;
///
/// let mut m = AssignmentMatrix::new(&[0, 1], 5);
/// m.set(1, 3);
/// assert_eq!(m.get(1, 3), 1);
/// assert_eq!(m.owner_of(3), Some(1));
/// assert_eq!(m.total(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMatrix {
    sources: Vec<usize>,
    num_nodes: usize,
    data: Vec<u8>,
}

impl AssignmentMatrix {
    /// Creates an all-zero matrix.
    pub fn new(sources: &[usize], num_nodes: usize) -> Self {
        Self {
            sources: sources.to_vec(),
            num_nodes,
            data: vec![0; sources.len() * num_nodes],
        }
    }

    fn row_index(&self, source: usize) -> Option<usize> {
        self.sources.iter().position(|&s| s == source)
    }

    /// Entry for (`source`, `node`); 0 for unknown sources.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn get(&self, source: usize, node: usize) -> u8 {
        assert!(node < self.num_nodes, "node {node} out of range");
        self.row_index(source)
            .map_or(0, |r| self.data[r * self.num_nodes + node])
    }

    /// Marks `node` as drafted by `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a row of the matrix or `node` is out of range.
    pub fn set(&mut self, source: usize, node: usize) {
        assert!(node < self.num_nodes, "node {node} out of range");
        let r = self
            .row_index(source)
            .unwrap_or_else(|| panic!("source {source} is not a matrix row"));
        self.data[r * self.num_nodes + node] = 1;
    }

    /// Row of `source`, indexed by node id.
    pub fn row(&self, source: usize) -> Option<&[u8]> {
        self.row_index(source)
            .map(|r| &self.data[r * self.num_nodes..(r + 1) * self.num_nodes])
    }

    /// Source ids in row order.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Number of columns.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Sum of all entries.
    pub fn total(&self) -> usize {
        self.data.iter().map(|&v| usize::from(v)).sum()
    }

    /// The first source whose row marks `node`, if any.
    pub fn owner_of(&self, node: usize) -> Option<usize> {
        self.sources
            .iter()
            .copied()
            .find(|&s| self.get(s, node) == 1)
    }
}

/// Output of the mapper: the assignment matrix plus the nodes each source
/// drafted, in draft order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    matrix: AssignmentMatrix,
    drafted: Vec<Vec<usize>>,
}

impl Assignment {
    /// Creates an empty assignment over the given sources.
    pub fn new(sources: &[usize], num_nodes: usize) -> Self {
        Self {
            matrix: AssignmentMatrix::new(sources, num_nodes),
            drafted: vec![Vec::new(); sources.len()],
        }
    }

    /// Records that `source` drafted `node`.
    pub(crate) fn draft(&mut self, source: usize, node: usize) {
        self.matrix.set(source, node);
        if let Some(r) = self.matrix.row_index(source) {
            self.drafted[r].push(node);
        }
    }

    /// The assignment matrix.
    pub fn matrix(&self) -> &AssignmentMatrix {
        &self.matrix
    }

    /// Consumes the assignment, returning the matrix.
    pub fn into_matrix(self) -> AssignmentMatrix {
        self.matrix
    }

    /// Nodes drafted by `source`, in draft order (empty for unknown sources).
    pub fn nodes_of(&self, source: usize) -> &[usize] {
        self.matrix
            .row_index(source)
            .map_or(&[], |r| self.drafted[r].as_slice())
    }

    /// Number of nodes drafted across all sources.
    pub fn num_assigned(&self) -> usize {
        self.drafted.iter().map(Vec::len).sum()
    }
}
