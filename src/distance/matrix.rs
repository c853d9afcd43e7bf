//! Dense distance matrix.

use crate::models::Node;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by node id. Supports both Euclidean distance computation from
/// node coordinates and explicit (possibly asymmetric) distances.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::Node;
/// use u_orienteering::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::source(0, 0.0, 0.0, 1),
///     Node::visitable(1, 3.0, 4.0, 10),
///     Node::depot(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from node coordinates.
    ///
    /// `nodes[k]` is expected to carry id `k`.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Smallest distance from any of `candidates` to `to`.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn min_from(&self, candidates: impl IntoIterator<Item = usize>, to: usize) -> Option<f64> {
        candidates
            .into_iter()
            .map(|c| self.get(c, to))
            .min_by(f64::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::source(0, 0.0, 0.0, 1),
            Node::visitable(1, 3.0, 4.0, 10),
            Node::visitable(2, 0.0, 8.0, 20),
        ]
    }

    #[test]
    fn test_from_nodes() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_nodes_symmetric() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_min_from() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes());
        // To node 1 at (3,4): node 0 is 5 away, node 2 is 5 away as well
        assert!((dm.min_from([0, 2], 1).expect("non-empty") - 5.0).abs() < 1e-10);
        // To node 2 at (0,8): node 0 is 8 away, node 1 is 5 away
        assert!((dm.min_from([0, 1], 2).expect("non-empty") - 5.0).abs() < 1e-10);
        assert_eq!(dm.min_from([], 2), None);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 0), 15.0);
    }
}
