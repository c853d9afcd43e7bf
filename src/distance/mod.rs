//! Distance matrices.
//!
//! Provides a dense distance matrix indexed by node id.

mod matrix;

pub use matrix::DistanceMatrix;
