//! Source assignment: partitions visitable nodes among sources before
//! per-source routing.
//!
//! - [`map_sources`] — marginal-distance ranking with round-robin drafting

mod mapper;

pub use mapper::{map_sources, marginal_distances};
