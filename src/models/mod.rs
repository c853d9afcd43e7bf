//! Domain model types for multi-source team orienteering.
//!
//! Provides the node arena entries (sources, visitable nodes, depot) with
//! their per-run state, directed edges carrying per-source savings, routes
//! and their handles, the problem instance, assignment results, and
//! solutions.

mod assignment;
mod edge;
mod node;
mod problem;
mod route;
mod solution;

pub use assignment::{Assignment, AssignmentMatrix};
pub use edge::Edge;
pub use node::{Node, NodeRole, NodeState};
pub use problem::Problem;
pub use route::{Route, RouteId};
pub use solution::{PjsSolution, Solution, Violation, ViolationType};
