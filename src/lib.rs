//! # u-orienteering
//!
//! Multi-source team orienteering: several sources, each operating a fixed
//! fleet, share one arrival depot. Every route must stay within a travel
//! budget and the goal is to maximize collected revenue.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Edge, Route, Problem, Solution)
//! - [`distance`] — Dense distance matrix
//! - [`selection`] — Greedy and biased-randomized selection over ranked lists
//! - [`assignment`] — Marginal-distance source assignment (Mapper)
//! - [`constructive`] — PJS savings heuristic, deterministic cache, multistart
//! - [`evaluation`] — Route auditing against the budget and recorded totals
//! - [`solver`] — One mapping + routing pass over a whole problem
//! - [`config`] — Serializable solver parameters
//! - [`error`] — Error type

pub mod assignment;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod selection;
pub mod solver;

pub use error::SolverError;
