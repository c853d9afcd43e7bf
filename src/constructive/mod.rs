//! Constructive heuristics for multi-source orienteering routes.
//!
//! - [`set_savings`] — α-weighted savings blend for every edge and source, O(E·S)
//! - [`pjs`] — Panadero-Juan savings merge with biased-randomized edge selection, O(E log E + E·R)
//! - [`PjsCache`] — memoized near-greedy PJS baseline
//! - [`multistart_pjs`] — repeated randomized PJS keeping the best revenue

mod cache;
mod multistart;
mod pjs;
mod savings;

pub use cache::{CacheKey, PjsCache};
pub use multistart::multistart_pjs;
pub use pjs::{pjs, GREEDY_BETA};
pub use savings::set_savings;
