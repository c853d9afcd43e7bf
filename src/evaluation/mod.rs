//! Route and solution auditing.
//!
//! - [`RouteEvaluator`] — recomputes route cost and revenue from the
//!   instance and reports budget or bookkeeping violations

mod evaluator;

pub use evaluator::RouteEvaluator;
