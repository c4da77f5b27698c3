//! Static complexity estimation for RIDE scripts.
//!
//! Node operators reject scripts whose estimated complexity exceeds the
//! network limit, so the estimate must never undershoot the work the
//! evaluator can be made to do. The estimator walks a parsed script's
//! expression tree without evaluating it and returns a single integer
//! complexity, charging each let binding's defining expression at most
//! once per execution path and the heavier side of every conditional.

pub mod static_cost;

pub use static_cost::{CostCatalogue, CostError, EstimationError, Estimator};
