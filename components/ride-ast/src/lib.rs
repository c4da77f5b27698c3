//! Expression algebra for RIDE scripts.
//!
//! The parser lowers script sources into the [`Expr`] tree defined here;
//! analysis passes and the evaluator dispatch on its variant tags. This
//! crate carries only the data model: the expression algebra, the script
//! container, and the library-version selector.

pub mod representations;
pub mod version;

pub use representations::{Expr, Script};
pub use version::RideVersion;
