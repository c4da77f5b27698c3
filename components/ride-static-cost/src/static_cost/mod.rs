// Static cost analysis for RIDE scripts

mod catalogue;
mod context;
mod error;
mod estimator;

pub use catalogue::CostCatalogue;
pub use error::{CostError, EstimationError};
pub use estimator::Estimator;
