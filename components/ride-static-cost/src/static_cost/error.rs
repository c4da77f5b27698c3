/// Typed errors raised while walking a script's expression tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    /// A native call used an opcode the catalogue does not price.
    #[error("no native function {0} in scope")]
    UnknownNativeFunction(i16),

    /// A user call used a name the catalogue does not price.
    #[error("no user function `{0}` in scope")]
    UnknownUserFunction(String),

    /// A reference to an identifier with no binding in scope.
    #[error("no variable `{0}` in context")]
    UnboundIdentifier(String),
}

/// Error surfaced by `Estimator::estimate`.
///
/// Any traversal error aborts estimation outright; no partial cost is
/// reported for a script that cannot be fully priced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("estimation: {source}")]
pub struct EstimationError {
    #[from]
    source: CostError,
}

impl EstimationError {
    /// The traversal error that aborted estimation.
    pub fn source(&self) -> &CostError {
        &self.source
    }
}
