use std::collections::{BTreeMap, HashMap, HashSet};

use ride_ast::Expr;

/// Identifier of the pseudo-binding holding the current block height.
const HEIGHT_VAR: &str = "height";
/// Identifier of the pseudo-binding holding the transaction under check.
const TX_VAR: &str = "tx";

// Placeholder definitions for the platform pseudo-bindings. They are
// seeded pre-charged, so their shape only matters if a script shadows
// and re-reads them.
static HEIGHT_PLACEHOLDER: Expr = Expr::Long(0);
static TX_PLACEHOLDER: Expr = Expr::Object(BTreeMap::new());

/// Scoped identifier state for one traversal.
///
/// `expressions` maps each in-scope identifier to its defining
/// expression; `references` holds the identifiers whose defining
/// expression has already been charged on the current path. Cloning
/// snapshots membership only, the expression trees themselves are
/// shared, which keeps branch-local snapshots O(context).
#[derive(Debug, Clone)]
pub(crate) struct ScopeContext<'a> {
    expressions: HashMap<&'a str, &'a Expr>,
    references: HashSet<&'a str>,
}

impl<'a> ScopeContext<'a> {
    /// Build the initial context for a traversal. Every environment
    /// identifier enters scope pre-charged, as do the `height` and `tx`
    /// pseudo-bindings.
    pub(crate) fn seed(environment: &'a HashMap<String, Expr>) -> ScopeContext<'a> {
        let mut expressions = HashMap::with_capacity(environment.len() + 2);
        let mut references = HashSet::with_capacity(environment.len() + 2);
        for (name, definition) in environment {
            expressions.insert(name.as_str(), definition);
            references.insert(name.as_str());
        }
        expressions.insert(HEIGHT_VAR, &HEIGHT_PLACEHOLDER);
        references.insert(HEIGHT_VAR);
        expressions.insert(TX_VAR, &TX_PLACEHOLDER);
        references.insert(TX_VAR);
        ScopeContext {
            expressions,
            references,
        }
    }

    /// Install a `let` binding. The name leaves the charged set so that a
    /// shadowed identifier is charged again on first use in the body.
    pub(crate) fn bind(&mut self, name: &'a str, value: &'a Expr) {
        self.expressions.insert(name, value);
        self.references.remove(name);
    }

    /// The defining expression of `name`, if it is in scope.
    pub(crate) fn binding(&self, name: &str) -> Option<&'a Expr> {
        self.expressions.get(name).copied()
    }

    /// Whether `name`'s defining expression has been charged on this path.
    pub(crate) fn is_charged(&self, name: &str) -> bool {
        self.references.contains(name)
    }

    /// Record that `name`'s defining expression has been charged.
    pub(crate) fn mark_charged(&mut self, name: &'a str) {
        self.references.insert(name);
    }
}
