use std::collections::HashMap;

use ride_ast::{Expr, Script};

use super::catalogue::CostCatalogue;
use super::context::ScopeContext;
use super::error::{CostError, EstimationError};

/// Cost of any literal leaf.
const LITERAL_COST: u64 = 1;
/// Fixed overhead of reading a reference, charged on every read.
const REFERENCE_COST: u64 = 2;
/// Overhead of a `let` declaration.
const BLOCK_DECLARATION_COST: u64 = 5;
/// Overhead of a conditional, on top of its condition and heavier branch.
const CONDITIONAL_COST: u64 = 1;
/// Overhead of a field access.
const GETTER_COST: u64 = 2;

/// Static complexity estimator for parsed scripts.
///
/// Walks a script's verifier expression against an immutable cost
/// catalogue and an environment of built-in bindings, and returns the
/// script's complexity. The walk never evaluates anything: conditions
/// are not decided (the heavier branch is charged), function bodies are
/// not followed, and data values are never inspected.
///
/// Each `estimate` call runs on a freshly seeded context, so calls on
/// one estimator are independent of each other.
pub struct Estimator {
    catalogue: CostCatalogue,
    environment: HashMap<String, Expr>,
}

impl Estimator {
    /// Build an estimator over the given catalogue and environment. The
    /// environment associates identifiers with the expressions standing
    /// in for built-in values; they enter every traversal pre-charged.
    pub fn new(catalogue: CostCatalogue, environment: HashMap<String, Expr>) -> Estimator {
        Estimator {
            catalogue,
            environment,
        }
    }

    /// Estimate the complexity of a script's verifier expression.
    pub fn estimate(&self, script: &Script) -> Result<u64, EstimationError> {
        let mut context = ScopeContext::seed(&self.environment);
        let verifier_cost = self.expression_cost(&script.verifier, &mut context)?;
        Ok(verifier_cost)
    }

    fn expression_cost<'a>(
        &'a self,
        expr: &'a Expr,
        context: &mut ScopeContext<'a>,
    ) -> Result<u64, CostError> {
        match expr {
            Expr::String(_) | Expr::Long(_) | Expr::Boolean(_) | Expr::Bytes(_) => {
                Ok(LITERAL_COST)
            }

            Expr::Exprs(items) => self.sequence_cost(items, context),

            // The binding is visible only inside the body; a shadowed
            // name is charged anew on its first use there.
            Expr::Block {
                let_name,
                let_value,
                body,
            } => {
                let snapshot = context.clone();
                context.bind(let_name, let_value);
                let body_cost = self.expression_cost(body, context)?;
                *context = snapshot;
                Ok(body_cost + BLOCK_DECLARATION_COST)
            }

            // The wrapper itself contributes no cost.
            Expr::FunctionCall(callable) => self.expression_cost(callable, context),

            Expr::Native { function_id, args } => {
                let function_cost = self
                    .catalogue
                    .native_cost(*function_id)
                    .ok_or(CostError::UnknownNativeFunction(*function_id))?;
                let args_cost = self.sequence_cost(args, context)?;
                Ok(function_cost + args_cost)
            }

            Expr::User { name, args } => {
                let function_cost = self
                    .catalogue
                    .user_cost(name)
                    .ok_or_else(|| CostError::UnknownUserFunction(name.clone()))?;
                let args_cost = self.sequence_cost(args, context)?;
                Ok(function_cost + args_cost)
            }

            // A reference pays for its defining expression once per
            // path; later reads cost only the fixed overhead.
            Expr::Ref(name) => {
                let defining = context
                    .binding(name)
                    .ok_or_else(|| CostError::UnboundIdentifier(name.clone()))?;
                if context.is_charged(name) {
                    return Ok(REFERENCE_COST);
                }
                let defining_cost = self.expression_cost(defining, context)?;
                context.mark_charged(name);
                Ok(defining_cost + REFERENCE_COST)
            }

            // Charge the condition, then the heavier branch. The charged
            // set carried forward must be the accounted branch's, or
            // references after the conditional could ride on work that
            // only the lighter branch performed.
            Expr::If {
                cond,
                if_true,
                if_false,
            } => {
                let condition_cost = self.expression_cost(cond, context)?;
                let snapshot = context.clone();
                let true_cost = self.expression_cost(if_true, context)?;
                let true_context = context.clone();
                *context = snapshot;
                let false_cost = self.expression_cost(if_false, context)?;
                if true_cost > false_cost {
                    *context = true_context;
                    Ok(true_cost + condition_cost + CONDITIONAL_COST)
                } else {
                    Ok(false_cost + condition_cost + CONDITIONAL_COST)
                }
            }

            // The field name plays no part in the cost.
            Expr::Getter { object, field: _ } => {
                let object_cost = self.expression_cost(object, context)?;
                Ok(object_cost + GETTER_COST)
            }

            // Tagged values carrying only identity cost nothing.
            Expr::Object(_) | Expr::Unit => Ok(0),
        }
    }

    fn sequence_cost<'a>(
        &'a self,
        items: &'a [Expr],
        context: &mut ScopeContext<'a>,
    ) -> Result<u64, CostError> {
        let mut total = 0;
        for item in items {
            total += self.expression_cost(item, context)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_v3(verifier: Expr) -> Result<u64, EstimationError> {
        let estimator = Estimator::new(CostCatalogue::v3(), HashMap::new());
        estimator.estimate(&Script::new(verifier))
    }

    fn estimate_with_environment(
        environment: HashMap<String, Expr>,
        verifier: Expr,
    ) -> Result<u64, EstimationError> {
        let estimator = Estimator::new(CostCatalogue::v3(), environment);
        estimator.estimate(&Script::new(verifier))
    }

    #[test]
    fn every_literal_kind_costs_one() {
        assert_eq!(estimate_v3(Expr::string("a")).unwrap(), 1);
        assert_eq!(estimate_v3(Expr::long(42)).unwrap(), 1);
        assert_eq!(estimate_v3(Expr::boolean(true)).unwrap(), 1);
        assert_eq!(estimate_v3(Expr::bytes(vec![0xde, 0xad])).unwrap(), 1);
    }

    #[test]
    fn identity_only_values_cost_nothing() {
        assert_eq!(estimate_v3(Expr::Unit).unwrap(), 0);
        assert_eq!(estimate_v3(Expr::empty_object()).unwrap(), 0);
    }

    #[test]
    fn sequences_sum_their_children() {
        assert_eq!(estimate_v3(Expr::exprs(vec![])).unwrap(), 0);
        let seq = Expr::exprs(vec![Expr::long(1), Expr::Unit, Expr::boolean(false)]);
        assert_eq!(estimate_v3(seq).unwrap(), 2);
    }

    #[test]
    fn function_call_wrapper_is_transparent() {
        let bare = estimate_v3(Expr::native_call(500, vec![])).unwrap();
        let wrapped = estimate_v3(Expr::function_call(Expr::native_call(500, vec![]))).unwrap();
        assert_eq!(bare, 100);
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn native_call_adds_argument_costs() {
        let call = Expr::native_call(501, vec![Expr::long(1), Expr::long(2), Expr::long(3)]);
        assert_eq!(estimate_v3(call).unwrap(), 13);
    }

    #[test]
    fn user_call_adds_argument_costs() {
        let call = Expr::user_call("value", vec![Expr::string("key")]);
        assert_eq!(estimate_v3(call).unwrap(), 14);
    }

    #[test]
    fn block_charges_declaration_overhead() {
        let block = Expr::block("x", Expr::long(5), Expr::reference("x"));
        assert_eq!(estimate_v3(block).unwrap(), 8);
    }

    #[test]
    fn reference_is_charged_once_per_path() {
        let block = Expr::block(
            "x",
            Expr::long(5),
            Expr::exprs(vec![Expr::reference("x"), Expr::reference("x")]),
        );
        // First read pays the definition (1) plus overhead (2); the
        // second pays overhead only.
        assert_eq!(estimate_v3(block).unwrap(), 10);
    }

    #[test]
    fn shadowing_recharges_the_inner_binding() {
        let verifier = Expr::block(
            "x",
            Expr::long(5),
            Expr::exprs(vec![
                Expr::reference("x"),
                Expr::block("x", Expr::long(7), Expr::reference("x")),
                Expr::reference("x"),
            ]),
        );
        // 3 (first read) + 8 (inner block recharges the shadowed name)
        // + 2 (outer charge survives the inner block) + 5.
        assert_eq!(estimate_v3(verifier).unwrap(), 18);
    }

    #[test]
    fn charging_is_transitive_through_definitions() {
        let verifier = Expr::block(
            "a",
            Expr::long(1),
            Expr::block(
                "b",
                Expr::reference("a"),
                Expr::exprs(vec![Expr::reference("b"), Expr::reference("a")]),
            ),
        );
        // Reading `b` prices its definition `a` (3) plus overhead (2),
        // and marks both charged; the later read of `a` costs 2.
        assert_eq!(estimate_v3(verifier).unwrap(), 17);
    }

    #[test]
    fn conditional_charges_the_heavier_branch() {
        let verifier = Expr::if_else(
            Expr::boolean(true),
            Expr::long(1),
            Expr::exprs(vec![Expr::long(1), Expr::long(1), Expr::long(1)]),
        );
        assert_eq!(estimate_v3(verifier).unwrap(), 5);
    }

    #[test]
    fn condition_mutations_persist_past_the_conditional() {
        let verifier = Expr::block(
            "x",
            Expr::long(5),
            Expr::exprs(vec![
                Expr::if_else(Expr::reference("x"), Expr::long(1), Expr::long(1)),
                Expr::reference("x"),
            ]),
        );
        // The condition charges `x` (3); the read after the conditional
        // costs 2.
        assert_eq!(estimate_v3(verifier).unwrap(), 12);
    }

    #[test]
    fn heavier_true_branch_context_is_adopted() {
        let verifier = Expr::block(
            "x",
            Expr::native_call(500, vec![]),
            Expr::exprs(vec![
                Expr::if_else(Expr::boolean(true), Expr::reference("x"), Expr::long(1)),
                Expr::reference("x"),
            ]),
        );
        // then-branch: 102, else-branch: 1. The then-branch charged `x`,
        // so the read after the conditional costs 2.
        assert_eq!(estimate_v3(verifier).unwrap(), 111);
    }

    #[test]
    fn heavier_false_branch_context_is_kept() {
        let verifier = Expr::block(
            "x",
            Expr::native_call(500, vec![]),
            Expr::exprs(vec![
                Expr::if_else(Expr::boolean(true), Expr::long(1), Expr::reference("x")),
                Expr::reference("x"),
            ]),
        );
        assert_eq!(estimate_v3(verifier).unwrap(), 111);
    }

    #[test]
    fn lighter_branch_charges_are_discarded() {
        let verifier = Expr::block(
            "x",
            Expr::long(5),
            Expr::exprs(vec![
                Expr::if_else(
                    Expr::boolean(true),
                    Expr::native_call(500, vec![]),
                    Expr::reference("x"),
                ),
                Expr::reference("x"),
            ]),
        );
        // Only the discarded else-branch charged `x`, so the read after
        // the conditional prices the definition again: 102 + 3 + 5.
        assert_eq!(estimate_v3(verifier).unwrap(), 110);
    }

    #[test]
    fn getter_charges_object_plus_overhead() {
        let verifier = Expr::getter(Expr::reference("tx"), "id");
        // `tx` is seeded pre-charged: 2 for the reference, 2 for the
        // field access.
        assert_eq!(estimate_v3(verifier).unwrap(), 4);
    }

    #[test]
    fn pseudo_bindings_read_as_plain_references() {
        assert_eq!(estimate_v3(Expr::reference("height")).unwrap(), 2);
        assert_eq!(estimate_v3(Expr::reference("tx")).unwrap(), 2);
    }

    #[test]
    fn environment_identifiers_are_seeded_pre_charged() {
        let environment = HashMap::from([("chainId".to_string(), Expr::long(87))]);
        assert_eq!(
            estimate_with_environment(environment.clone(), Expr::reference("chainId")).unwrap(),
            2
        );

        // Shadowing an environment identifier prices the new definition.
        let shadowed = Expr::block("chainId", Expr::long(1), Expr::reference("chainId"));
        assert_eq!(
            estimate_with_environment(environment, shadowed).unwrap(),
            8
        );
    }

    #[test]
    fn unknown_native_function_fails() {
        let err = estimate_v3(Expr::native_call(9999, vec![])).unwrap_err();
        assert_eq!(err.source(), &CostError::UnknownNativeFunction(9999));
    }

    #[test]
    fn unknown_user_function_fails() {
        let err = estimate_v3(Expr::user_call("frobnicate", vec![])).unwrap_err();
        assert_eq!(
            err.source(),
            &CostError::UnknownUserFunction("frobnicate".to_string())
        );
    }

    #[test]
    fn unbound_reference_fails() {
        let err = estimate_v3(Expr::reference("undefined")).unwrap_err();
        assert_eq!(
            err.source(),
            &CostError::UnboundIdentifier("undefined".to_string())
        );
    }

    #[test]
    fn errors_abort_anywhere_in_the_tree() {
        let verifier = Expr::exprs(vec![
            Expr::long(1),
            Expr::if_else(
                Expr::boolean(true),
                Expr::native_call(9999, vec![]),
                Expr::long(1),
            ),
        ]);
        let err = estimate_v3(verifier).unwrap_err();
        assert_eq!(err.source(), &CostError::UnknownNativeFunction(9999));
    }
}
