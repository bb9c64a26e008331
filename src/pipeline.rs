//! Top-level driver (§2, data-flow diagram): wires the scheduler, type
//! checker, transformer engine, and verification passes into the single
//! "run the binder to a fixpoint, then verify" entry point the CLI calls.
//! The lexer/parser that produces the initial HIR is an external
//! collaborator (§1) — by the time `compile` runs, `root` already has
//! whatever Blocks/Statements/Expressions/Bindings that front end enqueued.

use crate::binder::binding::{Binding, BindingKind, BindingOutcome};
use crate::binder::instantiate::{instantiate_class, instantiate_signature};
use crate::binder::scheduler;
use crate::binder::secret;
use crate::binder::typecheck;
use crate::hir::expression::ExprKind;
use crate::hir::ident::IdentKind;
use crate::hir::root::Root;
use crate::hir::statement::StatementKind;
use crate::messages::errors::{CompilerError, ErrorLocation, SourcePos};
use crate::verify;

fn location_of(root: &Root, expr: crate::ids::ExpressionId) -> ErrorLocation {
    match &root.expressions.get(expr).line {
        Some(line) => ErrorLocation {
            scope: root.filepaths.get(line.filepath).absolute.clone(),
            start_pos: SourcePos { line_number: line.line_number, char_column: 1 },
            end_pos: SourcePos { line_number: line.line_number, char_column: 1 },
        },
        None => ErrorLocation {
            scope: root.config.entry_file.clone(),
            start_pos: SourcePos { line_number: 0, char_column: 0 },
            end_pos: SourcePos { line_number: 0, char_column: 0 },
        },
    }
}

/// One step of `BindingKind::TypecheckExpression`: the representative
/// dispatch the type checker actually implements (§4.7 gives `BinaryOp`
/// and array-literal unification as the worked rules; `Call` additionally
/// drives §4.6.3 instantiation since it's the one expression kind that
/// creates new Signatures/Classes rather than just unifying already-bound
/// children). Every remaining `ExprKind` is typed by the surface-grammar
/// walker that built it and reaches this binder only to be marked done.
fn step_typecheck_expression(root: &mut Root, expr: crate::ids::ExpressionId) -> BindingOutcome {
    let location = location_of(root, expr);
    let kind = root.expressions.get(expr).kind;
    let children = root.expressions.get(expr).children.clone();

    let result: Result<Option<crate::ids::DatatypeId>, CompilerError> = match kind {
        ExprKind::BinaryOp(op) => {
            if children.len() != 2 {
                return BindingOutcome::Done;
            }
            let (lhs, rhs) = (children[0], children[1]);
            match (root.expressions.get(lhs).datatype, root.expressions.get(rhs).datatype) {
                (Some(l), Some(r)) => match typecheck::infer_binary(&root.datatypes, l, r, op, &location) {
                    Ok(shape) => Ok(Some(secret::propagate(&mut root.datatypes, shape, l, r))),
                    Err(err) => Err(err),
                },
                _ => return BindingOutcome::Ready,
            }
        }
        ExprKind::ArrayBuilder => {
            let element_types: Option<Vec<_>> = children.iter().map(|&c| root.expressions.get(c).datatype).collect();
            match element_types {
                Some(types) => typecheck::infer_array_literal(&root.datatypes, &types, &location).map(Some),
                None => return BindingOutcome::Ready,
            }
        }
        ExprKind::Index => {
            if children.len() != 2 {
                return BindingOutcome::Done;
            }
            match root.expressions.get(children[1]).datatype {
                Some(index_ty) => match secret::reject_secret_index(&root.datatypes, index_ty, &location) {
                    Ok(()) => Ok(None),
                    Err(err) => Err(err),
                },
                None => return BindingOutcome::Ready,
            }
        }
        ExprKind::Call => {
            if children.is_empty() {
                return BindingOutcome::Done;
            }
            let callee = children[0];
            let arg_exprs = &children[1..];
            let arg_types: Option<Vec<_>> = arg_exprs.iter().map(|&c| root.expressions.get(c).datatype).collect();
            let arg_types = match arg_types {
                Some(types) => types,
                None => return BindingOutcome::Ready,
            };

            let function = root
                .expressions
                .get(callee)
                .ident_refs
                .iter()
                .find_map(|&ident_id| match root.idents.get(ident_id).kind {
                    IdentKind::Function(f) => Some(f),
                    _ => None,
                });
            let function = match function {
                Some(f) => f,
                // Callee Ident still `Undefined` or not yet resolved; the
                // Event that resolves it re-enqueues this Binding (§4.6.1),
                // but until then there's nothing to do but retry.
                None => return BindingOutcome::Ready,
            };

            if root.functions.get(function).is_constructor() {
                let template = root
                    .functions
                    .get(function)
                    .owning_template
                    .expect("Constructor Function without an owning Template (§3.1 invariant)");
                let class = instantiate_class(root, template, arg_types);
                Ok(Some(root.classes.get(class).datatype))
            } else {
                let signature = instantiate_signature(root, function, arg_types, None, None);
                Ok(root.signatures.get(signature).return_type)
            }
        }
        _ => Ok(None),
    };

    match result {
        Ok(Some(datatype)) => {
            root.expressions.get_mut(expr).datatype = Some(datatype);
            BindingOutcome::Done
        }
        Ok(None) => BindingOutcome::Done,
        Err(err) => {
            root.messages.push_error(err);
            BindingOutcome::Done
        }
    }
}

/// Runs the binder to a fixpoint, then the verification passes (§2.10).
/// Returns `true` iff compilation produced no errors and no Event was left
/// with Bindings still attached to it when the ready queue emptied.
pub fn compile(root: &mut Root) -> bool {
    let unresolved = scheduler::run_to_fixpoint(root, |root, _id, binding| match binding.kind {
        BindingKind::TypecheckExpression(expr) => step_typecheck_expression(root, expr),
    });

    for &event in &unresolved {
        let _ = event;
        root.messages.push_error(CompilerError::new(
            crate::messages::errors::ErrorKind::NameResolution,
            "identifier still undefined when the binder queue emptied",
            ErrorLocation {
                scope: root.config.entry_file.clone(),
                start_pos: SourcePos { line_number: 0, char_column: 0 },
                end_pos: SourcePos { line_number: 0, char_column: 0 },
            },
        ));
    }

    let relation_ids: Vec<_> = root.relations.iter().map(|(id, _)| id).collect();
    for relation in relation_ids {
        if root.relations.get(relation).generated_statements.is_empty() {
            crate::transformer::run(root, relation);
        }
    }

    if let Some(cycle) = verify::cycle::find_reference_counted_cycle(root) {
        root.messages.push_error(CompilerError::new(
            crate::messages::errors::ErrorKind::Relation,
            format!("Relationship loop contains reference-counted class: {:?}", cycle.path),
            ErrorLocation {
                scope: root.config.entry_file.clone(),
                start_pos: SourcePos { line_number: 0, char_column: 0 },
                end_pos: SourcePos { line_number: 0, char_column: 0 },
            },
        ));
    }

    let entry_file = root.config.entry_file.clone();
    for err in verify::safety::check_cascade_constructors_insert_self(root, |_| ErrorLocation {
        scope: entry_file.clone(),
        start_pos: SourcePos { line_number: 0, char_column: 0 },
        end_pos: SourcePos { line_number: 0, char_column: 0 },
    }) {
        root.messages.push_error(err);
    }

    // §8 scenario 4: branching on a secret condition is rejected. Runs as a
    // pass over every If/ElseIf/While statement once the fixpoint empties,
    // the same shape as the Relation -> Transformer pass above, rather than
    // through a per-statement Binding (see `binder::binding`'s doc comment).
    let statement_ids: Vec<_> = root.statements.iter().map(|(id, _)| id).collect();
    for stmt_id in statement_ids {
        let kind = root.statements.get(stmt_id).kind;
        if !matches!(kind, StatementKind::If | StatementKind::ElseIf | StatementKind::While) {
            continue;
        }
        let Some(condition) = root.statements.get(stmt_id).expression else {
            continue;
        };
        let Some(condition_ty) = root.expressions.get(condition).datatype else {
            continue;
        };
        let location = location_of(root, condition);
        if let Err(err) = secret::reject_secret_in_branch(&root.datatypes, condition_ty, &location) {
            root.messages.push_error(err);
        }
    }

    // §8 items 1-7, §SPEC_FULL 4: internal consistency pass, run once
    // binding and verification are done.
    crate::hir::validate::run(root);

    !root.messages.has_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use std::path::PathBuf;

    #[test]
    fn a_fresh_root_with_no_bindings_compiles_cleanly() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        assert!(compile(&mut root));
    }

    #[test]
    fn two_reachable_uint_literals_unify_through_the_fixpoint() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let lhs = root.expressions.alloc(crate::hir::expression::Expression::new(ExprKind::Literal));
        let rhs = root.expressions.alloc(crate::hir::expression::Expression::new(ExprKind::Literal));
        let u32_ty = root.datatypes.uint_datatype(32);
        root.expressions.get_mut(lhs).datatype = Some(u32_ty);
        root.expressions.get_mut(rhs).datatype = Some(u32_ty);

        let add = root.expressions.alloc(crate::hir::expression::Expression::new(ExprKind::BinaryOp(
            crate::hir::expression::Operator::Add,
        )));
        root.expressions.get_mut(add).children = vec![lhs, rhs];

        scheduler::enqueue(&mut root, Binding::new(BindingKind::TypecheckExpression(add)));
        assert!(compile(&mut root));
        assert_eq!(root.expressions.get(add).datatype, Some(u32_ty));
    }
}
