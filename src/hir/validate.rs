//! Internal consistency pass (§SPEC_FULL 4, grounded in the teacher's
//! `hir/hir_validation.rs`), run once binding completes. Checks the
//! invariants of §8 that are practical to re-verify by walking the finished
//! graph; a violation here is a compiler bug, not a user error, so it goes
//! through `internal_invariant!` (panic + abort) rather than
//! `CompilerMessages`.

use crate::hir::root::Root;
use crate::internal_invariant;

/// Runs every check; panics via `internal_invariant!` on the first
/// violation found. Intended to run once per compilation, after the binder
/// queue empties with no user-facing errors.
pub fn run(root: &Root) {
    check_class_registered_under_its_template(root);
    check_every_block_ident_maps_back_to_an_ident_in_this_block(root);
    check_relations_do_not_cascade_a_template_into_itself(root);
    check_bound_expressions_have_concrete_datatypes(root);
}

/// Every Class must appear in its owning Template's `classes` list (§3.1:
/// "Template... Owns a DoublyLinked list of Classes").
fn check_class_registered_under_its_template(root: &Root) {
    for (class_id, class) in root.classes.iter() {
        let template = root.templates.get(class.template);
        internal_invariant!(
            template.classes.contains(class_id),
            "class {class_id:?} not registered under its owning template {:?}",
            class.template
        );
    }
}

/// §8 item 6: every Block's Ident table contains at most one entry per
/// symbol — guaranteed structurally by `FxHashMap`, but each stored
/// `IdentId` must also actually resolve back into the same block's arena
/// entry (catches a builder bug that inserted into the wrong block).
fn check_every_block_ident_maps_back_to_an_ident_in_this_block(root: &Root) {
    for (block_id, block) in root.blocks.iter() {
        for (&symbol, &ident_id) in &block.idents {
            let ident = root.idents.get(ident_id);
            internal_invariant!(
                ident.block == block_id,
                "ident {ident_id:?} for symbol {symbol:?} is registered in block {block_id:?} but points back to {:?}",
                ident.block
            );
        }
    }
}

/// A Relation's parent and child Template must differ; a self-cascade
/// would destroy a Template's own instantiation tree while iterating it.
fn check_relations_do_not_cascade_a_template_into_itself(root: &Root) {
    for (relation_id, relation) in root.relations.iter() {
        if relation.cascade_delete {
            internal_invariant!(
                relation.parent != relation.child,
                "relation {relation_id:?} cascade-deletes a template ({:?}) into itself",
                relation.parent
            );
        }
    }
}

/// §8 item 4: after binding terminates with no errors, every Expression
/// that has been assigned a datatype must be concrete (not `Template`/`Null`
/// — those mean the binder should have re-queued the owner instead of
/// leaving it bound-but-not-concrete).
fn check_bound_expressions_have_concrete_datatypes(root: &Root) {
    if root.messages.has_errors() {
        return;
    }
    for (expr_id, expr) in root.expressions.iter() {
        if let Some(dt_id) = expr.datatype {
            let dt = root.datatypes.get(dt_id);
            internal_invariant!(
                dt.is_concrete(),
                "expression {expr_id:?} bound to non-concrete datatype {dt_id:?} after binding completed with no errors"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use std::path::PathBuf;

    #[test]
    fn a_freshly_built_root_passes_every_check() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        root.block_create(BlockKind::Function, None);
        run(&root);
    }

    #[test]
    #[should_panic(expected = "not registered under its owning template")]
    fn a_class_missing_from_its_templates_list_is_caught() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let fn_block = root.block_create(BlockKind::Function, None);
        let ctor = root.function_create(
            crate::hir::function::FunctionKind::Constructor,
            crate::hir::function::Linkage::Module,
            fn_block,
        );
        let template = root.template_create(ctor, 32);
        let class_block = root.block_create(BlockKind::Class, None);
        let dt = root.datatypes.bool_datatype();
        let class_id = root.class_create(template, class_block, dt, vec![]);
        // Tamper: remove the class from its template's list without
        // touching the class's own `template` pointer, simulating a
        // builder bug.
        root.templates.get_mut(template).classes.remove(class_id);
        run(&root);
    }
}
