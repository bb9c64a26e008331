//! Memory-safety diagnostics (§4.6.6, §7 "Relation errors"): every
//! cascade-delete class constructor must insert `self` into some
//! cascade-delete relation before returning. Full data-flow tracking of
//! "insert self" would require surface-grammar-level constructor analysis
//! that's out of this crate's scope (the parser/builder boundary, §1); this
//! checks the structural proxy available at the HIR level — that the
//! constructor's block contains at least one `Relation`/`Call` statement —
//! and reports a `Relation` error when a cascade-child template's
//! constructor has none.

use crate::hir::statement::StatementKind;
use crate::hir::root::Root;
use crate::ids::TemplateId;
use crate::messages::errors::{CompilerError, ErrorKind, ErrorLocation};
use crate::verify::refcount::reference_counted_templates;

pub fn check_cascade_constructors_insert_self(root: &Root, location_for: impl Fn(TemplateId) -> ErrorLocation) -> Vec<CompilerError> {
    let reference_counted = reference_counted_templates(root);
    let mut errors = Vec::new();

    for (template_id, template) in root.templates.iter() {
        if reference_counted.contains(&template_id) {
            // Not a cascade child: no insertion obligation.
            continue;
        }
        let ctor_block = root.functions.get(template.owning_constructor).block;
        let has_insertion_site = root
            .blocks
            .get(ctor_block)
            .statements
            .iter()
            .any(|&s| matches!(root.statements.get(s).kind, StatementKind::Relation | StatementKind::Call));

        if !has_insertion_site {
            errors.push(CompilerError::new(
                ErrorKind::Relation,
                "cascade-delete class constructor never inserts self into a cascade relation",
                location_for(template_id),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use crate::hir::function::{FunctionKind, Linkage};
    use crate::hir::relation_entity::{Relation, TransformerKind};
    use crate::messages::errors::SourcePos;
    use std::path::PathBuf;

    fn loc(_: TemplateId) -> ErrorLocation {
        ErrorLocation {
            scope: "main.rn".into(),
            start_pos: SourcePos { line_number: 1, char_column: 1 },
            end_pos: SourcePos { line_number: 1, char_column: 1 },
        }
    }

    #[test]
    fn a_cascade_child_constructor_with_no_insertion_statement_is_flagged() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let parent_block = root.block_create(BlockKind::Function, None);
        let parent_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, parent_block);
        let parent = root.template_create(parent_ctor, 32);

        let child_block = root.block_create(BlockKind::Function, None);
        let child_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, child_block);
        let child = root.template_create(child_ctor, 32);

        root.relations.alloc(Relation::new(parent, child, TransformerKind::DoublyLinked, true));

        let errors = check_cascade_constructors_insert_self(&root, loc);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn a_cascade_child_constructor_with_a_relation_statement_passes() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let parent_block = root.block_create(BlockKind::Function, None);
        let parent_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, parent_block);
        let parent = root.template_create(parent_ctor, 32);

        let child_block = root.block_create(BlockKind::Function, None);
        let child_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, child_block);
        let child = root.template_create(child_ctor, 32);
        root.statement_create(child_block, StatementKind::Relation);

        root.relations.alloc(Relation::new(parent, child, TransformerKind::DoublyLinked, true));

        let errors = check_cascade_constructors_insert_self(&root, loc);
        assert!(errors.is_empty());
    }
}
