//! Reference-counting classification (§4.6.6): a Template is
//! reference-counted iff it is *not* a child in any cascade-delete
//! Relation. Computed once after all Relations are processed; feeds
//! `verify::cycle`.

use crate::hir::root::Root;
use crate::ids::TemplateId;
use rustc_hash::FxHashSet;

pub fn reference_counted_templates(root: &Root) -> FxHashSet<TemplateId> {
    let mut cascade_children: FxHashSet<TemplateId> = FxHashSet::default();
    for (_, relation) in root.relations.iter() {
        if relation.cascade_delete {
            cascade_children.insert(relation.child);
        }
    }

    root.templates
        .iter()
        .map(|(id, _)| id)
        .filter(|id| !cascade_children.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use crate::hir::function::{FunctionKind, Linkage};
    use crate::hir::relation_entity::{Relation, TransformerKind};
    use std::path::PathBuf;

    #[test]
    fn a_cascade_delete_child_template_is_not_reference_counted() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let make_template = |root: &mut Root| {
            let block = root.block_create(BlockKind::Function, None);
            let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, block);
            root.template_create(ctor, 32)
        };
        let parent = make_template(&mut root);
        let child = make_template(&mut root);
        root.relations
            .alloc(Relation::new(parent, child, TransformerKind::DoublyLinked, true));

        let rc = reference_counted_templates(&root);
        assert!(rc.contains(&parent));
        assert!(!rc.contains(&child));
    }
}
