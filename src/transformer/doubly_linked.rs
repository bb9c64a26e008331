//! DoublyLinked transformer (§4.1, §8 scenario 5): `relation DoublyLinked
//! Graph Node cascade` generates `appendNode`, `removeNode`, `firstNode`,
//! `lastNode`, `nextGraphNode`, `prevGraphNode` on the appropriate
//! templates.

use super::{owning_constructor_block, role_names, splice_generated_function, synth_name};
use crate::hir::root::Root;
use crate::ids::{FunctionId, RelationId};

const CHILD_PATTERNS: &[&str] = &["append$C", "remove$C", "first$C", "last$C"];
const PARENT_CHILD_PATTERNS: &[&str] = &["next$P$C", "prev$P$C"];

pub fn generate(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    let (parent_role, child_role) = role_names(root, relation);
    let parent_template = root.relations.get(relation).parent;
    let block = owning_constructor_block(root, parent_template);

    let mut generated = Vec::new();
    for pattern in CHILD_PATTERNS.iter().chain(PARENT_CHILD_PATTERNS) {
        let name = synth_name(pattern, &parent_role, &child_role);
        generated.push(splice_generated_function(root, block, &name, relation));
    }
    generated
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
    fn doubly_linked_generates_exactly_the_six_scenario_5_identifiers() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let ctor_block = root.block_create(BlockKind::Function, None);
        let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, ctor_block);
        let graph_template = root.template_create(ctor, 32);
        let node_ctor_block = root.block_create(BlockKind::Function, None);
        let node_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, node_ctor_block);
        let node_template = root.template_create(node_ctor, 32);

        let graph_role = root.strings.intern("Graph");
        let node_role = root.strings.intern("Node");
        let mut relation = Relation::new(graph_template, node_template, TransformerKind::DoublyLinked, true);
        relation.parent_role = Some(graph_role);
        relation.child_role = Some(node_role);
        let relation_id = root.relations.alloc(relation);

        let generated = generate(&mut root, relation_id);
        assert_eq!(generated.len(), 6);

        let names: Vec<String> = root
            .blocks
            .get(ctor_block)
            .idents
            .keys()
            .map(|&s| root.strings.resolve(s).to_string())
            .collect();
        for expected in ["appendNode", "removeNode", "firstNode", "lastNode", "nextGraphNode", "prevGraphNode"] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
