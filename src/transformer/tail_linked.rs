//! TailLinked transformer: same O(1) append/remove contract as LinkedList,
//! kept as a distinct Transformer only so the relation-graph file (§6.4)
//! can record which underlying relation kind a `.dd` line targets.

use super::{owning_constructor_block, role_names, splice_generated_function};
use crate::hir::root::Root;
use crate::ids::{FunctionId, RelationId};

const PATTERNS: &[&str] = &["append$C", "remove$C"];

pub fn generate(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    let (parent_role, child_role) = role_names(root, relation);
    let parent_template = root.relations.get(relation).parent;
    let block = owning_constructor_block(root, parent_template);
    PATTERNS
        .iter()
        .map(|p| splice_generated_function(root, block, &super::synth_name(p, &parent_role, &child_role), relation))
        .collect()
}
