//! Array transformer: densely-packed child list with child-knows-its-index,
//! O(1) removal by self-relocation of the last element. Generates
//! `append$C`, `remove$C`, `index$C`.

use super::{owning_constructor_block, role_names, splice_generated_function};
use crate::hir::root::Root;
use crate::ids::{FunctionId, RelationId};

const PATTERNS: &[&str] = &["append$C", "remove$C", "index$C"];

pub fn generate(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    let (parent_role, child_role) = role_names(root, relation);
    let parent_template = root.relations.get(relation).parent;
    let block = owning_constructor_block(root, parent_template);
    PATTERNS
        .iter()
        .map(|p| splice_generated_function(root, block, &super::synth_name(p, &parent_role, &child_role), relation))
        .collect()
}
