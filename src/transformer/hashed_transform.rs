//! Hashed / HashedClass transformers: open-addressed, resize-on-load-factor
//! membership. `HashedClass` additionally requires the child to expose
//! `hash()`/equality (used to intern Datatype and Signature, §4.1) so its
//! generated surface adds `find$C` alongside plain membership operations.

use super::{owning_constructor_block, role_names, splice_generated_function};
use crate::hir::root::Root;
use crate::ids::{FunctionId, RelationId};

const HASHED_PATTERNS: &[&str] = &["insert$C", "contains$C", "remove$C"];
const HASHED_CLASS_PATTERNS: &[&str] = &["intern$C", "find$C"];

pub fn generate(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    generate_with(root, relation, HASHED_PATTERNS)
}

pub fn generate_class(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    generate_with(root, relation, HASHED_CLASS_PATTERNS)
}

fn generate_with(root: &mut Root, relation: RelationId, patterns: &[&str]) -> Vec<FunctionId> {
    let (parent_role, child_role) = role_names(root, relation);
    let parent_template = root.relations.get(relation).parent;
    let block = owning_constructor_block(root, parent_template);
    patterns
        .iter()
        .map(|p| splice_generated_function(root, block, &super::synth_name(p, &parent_role, &child_role), relation))
        .collect()
}
