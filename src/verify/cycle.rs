//! Relation-graph cycle check (§4.6.6, §8 item 5, §8 scenario 6): no
//! Template marked reference-counted may lie on a cycle of the
//! child-relation graph union the MemberRel graph. MemberRel edges are
//! projected from Class granularity up to their owning Template before the
//! walk, since refcounting is a per-Template classification.

use crate::hir::root::Root;
use crate::ids::TemplateId;
use crate::verify::refcount::reference_counted_templates;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    pub path: Vec<TemplateId>,
}

fn build_adjacency(root: &Root) -> FxHashMap<TemplateId, Vec<TemplateId>> {
    let mut adjacency: FxHashMap<TemplateId, Vec<TemplateId>> = FxHashMap::default();
    for (_, relation) in root.relations.iter() {
        adjacency.entry(relation.parent).or_default().push(relation.child);
    }
    for (_, member_rel) in root.member_rels.iter() {
        let owner_template = root.classes.get(member_rel.owner).template;
        let member_template = root.classes.get(member_rel.member).template;
        adjacency.entry(owner_template).or_default().push(member_template);
    }
    adjacency
}

/// Returns the first cycle found that passes through at least one
/// reference-counted Template, or `None` if the graph is acyclic on every
/// reference-counted node.
pub fn find_reference_counted_cycle(root: &Root) -> Option<CycleError> {
    let adjacency = build_adjacency(root);
    let reference_counted = reference_counted_templates(root);

    let mut visiting: FxHashSet<TemplateId> = FxHashSet::default();
    let mut visited: FxHashSet<TemplateId> = FxHashSet::default();
    let mut stack: Vec<TemplateId> = Vec::new();

    for (start, _) in root.templates.iter() {
        if visited.contains(&start) {
            continue;
        }
        if let Some(cycle) = dfs(start, &adjacency, &mut visiting, &mut visited, &mut stack) {
            if cycle.iter().any(|t| reference_counted.contains(t)) {
                return Some(CycleError { path: cycle });
            }
        }
    }
    None
}

fn dfs(
    node: TemplateId,
    adjacency: &FxHashMap<TemplateId, Vec<TemplateId>>,
    visiting: &mut FxHashSet<TemplateId>,
    visited: &mut FxHashSet<TemplateId>,
    stack: &mut Vec<TemplateId>,
) -> Option<Vec<TemplateId>> {
    visiting.insert(node);
    stack.push(node);

    if let Some(neighbours) = adjacency.get(&node) {
        for &next in neighbours {
            if visiting.contains(&next) {
                let start = stack.iter().position(|&t| t == next).unwrap_or(0);
                let mut cycle = stack[start..].to_vec();
                cycle.push(next);
                return Some(cycle);
            }
            if !visited.contains(&next) {
                if let Some(cycle) = dfs(next, adjacency, visiting, visited, stack) {
                    return Some(cycle);
                }
            }
        }
    }

    stack.pop();
    visiting.remove(&node);
    visited.insert(node);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use crate::hir::function::{FunctionKind, Linkage};
    use crate::hir::relation_entity::{Relation, TransformerKind};
    use crate::hir::root::Root;
    use std::path::PathBuf;

    fn make_template(root: &mut Root) -> TemplateId {
        let block = root.block_create(BlockKind::Function, None);
        let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, block);
        root.template_create(ctor, 32)
    }

    #[test]
    fn two_non_cascade_one_to_one_relations_between_a_and_b_form_a_reference_counted_cycle() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let a = make_template(&mut root);
        let b = make_template(&mut root);
        root.relations.alloc(Relation::new(a, b, TransformerKind::OneToOne, false));
        root.relations.alloc(Relation::new(b, a, TransformerKind::OneToOne, false));

        let cycle = find_reference_counted_cycle(&root).expect("cycle must be detected");
        assert!(cycle.path.contains(&a));
        assert!(cycle.path.contains(&b));
    }

    #[test]
    fn a_cascade_delete_tree_has_no_cycle() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let parent = make_template(&mut root);
        let child = make_template(&mut root);
        root.relations
            .alloc(Relation::new(parent, child, TransformerKind::DoublyLinked, true));
        assert!(find_reference_counted_cycle(&root).is_none());
    }
}
