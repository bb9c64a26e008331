//! The Transformer (relation) engine (§2.9, §4.6.5): executes the built-in
//! relation code generators. A Transformer reads and writes the HIR
//! directly, splicing `prependcode`/`appendcode` statements into the
//! parent and child templates' sub-blocks with `$P`/`$C`/`$p`/`$c` naming
//! substitution evaluated against the Relation's role labels. Generated
//! Functions and Statements are tagged and back-linked to the Relation so
//! they can be undone and regenerated.

pub mod array_transform;
pub mod doubly_linked;
pub mod hashed_transform;
pub mod heapq_transform;
pub mod linked_list;
pub mod one_to_one_transform;
pub mod tail_linked;

use crate::hir::block::{Block, BlockKind};
use crate::hir::function::{Function, FunctionKind, Linkage};
use crate::hir::ident::{Ident, IdentKind};
use crate::hir::relation_entity::TransformerKind;
use crate::hir::root::Root;
use crate::hir::statement::{Statement, StatementKind};
use crate::ids::{BlockId, FunctionId, RelationId, TemplateId};
use crate::transformer_log;

/// Substitutes `$P`/`$C` (role label, capitalized) and `$p`/`$c` (role
/// label, first letter lower-cased) in a name pattern, mirroring §4.6.5's
/// naming-substitution pass.
pub fn synth_name(pattern: &str, parent_role: &str, child_role: &str) -> String {
    let cap = |s: &str| -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    };
    let lower_first = |s: &str| -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    };
    pattern
        .replace("$P", &cap(parent_role))
        .replace("$C", &cap(child_role))
        .replace("$p", &lower_first(parent_role))
        .replace("$c", &lower_first(child_role))
}

/// Creates one generated Function named `name`, registers an Ident for it
/// in `owner_block`, and splices one generated `AppendCode` Statement
/// (back-linked to `relation`) into that same block. This is the shared
/// "splice into the template's constructor block" step every built-in
/// transformer performs per identifier it synthesizes.
pub fn splice_generated_function(root: &mut Root, owner_block: BlockId, name: &str, relation: RelationId) -> FunctionId {
    transformer_log!("splicing generated function {} for relation {:?}", name, relation);
    let symbol = root.strings.intern(name);
    let fn_block = root.blocks.alloc(Block::new(BlockKind::Function, Some(owner_block)));
    let function = root
        .functions
        .alloc(Function::new(FunctionKind::Final, Linkage::Module, fn_block));
    let ident = root.idents.alloc(Ident::new(symbol, owner_block, IdentKind::Function(function)));
    root.blocks.get_mut(owner_block).define(symbol, ident);

    let stmt = root
        .statements
        .alloc(Statement::generated_by(StatementKind::AppendCode, relation));
    root.blocks.get_mut(owner_block).statements.push(stmt);
    root.relations.get_mut(relation).generated_statements.push(stmt);

    function
}

pub fn owning_constructor_block(root: &Root, template: TemplateId) -> BlockId {
    let ctor = root.templates.get(template).owning_constructor;
    root.functions.get(ctor).block
}

/// Dispatches a Relation to its Transformer and returns every Function the
/// generator synthesized.
pub fn run(root: &mut Root, relation: RelationId) -> Vec<FunctionId> {
    match root.relations.get(relation).transformer {
        TransformerKind::LinkedList => linked_list::generate(root, relation),
        TransformerKind::TailLinked => tail_linked::generate(root, relation),
        TransformerKind::DoublyLinked => doubly_linked::generate(root, relation),
        TransformerKind::Array => array_transform::generate(root, relation),
        TransformerKind::Hashed => hashed_transform::generate(root, relation),
        TransformerKind::HashedClass => hashed_transform::generate_class(root, relation),
        TransformerKind::OneToOne => one_to_one_transform::generate(root, relation),
        TransformerKind::Heapq => heapq_transform::generate(root, relation),
    }
}

pub(crate) fn role_names(root: &Root, relation: RelationId) -> (String, String) {
    let rel = root.relations.get(relation);
    let parent = rel
        .parent_role
        .and_then(|s| root.strings.try_resolve(s))
        .unwrap_or("Parent")
        .to_string();
    let child = rel
        .child_role
        .and_then(|s| root.strings.try_resolve(s))
        .unwrap_or("Child")
        .to_string();
    (parent, child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_name_substitutes_role_labels_in_every_case() {
        assert_eq!(synth_name("append$C", "Graph", "Node"), "appendNode");
        assert_eq!(synth_name("next$P$C", "Graph", "Node"), "nextGraphNode");
        assert_eq!(synth_name("$p.$c", "Graph", "Node"), "graph.node");
    }
}
