//! Root (§3.1, §5): the singleton owning everything, directly or
//! transitively via cascade-delete relations. `Root::new` / `Drop for Root`
//! stand in for the teacher-adjacent `xxxStart()`/`xxxStop()` module
//! lifecycle (§9): one owned context threaded through the pipeline instead
//! of mutable globals.

use crate::arena::Arena;
use crate::binder::binding::Binding;
use crate::config::CompileConfig;
use crate::datatype::DatatypeStore;
use crate::event::Event;
use crate::hir::block::Block;
use crate::hir::class::Class;
use crate::hir::expression::Expression;
use crate::hir::function::Function;
use crate::hir::ident::Ident;
use crate::hir::relation_entity::{MemberRel, Relation};
use crate::hir::statement::Statement;
use crate::hir::template::Template;
use crate::hir::variable::Variable;
use crate::ids::{BindingId, EventId};
use crate::messages::errors::CompilerMessages;
use crate::primitives::FilepathTable;
use crate::signature::SignatureStore;
use crate::string_interning::StringTable;
use rustc_hash::FxHashMap;

pub struct Root {
    pub config: CompileConfig,

    pub blocks: Arena<Block>,
    pub functions: Arena<Function>,
    pub templates: Arena<Template>,
    pub classes: Arena<Class>,
    pub variables: Arena<Variable>,
    pub idents: Arena<Ident>,
    pub statements: Arena<Statement>,
    pub expressions: Arena<Expression>,
    pub relations: Arena<Relation>,
    pub member_rels: Arena<MemberRel>,
    pub events: Arena<Event>,
    pub bindings: Arena<Binding>,

    pub datatypes: DatatypeStore,
    pub signatures: SignatureStore,
    pub filepaths: FilepathTable,
    pub strings: StringTable,

    /// The fixpoint scheduler's ready queue (§5): bindings popped in
    /// insertion order, no priority.
    pub ready_queue: Vec<BindingId>,
    /// §8 item 3: every blocked Binding's attached Event must appear here,
    /// and vice versa.
    pub blocked: FxHashMap<EventId, Vec<BindingId>>,

    pub messages: CompilerMessages,
}

impl Root {
    pub fn new(config: CompileConfig) -> Self {
        Root {
            config,
            blocks: Arena::new(),
            functions: Arena::new(),
            templates: Arena::new(),
            classes: Arena::new(),
            variables: Arena::new(),
            idents: Arena::new(),
            statements: Arena::new(),
            expressions: Arena::new(),
            relations: Arena::new(),
            member_rels: Arena::new(),
            events: Arena::new(),
            bindings: Arena::new(),
            datatypes: DatatypeStore::new(),
            signatures: SignatureStore::new(),
            filepaths: FilepathTable::new(),
            strings: StringTable::new(),
            ready_queue: Vec::new(),
            blocked: FxHashMap::default(),
            messages: CompilerMessages::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn a_fresh_root_owns_empty_stores() {
        let root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        assert_eq!(root.blocks.len(), 0);
        assert_eq!(root.datatypes.len(), 0);
        assert!(!root.messages.has_errors());
    }
}
