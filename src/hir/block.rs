//! Block (§3.1): an ordered list of Statements, owning an Ident hash table
//! and a Variable list. `scopeBlock` walks `parent` links past
//! STATEMENT-blocks until it reaches the owning FUNCTION- or CLASS-block.

use crate::ids::{BlockId, ClassId, FunctionId, IdentId, StatementId, VariableId};
use crate::string_interning::StringId;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Function,
    Statement,
    Class,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    pub parent: Option<BlockId>,
    pub owning_function: Option<FunctionId>,
    pub owning_class: Option<ClassId>,
    pub statements: Vec<StatementId>,
    pub child_functions: Vec<FunctionId>,
    /// Invariant (§8 item 6): an Ident appears in at most one Block's table.
    pub idents: FxHashMap<StringId, IdentId>,
    pub variables: Vec<VariableId>,
}

impl Block {
    pub fn new(kind: BlockKind, parent: Option<BlockId>) -> Self {
        Block {
            kind,
            parent,
            owning_function: None,
            owning_class: None,
            statements: Vec::new(),
            child_functions: Vec::new(),
            idents: FxHashMap::default(),
            variables: Vec::new(),
        }
    }

    /// Insert `ident` under `symbol`, enforcing the at-most-one-entry
    /// invariant. Returns the previous occupant, if any (a duplicate
    /// definition in the same scope — the binder turns that into a
    /// `CompilerError`, it is not silently overwritten here).
    pub fn define(&mut self, symbol: StringId, ident: IdentId) -> Option<IdentId> {
        self.idents.insert(symbol, ident)
    }

    pub fn lookup(&self, symbol: StringId) -> Option<IdentId> {
        self.idents.get(&symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Idx;

    #[test]
    fn defining_the_same_symbol_twice_reports_the_shadowed_ident() {
        let mut block = Block::new(BlockKind::Function, None);
        let a: IdentId = Idx::from_raw(0);
        let b: IdentId = Idx::from_raw(1);
        let sym = StringId::from_u32(0);
        assert!(block.define(sym, a).is_none());
        assert_eq!(block.define(sym, b), Some(a));
        assert_eq!(block.lookup(sym), Some(b));
    }
}
