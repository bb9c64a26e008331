//! Signature store (§3.1, §4.6.3): a `(Function, argument-datatype tuple)`
//! is hash-consed exactly like `Datatype`, but unlike a `Datatype` a
//! `Signature` keeps accumulating mutable state after it's first created
//! (its `Paramspec`s get retyped, its uniquified function gets attached, its
//! callsite/caller links get set once the binder reaches that call) — so it
//! is interned through a plain key -> arena-slot map (the same dual-mapping
//! shape `string_interning::StringTable` uses) rather than through the
//! immutable `HashedClassRel`, which only exposes `&` access once a value is
//! interned.

use crate::arena::Arena;
use crate::ids::{DatatypeId, FunctionId, SignatureId, StatementId, VariableId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Paramspec {
    pub variable: VariableId,
    pub datatype: DatatypeId,
    /// True once the value is actually produced in generated code (a
    /// template-parameter-only parameter may never materialize, §3.1).
    pub instantiated: bool,
    /// True when assigning this parameter changes the resulting `Class`
    /// (i.e. it's one of the Template's template parameters).
    pub in_template_signature: bool,
}

#[derive(Debug, Clone)]
pub struct Signature {
    pub function: FunctionId,
    pub arg_types: Vec<DatatypeId>,
    pub params: Vec<Paramspec>,
    pub return_type: Option<DatatypeId>,
    /// A per-signature clone of the function's body, attached once
    /// monomorphization actually needs distinct parameter types per call
    /// site (§4.6.3 "uniquification").
    pub uniquified_function: Option<FunctionId>,
    /// Stack-trace bookkeeping (§7): the call that created this signature
    /// and the signature that was executing when it did.
    pub callsite: Option<StatementId>,
    pub caller: Option<SignatureId>,
}

#[derive(Debug, Default)]
pub struct SignatureStore {
    arena: Arena<Signature>,
    index: FxHashMap<(FunctionId, Vec<DatatypeId>), SignatureId>,
}

impl SignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find or create the `Signature` for `(function, arg_types)`. §8 item
    /// 2: for every `(Function, argument-type tuple)` actually constructed
    /// there is exactly one `Signature` — this is where that invariant is
    /// enforced.
    pub fn intern(
        &mut self,
        function: FunctionId,
        arg_types: Vec<DatatypeId>,
        callsite: Option<StatementId>,
        caller: Option<SignatureId>,
    ) -> SignatureId {
        let key = (function, arg_types.clone());
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let id = self.arena.alloc(Signature {
            function,
            arg_types,
            params: Vec::new(),
            return_type: None,
            uniquified_function: None,
            callsite,
            caller,
        });
        self.index.insert(key, id);
        id
    }

    pub fn find(&self, function: FunctionId, arg_types: &[DatatypeId]) -> Option<SignatureId> {
        self.index.get(&(function, arg_types.to_vec())).copied()
    }

    pub fn get(&self, id: SignatureId) -> &Signature {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: SignatureId) -> &mut Signature {
        self.arena.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Walks `caller` links to build the ASCII stack trace described in §7.
    pub fn call_chain(&self, id: SignatureId) -> Vec<SignatureId> {
        let mut chain = vec![id];
        let mut current = self.get(id).caller;
        while let Some(c) = current {
            chain.push(c);
            current = self.get(c).caller;
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Idx;

    #[test]
    fn same_function_and_arg_types_share_one_signature() {
        let mut store = SignatureStore::new();
        let f: FunctionId = Idx::from_raw(0);
        let a: DatatypeId = Idx::from_raw(1);
        let s1 = store.intern(f, vec![a], None, None);
        let s2 = store.intern(f, vec![a], None, None);
        assert_eq!(s1, s2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn distinct_arg_types_get_distinct_signatures() {
        let mut store = SignatureStore::new();
        let f: FunctionId = Idx::from_raw(0);
        let a: DatatypeId = Idx::from_raw(1);
        let b: DatatypeId = Idx::from_raw(2);
        let s1 = store.intern(f, vec![a], None, None);
        let s2 = store.intern(f, vec![b], None, None);
        assert_ne!(s1, s2);
    }

    #[test]
    fn call_chain_walks_caller_links_to_the_root() {
        let mut store = SignatureStore::new();
        let f: FunctionId = Idx::from_raw(0);
        let a: DatatypeId = Idx::from_raw(1);
        let root = store.intern(f, vec![a], None, None);
        let child = store.intern(f, vec![], None, Some(root));
        assert_eq!(store.call_chain(child), vec![child, root]);
    }
}
