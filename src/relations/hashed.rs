//! Hashed / HashedClass relations: open-addressed membership, resized on
//! load factor, used directly by the relation runtime for simple child sets
//! and — via `HashedClassRel` — by the Datatype and Signature interning
//! tables (§4.1, §4.3, §4.6.3), where the "child class" is required to
//! expose a structural `hash()`/equality so two structurally-equal values
//! collapse onto the same arena slot.

use crate::arena::{Arena, Idx};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A plain hashed relation: set-like membership of arena handles, O(1)
/// insert/remove/contains. `rustc_hash`'s `FxHashMap` already resizes on
/// load factor, so this is a thin, intention-revealing wrapper over it
/// rather than a hand-rolled open-addressing table.
pub struct HashedRel<C> {
    members: FxHashMap<Idx<C>, ()>,
}

impl<C: Eq + Hash + Copy> Default for HashedRel<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Eq + Hash + Copy> HashedRel<C> {
    pub fn new() -> Self {
        HashedRel {
            members: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, child: Idx<C>) {
        self.members.insert(child, ());
    }

    pub fn remove(&mut self, child: Idx<C>) {
        self.members.remove(&child);
    }

    pub fn contains(&self, child: Idx<C>) -> bool {
        self.members.contains_key(&child)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Idx<C>> + '_ {
        self.members.keys().copied()
    }

    pub fn iter_safe(&self) -> std::vec::IntoIter<Idx<C>> {
        self.members.keys().copied().collect::<Vec<_>>().into_iter()
    }
}

/// A value interned by structural equality: `key()` must be stable and
/// `Eq + Hash` so that two logically-equal values collapse onto one arena
/// slot (the hash-consing invariant of §8, item 1).
pub trait HashKey {
    type Key: Eq + Hash + Clone;
    fn key(&self) -> Self::Key;
}

/// Hash-consing store: structural key -> unique arena slot. Used by
/// `datatype::DatatypeStore` and `signature::SignatureStore`.
pub struct HashedClassRel<C: HashKey> {
    arena: Arena<C>,
    index: FxHashMap<C::Key, Idx<C>>,
}

impl<C: HashKey> Default for HashedClassRel<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HashKey> HashedClassRel<C> {
    pub fn new() -> Self {
        HashedClassRel {
            arena: Arena::new(),
            index: FxHashMap::default(),
        }
    }

    /// Return the existing slot for a structurally-equal value, or insert
    /// `value` as a new one. `key` is computed before insertion so callers
    /// that already know the key (avoiding a second `HashKey::key()` call
    /// against a value they're about to move) can pass it in.
    pub fn intern_with(&mut self, key: C::Key, make: impl FnOnce() -> C) -> Idx<C> {
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let value = make();
        debug_assert!(value.key() == key, "HashKey::key() must be stable");
        let idx = self.arena.alloc(value);
        self.index.insert(key, idx);
        idx
    }

    pub fn get(&self, idx: Idx<C>) -> &C {
        self.arena.get(idx)
    }

    pub fn find(&self, key: &C::Key) -> Option<Idx<C>> {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx<C>, &C)> {
        self.arena.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Interned(i64);

    impl HashKey for Interned {
        type Key = i64;
        fn key(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn interning_the_same_key_twice_returns_the_same_slot() {
        let mut store: HashedClassRel<Interned> = HashedClassRel::new();
        let a = store.intern_with(5, || Interned(5));
        let b = store.intern_with(5, || Interned(5));
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn interning_distinct_keys_allocates_distinct_slots() {
        let mut store: HashedClassRel<Interned> = HashedClassRel::new();
        let a = store.intern_with(5, || Interned(5));
        let b = store.intern_with(6, || Interned(6));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
