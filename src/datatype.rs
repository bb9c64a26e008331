//! The Datatype store (§4.3): hash-consed by structural equality, so
//! identity comparison of two `DatatypeId`s is semantic type equality
//! (§9 "Hash-consing for immutable shared values"). Built directly on the
//! `HashedClassRel` relation from the relation runtime (§4.1's
//! "HashedClass... used to intern Datatype and Signature"), the same way
//! `string_interning::StringTable` hash-conses symbol text — this module is
//! that pattern applied one level up, to structural types instead of
//! strings.

use crate::ids::{ClassId, DatatypeId, TemplateId};
use crate::relations::{HashKey, HashedClassRel};
use crate::string_interning::StringId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatatypeKind {
    Bool,
    String,
    Uint(u32),
    Int(u32),
    Modint(u32),
    Float(u32),
    Array(DatatypeId),
    Tuple(Vec<DatatypeId>),
    Struct(Vec<(StringId, DatatypeId)>),
    Enum(Vec<(StringId, DatatypeId)>),
    EnumClass(Vec<StringId>),
    Function(Vec<DatatypeId>, DatatypeId),
    Funcptr(Vec<DatatypeId>, DatatypeId),
    /// Not concrete: a class definition that hasn't been resolved to one
    /// monomorphized `Class` yet.
    Template(TemplateId),
    Class(ClassId),
    /// Not concrete: stays this way until the variable it initializes
    /// acquires a concrete class from elsewhere (§4.6.3).
    Null(TemplateId),
    None,
    /// The type of a type-denoting expression (`typeof`, `UintType`, ...).
    Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Datatype {
    pub kind: DatatypeKind,
    pub secret: bool,
    pub nullable: bool,
}

impl HashKey for Datatype {
    type Key = Datatype;
    fn key(&self) -> Datatype {
        self.clone()
    }
}

impl Datatype {
    /// Non-concrete types must still be refined to a `Class` before code
    /// generation; the binder re-queues dependents of a Null- or
    /// Template-typed expression until this turns true (§4.6.3).
    pub fn is_concrete(&self) -> bool {
        !matches!(self.kind, DatatypeKind::Template(_) | DatatypeKind::Null(_))
    }
}

#[derive(Debug, Default)]
pub struct DatatypeStore {
    store: HashedClassRel<Datatype>,
}

macro_rules! intern {
    ($self:ident, $kind:expr) => {{
        let dt = Datatype { kind: $kind, secret: false, nullable: false };
        let key = dt.clone();
        $self.store.intern_with(key, move || dt)
    }};
}

impl DatatypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: DatatypeId) -> &Datatype {
        self.store.get(id)
    }

    pub fn bool_datatype(&mut self) -> DatatypeId {
        intern!(self, DatatypeKind::Bool)
    }
    pub fn string_datatype(&mut self) -> DatatypeId {
        intern!(self, DatatypeKind::String)
    }
    pub fn uint_datatype(&mut self, width: u32) -> DatatypeId {
        intern!(self, DatatypeKind::Uint(width))
    }
    pub fn int_datatype(&mut self, width: u32) -> DatatypeId {
        intern!(self, DatatypeKind::Int(width))
    }
    pub fn modint_datatype(&mut self, width: u32) -> DatatypeId {
        intern!(self, DatatypeKind::Modint(width))
    }
    pub fn float_datatype(&mut self, width: u32) -> DatatypeId {
        intern!(self, DatatypeKind::Float(width))
    }
    pub fn array_datatype(&mut self, elem: DatatypeId) -> DatatypeId {
        intern!(self, DatatypeKind::Array(elem))
    }
    pub fn tuple_datatype(&mut self, elems: Vec<DatatypeId>) -> DatatypeId {
        intern!(self, DatatypeKind::Tuple(elems))
    }
    pub fn struct_datatype(&mut self, fields: Vec<(StringId, DatatypeId)>) -> DatatypeId {
        intern!(self, DatatypeKind::Struct(fields))
    }
    pub fn enum_datatype(&mut self, variants: Vec<(StringId, DatatypeId)>) -> DatatypeId {
        intern!(self, DatatypeKind::Enum(variants))
    }
    pub fn enum_class_datatype(&mut self, names: Vec<StringId>) -> DatatypeId {
        intern!(self, DatatypeKind::EnumClass(names))
    }
    pub fn function_datatype(&mut self, params: Vec<DatatypeId>, ret: DatatypeId) -> DatatypeId {
        intern!(self, DatatypeKind::Function(params, ret))
    }
    pub fn funcptr_datatype(&mut self, params: Vec<DatatypeId>, ret: DatatypeId) -> DatatypeId {
        intern!(self, DatatypeKind::Funcptr(params, ret))
    }
    pub fn template_datatype(&mut self, template: TemplateId) -> DatatypeId {
        intern!(self, DatatypeKind::Template(template))
    }
    pub fn class_datatype(&mut self, class: ClassId) -> DatatypeId {
        intern!(self, DatatypeKind::Class(class))
    }
    pub fn null_datatype(&mut self, template: TemplateId) -> DatatypeId {
        intern!(self, DatatypeKind::Null(template))
    }
    pub fn none_datatype(&mut self) -> DatatypeId {
        intern!(self, DatatypeKind::None)
    }
    pub fn expr_datatype(&mut self) -> DatatypeId {
        intern!(self, DatatypeKind::Expr)
    }

    pub fn set_secret(&mut self, id: DatatypeId, secret: bool) -> DatatypeId {
        let mut dt = self.store.get(id).clone();
        dt.secret = secret;
        let key = dt.clone();
        self.store.intern_with(key, move || dt)
    }

    pub fn set_nullable(&mut self, id: DatatypeId, nullable: bool) -> DatatypeId {
        let mut dt = self.store.get(id).clone();
        dt.nullable = nullable;
        let key = dt.clone();
        self.store.intern_with(key, move || dt)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structurally_equal_requests_collapse_to_one_entry() {
        let mut store = DatatypeStore::new();
        let a = store.uint_datatype(32);
        let b = store.uint_datatype(32);
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn distinct_widths_are_distinct_entries() {
        let mut store = DatatypeStore::new();
        let a = store.uint_datatype(32);
        let b = store.uint_datatype(64);
        assert_ne!(a, b);
    }

    #[test]
    fn set_secret_produces_a_distinct_hash_consed_entry() {
        let mut store = DatatypeStore::new();
        let public = store.uint_datatype(32);
        let secret = store.set_secret(public, true);
        assert_ne!(public, secret);
        assert!(store.get(secret).secret);
        assert!(!store.get(public).secret);
        // Re-requesting the same secret shape returns the same entry.
        let secret_again = store.set_secret(public, true);
        assert_eq!(secret, secret_again);
    }

    #[test]
    fn template_and_null_are_not_concrete() {
        let mut store = DatatypeStore::new();
        let template_id = crate::arena::Idx::from_raw(0);
        let t = store.template_datatype(template_id);
        let n = store.null_datatype(template_id);
        assert!(!store.get(t).is_concrete());
        assert!(!store.get(n).is_concrete());
        let b = store.bool_datatype();
        assert!(store.get(b).is_concrete());
    }
}
