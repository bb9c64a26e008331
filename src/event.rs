//! Event (§3.1, §4.6): the three wait conditions a Binding can block on.
//! Lives at the same leaf layer as `signature.rs` — both `hir::Root` and
//! `binder::scheduler` need it, and it has no dependency on either.

use crate::ids::{IdentId, SignatureId, VariableId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Fires once a Signature's return-type Datatype becomes concrete.
    SignatureReturnType(SignatureId),
    /// Fires once a Variable's datatype is assigned.
    VariableAssigned(VariableId),
    /// Fires once a forward-referenced Ident stops being `Undefined`.
    UndefinedIdentDefined(IdentId),
}

#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub kind: EventKind,
    pub fired: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Event { kind, fired: false }
    }
}
