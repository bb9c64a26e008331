//! Ident (§3.1): lives in exactly one Block's hash table, keyed by symbol.
//! `Undefined` exists purely as a wait point for forward references — it
//! carries the Event that wakes every Binding blocked on this name.

use crate::ids::{BlockId, EventId, FunctionId, VariableId};
use crate::string_interning::StringId;

#[derive(Debug, Clone, Copy)]
pub enum IdentKind {
    Function(FunctionId),
    Variable(VariableId),
    Undefined(EventId),
}

#[derive(Debug, Clone)]
pub struct Ident {
    pub symbol: StringId,
    pub block: BlockId,
    pub kind: IdentKind,
}

impl Ident {
    pub fn new(symbol: StringId, block: BlockId, kind: IdentKind) -> Self {
        Ident { symbol, block, kind }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.kind, IdentKind::Undefined(_))
    }
}
